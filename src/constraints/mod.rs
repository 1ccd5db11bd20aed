//! Declarative structural rules: which component types may appear in
//! which tree relation to one another.
//!
//! Rules are attached to one of four relations, differing in required
//! tree distance:
//! - `parent` / `children` - exactly one hop
//! - `ancestors` / `descendants` - any number of hops
//!
//! A slider slide must have a Slider Mask *ancestor* (levels may be
//! skipped), a Dropdown Toggle must be a direct *child* of a Dropdown,
//! and a Slider may never contain another Slider anywhere beneath it
//! (*descendant* rule). Collapsing these into one relation would either
//! over- or under-constrain real layouts, so the table keeps all four.
//!
//! The table itself is literal data in a private submodule; this module
//! defines the rule language and the derived predicates.

mod table;

use serde::Serialize;

use crate::catalog::ComponentType;

/// Cardinality of a relation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintRule {
    /// At least one member of the set must appear in the relation.
    AtLeastOne,
    /// Exactly one member of the set must appear in the relation.
    /// For the `ancestors` relation only the zero case is an error;
    /// repetition across levels is accepted.
    ExactlyOne,
    /// At most one member of the set may appear in the relation.
    ZeroOrOne,
    /// No member of the set may appear in the relation.
    Forbid,
    /// The relation is a closed allow-list: every member of the relation
    /// must belong to the set. Only meaningful on `children`.
    RequireOnly,
}

/// The atomic unit of the rule language: one cardinality applied to a
/// set of component types.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDef {
    pub applies_to: &'static [ComponentType],
    pub rule: ConstraintRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

/// The full rule bundle for one component type.
///
/// `None` for a relation means unconstrained, which is distinct from a
/// rule that forbids all matches.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConstraints {
    pub ancestors: Option<&'static [ConstraintDef]>,
    pub descendants: Option<&'static [ConstraintDef]>,
    pub children: Option<&'static [ConstraintDef]>,
    pub parent: Option<&'static [ConstraintDef]>,
    /// Nodes of this type may never be moved to a different parent by
    /// tree-editing operations. Documented here, enforced by the editing
    /// layer.
    pub must_be_pinned_to_parent: bool,
    /// Children materialized automatically when the component is
    /// inserted by an editor.
    pub structural_children: Option<&'static [ComponentType]>,
}

impl ComponentConstraints {
    pub const EMPTY: ComponentConstraints = ComponentConstraints {
        ancestors: None,
        descendants: None,
        children: None,
        parent: None,
        must_be_pinned_to_parent: false,
        structural_children: None,
    };
}

/// The rule bundle for a component type. Types without special rules
/// (most basic containers) get the shared empty bundle, not an error.
pub fn constraints_for(ty: ComponentType) -> &'static ComponentConstraints {
    table::TABLE_INDEX
        .get(&ty)
        .copied()
        .unwrap_or(&ComponentConstraints::EMPTY)
}

/// True iff `ty` carries an `AtLeastOne`/`ExactlyOne` ancestor rule
/// whose set contains `ancestor`.
pub fn requires_ancestor(ty: ComponentType, ancestor: ComponentType) -> bool {
    constraints_for(ty)
        .ancestors
        .unwrap_or_default()
        .iter()
        .any(|d| {
            matches!(
                d.rule,
                ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne
            ) && d.applies_to.contains(&ancestor)
        })
}

/// True iff a `Forbid` rule on `ty`'s descendants names `descendant`.
pub fn forbids_descendant(ty: ComponentType, descendant: ComponentType) -> bool {
    constraints_for(ty)
        .descendants
        .unwrap_or_default()
        .iter()
        .any(|d| d.rule == ConstraintRule::Forbid && d.applies_to.contains(&descendant))
}

/// True iff `ty`'s children form a closed allow-list.
pub fn has_strict_children(ty: ComponentType) -> bool {
    constraints_for(ty)
        .children
        .unwrap_or_default()
        .iter()
        .any(|d| d.rule == ConstraintRule::RequireOnly)
}

/// The child allow-list implied by `RequireOnly` children rules, or
/// `None` when children are not allow-listed. Forbid/AtLeastOne rules
/// do not imply an allow-list.
pub fn allowed_children(ty: ComponentType) -> Option<Vec<ComponentType>> {
    let defs = constraints_for(ty).children?;
    let mut allow: Vec<ComponentType> = Vec::new();
    let mut found = false;
    for def in defs {
        if def.rule == ConstraintRule::RequireOnly {
            found = true;
            for member in def.applies_to {
                if !allow.contains(member) {
                    allow.push(*member);
                }
            }
        }
    }
    found.then_some(allow)
}

/// True iff nodes of this type are pinned to the parent they were
/// created under.
pub fn is_pinned_to_parent(ty: ComponentType) -> bool {
    constraints_for(ty).must_be_pinned_to_parent
}

/// Children an editor materializes together with this component, if any.
pub fn structural_children(ty: ComponentType) -> Option<&'static [ComponentType]> {
    constraints_for(ty).structural_children
}
