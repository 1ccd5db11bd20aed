//! Local placement checks for interactive editing.
//!
//! These are the fast-path entry points: given only a candidate element
//! type and the type of the prospective parent, they answer cheaply and
//! synchronously whether the insertion could be legal. Ancestor
//! requirements deeper than one level are checked optimistically (a
//! static walk over the rule table decides whether the requirement is
//! still satisfiable above the target) and confirmed for real by the
//! tree validator, which sees the full ancestor path. Interactive
//! editing needs the cheap answer; export needs the exact one.

use std::collections::HashSet;

use crate::catalog::{self, ComponentType};
use crate::constraints::{self, ConstraintRule};
use crate::error::ConstraintErrorCode;
use crate::messages::constraint_error_message;
use crate::types::results::{PlacementCheckResult, PlacementPosition};

/// Check whether `element` may be inserted at `position` relative to
/// `target`.
///
/// For [`PlacementPosition::Before`]/[`PlacementPosition::After`] the
/// caller supplies the parent of the sibling position as `target`; the
/// evaluation is identical to `Inside` since a same-level insertion has
/// the same parent-compatibility requirements.
///
/// Pure and deterministic; never panics for any pair of types. All
/// failures are encoded as `valid: false` results.
pub fn can_place_element(
    element: ComponentType,
    target: ComponentType,
    _position: PlacementPosition,
) -> PlacementCheckResult {
    let containment = can_contain_child(target, element);
    if !containment.valid {
        return containment;
    }

    // The element's own parent rules against the target type.
    for def in constraints::constraints_for(element).parent.unwrap_or_default() {
        match def.rule {
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly =>
            {
                if !def.applies_to.contains(&target) {
                    return PlacementCheckResult::reject(
                        ConstraintErrorCode::InvalidParent,
                        constraint_error_message(
                            element,
                            target,
                            ConstraintErrorCode::InvalidParent,
                        ),
                    );
                }
            }
            ConstraintRule::Forbid => {
                if def.applies_to.contains(&target) {
                    return PlacementCheckResult::reject(
                        ConstraintErrorCode::ForbiddenNesting,
                        constraint_error_message(
                            element,
                            target,
                            ConstraintErrorCode::ForbiddenNesting,
                        ),
                    );
                }
            }
            // A single parent slot cannot exceed one match.
            ConstraintRule::ZeroOrOne => {}
        }
    }

    // The element's ancestor rules. Forbid is exact at this level (the
    // target is a known ancestor); requirements are optimistic.
    for def in constraints::constraints_for(element)
        .ancestors
        .unwrap_or_default()
    {
        match def.rule {
            ConstraintRule::Forbid => {
                if def.applies_to.contains(&target) {
                    return PlacementCheckResult::reject(
                        ConstraintErrorCode::ForbiddenNesting,
                        constraint_error_message(
                            element,
                            target,
                            ConstraintErrorCode::ForbiddenNesting,
                        ),
                    );
                }
            }
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly =>
            {
                let mut seen = HashSet::new();
                if !ancestor_satisfiable(target, def.applies_to, &mut seen) {
                    let required = def.applies_to[0];
                    return PlacementCheckResult::reject(
                        ConstraintErrorCode::MissingAncestor,
                        constraint_error_message(
                            element,
                            required,
                            ConstraintErrorCode::MissingAncestor,
                        ),
                    );
                }
            }
            ConstraintRule::ZeroOrOne => {}
        }
    }

    PlacementCheckResult::ok()
}

/// The children-rule half of [`can_place_element`], usable standalone
/// (e.g. to grey out invalid drop targets without a concrete insertion
/// position).
pub fn can_contain_child(parent: ComponentType, child: ComponentType) -> PlacementCheckResult {
    if !catalog::definition(parent).is_container {
        return PlacementCheckResult::reject(
            ConstraintErrorCode::InvalidParent,
            constraint_error_message(child, parent, ConstraintErrorCode::InvalidParent),
        );
    }

    if let Some(allow) = constraints::allowed_children(parent) {
        if !allow.contains(&child) {
            return PlacementCheckResult::reject(
                ConstraintErrorCode::ForbiddenNesting,
                constraint_error_message(child, parent, ConstraintErrorCode::ForbiddenNesting),
            );
        }
    }

    for def in constraints::constraints_for(parent)
        .children
        .unwrap_or_default()
    {
        if def.rule == ConstraintRule::Forbid && def.applies_to.contains(&child) {
            return PlacementCheckResult::reject(
                ConstraintErrorCode::ForbiddenNesting,
                constraint_error_message(child, parent, ConstraintErrorCode::ForbiddenNesting),
            );
        }
    }

    if constraints::forbids_descendant(parent, child) {
        return PlacementCheckResult::reject(
            ConstraintErrorCode::ForbiddenDescendant,
            constraint_error_message(parent, child, ConstraintErrorCode::ForbiddenDescendant),
        );
    }

    PlacementCheckResult::ok()
}

/// Parent types an editor should offer for `ty`, or `None` when its
/// parent is unconstrained. Derived from the parent rules, falling back
/// to required-ancestor sets (the required ancestor is always a legal
/// direct parent). Order follows [`ComponentType::ALL`].
pub fn valid_parent_types(ty: ComponentType) -> Option<Vec<ComponentType>> {
    let bundle = constraints::constraints_for(ty);

    let mut candidates: Vec<ComponentType> = Vec::new();
    let mut constrained = false;
    for def in bundle.parent.unwrap_or_default() {
        if matches!(
            def.rule,
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly
        ) {
            constrained = true;
            candidates.extend(def.applies_to.iter().copied());
        }
    }
    if !constrained {
        for def in bundle.ancestors.unwrap_or_default() {
            if matches!(
                def.rule,
                ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne
            ) {
                constrained = true;
                candidates.extend(def.applies_to.iter().copied());
            }
        }
    }
    if !constrained {
        return None;
    }

    let result = ComponentType::ALL
        .iter()
        .copied()
        .filter(|candidate| {
            candidates.contains(candidate)
                && can_place_element(ty, *candidate, PlacementPosition::Inside).valid
        })
        .collect();
    Some(result)
}

/// Child types an editor should offer inside `ty`: the allow-list when
/// children are strict, an empty list for non-containers, `None` when
/// unconstrained. Order follows [`ComponentType::ALL`].
pub fn valid_child_types(ty: ComponentType) -> Option<Vec<ComponentType>> {
    if !catalog::definition(ty).is_container {
        return Some(Vec::new());
    }
    constraints::allowed_children(ty).map(|allow| {
        ComponentType::ALL
            .iter()
            .copied()
            .filter(|candidate| {
                allow.contains(candidate) && can_contain_child(ty, *candidate).valid
            })
            .collect()
    })
}

/// Static reachability of a required-ancestor set from a target type.
///
/// Walks the rule table upward from `target` through its own required
/// parent/ancestor sets. A type whose upward relations are unconstrained
/// may sit under anything, so the requirement is treated as satisfiable
/// (the tree validator settles it exactly). Returns false only when
/// every upward chain is constrained away from the required set.
fn ancestor_satisfiable(
    target: ComponentType,
    required: &[ComponentType],
    seen: &mut HashSet<ComponentType>,
) -> bool {
    if required.contains(&target) {
        return true;
    }
    if !seen.insert(target) {
        return false;
    }

    let bundle = constraints::constraints_for(target);
    let mut upward_sets: Vec<&'static [ComponentType]> = Vec::new();
    for def in bundle.parent.unwrap_or_default() {
        if matches!(
            def.rule,
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly
        ) {
            upward_sets.push(def.applies_to);
        }
    }
    for def in bundle.ancestors.unwrap_or_default() {
        if matches!(
            def.rule,
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne
        ) {
            upward_sets.push(def.applies_to);
        }
    }

    if upward_sets.is_empty() {
        return true;
    }

    upward_sets
        .iter()
        .any(|set| set.iter().any(|ty| ancestor_satisfiable(*ty, required, seen)))
}
