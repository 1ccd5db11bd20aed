//! Data-integrity assertions over the static catalog and rule table.

use placement_engine::{
    allowed_children, by_category, constraints_for, definition, has_strict_children,
    is_valid_component_type, structural_children, ComponentCategory, ComponentType,
    ConstraintRule,
};

#[test]
fn every_component_type_has_a_complete_definition() {
    for ty in ComponentType::ALL {
        let def = definition(*ty);
        assert!(!def.display_name.is_empty(), "{ty:?} has no display name");
        assert!(!def.render_tags.is_empty(), "{ty:?} has no render tags");
        assert!(
            def.render_tags.iter().all(|t| !t.is_empty()),
            "{ty:?} has an empty render tag"
        );
    }
}

#[test]
fn display_names_are_unique() {
    let mut seen = std::collections::HashMap::new();
    for ty in ComponentType::ALL {
        let name = definition(*ty).display_name;
        if let Some(previous) = seen.insert(name, *ty) {
            panic!("display name {name:?} used by both {previous:?} and {ty:?}");
        }
    }
}

#[test]
fn canonical_tags_round_trip_through_the_boundary_check() {
    for ty in ComponentType::ALL {
        assert!(is_valid_component_type(ty.as_str()));
    }
    assert!(!is_valid_component_type("NotAComponent"));
}

#[test]
fn every_category_is_inhabited() {
    for category in [
        ComponentCategory::Layout,
        ComponentCategory::Typography,
        ComponentCategory::Media,
        ComponentCategory::Navigation,
        ComponentCategory::Dropdown,
        ComponentCategory::Tabs,
        ComponentCategory::Slider,
        ComponentCategory::Forms,
        ComponentCategory::Cms,
    ] {
        assert!(
            !by_category(category).is_empty(),
            "no components in {category:?}"
        );
    }
}

// Self-nesting prohibitions must be declared from both directions: a
// Forbid under `descendants` naming a type requires the mirrored Forbid
// under that type's `ancestors`, and vice versa. The validator relies
// on the pair to attach errors to both the owner and the offender.
#[test]
fn forbid_rules_have_mirrors_on_the_counterpart_type() {
    for ty in ComponentType::ALL {
        let bundle = constraints_for(*ty);

        for def in bundle.descendants.unwrap_or_default() {
            if def.rule != ConstraintRule::Forbid {
                continue;
            }
            for counterpart in def.applies_to {
                let mirrored = constraints_for(*counterpart)
                    .ancestors
                    .unwrap_or_default()
                    .iter()
                    .any(|d| d.rule == ConstraintRule::Forbid && d.applies_to.contains(ty));
                assert!(
                    mirrored,
                    "{ty:?} forbids descendant {counterpart:?} without the ancestor mirror"
                );
            }
        }

        for def in bundle.ancestors.unwrap_or_default() {
            if def.rule != ConstraintRule::Forbid {
                continue;
            }
            for counterpart in def.applies_to {
                let mirrored = constraints_for(*counterpart)
                    .descendants
                    .unwrap_or_default()
                    .iter()
                    .any(|d| d.rule == ConstraintRule::Forbid && d.applies_to.contains(ty));
                assert!(
                    mirrored,
                    "{ty:?} forbids ancestor {counterpart:?} without the descendant mirror"
                );
            }
        }
    }
}

#[test]
fn rule_sets_never_reference_an_empty_type_list() {
    for ty in ComponentType::ALL {
        let bundle = constraints_for(*ty);
        for defs in [
            bundle.ancestors,
            bundle.descendants,
            bundle.children,
            bundle.parent,
        ] {
            for def in defs.unwrap_or_default() {
                assert!(!def.applies_to.is_empty(), "empty rule set on {ty:?}");
            }
        }
    }
}

#[test]
fn structural_children_respect_their_own_allow_list() {
    for ty in ComponentType::ALL {
        let Some(children) = structural_children(*ty) else {
            continue;
        };
        assert!(
            definition(*ty).is_container,
            "{ty:?} declares structural children but is not a container"
        );
        if has_strict_children(*ty) {
            let allow = allowed_children(*ty).unwrap();
            for child in children {
                assert!(
                    allow.contains(child),
                    "structural child {child:?} of {ty:?} is outside its allow-list"
                );
            }
        }
    }
}

#[test]
fn pinned_types_declare_an_upward_rule() {
    for ty in ComponentType::ALL {
        let bundle = constraints_for(*ty);
        if bundle.must_be_pinned_to_parent {
            assert!(
                bundle.parent.is_some() || bundle.ancestors.is_some(),
                "{ty:?} is pinned but has no parent or ancestor rule"
            );
        }
    }
}
