use placement_engine::{
    allowed_children, can_contain_child, can_place_element, definition, has_strict_children,
    valid_child_types, valid_parent_types, ComponentType, ConstraintErrorCode, PlacementPosition,
};

use ComponentType::*;

// For every type with a closed children allow-list, containment is
// accepted exactly for the listed members, checked over the full
// catalog.
#[test]
fn strict_children_accept_exactly_the_allow_list() {
    for parent in ComponentType::ALL {
        if !has_strict_children(*parent) {
            continue;
        }
        let allow = allowed_children(*parent).expect("strict children imply an allow-list");
        for candidate in ComponentType::ALL {
            let result = can_contain_child(*parent, *candidate);
            assert_eq!(
                result.valid,
                allow.contains(candidate),
                "{parent:?} -> {candidate:?}: expected allow-list to decide"
            );
        }
    }
}

#[test]
fn unconstrained_containers_accept_basic_children() {
    for parent in [Block, Section, Container, Grid, VFlex, HFlex, ListItem] {
        for child in [Block, Heading, Paragraph, Image, LinkBlock] {
            assert!(
                can_contain_child(parent, child).valid,
                "{parent:?} should accept {child:?}"
            );
        }
    }
}

#[test]
fn non_containers_reject_all_children() {
    for parent in ComponentType::ALL {
        if definition(*parent).is_container {
            continue;
        }
        for candidate in [Block, Heading, NavbarLink] {
            let result = can_contain_child(*parent, candidate);
            assert!(!result.valid);
            assert_eq!(result.error_code, Some(ConstraintErrorCode::InvalidParent));
        }
    }
}

#[test]
fn placement_results_carry_formatted_messages() {
    let result = can_place_element(Paragraph, List, PlacementPosition::Inside);
    assert_eq!(
        result.message.as_deref(),
        Some("A Paragraph cannot be nested inside a List.")
    );

    let result = can_place_element(FormForm, FormForm, PlacementPosition::Inside);
    assert!(!result.valid);
    assert!(result.message.is_some());
}

#[test]
fn placement_never_panics_over_the_full_type_grid() {
    for element in ComponentType::ALL {
        for target in ComponentType::ALL {
            for position in [
                PlacementPosition::Inside,
                PlacementPosition::Before,
                PlacementPosition::After,
            ] {
                let result = can_place_element(*element, *target, position);
                if !result.valid {
                    assert!(result.error_code.is_some());
                    assert!(result.message.is_some());
                }
            }
        }
    }
}

#[test]
fn valid_parent_types_are_actually_placeable() {
    for ty in ComponentType::ALL {
        if let Some(parents) = valid_parent_types(*ty) {
            for parent in parents {
                assert!(
                    can_place_element(*ty, parent, PlacementPosition::Inside).valid,
                    "suggested parent {parent:?} rejects {ty:?}"
                );
            }
        }
    }
}

#[test]
fn valid_child_types_are_actually_containable() {
    for ty in ComponentType::ALL {
        if let Some(children) = valid_child_types(*ty) {
            for child in children {
                assert!(
                    can_contain_child(*ty, child).valid,
                    "suggested child {child:?} rejected by {ty:?}"
                );
            }
        }
    }
}

#[test]
fn editor_affordances_for_combo_components() {
    assert_eq!(valid_parent_types(SliderSlide), Some(vec![SliderMask]));
    assert_eq!(valid_parent_types(TabsPane), Some(vec![TabsContent]));
    assert_eq!(valid_parent_types(DynamoItem), Some(vec![DynamoList]));
    assert_eq!(valid_parent_types(Section), None);

    assert_eq!(
        valid_child_types(DropdownWrapper),
        Some(vec![DropdownToggle, DropdownList])
    );
    assert_eq!(valid_child_types(Container), None);
}
