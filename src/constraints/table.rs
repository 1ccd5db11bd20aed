//! The rule database: literal, immutable constraint data per component
//! type, interpreted by the placement checker and the tree validator.
//!
//! Self-nesting prohibitions are declared in both directions (a
//! `Forbid` under `descendants` on the owning type and the mirrored
//! `Forbid` under `ancestors`), so the rule fires on whichever node is
//! being inspected. An integration test asserts the two directions stay
//! in sync.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{ComponentConstraints, ConstraintDef, ConstraintRule};
use crate::catalog::ComponentType::{self, *};

const fn rule(r: ConstraintRule, applies_to: &'static [ComponentType]) -> ConstraintDef {
    ConstraintDef {
        applies_to,
        rule: r,
        label: None,
    }
}

const fn labeled(
    r: ConstraintRule,
    applies_to: &'static [ComponentType],
    label: &'static str,
) -> ConstraintDef {
    ConstraintDef {
        applies_to,
        rule: r,
        label: Some(label),
    }
}

const EMPTY: ComponentConstraints = ComponentConstraints::EMPTY;

pub(super) static TABLE: &[(ComponentType, ComponentConstraints)] = &[
    // Lists
    (
        List,
        ComponentConstraints {
            children: Some(&[labeled(
                ConstraintRule::RequireOnly,
                &[ListItem],
                "list items",
            )]),
            ..EMPTY
        },
    ),
    (
        ListItem,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[List])]),
            ..EMPTY
        },
    ),
    // Navbar
    (
        NavbarWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::Forbid, &[NavbarWrapper])]),
            descendants: Some(&[rule(ConstraintRule::Forbid, &[NavbarWrapper])]),
            structural_children: Some(&[NavbarContainer]),
            ..EMPTY
        },
    ),
    (
        NavbarContainer,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[NavbarWrapper])]),
            must_be_pinned_to_parent: true,
            structural_children: Some(&[NavbarBrand, NavbarMenu, NavbarButton]),
            ..EMPTY
        },
    ),
    (
        NavbarBrand,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[NavbarWrapper])]),
            ..EMPTY
        },
    ),
    (
        NavbarMenu,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[NavbarWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        NavbarLink,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[NavbarMenu])]),
            ..EMPTY
        },
    ),
    (
        NavbarButton,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[NavbarWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    // Dropdown
    (
        DropdownWrapper,
        ComponentConstraints {
            children: Some(&[
                rule(ConstraintRule::RequireOnly, &[DropdownToggle, DropdownList]),
                rule(ConstraintRule::ExactlyOne, &[DropdownToggle]),
                rule(ConstraintRule::ExactlyOne, &[DropdownList]),
            ]),
            structural_children: Some(&[DropdownToggle, DropdownList]),
            ..EMPTY
        },
    ),
    (
        DropdownToggle,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[DropdownWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        DropdownList,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[DropdownWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        DropdownLink,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[DropdownList])]),
            ..EMPTY
        },
    ),
    // Tabs
    (
        TabsWrapper,
        ComponentConstraints {
            children: Some(&[
                rule(ConstraintRule::RequireOnly, &[TabsMenu, TabsContent]),
                rule(ConstraintRule::ExactlyOne, &[TabsMenu]),
                rule(ConstraintRule::ExactlyOne, &[TabsContent]),
            ]),
            structural_children: Some(&[TabsMenu, TabsContent]),
            ..EMPTY
        },
    ),
    (
        TabsMenu,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[TabsWrapper])]),
            children: Some(&[rule(ConstraintRule::RequireOnly, &[TabsLink])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        TabsLink,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[TabsMenu])]),
            ..EMPTY
        },
    ),
    (
        TabsContent,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[TabsWrapper])]),
            children: Some(&[
                rule(ConstraintRule::RequireOnly, &[TabsPane]),
                labeled(ConstraintRule::AtLeastOne, &[TabsPane], "tab panes"),
            ]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        TabsPane,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[TabsContent])]),
            ..EMPTY
        },
    ),
    // Slider
    (
        SliderWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::Forbid, &[SliderWrapper])]),
            descendants: Some(&[rule(ConstraintRule::Forbid, &[SliderWrapper])]),
            children: Some(&[
                rule(
                    ConstraintRule::RequireOnly,
                    &[SliderMask, SliderArrow, SliderNav],
                ),
                rule(ConstraintRule::ExactlyOne, &[SliderMask]),
                rule(ConstraintRule::ZeroOrOne, &[SliderNav]),
            ]),
            structural_children: Some(&[SliderMask, SliderArrow, SliderNav]),
            ..EMPTY
        },
    ),
    (
        SliderMask,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[SliderWrapper])]),
            children: Some(&[
                rule(ConstraintRule::RequireOnly, &[SliderSlide]),
                labeled(ConstraintRule::AtLeastOne, &[SliderSlide], "slides"),
            ]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        SliderSlide,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[SliderMask])]),
            ..EMPTY
        },
    ),
    (
        SliderArrow,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[SliderWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        SliderNav,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[SliderWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    // Forms
    (
        FormWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::Forbid, &[FormWrapper])]),
            descendants: Some(&[rule(ConstraintRule::Forbid, &[FormWrapper])]),
            children: Some(&[
                rule(
                    ConstraintRule::RequireOnly,
                    &[FormForm, FormSuccessMessage, FormErrorMessage],
                ),
                rule(ConstraintRule::ExactlyOne, &[FormForm]),
                rule(ConstraintRule::ZeroOrOne, &[FormSuccessMessage]),
                rule(ConstraintRule::ZeroOrOne, &[FormErrorMessage]),
            ]),
            structural_children: Some(&[FormForm, FormSuccessMessage, FormErrorMessage]),
            ..EMPTY
        },
    ),
    (
        FormForm,
        ComponentConstraints {
            ancestors: Some(&[
                rule(ConstraintRule::AtLeastOne, &[FormWrapper]),
                rule(ConstraintRule::Forbid, &[FormForm]),
            ]),
            descendants: Some(&[rule(ConstraintRule::Forbid, &[FormForm])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        FormBlockLabel,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            ..EMPTY
        },
    ),
    (
        FormTextInput,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            ..EMPTY
        },
    ),
    (
        FormTextarea,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            ..EMPTY
        },
    ),
    (
        FormSelect,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            ..EMPTY
        },
    ),
    (
        FormButton,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            ..EMPTY
        },
    ),
    (
        FormCheckboxWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            children: Some(&[
                rule(
                    ConstraintRule::RequireOnly,
                    &[FormCheckboxInput, FormInlineLabel],
                ),
                rule(ConstraintRule::ExactlyOne, &[FormCheckboxInput]),
                rule(ConstraintRule::ExactlyOne, &[FormInlineLabel]),
            ]),
            structural_children: Some(&[FormCheckboxInput, FormInlineLabel]),
            ..EMPTY
        },
    ),
    (
        FormCheckboxInput,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[FormCheckboxWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        FormRadioWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::AtLeastOne, &[FormForm])]),
            children: Some(&[
                rule(
                    ConstraintRule::RequireOnly,
                    &[FormRadioInput, FormInlineLabel],
                ),
                rule(ConstraintRule::ExactlyOne, &[FormRadioInput]),
                rule(ConstraintRule::ExactlyOne, &[FormInlineLabel]),
            ]),
            structural_children: Some(&[FormRadioInput, FormInlineLabel]),
            ..EMPTY
        },
    ),
    (
        FormRadioInput,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[FormRadioWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        FormInlineLabel,
        ComponentConstraints {
            parent: Some(&[rule(
                ConstraintRule::ExactlyOne,
                &[FormCheckboxWrapper, FormRadioWrapper],
            )]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        FormSuccessMessage,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[FormWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        FormErrorMessage,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[FormWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    // CMS
    (
        DynamoWrapper,
        ComponentConstraints {
            ancestors: Some(&[rule(ConstraintRule::Forbid, &[DynamoWrapper])]),
            descendants: Some(&[rule(ConstraintRule::Forbid, &[DynamoWrapper])]),
            children: Some(&[
                rule(ConstraintRule::RequireOnly, &[DynamoList, DynamoEmpty]),
                rule(ConstraintRule::ExactlyOne, &[DynamoList]),
                rule(ConstraintRule::ZeroOrOne, &[DynamoEmpty]),
            ]),
            structural_children: Some(&[DynamoList, DynamoEmpty]),
            ..EMPTY
        },
    ),
    (
        DynamoList,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[DynamoWrapper])]),
            children: Some(&[rule(ConstraintRule::RequireOnly, &[DynamoItem])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        DynamoItem,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[DynamoList])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
    (
        DynamoEmpty,
        ComponentConstraints {
            parent: Some(&[rule(ConstraintRule::ExactlyOne, &[DynamoWrapper])]),
            must_be_pinned_to_parent: true,
            ..EMPTY
        },
    ),
];

pub(super) static TABLE_INDEX: Lazy<HashMap<ComponentType, &'static ComponentConstraints>> =
    Lazy::new(|| TABLE.iter().map(|(ty, c)| (*ty, c)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_keys() {
        assert_eq!(TABLE_INDEX.len(), TABLE.len());
    }

    #[test]
    fn require_only_sets_are_non_empty() {
        for (ty, bundle) in TABLE {
            for def in bundle.children.unwrap_or_default() {
                assert!(
                    !def.applies_to.is_empty(),
                    "empty children rule set on {ty:?}"
                );
            }
        }
    }
}
