//! Component catalog: the closed set of supported component types and
//! their descriptive metadata.
//!
//! The catalog is pure data, loaded once and never mutated. Every other
//! part of the engine consults it:
//! - [`ComponentType`] - the closed enumeration of structural elements
//! - [`ComponentDefinition`] - per-type metadata (display name, tags, ...)
//! - [`definition`] - total lookup over the enumeration
//! - [`is_valid_component_type`] - boundary check for untrusted strings

mod table;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A structural element kind, drawn from a closed set.
///
/// Identity is the tag itself; there are no numeric ids. The set covers
/// generic layout and typography primitives plus the combo components
/// (navbar, dropdown, tabs, slider, forms, CMS collections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    // Layout
    Block,
    Section,
    Container,
    Grid,
    VFlex,
    HFlex,
    LinkBlock,
    Button,
    List,
    ListItem,
    // Typography
    Heading,
    Paragraph,
    TextBlock,
    TextLink,
    Blockquote,
    RichText,
    // Media
    Image,
    Video,
    HtmlEmbed,
    Icon,
    // Navigation
    NavbarWrapper,
    NavbarContainer,
    NavbarBrand,
    NavbarMenu,
    NavbarLink,
    NavbarButton,
    // Dropdown
    DropdownWrapper,
    DropdownToggle,
    DropdownList,
    DropdownLink,
    // Tabs
    TabsWrapper,
    TabsMenu,
    TabsLink,
    TabsContent,
    TabsPane,
    // Slider
    SliderWrapper,
    SliderMask,
    SliderSlide,
    SliderArrow,
    SliderNav,
    // Forms
    FormWrapper,
    FormForm,
    FormBlockLabel,
    FormTextInput,
    FormTextarea,
    FormSelect,
    FormButton,
    FormCheckboxWrapper,
    FormCheckboxInput,
    FormRadioWrapper,
    FormRadioInput,
    FormInlineLabel,
    FormSuccessMessage,
    FormErrorMessage,
    // CMS
    DynamoWrapper,
    DynamoList,
    DynamoItem,
    DynamoEmpty,
}

impl ComponentType {
    /// Every variant, in declaration order. Derived listings (category
    /// groupings, valid-parent suggestions) follow this order so output
    /// is deterministic.
    pub const ALL: &'static [ComponentType] = &[
        ComponentType::Block,
        ComponentType::Section,
        ComponentType::Container,
        ComponentType::Grid,
        ComponentType::VFlex,
        ComponentType::HFlex,
        ComponentType::LinkBlock,
        ComponentType::Button,
        ComponentType::List,
        ComponentType::ListItem,
        ComponentType::Heading,
        ComponentType::Paragraph,
        ComponentType::TextBlock,
        ComponentType::TextLink,
        ComponentType::Blockquote,
        ComponentType::RichText,
        ComponentType::Image,
        ComponentType::Video,
        ComponentType::HtmlEmbed,
        ComponentType::Icon,
        ComponentType::NavbarWrapper,
        ComponentType::NavbarContainer,
        ComponentType::NavbarBrand,
        ComponentType::NavbarMenu,
        ComponentType::NavbarLink,
        ComponentType::NavbarButton,
        ComponentType::DropdownWrapper,
        ComponentType::DropdownToggle,
        ComponentType::DropdownList,
        ComponentType::DropdownLink,
        ComponentType::TabsWrapper,
        ComponentType::TabsMenu,
        ComponentType::TabsLink,
        ComponentType::TabsContent,
        ComponentType::TabsPane,
        ComponentType::SliderWrapper,
        ComponentType::SliderMask,
        ComponentType::SliderSlide,
        ComponentType::SliderArrow,
        ComponentType::SliderNav,
        ComponentType::FormWrapper,
        ComponentType::FormForm,
        ComponentType::FormBlockLabel,
        ComponentType::FormTextInput,
        ComponentType::FormTextarea,
        ComponentType::FormSelect,
        ComponentType::FormButton,
        ComponentType::FormCheckboxWrapper,
        ComponentType::FormCheckboxInput,
        ComponentType::FormRadioWrapper,
        ComponentType::FormRadioInput,
        ComponentType::FormInlineLabel,
        ComponentType::FormSuccessMessage,
        ComponentType::FormErrorMessage,
        ComponentType::DynamoWrapper,
        ComponentType::DynamoList,
        ComponentType::DynamoItem,
        ComponentType::DynamoEmpty,
    ];

    /// The canonical tag string, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentType::Block => "Block",
            ComponentType::Section => "Section",
            ComponentType::Container => "Container",
            ComponentType::Grid => "Grid",
            ComponentType::VFlex => "VFlex",
            ComponentType::HFlex => "HFlex",
            ComponentType::LinkBlock => "LinkBlock",
            ComponentType::Button => "Button",
            ComponentType::List => "List",
            ComponentType::ListItem => "ListItem",
            ComponentType::Heading => "Heading",
            ComponentType::Paragraph => "Paragraph",
            ComponentType::TextBlock => "TextBlock",
            ComponentType::TextLink => "TextLink",
            ComponentType::Blockquote => "Blockquote",
            ComponentType::RichText => "RichText",
            ComponentType::Image => "Image",
            ComponentType::Video => "Video",
            ComponentType::HtmlEmbed => "HtmlEmbed",
            ComponentType::Icon => "Icon",
            ComponentType::NavbarWrapper => "NavbarWrapper",
            ComponentType::NavbarContainer => "NavbarContainer",
            ComponentType::NavbarBrand => "NavbarBrand",
            ComponentType::NavbarMenu => "NavbarMenu",
            ComponentType::NavbarLink => "NavbarLink",
            ComponentType::NavbarButton => "NavbarButton",
            ComponentType::DropdownWrapper => "DropdownWrapper",
            ComponentType::DropdownToggle => "DropdownToggle",
            ComponentType::DropdownList => "DropdownList",
            ComponentType::DropdownLink => "DropdownLink",
            ComponentType::TabsWrapper => "TabsWrapper",
            ComponentType::TabsMenu => "TabsMenu",
            ComponentType::TabsLink => "TabsLink",
            ComponentType::TabsContent => "TabsContent",
            ComponentType::TabsPane => "TabsPane",
            ComponentType::SliderWrapper => "SliderWrapper",
            ComponentType::SliderMask => "SliderMask",
            ComponentType::SliderSlide => "SliderSlide",
            ComponentType::SliderArrow => "SliderArrow",
            ComponentType::SliderNav => "SliderNav",
            ComponentType::FormWrapper => "FormWrapper",
            ComponentType::FormForm => "FormForm",
            ComponentType::FormBlockLabel => "FormBlockLabel",
            ComponentType::FormTextInput => "FormTextInput",
            ComponentType::FormTextarea => "FormTextarea",
            ComponentType::FormSelect => "FormSelect",
            ComponentType::FormButton => "FormButton",
            ComponentType::FormCheckboxWrapper => "FormCheckboxWrapper",
            ComponentType::FormCheckboxInput => "FormCheckboxInput",
            ComponentType::FormRadioWrapper => "FormRadioWrapper",
            ComponentType::FormRadioInput => "FormRadioInput",
            ComponentType::FormInlineLabel => "FormInlineLabel",
            ComponentType::FormSuccessMessage => "FormSuccessMessage",
            ComponentType::FormErrorMessage => "FormErrorMessage",
            ComponentType::DynamoWrapper => "DynamoWrapper",
            ComponentType::DynamoList => "DynamoList",
            ComponentType::DynamoItem => "DynamoItem",
            ComponentType::DynamoEmpty => "DynamoEmpty",
        }
    }

    /// The end-user-facing name from the catalog.
    pub fn display_name(self) -> &'static str {
        definition(self).display_name
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| EngineError::unknown_component_type(s))
    }
}

/// UI grouping tag for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Layout,
    Typography,
    Media,
    Navigation,
    Dropdown,
    Tabs,
    Slider,
    Forms,
    Cms,
}

/// Descriptive metadata for one component type.
///
/// `special_fields` names the extra serialized attributes the export
/// serializer emits for this component; the engine itself does not
/// interpret them.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub display_name: &'static str,
    pub render_tags: &'static [&'static str],
    pub is_container: bool,
    pub category: ComponentCategory,
    pub special_fields: &'static [&'static str],
}

/// Look up the definition for a component type.
///
/// Total over the closed enumeration; a missing entry is a programming
/// error in the catalog data and fails loudly rather than defaulting.
pub fn definition(ty: ComponentType) -> &'static ComponentDefinition {
    table::CATALOG
        .get(&ty)
        .expect("every ComponentType has a catalog entry")
}

/// Validate an untrusted string before casting it into the
/// [`ComponentType`] domain.
pub fn is_valid_component_type(raw: &str) -> bool {
    ComponentType::from_str(raw).is_ok()
}

/// All component types in the given category, in declaration order.
pub fn by_category(category: ComponentCategory) -> Vec<ComponentType> {
    ComponentType::ALL
        .iter()
        .copied()
        .filter(|ty| definition(*ty).category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_variant_once() {
        let mut seen = std::collections::HashSet::new();
        for ty in ComponentType::ALL {
            assert!(seen.insert(*ty), "duplicate variant in ALL: {ty:?}");
        }
    }

    #[test]
    fn every_variant_has_a_catalog_entry() {
        for ty in ComponentType::ALL {
            let def = definition(*ty);
            assert!(
                !def.display_name.is_empty(),
                "empty display name for {ty:?}"
            );
            assert!(!def.render_tags.is_empty(), "no render tags for {ty:?}");
        }
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for ty in ComponentType::ALL {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn from_str_round_trips_every_variant() {
        for ty in ComponentType::ALL {
            let parsed: ComponentType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, *ty);
        }
    }

    #[test]
    fn from_str_rejects_unknown_tags() {
        assert!(!is_valid_component_type("Gadget"));
        assert!(!is_valid_component_type(""));
        assert!(!is_valid_component_type("navbarwrapper"));

        let err = "Gadget".parse::<ComponentType>().unwrap_err();
        assert_eq!(format!("{err}"), "Unknown component type: Gadget");
    }

    #[test]
    fn by_category_groups_navbar_components() {
        let nav = by_category(ComponentCategory::Navigation);
        assert_eq!(
            nav,
            vec![
                ComponentType::NavbarWrapper,
                ComponentType::NavbarContainer,
                ComponentType::NavbarBrand,
                ComponentType::NavbarMenu,
                ComponentType::NavbarLink,
                ComponentType::NavbarButton,
            ]
        );
    }

    #[test]
    fn categories_partition_the_catalog() {
        let categories = [
            ComponentCategory::Layout,
            ComponentCategory::Typography,
            ComponentCategory::Media,
            ComponentCategory::Navigation,
            ComponentCategory::Dropdown,
            ComponentCategory::Tabs,
            ComponentCategory::Slider,
            ComponentCategory::Forms,
            ComponentCategory::Cms,
        ];
        let total: usize = categories.iter().map(|c| by_category(*c).len()).sum();
        assert_eq!(total, ComponentType::ALL.len());
    }

    #[test]
    fn form_inputs_are_not_containers() {
        assert!(!definition(ComponentType::FormTextInput).is_container);
        assert!(!definition(ComponentType::FormSelect).is_container);
        assert!(!definition(ComponentType::Image).is_container);
        assert!(definition(ComponentType::Section).is_container);
    }
}
