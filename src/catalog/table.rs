//! Static catalog data: one [`ComponentDefinition`] per component type.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{ComponentCategory, ComponentDefinition, ComponentType};

const fn def(
    display_name: &'static str,
    render_tags: &'static [&'static str],
    is_container: bool,
    category: ComponentCategory,
    special_fields: &'static [&'static str],
) -> ComponentDefinition {
    ComponentDefinition {
        display_name,
        render_tags,
        is_container,
        category,
        special_fields,
    }
}

#[rustfmt::skip]
static ENTRIES: &[(ComponentType, ComponentDefinition)] = &[
    // Layout
    (ComponentType::Block,     def("Div Block",  &["div"],     true,  ComponentCategory::Layout, &[])),
    (ComponentType::Section,   def("Section",    &["section"], true,  ComponentCategory::Layout, &[])),
    (ComponentType::Container, def("Container",  &["div"],     true,  ComponentCategory::Layout, &[])),
    (ComponentType::Grid,      def("Grid",       &["div"],     true,  ComponentCategory::Layout, &[])),
    (ComponentType::VFlex,     def("V Flex",     &["div"],     true,  ComponentCategory::Layout, &[])),
    (ComponentType::HFlex,     def("H Flex",     &["div"],     true,  ComponentCategory::Layout, &[])),
    (ComponentType::LinkBlock, def("Link Block", &["a"],       true,  ComponentCategory::Layout, &["href", "target"])),
    (ComponentType::Button,    def("Button",     &["a"],       false, ComponentCategory::Layout, &["href", "target"])),
    (ComponentType::List,      def("List",       &["ul", "ol"], true, ComponentCategory::Layout, &["ordered"])),
    (ComponentType::ListItem,  def("List Item",  &["li"],      true,  ComponentCategory::Layout, &[])),
    // Typography
    (ComponentType::Heading,    def("Heading",     &["h1", "h2", "h3", "h4", "h5", "h6"], true, ComponentCategory::Typography, &["level"])),
    (ComponentType::Paragraph,  def("Paragraph",   &["p"],          true, ComponentCategory::Typography, &[])),
    (ComponentType::TextBlock,  def("Text Block",  &["div"],        true, ComponentCategory::Typography, &[])),
    (ComponentType::TextLink,   def("Text Link",   &["a"],          true, ComponentCategory::Typography, &["href", "target"])),
    (ComponentType::Blockquote, def("Block Quote", &["blockquote"], true, ComponentCategory::Typography, &[])),
    (ComponentType::RichText,   def("Rich Text",   &["div"],        true, ComponentCategory::Typography, &[])),
    // Media
    (ComponentType::Image,     def("Image",      &["img"], false, ComponentCategory::Media, &["src", "alt", "loading"])),
    (ComponentType::Video,     def("Video",      &["div"], false, ComponentCategory::Media, &["url", "autoplay"])),
    (ComponentType::HtmlEmbed, def("HTML Embed", &["div"], false, ComponentCategory::Media, &["html"])),
    (ComponentType::Icon,      def("Icon",       &["div"], false, ComponentCategory::Media, &["widget"])),
    // Navigation
    (ComponentType::NavbarWrapper,   def("Navbar",           &["div"], true, ComponentCategory::Navigation, &["collapse", "animation", "easing"])),
    (ComponentType::NavbarContainer, def("Navbar Container", &["div"], true, ComponentCategory::Navigation, &[])),
    (ComponentType::NavbarBrand,     def("Nav Brand",        &["a"],   true, ComponentCategory::Navigation, &["href"])),
    (ComponentType::NavbarMenu,      def("Nav Menu",         &["nav"], true, ComponentCategory::Navigation, &[])),
    (ComponentType::NavbarLink,      def("Nav Link",         &["a"],   true, ComponentCategory::Navigation, &["href"])),
    (ComponentType::NavbarButton,    def("Menu Button",      &["div"], true, ComponentCategory::Navigation, &[])),
    // Dropdown
    (ComponentType::DropdownWrapper, def("Dropdown",        &["div"], true, ComponentCategory::Dropdown, &["hover", "delay"])),
    (ComponentType::DropdownToggle,  def("Dropdown Toggle", &["div"], true, ComponentCategory::Dropdown, &[])),
    (ComponentType::DropdownList,    def("Dropdown List",   &["nav"], true, ComponentCategory::Dropdown, &[])),
    (ComponentType::DropdownLink,    def("Dropdown Link",   &["a"],   true, ComponentCategory::Dropdown, &["href"])),
    // Tabs
    (ComponentType::TabsWrapper, def("Tabs",         &["div"], true, ComponentCategory::Tabs, &["currentTab", "easing"])),
    (ComponentType::TabsMenu,    def("Tabs Menu",    &["div"], true, ComponentCategory::Tabs, &[])),
    (ComponentType::TabsLink,    def("Tab Link",     &["a"],   true, ComponentCategory::Tabs, &[])),
    (ComponentType::TabsContent, def("Tabs Content", &["div"], true, ComponentCategory::Tabs, &[])),
    (ComponentType::TabsPane,    def("Tab Pane",     &["div"], true, ComponentCategory::Tabs, &[])),
    // Slider
    (ComponentType::SliderWrapper, def("Slider",       &["div"], true,  ComponentCategory::Slider, &["autoplay", "delay", "infinite"])),
    (ComponentType::SliderMask,    def("Slider Mask",  &["div"], true,  ComponentCategory::Slider, &[])),
    (ComponentType::SliderSlide,   def("Slide",        &["div"], true,  ComponentCategory::Slider, &[])),
    (ComponentType::SliderArrow,   def("Slider Arrow", &["div"], true,  ComponentCategory::Slider, &["direction"])),
    (ComponentType::SliderNav,     def("Slide Nav",    &["div"], false, ComponentCategory::Slider, &["numbered"])),
    // Forms
    (ComponentType::FormWrapper,         def("Form Block",      &["div"],      true,  ComponentCategory::Forms, &[])),
    (ComponentType::FormForm,            def("Form",            &["form"],     true,  ComponentCategory::Forms, &["name", "action", "method"])),
    (ComponentType::FormBlockLabel,      def("Field Label",     &["label"],    true,  ComponentCategory::Forms, &["for"])),
    (ComponentType::FormTextInput,       def("Text Field",      &["input"],    false, ComponentCategory::Forms, &["name", "type", "placeholder", "required", "maxlength"])),
    (ComponentType::FormTextarea,        def("Text Area",       &["textarea"], false, ComponentCategory::Forms, &["name", "placeholder", "required", "maxlength"])),
    (ComponentType::FormSelect,          def("Select",          &["select"],   false, ComponentCategory::Forms, &["name", "required", "multiple"])),
    (ComponentType::FormButton,          def("Submit Button",   &["input"],    false, ComponentCategory::Forms, &["value", "waitText"])),
    (ComponentType::FormCheckboxWrapper, def("Checkbox",        &["div"],      true,  ComponentCategory::Forms, &[])),
    (ComponentType::FormCheckboxInput,   def("Checkbox Input",  &["input"],    false, ComponentCategory::Forms, &["name", "required", "checked"])),
    (ComponentType::FormRadioWrapper,    def("Radio Button",    &["div"],      true,  ComponentCategory::Forms, &[])),
    (ComponentType::FormRadioInput,      def("Radio Input",     &["input"],    false, ComponentCategory::Forms, &["name", "value", "required"])),
    (ComponentType::FormInlineLabel,     def("Inline Label",    &["span"],     true,  ComponentCategory::Forms, &[])),
    (ComponentType::FormSuccessMessage,  def("Success Message", &["div"],      true,  ComponentCategory::Forms, &[])),
    (ComponentType::FormErrorMessage,    def("Error Message",   &["div"],      true,  ComponentCategory::Forms, &[])),
    // CMS
    (ComponentType::DynamoWrapper, def("Collection List Wrapper", &["div"], true, ComponentCategory::Cms, &[])),
    (ComponentType::DynamoList,    def("Collection List",         &["div"], true, ComponentCategory::Cms, &["collectionId", "limit", "sort"])),
    (ComponentType::DynamoItem,    def("Collection Item",         &["div"], true, ComponentCategory::Cms, &[])),
    (ComponentType::DynamoEmpty,   def("Empty State",             &["div"], true, ComponentCategory::Cms, &[])),
];

pub(super) static CATALOG: Lazy<HashMap<ComponentType, ComponentDefinition>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_the_whole_enumeration() {
        assert_eq!(ENTRIES.len(), ComponentType::ALL.len());
        for ty in ComponentType::ALL {
            assert!(CATALOG.contains_key(ty), "missing catalog entry: {ty:?}");
        }
    }

    #[test]
    fn entries_have_no_duplicate_keys() {
        assert_eq!(CATALOG.len(), ENTRIES.len());
    }
}
