//! Human-readable messages for constraint violations.
//!
//! One template per error code, interpolated with catalog display names
//! (never raw type tags) so messages read like
//! "A Nav Link must be placed inside a Nav Menu."

use crate::catalog::ComponentType;
use crate::error::ConstraintErrorCode;

/// Render the message for an (element, target, code) triple.
///
/// Total over [`ConstraintErrorCode`]; the meaning of `target` depends
/// on the code (the rejected parent, the required ancestor, the
/// offending descendant, ...) and is chosen by the caller.
pub fn constraint_error_message(
    element: ComponentType,
    target: ComponentType,
    code: ConstraintErrorCode,
) -> String {
    let el = with_article(element.display_name(), true);
    let tg = with_article(target.display_name(), false);

    match code {
        ConstraintErrorCode::InvalidParent => {
            format!("{el} cannot be placed inside {tg}.")
        }
        ConstraintErrorCode::InvalidChild => {
            format!("{el} is not an allowed child of {tg}.")
        }
        ConstraintErrorCode::ForbiddenNesting => {
            format!("{el} cannot be nested inside {tg}.")
        }
        ConstraintErrorCode::ForbiddenDescendant => {
            format!("{el} cannot contain {tg}.")
        }
        ConstraintErrorCode::MissingAncestor => {
            format!("{el} must be placed inside {tg}.")
        }
        ConstraintErrorCode::MissingRequiredChild => {
            format!("{el} must contain {tg}.")
        }
        ConstraintErrorCode::DuplicateRequiredChild => {
            format!("{el} can only contain one {}.", target.display_name())
        }
        ConstraintErrorCode::DuplicateOptionalChild => {
            format!("{el} can contain at most one {}.", target.display_name())
        }
        ConstraintErrorCode::DanglingReference => {
            format!("{el} references an element that does not exist.")
        }
        ConstraintErrorCode::CircularReference => {
            format!("{el} is reached through a cycle of element references.")
        }
    }
}

/// Prefix a display name with its indefinite article.
fn with_article(name: &str, capitalize: bool) -> String {
    let vowel_start = matches!(
        name.chars().next(),
        Some('A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u')
    );
    // "HTML" is pronounced with a leading vowel sound.
    let an = vowel_start || name.starts_with("HTML");
    let article = match (an, capitalize) {
        (true, true) => "An",
        (true, false) => "an",
        (false, true) => "A",
        (false, false) => "a",
    };
    format!("{article} {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentType::*;

    #[test]
    fn missing_ancestor_message_for_nav_link() {
        let msg = constraint_error_message(
            NavbarLink,
            NavbarMenu,
            ConstraintErrorCode::MissingAncestor,
        );
        assert_eq!(msg, "A Nav Link must be placed inside a Nav Menu.");
    }

    #[test]
    fn articles_follow_the_display_name() {
        let msg = constraint_error_message(Block, Image, ConstraintErrorCode::InvalidParent);
        assert_eq!(msg, "A Div Block cannot be placed inside an Image.");

        let msg = constraint_error_message(Image, Block, ConstraintErrorCode::InvalidParent);
        assert_eq!(msg, "An Image cannot be placed inside a Div Block.");

        let msg = constraint_error_message(HtmlEmbed, List, ConstraintErrorCode::InvalidChild);
        assert_eq!(msg, "An HTML Embed is not an allowed child of a List.");
    }

    #[test]
    fn duplicate_child_messages_name_the_child_type() {
        let msg = constraint_error_message(
            DropdownWrapper,
            DropdownToggle,
            ConstraintErrorCode::DuplicateRequiredChild,
        );
        assert_eq!(msg, "A Dropdown can only contain one Dropdown Toggle.");

        let msg = constraint_error_message(
            SliderWrapper,
            SliderNav,
            ConstraintErrorCode::DuplicateOptionalChild,
        );
        assert_eq!(msg, "A Slider can contain at most one Slide Nav.");
    }

    #[test]
    fn every_code_has_a_template() {
        for code in ConstraintErrorCode::ALL {
            let msg = constraint_error_message(NavbarLink, NavbarMenu, *code);
            assert!(!msg.is_empty());
            assert!(msg.ends_with('.'), "unterminated template for {code:?}");
        }
    }

    #[test]
    fn invalid_child_message_references_the_parent_rule() {
        let msg = constraint_error_message(Paragraph, List, ConstraintErrorCode::InvalidChild);
        assert_eq!(msg, "A Paragraph is not an allowed child of a List.");
    }
}
