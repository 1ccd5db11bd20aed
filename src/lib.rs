//! Component-Placement Constraint Engine
//!
//! A declarative rule system for design-import trees (Figma to generated
//! website code): decides whether a component of a given type may be
//! placed at a given position in a tree, and validates whole trees
//! against the aggregate rule set before export.
//!
//! # Module Overview
//!
//! - [`catalog`] - the closed component-type enumeration and its metadata
//! - [`constraints`] - the rule language and the static rule table
//! - [`placement`] - local, single-hop checks for interactive editing
//! - [`validator`] - exhaustive whole-tree validation for the export gate
//! - [`messages`] - human-readable violation messages
//! - [`types`] - snapshot and result value types
//!
//! The catalog and rule table are immutable after initialization, and
//! every entry point is a pure function over them and its arguments, so
//! independent snapshots may be checked concurrently without
//! coordination.
//!
//! # Example
//!
//! ```
//! use placement_engine::{can_place_element, ComponentType, PlacementPosition};
//!
//! let check = can_place_element(
//!     ComponentType::NavbarLink,
//!     ComponentType::NavbarMenu,
//!     PlacementPosition::Inside,
//! );
//! assert!(check.valid);
//!
//! let check = can_place_element(
//!     ComponentType::Paragraph,
//!     ComponentType::List,
//!     PlacementPosition::Inside,
//! );
//! assert!(!check.valid);
//! ```

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod messages;
pub mod placement;
pub mod types;
pub mod validator;

// Catalog re-exports
pub use catalog::{
    by_category, definition, is_valid_component_type, ComponentCategory, ComponentDefinition,
    ComponentType,
};
// Constraint table re-exports
pub use constraints::{
    allowed_children, constraints_for, forbids_descendant, has_strict_children,
    is_pinned_to_parent, requires_ancestor, structural_children, ComponentConstraints,
    ConstraintDef, ConstraintRule,
};
pub use error::{ConstraintErrorCode, EngineError, Result};
pub use messages::constraint_error_message;
pub use placement::{can_contain_child, can_place_element, valid_child_types, valid_parent_types};
pub use types::results::{
    PlacementCheckResult, PlacementPosition, TreeValidationError, TreeValidationResult,
};
pub use types::{DesignNode, DesignSnapshot};
pub use validator::validate_design_tree;
