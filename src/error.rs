use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    pub fn unknown_component_type(raw: impl Into<String>) -> Self {
        EngineError::UnknownComponentType(raw.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Closed set of reason codes shared by the placement checker and the
/// tree validator. Serialized as the protocol strings consumed by the
/// export pipeline (`"INVALID_PARENT"`, `"MISSING_ANCESTOR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintErrorCode {
    InvalidParent,
    InvalidChild,
    ForbiddenNesting,
    ForbiddenDescendant,
    MissingAncestor,
    MissingRequiredChild,
    DuplicateRequiredChild,
    DuplicateOptionalChild,
    /// Structural fault: a node references a child or parent id that does
    /// not exist in the snapshot.
    DanglingReference,
    /// Structural fault: a node is reachable through more than one path.
    CircularReference,
}

impl ConstraintErrorCode {
    pub const ALL: &'static [ConstraintErrorCode] = &[
        ConstraintErrorCode::InvalidParent,
        ConstraintErrorCode::InvalidChild,
        ConstraintErrorCode::ForbiddenNesting,
        ConstraintErrorCode::ForbiddenDescendant,
        ConstraintErrorCode::MissingAncestor,
        ConstraintErrorCode::MissingRequiredChild,
        ConstraintErrorCode::DuplicateRequiredChild,
        ConstraintErrorCode::DuplicateOptionalChild,
        ConstraintErrorCode::DanglingReference,
        ConstraintErrorCode::CircularReference,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_component_type_display_includes_raw_value() {
        let err = EngineError::unknown_component_type("FancyWidget");

        assert_eq!(format!("{}", err), "Unknown component type: FancyWidget");
    }

    #[test]
    fn error_codes_serialize_as_protocol_strings() {
        let json = serde_json::to_string(&ConstraintErrorCode::MissingAncestor).unwrap();
        assert_eq!(json, "\"MISSING_ANCESTOR\"");

        let json = serde_json::to_string(&ConstraintErrorCode::DuplicateRequiredChild).unwrap();
        assert_eq!(json, "\"DUPLICATE_REQUIRED_CHILD\"");
    }

    #[test]
    fn error_codes_round_trip_through_serde() {
        for code in ConstraintErrorCode::ALL {
            let json = serde_json::to_string(code).unwrap();
            let back: ConstraintErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *code);
        }
    }
}
