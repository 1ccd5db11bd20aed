//! Result shapes returned by the placement checker and tree validator.

use serde::{Deserialize, Serialize};

use crate::error::ConstraintErrorCode;

/// Where a candidate element is being inserted relative to the target.
///
/// For `Before`/`After` the target is the *parent* of the sibling
/// position, not the sibling itself; a same-level insertion has the
/// same parent-compatibility requirements as nesting inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementPosition {
    Inside,
    Before,
    After,
}

/// Accept/reject outcome of a single placement check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementCheckResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ConstraintErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PlacementCheckResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error_code: None,
            message: None,
        }
    }

    pub fn reject(code: ConstraintErrorCode, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_code: Some(code),
            message: Some(message.into()),
        }
    }
}

/// One violation found by the tree validator, attached to the offending
/// node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeValidationError {
    pub node_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ConstraintErrorCode>,
}

/// The accumulated, non-short-circuiting result of validating a whole
/// tree. Errors are listed in traversal order (pre-order, roots first,
/// children in declared order), so output is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeValidationResult {
    pub valid: bool,
    pub errors: Vec<TreeValidationError>,
}

impl TreeValidationResult {
    pub fn from_errors(errors: Vec<TreeValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_serializes_without_optional_fields() {
        let json = serde_json::to_string(&PlacementCheckResult::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }

    #[test]
    fn rejection_carries_code_and_message() {
        let result = PlacementCheckResult::reject(
            ConstraintErrorCode::ForbiddenNesting,
            "A Form cannot be nested inside a Form.",
        );
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"valid":false,"errorCode":"FORBIDDEN_NESTING","message":"A Form cannot be nested inside a Form."}"#
        );
    }

    #[test]
    fn empty_error_list_means_valid() {
        let result = TreeValidationResult::from_errors(Vec::new());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }
}
