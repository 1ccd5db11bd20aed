//! Value types exchanged with the engine's callers.
//!
//! - [`results`] - check and validation result shapes
//! - [`DesignNode`] / [`DesignSnapshot`] - the read-only tree snapshot
//!   handed in by the upstream import stage

pub mod results;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentType;
use crate::error::Result;

/// One node of an imported design tree.
///
/// Produced by the upstream tree-construction stage and consumed here
/// as a read-only snapshot. Component type strings in serialized input
/// are validated during deserialization; an unknown tag fails the whole
/// snapshot rather than defaulting to a permissive type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_ids: Vec<String>,
}

/// A rooted forest of design nodes: an id-to-node mapping plus the list
/// of top-level node ids (each with `parent_id = None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSnapshot {
    pub nodes: HashMap<String, DesignNode>,
    #[serde(default)]
    pub root_ids: Vec<String>,
}

impl DesignSnapshot {
    pub fn new(nodes: HashMap<String, DesignNode>, root_ids: Vec<String>) -> Self {
        Self { nodes, root_ids }
    }

    /// Parse a snapshot from the pipeline's JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn is_empty(&self) -> bool {
        self.root_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_camel_case_json() {
        let raw = r#"{
            "nodes": {
                "a": { "id": "a", "componentType": "Section", "childIds": ["b"] },
                "b": { "id": "b", "componentType": "Heading", "parentId": "a" }
            },
            "rootIds": ["a"]
        }"#;

        let snapshot = DesignSnapshot::from_json(raw).unwrap();
        assert_eq!(snapshot.root_ids, vec!["a"]);
        assert_eq!(
            snapshot.nodes["b"].component_type,
            ComponentType::Heading
        );
        assert_eq!(snapshot.nodes["a"].child_ids, vec!["b"]);
    }

    #[test]
    fn snapshot_rejects_unknown_component_types() {
        let raw = r#"{
            "nodes": {
                "a": { "id": "a", "componentType": "Widget" }
            },
            "rootIds": ["a"]
        }"#;

        assert!(DesignSnapshot::from_json(raw).is_err());
    }
}
