//! Whole-tree validation: the exhaustive pre-export gate.
//!
//! Where the placement checker sees one level of context, the validator
//! walks the full snapshot, threading each node's ancestor type path
//! down the recursion and computing descendant type sets bottom-up, so
//! every rule is evaluated against complete information. All violations
//! are collected in one pass; nothing is silently repaired.
//!
//! Malformed input is reported, not repaired: ids that resolve to no
//! node, nodes reachable through more than one path (cycles, shared
//! children), and nodes no root reaches at all each produce a
//! structural error instead of crashing or looping the traversal.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::{self, ComponentType};
use crate::constraints::{self, ConstraintRule};
use crate::error::ConstraintErrorCode;
use crate::messages::constraint_error_message;
use crate::types::results::{TreeValidationError, TreeValidationResult};
use crate::types::{DesignNode, DesignSnapshot};

/// Validate every node of the snapshot against the constraint table.
///
/// Errors come out in traversal order (pre-order, roots in their listed
/// order, children in declared order), so repeated runs over the same
/// snapshot yield identical results.
pub fn validate_design_tree(snapshot: &DesignSnapshot) -> TreeValidationResult {
    debug!(
        nodes = snapshot.nodes.len(),
        roots = snapshot.root_ids.len(),
        "validating design tree"
    );

    // Pass one: descendant type sets per node, skipping edges the rule
    // pass will report as structural faults.
    let mut descendant_sets: HashMap<&str, HashSet<ComponentType>> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    for root_id in &snapshot.root_ids {
        if snapshot.nodes.contains_key(root_id.as_str()) && visited.insert(root_id.as_str()) {
            collect_descendants(root_id, snapshot, &mut visited, &mut descendant_sets);
        }
    }

    // Pass two: rule evaluation in pre-order.
    let mut errors: Vec<TreeValidationError> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut ancestor_path: Vec<ComponentType> = Vec::new();
    for root_id in &snapshot.root_ids {
        if !snapshot.nodes.contains_key(root_id.as_str()) {
            errors.push(TreeValidationError {
                node_id: root_id.clone(),
                message: format!("Root id {root_id} does not resolve to a node."),
                error_code: Some(ConstraintErrorCode::DanglingReference),
            });
            continue;
        }
        if !visited.insert(root_id.as_str()) {
            push_node_error(
                &mut errors,
                snapshot,
                root_id,
                ConstraintErrorCode::CircularReference,
            );
            continue;
        }
        walk(
            root_id,
            snapshot,
            &descendant_sets,
            &mut ancestor_path,
            &mut visited,
            &mut errors,
        );
    }

    // Nodes no root reaches (detached parent/child cycles, forgotten
    // root entries) never enter the walk and their rules are never
    // evaluated; each one is a structural fault on its own.
    let mut unreachable: Vec<&String> = snapshot
        .nodes
        .keys()
        .filter(|id| !visited.contains(id.as_str()))
        .collect();
    unreachable.sort();
    for id in unreachable {
        errors.push(TreeValidationError {
            node_id: id.clone(),
            message: format!("Node id {id} is not reachable from any root."),
            error_code: Some(ConstraintErrorCode::CircularReference),
        });
    }

    debug!(errors = errors.len(), "design tree validation complete");
    TreeValidationResult::from_errors(errors)
}

fn collect_descendants<'a>(
    id: &'a str,
    snapshot: &'a DesignSnapshot,
    visited: &mut HashSet<&'a str>,
    out: &mut HashMap<&'a str, HashSet<ComponentType>>,
) -> HashSet<ComponentType> {
    let mut acc: HashSet<ComponentType> = HashSet::new();
    let Some(node) = snapshot.nodes.get(id) else {
        return acc;
    };
    for child_id in &node.child_ids {
        let Some(child) = snapshot.nodes.get(child_id.as_str()) else {
            continue;
        };
        if !visited.insert(child_id.as_str()) {
            continue;
        }
        acc.insert(child.component_type);
        let sub = collect_descendants(child_id, snapshot, visited, out);
        acc.extend(sub.iter().copied());
    }
    out.insert(id, acc.clone());
    acc
}

fn walk<'a>(
    id: &'a str,
    snapshot: &'a DesignSnapshot,
    descendant_sets: &HashMap<&str, HashSet<ComponentType>>,
    ancestor_path: &mut Vec<ComponentType>,
    visited: &mut HashSet<&'a str>,
    errors: &mut Vec<TreeValidationError>,
) {
    let node = &snapshot.nodes[id];

    evaluate_node(node, snapshot, descendant_sets, ancestor_path, errors);

    ancestor_path.push(node.component_type);
    for child_id in &node.child_ids {
        if !snapshot.nodes.contains_key(child_id.as_str()) {
            errors.push(TreeValidationError {
                node_id: node.id.clone(),
                message: format!("Child id {child_id} does not resolve to a node."),
                error_code: Some(ConstraintErrorCode::DanglingReference),
            });
            continue;
        }
        if !visited.insert(child_id.as_str()) {
            push_node_error(
                errors,
                snapshot,
                child_id,
                ConstraintErrorCode::CircularReference,
            );
            continue;
        }
        walk(
            child_id,
            snapshot,
            descendant_sets,
            ancestor_path,
            visited,
            errors,
        );
    }
    ancestor_path.pop();
}

fn evaluate_node(
    node: &DesignNode,
    snapshot: &DesignSnapshot,
    descendant_sets: &HashMap<&str, HashSet<ComponentType>>,
    ancestor_path: &[ComponentType],
    errors: &mut Vec<TreeValidationError>,
) {
    let ty = node.component_type;
    let bundle = constraints::constraints_for(ty);

    // Ancestor rules against the full root-to-parent path.
    for def in bundle.ancestors.unwrap_or_default() {
        let matches = ancestor_path
            .iter()
            .filter(|a| def.applies_to.contains(*a))
            .count();
        match def.rule {
            // Ancestor repetition across levels is legal; only the zero
            // case is an error, for ExactlyOne as well.
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly =>
            {
                if matches == 0 {
                    errors.push(TreeValidationError {
                        node_id: node.id.clone(),
                        message: constraint_error_message(
                            ty,
                            def.applies_to[0],
                            ConstraintErrorCode::MissingAncestor,
                        ),
                        error_code: Some(ConstraintErrorCode::MissingAncestor),
                    });
                }
            }
            ConstraintRule::Forbid => {
                if let Some(found) = ancestor_path.iter().find(|a| def.applies_to.contains(*a)) {
                    errors.push(TreeValidationError {
                        node_id: node.id.clone(),
                        message: constraint_error_message(
                            ty,
                            *found,
                            ConstraintErrorCode::ForbiddenNesting,
                        ),
                        error_code: Some(ConstraintErrorCode::ForbiddenNesting),
                    });
                }
            }
            ConstraintRule::ZeroOrOne => {}
        }
    }

    // Descendant rules against the precomputed type set.
    if let Some(defs) = bundle.descendants {
        let empty = HashSet::new();
        let below = descendant_sets.get(node.id.as_str()).unwrap_or(&empty);
        for def in defs {
            if def.rule != ConstraintRule::Forbid {
                continue;
            }
            if let Some(found) = def.applies_to.iter().find(|d| below.contains(*d)) {
                errors.push(TreeValidationError {
                    node_id: node.id.clone(),
                    message: constraint_error_message(
                        ty,
                        *found,
                        ConstraintErrorCode::ForbiddenDescendant,
                    ),
                    error_code: Some(ConstraintErrorCode::ForbiddenDescendant),
                });
            }
        }
    }

    // Parent rules against the single immediate parent (or none for
    // roots; roots can never satisfy a parent requirement).
    let parent_type = ancestor_path.last().copied();
    if let Some(parent_ty) = parent_type {
        if !catalog::definition(parent_ty).is_container {
            errors.push(TreeValidationError {
                node_id: node.id.clone(),
                message: constraint_error_message(ty, parent_ty, ConstraintErrorCode::InvalidParent),
                error_code: Some(ConstraintErrorCode::InvalidParent),
            });
        }
    }
    if let Some(parent_id) = &node.parent_id {
        if !snapshot.nodes.contains_key(parent_id.as_str()) {
            errors.push(TreeValidationError {
                node_id: node.id.clone(),
                message: format!("Parent id {parent_id} does not resolve to a node."),
                error_code: Some(ConstraintErrorCode::DanglingReference),
            });
        }
    }
    for def in bundle.parent.unwrap_or_default() {
        match def.rule {
            ConstraintRule::AtLeastOne | ConstraintRule::ExactlyOne | ConstraintRule::RequireOnly =>
            {
                let satisfied = parent_type.is_some_and(|p| def.applies_to.contains(&p));
                if !satisfied {
                    let message = match parent_type {
                        Some(p) => {
                            constraint_error_message(ty, p, ConstraintErrorCode::InvalidParent)
                        }
                        // No parent to name; phrase the requirement
                        // instead.
                        None => constraint_error_message(
                            ty,
                            def.applies_to[0],
                            ConstraintErrorCode::MissingAncestor,
                        ),
                    };
                    errors.push(TreeValidationError {
                        node_id: node.id.clone(),
                        message,
                        error_code: Some(ConstraintErrorCode::InvalidParent),
                    });
                }
            }
            ConstraintRule::Forbid => {
                if parent_type.is_some_and(|p| def.applies_to.contains(&p)) {
                    errors.push(TreeValidationError {
                        node_id: node.id.clone(),
                        message: constraint_error_message(
                            ty,
                            parent_type.unwrap_or(ty),
                            ConstraintErrorCode::ForbiddenNesting,
                        ),
                        error_code: Some(ConstraintErrorCode::ForbiddenNesting),
                    });
                }
            }
            ConstraintRule::ZeroOrOne => {}
        }
    }

    // Children rules against the direct child list.
    if let Some(defs) = bundle.children {
        let children: Vec<&DesignNode> = node
            .child_ids
            .iter()
            .filter_map(|id| snapshot.nodes.get(id.as_str()))
            .collect();
        for def in defs {
            let matches = children
                .iter()
                .filter(|c| def.applies_to.contains(&c.component_type))
                .count();
            match def.rule {
                ConstraintRule::RequireOnly => {
                    for child in &children {
                        if !def.applies_to.contains(&child.component_type) {
                            errors.push(TreeValidationError {
                                node_id: child.id.clone(),
                                message: constraint_error_message(
                                    child.component_type,
                                    ty,
                                    ConstraintErrorCode::InvalidChild,
                                ),
                                error_code: Some(ConstraintErrorCode::InvalidChild),
                            });
                        }
                    }
                }
                ConstraintRule::AtLeastOne => {
                    if matches == 0 {
                        errors.push(missing_child_error(node, def.applies_to[0]));
                    }
                }
                ConstraintRule::ExactlyOne => {
                    if matches == 0 {
                        errors.push(missing_child_error(node, def.applies_to[0]));
                    } else if matches > 1 {
                        errors.push(TreeValidationError {
                            node_id: node.id.clone(),
                            message: constraint_error_message(
                                ty,
                                def.applies_to[0],
                                ConstraintErrorCode::DuplicateRequiredChild,
                            ),
                            error_code: Some(ConstraintErrorCode::DuplicateRequiredChild),
                        });
                    }
                }
                ConstraintRule::ZeroOrOne => {
                    if matches > 1 {
                        errors.push(TreeValidationError {
                            node_id: node.id.clone(),
                            message: constraint_error_message(
                                ty,
                                def.applies_to[0],
                                ConstraintErrorCode::DuplicateOptionalChild,
                            ),
                            error_code: Some(ConstraintErrorCode::DuplicateOptionalChild),
                        });
                    }
                }
                ConstraintRule::Forbid => {
                    if let Some(found) = children
                        .iter()
                        .find(|c| def.applies_to.contains(&c.component_type))
                    {
                        errors.push(TreeValidationError {
                            node_id: node.id.clone(),
                            message: constraint_error_message(
                                ty,
                                found.component_type,
                                ConstraintErrorCode::ForbiddenNesting,
                            ),
                            error_code: Some(ConstraintErrorCode::ForbiddenNesting),
                        });
                    }
                }
            }
        }
    }
}

fn missing_child_error(node: &DesignNode, required: ComponentType) -> TreeValidationError {
    TreeValidationError {
        node_id: node.id.clone(),
        message: constraint_error_message(
            node.component_type,
            required,
            ConstraintErrorCode::MissingRequiredChild,
        ),
        error_code: Some(ConstraintErrorCode::MissingRequiredChild),
    }
}

fn push_node_error(
    errors: &mut Vec<TreeValidationError>,
    snapshot: &DesignSnapshot,
    id: &str,
    code: ConstraintErrorCode,
) {
    let ty = snapshot.nodes[id].component_type;
    errors.push(TreeValidationError {
        node_id: id.to_string(),
        message: constraint_error_message(ty, ty, code),
        error_code: Some(code),
    });
}
