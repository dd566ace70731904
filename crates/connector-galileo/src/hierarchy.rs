//! Flattening of nested group hierarchies.

use std::collections::HashSet;

use crate::models::GroupHierarchy;

/// Flatten a forest of hierarchy nodes into group ids, pre-order.
///
/// Each node's id comes before any of its descendants and every child is
/// fully expanded before its next sibling. Ids seen earlier in the walk are
/// skipped. The walk uses an explicit stack, so depth is not bounded by the
/// call stack.
pub fn flatten_group_ids(roots: &[GroupHierarchy]) -> Vec<String> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    // Reversed so the first sibling is popped first.
    let mut stack: Vec<&GroupHierarchy> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if seen.insert(node.id.as_str()) {
            ids.push(node.id.clone());
        }
        stack.extend(node.children.iter().rev());
    }

    ids
}
