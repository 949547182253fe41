// SPDX-License-Identifier: MPL-2.0

//! Node types for the hierarchical selection filter.

/// Unique identifier for nodes in a filter tree.
pub type NodeId = String;

/// A leaf entry nested under exactly one parent.
///
/// In the marketplace domain this is a specific work type under a service
/// category, or a municipality under a county.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChild {
    /// Unique identifier for this child.
    pub id: NodeId,
    /// Display label for the child.
    pub name: String,
}

impl FilterChild {
    /// Creates a new child leaf.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A top-level grouping node that may contain child leaves.
///
/// The tree consumed by the filter is exactly two levels deep: parents
/// containing children. A parent's `children` list may be empty, in which
/// case it behaves as a directly toggleable leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNode {
    /// Unique identifier for this parent.
    pub id: NodeId,
    /// Display label for the parent.
    pub name: String,
    /// Child leaves grouped under this parent.
    pub children: Vec<FilterChild>,
}

impl FilterNode {
    /// Creates a new parent node with the given children.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<FilterChild>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    /// Creates a parent node without children.
    pub fn childless(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Vec::new())
    }

    /// Returns true if this parent has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if `child_id` is among this parent's children.
    pub fn contains_child(&self, child_id: &str) -> bool {
        self.children.iter().any(|child| child.id == child_id)
    }

    /// Iterates over the ids of this parent's children.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|child| child.id.as_str())
    }
}
