// SPDX-License-Identifier: MPL-2.0

//! State management for the hierarchical selection filter.

use super::message::FilterMessage;
use super::node::{FilterNode, NodeId};
use serde::Serialize;
use std::collections::HashSet;

/// Derived checkbox state for a parent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSelection {
    /// None of the parent's children are selected.
    Unselected,
    /// Some but not all of the parent's children are selected.
    Partial,
    /// The parent counts as fully selected.
    Full,
}

impl ParentSelection {
    /// Returns true if no part of the parent is selected.
    pub fn is_unselected(&self) -> bool {
        matches!(self, ParentSelection::Unselected)
    }

    /// Returns true if the parent is partially selected.
    pub fn is_partial(&self) -> bool {
        matches!(self, ParentSelection::Partial)
    }

    /// Returns true if the parent is fully selected.
    pub fn is_full(&self) -> bool {
        matches!(self, ParentSelection::Full)
    }
}

/// A caller-facing copy of the current selection.
///
/// Ids are sorted so payloads built from a snapshot are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    /// Selected parent ids.
    pub parents: Vec<String>,
    /// Selected child ids.
    pub children: Vec<String>,
}

impl SelectionSnapshot {
    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.children.is_empty()
    }
}

/// State for one hierarchical selection filter instance.
///
/// This state is owned by the host component; the host renders checkbox
/// rows from it and forwards toggle events back as [`FilterMessage`]s.
/// The two id sets are kept mutually consistent by the mutation rules:
/// a parent with children is selected exactly when all of its children are.
///
/// The tree is supplied at construction and treated as read-only input.
/// Replacing it with [`FilterState::set_nodes`] clears the selection.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    nodes: Vec<FilterNode>,
    selected_parents: HashSet<NodeId>,
    selected_children: HashSet<NodeId>,
}

impl FilterState {
    /// Creates a new filter state over the given tree with nothing selected.
    pub fn new(nodes: Vec<FilterNode>) -> Self {
        Self {
            nodes,
            selected_parents: HashSet::new(),
            selected_children: HashSet::new(),
        }
    }

    /// Replaces the tree this filter operates on.
    pub fn set_nodes(&mut self, nodes: Vec<FilterNode>) {
        self.nodes = nodes;
        // Selection ids belong to the old tree; start over
        self.selected_parents.clear();
        self.selected_children.clear();
    }

    /// The tree this filter operates on.
    pub fn nodes(&self) -> &[FilterNode] {
        &self.nodes
    }

    /// Toggles a parent and cascades the new state down to its children.
    ///
    /// Checking selects the parent and every one of its children; unchecking
    /// deselects the parent and every one of its children. An unknown
    /// `parent_id` is a silent no-op. Returns true if the selection changed.
    pub fn set_parent(&mut self, parent_id: &str, checked: bool) -> bool {
        let Some(node) = self.nodes.iter().find(|node| node.id == parent_id) else {
            return false;
        };

        let mut changed = if checked {
            self.selected_parents.insert(node.id.clone())
        } else {
            self.selected_parents.remove(parent_id)
        };

        for child in &node.children {
            changed |= if checked {
                self.selected_children.insert(child.id.clone())
            } else {
                self.selected_children.remove(child.id.as_str())
            };
        }

        changed
    }

    /// Toggles a child and cascades the result up to its parent.
    ///
    /// After the child set is updated, the parent is reselected exactly when
    /// all of its children are selected, so checking the last unchecked
    /// child selects the parent and unchecking any child of a fully
    /// selected parent deselects it. An unknown `parent_id`, or a pairing
    /// where `child_id` is not among that parent's children, is a silent
    /// no-op. Returns true if the selection changed.
    pub fn set_child(&mut self, child_id: &str, parent_id: &str, checked: bool) -> bool {
        let Some(node) = self.nodes.iter().find(|node| node.id == parent_id) else {
            return false;
        };
        if !node.contains_child(child_id) {
            return false;
        }

        let mut changed = if checked {
            self.selected_children.insert(child_id.to_string())
        } else {
            self.selected_children.remove(child_id)
        };

        // Recompute against the post-toggle child set. A childless parent
        // can never satisfy this and stays reachable only via set_parent.
        let complete = node.has_children()
            && node
                .child_ids()
                .all(|id| self.selected_children.contains(id));

        changed |= if complete {
            self.selected_parents.insert(node.id.clone())
        } else {
            self.selected_parents.remove(parent_id)
        };

        changed
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.selected_parents.clear();
        self.selected_children.clear();
    }

    /// Applies a [`FilterMessage`]. Returns true if the selection changed.
    pub fn update(&mut self, message: FilterMessage) -> bool {
        match message {
            FilterMessage::SetParent { parent_id, checked } => {
                self.set_parent(&parent_id, checked)
            }
            FilterMessage::SetChild {
                child_id,
                parent_id,
                checked,
            } => self.set_child(&child_id, &parent_id, checked),
            FilterMessage::Reset => {
                let changed = !self.is_empty();
                self.reset();
                changed
            }
        }
    }

    /// Returns true if a parent id is currently selected.
    pub fn is_parent_selected(&self, parent_id: &str) -> bool {
        self.selected_parents.contains(parent_id)
    }

    /// Returns true if a child id is currently selected.
    pub fn is_child_selected(&self, child_id: &str) -> bool {
        self.selected_children.contains(child_id)
    }

    /// Derived checkbox state for a parent row.
    ///
    /// Parents with children report `Partial` when only some children are
    /// selected; childless parents report `Full` only when toggled directly.
    /// An unknown id reports `Unselected`.
    pub fn parent_selection(&self, parent_id: &str) -> ParentSelection {
        let Some(node) = self.nodes.iter().find(|node| node.id == parent_id) else {
            return ParentSelection::Unselected;
        };

        if !node.has_children() {
            return if self.selected_parents.contains(parent_id) {
                ParentSelection::Full
            } else {
                ParentSelection::Unselected
            };
        }

        let selected = node
            .child_ids()
            .filter(|id| self.selected_children.contains(*id))
            .count();

        if selected == 0 {
            ParentSelection::Unselected
        } else if selected == node.children.len() {
            ParentSelection::Full
        } else {
            ParentSelection::Partial
        }
    }

    /// The selected parent ids.
    pub fn selected_parents(&self) -> &HashSet<NodeId> {
        &self.selected_parents
    }

    /// The selected child ids.
    pub fn selected_children(&self) -> &HashSet<NodeId> {
        &self.selected_children
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_parents.is_empty() && self.selected_children.is_empty()
    }

    /// A sorted copy of the current selection for outbound payloads.
    pub fn snapshot(&self) -> SelectionSnapshot {
        let mut parents: Vec<String> = self.selected_parents.iter().cloned().collect();
        let mut children: Vec<String> = self.selected_children.iter().cloned().collect();
        parents.sort();
        children.sort();
        SelectionSnapshot { parents, children }
    }
}
