// SPDX-License-Identifier: MPL-2.0

//! Messages accepted by the hierarchical selection filter.

use super::node::NodeId;

/// Mutations a host dispatches to a [`FilterState`](super::FilterState).
///
/// These messages should be wrapped by the host's message type and forwarded
/// from its update function, typically one per checkbox row interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// User toggled a parent checkbox.
    ///
    /// Cascades down: all of the parent's children follow `checked`.
    SetParent {
        /// The parent that was toggled.
        parent_id: NodeId,
        /// The new checkbox state.
        checked: bool,
    },

    /// User toggled a child checkbox.
    ///
    /// Cascades up: the named parent is reselected exactly when all of its
    /// children are selected after this toggle.
    SetChild {
        /// The child that was toggled.
        child_id: NodeId,
        /// The parent the child belongs to.
        parent_id: NodeId,
        /// The new checkbox state.
        checked: bool,
    },

    /// Clear the entire selection.
    Reset,
}
