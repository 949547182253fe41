// SPDX-License-Identifier: MPL-2.0

//! Hierarchical selection filter over a two-level tree.
//!
//! Listing filters group leaves under parents (work types under a service
//! category, municipalities under a county) and let the user toggle either
//! level. Toggling a parent cascades down to all of its children; toggling
//! a child cascades back up, so a parent reads as selected exactly when all
//! of its children are.
//!
//! The state object is owned by the host component, which renders checkbox
//! rows from it and forwards toggle events back as messages. Each facet
//! (services, locations) gets its own isolated instance.
//!
//! # Example
//!
//! ```
//! use facetree::filter::{FilterChild, FilterMessage, FilterNode, FilterState};
//!
//! let mut services = FilterState::new(vec![FilterNode::new(
//!     "carpenter",
//!     "Carpenter",
//!     vec![
//!         FilterChild::new("carpenter_furniture", "Furniture"),
//!         FilterChild::new("carpenter_repair", "Repair"),
//!     ],
//! )]);
//!
//! // In the host's update function
//! let changed = services.update(FilterMessage::SetChild {
//!     child_id: "carpenter_furniture".into(),
//!     parent_id: "carpenter".into(),
//!     checked: true,
//! });
//! assert!(changed);
//!
//! // Selecting the remaining child completes the parent
//! services.set_child("carpenter_repair", "carpenter", true);
//! assert!(services.is_parent_selected("carpenter"));
//!
//! // The snapshot feeds the outbound listing request
//! let snapshot = services.snapshot();
//! assert_eq!(snapshot.parents, vec!["carpenter"]);
//! ```

mod message;
mod node;
mod state;

pub use message::FilterMessage;
pub use node::{FilterChild, FilterNode, NodeId};
pub use state::{FilterState, ParentSelection, SelectionSnapshot};
