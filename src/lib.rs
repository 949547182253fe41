// SPDX-License-Identifier: MPL-2.0

//! Hierarchical facet selection for marketplace listing filters.
//!
//! Marketplace listings are filtered along two hierarchical facets: service
//! categories containing work types, and counties containing municipalities.
//! This crate provides the selection model behind those filters — a
//! two-level checkbox tree where toggling a parent cascades down to its
//! children and toggling a child cascades back up — together with the
//! boundaries around it:
//!
//! - [`filter`] — the selection state itself: one [`FilterState`] per
//!   facet, mutated by [`FilterMessage`]s, read through snapshots.
//! - [`catalog`] — maps backend catalog data (service categories, counties)
//!   into the [`FilterNode`] trees the filter consumes, validating ids at
//!   the boundary.
//! - [`listing`] — owns the two isolated facet instances for a listing page
//!   and serializes their combined selection into request parameters.
//!
//! Rendering, transport, and refetch scheduling belong to the host.

pub mod catalog;
pub mod filter;
pub mod listing;

pub use filter::{
    FilterChild, FilterMessage, FilterNode, FilterState, NodeId, ParentSelection,
    SelectionSnapshot,
};
pub use listing::{ListingFilter, ListingMessage, ListingQuery};
