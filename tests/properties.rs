// SPDX-License-Identifier: MPL-2.0

//! Property tests for facetree.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "parent selected exactly when all its children
//! are" under arbitrary operation sequences.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/selection.rs"]
mod selection;
