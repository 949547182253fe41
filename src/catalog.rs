// SPDX-License-Identifier: MPL-2.0

//! Mapping from marketplace catalog data to filter trees.
//!
//! The backend exposes two catalogs: service categories with their nested
//! work types, and counties with their nested municipalities. This module
//! deserializes those shapes and maps them into the [`FilterNode`] trees
//! the selection filter consumes, validating ids at the boundary so the
//! filter itself never has to.

use crate::filter::{FilterChild, FilterNode};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// A work type nested under a service category.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkType {
    pub id: String,
    pub name: String,
}

/// A service category from the service catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub work_types: Vec<WorkType>,
}

/// A municipality nested under a county.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub id: String,
    pub name: String,
}

/// A county from the location catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct County {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub municipalities: Vec<Municipality>,
}

/// Errors raised while mapping catalog data into a filter tree.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog entry under '{0}' has an empty id")]
    EmptyId(String),

    #[error("duplicate parent id in catalog: {0}")]
    DuplicateParent(String),

    #[error("duplicate child id in catalog: {0}")]
    DuplicateChild(String),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps service categories into a filter tree.
pub fn service_nodes(categories: &[ServiceCategory]) -> Result<Vec<FilterNode>, CatalogError> {
    let nodes = categories
        .iter()
        .map(|category| {
            FilterNode::new(
                &category.id,
                &category.name,
                category
                    .work_types
                    .iter()
                    .map(|work_type| FilterChild::new(&work_type.id, &work_type.name))
                    .collect(),
            )
        })
        .collect();
    let nodes = validated(nodes, "services")?;

    tracing::debug!(
        parents = nodes.len(),
        children = child_count(&nodes),
        "built service filter tree"
    );
    Ok(nodes)
}

/// Maps counties into a filter tree.
pub fn location_nodes(counties: &[County]) -> Result<Vec<FilterNode>, CatalogError> {
    let nodes = counties
        .iter()
        .map(|county| {
            FilterNode::new(
                &county.id,
                &county.name,
                county
                    .municipalities
                    .iter()
                    .map(|municipality| FilterChild::new(&municipality.id, &municipality.name))
                    .collect(),
            )
        })
        .collect();
    let nodes = validated(nodes, "locations")?;

    tracing::debug!(
        parents = nodes.len(),
        children = child_count(&nodes),
        "built location filter tree"
    );
    Ok(nodes)
}

/// Parses a JSON service catalog and maps it into a filter tree.
pub fn service_nodes_from_json(json: &str) -> Result<Vec<FilterNode>, CatalogError> {
    let categories: Vec<ServiceCategory> = serde_json::from_str(json)?;
    service_nodes(&categories)
}

/// Parses a JSON location catalog and maps it into a filter tree.
pub fn location_nodes_from_json(json: &str) -> Result<Vec<FilterNode>, CatalogError> {
    let counties: Vec<County> = serde_json::from_str(json)?;
    location_nodes(&counties)
}

/// Checks id shape across a mapped tree: ids non-empty, parent ids unique
/// across the tree, child ids unique across the tree.
fn validated(nodes: Vec<FilterNode>, catalog: &str) -> Result<Vec<FilterNode>, CatalogError> {
    let mut parent_ids = HashSet::new();
    let mut child_ids = HashSet::new();

    for node in &nodes {
        if node.id.is_empty() {
            return Err(CatalogError::EmptyId(catalog.to_string()));
        }
        if !parent_ids.insert(node.id.as_str()) {
            return Err(CatalogError::DuplicateParent(node.id.clone()));
        }
        for child in &node.children {
            if child.id.is_empty() {
                return Err(CatalogError::EmptyId(node.id.clone()));
            }
            if !child_ids.insert(child.id.as_str()) {
                return Err(CatalogError::DuplicateChild(child.id.clone()));
            }
        }
    }

    Ok(nodes)
}

fn child_count(nodes: &[FilterNode]) -> usize {
    nodes.iter().map(|node| node.children.len()).sum()
}
