// SPDX-License-Identifier: MPL-2.0

//! Listing-request side of the filters.
//!
//! A project listing page owns one filter instance per facet: service
//! categories and locations. The two instances are fully isolated; this
//! module wires them to a shared message type and serializes their combined
//! selection into the filter parameters of a listing request. Scheduling
//! the actual refetch (debouncing included) stays with the host.

use crate::filter::{FilterMessage, FilterNode, FilterState};
use serde::Serialize;

/// Messages for a listing page holding both facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingMessage {
    /// A toggle in the service-category facet.
    Service(FilterMessage),
    /// A toggle in the location facet.
    Location(FilterMessage),
    /// Clear both facets.
    ResetAll,
}

/// Filter parameters for a project listing request.
///
/// Empty facets are omitted from the serialized payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_categories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub work_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub counties: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub municipalities: Vec<String>,
}

impl ListingQuery {
    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.service_categories.is_empty()
            && self.work_types.is_empty()
            && self.counties.is_empty()
            && self.municipalities.is_empty()
    }
}

/// Filter state for a project listing page.
///
/// Owns the service and location facets the way a page owns its widget
/// states; neither facet can observe or mutate the other.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    services: FilterState,
    locations: FilterState,
}

impl ListingFilter {
    /// Creates a listing filter over the given facet trees.
    pub fn new(service_nodes: Vec<FilterNode>, location_nodes: Vec<FilterNode>) -> Self {
        Self {
            services: FilterState::new(service_nodes),
            locations: FilterState::new(location_nodes),
        }
    }

    /// The service-category facet.
    pub fn services(&self) -> &FilterState {
        &self.services
    }

    /// The service-category facet, mutably.
    pub fn services_mut(&mut self) -> &mut FilterState {
        &mut self.services
    }

    /// The location facet.
    pub fn locations(&self) -> &FilterState {
        &self.locations
    }

    /// The location facet, mutably.
    pub fn locations_mut(&mut self) -> &mut FilterState {
        &mut self.locations
    }

    /// Applies a [`ListingMessage`] to the facet it addresses.
    ///
    /// Returns true if any selection changed, so the host can decide
    /// whether a refetch is worth scheduling.
    pub fn update(&mut self, message: ListingMessage) -> bool {
        match message {
            ListingMessage::Service(message) => self.services.update(message),
            ListingMessage::Location(message) => self.locations.update(message),
            ListingMessage::ResetAll => {
                let changed = !self.services.is_empty() || !self.locations.is_empty();
                self.services.reset();
                self.locations.reset();
                changed
            }
        }
    }

    /// Builds the filter parameters for an outbound listing request.
    pub fn to_query(&self) -> ListingQuery {
        let services = self.services.snapshot();
        let locations = self.locations.snapshot();

        let query = ListingQuery {
            service_categories: services.parents,
            work_types: services.children,
            counties: locations.parents,
            municipalities: locations.children,
        };

        tracing::debug!(
            service_categories = query.service_categories.len(),
            work_types = query.work_types.len(),
            counties = query.counties.len(),
            municipalities = query.municipalities.len(),
            "built listing query"
        );

        query
    }

    /// The current filter as query-string pairs, comma-joined per key.
    ///
    /// Empty facets are omitted, matching the serialized payload.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.to_query();

        [
            ("serviceCategories", query.service_categories),
            ("workTypes", query.work_types),
            ("counties", query.counties),
            ("municipalities", query.municipalities),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(key, values)| (key.to_string(), values.join(",")))
        .collect()
    }
}
