//! JSON graph documents.
//!
//! The loader only talks to the graph through [`Graph::add_city`] and
//! [`Graph::add_edge`], so every construction rule is enforced in one place.
//! The first failing record aborts the load; a partial graph is never
//! returned.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, Weight};
use crate::time_slot::TimeSlot;

/// Parsed graph document: `{"cities": [...], "edges": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: CityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: CityId,
    pub v: CityId,
    pub base: Weight,
    #[serde(default)]
    pub traffic: TrafficRecord,
}

/// Traffic weights as written in the document. Slots are optional here so a
/// missing one surfaces as [`Error::IncompleteTraffic`] instead of a JSON error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<Weight>,
}

impl TrafficRecord {
    fn to_slots(&self) -> HashMap<TimeSlot, Weight> {
        [
            (TimeSlot::Morning, self.morning),
            (TimeSlot::Afternoon, self.afternoon),
            (TimeSlot::Evening, self.evening),
        ]
        .into_iter()
        .filter_map(|(slot, weight)| weight.map(|weight| (slot, weight)))
        .collect()
    }
}

/// Vertex slots allowed per declared city before a capacity is refused.
const SLOTS_PER_CITY: usize = 4;
/// Capacities up to this many slots are always accepted.
const MIN_CAPACITY_LIMIT: usize = 1024;

impl GraphDocument {
    /// Smallest capacity that fits every declared city id.
    pub fn inferred_capacity(&self) -> Result<usize> {
        self.cities.iter().try_fold(0usize, |capacity, city| -> Result<usize> {
            let needed = city
                .id
                .checked_add(1)
                .ok_or(Error::CityIdOutOfRange {
                    id: city.id,
                    capacity: usize::MAX,
                })?;
            Ok(capacity.max(needed))
        })
    }

    /// Largest capacity [`build_graph`] will allocate for this document.
    pub fn capacity_limit(&self) -> usize {
        self.cities
            .len()
            .saturating_mul(SLOTS_PER_CITY)
            .max(MIN_CAPACITY_LIMIT)
    }
}

/// Options controlling how a document becomes a [`Graph`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Vertex capacity; inferred from the largest city id when `None`.
    pub capacity: Option<usize>,
}

/// Parse a graph document from JSON text.
pub fn parse_graph_document(text: &str) -> Result<GraphDocument> {
    Ok(serde_json::from_str(text)?)
}

/// Populate a new graph from a parsed document.
pub fn build_graph(document: &GraphDocument, options: &LoadOptions) -> Result<Graph> {
    let capacity = match options.capacity {
        Some(capacity) => capacity,
        None => document.inferred_capacity()?,
    };
    let limit = document.capacity_limit();
    if capacity > limit {
        return Err(Error::CapacityTooLarge { capacity, limit });
    }
    let mut graph = Graph::with_capacity(capacity);

    for city in &document.cities {
        graph.add_city(city.id, &city.name)?;
    }
    for edge in &document.edges {
        graph.add_edge(edge.u, edge.v, edge.base, &edge.traffic.to_slots())?;
    }

    debug!(
        capacity,
        cities = document.cities.len(),
        edges = document.edges.len(),
        "built graph from document"
    );
    Ok(graph)
}

/// Read, parse, and build the graph stored at `path`.
pub fn load_graph(path: &Path, options: &LoadOptions) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::GraphFileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    let document = parse_graph_document(&text)?;
    let graph = build_graph(&document, options)?;

    info!(
        path = %path.display(),
        cities = document.cities.len(),
        edges = document.edges.len(),
        "loaded graph"
    );
    Ok(graph)
}
