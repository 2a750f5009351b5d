//! Single-source shortest paths over a [`Graph`] for one [`TimeSlot`].
//!
//! This module provides:
//! - [`Distance`] - Finite cost or explicit "unreachable" marker
//! - [`DistanceResult`] - Distances and predecessors produced per query
//! - [`PathEngine`] - Strategy trait implemented by each algorithm
//! - [`shortest_paths`] - Bellman-Ford entry point used by the query façade
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own engine struct behind the
//! [`PathEngine`] trait, selected at runtime with [`select_engine`].
//! [`BellmanFordEngine`] is the default and tolerates negative edge costs;
//! [`DijkstraEngine`] is faster but refuses them.

mod bellman_ford;
mod dijkstra;

pub use bellman_ford::BellmanFordEngine;
pub use dijkstra::DijkstraEngine;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, Weight};
use crate::path::reconstruct_path;
use crate::time_slot::TimeSlot;

/// Minimum known cost to reach a city.
///
/// Ordering treats every finite cost as smaller than `Unreachable`, so the
/// engines never compare against a magic maximum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    /// Finite cost, if any.
    pub fn cost(self) -> Option<Weight> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{cost}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.cost().serialize(serializer)
    }
}

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Edge relaxation over `V - 1` passes; handles negative costs.
    #[default]
    BellmanFord,
    /// Priority-queue search; requires non-negative costs.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::BellmanFord => "bellman-ford",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Output of one single-source query. Owned by the caller, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceResult {
    source: CityId,
    slot: TimeSlot,
    distances: Vec<Distance>,
    predecessors: Vec<Option<CityId>>,
}

impl DistanceResult {
    /// Fresh state: source at zero, everything else unreachable, no predecessors.
    pub(crate) fn initial(vertex_count: usize, source: CityId, slot: TimeSlot) -> Self {
        let mut distances = vec![Distance::Unreachable; vertex_count];
        distances[source] = Distance::Finite(0);
        Self {
            source,
            slot,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// Record `distance` for `city` reached through `via`.
    pub(crate) fn relax(&mut self, city: CityId, distance: Weight, via: CityId) {
        self.distances[city] = Distance::Finite(distance);
        self.predecessors[city] = Some(via);
    }

    pub fn source(&self) -> CityId {
        self.source
    }

    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Distance to `city`; ids outside the graph are unreachable.
    pub fn distance(&self, city: CityId) -> Distance {
        self.distances
            .get(city)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Previous city on the best known route to `city`.
    pub fn predecessor(&self, city: CityId) -> Option<CityId> {
        self.predecessors.get(city).copied().flatten()
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<CityId>] {
        &self.predecessors
    }

    /// Reconstruct the route from the source to `destination`.
    pub fn path_to(&self, destination: CityId) -> Result<Vec<CityId>> {
        reconstruct_path(self.source, destination, &self.predecessors)
    }
}

/// Trait for shortest-path strategies.
pub trait PathEngine: Send + Sync {
    /// The algorithm identifier for this engine.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Compute distances and predecessors from `source` for `slot`.
    fn shortest_paths(
        &self,
        graph: &Graph,
        source: CityId,
        slot: TimeSlot,
    ) -> Result<DistanceResult>;
}

/// Select the engine implementing `algorithm`.
pub fn select_engine(algorithm: RouteAlgorithm) -> Box<dyn PathEngine> {
    match algorithm {
        RouteAlgorithm::BellmanFord => Box::new(BellmanFordEngine),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraEngine),
    }
}

/// Run Bellman-Ford from `source` for `slot`.
pub fn shortest_paths(graph: &Graph, source: CityId, slot: TimeSlot) -> Result<DistanceResult> {
    BellmanFordEngine.shortest_paths(graph, source, slot)
}

fn ensure_source(graph: &Graph, source: CityId) -> Result<()> {
    if graph.contains_city(source) {
        Ok(())
    } else {
        Err(Error::UnknownCityId { id: source })
    }
}
