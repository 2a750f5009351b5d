use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::registry::{City, CityRegistry};
use crate::time_slot::TimeSlot;

/// Dense identifier for a city, in `[0, capacity)`.
pub type CityId = usize;

/// Scalar edge weight. Signed so the engines stay correct for negative costs.
pub type Weight = i64;

/// Traffic weight for every time slot. Total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficWeights {
    pub morning: Weight,
    pub afternoon: Weight,
    pub evening: Weight,
}

impl TrafficWeights {
    pub fn new(morning: Weight, afternoon: Weight, evening: Weight) -> Self {
        Self {
            morning,
            afternoon,
            evening,
        }
    }

    /// Build from a partial slot mapping, reporting the first missing slot.
    pub fn from_slots(slots: &HashMap<TimeSlot, Weight>) -> std::result::Result<Self, TimeSlot> {
        let get = |slot: TimeSlot| slots.get(&slot).copied().ok_or(slot);
        Ok(Self {
            morning: get(TimeSlot::Morning)?,
            afternoon: get(TimeSlot::Afternoon)?,
            evening: get(TimeSlot::Evening)?,
        })
    }

    /// Weight that applies during `slot`.
    pub fn get(&self, slot: TimeSlot) -> Weight {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }
}

/// Directed adjacency entry. Every logical edge is stored twice, once per
/// direction, with identical weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: CityId,
    pub to: CityId,
    pub base: Weight,
    pub traffic: TrafficWeights,
}

impl Edge {
    /// Combined traversal cost `base + traffic[slot]`, or `None` when the
    /// sum does not fit a [`Weight`].
    pub fn cost(&self, slot: TimeSlot) -> Option<Weight> {
        self.base.checked_add(self.traffic.get(slot))
    }
}

/// Undirected city graph with time-dependent edge weights.
///
/// Built once through [`Graph::add_city`] and [`Graph::add_edge`], then only
/// read. Adjacency is an array of edge lists indexed by city id, so neighbour
/// lookup never hashes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    registry: CityRegistry,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph accepting city ids in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: CityRegistry::with_capacity(capacity),
            adjacency: vec![Vec::new(); capacity],
        }
    }

    /// Number of vertex slots (`V`), registered or not.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (twice the logical edge count).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Register a city. Fails when the id or the name is already taken.
    pub fn add_city(&mut self, id: CityId, name: &str) -> Result<()> {
        self.registry.register(id, name)
    }

    /// Add an undirected edge from a slot mapping that must cover every
    /// [`TimeSlot`].
    pub fn add_edge(
        &mut self,
        u: CityId,
        v: CityId,
        base: Weight,
        traffic: &HashMap<TimeSlot, Weight>,
    ) -> Result<()> {
        self.ensure_city(u)?;
        self.ensure_city(v)?;
        let traffic = TrafficWeights::from_slots(traffic).map_err(|missing| {
            Error::IncompleteTraffic {
                from: u,
                to: v,
                missing,
            }
        })?;
        self.insert_edge(u, v, base, traffic);
        Ok(())
    }

    /// Add an undirected edge with an already complete set of traffic weights.
    pub fn add_edge_weights(
        &mut self,
        u: CityId,
        v: CityId,
        base: Weight,
        traffic: TrafficWeights,
    ) -> Result<()> {
        self.ensure_city(u)?;
        self.ensure_city(v)?;
        self.insert_edge(u, v, base, traffic);
        Ok(())
    }

    fn insert_edge(&mut self, u: CityId, v: CityId, base: Weight, traffic: TrafficWeights) {
        if u == v {
            warn!(city = u, "adding self-loop edge");
        }
        self.adjacency[u].push(Edge {
            from: u,
            to: v,
            base,
            traffic,
        });
        self.adjacency[v].push(Edge {
            from: v,
            to: u,
            base,
            traffic,
        });
    }

    fn ensure_city(&self, id: CityId) -> Result<()> {
        if self.registry.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownCityId { id })
        }
    }

    /// Whether `id` names a registered city.
    pub fn contains_city(&self, id: CityId) -> bool {
        self.registry.contains(id)
    }

    /// Resolve a case-sensitive city name to its id.
    pub fn resolve_city_id(&self, name: &str) -> Result<CityId> {
        self.registry.resolve(name)
    }

    /// Lookup a city name by identifier.
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.registry.name(id)
    }

    /// Registered cities in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.registry.cities()
    }

    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// Outgoing adjacency entries of a city, in insertion order.
    pub fn neighbours(&self, id: CityId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every directed adjacency entry: ascending source id, then insertion
    /// order. Each call starts a fresh pass over the same sequence.
    pub fn list_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Cheapest cost of a direct edge `from -> to` during `slot`. Edges whose
    /// cost overflows are ignored.
    pub fn edge_cost(&self, from: CityId, to: CityId, slot: TimeSlot) -> Option<Weight> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.to == to)
            .filter_map(|edge| edge.cost(slot))
            .min()
    }
}
