use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use super::{ensure_source, Distance, DistanceResult, PathEngine, RouteAlgorithm};
use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, Weight};
use crate::time_slot::TimeSlot;

/// Dijkstra's algorithm with a binary heap.
///
/// Only valid when every edge cost is non-negative for the slot; the whole
/// graph is checked up front and the first negative edge is reported as
/// [`Error::NegativeEdgeCost`]. Distances match [`super::BellmanFordEngine`];
/// among equal-cost routes the recorded predecessor may differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn shortest_paths(
        &self,
        graph: &Graph,
        source: CityId,
        slot: TimeSlot,
    ) -> Result<DistanceResult> {
        ensure_source(graph, source)?;
        ensure_non_negative(graph, slot)?;

        let mut result = DistanceResult::initial(graph.vertex_count(), source, slot);
        let mut queue = BinaryHeap::new();
        let mut settled = 0usize;
        queue.push(QueueEntry::new(source, 0));

        while let Some(entry) = queue.pop() {
            if Distance::Finite(entry.cost) > result.distance(entry.node) {
                continue;
            }
            settled += 1;

            for edge in graph.neighbours(entry.node) {
                let Some(next_cost) = edge
                    .cost(slot)
                    .and_then(|cost| entry.cost.checked_add(cost))
                else {
                    warn!(from = edge.from, to = edge.to, "skipping relaxation that overflows");
                    continue;
                };
                if Distance::Finite(next_cost) < result.distance(edge.to) {
                    result.relax(edge.to, next_cost, entry.node);
                    queue.push(QueueEntry::new(edge.to, next_cost));
                }
            }
        }

        debug!(source, %slot, settled, "dijkstra finished");
        Ok(result)
    }
}

fn ensure_non_negative(graph: &Graph, slot: TimeSlot) -> Result<()> {
    let negative = graph.list_edges().find_map(|edge| {
        edge.cost(slot)
            .filter(|cost| *cost < 0)
            .map(|cost| (edge, cost))
    });
    match negative {
        Some((edge, cost)) => Err(Error::NegativeEdgeCost {
            from: edge.from,
            to: edge.to,
            slot,
            cost,
        }),
        None => Ok(()),
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: CityId,
    cost: Weight,
}

impl QueueEntry {
    fn new(node: CityId, cost: Weight) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
