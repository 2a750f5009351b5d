use tracing::{debug, warn};

use super::{ensure_source, Distance, DistanceResult, PathEngine, RouteAlgorithm};
use crate::error::Result;
use crate::graph::{CityId, Graph};
use crate::time_slot::TimeSlot;

/// Bellman-Ford relaxation over at most `V - 1` passes.
///
/// Each pass visits edges in [`Graph::list_edges`] order (ascending source
/// id, then insertion order), so equal-cost ties always resolve to the same
/// predecessor. A pass that relaxes nothing ends the loop early; later passes
/// could not change the result. No negative-cycle pass is run: with a
/// negative cycle the output is whatever `V - 1` passes produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordEngine;

impl PathEngine for BellmanFordEngine {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::BellmanFord
    }

    fn shortest_paths(
        &self,
        graph: &Graph,
        source: CityId,
        slot: TimeSlot,
    ) -> Result<DistanceResult> {
        ensure_source(graph, source)?;

        let vertex_count = graph.vertex_count();
        let mut result = DistanceResult::initial(vertex_count, source, slot);
        let mut passes = 0usize;

        for _ in 1..vertex_count {
            passes += 1;
            if !relax_all(graph, slot, &mut result) {
                break;
            }
        }

        debug!(source, %slot, passes, vertex_count, "bellman-ford finished");
        Ok(result)
    }
}

/// One full pass over every edge. Returns whether any distance improved.
fn relax_all(graph: &Graph, slot: TimeSlot, result: &mut DistanceResult) -> bool {
    let mut changed = false;
    for edge in graph.list_edges() {
        let Distance::Finite(from_cost) = result.distance(edge.from) else {
            continue;
        };
        let Some(candidate) = edge
            .cost(slot)
            .and_then(|cost| from_cost.checked_add(cost))
        else {
            warn!(from = edge.from, to = edge.to, "skipping relaxation that overflows");
            continue;
        };
        if Distance::Finite(candidate) < result.distance(edge.to) {
            result.relax(edge.to, candidate, edge.from);
            changed = true;
        }
    }
    changed
}
