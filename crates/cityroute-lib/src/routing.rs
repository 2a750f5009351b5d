//! Query façade: named cities and a time slot in, a [`RoutePlan`] out.
//!
//! Name resolution happens here and nowhere deeper; the engines only see ids.
//!
//! # Example
//!
//! ```ignore
//! use cityroute_lib::{load_graph, plan_route, LoadOptions, RouteRequest, TimeSlot};
//!
//! let graph = load_graph("cities_and_edges.json".as_ref(), &LoadOptions::default())?;
//! let plan = plan_route(&graph, &RouteRequest::new("Delhi", "Agra", TimeSlot::Morning))?;
//! println!("{} hops, cost {}", plan.hop_count(), plan.cost);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::engine::{select_engine, RouteAlgorithm};
use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, Weight};
use crate::time_slot::TimeSlot;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub slot: TimeSlot,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request using the default Bellman-Ford engine.
    pub fn new(start: impl Into<String>, goal: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            slot,
            algorithm: RouteAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub slot: TimeSlot,
    pub start: CityId,
    pub goal: CityId,
    pub steps: Vec<CityId>,
    pub cost: Weight,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the cheapest route for `request`.
///
/// Unknown names fail with [`Error::UnknownCity`]; an unreachable goal fails
/// with [`Error::RouteNotFound`]. Neither affects the graph or later queries.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = graph.resolve_city_id(&request.start)?;
    let goal_id = graph.resolve_city_id(&request.goal)?;

    let engine = select_engine(request.algorithm);
    let result = engine.shortest_paths(graph, start_id, request.slot)?;

    let not_found = || Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
        slot: request.slot,
    };

    let Some(cost) = result.distance(goal_id).cost() else {
        return Err(not_found());
    };
    let steps = match result.path_to(goal_id) {
        Ok(steps) => steps,
        Err(Error::Unreachable { .. }) => return Err(not_found()),
        Err(other) => return Err(other),
    };

    debug!(
        start = %request.start,
        goal = %request.goal,
        slot = %request.slot,
        cost,
        hops = steps.len().saturating_sub(1),
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: engine.algorithm(),
        slot: request.slot,
        start: start_id,
        goal: goal_id,
        steps,
        cost,
    })
}
