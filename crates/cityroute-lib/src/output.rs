use std::fmt::Write;

use serde::Serialize;

use crate::engine::RouteAlgorithm;
use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, TrafficWeights, Weight};
use crate::routing::RoutePlan;
use crate::time_slot::TimeSlot;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header, one line per step with hop cost, and a total.
    PlainText,
    /// Names only, with `+`/`|`/`-` prefixes.
    Basic,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: CityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: CityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cost of the hop into this step; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_cost: Option<Weight>,
    pub cumulative_cost: Weight,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub slot: TimeSlot,
    pub hops: usize,
    pub total_cost: Weight,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with names and per-hop costs.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut cumulative: Weight = 0;
        let mut previous: Option<CityId> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            let hop_cost = previous.and_then(|from| graph.edge_cost(from, id, plan.slot));
            cumulative = cumulative.saturating_add(hop_cost.unwrap_or(0));
            steps.push(RouteStep {
                index,
                id,
                name: graph.city_name(id).map(str::to_string),
                hop_cost,
                cumulative_cost: cumulative,
            });
            previous = Some(id);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            slot: plan.slot,
            hops: plan.hop_count(),
            total_cost: plan.cost,
            start: endpoint(graph, first),
            goal: endpoint(graph, last),
            steps,
        })
    }

    /// Route as a single `A -> B -> C` line.
    pub fn path_line(&self) -> String {
        self.steps
            .iter()
            .map(RouteStep::display_name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Render the summary using the requested presentation mode.
    pub fn render_with(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops; time: {}; algorithm: {}):",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.slot,
            self.algorithm
        );
        for step in &self.steps {
            match step.hop_cost {
                Some(cost) => {
                    let _ = writeln!(buffer, " - {} (+{})", step.display_name(), cost);
                }
                None => {
                    let _ = writeln!(buffer, " - {}", step.display_name());
                }
            }
        }
        let _ = writeln!(buffer, "\nTotal cost: {}", self.total_cost);
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let len = self.steps.len();
        for (i, step) in self.steps.iter().enumerate() {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{} {}", prefix, step.display_name());
        }
        buffer
    }
}

fn endpoint(graph: &Graph, id: CityId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.city_name(id).map(str::to_string),
    }
}

/// One directed adjacency entry with resolved names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EdgeEntry {
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
    pub base: Weight,
    pub traffic: TrafficWeights,
}

/// Every directed adjacency entry of a graph, in [`Graph::list_edges`] order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EdgeListing {
    pub cities: usize,
    pub entries: Vec<EdgeEntry>,
}

impl EdgeListing {
    pub fn from_graph(graph: &Graph) -> Self {
        let entries = graph
            .list_edges()
            .map(|edge| EdgeEntry {
                from: endpoint(graph, edge.from),
                to: endpoint(graph, edge.to),
                base: edge.base,
                traffic: edge.traffic,
            })
            .collect();
        Self {
            cities: graph.cities().count(),
            entries,
        }
    }

    /// One `A -> B (Base: .., Traffic (Morning): .., Afternoon: .., Evening: ..)` line per entry.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                buffer,
                "{} -> {} (Base: {}, Traffic (Morning): {}, Afternoon: {}, Evening: {})",
                entry.from.display_name(),
                entry.to.display_name(),
                entry.base,
                entry.traffic.morning,
                entry.traffic.afternoon,
                entry.traffic.evening
            );
        }
        buffer
    }
}
