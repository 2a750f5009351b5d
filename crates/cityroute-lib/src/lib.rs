//! cityroute library entry points.
//!
//! This crate exposes helpers to locate and load a city graph, resolve city
//! names, and compute time-of-day aware shortest routes. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod engine;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod path;
pub mod registry;
pub mod routing;
pub mod time_slot;

pub use dataset::{default_graph_path, resolve_graph_path, GRAPH_FILENAME, GRAPH_PATH_ENV};
pub use engine::{
    select_engine, shortest_paths, BellmanFordEngine, DijkstraEngine, Distance, DistanceResult,
    PathEngine, RouteAlgorithm,
};
pub use error::{Error, Result};
pub use graph::{CityId, Edge, Graph, TrafficWeights, Weight};
pub use loader::{
    build_graph, load_graph, parse_graph_document, CityRecord, EdgeRecord, GraphDocument,
    LoadOptions, TrafficRecord,
};
pub use output::{EdgeEntry, EdgeListing, RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::reconstruct_path;
pub use registry::{City, CityRegistry};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use time_slot::{parse_time_slot, TimeSlot};
