//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use cityroute_lib::{load_graph, Graph, LoadOptions, TrafficWeights};

/// Path to the checked-in fixture graph.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/cities_and_edges.json")
}

/// Load the fixture graph with an inferred capacity.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    load_graph(&fixture_path(), &LoadOptions::default()).expect("fixture graph loads")
}

/// Cities A=0, B=1, C=2 plus an isolated D=3.
///
/// A-B base 5 (morning 2, afternoon 1, evening 4);
/// B-C base 3 (morning 1, afternoon 5, evening 0).
#[allow(dead_code)]
pub fn abc_graph() -> Graph {
    let mut graph = Graph::with_capacity(4);
    graph.add_city(0, "A").expect("add A");
    graph.add_city(1, "B").expect("add B");
    graph.add_city(2, "C").expect("add C");
    graph.add_city(3, "D").expect("add D");
    graph
        .add_edge_weights(0, 1, 5, TrafficWeights::new(2, 1, 4))
        .expect("add A-B");
    graph
        .add_edge_weights(1, 2, 3, TrafficWeights::new(1, 5, 0))
        .expect("add B-C");
    graph
}

/// Square A-B-D / A-C-D where both routes to D cost the same at every slot.
#[allow(dead_code)]
pub fn tied_square() -> Graph {
    let mut graph = Graph::with_capacity(4);
    for (id, name) in ["A", "B", "C", "D"].iter().enumerate() {
        graph.add_city(id, name).expect("add city");
    }
    let flat = TrafficWeights::new(1, 1, 1);
    graph.add_edge_weights(0, 1, 2, flat).expect("add A-B");
    graph.add_edge_weights(0, 2, 2, flat).expect("add A-C");
    graph.add_edge_weights(1, 3, 2, flat).expect("add B-D");
    graph.add_edge_weights(2, 3, 2, flat).expect("add C-D");
    graph
}
