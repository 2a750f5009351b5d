mod common;

#[test]
fn misspelled_city_suggests_the_intended_one() {
    let graph = common::fixture_graph();
    let suggestions = graph.registry().fuzzy_matches("Varansi", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("Varanasi"));
}

#[test]
fn lowercase_query_still_matches() {
    let graph = common::fixture_graph();
    let suggestions = graph.registry().fuzzy_matches("lucknow", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("Lucknow"));
}

#[test]
fn suggestions_are_capped() {
    let graph = common::fixture_graph();
    assert!(graph.registry().fuzzy_matches("a", 2).len() <= 2);
}

#[test]
fn unrelated_query_has_no_suggestions() {
    let graph = common::fixture_graph();
    assert!(graph.registry().fuzzy_matches("Xyzzyq", 3).is_empty());
}
