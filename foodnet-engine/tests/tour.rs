mod common;

use common::*;
use foodnet_engine::*;

#[test]
fn test_tour_starts_and_ends_at_hub() {
    let network = build_network(small_nodes(), Some(SEED)).unwrap();
    let tour = approximate_tour(&network, &["pantry_a", "pantry_b", "pantry_c"], 3.0)
        .unwrap()
        .unwrap();
    assert_eq!(tour.path.len(), 5);
    assert_eq!(tour.path.first().map(String::as_str), Some("hub"));
    assert_eq!(tour.path.last().map(String::as_str), Some("hub"));
    assert_eq!(tour.stops(), 4);

    let mut visited = tour.path[1..4].to_vec();
    visited.sort();
    assert_eq!(visited, vec!["pantry_a", "pantry_b", "pantry_c"]);
}

#[test]
fn test_tour_distance_is_sum_of_legs() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let tour = approximate_tour(&network, &["ngo_1", "ngo_2", "ngo_3", "ngo_4"], 3.0)
        .unwrap()
        .unwrap();
    let legs: f64 = tour
        .path
        .windows(2)
        .map(|w| shortest_path(&network, &w[0], &w[1]).unwrap().cost())
        .sum();
    assert!((legs - tour.total_distance).abs() < 0.01);
    assert!((tour.estimated_time - tour.total_distance * 3.0).abs() < 0.1);
}

#[test]
fn test_first_leg_goes_to_nearest_stop() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let stops = ["ngo_1", "ngo_2", "ngo_3"];
    let tour = approximate_tour(&network, &stops, 3.0).unwrap().unwrap();
    let nearest = stops
        .iter()
        .map(|s| (shortest_path(&network, "central_hub", s).unwrap().cost(), *s))
        .fold((f64::INFINITY, ""), |best, c| if c.0 < best.0 { c } else { best });
    assert_eq!(tour.path[1], nearest.1);
}

#[test]
fn test_tour_never_worse_than_separate_trips() {
    for seed_byte in 0..8u8 {
        let network = build_network(nyc_nodes(), Some([seed_byte; 32])).unwrap();
        let tour = approximate_tour(&network, &["ngo_1", "ngo_2", "ngo_3", "ngo_4"], 3.0)
            .unwrap()
            .unwrap();
        assert!(tour.efficiency_gain >= 0.0);
    }
}

#[test]
fn test_too_few_stops_yield_no_tour() {
    let network = build_network(small_nodes(), Some(SEED)).unwrap();
    let none: [&str; 0] = [];
    assert_eq!(approximate_tour(&network, &none, 3.0).unwrap(), None);
    assert_eq!(approximate_tour(&network, &["pantry_a"], 3.0).unwrap(), None);
    assert_eq!(
        approximate_tour(&network, &["pantry_a", "pantry_a", "hub"], 3.0).unwrap(),
        None
    );
}

#[test]
fn test_duplicate_stops_are_visited_once() {
    let network = build_network(small_nodes(), Some(SEED)).unwrap();
    let tour = approximate_tour(&network, &["pantry_a", "pantry_b", "pantry_a"], 3.0)
        .unwrap()
        .unwrap();
    assert_eq!(tour.path.len(), 4);
}

#[test]
fn test_unknown_stop_is_an_error() {
    let network = build_network(small_nodes(), Some(SEED)).unwrap();
    assert_eq!(
        approximate_tour(&network, &["pantry_a", "nowhere"], 3.0).unwrap_err(),
        EngineError::UnknownNode("nowhere".to_string())
    );
}

#[test]
fn test_tour_accepts_any_non_hub_stop() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let tour = approximate_tour(&network, &["donor_1", "storage_1", "ngo_1"], 3.0)
        .unwrap()
        .unwrap();
    assert_eq!(tour.path.len(), 5);
    let mut visited = tour.path[1..4].to_vec();
    visited.sort();
    assert_eq!(visited, vec!["donor_1", "ngo_1", "storage_1"]);
}
