mod common;

use common::*;
use foodnet_engine::*;
use foodnet_structs::{
    config::{CollectionPriorityPolicy, PlannerConfig},
    core::{Priority, RouteKind, VehicleType},
};

#[test]
fn test_plan_covers_every_recipient_and_donor() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let routes = plan_routes(&network).unwrap();
    assert_eq!(routes.len(), 8);

    let count = |kind| routes.iter().filter(|r| r.kind == kind).count();
    assert_eq!(count(RouteKind::Distribution), 4);
    assert_eq!(count(RouteKind::Collection), 3);
    assert_eq!(count(RouteKind::MultiDelivery), 1);
}

#[test]
fn test_high_priority_routes_come_first() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let routes = plan_routes(&network).unwrap();
    let order: Vec<(&str, &str, Priority)> = routes
        .iter()
        .map(|r| (r.origin.as_str(), r.destination.as_str(), r.priority))
        .collect();
    assert_eq!(
        order,
        vec![
            ("central_hub", "ngo_1", Priority::High),
            ("donor_1", "central_hub", Priority::High),
            ("central_hub", "ngo_2", Priority::Medium),
            ("central_hub", "ngo_3", Priority::Medium),
            ("central_hub", "ngo_4", Priority::Medium),
            ("donor_2", "central_hub", Priority::Medium),
            ("donor_3", "central_hub", Priority::Medium),
            ("central_hub", "central_hub", Priority::Medium),
        ]
    );
}

#[test]
fn test_route_fields_follow_kind() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    for route in plan_routes(&network).unwrap() {
        assert_eq!(route.vehicle_type, route.kind.vehicle_type());
        assert_eq!(route.stops, route.path.len() - 1);
        assert_eq!(route.path.first(), Some(&route.origin));
        assert_eq!(route.path.last(), Some(&route.destination));
        match route.kind {
            RouteKind::MultiDelivery => {
                assert_eq!(route.vehicle_type, VehicleType::LargeTruck);
                assert_eq!(route.path.len(), 5);
                assert!(route.efficiency_gain.is_some());
                assert!((route.estimated_time - route.distance * 3.0).abs() < 0.1);
            }
            _ => {
                assert!(route.efficiency_gain.is_none());
                let cost = shortest_path(&network, &route.origin, &route.destination)
                    .unwrap()
                    .cost();
                assert_eq!(route.distance, (cost * 100.0).round() / 100.0);
                assert!((route.estimated_time - route.distance * 2.5).abs() < 0.1);
            }
        }
    }
}

#[test]
fn test_planning_is_idempotent() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let first = plan_routes(&network).unwrap();
    assert_eq!(plan_routes(&network).unwrap(), first);

    let rebuilt = build_network(nyc_nodes(), Some(SEED)).unwrap();
    assert_eq!(plan_routes(&rebuilt).unwrap(), first);
}

#[test]
fn test_uniform_collection_priority_is_reproducible() {
    let config = PlannerConfig {
        collection_priority: CollectionPriorityPolicy::Uniform,
        ..Default::default()
    };
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let first = plan_routes_with_config(&network, &config).unwrap();
    let again = plan_routes_with_config(&network, &config).unwrap();
    assert_eq!(first, again);

    let collections: Vec<_> = first
        .iter()
        .filter(|r| r.kind == RouteKind::Collection)
        .collect();
    assert_eq!(collections.len(), 3);
}

#[test]
fn test_tour_size_is_configurable() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();

    let single = PlannerConfig {
        max_tour_stops: 1,
        ..Default::default()
    };
    let routes = plan_routes_with_config(&network, &single).unwrap();
    assert_eq!(routes.len(), 7);
    assert!(routes.iter().all(|r| r.kind != RouteKind::MultiDelivery));

    let all = PlannerConfig {
        max_tour_stops: 10,
        ..Default::default()
    };
    let routes = plan_routes_with_config(&network, &all).unwrap();
    let tour = routes
        .iter()
        .find(|r| r.kind == RouteKind::MultiDelivery)
        .unwrap();
    assert_eq!(tour.path.len(), 6);
}

#[test]
fn test_network_without_donors() {
    let network = build_network(small_nodes(), Some(SEED)).unwrap();
    let routes = plan_routes(&network).unwrap();
    assert_eq!(routes.len(), 4);
    assert_eq!(routes[0].destination, "pantry_b");
    assert_eq!(routes[0].priority, Priority::High);
    assert_eq!(routes[3].kind, RouteKind::MultiDelivery);
}

#[test]
fn test_ranking_is_stable() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let planner_config = PlannerConfig::default();
    let planner = RoutePlanner::new(&network, &planner_config);
    let mut routes = planner.collection_routes();
    routes.extend(planner.distribution_routes());
    let ranked = rank_routes(routes.clone());
    let high: Vec<_> = routes.iter().filter(|r| r.priority == Priority::High).collect();
    let rest: Vec<_> = routes.iter().filter(|r| r.priority != Priority::High).collect();
    let expected: Vec<_> = high.into_iter().chain(rest).cloned().collect();
    assert_eq!(ranked, expected);
}
