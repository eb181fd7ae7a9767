pub mod allocator;
pub mod analysis;
pub mod error;
pub mod graph;
pub mod handle;
pub mod matching;
pub mod network;
pub mod planner;
pub mod spanning_tree;
pub mod tour;

pub use allocator::{allocate, allocate_exact};
pub use analysis::analyze;
pub use error::{ConfigurationError, EngineError, Result};
pub use handle::{NetworkHandle, NetworkSlot};
pub use matching::{match_donations, recipient_urgencies};
pub use network::{Edge, Network, Node};
pub use planner::{rank_routes, RoutePlanner};
pub use tour::approximate_tour;

use foodnet_structs::{
    config::{NetworkConfig, PlannerConfig},
    core::{AllocationResult, CargoItem, NodeDefinition, PathResult, Route, SpanningTree},
};

/// Builds an immutable network snapshot with the default congestion range.
///
/// Without a seed the congestion multipliers come from OS entropy and the build is not
/// reproducible.
pub fn build_network(
    node_definitions: Vec<NodeDefinition>,
    rng_seed: Option<[u8; 32]>,
) -> Result<NetworkHandle> {
    NetworkHandle::build(node_definitions, &NetworkConfig::default(), rng_seed)
}

pub fn build_network_with_config(
    node_definitions: Vec<NodeDefinition>,
    config: &NetworkConfig,
    rng_seed: Option<[u8; 32]>,
) -> Result<NetworkHandle> {
    NetworkHandle::build(node_definitions, config, rng_seed)
}

pub fn plan_routes(handle: &NetworkHandle) -> Result<Vec<Route>> {
    plan_routes_with_config(handle, &PlannerConfig::default())
}

pub fn plan_routes_with_config(
    handle: &NetworkHandle,
    config: &PlannerConfig,
) -> Result<Vec<Route>> {
    RoutePlanner::new(handle, config).plan()
}

pub fn minimum_spanning_tree(handle: &NetworkHandle) -> Result<SpanningTree> {
    spanning_tree::minimum_spanning_tree(handle)
}

pub fn allocate_capacity(items: &[CargoItem], capacity: i64) -> AllocationResult {
    allocate(items, capacity)
}

pub fn shortest_path(handle: &NetworkHandle, source: &str, target: &str) -> Result<PathResult> {
    handle.shortest_path(source, target)
}
