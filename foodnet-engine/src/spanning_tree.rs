use crate::{error::Result, network::Network};
use foodnet_structs::core::{SpanningTree, TreeEdge};
use foodnet_utils::{percent_of, round_to};

/// Minimum-cost backbone connecting every location, grown from the hub.
///
/// `cost_reduction` compares the backbone against linking every node straight to the
/// hub, which is itself a spanning tree, so it is never negative.
pub fn minimum_spanning_tree(network: &Network) -> Result<SpanningTree> {
    let hub = network.hub_index();
    let (tree, total) = network.graph().minimum_spanning_tree(hub)?;

    let star_total: f64 = network
        .graph()
        .neighbours(hub)
        .iter()
        .map(|&(_, w)| w)
        .sum();

    Ok(SpanningTree {
        edges: tree
            .into_iter()
            .map(|(u, v, weight)| TreeEdge {
                from: network.node(u).id.clone(),
                to: network.node(v).id.clone(),
                weight,
            })
            .collect(),
        total_cost: round_to(total, 2),
        cost_reduction: round_to(percent_of(star_total - total, star_total), 1),
    })
}
