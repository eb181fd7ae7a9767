use crate::{
    error::{EngineError, Result},
    network::Network,
};
use foodnet_structs::core::Tour;
use foodnet_utils::{percent_of, round_to};

/// Closed multi-stop tour from the hub through `stops` and back, built with the
/// nearest-neighbour heuristic.
///
/// From the current position the tour moves to the unvisited stop with the cheapest
/// shortest-path cost, earlier stops winning ties. This is a greedy approximation: the
/// result is not optimal and carries no bound on how far from optimal it is.
///
/// Stops are usually recipients, but any non-hub node is accepted, so a tour may also
/// pass donors or storage sites. Duplicate stops and the hub itself are ignored. Fewer
/// than two remaining stops yield `Ok(None)`.
pub fn approximate_tour<S: AsRef<str>>(
    network: &Network,
    stops: &[S],
    time_factor: f64,
) -> Result<Option<Tour>> {
    let hub = network.hub_index();
    let mut unvisited: Vec<usize> = network
        .resolve_unique(stops)?
        .into_iter()
        .filter(|&s| s != hub)
        .collect();
    if unvisited.len() < 2 {
        return Ok(None);
    }

    let graph = network.graph();
    // Baseline: a separate hub round trip per stop
    let from_hub = graph.shortest_distances(hub);
    let out_and_back: f64 = unvisited.iter().map(|&s| 2.0 * from_hub[s]).sum();

    let mut path = vec![hub];
    let mut total = 0.0;
    let mut current = hub;
    while !unvisited.is_empty() {
        let costs = graph.shortest_distances(current);
        let mut best = 0;
        for i in 1..unvisited.len() {
            if costs[unvisited[i]] < costs[unvisited[best]] {
                best = i;
            }
        }
        let next = unvisited.remove(best);
        if costs[next].is_infinite() {
            return Err(disconnected(network, &path));
        }
        total += costs[next];
        path.push(next);
        current = next;
    }

    let back = graph.shortest_distances(current)[hub];
    if back.is_infinite() {
        return Err(disconnected(network, &path));
    }
    total += back;
    path.push(hub);

    Ok(Some(Tour {
        path: network.ids(&path),
        total_distance: round_to(total, 2),
        estimated_time: round_to(total * time_factor, 1),
        efficiency_gain: round_to(percent_of(out_and_back - total, out_and_back), 1),
    }))
}

fn disconnected(network: &Network, reached: &[usize]) -> EngineError {
    EngineError::Disconnected {
        reached: reached.len(),
        total: network.num_nodes(),
    }
}
