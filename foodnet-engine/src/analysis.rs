use crate::network::Network;
use foodnet_structs::core::NetworkAnalysis;
use foodnet_utils::round_to;

/// Structural summary of the network.
///
/// Diameter and center use hop counts; the weighted variants use shortest-path cost.
/// Both are left empty when some node cannot reach another.
pub fn analyze(network: &Network) -> NetworkAnalysis {
    let graph = network.graph();
    let n = graph.num_nodes();
    let m = graph.num_edges();

    let network_density = if n > 1 {
        2.0 * m as f64 / (n as f64 * (n as f64 - 1.0))
    } else {
        0.0
    };

    let mut adjacent = vec![false; n * n];
    for u in 0..n {
        for &(v, _) in graph.neighbours(u) {
            adjacent[u * n + v] = true;
        }
    }
    let clustering_sum: f64 = (0..n)
        .map(|u| {
            let neighbours: Vec<usize> = graph.neighbours(u).iter().map(|&(v, _)| v).collect();
            let k = neighbours.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for i in 0..k {
                for j in (i + 1)..k {
                    if adjacent[neighbours[i] * n + neighbours[j]] {
                        links += 1;
                    }
                }
            }
            2.0 * links as f64 / (k * (k - 1)) as f64
        })
        .sum();
    let average_clustering = if n > 0 { clustering_sum / n as f64 } else { 0.0 };

    let hop_eccentricity: Option<Vec<usize>> = (0..n)
        .map(|u| {
            graph
                .hop_distances(u)
                .into_iter()
                .try_fold(0usize, |acc, h| h.map(|h| acc.max(h)))
        })
        .collect();
    let weighted_eccentricity: Option<Vec<f64>> = (0..n)
        .map(|u| {
            let dist = graph.shortest_distances(u);
            if dist.iter().any(|d| d.is_infinite()) {
                None
            } else {
                Some(dist.into_iter().fold(0.0, f64::max))
            }
        })
        .collect();

    let (diameter, center_nodes) = match hop_eccentricity {
        Some(ecc) if !ecc.is_empty() => {
            let radius = ecc.iter().copied().min().unwrap_or(0);
            let center = (0..n).filter(|&u| ecc[u] == radius).collect::<Vec<_>>();
            (ecc.iter().copied().max(), network.ids(&center))
        }
        _ => (None, Vec::new()),
    };
    let (weighted_diameter, weighted_center) = match weighted_eccentricity {
        Some(ecc) if !ecc.is_empty() => {
            let radius = ecc.iter().copied().fold(f64::INFINITY, f64::min);
            let center = (0..n).filter(|&u| ecc[u] == radius).collect::<Vec<_>>();
            let diameter = ecc.iter().copied().fold(0.0, f64::max);
            (Some(round_to(diameter, 2)), network.ids(&center))
        }
        _ => (None, Vec::new()),
    };

    NetworkAnalysis {
        total_nodes: n,
        total_edges: m,
        network_density: round_to(network_density, 3),
        average_clustering: round_to(average_clustering, 3),
        diameter,
        center_nodes,
        weighted_diameter,
        weighted_center,
    }
}
