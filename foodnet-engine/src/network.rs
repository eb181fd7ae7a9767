use crate::{
    error::{ConfigurationError, EngineError, Result},
    graph::WeightedGraph,
};
use foodnet_structs::{
    config::NetworkConfig,
    core::{Coordinate, NodeDefinition, NodeKind, PathResult},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub coordinate: Coordinate,
}

/// Undirected edge between node indices `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Great-circle distance in km.
    pub distance: f64,
    /// Distance scaled by the congestion multiplier. Used for every path cost.
    pub weight: f64,
}

/// Complete weighted graph over a set of locations with exactly one hub.
///
/// Edge weights are sampled once, when the network is built, and never change.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    hub: usize,
    edges: Vec<Edge>,
    graph: WeightedGraph,
    planning_seed: [u8; 32],
}

impl Network {
    /// Builds the network from a seed so the congestion multipliers are reproducible.
    pub fn from_seed(
        definitions: Vec<NodeDefinition>,
        config: &NetworkConfig,
        seed: [u8; 32],
    ) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed);
        Self::build(definitions, config, &mut rng)
    }

    pub fn from_entropy(definitions: Vec<NodeDefinition>, config: &NetworkConfig) -> Result<Self> {
        let mut rng = SmallRng::from_entropy();
        Self::build(definitions, config, &mut rng)
    }

    /// Validates `definitions` and connects every pair of nodes.
    ///
    /// Each edge draws its own multiplier from `[min_congestion, max_congestion]`, in
    /// node-pair order. One further draw seeds any randomized planning decision.
    pub fn build<R: Rng + ?Sized>(
        definitions: Vec<NodeDefinition>,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if !config.is_valid() {
            return Err(ConfigurationError::InvalidCongestionRange {
                min: config.min_congestion,
                max: config.max_congestion,
            }
            .into());
        }
        if definitions.len() < 2 {
            return Err(ConfigurationError::TooFewNodes(definitions.len()).into());
        }

        let mut index = HashMap::with_capacity(definitions.len());
        let mut nodes = Vec::with_capacity(definitions.len());
        for def in definitions {
            let coordinate = def.coordinate();
            if !coordinate.is_valid() {
                return Err(ConfigurationError::MalformedCoordinate {
                    id: def.id,
                    lat: def.lat,
                    lon: def.lon,
                }
                .into());
            }
            if index.insert(def.id.clone(), nodes.len()).is_some() {
                return Err(ConfigurationError::DuplicateNode(def.id).into());
            }
            nodes.push(Node {
                id: def.id,
                kind: def.kind,
                coordinate,
            });
        }

        let hubs: Vec<usize> = (0..nodes.len()).filter(|&i| nodes[i].kind.is_hub()).collect();
        let hub = match hubs.as_slice() {
            [] => return Err(ConfigurationError::MissingHub.into()),
            [hub] => *hub,
            _ => {
                return Err(ConfigurationError::MultipleHubs(
                    hubs.iter().map(|&i| nodes[i].id.clone()).collect(),
                )
                .into())
            }
        };

        let n = nodes.len();
        let mut edges = Vec::with_capacity(n * (n - 1) / 2);
        let mut graph = WeightedGraph::new(n);
        for a in 0..n {
            for b in (a + 1)..n {
                let distance = nodes[a].coordinate.distance_km(&nodes[b].coordinate);
                let multiplier = rng.gen_range(config.min_congestion..=config.max_congestion);
                let weight = distance * multiplier;
                edges.push(Edge {
                    a,
                    b,
                    distance,
                    weight,
                });
                graph.add_edge(a, b, weight);
            }
        }
        let planning_seed: [u8; 32] = rng.gen();

        debug!(
            "built network with {} nodes and {} edges, hub `{}`",
            n,
            edges.len(),
            nodes[hub].id
        );

        Ok(Self {
            nodes,
            index,
            hub,
            edges,
            graph,
            planning_seed,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| EngineError::UnknownNode(id.to_string()))
    }

    pub fn hub(&self) -> &Node {
        &self.nodes[self.hub]
    }

    pub fn hub_index(&self) -> usize {
        self.hub
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_between(&self, a: usize, b: usize) -> Option<&Edge> {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.edges.iter().find(|e| e.a == a && e.b == b)
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn planning_seed(&self) -> [u8; 32] {
        self.planning_seed
    }

    pub fn recipients(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes.len()).filter(|&i| self.nodes[i].kind.is_recipient())
    }

    pub fn donors(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes.len()).filter(|&i| self.nodes[i].kind.is_donor())
    }

    pub fn ids(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.nodes[i].id.clone()).collect()
    }

    /// Resolves ids to indices, keeping the first occurrence of each.
    pub fn resolve_unique<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<usize>> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            let idx = self.index_of(id.as_ref())?;
            if seen.insert(idx) {
                resolved.push(idx);
            }
        }
        Ok(resolved)
    }

    pub fn shortest_path(&self, source: &str, target: &str) -> Result<PathResult> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        Ok(self.shortest_path_between(s, t))
    }

    pub fn shortest_path_between(&self, source: usize, target: usize) -> PathResult {
        match self.graph.shortest_path(source, target) {
            Some((path, cost)) => PathResult::Found {
                path: self.ids(&path),
                cost,
            },
            None => {
                warn!(
                    "no path from `{}` to `{}` in a complete network, model invariant violated",
                    self.nodes[source].id, self.nodes[target].id
                );
                PathResult::Unreachable
            }
        }
    }
}
