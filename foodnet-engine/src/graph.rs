use crate::error::{EngineError, Result};
use ordered_float::OrderedFloat;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

/// Undirected graph over dense node indices with non-negative edge weights.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl WeightedGraph {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        debug_assert!(a != b, "self loops are not allowed");
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
    }

    pub fn neighbours(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }

    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        self.adjacency[a]
            .iter()
            .find(|&&(n, _)| n == b)
            .map(|&(_, w)| w)
    }

    /// Copy of the graph with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            adjacency: self
                .adjacency
                .iter()
                .map(|n| n.iter().map(|&(v, w)| (v, w * factor)).collect())
                .collect(),
        }
    }

    /// Dijkstra from `source`. Entries in the returned vector are `f64::INFINITY` for
    /// nodes that cannot be reached.
    pub fn shortest_distances(&self, source: usize) -> Vec<f64> {
        self.dijkstra(source, None).0
    }

    /// Cheapest path from `source` to `target` and its cost, or `None` if unreachable.
    ///
    /// Equal-cost frontier entries pop in node index order, so repeated calls on the
    /// same graph return the same path.
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<(Vec<usize>, f64)> {
        let (dist, prev) = self.dijkstra(source, Some(target));
        if dist[target].is_infinite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = prev[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some((path, dist[target]))
    }

    fn dijkstra(&self, source: usize, target: Option<usize>) -> (Vec<f64>, Vec<Option<usize>>) {
        let n = self.num_nodes();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(Reverse((OrderedFloat(0.0), source)));

        while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
            // Stale entry, a cheaper one was already settled
            if cost > dist[node] {
                continue;
            }
            if target == Some(node) {
                break;
            }
            for &(next, w) in &self.adjacency[node] {
                let next_cost = cost + w;
                if next_cost < dist[next] {
                    dist[next] = next_cost;
                    prev[next] = Some(node);
                    heap.push(Reverse((OrderedFloat(next_cost), next)));
                }
            }
        }
        (dist, prev)
    }

    /// Hop counts from `source` by breadth-first search, `None` for unreachable nodes.
    pub fn hop_distances(&self, source: usize) -> Vec<Option<usize>> {
        let mut hops = vec![None; self.num_nodes()];
        let mut queue = VecDeque::new();
        hops[source] = Some(0);
        queue.push_back(source);
        while let Some(node) = queue.pop_front() {
            let next_hop = hops[node].map(|h| h + 1);
            for &(next, _) in &self.adjacency[node] {
                if hops[next].is_none() {
                    hops[next] = next_hop;
                    queue.push_back(next);
                }
            }
        }
        hops
    }

    /// Prim's algorithm grown from `root`. Returns `(tree_side, candidate, weight)` edges
    /// in the order they joined the tree, and the total weight.
    ///
    /// Heap entries whose candidate is already in the tree are dropped when popped.
    pub fn minimum_spanning_tree(&self, root: usize) -> Result<(Vec<(usize, usize, f64)>, f64)> {
        let n = self.num_nodes();
        if n < 2 {
            return Err(EngineError::DegenerateInput { nodes: n });
        }

        let mut visited = vec![false; n];
        let mut edges = Vec::with_capacity(n - 1);
        let mut total = 0.0;
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize, usize)>> = BinaryHeap::new();

        visited[root] = true;
        for &(v, w) in &self.adjacency[root] {
            heap.push(Reverse((OrderedFloat(w), root, v)));
        }

        while let Some(Reverse((OrderedFloat(w), u, v))) = heap.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            edges.push((u, v, w));
            total += w;
            for &(next, next_w) in &self.adjacency[v] {
                if !visited[next] {
                    heap.push(Reverse((OrderedFloat(next_w), v, next)));
                }
            }
        }

        if edges.len() != n - 1 {
            return Err(EngineError::Disconnected {
                reached: edges.len() + 1,
                total: n,
            });
        }
        Ok((edges, total))
    }
}
