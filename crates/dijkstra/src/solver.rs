use crate::error::{Error, Result};
use crate::graph::DirectedGraph;
use crate::heap::BinaryMinHeap;

// Seed priority for nodes with no known distance yet. Queue-internal only:
// results report unreached nodes as `None`, never as this value.
const UNREACHED_PRIORITY: u64 = u64::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PathEntry {
    pub node: u32,
    pub distance: Option<u64>,
    pub predecessor: Option<u32>,
}

/// Per-node results of one shortest-path run: the minimum total edge
/// weight from the source (`None` when unreachable) and the preceding
/// node on one shortest path (`None` for the source and unreachable
/// nodes).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: u32,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<u32>>,
}

impl ShortestPaths {
    #[inline]
    pub fn source(&self) -> u32 {
        self.source
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn distance(&self, node: usize) -> Option<u64> {
        self.distances[node]
    }

    #[inline]
    pub fn predecessor(&self, node: usize) -> Option<u32> {
        self.predecessors[node]
    }

    /// Entries for every node in id order.
    pub fn iter(&self) -> impl Iterator<Item = PathEntry> + '_ {
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .map(|(node, (&distance, &predecessor))| PathEntry {
                node: node as u32,
                distance,
                predecessor,
            })
    }

    /// Reconstructs one shortest path from the source to `target` by
    /// walking predecessor links. `None` when `target` is unreachable or
    /// out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<u32>> {
        if target >= self.distances.len() {
            return None;
        }
        self.distances[target]?;

        let mut path = vec![target as u32];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous as usize;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm over a binary-heap priority queue.
///
/// The queue is sized to one seed entry per node plus one entry per
/// successful relaxation (at most one per edge under the staleness
/// guard), so a push can never overflow for a well-formed graph.
pub fn run_shortest_paths(graph: &DirectedGraph, source: usize) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::InvalidSource {
            source,
            vertex_count: n,
        });
    }

    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<u32>> = vec![None; n];
    let mut heap = BinaryMinHeap::with_capacity(n + graph.edge_count());

    distances[source] = Some(0);
    for v in 0..n {
        let priority = if v == source { 0 } else { UNREACHED_PRIORITY };
        heap.push(priority, v as u32)?;
    }

    while let Some((d, u)) = heap.pop() {
        let u = u as usize;
        // Seed entry of a node that was never reached: nothing to relax from.
        let Some(best) = distances[u] else { continue };
        // Stale entry: a smaller priority for this node was already processed.
        if d != best {
            continue;
        }

        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            let candidate = best.saturating_add(edge.weight);
            if distances[v].is_none_or(|current| candidate < current) {
                distances[v] = Some(candidate);
                predecessors[v] = Some(u as u32);
                heap.push(candidate, edge.to)?;
            }
        }
    }

    Ok(ShortestPaths {
        source: source as u32,
        distances,
        predecessors,
    })
}
