use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Directed graph with non-negative edge weights, stored in compressed
/// sparse row form: one dense edge array plus per-node offsets into it.
/// Edges keep their insertion order within each node's out-list.
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl DirectedGraph {
    /// Builds a graph from `(from, to, weight)` triples, rejecting any
    /// edge whose endpoint is outside `[0, vertex_count)`.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Result<Self> {
        let mut out_degree = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            if (from as usize) >= vertex_count || (to as usize) >= vertex_count {
                return Err(Error::MalformedEdge {
                    from,
                    to,
                    vertex_count,
                });
            }
            out_degree[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_degree[v];
        }

        let mut flat = vec![Edge { to: 0, weight: 0 }; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(from, to, weight) in edges {
            let idx = cursor[from as usize];
            cursor[from as usize] += 1;
            flat[idx] = Edge { to, weight };
        }

        Ok(Self {
            offsets,
            edges: flat,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> &[Edge] {
        &self.edges[self.offsets[v]..self.offsets[v + 1]]
    }
}
