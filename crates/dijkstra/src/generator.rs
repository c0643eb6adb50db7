use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::DirectedGraph;

const MAX_WEIGHT: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    AlmostLine,
    GridRandom,
    DisconnectedClusters,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::DisconnectedClusters => "disconnected_clusters",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph,
    pub source: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed),
        GraphCase::DenseRandom => dense_random_case(size.max(64), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(32), seed),
        GraphCase::GridRandom => grid_random_case(size.max(64), seed),
        GraphCase::DisconnectedClusters => disconnected_clusters_case(size.max(64), seed),
    }
}

fn sparse_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size;
    let m_target = n.saturating_mul(4).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=MAX_WEIGHT));
    }

    finish(n, edges, rng.random_range(0..n))
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            edges.push((u as u32, v as u32, rng.random_range(0..=MAX_WEIGHT)));
        }
    }

    finish(n, edges, rng.random_range(0..n))
}

// A long chain with a few forward shortcuts, so most shortest paths are
// deep and relaxations frequently improve earlier estimates.
fn almost_line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size;
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=MAX_WEIGHT));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        push_unique_edge(&mut edges, &mut used, a, b, rng.random_range(0..=MAX_WEIGHT));
    }

    finish(n, edges, 0)
}

fn grid_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);
    let index = |i: usize, j: usize| -> usize { i * len + j };

    for i in 0..len {
        for j in 0..len {
            let mut neighbors = Vec::with_capacity(4);
            if j + 1 < len {
                neighbors.push(index(i, j + 1));
            }
            if i + 1 < len {
                neighbors.push(index(i + 1, j));
            }
            if j > 0 {
                neighbors.push(index(i, j - 1));
            }
            if i > 0 {
                neighbors.push(index(i - 1, j));
            }
            for to in neighbors {
                edges.push((
                    index(i, j) as u32,
                    to as u32,
                    rng.random_range(0..=MAX_WEIGHT),
                ));
            }
        }
    }

    finish(n, edges, rng.random_range(0..n))
}

// Several islands with no edges between them; every node outside the
// source's island must come out unreachable.
fn disconnected_clusters_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let clusters = 4;
    let per_cluster = (size / clusters).max(4);
    let n = clusters * per_cluster;
    let mut edges = Vec::new();
    let mut used = HashSet::new();

    for c in 0..clusters {
        let base = c * per_cluster;
        for offset in 0..per_cluster {
            for _ in 0..3 {
                let u = base + offset;
                let v = base + rng.random_range(0..per_cluster);
                push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=MAX_WEIGHT));
            }
        }
    }

    finish(n, edges, rng.random_range(0..per_cluster))
}

fn finish(n: usize, edges: Vec<(u32, u32, u64)>, source: usize) -> GeneratedGraph {
    GeneratedGraph {
        graph: DirectedGraph::from_edges(n, &edges).expect("generated edges are in range"),
        source,
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}
