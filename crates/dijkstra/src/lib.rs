mod error;
mod heap;
mod solver;
pub mod generator;
pub mod graph;

pub use error::Error;
pub use error::Result;
pub use graph::DirectedGraph;
pub use graph::Edge;
pub use solver::PathEntry;
pub use solver::ShortestPaths;
pub use solver::run_shortest_paths;

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;
    use std::collections::HashSet;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generator::GraphCase;
    use crate::generator::generate_case;
    use crate::graph::DirectedGraph;
    use crate::run_shortest_paths;

    // Independent reference solver over std's heap, in the shape the
    // textbook gives it. Distances only; no shared code with the crate's
    // own queue.
    fn reference_dijkstra(graph: &DirectedGraph, source: usize) -> Vec<Option<u64>> {
        let n = graph.vertex_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[source] = Some(0);
        heap.push(Reverse((0_u64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if dist[u] != Some(d) {
                continue;
            }
            for edge in graph.out_edges(u) {
                let v = edge.to as usize;
                let candidate = d.saturating_add(edge.weight);
                if dist[v].is_none_or(|current| candidate < current) {
                    dist[v] = Some(candidate);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        dist
    }

    fn random_graph(n: usize, m: usize, seed: u64) -> DirectedGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut used = HashSet::new();
        let mut edges = Vec::with_capacity(m);

        while edges.len() < m {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u == v {
                continue;
            }
            let key = ((u as u64) << 32) | v as u64;
            if used.insert(key) {
                edges.push((u as u32, v as u32, rng.random_range(0..=1_000_000_u64)));
            }
        }

        DirectedGraph::from_edges(n, &edges).unwrap()
    }

    fn min_edge_weight(graph: &DirectedGraph, from: usize, to: u32) -> Option<u64> {
        graph
            .out_edges(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min()
    }

    #[test]
    fn matches_reference_on_random_graphs() {
        for seed in 0..20_u64 {
            let n = 64;
            let m = 512;
            let g = random_graph(n, m, 0xD1A1_0000 + seed);
            let src = (seed as usize) % n;

            let paths = run_shortest_paths(&g, src).unwrap();
            let expected = reference_dijkstra(&g, src);
            let got: Vec<Option<u64>> = paths.iter().map(|entry| entry.distance).collect();
            assert_eq!(got, expected, "seed={seed}");
        }
    }

    #[test]
    fn relaxation_optimality_holds_on_random_graphs() {
        for seed in 0..10_u64 {
            let n = 80;
            let g = random_graph(n, 400, 0x0BD1_0000 + seed);
            let paths = run_shortest_paths(&g, (seed as usize) % n).unwrap();

            for u in 0..n {
                let Some(du) = paths.distance(u) else { continue };
                for edge in g.out_edges(u) {
                    let dv = paths
                        .distance(edge.to as usize)
                        .expect("neighbor of a reached node must be reached");
                    assert!(
                        dv <= du.saturating_add(edge.weight),
                        "seed={seed} edge {u}->{} violates optimality",
                        edge.to
                    );
                }
            }
        }
    }

    #[test]
    fn predecessor_walks_reproduce_distances() {
        for seed in 0..10_u64 {
            let n = 64;
            let g = random_graph(n, 256, 0x9A78_0000 + seed);
            let src = (seed as usize) % n;
            let paths = run_shortest_paths(&g, src).unwrap();

            for v in 0..n {
                let Some(expected) = paths.distance(v) else {
                    assert_eq!(paths.path_to(v), None, "seed={seed} node={v}");
                    continue;
                };

                let path = paths.path_to(v).unwrap();
                assert_eq!(path.first(), Some(&(src as u32)), "seed={seed} node={v}");
                assert_eq!(path.last(), Some(&(v as u32)), "seed={seed} node={v}");

                let mut total = 0_u64;
                for pair in path.windows(2) {
                    let weight = min_edge_weight(&g, pair[0] as usize, pair[1])
                        .expect("predecessor walk must follow existing edges");
                    total += weight;
                }
                assert_eq!(total, expected, "seed={seed} node={v}");
            }
        }
    }

    #[test]
    fn generator_cases_agree_with_reference() {
        let cases = [
            GraphCase::SparseRandom,
            GraphCase::DenseRandom,
            GraphCase::AlmostLine,
            GraphCase::GridRandom,
            GraphCase::DisconnectedClusters,
        ];

        for (i, case) in cases.iter().enumerate() {
            let input = generate_case(*case, 512, 0x5EED_0000 + i as u64);
            assert!(input.graph.vertex_count() >= 2, "case={:?}", case);

            let paths = run_shortest_paths(&input.graph, input.source).unwrap();
            let expected = reference_dijkstra(&input.graph, input.source);
            let got: Vec<Option<u64>> = paths.iter().map(|entry| entry.distance).collect();
            assert_eq!(got, expected, "case={:?}", case);
        }
    }

    #[test]
    fn clusters_outside_the_source_island_are_unreachable() {
        let input = generate_case(GraphCase::DisconnectedClusters, 256, 0xC1A5_0001);
        let n = input.graph.vertex_count();
        let paths = run_shortest_paths(&input.graph, input.source).unwrap();

        // The generator keeps the source in the first of four islands.
        let per_cluster = n / 4;
        let unreachable = (per_cluster..n)
            .filter(|&v| paths.distance(v).is_none())
            .count();
        assert_eq!(unreachable, n - per_cluster);
    }
}
