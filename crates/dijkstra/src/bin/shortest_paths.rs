use std::fmt::Display;
use std::io::Read;
use std::process::ExitCode;
use std::str::FromStr;
use std::str::SplitWhitespace;

use dijkstra::DirectedGraph;
use dijkstra::run_shortest_paths;

// Input: `numNodes numEdges`, then numEdges `from to weight` triples,
// then the source node. Whitespace-separated.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("shortest_paths: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|err| format!("failed to read stdin: {err}"))?;
    let mut tokens = input.split_whitespace();

    let vertex_count: usize = next_token(&mut tokens, "node count")?;
    let edge_count: usize = next_token(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let from: u32 = next_token(&mut tokens, "edge origin")?;
        let to: u32 = next_token(&mut tokens, "edge destination")?;
        let weight: u64 = next_token(&mut tokens, "edge weight")?;
        edges.push((from, to, weight));
    }
    let source: usize = next_token(&mut tokens, "source node")?;

    let graph = DirectedGraph::from_edges(vertex_count, &edges).map_err(|err| err.to_string())?;
    let paths = run_shortest_paths(&graph, source).map_err(|err| err.to_string())?;

    println!("shortest distances from node {source}:");
    for entry in paths.iter() {
        match entry.distance {
            Some(distance) => println!("node {}: {distance}", entry.node),
            None => println!("node {}: unreachable", entry.node),
        }
    }

    Ok(())
}

fn next_token<T>(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let token = tokens
        .next()
        .ok_or_else(|| format!("missing {what} in input"))?;
    token
        .parse()
        .map_err(|err| format!("invalid {what} {token:?}: {err}"))
}
