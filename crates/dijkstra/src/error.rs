use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a single shortest-path computation.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("priority queue overflow: fixed capacity {capacity} exhausted")]
    QueueOverflow { capacity: usize },

    #[error("source node {source} out of range for a graph with {vertex_count} nodes")]
    InvalidSource { source: usize, vertex_count: usize },

    #[error("edge {from} -> {to} out of range for a graph with {vertex_count} nodes")]
    MalformedEdge {
        from: u32,
        to: u32,
        vertex_count: usize,
    },
}
