//! Error type shared by the routing engine, problem loading, and plotting.

use thiserror::Error;

/// Errors raised while building, solving, or rendering a routing model.
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("negative distance {value} from node {from} to node {to}")]
    NegativeDistance { from: usize, to: usize, value: i64 },
    #[error("a routing model needs at least one node")]
    NoNodes,
    #[error("a routing model needs at least one vehicle")]
    NoVehicles,
    #[error("node {node} is out of range for a model with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    #[error("unknown transit callback index {0}")]
    UnknownCallback(usize),
    #[error("dimension `{0}` already exists")]
    DuplicateDimension(String),
    #[error("dimension `{0}` does not exist")]
    UnknownDimension(String),
    #[error("dimension `{name}` has negative {field}: {value}")]
    NegativeDimensionBound {
        name: String,
        field: &'static str,
        value: i64,
    },
    #[error("transit callback {callback} covers {size} nodes, the model has {num_nodes}")]
    CallbackTooSmall {
        callback: usize,
        size: usize,
        num_nodes: usize,
    },
    #[error("dimension `{name}` has negative transit {value} from node {from} to node {to}")]
    NegativeTransit {
        name: String,
        from: usize,
        to: usize,
        value: i64,
    },
    #[error("no arc cost evaluator has been set on the model")]
    MissingArcCost,
    #[error("{locations} locations given for a {matrix}x{matrix} distance matrix")]
    LocationMismatch { locations: usize, matrix: usize },
    #[error("no solution found")]
    NoSolution,
    #[error("failed to read or write a file")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("failed to draw plot: {0}")]
    Plot(String),
}
