use serde_json::Value;
use thiserror::Error;

/// Top-level error type for the road graph model.
#[derive(Debug, Error)]
pub enum RoadGraphError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Road(#[from] RoadError),

    #[error(transparent)]
    Vertex(#[from] VertexError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while reading a road feature record.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("malformed feature: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing feature property `{0}`")]
    MissingProperty(&'static str),

    #[error("feature property `{key}` has invalid value {value}")]
    InvalidProperty { key: &'static str, value: Value },

    #[error("coordinate {position} has {dims} component(s), expected at least 2")]
    ShortCoordinate { position: usize, dims: usize },
}

/// Errors related to road geometry operations.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("axis {0} is not a planar axis (expected 0 or 1)")]
    InvalidAxis(usize),
}

/// Errors raised while building a vertex.
#[derive(Debug, Error)]
pub enum VertexError {
    #[error("malformed vertex record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("vertex property {position} is not a number: {value}")]
    NonNumericProperty { position: usize, value: Value },
}

/// Errors raised while deriving graph structures.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph input must be a list of vertices, got {0}")]
    NotAList(&'static str),

    #[error("vertex index {index} is out of range for a graph of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex {vertex} connects to {connection}, out of range for a graph of {len} vertices")]
    ConnectionOutOfRange {
        vertex: usize,
        connection: usize,
        len: usize,
    },

    #[error("{what} width {found} of vertex {vertex} differs from {expected}")]
    RaggedFeatures {
        what: &'static str,
        vertex: usize,
        expected: usize,
        found: usize,
    },
}

/// Convenience type alias for results using [`RoadGraphError`].
pub type Result<T> = std::result::Result<T, RoadGraphError>;
