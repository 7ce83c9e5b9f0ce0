pub mod adjacency;
pub mod features;
pub mod vertex;

pub use adjacency::{adjacency_matrix, EdgeIndex};
pub use features::{node_features, stack_features, NodeFeatures};
pub use vertex::{Vertex, VertexRecord};

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{GraphError, Result, VertexError};
use crate::math::DMatrix;

/// Parameters controlling which structures a [`Graph`] derives.
#[derive(Debug, Clone, Copy)]
pub struct GraphParams {
    /// Number of trailing attributes left out of each vertex's `x` features.
    pub feature_trim: usize,
    /// Whether to derive the sparse edge index.
    pub edge_index: bool,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            feature_trim: 1,
            edge_index: true,
        }
    }
}

impl GraphParams {
    #[must_use]
    pub fn with_feature_trim(mut self, feature_trim: usize) -> Self {
        self.feature_trim = feature_trim;
        self
    }

    #[must_use]
    pub fn with_edge_index(mut self, edge_index: bool) -> Self {
        self.edge_index = edge_index;
        self
    }
}

/// A fixed set of road vertices with derived adjacency and feature data.
///
/// Everything is derived once at construction. The vertex list can only be
/// read back, so the derived structures always match it.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Vertex>,
    adjacency: DMatrix,
    edge_index: Option<EdgeIndex>,
    node_features: BTreeMap<usize, NodeFeatures>,
}

impl Graph {
    /// Builds a graph with default [`GraphParams`].
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex index or connection is out of range.
    pub fn new(nodes: Vec<Vertex>) -> std::result::Result<Self, GraphError> {
        Self::with_params(nodes, GraphParams::default())
    }

    /// Builds a graph, deriving the structures selected by `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex index or connection is out of range.
    pub fn with_params(
        nodes: Vec<Vertex>,
        params: GraphParams,
    ) -> std::result::Result<Self, GraphError> {
        let adjacency = adjacency_matrix(&nodes)?;
        let edge_index = params
            .edge_index
            .then(|| EdgeIndex::from_dense(&adjacency));
        let node_features = node_features(&nodes, params.feature_trim);
        debug!(
            nodes = nodes.len(),
            edges = edge_index.as_ref().map(EdgeIndex::len),
            "built road graph"
        );
        Ok(Self {
            nodes,
            adjacency,
            edge_index,
            node_features,
        })
    }

    /// Builds a graph from a JSON array of vertex records.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not an array, a record is malformed or has a
    /// non-numeric property, or the graph structure is out of range.
    pub fn from_value(value: &Value, params: GraphParams) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(GraphError::NotAList(json_kind(value)).into());
        };
        let mut nodes = Vec::with_capacity(items.len());
        for item in items {
            let record = VertexRecord::deserialize(item).map_err(VertexError::from)?;
            nodes.push(Vertex::try_from(record)?);
        }
        Ok(Self::with_params(nodes, params)?)
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Vertex] {
        &self.nodes
    }

    /// Gives the vertices back, dropping the derived structures.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Vertex> {
        self.nodes
    }

    /// Dense `N x N` adjacency matrix.
    #[must_use]
    pub fn adjacency(&self) -> &DMatrix {
        &self.adjacency
    }

    /// Sparse edge index, if it was requested.
    #[must_use]
    pub fn edge_index(&self) -> Option<&EdgeIndex> {
        self.edge_index.as_ref()
    }

    #[must_use]
    pub fn node_features(&self) -> &BTreeMap<usize, NodeFeatures> {
        &self.node_features
    }

    #[must_use]
    pub fn node_feature(&self, index: usize) -> Option<&NodeFeatures> {
        self.node_features.get(&index)
    }

    /// Stacked feature and target matrices, one row per vertex index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::RaggedFeatures`] if vertices differ in width.
    pub fn feature_matrices(&self) -> std::result::Result<(DMatrix, DMatrix), GraphError> {
        stack_features(&self.node_features)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph: {} Nodes", self.nodes.len())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
