//! Road-network geometry and graph data model.
//!
//! [`Road`] holds a polyline read from a GeoJSON-like feature and supports
//! per-axis exaggeration. [`Vertex`] and [`Graph`] turn road vertices into a
//! directed adjacency matrix, a sparse edge index and per-vertex
//! feature/target vectors.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;

pub use error::{FeatureError, GraphError, Result, RoadError, RoadGraphError, VertexError};
pub use geometry::{Axis, Road, RoadFeature};
pub use graph::{EdgeIndex, Graph, GraphParams, NodeFeatures, Vertex, VertexRecord};
