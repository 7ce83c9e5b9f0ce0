use std::collections::BTreeMap;

use tracing::warn;

use crate::error::GraphError;
use crate::graph::vertex::Vertex;
use crate::math::{DMatrix, DVector};

/// Per-vertex view used by learning pipelines.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFeatures {
    pub coords: Vec<f64>,
    pub transl: Vec<f64>,
    /// Full attribute vector of the vertex.
    pub props: DVector,
    /// Input features: `props` without its trailing `feature_trim` entries.
    pub x: DVector,
    /// Target: the translation vector.
    pub y: DVector,
}

impl NodeFeatures {
    /// Splits `vertex` into features and target, dropping the last
    /// `feature_trim` attributes from `x`.
    #[must_use]
    pub fn from_vertex(vertex: &Vertex, feature_trim: usize) -> Self {
        let props = vertex.properties().clone();
        let keep = props.len().saturating_sub(feature_trim);
        Self {
            coords: vertex.coords().to_vec(),
            transl: vertex.translation_vector().to_vec(),
            x: props.rows(0, keep).into_owned(),
            y: DVector::from_vec(vertex.translation_vector().to_vec()),
            props,
        }
    }
}

/// Builds the feature map keyed by vertex index.
///
/// A vertex whose index was already seen replaces the earlier entry.
#[must_use]
pub fn node_features(
    vertices: &[Vertex],
    feature_trim: usize,
) -> BTreeMap<usize, NodeFeatures> {
    let mut map = BTreeMap::new();
    for v in vertices {
        if map
            .insert(v.index(), NodeFeatures::from_vertex(v, feature_trim))
            .is_some()
        {
            warn!(
                index = v.index(),
                "duplicate vertex index, keeping the later vertex"
            );
        }
    }
    map
}

/// Stacks `x` and `y` of every entry, in index order, into an `N x F`
/// feature matrix and an `N x T` target matrix.
///
/// # Errors
///
/// Returns [`GraphError::RaggedFeatures`] if entries disagree on `x` or `y`
/// width.
pub fn stack_features(
    features: &BTreeMap<usize, NodeFeatures>,
) -> Result<(DMatrix, DMatrix), GraphError> {
    let mut entries = features.iter();
    let Some((_, first)) = entries.next() else {
        return Ok((DMatrix::zeros(0, 0), DMatrix::zeros(0, 0)));
    };
    let (fx, fy) = (first.x.len(), first.y.len());
    for (&vertex, nf) in entries {
        if nf.x.len() != fx {
            return Err(GraphError::RaggedFeatures {
                what: "feature",
                vertex,
                expected: fx,
                found: nf.x.len(),
            });
        }
        if nf.y.len() != fy {
            return Err(GraphError::RaggedFeatures {
                what: "target",
                vertex,
                expected: fy,
                found: nf.y.len(),
            });
        }
    }

    let n = features.len();
    let x = DMatrix::from_row_iterator(
        n,
        fx,
        features.values().flat_map(|nf| nf.x.iter().copied()),
    );
    let y = DMatrix::from_row_iterator(
        n,
        fy,
        features.values().flat_map(|nf| nf.y.iter().copied()),
    );
    Ok((x, y))
}
