//! Dense adjacency matrix and its coordinate-format edge index.
//!
//! Edges are directed: vertex `i` listing `j` among its connections sets
//! entry `(i, j)` only. Self-loops are kept and repeated connections collapse
//! into a single entry.

use crate::error::GraphError;
use crate::graph::vertex::Vertex;
use crate::math::DMatrix;

/// Builds the `N x N` adjacency matrix of `vertices`.
///
/// # Errors
///
/// Returns an error if a vertex index or a connection is not below `N`.
pub fn adjacency_matrix(vertices: &[Vertex]) -> Result<DMatrix, GraphError> {
    let len = vertices.len();
    let mut adj = DMatrix::zeros(len, len);
    for v in vertices {
        let index = v.index();
        if index >= len {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
        for &connection in v.connections() {
            if connection >= len {
                return Err(GraphError::ConnectionOutOfRange {
                    vertex: index,
                    connection,
                    len,
                });
            }
            adj[(index, connection)] = 1.0;
        }
    }
    Ok(adj)
}

/// Sparse coordinate (COO) form of an adjacency matrix.
///
/// Edge `k` runs from `rows[k]` to `cols[k]`. Edges are ordered by a
/// row-major scan of the dense matrix, not by insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeIndex {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl EdgeIndex {
    /// Collects the non-zero entries of `adj`.
    #[must_use]
    pub fn from_dense(adj: &DMatrix) -> Self {
        let mut index = Self::default();
        for i in 0..adj.nrows() {
            for j in 0..adj.ncols() {
                if adj[(i, j)] != 0.0 {
                    index.rows.push(i);
                    index.cols.push(j);
                }
            }
        }
        index
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(row, col)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Stacks rows and columns into a `2 x E` matrix.
    #[must_use]
    pub fn as_matrix(&self) -> nalgebra::DMatrix<usize> {
        nalgebra::DMatrix::from_row_iterator(
            2,
            self.len(),
            self.rows.iter().chain(&self.cols).copied(),
        )
    }

    /// Rebuilds a dense `n x n` matrix with ones at every edge.
    ///
    /// Edges outside `n x n` are skipped.
    #[must_use]
    pub fn to_dense(&self, n: usize) -> DMatrix {
        let mut adj = DMatrix::zeros(n, n);
        for (i, j) in self.pairs().filter(|&(i, j)| i < n && j < n) {
            adj[(i, j)] = 1.0;
        }
        adj
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertex(index: usize, connections: Vec<usize>) -> Vertex {
        Vertex::new(index, 0, &[0.0, 0.0], &[0.0, 0.0], &[], connections)
    }

    #[test]
    fn two_vertex_example() {
        let vs = vec![vertex(0, vec![1]), vertex(1, vec![])];
        let adj = adjacency_matrix(&vs).unwrap();
        assert_eq!(adj, DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]));
        let edges = EdgeIndex::from_dense(&adj);
        assert_eq!(
            edges.as_matrix(),
            nalgebra::DMatrix::from_row_slice(2, 1, &[0, 1])
        );
    }

    #[test]
    fn edges_are_directed_with_self_loops() {
        let vs = vec![vertex(0, vec![0, 2]), vertex(1, vec![]), vertex(2, vec![1])];
        let adj = adjacency_matrix(&vs).unwrap();
        assert_relative_eq!(adj[(0, 0)], 1.0);
        assert_relative_eq!(adj[(0, 2)], 1.0);
        assert_relative_eq!(adj[(2, 0)], 0.0);
        assert_relative_eq!(adj[(2, 1)], 1.0);
        assert_relative_eq!(adj.sum(), 3.0);
    }

    #[test]
    fn one_per_listed_connection() {
        let vs = vec![
            vertex(0, vec![1, 2, 3]),
            vertex(1, vec![0]),
            vertex(2, vec![3, 1]),
            vertex(3, vec![]),
        ];
        let adj = adjacency_matrix(&vs).unwrap();
        let expected: usize = vs.iter().map(|v| v.connections().len()).sum();
        assert_eq!(adj.iter().filter(|&&x| x > 0.5).count(), expected);
        for v in &vs {
            for &c in v.connections() {
                assert_relative_eq!(adj[(v.index(), c)], 1.0);
            }
        }
    }

    #[test]
    fn duplicate_connections_collapse() {
        let vs = vec![vertex(0, vec![1, 1]), vertex(1, vec![])];
        let adj = adjacency_matrix(&vs).unwrap();
        assert_relative_eq!(adj.sum(), 1.0);
    }

    #[test]
    fn connection_out_of_range() {
        let vs = vec![vertex(0, vec![5])];
        let err = adjacency_matrix(&vs).unwrap_err();
        assert!(matches!(
            err,
            GraphError::ConnectionOutOfRange {
                vertex: 0,
                connection: 5,
                len: 1
            }
        ));
    }

    #[test]
    fn index_out_of_range() {
        let vs = vec![vertex(3, vec![])];
        assert!(matches!(
            adjacency_matrix(&vs),
            Err(GraphError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn edge_index_is_row_major() {
        let vs = vec![vertex(1, vec![0]), vertex(0, vec![2, 1]), vertex(2, vec![])];
        let edges = EdgeIndex::from_dense(&adjacency_matrix(&vs).unwrap());
        assert_eq!(edges.rows, vec![0, 0, 1]);
        assert_eq!(edges.cols, vec![1, 2, 0]);
    }

    #[test]
    fn edge_index_reconstructs_dense() {
        let vs = vec![
            vertex(0, vec![2]),
            vertex(1, vec![0, 1]),
            vertex(2, vec![1]),
        ];
        let adj = adjacency_matrix(&vs).unwrap();
        let edges = EdgeIndex::from_dense(&adj);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges.to_dense(3), adj);
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let adj = adjacency_matrix(&[]).unwrap();
        assert_eq!(adj.nrows(), 0);
        let edges = EdgeIndex::from_dense(&adj);
        assert!(edges.is_empty());
        assert_eq!(edges.as_matrix().shape(), (2, 0));
    }
}
