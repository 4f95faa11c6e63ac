/// Errors reported by the opt-in validation methods
/// ([`UnweightedGraph::check_consistency`] and
/// [`WeightedGraph::check_weights`]).  Ordinary graph operations never fail.
///
/// Vertices and weights are captured as their `Debug` text so that the error
/// type does not depend on the graph's type parameters.
///
/// [`UnweightedGraph::check_consistency`]: crate::UnweightedGraph::check_consistency
/// [`WeightedGraph::check_weights`]: crate::WeightedGraph::check_weights
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },
    #[error("undirected edge {from} -- {to} is only stored in one direction")]
    AsymmetricEdge { from: String, to: String },
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    DanglingNeighbor { vertex: String, neighbor: String },
}
