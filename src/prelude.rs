pub use crate::directedness::{Directed, Directedness, DirectednessTrait, Undirected};
pub use crate::distance::{Distance, Weight};
pub use crate::error::GraphError;
pub use crate::graph::{Graph, GraphDirected, GraphUndirected, Vertex};
pub use crate::unweighted::UnweightedGraph;
pub use crate::weighted::{WeightedEdge, WeightedGraph};
