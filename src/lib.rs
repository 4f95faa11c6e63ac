//! Generic in-memory graphs built on adjacency lists.
//!
//! - [`UnweightedGraph`]: adjacency sets with mutation, traversal (DFS, BFS),
//!   reachability, fewest-edge paths and undirected cycle detection.
//! - [`WeightedGraph`]: weighted adjacency lists (parallel edges allowed) with
//!   Dijkstra single-source shortest distances.
//!
//! Both graph types share one adjacency abstraction and implement the
//! [`Graph`] trait, which provides the traversals.  Directedness is a type
//! parameter: [`Undirected`] (the default), [`Directed`], or the runtime
//! [`Directedness`] enum.
//!
//! ```
//! use adjgraph::prelude::*;
//!
//! let mut graph = UnweightedGraph::<char>::new();
//! graph.add_edge('A', 'B');
//! graph.add_edge('B', 'C');
//! assert_eq!(graph.bfs(&'A').collect::<Vec<_>>(), vec!['A', 'B', 'C']);
//! assert!(!graph.has_cycle());
//! ```

pub mod adjacency;
pub mod directedness;
pub mod distance;
pub mod error;
pub mod format;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod unweighted;
pub mod weighted;

#[cfg(test)]
mod test_support;

pub use directedness::{Directed, Directedness, DirectednessTrait, Undirected};
pub use distance::{Distance, Weight};
pub use error::GraphError;
pub use graph::{Graph, GraphDirected, GraphUndirected, Vertex};
pub use unweighted::UnweightedGraph;
pub use weighted::{WeightedEdge, WeightedGraph};
