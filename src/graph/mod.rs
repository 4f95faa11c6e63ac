//! `Graph` is the core read-only trait shared by the graph types in this
//! crate.  Both [`UnweightedGraph`](crate::UnweightedGraph) and
//! [`WeightedGraph`](crate::WeightedGraph) implement it, so every traversal
//! defined here works for both.
//!
//! This module provides:
//!
//! - [`Vertex`]: the bound every vertex type must satisfy
//! - [`Graph`]: vertices, successors, counts, and traversals (BFS, DFS,
//!   reachability, fewest-edge paths)
//! - [`GraphUndirected`]: cycle detection and connected components, available
//!   only on undirected graphs
//! - [`GraphDirected`]: strongly connected components, available only on
//!   directed graphs
//!
//! None of these methods mutate the graph, and none of them fail: a vertex
//! that is not in the graph behaves like an isolated vertex.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
    iter,
};

use crate::{
    directedness::{Directed, DirectednessTrait, Undirected},
    search::{BfsIterator, BfsPathIterator, DfsIterator, dfs_recursive, has_undirected_cycle},
    tracing_support::info_span,
};

#[cfg(feature = "pathfinding")]
use crate::search::undirected_components;

/// A trait for types usable as vertices.
///
/// Vertices are identified by value: two vertices are the same vertex exactly
/// when they compare equal.  `Ord` fixes the order in which vertices and
/// neighbors are visited, and `Hash` is used for visited sets.  Types whose
/// equality is not a true equivalence (e.g. floating point numbers) cannot be
/// used.
pub trait Vertex: Eq + Ord + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Ord + Hash + Clone + Debug {}

/// A trait representing a directed or undirected graph.  Methods returning
/// iterators over vertices return them in ascending order.
pub trait Graph: Sized {
    type Vertex: Vertex;
    type Directedness: DirectednessTrait;

    /// Returns the directedness chosen when the graph was created.
    fn directedness(&self) -> Self::Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Iterates over every vertex in the graph.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Checks whether `vertex` is in the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Iterates over the vertices reachable from `vertex` by one edge.  The
    /// iterator is empty if `vertex` is unknown.
    fn successors<'a>(
        &'a self,
        vertex: &Self::Vertex,
    ) -> impl Iterator<Item = &'a Self::Vertex> + 'a;

    /// Gets the number of vertices in the graph.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Gets the number of edges in the graph.  Undirected edges are counted
    /// once.
    fn edge_count(&self) -> usize;

    /// Checks if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    // Searches

    /// Performs a breadth-first search starting from the given vertex.
    fn bfs(&self, start: &Self::Vertex) -> BfsIterator<'_, Self> {
        BfsIterator::new(self, start.clone())
    }

    /// Performs an iterative depth-first search starting from the given
    /// vertex.  Yields vertices in the same order as [`Self::dfs_recursive`].
    fn dfs(&self, start: &Self::Vertex) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, start.clone())
    }

    /// Performs a recursive depth-first search starting from the given
    /// vertex.  Intended for small graphs; see [`Self::dfs`].
    fn dfs_recursive(&self, start: &Self::Vertex) -> Vec<Self::Vertex> {
        dfs_recursive(self, start)
    }

    /// Performs a breadth-first search yielding the discovery path of each
    /// vertex.
    fn bfs_paths(&self, start: &Self::Vertex) -> BfsPathIterator<'_, Self> {
        BfsPathIterator::new(self, start.clone())
    }

    // Pathfinding

    /// Checks whether `to` can be reached from `from`.  A vertex always
    /// reaches itself, even when it is not in the graph.
    fn has_path(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        let _span = info_span!("has_path").entered();
        if from == to {
            return true;
        }

        let mut visited = HashSet::from([from.clone()]);
        let mut queue = VecDeque::from([from.clone()]);
        while let Some(vertex) = queue.pop_front() {
            for neighbor in self.successors(&vertex) {
                if neighbor == to {
                    return true;
                }
                if visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
        false
    }

    /// Finds a path from `from` to `to` using the fewest edges.  The path
    /// includes both ends; it is `[from]` when `from == to`, and `None` when
    /// `to` cannot be reached.
    ///
    /// The breadth-first search stops as soon as `to` is discovered as a
    /// neighbor; the path is then rebuilt from the recorded parents.
    fn shortest_path(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Vec<Self::Vertex>> {
        let _span = info_span!("shortest_path").entered();
        if from == to {
            return Some(vec![from.clone()]);
        }

        let mut parents: HashMap<Self::Vertex, Self::Vertex> = HashMap::new();
        let mut visited = HashSet::from([from.clone()]);
        let mut queue = VecDeque::from([from.clone()]);
        while let Some(vertex) = queue.pop_front() {
            for neighbor in self.successors(&vertex) {
                if !visited.insert(neighbor.clone()) {
                    continue;
                }
                parents.insert(neighbor.clone(), vertex.clone());
                if neighbor == to {
                    let mut path: Vec<_> =
                        iter::successors(Some(to.clone()), |v| parents.get(v).cloned()).collect();
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(neighbor.clone());
            }
        }
        None
    }
}

/// A trait which is automatically implemented for undirected graphs, providing
/// methods specific to undirected graphs.
pub trait GraphUndirected: Graph {
    /// Checks whether the graph contains a cycle.  Self-loops are cycles, and
    /// so are parallel edges in graphs that allow them.
    fn has_cycle(&self) -> bool {
        let _span = info_span!("has_cycle", vertices = self.vertex_count()).entered();
        has_undirected_cycle(self)
    }

    /// Partitions the graph into connected components.
    #[cfg(feature = "pathfinding")]
    fn connected_components(&self) -> Vec<HashSet<Self::Vertex>> {
        let _span = info_span!("connected_components").entered();
        undirected_components(self)
    }
}

impl<G> GraphUndirected for G where G: Graph<Directedness = Undirected> {}

/// A trait which is automatically implemented for directed graphs, providing
/// methods specific to directed graphs.
pub trait GraphDirected: Graph {
    /// Partitions the graph into strongly connected components.
    #[cfg(feature = "pathfinding")]
    fn strongly_connected_components(&self) -> Vec<Vec<Self::Vertex>> {
        let _span = info_span!("strongly_connected_components").entered();
        pathfinding::prelude::strongly_connected_components(
            &self.vertices().cloned().collect::<Vec<_>>(),
            |vertex| self.successors(vertex).cloned().collect::<Vec<_>>(),
        )
    }
}

impl<G> GraphDirected for G where G: Graph<Directedness = Directed> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{UnweightedGraph, WeightedGraph};

    fn diamond() -> UnweightedGraph<char> {
        let mut graph = UnweightedGraph::new();
        graph.add_edge('A', 'B');
        graph.add_edge('A', 'C');
        graph.add_edge('B', 'D');
        graph.add_edge('C', 'D');
        graph.add_edge('D', 'E');
        graph
    }

    #[test]
    fn test_has_path_same_vertex() {
        let graph = UnweightedGraph::<char>::new();
        assert!(graph.has_path(&'X', &'X'));
        assert!(!graph.has_path(&'X', &'Y'));
    }

    #[test]
    fn test_has_path_respects_direction() {
        let mut graph = UnweightedGraph::<u8, Directed>::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        assert!(graph.has_path(&1, &3));
        assert!(!graph.has_path(&3, &1));
    }

    #[test]
    fn test_shortest_path_prefers_first_discovered() {
        let graph = diamond();
        assert_eq!(
            graph.shortest_path(&'A', &'E'),
            Some(vec!['A', 'B', 'D', 'E'])
        );
        assert_eq!(graph.shortest_path(&'E', &'E'), Some(vec!['E']));
        assert_eq!(graph.shortest_path(&'A', &'Z'), None);
    }

    /// Wraps a graph and counts how many vertices have been expanded.
    struct ExpansionCounter {
        inner: UnweightedGraph<u8, Directed>,
        expanded: Cell<usize>,
    }

    impl Graph for ExpansionCounter {
        type Vertex = u8;
        type Directedness = Directed;

        fn directedness(&self) -> Directed {
            Directed
        }

        fn vertices(&self) -> impl Iterator<Item = &u8> + '_ {
            self.inner.vertices()
        }

        fn contains_vertex(&self, vertex: &u8) -> bool {
            self.inner.contains_vertex(vertex)
        }

        fn successors<'a>(&'a self, vertex: &u8) -> impl Iterator<Item = &'a u8> + 'a {
            self.expanded.set(self.expanded.get() + 1);
            self.inner.successors(vertex)
        }

        fn edge_count(&self) -> usize {
            self.inner.edge_count()
        }
    }

    #[test]
    fn test_shortest_path_stops_at_discovery() {
        let mut inner = UnweightedGraph::new();
        inner.add_edge(0, 1);
        inner.add_edge(0, 2);
        inner.add_edge(1, 3);
        inner.add_edge(2, 4);
        inner.add_edge(3, 5);
        let graph = ExpansionCounter {
            inner,
            expanded: Cell::new(0),
        };

        assert_eq!(graph.shortest_path(&0, &3), Some(vec![0, 1, 3]));
        // 0 and 1 are expanded; 3 is found among the neighbors of 1.
        assert_eq!(graph.expanded.get(), 2);

        graph.expanded.set(0);
        assert_eq!(graph.shortest_path(&0, &2), Some(vec![0, 2]));
        assert_eq!(graph.expanded.get(), 1);
    }

    #[test]
    fn test_bfs_paths_agree_with_shortest_path() {
        let graph = diamond();
        for path in graph.bfs_paths(&'A') {
            let Some(end) = path.last() else {
                panic!("bfs_paths yielded an empty path");
            };
            assert_eq!(graph.shortest_path(&'A', end), Some(path.clone()));
        }
    }

    #[test]
    fn test_shortest_path_unknown_start() {
        let graph = diamond();
        assert_eq!(graph.shortest_path(&'Z', &'A'), None);
        assert_eq!(graph.shortest_path(&'Z', &'Z'), Some(vec!['Z']));
    }

    #[test]
    fn test_has_cycle() {
        let mut graph = UnweightedGraph::<u8>::new();
        assert!(!graph.has_cycle());
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(4, 5);
        assert!(!graph.has_cycle());
        graph.add_edge(3, 1);
        assert!(graph.has_cycle());
        graph.remove_edge(&3, &1);
        graph.add_edge(5, 5);
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_has_cycle_weighted_parallel_edges() {
        let mut graph = WeightedGraph::<u8, u32>::new();
        graph.add_edge(1, 2, 3);
        assert!(!graph.has_cycle());
        graph.add_edge(2, 1, 4);
        assert!(graph.has_cycle());
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_connected_components() {
        let mut graph = UnweightedGraph::<u8>::new();
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);
        graph.add_vertex(5);
        let mut components = graph
            .connected_components()
            .into_iter()
            .map(|c| {
                let mut c = c.into_iter().collect::<Vec<_>>();
                c.sort();
                c
            })
            .collect::<Vec<_>>();
        components.sort();
        assert_eq!(components, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_strongly_connected_components() {
        let mut graph = UnweightedGraph::<u8, Directed>::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        graph.add_edge(2, 3);
        let mut components = graph
            .strongly_connected_components()
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect::<Vec<_>>();
        components.sort();
        assert_eq!(components, vec![vec![1, 2], vec![3]]);
    }
}
