use std::{
    collections::BTreeSet,
    fmt::{self, Debug, Formatter},
};

use derivative::Derivative;

#[cfg(feature = "pathfinding")]
use {crate::search::undirected_components, std::collections::HashSet};

use crate::{
    adjacency::AdjacencyMap,
    directedness::{Directedness, DirectednessTrait, Undirected},
    error::GraphError,
    format::{AdjacencyDisplay, format_debug},
    graph::{Graph, Vertex},
    search::has_undirected_cycle,
    tracing_support::info_span,
};

/// A graph whose edges carry no data, stored as a map from each vertex to the
/// set of its neighbors.
///
/// Edges have set semantics: adding an edge twice has no further effect.
/// Self-loops are allowed.  In an undirected graph every edge is stored in
/// both endpoint sets, so `v` is a neighbor of `u` exactly when `u` is a
/// neighbor of `v`.
///
/// No operation fails.  Mutations of unknown vertices or edges are no-ops,
/// and queries about them return empty results.
///
/// # Type Parameters
/// * `V` - The vertex type
/// * `D` - The directedness ([`Undirected`] by default, [`Directed`](crate::Directed),
///   or [`Directedness`](crate::Directedness) to choose at run time)
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone, D: Clone"),
    PartialEq(bound = "V: PartialEq, D: PartialEq"),
    Eq(bound = "V: Eq, D: Eq")
)]
pub struct UnweightedGraph<V, D = Undirected> {
    adjacency: AdjacencyMap<V, BTreeSet<V>>,
    directedness: D,
}

impl<V, D> Default for UnweightedGraph<V, D>
where
    V: Vertex,
    D: DirectednessTrait + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> UnweightedGraph<V, D>
where
    V: Vertex,
    D: DirectednessTrait,
{
    /// Creates a new, empty graph whose directedness is given by the type.
    pub fn new() -> Self
    where
        D: Default,
    {
        Self::with_directedness(D::default())
    }

    /// Creates a new, empty graph with the given directedness.
    pub fn with_directedness(directedness: D) -> Self {
        Self {
            adjacency: AdjacencyMap::new(),
            directedness,
        }
    }

    /// Adds a vertex with no neighbors.  Does nothing if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.ensure(vertex);
    }

    /// Adds an edge, adding either endpoint first if it is not yet in the
    /// graph.  Adding an existing edge has no effect.
    pub fn add_edge(&mut self, from: V, to: V) {
        let reverse = self.adjacency.ensure(to.clone());
        if !self.directedness.is_directed() {
            reverse.insert(from.clone());
        }
        self.adjacency.ensure(from).insert(to);
    }

    /// Removes the edge from `from` to `to` (both directions in an undirected
    /// graph).  Does nothing if there is no such edge.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.remove(to);
        }
        if !self.directedness.is_directed() {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                neighbors.remove(from);
            }
        }
    }

    /// Removes a vertex and every edge touching it.  Returns false, changing
    /// nothing, if the vertex is not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.adjacency.remove_vertex(vertex)
    }

    /// Iterates over the neighbors of `vertex`.  Empty if `vertex` is unknown.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.targets(vertex)
    }

    /// Checks whether there is an edge from `from` to `to`.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Verifies the adjacency invariants: every neighbor is a known vertex,
    /// and in an undirected graph every edge is stored in both directions.
    pub fn check_consistency(&self) -> Result<(), GraphError> {
        for (vertex, neighbors) in self.adjacency.iter() {
            for neighbor in neighbors {
                if !self.adjacency.contains(neighbor) {
                    return Err(GraphError::DanglingNeighbor {
                        vertex: format!("{vertex:?}"),
                        neighbor: format!("{neighbor:?}"),
                    });
                }
                if !self.directedness.is_directed() && !self.has_edge(neighbor, vertex) {
                    return Err(GraphError::AsymmetricEdge {
                        from: format!("{vertex:?}"),
                        to: format!("{neighbor:?}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns a value that renders one line per vertex, e.g. `A → B, C`.
    pub fn display(&self) -> AdjacencyDisplay<'_, V, BTreeSet<V>> {
        AdjacencyDisplay::new(&self.adjacency)
    }
}

/// Undirected-only queries for graphs whose directedness is chosen at run
/// time.  Each returns `None` when the graph is directed.
impl<V: Vertex> UnweightedGraph<V, Directedness> {
    /// Checks whether the graph contains a cycle; see
    /// [`GraphUndirected::has_cycle`](crate::GraphUndirected::has_cycle).
    pub fn has_cycle(&self) -> Option<bool> {
        if self.directedness.is_directed() {
            return None;
        }
        let _span = info_span!("has_cycle", vertices = self.vertex_count()).entered();
        Some(has_undirected_cycle(self))
    }

    /// Partitions the graph into connected components.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Option<Vec<HashSet<V>>> {
        if self.directedness.is_directed() {
            return None;
        }
        let _span = info_span!("connected_components").entered();
        Some(undirected_components(self))
    }
}

impl<V, D> Debug for UnweightedGraph<V, D>
where
    V: Vertex,
    D: DirectednessTrait,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_debug(f, "UnweightedGraph", self.directedness, &self.adjacency)
    }
}

impl<V, D> Graph for UnweightedGraph<V, D>
where
    V: Vertex,
    D: DirectednessTrait,
{
    type Vertex = V;
    type Directedness = D;

    fn directedness(&self) -> D {
        self.directedness
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.vertices()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains(vertex)
    }

    fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.targets(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Directed graphs count every stored neighbor.  Undirected graphs store
    /// each edge twice except self-loops, which are stored once.
    fn edge_count(&self) -> usize {
        let entries = self.adjacency.num_entries();
        if self.directedness.is_directed() {
            entries
        } else {
            (entries + self.adjacency.num_self_loop_entries()) / 2
        }
    }
}
