use std::{
    collections::{BTreeMap, HashSet},
    fmt::{self, Debug, Display, Formatter},
};

#[cfg(feature = "pathfinding")]
use {crate::search::undirected_components, num_traits::Zero, std::collections::HashMap};

use derivative::Derivative;

use crate::{
    adjacency::AdjacencyMap,
    directedness::{Directedness, DirectednessTrait, Undirected},
    distance::{Distance, Weight},
    error::GraphError,
    format::{AdjacencyDisplay, format_debug},
    graph::{Graph, Vertex},
    search::has_undirected_cycle,
    tracing_support::info_span,
};

/// One directional adjacency entry of a [`WeightedGraph`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeightedEdge<V, W> {
    pub target: V,
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    pub fn new(target: V, weight: W) -> Self {
        Self { target, weight }
    }
}

impl<V: Display, W: Display> Display for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.target, self.weight)
    }
}

/// A graph whose edges carry weights, stored as a map from each vertex to the
/// list of its outgoing weighted edges.
///
/// Edges have list semantics: adding the same edge twice stores two parallel
/// edges.  In an undirected graph each call to [`add_edge`](Self::add_edge)
/// stores one entry in each direction.  There are no removal operations.
///
/// Weights are expected to be non-negative.  This is not checked when edges
/// are added; [`dijkstra`](Self::dijkstra) gives meaningless results for
/// negative weights, and [`check_weights`](Self::check_weights) reports them.
///
/// # Type Parameters
/// * `V` - The vertex type
/// * `W` - The weight type
/// * `D` - The directedness ([`Undirected`] by default)
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone, W: Clone, D: Clone"),
    PartialEq(bound = "V: PartialEq, W: PartialEq, D: PartialEq"),
    Eq(bound = "V: Eq, W: Eq, D: Eq")
)]
pub struct WeightedGraph<V, W, D = Undirected> {
    adjacency: AdjacencyMap<V, Vec<WeightedEdge<V, W>>>,
    directedness: D,
}

impl<V, W, D> Default for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Weight,
    D: DirectednessTrait + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, D> WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Weight,
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

    /// Adds a vertex with no edges.  Does nothing if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.ensure(vertex);
    }

    /// Adds a weighted edge, adding either endpoint first if it is not yet in
    /// the graph.  Existing edges between the same vertices are kept.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.adjacency
            .ensure(from.clone())
            .push(WeightedEdge::new(to.clone(), weight));
        let reverse = self.adjacency.ensure(to);
        if !self.directedness.is_directed() {
            reverse.push(WeightedEdge::new(from, weight));
        }
    }

    /// Iterates over the edges leaving `vertex` in insertion order.  Empty if
    /// `vertex` is unknown.
    pub fn edges_from<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a WeightedEdge<V, W>> + 'a {
        self.adjacency.entries(vertex)
    }

    /// Iterates over the targets of the edges leaving `vertex`.  A target
    /// appears once per parallel edge.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.targets(vertex)
    }

    /// Computes the shortest distance from `start` to every vertex using
    /// Dijkstra's algorithm.
    ///
    /// Every vertex starts at [`Distance::Infinite`] and `start` at zero.  Each
    /// round scans the unfinalized vertices for the smallest finite tentative
    /// distance (ties go to the smaller vertex), finalizes it, and relaxes its
    /// outgoing edges.  The search stops once no unfinalized vertex is
    /// reachable, so unreachable vertices keep [`Distance::Infinite`].
    ///
    /// The scan makes this O(V²) overall; see
    /// [`shortest_paths`](Self::shortest_paths) for a heap-based search.
    ///
    /// If `start` is not in the graph it is treated as an isolated vertex: it
    /// appears in the result at distance zero and every other vertex is
    /// unreachable.
    ///
    /// A path whose total weight overflows `W` is ignored, so a vertex reached
    /// only by such paths stays at [`Distance::Infinite`].
    pub fn dijkstra(&self, start: &V) -> BTreeMap<V, Distance<W>> {
        let _span = info_span!("dijkstra", vertices = self.vertex_count()).entered();
        let mut distances: BTreeMap<V, Distance<W>> = self
            .adjacency
            .vertices()
            .map(|vertex| (vertex.clone(), Distance::Infinite))
            .collect();
        distances.insert(start.clone(), Distance::zero());

        let mut finalized: HashSet<V> = HashSet::with_capacity(distances.len());
        for _ in 0..distances.len() {
            let Some((vertex, distance)) = distances
                .iter()
                .filter(|(vertex, distance)| distance.is_finite() && !finalized.contains(*vertex))
                .min_by_key(|(_, distance)| **distance)
                .map(|(vertex, distance)| (vertex.clone(), *distance))
            else {
                break;
            };

            for edge in self.adjacency.entries(&vertex) {
                let candidate = distance.extend(edge.weight);
                if let Some(current) = distances.get_mut(&edge.target) {
                    if candidate < *current {
                        *current = candidate;
                    }
                }
            }
            finalized.insert(vertex);
        }
        distances
    }

    /// Finds a minimum-weight path from `start` to every reachable vertex
    /// using a binary-heap Dijkstra search.  Returns a map from each reachable
    /// vertex (including `start`) to the path taken and its total weight.
    ///
    /// The weights agree with the finite distances of
    /// [`dijkstra`](Self::dijkstra) for every graph with non-negative weights.
    /// Unlike [`dijkstra`](Self::dijkstra), totals are summed unchecked and
    /// must fit in `W`.
    #[cfg(feature = "pathfinding")]
    pub fn shortest_paths(&self, start: &V) -> HashMap<V, (Vec<V>, W)>
    where
        W: Zero,
    {
        let _span = info_span!("shortest_paths", vertices = self.vertex_count()).entered();
        let parents = pathfinding::prelude::dijkstra_all(start, |vertex| {
            self.edges_from(vertex)
                .map(|edge| (edge.target.clone(), edge.weight))
                .collect::<Vec<_>>()
        });
        let mut paths: HashMap<V, (Vec<V>, W)> = parents
            .iter()
            .map(|(vertex, &(_, cost))| {
                let path = pathfinding::prelude::build_path(vertex, &parents);
                (vertex.clone(), (path, cost))
            })
            .collect();
        paths.insert(start.clone(), (vec![start.clone()], W::zero()));
        paths
    }

    /// Reports the first edge, in vertex order, whose weight is negative.
    pub fn check_weights(&self) -> Result<(), GraphError> {
        for (vertex, edges) in self.adjacency.iter() {
            if let Some(edge) = edges.iter().find(|edge| edge.weight < W::default()) {
                return Err(GraphError::NegativeWeight {
                    from: format!("{vertex:?}"),
                    to: format!("{:?}", edge.target),
                    weight: format!("{:?}", edge.weight),
                });
            }
        }
        Ok(())
    }

    /// Returns a value that renders one line per vertex, e.g. `A → B(4), C(2)`.
    pub fn display(&self) -> AdjacencyDisplay<'_, V, Vec<WeightedEdge<V, W>>> {
        AdjacencyDisplay::new(&self.adjacency)
    }
}

/// Undirected-only queries for graphs whose directedness is chosen at run
/// time.  Each returns `None` when the graph is directed.
impl<V: Vertex, W: Weight> WeightedGraph<V, W, Directedness> {
    /// Checks whether the graph contains a cycle.  Parallel edges form a
    /// cycle.
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

impl<V, W, D> Debug for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Weight,
    D: DirectednessTrait,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_debug(f, "WeightedGraph", self.directedness, &self.adjacency)
    }
}

impl<V, W, D> Graph for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Weight,
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

    /// Every undirected edge is stored as exactly two entries, self-loops
    /// included.
    fn edge_count(&self) -> usize {
        let entries = self.adjacency.num_entries();
        if self.directedness.is_directed() {
            entries
        } else {
            entries / 2
        }
    }
}
