//! Traversal iterators shared by every [`Graph`] implementation.
//!
//! Neighbors are always expanded in the graph's iteration order (ascending
//! vertex order for the graphs in this crate).  A start vertex that is not in
//! the graph is treated as an isolated vertex: every traversal yields it and
//! nothing else.

use std::collections::{HashSet, VecDeque};

use crate::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Breadth-first traversal.  A vertex is marked visited when it is enqueued,
/// so it is never enqueued twice.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        visited.insert(start.clone());
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let vertex = self.queue.pop_front()?;
        for neighbor in graph.successors(&vertex) {
            if self.visited.insert(neighbor.clone()) {
                self.queue.push_back(neighbor.clone());
            }
        }
        Some(vertex)
    }
}

/// Breadth-first traversal that yields the path by which each vertex was
/// first discovered.  Paths come out in nondecreasing length, so the first
/// path ending at a vertex uses the fewest possible edges.
pub struct BfsPathIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    queue: VecDeque<Vec<G::Vertex>>,
}

impl<'g, G> BfsPathIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        visited.insert(start.clone());
        Self {
            graph,
            visited,
            queue: VecDeque::from([vec![start]]),
        }
    }
}

impl<'g, G> Iterator for BfsPathIterator<'g, G>
where
    G: Graph,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let path = self.queue.pop_front()?;
        if let Some(last) = path.last() {
            for neighbor in graph.successors(last) {
                if self.visited.insert(neighbor.clone()) {
                    let mut new_path = path.clone();
                    new_path.push(neighbor.clone());
                    self.queue.push_back(new_path);
                }
            }
        }
        Some(path)
    }
}

/// Iterative depth-first traversal.
///
/// Successors are pushed in reverse so that they are popped in iteration
/// order, and a vertex is marked visited only when it is popped.  The visiting
/// order is therefore the same as [`dfs_recursive`].
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    stack: Vec<G::Vertex>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: vec![start],
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex.clone()) {
                let successors = graph
                    .successors(&vertex)
                    .filter(|v| !self.visited.contains(*v))
                    .cloned()
                    .collect::<Vec<_>>();
                self.stack.extend(successors.into_iter().rev());
                return Some(vertex);
            }
        }
        None
    }
}

/// Recursive depth-first traversal: visit `start`, then recurse into each
/// unvisited successor in iteration order.
///
/// Recursion depth grows with the longest simple path explored, so prefer
/// [`DfsIterator`] for large graphs.
pub fn dfs_recursive<G: Graph>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex> {
    fn visit<G: Graph>(
        graph: &G,
        vertex: &G::Vertex,
        visited: &mut HashSet<G::Vertex>,
        order: &mut Vec<G::Vertex>,
    ) {
        if !visited.insert(vertex.clone()) {
            return;
        }
        order.push(vertex.clone());
        for neighbor in graph.successors(vertex) {
            visit(graph, neighbor, visited, order);
        }
    }

    let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

/// Checks an undirected graph for a cycle.
///
/// Runs a depth-first search from every unvisited vertex, remembering the
/// parent each vertex was reached from.  Meeting an already visited neighbor
/// other than the parent means the connecting edge is not part of the
/// spanning forest, so it closes a cycle.  Self-loops are cycles, and so are
/// parallel edges in graphs that allow them.
///
/// The successors of `graph` must be symmetric; the result is meaningless for
/// a directed graph.
pub fn has_undirected_cycle<G: Graph>(graph: &G) -> bool {
    let mut visited: HashSet<&G::Vertex> = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        let mut stack: Vec<(&G::Vertex, Option<&G::Vertex>)> = vec![(root, None)];
        while let Some((vertex, mut parent)) = stack.pop() {
            // A parallel edge back to the parent is a second edge, so the
            // parent may only be skipped once.
            for neighbor in graph.successors(vertex) {
                if visited.insert(neighbor) {
                    stack.push((neighbor, Some(vertex)));
                } else if parent == Some(neighbor) {
                    parent = None;
                } else {
                    return true;
                }
            }
        }
    }
    false
}

/// Partitions an undirected graph into connected components.
#[cfg(feature = "pathfinding")]
pub fn undirected_components<G: Graph>(graph: &G) -> Vec<HashSet<G::Vertex>> {
    pathfinding::prelude::connected_components(
        &graph.vertices().cloned().collect::<Vec<_>>(),
        |vertex| graph.successors(vertex).cloned().collect::<Vec<_>>(),
    )
}
