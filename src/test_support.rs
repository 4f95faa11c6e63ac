//! Helpers for property tests: arbitrary small graphs and brute-force
//! reference computations to check the real algorithms against.

use std::{
    collections::{BTreeMap, HashSet},
    fmt::Debug,
};

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// Vertices of generated graphs are drawn from `0..VERTEX_RANGE`.  Query
/// endpoints use a slightly larger range so that unknown vertices come up too.
pub const VERTEX_RANGE: u8 = 6;
pub const QUERY_RANGE: u8 = 8;
const MAX_EDGES: usize = 14;
const MAX_WEIGHT: u32 = 20;

/// A graph type the generator knows how to fill with `u8` vertices.
pub trait BuildGraph: Graph<Vertex = u8> + Clone + Debug + 'static {
    fn empty() -> Self;
    fn insert_vertex(&mut self, vertex: u8);
    fn insert_edge(&mut self, from: u8, to: u8, g: &mut Gen);
}

impl<D> BuildGraph for UnweightedGraph<u8, D>
where
    D: DirectednessTrait + Default + 'static,
{
    fn empty() -> Self {
        Self::new()
    }

    fn insert_vertex(&mut self, vertex: u8) {
        self.add_vertex(vertex);
    }

    fn insert_edge(&mut self, from: u8, to: u8, _g: &mut Gen) {
        self.add_edge(from, to);
    }
}

impl<D> BuildGraph for WeightedGraph<u8, u32, D>
where
    D: DirectednessTrait + Default + 'static,
{
    fn empty() -> Self {
        Self::new()
    }

    fn insert_vertex(&mut self, vertex: u8) {
        self.add_vertex(vertex);
    }

    fn insert_edge(&mut self, from: u8, to: u8, g: &mut Gen) {
        self.add_edge(from, to, u32::arbitrary(g) % MAX_WEIGHT);
    }
}

#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: BuildGraph,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = u8::arbitrary(g) % (VERTEX_RANGE + 1);
        let num_edges = usize::arbitrary(g) % MAX_EDGES;

        let mut graph = G::empty();
        for vertex in 0..num_vertices {
            graph.insert_vertex(vertex);
        }
        if num_vertices > 0 {
            for _ in 0..num_edges {
                let from = u8::arbitrary(g) % num_vertices;
                let to = u8::arbitrary(g) % num_vertices;
                graph.insert_edge(from, to, g);
            }
        }
        ArbGraph { graph }
    }
}

/// A mutation applied to an [`UnweightedGraph`] in operation-sequence tests.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    AddVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
}

impl Op {
    pub fn apply<D: DirectednessTrait>(self, graph: &mut UnweightedGraph<u8, D>) {
        match self {
            Op::AddVertex(v) => graph.add_vertex(v),
            Op::AddEdge(from, to) => graph.add_edge(from, to),
            Op::RemoveEdge(from, to) => graph.remove_edge(&from, &to),
            Op::RemoveVertex(v) => {
                graph.remove_vertex(&v);
            }
        }
    }
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut vertex = || u8::arbitrary(g) % VERTEX_RANGE;
        let (a, b) = (vertex(), vertex());
        match usize::arbitrary(g) % 5 {
            0 => Op::AddVertex(a),
            1 | 2 => Op::AddEdge(a, b),
            3 => Op::RemoveEdge(a, b),
            _ => Op::RemoveVertex(a),
        }
    }
}

/// Fewest-edge distances from `start`, computed by repeated relaxation
/// rather than by a search.
pub fn hop_distances<G: Graph<Vertex = u8>>(graph: &G, start: u8) -> BTreeMap<u8, usize> {
    let mut distances = BTreeMap::from([(start, 0)]);
    for _ in 0..=graph.vertex_count() {
        let snapshot = distances.clone();
        for (vertex, distance) in snapshot {
            for neighbor in graph.successors(&vertex) {
                let entry = distances.entry(*neighbor).or_insert(usize::MAX);
                *entry = (*entry).min(distance + 1);
            }
        }
    }
    distances
}

/// Minimum path weight from `start` to every vertex, found by enumerating
/// every simple path.  Only usable on very small graphs.
pub fn brute_force_distances<D: DirectednessTrait>(
    graph: &WeightedGraph<u8, u32, D>,
    start: u8,
) -> BTreeMap<u8, Distance<u32>> {
    fn walk<D: DirectednessTrait>(
        graph: &WeightedGraph<u8, u32, D>,
        vertex: u8,
        cost: u32,
        on_path: &mut HashSet<u8>,
        best: &mut BTreeMap<u8, Distance<u32>>,
    ) {
        let entry = best.entry(vertex).or_insert(Distance::Infinite);
        *entry = (*entry).min(Distance::Finite(cost));
        for edge in graph.edges_from(&vertex) {
            if on_path.insert(edge.target) {
                walk(graph, edge.target, cost + edge.weight, on_path, best);
                on_path.remove(&edge.target);
            }
        }
    }

    let mut best: BTreeMap<u8, Distance<u32>> = graph
        .vertices()
        .map(|vertex| (*vertex, Distance::Infinite))
        .collect();
    walk(graph, start, 0, &mut HashSet::from([start]), &mut best);
    best
}

/// Number of connected components, computed with union-find over the edges.
pub fn count_components<G: Graph<Vertex = u8>>(graph: &G) -> usize {
    fn find(parent: &mut BTreeMap<u8, u8>, vertex: u8) -> u8 {
        let next = parent[&vertex];
        if next == vertex {
            return vertex;
        }
        let root = find(parent, next);
        parent.insert(vertex, root);
        root
    }

    let mut parent: BTreeMap<u8, u8> = graph.vertices().map(|v| (*v, *v)).collect();
    let mut components = parent.len();
    for vertex in graph.vertices() {
        for neighbor in graph.successors(vertex) {
            let (a, b) = (find(&mut parent, *vertex), find(&mut parent, *neighbor));
            if a != b {
                parent.insert(a, b);
                components -= 1;
            }
        }
    }
    components
}

/// Checks that consecutive vertices of `path` are joined by edges.
pub fn is_walk<G: Graph<Vertex = u8>>(graph: &G, path: &[u8]) -> bool {
    path.windows(2)
        .all(|pair| graph.successors(&pair[0]).any(|v| *v == pair[1]))
}
