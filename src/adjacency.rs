//! The adjacency map shared by every graph type in this crate.
//!
//! An [`AdjacencyMap`] maps each vertex to a per-vertex neighbor container.
//! The container decides the edge semantics: a [`BTreeSet`] gives set
//! semantics (no duplicate neighbors), a `Vec` of [`WeightedEdge`]s gives list
//! semantics (parallel edges are kept in insertion order).
//!
//! Keys are kept in a [`BTreeMap`], so vertices and neighbors are always
//! visited in ascending order.  Every traversal built on top of this map is
//! therefore deterministic.

use std::collections::{BTreeMap, BTreeSet, btree_map};

use derivative::Derivative;

use crate::weighted::WeightedEdge;

/// A per-vertex container of outgoing adjacency entries.
pub trait NeighborList<V>: Default {
    /// The stored entry type; either a bare target vertex or a weighted edge.
    type Entry;

    /// Iterates over the stored entries.
    fn entries<'a>(&'a self) -> impl Iterator<Item = &'a Self::Entry>
    where
        Self: 'a,
        Self::Entry: 'a;

    /// Returns the vertex an entry points to.
    fn target(entry: &Self::Entry) -> &V;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns true if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only the entries whose target satisfies `keep`.
    fn retain_targets(&mut self, keep: impl FnMut(&V) -> bool);

    /// Iterates over the targets of the stored entries.
    fn targets<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        Self: 'a,
        Self::Entry: 'a,
        V: 'a,
    {
        self.entries().map(Self::target)
    }
}

impl<V: Ord> NeighborList<V> for BTreeSet<V> {
    type Entry = V;

    fn entries<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn target(entry: &V) -> &V {
        entry
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn retain_targets(&mut self, mut keep: impl FnMut(&V) -> bool) {
        self.retain(|v| keep(v));
    }
}

impl<V, W> NeighborList<V> for Vec<WeightedEdge<V, W>> {
    type Entry = WeightedEdge<V, W>;

    fn entries<'a>(&'a self) -> impl Iterator<Item = &'a WeightedEdge<V, W>>
    where
        Self: 'a,
        WeightedEdge<V, W>: 'a,
    {
        self.iter()
    }

    fn target(entry: &WeightedEdge<V, W>) -> &V {
        &entry.target
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn retain_targets(&mut self, mut keep: impl FnMut(&V) -> bool) {
        self.retain(|edge| keep(&edge.target));
    }
}

/// A mapping from each vertex to its container of outgoing entries.
///
/// A vertex exists exactly when it is a key, even if its container is empty.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone, C: Clone"),
    Default(bound = ""),
    PartialEq(bound = "V: PartialEq, C: PartialEq"),
    Eq(bound = "V: Eq, C: Eq")
)]
pub struct AdjacencyMap<V, C> {
    map: BTreeMap<V, C>,
}

impl<V, C> AdjacencyMap<V, C>
where
    V: Ord + Clone,
    C: NeighborList<V>,
{
    /// Creates an empty adjacency map.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Returns the container for `vertex`, creating an empty one if the
    /// vertex is not yet known.
    pub fn ensure(&mut self, vertex: V) -> &mut C {
        self.map.entry(vertex).or_default()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.map.contains_key(vertex)
    }

    pub fn get(&self, vertex: &V) -> Option<&C> {
        self.map.get(vertex)
    }

    pub fn get_mut(&mut self, vertex: &V) -> Option<&mut C> {
        self.map.get_mut(vertex)
    }

    /// Removes `vertex` as a key and from every other vertex's container.
    /// Returns false if the vertex was unknown, in which case nothing changes.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.map.remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.map.values_mut() {
            neighbors.retain_targets(|target| target != vertex);
        }
        true
    }

    /// Iterates over the known vertices in ascending order.
    pub fn vertices(&self) -> btree_map::Keys<'_, V, C> {
        self.map.keys()
    }

    /// Iterates over `(vertex, container)` pairs in ascending vertex order.
    pub fn iter(&self) -> btree_map::Iter<'_, V, C> {
        self.map.iter()
    }

    /// Iterates over the entries stored for `vertex`; empty if unknown.
    pub fn entries<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a C::Entry> + 'a {
        self.map
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.entries())
    }

    /// Iterates over the targets stored for `vertex`; empty if unknown.
    pub fn targets<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.entries(vertex).map(C::target)
    }

    /// Number of known vertices.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of stored entries across all containers.
    pub fn num_entries(&self) -> usize {
        self.map.values().map(|neighbors| neighbors.len()).sum()
    }

    /// Number of stored entries that point back at their own vertex.
    pub fn num_self_loop_entries(&self) -> usize {
        self.map
            .iter()
            .map(|(vertex, neighbors)| neighbors.targets().filter(|t| *t == vertex).count())
            .sum()
    }
}
