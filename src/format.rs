//! Text rendering of graphs.
//!
//! Nothing in the graph types writes to the console.  Callers that want a
//! textual view ask for one: [`AdjacencyDisplay`] renders the adjacency list
//! one vertex per line, and the `Debug` impls of the graph types go through
//! [`format_debug`].

use std::fmt::{self, Debug, Display, Formatter};

use crate::{
    adjacency::{AdjacencyMap, NeighborList},
    directedness::DirectednessTrait,
};

/// Renders an adjacency map as one line per vertex, in vertex order:
///
/// ```text
/// A → B, C
/// B → A, D
/// E →
/// ```
///
/// Weighted entries render as `target(weight)`.
pub struct AdjacencyDisplay<'g, V, C> {
    adjacency: &'g AdjacencyMap<V, C>,
}

impl<'g, V, C> AdjacencyDisplay<'g, V, C> {
    pub(crate) fn new(adjacency: &'g AdjacencyMap<V, C>) -> Self {
        Self { adjacency }
    }
}

impl<V, C> Display for AdjacencyDisplay<'_, V, C>
where
    V: Display + Ord + Clone,
    C: NeighborList<V>,
    C::Entry: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.adjacency.iter() {
            write!(f, "{vertex} →")?;
            for (i, entry) in neighbors.entries().enumerate() {
                let separator = if i == 0 { " " } else { ", " };
                write!(f, "{separator}{entry}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct AdjacencyDebug<'a, V, C>(&'a AdjacencyMap<V, C>);

impl<V, C> Debug for AdjacencyDebug<'_, V, C>
where
    V: Debug + Ord + Clone,
    C: NeighborList<V>,
    C::Entry: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .map(|(vertex, neighbors)| (vertex, neighbors.entries().collect::<Vec<_>>())),
            )
            .finish()
    }
}

/// Formats a graph for debug output as its name, its directedness, and its
/// adjacency map.
pub(crate) fn format_debug<V, C, D>(
    f: &mut Formatter<'_>,
    name: &str,
    directedness: D,
    adjacency: &AdjacencyMap<V, C>,
) -> fmt::Result
where
    V: Debug + Ord + Clone,
    C: NeighborList<V>,
    C::Entry: Debug,
    D: DirectednessTrait,
{
    f.debug_struct(name)
        .field("directed", &directedness.is_directed())
        .field("adjacency", &AdjacencyDebug(adjacency))
        .finish()
}
