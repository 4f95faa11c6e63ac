use std::fmt::{self, Debug, Display};

use num_traits::CheckedAdd;

/// Trait for edge weights usable by the shortest-path algorithms.
///
/// `W::default()` is the zero distance.  Weights are expected to be
/// non-negative; this is a precondition of [`dijkstra`] and is not checked at
/// run time (see [`WeightedGraph::check_weights`] for an explicit check).
///
/// Distances are summed with [`CheckedAdd`].  A total that does not fit in `W`
/// is treated as [`Distance::Infinite`].
///
/// [`dijkstra`]: crate::WeightedGraph::dijkstra
/// [`WeightedGraph::check_weights`]: crate::WeightedGraph::check_weights
pub trait Weight: Copy + Ord + Default + CheckedAdd + Debug {}

impl<W> Weight for W where W: Copy + Ord + Default + CheckedAdd + Debug {}

/// A tentative or final shortest-path distance.
///
/// Every finite distance compares less than [`Distance::Infinite`], which
/// marks a vertex that has not been reached.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::from(W::default())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, or `None` for an unreachable vertex.
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Extends the distance by one edge.  Infinity absorbs any weight, and a
    /// sum that overflows `W` is infinite.
    pub fn extend(self, weight: W) -> Self {
        self.finite()
            .and_then(|w| w.checked_add(&weight))
            .map_or(Distance::Infinite, Distance::from)
    }
}

impl<W> From<W> for Distance<W> {
    fn from(weight: W) -> Self {
        Distance::Finite(weight)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}
