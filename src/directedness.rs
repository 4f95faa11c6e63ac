use std::{fmt::Debug, hash::Hash};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Undirected;

/// Enum representing the directedness of a graph chosen at construction time.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    Undirected,
}

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to provide compile-time specialization of graph behavior.  It is also
/// implemented by the [`Directedness`] enum for runtime configuration.  In
/// both cases the value is fixed when the graph is created.
pub trait DirectednessTrait:
    Copy + Clone + Debug + PartialEq + Eq + Hash + PartialOrd + Ord
{
    fn is_directed(&self) -> bool;
}

impl DirectednessTrait for Directed {
    fn is_directed(&self) -> bool {
        true
    }
}

impl DirectednessTrait for Undirected {
    fn is_directed(&self) -> bool {
        false
    }
}

impl DirectednessTrait for Directedness {
    fn is_directed(&self) -> bool {
        match self {
            Directedness::Directed => true,
            Directedness::Undirected => false,
        }
    }
}

impl From<Directed> for Directedness {
    fn from(_: Directed) -> Self {
        Directedness::Directed
    }
}

impl From<Undirected> for Directedness {
    fn from(_: Undirected) -> Self {
        Directedness::Undirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_agree_with_enum() {
        assert_eq!(
            Directed.is_directed(),
            Directedness::from(Directed).is_directed()
        );
        assert_eq!(
            Undirected.is_directed(),
            Directedness::from(Undirected).is_directed()
        );
        assert!(Directed.is_directed());
        assert!(!Undirected.is_directed());
    }
}
