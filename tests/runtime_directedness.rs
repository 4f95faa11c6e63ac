use adjgraph::prelude::*;

fn build(directedness: Directedness) -> UnweightedGraph<u32, Directedness> {
    let mut graph = UnweightedGraph::with_directedness(directedness);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 1);
    graph
}

#[test]
fn directedness_is_fixed_at_construction() {
    let directed = build(Directedness::Directed);
    let undirected = build(Directedness::Undirected);

    assert!(directed.is_directed());
    assert!(!undirected.is_directed());
    assert_eq!(directed.edge_count(), 3);
    assert_eq!(undirected.edge_count(), 3);
    assert_eq!(directed.neighbors(&1).collect::<Vec<_>>(), vec![&2]);
    assert_eq!(undirected.neighbors(&1).collect::<Vec<_>>(), vec![&2, &3]);
}

#[test]
fn removal_follows_directedness() {
    let mut directed = build(Directedness::Directed);
    directed.remove_edge(&2, &1);
    assert!(directed.has_edge(&1, &2));

    let mut undirected = build(Directedness::Undirected);
    undirected.remove_edge(&2, &1);
    assert!(!undirected.has_edge(&1, &2));
    assert_eq!(undirected.shortest_path(&1, &2), Some(vec![1, 3, 2]));
}

#[test]
fn weighted_runtime_directedness() {
    let mut graph = WeightedGraph::<&str, u64, Directedness>::with_directedness(Directedness::Undirected);
    graph.add_edge("x", "y", 10);
    graph.add_edge("y", "z", 5);
    let distances = graph.dijkstra(&"z");
    assert_eq!(distances[&"x"], Distance::Finite(15));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn cycle_detection_on_runtime_undirected_graph() {
    assert_eq!(build(Directedness::Undirected).has_cycle(), Some(true));
    assert_eq!(build(Directedness::Directed).has_cycle(), None);

    let mut path = UnweightedGraph::<u32, Directedness>::with_directedness(Directedness::Undirected);
    path.add_edge(1, 2);
    path.add_edge(2, 3);
    assert_eq!(path.has_cycle(), Some(false));
    path.add_edge(3, 3);
    assert_eq!(path.has_cycle(), Some(true));
}

#[cfg(feature = "pathfinding")]
#[test]
fn connected_components_on_runtime_undirected_graph() {
    let mut graph = build(Directedness::Undirected);
    graph.add_edge(7, 8);
    let mut sizes: Vec<_> = graph
        .connected_components()
        .map(|components| components.iter().map(|c| c.len()).collect())
        .unwrap_or_default();
    sizes.sort();
    assert_eq!(sizes, vec![2, 3]);
    assert_eq!(build(Directedness::Directed).connected_components(), None);
}
