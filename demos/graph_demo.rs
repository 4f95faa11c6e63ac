//! Builds the two sample graphs and prints their traversals and distances.
//!
//! ```text
//! cargo run --example graph_demo -- --start A --target E
//! ```

use adjgraph::{
    prelude::*,
    tracing_support::{dump_span_timings, init_tracing},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Traverse the sample graphs")]
struct Args {
    /// Vertex to start traversals and shortest-path searches from.
    #[arg(long, default_value_t = 'A')]
    start: char,

    /// Vertex to find a path to.
    #[arg(long, default_value_t = 'E')]
    target: char,

    /// Treat the unweighted sample graph as directed.
    #[arg(long)]
    directed: bool,

    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    if args.trace {
        init_tracing();
    }

    let directedness = if args.directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let mut graph = UnweightedGraph::with_directedness(directedness);
    for (from, to) in [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D'), ('D', 'E')] {
        graph.add_edge(from, to);
    }

    println!("Graph ({} vertices, {} edges):", graph.vertex_count(), graph.edge_count());
    print!("{}", graph.display());
    println!();
    println!("DFS({}): {:?}", args.start, graph.dfs(&args.start).collect::<Vec<_>>());
    println!("BFS({}): {:?}", args.start, graph.bfs(&args.start).collect::<Vec<_>>());
    match graph.shortest_path(&args.start, &args.target) {
        Some(path) => println!("{} -> {} path: {:?}", args.start, args.target, path),
        None => println!("{} -> {} path: none", args.start, args.target),
    }
    println!(
        "{} -> {} connected? {}",
        args.start,
        args.target,
        graph.has_path(&args.start, &args.target)
    );

    match graph.has_cycle() {
        Some(cycle) => println!("Cycle? {cycle}"),
        None => println!("Cycle? (only checked for undirected graphs)"),
    }

    let mut weighted = WeightedGraph::<char, u32, Directed>::new();
    for (from, to, weight) in [
        ('A', 'B', 4),
        ('A', 'C', 2),
        ('B', 'D', 3),
        ('C', 'D', 1),
        ('C', 'E', 5),
        ('D', 'E', 1),
    ] {
        weighted.add_edge(from, to, weight);
    }

    println!();
    println!("Weighted graph:");
    print!("{}", weighted.display());
    println!();
    println!("Shortest distances from {}:", args.start);
    for (vertex, distance) in weighted.dijkstra(&args.start) {
        match distance.finite() {
            Some(weight) => println!("  {} -> {}: {}", args.start, vertex, weight),
            None => println!("  {} -> {}: unreachable", args.start, vertex),
        }
    }

    if args.trace {
        dump_span_timings();
    }
}
