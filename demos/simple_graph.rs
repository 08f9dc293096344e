//! Simple example demonstrating arbor-graph usage
//!
//! Run with: cargo run --example simple_graph
//! Set `RUST_LOG=arbor_graph=debug` to see load/export events.

use anyhow::Context;
use arbor_graph::{GraphStore, Node, NodeId};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../tests/data/graph.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🌳 arbor-graph Example\n");

    // 1. Load a weighted graph
    println!("📊 Loading graph_00...");
    let graph = GraphStore::from_json_str(SAMPLE, "graph_00").context("loading sample")?;
    println!(
        "  ✅ Graph loaded: {} nodes, {} edges\n",
        graph.node_count(),
        graph.edge_count()
    );

    // 2. Query neighbors
    println!("🔍 Querying graph...");
    let t = NodeId::from("T");
    let mut parents: Vec<_> = graph.parent_weights(&t)?.into_iter().collect();
    parents.sort_by(|a, b| a.0.cmp(&b.0));
    println!("  T is reached from:");
    for (parent, weight) in parents {
        println!("    ← {parent} ({weight})");
    }

    let d = NodeId::from("D");
    let e = NodeId::from("E");
    println!("  D → E weighs {}", graph.edge_weight(&d, &e)?);

    // 3. Edit
    println!("\n✏️  Editing...");
    graph.add_node(Node::new("U").with_property("kind", "overflow"));
    graph.add_unweighted_edge(&t, &NodeId::from("U"))?;
    graph.add_edge(&d, &e, 3.0)?;
    println!("  D → E now weighs {}", graph.edge_weight(&d, &e)?);
    graph.delete_node(&NodeId::from("C"));
    println!("  removed C, {} nodes left", graph.node_count());

    // 4. Export
    println!("\n💾 Saving to JSON...");
    let path = std::env::temp_dir().join("arbor_example_graph.json");
    graph.write_json_file(&path).await?;
    println!("  ✅ Saved to {}", path.display());

    let loaded = GraphStore::read_json_file(&path, "graph_00").await?;
    assert_eq!(loaded.edges(), graph.edges());

    println!("\n{}", graph.render());
    println!("✨ Example complete!");

    Ok(())
}
