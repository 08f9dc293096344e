//! Concurrent access tests
//!
//! Many threads share one store through `Arc`; readers must never observe a
//! half-applied mutation.

use arbor_graph::{GraphStore, Node, NodeId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

const WRITERS: usize = 8;
const NODES: usize = 16;
const ROUNDS: usize = 500;

fn label(i: usize) -> NodeId {
    NodeId::from(format!("n{i}"))
}

fn seeded_store() -> Arc<GraphStore> {
    let graph = Arc::new(GraphStore::new("shared"));
    for i in 0..NODES {
        graph.add_node(Node::new(label(i)));
    }
    graph
}

#[test]
fn test_concurrent_add_edge_accumulates_exactly() {
    let graph = seeded_store();

    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    graph.add_edge(&label(0), &label(1), 1.0).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let expected = (WRITERS * ROUNDS) as f64;
    assert_eq!(graph.edge_weight(&label(0), &label(1)).unwrap(), expected);
    assert_eq!(graph.parent_weights(&label(1)).unwrap()[&label(0)], expected);
}

#[test]
fn test_concurrent_add_node_single_winner() {
    let graph = Arc::new(GraphStore::new("race"));

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                graph.add_node(Node::new("contested").with_property("writer", w.to_string()))
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&inserted| inserted)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_readers_never_see_dangling_targets() {
    let graph = seeded_store();
    let done = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    let src = label((w + round) % NODES);
                    let tgt = label((w * 7 + round * 3) % NODES);
                    let result = match round % 4 {
                        0 => graph.add_edge(&src, &tgt, 1.0),
                        1 => graph.replace_edge(&src, &tgt, round as f64),
                        2 => graph.delete_edge(&src, &tgt),
                        _ => {
                            let victim = label(NODES - 1 - w % 4);
                            graph.delete_node(&victim);
                            graph.add_node(Node::new(victim));
                            Ok(())
                        }
                    };
                    // A churned endpoint may be briefly absent
                    if let Err(err) = result {
                        assert!(err.is_not_found(), "unexpected error {err}");
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    // One snapshot: every target of every row is a live node
                    let adjacency = graph.adjacency();
                    for (src, row) in &adjacency {
                        for tgt in row.keys() {
                            assert!(adjacency.contains_key(tgt), "{src} points at deleted {tgt}");
                        }
                    }
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    // Quiescent state: every child entry is mirrored
    for id in graph.nodes().keys() {
        for (child, w) in graph.child_weights(id).unwrap() {
            assert_eq!(graph.parent_weights(&child).unwrap().get(id), Some(&w));
        }
    }
}
