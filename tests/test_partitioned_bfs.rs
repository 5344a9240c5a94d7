/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use partbfs::prelude::*;

fn chain() -> VecGraph {
    VecGraph::from_adjacency_lists(vec![vec![1], vec![2], vec![3], vec![]])
}

fn random_graph(n: usize, avg_degree: f64, seed: u64) -> Result<VecGraph> {
    Ok(ErdosRenyi::with_avg_degree(n, avg_degree, seed)?.generate())
}

#[test]
fn test_chain_two_workers() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let graph = chain();
    let results = PartitionedBfs::new(&graph, 2).run(0)?;
    assert_eq!(results.len(), 2);
    // Worker 0 owns [0..2) and follows 0 -> 1 -> 2, but node 2 belongs to
    // worker 1, which never sees the start node, so 3 is never reached
    assert_eq!(results[0].to_vec(), vec![0, 1, 2]);
    assert!(results[1].is_empty());
    assert!(!results[0].contains(3));
    Ok(())
}

#[test]
fn test_chain_one_worker() -> Result<()> {
    let graph = chain();
    // Successors with larger ids are expanded in the same scan
    assert_eq!(
        PartitionedBfs::new(&graph, 1).run_root(0)?.to_vec(),
        vec![0, 1, 2, 3]
    );

    let reversed = VecGraph::from_adjacency_lists(vec![vec![], vec![0], vec![1], vec![2]]);
    assert_eq!(
        PartitionedBfs::new(&reversed, 1).run_root(3)?.to_vec(),
        vec![2, 3]
    );
    assert_eq!(
        PartitionedBfs::new(&reversed, 1)
            .mode(ExplorationMode::FixedPoint)
            .run_root(3)?
            .to_vec(),
        vec![0, 1, 2, 3]
    );
    Ok(())
}

#[test]
fn test_one_worker_matches_local_exploration() -> Result<()> {
    for seed in 0..5 {
        let graph = random_graph(200, 3.0, seed)?;
        for start_node in [0, 57, 199] {
            let local = LocalExplorer::new(&graph, 0..200).explore(start_node);
            let root = PartitionedBfs::new(&graph, 1).run_root(start_node)?;
            assert_eq!(root, local);
        }
    }
    Ok(())
}

#[test]
fn test_one_worker_fixed_point_matches_serial() -> Result<()> {
    for seed in 0..5 {
        let graph = random_graph(300, 1.5, seed)?;
        for start_node in [0, 150, 299] {
            let serial = serial_bfs(&graph, start_node, no_logging![]);
            let root = PartitionedBfs::new(&graph, 1)
                .mode(ExplorationMode::FixedPoint)
                .run_root(start_node)?;
            assert_eq!(root, serial);
        }
    }
    Ok(())
}

#[test]
fn test_root_is_union_of_local_sets() -> Result<()> {
    let graph = random_graph(500, 4.0, 7)?;
    for mode in [ExplorationMode::SinglePass, ExplorationMode::FixedPoint] {
        for num_workers in 1..=9 {
            let partitioner = Partitioner::new(graph.num_nodes(), num_workers)?;
            for start_node in [0, 123, 499] {
                let expected = merge(
                    graph.num_nodes(),
                    partitioner
                        .ranges()
                        .map(|range| LocalExplorer::new(&graph, range).mode(mode).explore(start_node)),
                );
                let results = PartitionedBfs::new(&graph, num_workers)
                    .mode(mode)
                    .run(start_node)?;
                assert_eq!(results.len(), num_workers);
                assert_eq!(results[0], expected);
                for other in &results[1..] {
                    assert!(other.is_empty());
                    assert_eq!(other.num_nodes(), graph.num_nodes());
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_subset_of_reachable() -> Result<()> {
    let graph = random_graph(400, 2.0, 11)?;
    for num_workers in [1, 2, 3, 8] {
        for start_node in [5, 200, 390] {
            let serial = serial_bfs(&graph, start_node, no_logging![]);
            let single = PartitionedBfs::new(&graph, num_workers).run_root(start_node)?;
            let fixed = PartitionedBfs::new(&graph, num_workers)
                .mode(ExplorationMode::FixedPoint)
                .run_root(start_node)?;
            assert!(single.iter().all(|node| fixed.contains(node)));
            assert!(fixed.iter().all(|node| serial.contains(node)));
            assert!(single.contains(start_node));
        }
    }
    Ok(())
}

#[test]
fn test_start_at_end_of_slice() -> Result<()> {
    // When the start node is the last node of its slice the scan cannot
    // chain, so the result is the start node and its successors
    let graph = random_graph(100, 5.0, 3)?;
    for num_workers in [1, 4, 10] {
        let partitioner = Partitioner::new(graph.num_nodes(), num_workers)?;
        for range in partitioner.ranges() {
            let start_node = range.end - 1;
            let mut expected = VisitedSet::from_nodes(graph.num_nodes(), graph.successors(start_node));
            expected.insert(start_node);
            assert_eq!(
                PartitionedBfs::new(&graph, num_workers).run_root(start_node)?,
                expected
            );
        }
    }
    Ok(())
}

#[test]
fn test_unassigned_start_node() -> Result<()> {
    let graph = random_graph(10, 3.0, 0)?;
    // Node 9 is owned by nobody with 4 workers
    assert!(PartitionedBfs::new(&graph, 4).run_root(9)?.is_empty());
    Ok(())
}

#[test]
fn test_starvation() -> Result<()> {
    let graph = chain();
    let results = PartitionedBfs::new(&graph, 6).run(0)?;
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.is_empty()));
    Ok(())
}

#[test]
fn test_config_errors() {
    let graph = chain();
    let err = PartitionedBfs::new(&graph, 0).run(0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::NoWorkers)
    );
    let err = PartitionedBfs::new(&graph, 2).run(4).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::StartNodeOutOfRange {
            node: 4,
            num_nodes: 4
        })
    );
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large_graph() -> Result<()> {
    let graph = random_graph(10_000, 100.0, 0)?;
    let serial = serial_bfs(&graph, 0, no_logging![]);
    let partitioned = PartitionedBfs::new(&graph, 10).run_root(0)?;
    assert!(partitioned.len() <= serial.len());
    Ok(())
}
