/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::comm::Communicator;
use crate::errors::ConfigError;
use crate::explore::ExplorationMode;
use crate::partition::{Partitioner, WorkerId};
use crate::traits::RandomAccessGraph;
use crate::visited::VisitedSet;
use crate::worker::Worker;
use anyhow::{Context, Result};

/// A partitioned visit: a fixed number of workers, each exploring a
/// contiguous slice of the nodes, whose results are gathered at the root.
///
/// Each worker is a [`Worker`] running on its own thread of a dedicated
/// thread pool with exactly one thread per worker, so all workers are alive
/// at the same time, as the aggregation requires. The graph is shared
/// immutably among the workers.
///
/// The workers perform a bounded exploration (see [`ExplorationMode`]) and
/// exchange no information before the aggregation, so nodes reachable from
/// the start node only through paths leaving and re-entering a slice, or
/// crossing slices, might be missing from the result.
///
/// # Examples
///
/// ```
/// use partbfs::prelude::*;
///
/// let graph = VecGraph::from_adjacency_lists(vec![vec![1], vec![2], vec![3], vec![]]);
/// let visited = PartitionedBfs::new(&graph, 2).run_root(0)?;
/// // Node 3 is reachable, but the worker owning it never saw node 2
/// assert_eq!(visited.to_vec(), vec![0, 1, 2]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct PartitionedBfs<G: RandomAccessGraph> {
    graph: G,
    num_workers: usize,
    mode: ExplorationMode,
}

impl<G: RandomAccessGraph + Sync> PartitionedBfs<G> {
    /// Creates a single-pass partitioned visit with `num_workers` workers.
    pub fn new(graph: G, num_workers: usize) -> Self {
        Self {
            graph,
            num_workers,
            mode: ExplorationMode::default(),
        }
    }

    /// Sets the exploration mode of the workers.
    pub fn mode(mut self, mode: ExplorationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Runs the visit from `start_node`, returning the result of each
    /// worker in rank order.
    ///
    /// The first element is the global visited set computed by the root;
    /// all other elements are empty.
    pub fn run(&self, start_node: usize) -> Result<Vec<VisitedSet>> {
        let num_nodes = self.graph.num_nodes();
        let partitioner = Partitioner::new(num_nodes, self.num_workers)?;
        if start_node >= num_nodes {
            return Err(ConfigError::StartNodeOutOfRange {
                node: start_node,
                num_nodes,
            }
            .into());
        }

        if partitioner.is_starved() {
            log::warn!(
                "{} workers for {} nodes: all slices are empty",
                self.num_workers,
                num_nodes
            );
        } else if !partitioner.unassigned().is_empty() {
            log::info!(
                "Nodes {:?} are not assigned to any worker",
                partitioner.unassigned()
            );
        }

        log::info!(
            "Visiting from node {} with {} workers ({:?})",
            start_node,
            self.num_workers,
            self.mode
        );

        let world = Communicator::world(self.num_workers)?;
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_workers)
            .thread_name(|rank| format!("partbfs-worker-{}", rank))
            .build()
            .with_context(|| {
                format!(
                    "Cannot build a thread pool with {} threads",
                    self.num_workers
                )
            })?;

        let (tx, rx) = crossbeam_channel::bounded(self.num_workers);

        thread_pool.in_place_scope(|scope| {
            for comm in world {
                let tx = tx.clone();
                let graph = &self.graph;
                let partitioner = &partitioner;
                let mode = self.mode;
                scope.spawn(move |_| {
                    let rank = comm.rank();
                    let result = Worker::new(graph, partitioner, comm, mode).run(start_node);
                    // The channel has room for all results
                    let _ = tx.send((rank, result));
                });
            }
        });
        drop(tx);

        let mut results: Vec<Option<VisitedSet>> = (0..self.num_workers).map(|_| None).collect();
        for (rank, result) in rx {
            results[rank] = Some(result.with_context(|| format!("Worker {} failed", rank))?);
        }

        let results: Vec<VisitedSet> = results.into_iter().flatten().collect();
        debug_assert_eq!(results.len(), self.num_workers);
        log::info!(
            "Root visited {} nodes out of {}",
            results[WorkerId::ROOT].len(),
            num_nodes
        );
        Ok(results)
    }

    /// Runs the visit from `start_node` and returns the global visited set
    /// computed by the root.
    pub fn run_root(&self, start_node: usize) -> Result<VisitedSet> {
        self.run(start_node)?
            .into_iter()
            .next()
            .context("The root returned no result")
    }
}
