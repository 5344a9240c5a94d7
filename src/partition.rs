/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Contiguous partitioning of the node-id space among workers.
//!
//! The space `[0..num_nodes)` is cut in `num_workers` slices of
//! `num_nodes / num_workers` nodes each; worker `rank` owns the `rank`-th
//! slice. When `num_workers` does not divide `num_nodes`, the last
//! `num_nodes % num_workers` nodes are owned by nobody: they can still be
//! discovered as successors, but they are never expanded. When there are
//! more workers than nodes every slice is empty.

use crate::errors::ConfigError;
use core::ops::Range;

/// The identity of a worker in a run: its rank among `size` workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerId {
    pub rank: usize,
    pub size: usize,
}

impl WorkerId {
    /// The rank receiving the gathered results.
    pub const ROOT: usize = 0;

    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.rank == Self::ROOT
    }
}

/// Returns the slice of `[0..num_nodes)` owned by worker `rank` out of
/// `size` workers.
///
/// `size` must be positive.
#[inline(always)]
pub fn subgraph_range(num_nodes: usize, rank: usize, size: usize) -> Range<usize> {
    debug_assert!(size > 0);
    debug_assert!(rank < size);
    let subgraph_size = num_nodes / size;
    rank * subgraph_size..(rank + 1) * subgraph_size
}

/// Splits the nodes of a graph among a fixed number of workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    num_nodes: usize,
    num_workers: usize,
}

impl Partitioner {
    /// Creates a partitioner of `num_nodes` nodes among `num_workers` workers.
    pub fn new(num_nodes: usize, num_workers: usize) -> Result<Self, ConfigError> {
        if num_workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(Self {
            num_nodes,
            num_workers,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the number of nodes owned by each worker.
    pub fn subgraph_size(&self) -> usize {
        self.num_nodes / self.num_workers
    }

    /// Returns whether every worker owns an empty slice, which happens when
    /// there are more workers than nodes.
    pub fn is_starved(&self) -> bool {
        self.subgraph_size() == 0
    }

    /// Returns the slice owned by `rank`.
    ///
    /// # Panics
    /// If `rank` is not smaller than the number of workers.
    pub fn range(&self, rank: usize) -> Range<usize> {
        assert!(
            rank < self.num_workers,
            "Rank {} out of range (there are {} workers)",
            rank,
            self.num_workers
        );
        subgraph_range(self.num_nodes, rank, self.num_workers)
    }

    /// Returns the slice owned by the given worker.
    pub fn range_of(&self, worker: WorkerId) -> Range<usize> {
        debug_assert_eq!(worker.size, self.num_workers);
        self.range(worker.rank)
    }

    /// Returns an iterator over the slices of all workers, in rank order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.num_workers).map(move |rank| self.range(rank))
    }

    /// Returns the nodes owned by no worker.
    pub fn unassigned(&self) -> Range<usize> {
        self.subgraph_size() * self.num_workers..self.num_nodes
    }

    /// Returns the rank owning `node`, or `None` if `node` is
    /// [unassigned](Partitioner::unassigned) or not a node.
    pub fn owner(&self, node: usize) -> Option<usize> {
        let subgraph_size = self.subgraph_size();
        if subgraph_size == 0 {
            return None;
        }
        let rank = node / subgraph_size;
        (rank < self.num_workers).then_some(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even() -> anyhow::Result<()> {
        let p = Partitioner::new(12, 3)?;
        assert_eq!(p.ranges().collect::<Vec<_>>(), vec![0..4, 4..8, 8..12]);
        assert!(p.unassigned().is_empty());
        assert_eq!(p.owner(7), Some(1));
        Ok(())
    }

    #[test]
    fn test_remainder() -> anyhow::Result<()> {
        let p = Partitioner::new(10, 4)?;
        assert_eq!(p.subgraph_size(), 2);
        assert_eq!(p.range(3), 6..8);
        assert_eq!(p.unassigned(), 8..10);
        assert_eq!(p.owner(8), None);
        assert_eq!(p.owner(9), None);
        Ok(())
    }

    #[test]
    fn test_starved() -> anyhow::Result<()> {
        let p = Partitioner::new(3, 5)?;
        assert!(p.is_starved());
        assert!(p.ranges().all(|r| r.is_empty()));
        assert_eq!(p.unassigned(), 0..3);
        assert_eq!(p.owner(0), None);
        Ok(())
    }

    #[test]
    fn test_no_workers() {
        assert_eq!(Partitioner::new(10, 0), Err(ConfigError::NoWorkers));
    }

    #[test]
    fn test_range_of() -> anyhow::Result<()> {
        let p = Partitioner::new(9, 3)?;
        assert_eq!(p.range_of(WorkerId { rank: 2, size: 3 }), 6..9);
        assert!(WorkerId { rank: 0, size: 3 }.is_root());
        assert_eq!(subgraph_range(9, 1, 3), 3..6);
        Ok(())
    }
}
