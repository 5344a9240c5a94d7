/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bounded exploration of the slice of nodes owned by a worker.

use crate::traits::RandomAccessGraph;
use crate::visited::VisitedSet;
use core::ops::Range;

/// How many scans of its slice a [`LocalExplorer`] performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExplorationMode {
    /// A single scan of the slice in increasing order.
    ///
    /// Membership is tested when the scan reaches a node, so a node of the
    /// slice that was discovered earlier in the same scan is expanded only
    /// if its index is larger than that of the node that discovered it. In
    /// other words, chains of arcs with increasing targets inside the slice
    /// are followed to the end, while an arc pointing backwards stops the
    /// exploration.
    #[default]
    SinglePass,
    /// Scans are repeated until one of them adds no node, so every node of
    /// the slice reachable from the start node through nodes of the slice
    /// is expanded.
    FixedPoint,
}

/// Explores the nodes of a slice `[start..end)` starting from a node.
///
/// Only nodes of the slice are ever expanded; their successors are added to
/// the result regardless of the slice they belong to, but the successors of
/// nodes outside the slice are never enumerated. If the start node is not in
/// the slice the result is empty.
///
/// # Examples
///
/// ```
/// use partbfs::prelude::*;
///
/// let graph = VecGraph::from_adjacency_lists(vec![vec![1], vec![2], vec![3], vec![]]);
/// let visited = LocalExplorer::new(&graph, 0..2).explore(0);
/// assert_eq!(visited.to_vec(), vec![0, 1, 2]);
/// assert!(LocalExplorer::new(&graph, 2..4).explore(0).is_empty());
/// ```
pub struct LocalExplorer<G: RandomAccessGraph> {
    graph: G,
    range: Range<usize>,
    mode: ExplorationMode,
}

impl<G: RandomAccessGraph> LocalExplorer<G> {
    /// Creates a single-pass explorer of `range`.
    ///
    /// # Panics
    /// If `range` is not contained in the nodes of `graph`.
    pub fn new(graph: G, range: Range<usize>) -> Self {
        assert!(
            range.end <= graph.num_nodes() || range.is_empty(),
            "Range {:?} exceeds the number of nodes ({})",
            range,
            graph.num_nodes()
        );
        Self {
            graph,
            range,
            mode: ExplorationMode::default(),
        }
    }

    /// Sets the exploration mode.
    pub fn mode(mut self, mode: ExplorationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Runs the exploration and returns the local visited set.
    ///
    /// # Panics
    /// If `start_node` is not a node of the graph.
    pub fn explore(&self, start_node: usize) -> VisitedSet {
        let mut visited = VisitedSet::new(self.graph.num_nodes());

        if self.range.contains(&start_node) {
            visited.insert(start_node);
        } else {
            // Nothing in the slice can be visited
            return visited;
        }

        match self.mode {
            ExplorationMode::SinglePass => {
                self.scan(&mut visited);
            }
            ExplorationMode::FixedPoint => {
                let mut passes = 1;
                while self.scan(&mut visited) {
                    passes += 1;
                }
                log::trace!(
                    "Slice {:?} reached a fixed point after {} passes",
                    self.range,
                    passes
                );
            }
        }

        visited
    }

    /// Scans the slice once in increasing order, expanding visited nodes.
    /// Returns whether some node was added.
    fn scan(&self, visited: &mut VisitedSet) -> bool {
        let mut changed = false;
        for current_node in self.range.clone() {
            if !visited.contains(current_node) {
                continue;
            }
            for succ in self.graph.successors(current_node) {
                changed |= visited.insert(succ);
            }
        }
        changed
    }
}
