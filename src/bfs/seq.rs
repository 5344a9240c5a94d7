/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visited::VisitedSet;
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;

/// Returns the set of nodes reachable from `start_node`, computed by a
/// textbook sequential breadth-first visit.
///
/// This is the baseline against which partitioned visits are compared.
///
/// # Panics
/// If `start_node` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use partbfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (3, 0)]);
/// let visited = serial_bfs(&graph, 0, no_logging![]);
/// assert_eq!(visited.to_vec(), vec![0, 1, 2]);
/// ```
pub fn serial_bfs(
    graph: impl RandomAccessGraph,
    start_node: usize,
    pl: &mut impl ProgressLog,
) -> VisitedSet {
    let num_nodes = graph.num_nodes();
    let mut visited = VisitedSet::new(num_nodes);
    let mut queue = VecDeque::new();

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Visiting graph...");

    visited.insert(start_node);
    queue.push_back(start_node);

    while let Some(current_node) = queue.pop_front() {
        pl.light_update();
        for succ in graph.successors(current_node) {
            if visited.insert(succ) {
                queue.push_back(succ);
            }
        }
    }

    pl.done();
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_chain() {
        let graph = VecGraph::from_adjacency_lists(vec![vec![], vec![0], vec![1], vec![2]]);
        assert_eq!(serial_bfs(&graph, 3, no_logging![]).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(serial_bfs(&graph, 1, no_logging![]).to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_cycle_and_loops() {
        let graph = VecGraph::from_arcs([(0, 0), (0, 1), (1, 2), (2, 0), (3, 3)]);
        assert_eq!(serial_bfs(&graph, 2, no_logging![]).to_vec(), vec![0, 1, 2]);
        assert_eq!(serial_bfs(&graph, 3, no_logging![]).to_vec(), vec![3]);
    }
}
