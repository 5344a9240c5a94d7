/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// A mutable [`RandomAccessGraph`] implementation based on a vector of vectors.
///
/// The successors of each node are kept in insertion order, which is the
/// order in which visits will enumerate them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    number_of_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl core::default::Default for VecGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            number_of_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            number_of_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Add an isolated node to the graph and return true if is a new node.
    ///
    /// All nodes with a smaller index that were not present are added, too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Add an arc to the graph, appending `v` to the successors of `u`.
    ///
    /// # Panics
    /// If either node is bigger or equal than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        self.succ[u].push(v);
        self.number_of_arcs += 1;
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    ///
    /// The number of nodes is one more than the largest node appearing in
    /// an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        for (u, v) in arcs {
            g.add_node(u.max(v));
            g.add_arc(u, v);
        }
        g
    }

    /// Creates a new graph from adjacency lists: the successors of node `x`
    /// are the elements of `lists[x]`, in the given order.
    ///
    /// # Panics
    /// If a successor is not a node of the graph.
    pub fn from_adjacency_lists(lists: Vec<Vec<usize>>) -> Self {
        let num_nodes = lists.len();
        let mut number_of_arcs = 0;
        for (node, succ) in lists.iter().enumerate() {
            if let Some(&bad) = succ.iter().find(|&&v| v >= num_nodes) {
                panic!(
                    "Successor {} of node {} does not exist (the graph has {} nodes)",
                    bad, node, num_nodes,
                );
            }
            number_of_arcs += succ.len() as u64;
        }
        Self {
            number_of_arcs,
            succ: lists,
        }
    }

    /// Returns the adjacency lists of the graph.
    pub fn adjacency_lists(&self) -> &[Vec<usize>] {
        &self.succ
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'a> = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.number_of_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl GraphSource for VecGraph {
    fn generate(&self) -> VecGraph {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arcs() {
        let g = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(g.outdegree(3), 0);
        assert!(g.has_arc(2, 0));
        assert!(!g.has_arc(0, 2));
    }

    #[test]
    fn test_insertion_order() {
        let g = VecGraph::from_adjacency_lists(vec![vec![2, 1], vec![], vec![0]]);
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(g.num_arcs(), 3);
    }

    #[test]
    #[should_panic]
    fn test_successor_out_of_range() {
        VecGraph::from_adjacency_lists(vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_add_node() {
        let mut g = VecGraph::empty(2);
        assert!(!g.add_node(1));
        assert!(g.add_node(4));
        assert_eq!(g.num_nodes(), 5);
        g.add_arc(4, 0);
        assert_eq!(g.adjacency_lists()[4], vec![0]);
    }
}
