/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic traits to access graphs and to obtain them from a source.

*/

use crate::graphs::vec_graph::VecGraph;

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are dense identifiers in `[0..num_nodes)`, and every successor
/// returned by [`successors`](RandomAccessGraph::successors) must lie in the
/// same interval. Successors are returned in stored order, which need not be
/// sorted.
pub trait RandomAccessGraph {
    /// Iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize> + 'a
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of `node_id`.
    fn successors(&self, node_id: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node_id`.
    fn outdegree(&self, node_id: usize) -> usize {
        self.successors(node_id).into_iter().count()
    }

    /// Returns whether the arc `src_node_id -> dst_node_id` exists.
    fn has_arc(&self, src_node_id: usize, dst_node_id: usize) -> bool {
        self.successors(src_node_id)
            .into_iter()
            .any(|succ| succ == dst_node_id)
    }
}

impl<G: RandomAccessGraph> RandomAccessGraph for &G {
    type Successors<'a>
        = G::Successors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> Self::Successors<'_> {
        (**self).successors(node_id)
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        (**self).outdegree(node_id)
    }
}

/// A source of graphs.
///
/// The traversal code only needs a [`RandomAccessGraph`]; sources are the
/// way to materialize one, for example from a
/// [random model](crate::graphs::random::ErdosRenyi).
pub trait GraphSource {
    /// Materializes the graph.
    fn generate(&self) -> VecGraph;
}
