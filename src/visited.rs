/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sets of visited nodes.

use core::fmt;
use sux::prelude::BitVec;

/// A set of nodes of a graph with `num_nodes` nodes.
///
/// Membership is stored in a bit vector with one bit per node, and the
/// cardinality is kept up to date on insertion, so [`len`](VisitedSet::len)
/// is constant time. Iteration returns nodes in increasing order.
#[derive(Clone)]
pub struct VisitedSet {
    bits: BitVec,
    num_nodes: usize,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty set for a graph with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            bits: BitVec::new(num_nodes),
            num_nodes,
            len: 0,
        }
    }

    /// Creates a set containing the given nodes.
    ///
    /// # Panics
    /// If a node is not smaller than `num_nodes`.
    pub fn from_nodes(num_nodes: usize, nodes: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(num_nodes);
        set.extend(nodes);
        set
    }

    /// Returns the number of nodes of the underlying graph.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of nodes in the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether `node` is in the set.
    #[inline(always)]
    pub fn contains(&self, node: usize) -> bool {
        self.bits[node]
    }

    /// Adds `node` to the set, returning whether it was not present.
    ///
    /// # Panics
    /// If `node` is not smaller than [`num_nodes`](VisitedSet::num_nodes).
    #[inline(always)]
    pub fn insert(&mut self, node: usize) -> bool {
        if self.bits[node] {
            return false;
        }
        self.bits.set(node, true);
        self.len += 1;
        true
    }

    /// Adds all nodes of `other` to this set.
    ///
    /// # Panics
    /// If the two sets refer to graphs with a different number of nodes.
    pub fn union_with(&mut self, other: &VisitedSet) {
        assert_eq!(
            self.num_nodes(),
            other.num_nodes(),
            "Cannot merge sets over {} and {} nodes",
            self.num_nodes(),
            other.num_nodes()
        );
        for node in other.iter() {
            self.insert(node);
        }
    }

    /// Returns an iterator over the nodes in the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes()).filter(move |&node| self.bits[node])
    }

    /// Returns the nodes in the set, in increasing order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Removes all nodes from the set.
    pub fn clear(&mut self) {
        for node in 0..self.num_nodes {
            self.bits.set(node, false);
        }
        self.len = 0;
    }
}

impl Extend<usize> for VisitedSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl PartialEq for VisitedSet {
    fn eq(&self, other: &Self) -> bool {
        self.num_nodes() == other.num_nodes()
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl Eq for VisitedSet {}

impl fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut set = VisitedSet::new(10);
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(9));
        assert_eq!(set.len(), 2);
        assert!(set.contains(9));
        assert!(!set.contains(0));
        assert_eq!(set.to_vec(), vec![3, 9]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(3));
    }

    #[test]
    fn test_union() {
        let mut a = VisitedSet::from_nodes(8, [0, 2, 4]);
        let b = VisitedSet::from_nodes(8, [4, 5, 7]);
        a.union_with(&b);
        assert_eq!(a.to_vec(), vec![0, 2, 4, 5, 7]);
        assert_eq!(a.len(), 5);
        assert_eq!(a, VisitedSet::from_nodes(8, [7, 5, 4, 2, 0]));
    }

    #[test]
    #[should_panic]
    fn test_union_mismatch() {
        let mut a = VisitedSet::new(4);
        a.union_with(&VisitedSet::new(5));
    }

    #[test]
    fn test_debug() {
        let set = VisitedSet::from_nodes(5, [1, 3]);
        assert_eq!(format!("{:?}", set), "{1, 3}");
    }
}
