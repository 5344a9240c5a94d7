/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Aggregation of local visited sets at the root.

use crate::comm::{Communicator, GatherError};
use crate::partition::WorkerId;
use crate::visited::VisitedSet;

/// Folds a sequence of visited sets into their union.
///
/// The result does not depend on the order of the sets.
pub fn merge(num_nodes: usize, sets: impl IntoIterator<Item = VisitedSet>) -> VisitedSet {
    sets.into_iter()
        .fold(VisitedSet::new(num_nodes), |mut global, local| {
            global.union_with(&local);
            global
        })
}

/// The aggregation step of a worker.
///
/// Each worker owns a coordinator wrapping its endpoint of the group.
/// [`aggregate`](Coordinator::aggregate) gathers the local sets of all
/// workers at the root, which returns their union; all other workers
/// return an empty set.
pub struct Coordinator {
    comm: Communicator<VisitedSet>,
    num_nodes: usize,
}

impl Coordinator {
    /// Creates a coordinator for sets over `num_nodes` nodes.
    pub fn new(comm: Communicator<VisitedSet>, num_nodes: usize) -> Self {
        Self { comm, num_nodes }
    }

    pub fn id(&self) -> WorkerId {
        self.comm.id()
    }

    /// Contributes `local` and returns the global set at the root, or an
    /// empty set elsewhere.
    ///
    /// Blocks until all workers of the group have called this method.
    pub fn aggregate(self, local: VisitedSet) -> Result<VisitedSet, GatherError> {
        debug_assert_eq!(local.num_nodes(), self.num_nodes);
        match self.comm.gather(local)? {
            Some(all_visited) => Ok(merge(self.num_nodes, all_visited)),
            None => Ok(VisitedSet::new(self.num_nodes)),
        }
    }
}
