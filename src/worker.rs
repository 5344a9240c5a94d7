/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The life cycle of a single worker of a partitioned visit.

use crate::comm::{Communicator, GatherError};
use crate::coordinator::Coordinator;
use crate::explore::{ExplorationMode, LocalExplorer};
use crate::partition::{Partitioner, WorkerId};
use crate::traits::RandomAccessGraph;
use crate::visited::VisitedSet;

/// The states of a worker.
///
/// A worker moves through the states in order, exactly once:
/// `Init → LocalExplore → Aggregate → Done`. The transition out of
/// [`Aggregate`](WorkerState::Aggregate) happens only after all workers of
/// the group have entered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerState {
    Init,
    LocalExplore,
    Aggregate,
    Done,
}

impl WorkerState {
    /// Returns the state following this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            WorkerState::Init => Some(WorkerState::LocalExplore),
            WorkerState::LocalExplore => Some(WorkerState::Aggregate),
            WorkerState::Aggregate => Some(WorkerState::Done),
            WorkerState::Done => None,
        }
    }
}

/// A worker exploring its slice of the graph and taking part in the
/// aggregation.
pub struct Worker<G: RandomAccessGraph> {
    id: WorkerId,
    state: WorkerState,
    explorer: LocalExplorer<G>,
    coordinator: Coordinator,
}

impl<G: RandomAccessGraph> Worker<G> {
    /// Creates a worker owning the slice assigned by `partitioner` to the
    /// rank of `comm`.
    pub fn new(
        graph: G,
        partitioner: &Partitioner,
        comm: Communicator<VisitedSet>,
        mode: ExplorationMode,
    ) -> Self {
        let id = comm.id();
        let num_nodes = graph.num_nodes();
        let explorer = LocalExplorer::new(graph, partitioner.range_of(id)).mode(mode);
        Self {
            id,
            state: WorkerState::Init,
            explorer,
            coordinator: Coordinator::new(comm, num_nodes),
        }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Runs the worker to completion: explores its slice, then takes part in
    /// the aggregation.
    ///
    /// Returns the global visited set at the root and an empty set elsewhere.
    pub fn run(self, start_node: usize) -> Result<VisitedSet, GatherError> {
        let Self {
            id,
            mut state,
            explorer,
            coordinator,
        } = self;

        advance(id, &mut state);
        let local = explorer.explore(start_node);
        log::debug!(
            "Worker {} visited {} nodes in slice {:?}",
            id.rank,
            local.len(),
            explorer.range()
        );

        advance(id, &mut state);
        let result = coordinator.aggregate(local)?;

        advance(id, &mut state);
        Ok(result)
    }
}

fn advance(id: WorkerId, state: &mut WorkerState) {
    let next = state.next();
    debug_assert!(next.is_some(), "Worker {} is already done", id.rank);
    if let Some(next) = next {
        log::debug!("Worker {}/{}: {:?} -> {:?}", id.rank, id.size, state, next);
        *state = next;
    }
}
