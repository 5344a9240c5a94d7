/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod bfs;
#[cfg(feature = "cli")]
pub mod cli;
pub mod comm;
pub mod coordinator;
pub mod errors;
pub mod explore;
pub mod graphs;
pub mod partition;
pub mod traits;
pub mod visited;
pub mod worker;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::bfs::*;
    pub use crate::comm::{Communicator, GatherError};
    pub use crate::coordinator::{merge, Coordinator};
    pub use crate::errors::ConfigError;
    pub use crate::explore::{ExplorationMode, LocalExplorer};
    pub use crate::graphs::prelude::*;
    pub use crate::partition::{subgraph_range, Partitioner, WorkerId};
    pub use crate::traits::*;
    pub use crate::visited::VisitedSet;
    pub use crate::worker::{Worker, WorkerState};
}
