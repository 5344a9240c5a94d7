/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first reachability.
//!
//! [`serial_bfs`] is a sequential visit computing exactly the nodes
//! reachable from a start node; [`PartitionedBfs`] splits the work among a
//! fixed number of workers and gathers their partial results.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
