/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors raised when validating the parameters of a run.

use thiserror::Error;

/// Invalid parameters, detected before any worker is launched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A run needs at least one worker.
    #[error("The number of workers must be at least one")]
    NoWorkers,

    /// The start node is not a node of the graph.
    #[error("Start node {node} is out of range (the graph has {num_nodes} nodes)")]
    StartNodeOutOfRange { node: usize, num_nodes: usize },

    /// The average degree cannot be turned into an arc probability.
    #[error("Average degree {avg_degree} is not valid for a graph with {num_nodes} nodes")]
    InvalidAvgDegree { avg_degree: f64, num_nodes: usize },
}
