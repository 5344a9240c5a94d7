/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{pretty_print_elapsed, progress_logger, GraphArgs, WorkersArgs};
use crate::prelude::*;
use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};

pub const COMMAND_NAME: &str = "compare";

#[derive(Args, Debug)]
#[command(about = "Runs a sequential and a partitioned visit on the same random graph and compares them.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,

    #[clap(flatten)]
    pub workers: WorkersArgs,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;
    let graph = args.graph.generate()?;
    let start_node = args.graph.start_node(graph.num_nodes())?;

    let mut pl = progress_logger(submatches);
    let start = std::time::Instant::now();
    let serial = serial_bfs(&graph, start_node, &mut pl);
    let serial_elapsed = start.elapsed();

    let start = std::time::Instant::now();
    let partitioned = PartitionedBfs::new(&graph, args.workers.num_workers)
        .mode(args.workers.mode())
        .run_root(start_node)?;
    let partitioned_elapsed = start.elapsed();

    let stats = Comparison::new(&serial, &partitioned);

    log::info!(
        "Serial: {} nodes in {}",
        serial.len(),
        pretty_print_elapsed(serial_elapsed.as_secs_f64())
    );
    log::info!(
        "Partitioned ({} workers): {} nodes in {}",
        args.workers.num_workers,
        partitioned.len(),
        pretty_print_elapsed(partitioned_elapsed.as_secs_f64())
    );
    log::info!(
        "{} reachable nodes missed by the partitioned visit, {} visited nodes not reachable",
        stats.missed,
        stats.spurious
    );

    if args.graph.print {
        println!("missed\t{}", stats.missed);
        println!("spurious\t{}", stats.spurious);
        println!("serial_secs\t{}", serial_elapsed.as_secs_f64());
        println!("partitioned_secs\t{}", partitioned_elapsed.as_secs_f64());
    }
    Ok(())
}

/// Differences between the result of a sequential visit and that of a
/// partitioned visit from the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Nodes found by the sequential visit but not by the partitioned one.
    pub missed: usize,
    /// Nodes found by the partitioned visit but not by the sequential one.
    pub spurious: usize,
}

impl Comparison {
    pub fn new(serial: &VisitedSet, partitioned: &VisitedSet) -> Self {
        Self {
            missed: serial.iter().filter(|&x| !partitioned.contains(x)).count(),
            spurious: partitioned.iter().filter(|&x| !serial.contains(x)).count(),
        }
    }
}
