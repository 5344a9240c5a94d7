/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{pretty_print_elapsed, print_nodes, GraphArgs, WorkersArgs};
use crate::prelude::*;
use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};

pub const COMMAND_NAME: &str = "parallel";

#[derive(Args, Debug)]
#[command(about = "Partitioned breadth-first visit of a random graph, with results gathered at the root.", long_about = None)]
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

    let start = std::time::Instant::now();
    let visited = PartitionedBfs::new(&graph, args.workers.num_workers)
        .mode(args.workers.mode())
        .run_root(start_node)?;
    log::info!(
        "Partitioned visit from node {} with {} workers reached {} nodes out of {} in {}",
        start_node,
        args.workers.num_workers,
        visited.len(),
        graph.num_nodes(),
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    if args.graph.print {
        print_nodes(&visited)?;
    }
    Ok(())
}
