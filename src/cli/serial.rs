/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{print_nodes, progress_logger, pretty_print_elapsed, GraphArgs};
use crate::prelude::*;
use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};

pub const COMMAND_NAME: &str = "serial";

#[derive(Args, Debug)]
#[command(about = "Sequential breadth-first visit of a random graph.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,
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
    let visited = serial_bfs(&graph, start_node, &mut pl);
    log::info!(
        "Serial visit from node {} reached {} nodes out of {} in {}",
        start_node,
        visited.len(),
        graph.num_nodes(),
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    if args.graph.print {
        print_nodes(&visited)?;
    }
    Ok(())
}
