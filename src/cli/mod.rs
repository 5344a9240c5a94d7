/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each command is implemented as a submodule.

use crate::errors::ConfigError;
use crate::graphs::prelude::*;
use crate::traits::*;
use crate::visited::VisitedSet;
use anyhow::{anyhow, bail, Result};
use clap::{Arg, ArgMatches, Args, Command};
use dsi_progress_logger::prelude::*;
use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
use jiff::SpanRound;
use rand::Rng;
use std::io::{BufWriter, Write};
use std::time::Duration;
use std::time::SystemTime;

pub mod compare;
pub mod parallel;
pub mod serial;

/// Shared CLI arguments describing the random graph and the start node.
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[arg(short = 'n', long, default_value_t = 10_000)]
    /// The number of nodes of the random graph.
    pub num_nodes: usize,

    #[arg(short = 'd', long, default_value_t = 100.0)]
    /// The expected degree of a node; the edge probability is the expected
    /// degree divided by the number of nodes minus one.
    pub avg_degree: f64,

    #[arg(long)]
    /// The seed of the random graph (random if not specified).
    pub seed: Option<u64>,

    #[arg(short = 's', long)]
    /// The start node of the visit (random if not specified).
    pub start_node: Option<usize>,

    #[arg(short = 'p', long)]
    /// Print the visited nodes on standard output, one per line.
    pub print: bool,
}

impl GraphArgs {
    /// Generates the Erdös-Rényi graph described by the arguments.
    pub fn generate(&self) -> Result<VecGraph> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let source = ErdosRenyi::with_avg_degree(self.num_nodes, self.avg_degree, seed)?;
        log::info!(
            "Generating an Erdös-Rényi graph with {} nodes, p = {} and seed {}",
            self.num_nodes,
            source.p(),
            seed
        );
        let start = std::time::Instant::now();
        let graph = source.generate();
        log::info!(
            "Generated {} arcs in {}",
            graph.num_arcs(),
            pretty_print_elapsed(start.elapsed().as_secs_f64())
        );
        Ok(graph)
    }

    /// Returns the start node, choosing one at random if it was not
    /// specified.
    pub fn start_node(&self, num_nodes: usize) -> Result<usize, ConfigError> {
        match self.start_node {
            Some(node) if node < num_nodes => Ok(node),
            Some(node) => Err(ConfigError::StartNodeOutOfRange { node, num_nodes }),
            None if num_nodes == 0 => Err(ConfigError::StartNodeOutOfRange {
                node: 0,
                num_nodes,
            }),
            None => Ok(rand::rng().random_range(0..num_nodes)),
        }
    }
}

/// Shared CLI arguments for commands running a partitioned visit.
#[derive(Args, Debug)]
pub struct WorkersArgs {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1))]
    /// The number of workers (each one runs on its own thread).
    pub num_workers: usize,

    #[arg(long)]
    /// Repeat the local exploration of each worker until nothing changes,
    /// instead of performing a single pass.
    pub fixed_point: bool,
}

impl WorkersArgs {
    pub fn mode(&self) -> crate::explore::ExplorationMode {
        if self.fixed_point {
            crate::explore::ExplorationMode::FixedPoint
        } else {
            crate::explore::ExplorationMode::SinglePass
        }
    }
}

/// Creates a progress logger honoring the global `log-interval` option.
pub fn progress_logger(matches: &ArgMatches) -> ProgressLogger {
    let mut pl = ProgressLogger::default();
    pl.display_memory(true).local_speed(true);
    if let Some(duration) = matches.get_one::<Duration>("log-interval") {
        pl.log_interval(*duration);
    }
    pl
}

/// Prints the nodes of `visited` on standard output, one per line.
pub fn print_nodes(visited: &VisitedSet) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for node in visited.iter() {
        writeln!(out, "{}", node)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse a duration from a string.
/// For compatibility with Java, if no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Installs an [`env_logger`] printing timestamps and elapsed time.
pub fn init_envlogger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();

    let command = Command::new("partbfs")
        .about("Compares sequential and partitioned breadth-first reachability on random graphs.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-interval")
                .short('l')
                .long("log-interval")
                .value_parser(parse_duration)
                .help(
                    "How often to log progress. Default is 10s. You can use the suffixes `s` for seconds, `m` for minutes, `h` for hours, and `d` for days. If no suffix is provided it is assumed to be in milliseconds.")
                .global(true),
        )
        .after_help(
            "Environment (noteworthy environment variables used):
RUST_LOG: configuration for env_logger, pass `info` to see run summaries,
  `debug` to see the state transitions of each worker, and `trace` to see all
  the details. You can also use `RUST_LOG=partbfs=debug` to see only the
  partbfs logs.
",
        );

    macro_rules! impl_dispatch {
        ($command:expr, $($module:ident),*) => {{
            let command = $command;
            $(
                let command = $module::cli(command);
            )*
            let command = command.display_order(0); // sort args alphabetically
            let matches = command.get_matches_from(args);

            match matches.subcommand() {
                $(
                    Some(($module::COMMAND_NAME, sub_m)) => $module::main(sub_m),
                )*
                Some((command_name, _)) => bail!("Unknown command: {:?}", command_name),
                None => bail!("No command specified"),
            }
        }};
    }

    impl_dispatch!(command, compare, parallel, serial)?;

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty prints seconds in a humanly readable format.
pub fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}
