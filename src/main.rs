/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use anyhow::Result;
use partbfs::cli::{init_envlogger, main as cli_main};

pub fn main() -> Result<()> {
    init_envlogger()?;

    // Call the main function of the CLI with cli args
    cli_main(std::env::args_os())
}
