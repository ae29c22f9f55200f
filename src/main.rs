// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use licenser::{Cli, Mode, config_from_cli, run};

#[cu::cli(flags = "common")]
fn main(mut args: Cli) -> cu::Result<()> {
    let config = config_from_cli(&mut args)?;
    let Some(mode) = args.command.mode() else {
        print!("{}", config.styles.all_styles());
        return Ok(());
    };

    let report = run(&config, mode)?;
    if !report.is_success() {
        match mode {
            Mode::Check => cu::bailfyi!("license check unsuccessful."),
            Mode::Apply => cu::bailfyi!("some files could not be updated."),
        }
    }

    Ok(())
}
