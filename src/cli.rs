// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use cu::pre::*;

use crate::{CommentStyle, Config, License, LicenseKind, Mode, StyleRegistry};

/// Apply and detect the absence of license headers in your repository
#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct Cli {
    /// Recurse from the passed directory
    #[clap(short, long, global = true)]
    pub recurse: bool,
    /// License type, Apache20 or MIT is supported
    #[clap(short, long, global = true, default_value = "Apache20")]
    pub license: String,
    /// Copyright owner to put in the license header
    #[clap(short, long, global = true, default_value = "")]
    pub owner: String,
    /// Copyright year to put in the license header [default: current year]
    #[clap(long, global = true)]
    pub year: Option<i32>,
    #[clap(short, long, global = true, value_delimiter = ',', help = style_help())]
    pub style: Vec<String>,

    #[clap(flatten)]
    pub common: cu::cli::Flags,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, clap::Subcommand)]
pub enum Command {
    /// Report files that are missing a license header
    Check {
        /// File, or directory with --recurse
        path: String,
    },
    /// Add the license header to files that are missing one
    Apply {
        /// File, or directory with --recurse
        path: String,
    },
    /// List the comment style for each known file extension
    Styles,
}

impl Command {
    /// The processing mode, `None` if the command does not process files
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Self::Check { .. } => Some(Mode::Check),
            Self::Apply { .. } => Some(Mode::Apply),
            Self::Styles => None,
        }
    }
}

fn style_help() -> String {
    format!(
        "Comment style override as <extension>:<style>, available styles are {}",
        CommentStyle::all_names()
    )
}

/// Convert the CLI args into configuration object
pub fn config_from_cli(args: &mut Cli) -> cu::Result<Config> {
    let kind = LicenseKind::from_name(&args.license)?;
    let styles = StyleRegistry::with_overrides(&args.style)?;
    let path = match &mut args.command {
        Command::Check { path } | Command::Apply { path } => std::mem::take(path),
        Command::Styles => String::new(),
    };
    let year = args.year.unwrap_or_else(crate::current_year);
    let mut license = License::new(kind, year, "");
    if !args.owner.is_empty() {
        license.set_owner(std::mem::take(&mut args.owner));
    }
    Ok(Config::new(license, path, args.recurse, styles))
}
