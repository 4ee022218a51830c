// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! questcheck CLI entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use questcheck::checks;
use questcheck::cli::{Cli, Selector};
use questcheck::color::resolve_color;
use questcheck::error::{Error, ExitCode};
use questcheck::output::TextFormatter;
use questcheck::runner::CheckRunner;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("QUESTCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("questcheck: {}", e);
            match e.downcast_ref::<Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let root = resolve_root(&cli)?;
    tracing::debug!("grading quest at {}", root.display());

    let checks = match cli.selector {
        Selector::All => checks::all_checks(),
        Selector::One(n) => {
            let check = checks::by_ordinal(n)
                .ok_or_else(|| Error::Argument(format!("no check with ordinal {n}")))?;
            vec![check]
        }
    };

    let mut formatter = TextFormatter::new(resolve_color());
    let summary = CheckRunner::new(&root).run(checks, &mut formatter)?;

    if cli.selector == Selector::All {
        formatter.write_summary(&summary)?;
    }

    Ok(if summary.all_passed() {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}

/// Resolve the quest directory: `--dir` if given, else the process cwd.
fn resolve_root(cli: &Cli) -> Result<PathBuf, Error> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| Error::io(".", e))?,
    };
    if !dir.is_dir() {
        return Err(Error::Argument(format!(
            "{}: not a directory",
            dir.display()
        )));
    }
    dir.canonicalize().map_err(|e| Error::io(&dir, e))
}
