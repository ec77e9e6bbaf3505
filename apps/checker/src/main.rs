// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! topo-check: command-line checks for topology exercises.
//!
//! Usage:
//!   topo-check space <space.json> [--strict] [--subset <json array>]... [--json]
//!   topo-check affine <slope> <intercept> [--x0 <value>] [--json]
//!   topo-check distance <json array> <json array> [--metric <json>]
//!
//! Environment:
//!   RUST_LOG           log filter (default `info`)
//!   TOPO_CHECK_STRICT  also require union closure when validating spaces
//!   TOPO_CHECK_CONFIG  JSON file with analysis tolerances

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context};
use topo_explorer_analysis::MetricKind;

mod commands;
mod config;

use config::Config;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args[1], &args[2..], Config::from_env()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs one subcommand. `Ok(false)` means the check itself failed.
fn run(command: &str, args: &[String], config: Config) -> anyhow::Result<bool> {
    tracing::debug!(?config, command, "starting");
    match command {
        "space" => run_space(args, config),
        "affine" => run_affine(args, config),
        "distance" => run_distance(args),
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn run_space(args: &[String], config: Config) -> anyhow::Result<bool> {
    let Some(path) = args.first() else {
        bail!("space: missing <space.json>");
    };

    let mut strict = config.strict;
    let mut subsets = Vec::new();
    let mut as_json = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strict" => strict = true,
            "--json" => as_json = true,
            "--subset" => {
                i += 1;
                subsets.push(option_value(args, i, "--subset")?.to_string());
            }
            other => bail!("space: unknown option {other}"),
        }
        i += 1;
    }

    let json = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let report = commands::check_space(&json, strict, &subsets)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(report.valid)
}

fn run_affine(args: &[String], config: Config) -> anyhow::Result<bool> {
    let [slope, intercept, ..] = args else {
        bail!("affine: expected <slope> <intercept>");
    };
    let slope: f64 = slope
        .parse()
        .with_context(|| format!("invalid slope {slope}"))?;
    let intercept: f64 = intercept
        .parse()
        .with_context(|| format!("invalid intercept {intercept}"))?;

    let mut x0 = 0.0;
    let mut as_json = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => as_json = true,
            "--x0" => {
                i += 1;
                let raw = option_value(args, i, "--x0")?;
                x0 = raw.parse().with_context(|| format!("invalid --x0 {raw}"))?;
            }
            other => bail!("affine: unknown option {other}"),
        }
        i += 1;
    }

    let report = commands::check_affine(slope, intercept, x0, config.analysis()?)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(report.fixed_point.is_some())
}

fn run_distance(args: &[String]) -> anyhow::Result<bool> {
    let [a, b, rest @ ..] = args else {
        bail!("distance: expected two vectors");
    };
    let metric = match rest {
        [] => MetricKind::Euclidean,
        [flag, raw] if flag == "--metric" => {
            serde_json::from_str(raw).with_context(|| format!("invalid metric {raw}"))?
        }
        _ => bail!("distance: expected at most --metric <json>"),
    };

    let d = commands::distance(a, b, metric)?;
    println!("{metric}: {d}");
    Ok(true)
}

fn option_value<'a>(args: &'a [String], i: usize, name: &str) -> anyhow::Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .with_context(|| format!("{name} needs a value"))
}

fn print_usage() {
    eprintln!(
        "Usage:
  topo-check space <space.json> [--strict] [--subset <json array>]... [--json]
  topo-check affine <slope> <intercept> [--x0 <value>] [--json]
  topo-check distance <json array> <json array> [--metric <json>]

Environment:
  RUST_LOG           log filter (default info)
  TOPO_CHECK_STRICT  also require union closure when validating spaces
  TOPO_CHECK_CONFIG  JSON file with analysis tolerances"
    );
}
