mod address;
mod commands;
mod dataset;
mod model;
mod reports;
mod util;

use crate::commands::{addresses, cities, majority_loss, minority_win, report};
use crate::reports::ReportResult;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full Markdown report: both tables and all figures.
    Report {
        /// Dataset file (TOML with [states] and [cities] tables)
        data: PathBuf,
    },
    /// List the largest metro areas with running population shares.
    Cities {
        /// Dataset file
        data: PathBuf,
    },
    /// The fewest states (and voters) that carry an elector majority.
    MinorityWin {
        /// Dataset file
        data: PathBuf,
        /// Emit the two summary figures as JSON instead of Markdown
        #[clap(long)]
        json: bool,
    },
    /// The vote composite for an elector win without a popular majority.
    MajorityLoss {
        /// Dataset file
        data: PathBuf,
        /// Emit the figure as JSON
        #[clap(long)]
        json: bool,
    },
    /// Print randomized pointer frames on an increasing interval.
    Addresses {
        /// Number of frames to print before tearing down
        #[clap(long, default_value_t = 4)]
        ticks: u32,
        /// Initial delay between frames; grows by 1.1x per tick
        #[clap(long, default_value_t = 1500)]
        interval_ms: u64,
    },
}

fn main() {
    let opts = Opts::parse();

    let result: ReportResult<()> = match opts.command {
        Command::Report { data } => report(&data),
        Command::Cities { data } => cities(&data),
        Command::MinorityWin { data, json } => minority_win(&data, json),
        Command::MajorityLoss { data, json } => majority_loss(&data, json),
        Command::Addresses { ticks, interval_ms } => {
            addresses(ticks, interval_ms);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "❌ Report failed:".bright_red(), e);
        std::process::exit(1);
    }
}
