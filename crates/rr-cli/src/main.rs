//! Launcher transport endpoints and human CLI for Randroll.
//!
//! Invoked as `rr '<json>'` it is the argv-delivery plugin endpoint: one
//! encoded request in, one JSON document on stdout, always exit 0 so the
//! host never sees an abnormal termination. The subcommands add the
//! line-delimited variant (`serve`) and a human-facing roll (`roll`).

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rr",
    about = "Randroll — roll numbers, yes/no answers, and custom picks",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Encoded plugin request (argv delivery)
    request: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer plugin requests line by line from stdin
    Serve,

    /// Roll once from the command line
    Roll {
        /// Query words: empty, N, A B, or a list of labels
        query: Vec<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file of settings overrides
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve) => commands::serve::run(),
        Some(Commands::Roll {
            query,
            seed,
            settings,
        }) => commands::roll::run(&query, seed, settings.as_deref()),
        None => commands::handle::run(cli.request.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
