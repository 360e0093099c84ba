//! Rewrites ORM client enum imports to the constants module.
//!
//! ```text
//! fix-imports --root ./client --dry-run
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tea_inventory::tooling::import_fix::{
    rewrite_tree, RewriteOptions, DEFAULT_CLIENT_MODULE, DEFAULT_CONSTANTS_MODULE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Move enum imports from the ORM client to the constants module")]
struct Args {
    /// Directory to rewrite recursively
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Package the enumerations are imported from today
    #[arg(long, default_value = DEFAULT_CLIENT_MODULE)]
    client_module: String,

    /// Module the enumerations should be imported from
    #[arg(long, default_value = DEFAULT_CONSTANTS_MODULE)]
    constants_module: String,

    /// Report the files that would change without writing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = RewriteOptions {
        client_module: args.client_module,
        constants_module: args.constants_module,
        dry_run: args.dry_run,
        ..Default::default()
    };

    match rewrite_tree(&args.root, &options) {
        Ok(report) => {
            tracing::info!(
                scanned = report.scanned,
                rewritten = report.rewritten.len(),
                dry_run = options.dry_run,
                "finished rewriting imports"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
