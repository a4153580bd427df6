use std::process::ExitCode;

use clap::Parser;
use colored::*;

mod error;
mod fs;
mod remove;

use error::{RemoveError, EXIT_FAILURE, EXIT_NOT_FOUND};

/// Remove the .htaccess file at the root of a deployed site.
///
/// Dev checkouts keep a .htaccess in the repo, but on live servers the
/// rewrite rules are owned by the Apache configs, so the deploy process
/// calls this after pulling to delete the unneeded file.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Directory containing the .htaccess file (the site root)
    path: String,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(&args) {
        Ok(()) => {
            println!("{}", ".htaccess deleted".green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<RemoveError>() {
                Some(RemoveError::NotFound { .. }) => println!("{}", err),
                None => eprintln!("{} {:#}", "Error:".red(), err),
            }
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let site_root = fs::expand_home(&args.path)?;
    let filepath = fs::htaccess_path(&site_root);
    remove::remove_htaccess(&filepath)
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RemoveError>() {
        Some(RemoveError::NotFound { .. }) => EXIT_NOT_FOUND,
        None => EXIT_FAILURE,
    }
}
