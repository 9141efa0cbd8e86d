#![deny(missing_docs)]

//! # API Explorer CLI
//!
//! Terminal front end for browsing and exercising OpenAPI / Swagger documents.
//!
//! Supported Commands:
//! - `list`: Categories and their endpoints.
//! - `search`: Free-text endpoint search.
//! - `show`: Parameters, body prefill and response examples of one endpoint.
//! - `exec`: Sends a live request and prints the response.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::error::{CliError, CliResult};
use crate::session::{GlobalArgs, Session};

mod error;
mod exec;
mod list;
mod logging;
mod render;
mod search;
mod session;
mod show;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI / Swagger explorer")]
struct Cli {
    #[clap(flatten)]
    global: GlobalArgs,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List categories and endpoints.
    List(list::ListArgs),
    /// Search endpoints.
    Search(search::SearchArgs),
    /// Show one endpoint in detail.
    Show(show::ShowArgs),
    /// Execute a request against the live server.
    Exec(exec::ExecArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    exit_code(run(&cli).await)
}

async fn run(cli: &Cli) -> CliResult<()> {
    logging::init_logger(cli.global.verbose)?;

    let session = Session::open(&cli.global).await?;

    match &cli.command {
        Commands::List(args) => list::execute(args, &session)?,
        Commands::Search(args) => search::execute(args, &session)?,
        Commands::Show(args) => show::execute(args, &session)?,
        Commands::Exec(args) => exec::execute(args, &session).await?,
    }

    Ok(())
}

/// Maps the outcome to the process status, printing errors not yet shown.
fn exit_code(result: CliResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(message) = error_message(&e) {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn error_message(err: &CliError) -> Option<String> {
    match err {
        CliError::Reported => None,
        other => Some(format!("Error: {}", other)),
    }
}
