//! # Search Command

use crate::error::CliResult;
use crate::render;
use crate::session::Session;
use explorer_core::oas::search::MIN_SEARCH_LEN;

/// Arguments for the search command.
#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text matched against paths, summaries, descriptions and parameters.
    pub term: String,
}

/// Prints endpoints matching the term.
///
/// Terms below the minimum length fall back to the full list.
pub fn execute(args: &SearchArgs, session: &Session) -> CliResult<()> {
    let Some(found) = session.model.search(&args.term) else {
        eprintln!(
            "Search terms need at least {} characters; showing everything.",
            MIN_SEARCH_LEN
        );
        print!("{}", render::model_overview(&session.model));
        return Ok(());
    };

    if found.is_empty() {
        println!("No endpoints match \"{}\".", args.term.trim());
        return Ok(());
    }
    println!("{} matching endpoints:", found.len());
    for endpoint in found {
        println!("{}", render::endpoint_line(endpoint));
    }
    Ok(())
}
