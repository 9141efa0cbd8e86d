//! # Show Command

use crate::error::CliResult;
use crate::render;
use crate::session::Session;

/// Arguments for the show command.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// HTTP method, case-insensitive.
    pub method: String,
    /// Path template exactly as documented, e.g. `/users/{id}`.
    pub path: String,
}

/// Prints an endpoint's detail card.
pub fn execute(args: &ShowArgs, session: &Session) -> CliResult<()> {
    let endpoint = session.endpoint(&args.method, &args.path)?;
    print!("{}", render::endpoint_detail(&session.model, endpoint));
    Ok(())
}
