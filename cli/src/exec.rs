#![deny(missing_docs)]

//! # Exec Command
//!
//! Sends a live request to an endpoint and prints the response panel.

use std::fs;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::render;
use crate::session::Session;
use explorer_core::oas::{example_request_body, to_pretty_json};
use explorer_core::{Endpoint, RequestInput, ResponseBody};

/// Arguments for the exec command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExecArgs {
    /// HTTP method, case-insensitive.
    pub method: String,

    /// Path template exactly as documented, e.g. `/users/{id}`.
    pub path: String,

    /// Parameter value as `name=value`. Repeatable.
    #[clap(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// JSON body, or `@file` to read it from a file.
    /// Defaults to the synthesized example when the endpoint takes a body.
    #[clap(long)]
    pub body: Option<String>,

    /// Write the response body to this file.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Print the curl command without sending anything.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the request.
pub async fn execute(args: &ExecArgs, session: &Session) -> CliResult<()> {
    let endpoint = session.endpoint(&args.method, &args.path)?;
    let base_url = session.base_url()?;
    let input = build_input(args, session, endpoint)?;

    let request = match session.executor.prepare(endpoint, base_url, &input) {
        Ok(request) => request,
        Err(e) => {
            print!("{}", render::execution_failure(&e, None));
            return Err(CliError::Reported);
        }
    };
    let curl = request.to_curl();
    if args.dry_run {
        println!("{}", curl);
        return Ok(());
    }

    let result = match session.executor.execute(&request).await {
        Ok(result) => result,
        Err(e) => {
            print!("{}", render::execution_failure(&e, Some(&curl)));
            return Err(CliError::Reported);
        }
    };
    print!("{}", render::execution_result(&result, &curl));

    if let Some(path) = &args.output {
        match &result.body {
            ResponseBody::Media { data, .. } => fs::write(path, data)?,
            body => fs::write(path, body.as_display_text().unwrap_or_default())?,
        }
        eprintln!("Saved response body to {:?}", path);
    }
    Ok(())
}

fn build_input(args: &ExecArgs, session: &Session, endpoint: &Endpoint) -> CliResult<RequestInput> {
    let mut input = RequestInput::new();
    for (name, value) in &args.params {
        input = input.value(name.as_str(), value.as_str());
    }

    let body = match args.body.as_deref() {
        Some(text) => match text.strip_prefix('@') {
            Some(file) => Some(fs::read_to_string(file)?),
            None => Some(text.to_string()),
        },
        None if endpoint.has_body() => Some(to_pretty_json(&example_request_body(
            endpoint,
            &session.model.document,
        ))),
        None => None,
    };
    if let Some(body) = body {
        input = input.body(body);
    }
    Ok(input)
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid NAME=VALUE: no `=` found in `{}`", s))
}
