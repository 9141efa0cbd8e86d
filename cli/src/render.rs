#![deny(missing_docs)]

//! # Terminal Rendering
//!
//! Plain-text views of the model and of execution outcomes. Markdown in
//! descriptions is printed as-is.

use explorer_core::client::MediaKind;
use explorer_core::oas::{example_request_body, to_pretty_json};
use explorer_core::{ApiModel, AppError, Endpoint, ExecutionResult, ResponseBody, StatusClass};
use std::fmt::{self, Write};

/// Runs a panel writer against a fresh buffer.
fn panel(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // A `String` sink never reports an error.
    let _ = write(&mut out);
    out
}

/// Header block plus every category with its endpoints.
pub fn model_overview(model: &ApiModel) -> String {
    panel(|out| write_overview(out, model))
}

fn write_overview(out: &mut String, model: &ApiModel) -> fmt::Result {
    writeln!(out, "{} v{}", model.title, model.version)?;
    if !model.description.is_empty() {
        writeln!(out, "{}", model.description)?;
    }
    if let Some(base) = &model.base_url {
        writeln!(out, "Base URL: {}", base)?;
    }
    writeln!(
        out,
        "{} endpoints in {} categories",
        model.endpoint_count(),
        model.categories.len()
    )?;

    for category in &model.categories {
        writeln!(
            out,
            "\n[{}] {} ({})",
            category.icon,
            category.name,
            category.endpoints.len()
        )?;
        if !category.description.is_empty() {
            writeln!(out, "  {}", category.description)?;
        }
        for endpoint in &category.endpoints {
            writeln!(out, "{}", endpoint_line(endpoint))?;
        }
    }
    Ok(())
}

/// One-line summary of an endpoint.
pub fn endpoint_line(endpoint: &Endpoint) -> String {
    let line = format!("  {:<7} {}", endpoint.method.as_str(), endpoint.path);
    if endpoint.summary.is_empty() {
        line
    } else {
        format!("{}  {}", line, endpoint.summary)
    }
}

/// Full detail card: parameters, body prefill and response examples.
pub fn endpoint_detail(model: &ApiModel, endpoint: &Endpoint) -> String {
    panel(|out| write_detail(out, model, endpoint))
}

fn write_detail(out: &mut String, model: &ApiModel, endpoint: &Endpoint) -> fmt::Result {
    writeln!(out, "{} {}", endpoint.method, endpoint.path)?;
    if !endpoint.summary.is_empty() {
        writeln!(out, "{}", endpoint.summary)?;
    }
    if !endpoint.description.is_empty() {
        writeln!(out, "\n{}", endpoint.description)?;
    }

    if !endpoint.parameters.is_empty() {
        writeln!(out, "\nParameters:")?;
        for param in &endpoint.parameters {
            let required = if param.required { " *required" } else { "" };
            write!(
                out,
                "  {} ({}, {}){}",
                param.name, param.location, param.ty, required
            )?;
            if !param.description.is_empty() {
                write!(out, " - {}", param.description)?;
            }
            if let Some(values) = &param.enum_values {
                let listed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(out, " [{}]", listed.join(", "))?;
            }
            out.push('\n');
        }
    }

    if endpoint.has_body() {
        let body = example_request_body(endpoint, &model.document);
        writeln!(out, "\nRequest body:\n{}", to_pretty_json(&body))?;
    }

    if !endpoint.responses.is_empty() {
        writeln!(out, "\nResponses:")?;
        for response in &endpoint.responses {
            writeln!(out, "  {} {}", response.status_code, response.description)?;
            for line in response.example_json.lines() {
                writeln!(out, "    {}", line)?;
            }
        }
    }
    Ok(())
}

fn class_label(class: StatusClass) -> &'static str {
    match class {
        StatusClass::Success => "success",
        StatusClass::Warning => "warning",
        StatusClass::Error => "error",
    }
}

fn media_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Audio => "audio",
        MediaKind::Video => "video",
    }
}

/// Response panel for a request that reached the server.
pub fn execution_result(result: &ExecutionResult, curl: &str) -> String {
    panel(|out| write_result(out, result, curl))
}

fn write_result(out: &mut String, result: &ExecutionResult, curl: &str) -> fmt::Result {
    writeln!(
        out,
        "Status: {} {} ({}) in {} ms",
        result.status,
        result.status_text,
        class_label(result.status_class()),
        result.duration_ms
    )?;
    writeln!(out, "\nHeaders:")?;
    for (name, value) in &result.headers {
        writeln!(out, "  {}: {}", name, value)?;
    }
    writeln!(out, "\nRequest:\n{}", curl)?;
    writeln!(out, "\nBody:")?;
    match &result.body {
        ResponseBody::Media { kind, data } => {
            writeln!(out, "[{} response, {} bytes]", media_label(*kind), data.len())
        }
        body => writeln!(out, "{}", body.as_display_text().unwrap_or_default()),
    }
}

/// Response panel for a failed execution.
pub fn execution_failure(err: &AppError, curl: Option<&str>) -> String {
    panel(|out| write_failure(out, err, curl))
}

fn write_failure(out: &mut String, err: &AppError, curl: Option<&str>) -> fmt::Result {
    writeln!(
        out,
        "Status: {} ({}) in {} ms",
        err.status(),
        class_label(StatusClass::Error),
        err.duration_ms()
    )?;
    if let Some(curl) = curl {
        writeln!(out, "\nRequest:\n{}", curl)?;
    }
    writeln!(out, "\nBody:\n{}", to_pretty_json(&err.error_body()))
}
