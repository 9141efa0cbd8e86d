#![deny(missing_docs)]

//! # Session
//!
//! Global arguments and the loaded model shared by every command.

use crate::error::{CliError, CliResult};
use explorer_core::oas::DEFAULT_DOCUMENT_PATH;
use explorer_core::{load_document, transform, ApiModel, Endpoint, Executor, ExecutorConfig, HttpMethod};
use std::time::Duration;
use tracing::debug;

/// Arguments shared by all commands.
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path or URL of the OpenAPI / Swagger document.
    /// Defaults to `{base-url}/api/openapi.json`.
    #[clap(long, env = "EXPLORER_SPEC", global = true)]
    pub spec: Option<String>,

    /// Server base URL. Overrides the one declared by the document.
    #[clap(long, env = "EXPLORER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging.
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

/// A loaded document together with the executor used to reach its server.
pub struct Session {
    /// The transformed model.
    pub model: ApiModel,
    /// Executor for live requests.
    pub executor: Executor,
    base_url: Option<String>,
}

impl Session {
    /// Loads and transforms the document named by the global arguments.
    pub async fn open(args: &GlobalArgs) -> CliResult<Self> {
        let mut config = ExecutorConfig::builder();
        if let Some(secs) = args.timeout {
            config = config.timeout(Duration::from_secs(secs));
        }
        let executor = Executor::new(config.build())?;

        let source = document_source(args)?;
        debug!(source = %source, "Opening document");
        let document = load_document(&source, executor.transport().client()).await?;
        let model = transform(&document);

        let base_url = args.base_url.clone().or_else(|| model.base_url.clone());
        Ok(Self {
            model,
            executor,
            base_url,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> CliResult<&str> {
        self.base_url.as_deref().ok_or_else(|| {
            CliError::General(
                "The document declares no server; pass --base-url".to_string(),
            )
        })
    }

    /// Looks up an endpoint from command-line method and path.
    pub fn endpoint(&self, method: &str, path: &str) -> CliResult<&Endpoint> {
        let parsed = HttpMethod::parse(method)
            .ok_or_else(|| CliError::General(format!("Unknown HTTP method: {}", method)))?;
        self.model.find_endpoint(parsed, path).ok_or_else(|| {
            CliError::General(format!("No endpoint {} {}", parsed, path))
        })
    }
}

fn document_source(args: &GlobalArgs) -> CliResult<String> {
    match (&args.spec, &args.base_url) {
        (Some(spec), _) => Ok(spec.clone()),
        (None, Some(base)) => Ok(format!(
            "{}{}",
            base.trim_end_matches('/'),
            DEFAULT_DOCUMENT_PATH
        )),
        (None, None) => Err(CliError::General(
            "No document given; pass --spec or --base-url".to_string(),
        )),
    }
}
