//! # List Command

use crate::error::{CliError, CliResult};
use crate::render;
use crate::session::Session;
use explorer_core::ApiModel;

/// Arguments for the list command.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show this category.
    #[clap(long)]
    pub category: Option<String>,

    /// Print the transformed model as JSON.
    #[clap(long)]
    pub json: bool,
}

/// Prints the categorized endpoint list.
pub fn execute(args: &ListArgs, session: &Session) -> CliResult<()> {
    let model = filtered(&session.model, args.category.as_deref());
    if args.json {
        println!("{}", model_json(&model)?);
    } else {
        print!("{}", render::model_overview(&model));
    }
    Ok(())
}

fn filtered(model: &ApiModel, category: Option<&str>) -> ApiModel {
    let mut model = model.clone();
    if let Some(name) = category {
        model.categories.retain(|c| c.name == name);
    }
    model
}

fn model_json(model: &ApiModel) -> CliResult<String> {
    serde_json::to_string_pretty(model)
        .map_err(|e| CliError::General(format!("Failed to serialize model: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::{transform, Document};

    #[test]
    fn test_json_listing() {
        let yaml = r#"
swagger: "2.0"
tags: [{name: Tools}, {name: Music}]
paths:
  /qr:
    get: {tags: [Tools], summary: QR code}
"#;
        let model = transform(&Document::parse(yaml, None).unwrap());
        let text = model_json(&filtered(&model, Some("Tools"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["categories"].as_array().unwrap().len(), 1);
        let endpoint = &value["categories"][0]["endpoints"][0];
        assert_eq!(endpoint["method"], "GET");
        assert_eq!(endpoint["sourceVersion"], "2.0");
        assert!(value.get("document").is_none());
    }
}
