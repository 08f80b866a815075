//! schema - show one tool's parameter schema

use std::io::Write;

use crate::error::{InspectError, Result};
use crate::inspector::Inspector;
use crate::render;
use crate::transport::InspectorTransport;

use super::OutputFormat;

/// Options for the schema command
#[derive(Debug, Clone, Default)]
pub struct SchemaArgs {
    pub tool: String,
    pub format: OutputFormat,
    /// Include enum values, defaults and range constraints
    pub verbose: bool,
}

/// Handle `schema`: fetch server info, find the tool, render its schema
pub async fn handle_schema<T, W, E>(
    inspector: &Inspector<T>,
    args: &SchemaArgs,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    T: InspectorTransport,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    writeln!(err, "Querying MCP server for tool schemas...")?;
    let catalog = inspector.server_info().await?;

    let tool = catalog
        .get(&args.tool)
        .ok_or_else(|| InspectError::SchemaNotFound(args.tool.clone()))?;

    let rendered = match args.format {
        OutputFormat::Json => render::pretty_json(tool)?,
        OutputFormat::Text => render::schema_text(tool, args.verbose),
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::{Value, json};

    fn server_info() -> Value {
        json!({
            "capabilities": {
                "tools": [{
                    "name": "build_sim",
                    "description": "Builds an app for a simulator",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "scheme": {"type": "string"},
                            "simulatorName": {"type": "string"}
                        },
                        "required": ["scheme"]
                    }
                }]
            }
        })
    }

    async fn run(args: &SchemaArgs) -> (Result<()>, String, String) {
        let inspector = Inspector::new(MockTransport::new().with_response(server_info()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_schema(&inspector, args, &mut out, &mut err).await;
        (result, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[tokio::test]
    async fn test_schema_text() {
        let args = SchemaArgs {
            tool: "build_sim".to_string(),
            ..Default::default()
        };
        let (result, out, err) = run(&args).await;

        result.unwrap();
        assert!(err.contains("Querying MCP server"));
        let scheme = out.find("scheme  * REQUIRED").unwrap();
        let sim = out.find("simulatorName    (optional)").unwrap();
        assert!(scheme < sim);
    }

    #[tokio::test]
    async fn test_schema_json_is_descriptor() {
        let args = SchemaArgs {
            tool: "build_sim".to_string(),
            format: OutputFormat::Json,
            verbose: false,
        };
        let (result, out, _) = run(&args).await;

        assert!(result.is_ok());
        let printed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(printed, server_info()["capabilities"]["tools"][0]);
    }

    #[tokio::test]
    async fn test_schema_not_found() {
        let args = SchemaArgs {
            tool: "build".to_string(),
            ..Default::default()
        };
        let (result, out, _) = run(&args).await;

        assert!(matches!(result, Err(InspectError::SchemaNotFound(ref n)) if n == "build"));
        assert!(out.is_empty());
    }
}
