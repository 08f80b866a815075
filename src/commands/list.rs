//! list - show the tool catalog

use std::io::Write;

use log::info;

use crate::error::{InspectError, Result};
use crate::inspector::Inspector;
use crate::render;
use crate::transport::InspectorTransport;

use super::OutputFormat;

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Keep only tools whose name contains this, ignoring case
    pub category: Option<String>,
    pub format: OutputFormat,
    /// Flat alphabetical list instead of workflow groups
    pub no_categorize: bool,
}

/// Handle `list`: fetch the catalog, filter, then group or flatten it
pub async fn handle_list<T, W, E>(
    inspector: &Inspector<T>,
    args: &ListArgs,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    T: InspectorTransport,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    writeln!(err, "Querying MCP server for available tools...")?;
    let mut catalog = inspector.list_tools().await?;

    if catalog.is_empty() {
        return Err(InspectError::EmptyCatalog);
    }

    if let Some(filter) = &args.category {
        catalog = catalog.filter_by_name(filter);
        info!("Filter '{}' kept {} tools", filter, catalog.len());
        if catalog.is_empty() {
            return Err(InspectError::NoMatches(filter.clone()));
        }
    }

    let rendered = match (args.format, args.no_categorize) {
        (OutputFormat::Json, _) => render::pretty_json(catalog.all())?,
        (OutputFormat::Text, false) => render::categorized_text(catalog.all()),
        (OutputFormat::Text, true) => render::flat_text(catalog.all()),
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::{Value, json};

    fn catalog() -> Value {
        json!({"data": {"tools": [
            {"name": "tap", "description": "Tap at coordinates"},
            {"name": "boot_sim", "description": "Boots a simulator"},
            {"name": "sim_tap_gesture", "description": "Gesture on a simulator"},
            {"name": "doctor", "description": "Diagnostics"}
        ]}})
    }

    async fn run(response: Value, args: &ListArgs) -> (Result<()>, String) {
        let inspector = Inspector::new(MockTransport::new().with_response(response));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_list(&inspector, args, &mut out, &mut err).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_categorized() {
        let (result, out) = run(catalog(), &ListArgs::default()).await;

        result.unwrap();
        assert!(out.contains("Simulator Development (2 tools)"));
        assert!(out.contains("UI Automation (2 tools)"));
        assert!(out.contains("System Diagnostics (1 tools)"));
        assert!(!out.contains("Utilities"));
        assert_eq!(out.matches("  • sim_tap_gesture").count(), 2);
    }

    #[tokio::test]
    async fn test_list_flat() {
        let args = ListArgs {
            no_categorize: true,
            ..Default::default()
        };
        let (_, out) = run(catalog(), &args).await;

        assert!(out.contains("All Tools (4 total)"));
        assert_eq!(out.matches("  • sim_tap_gesture").count(), 1);
        let boot = out.find("boot_sim").unwrap();
        let tap = out.find("  • tap").unwrap();
        assert!(boot < tap);
    }

    #[tokio::test]
    async fn test_list_json_keeps_filtered_order() {
        let args = ListArgs {
            category: Some("TAP".to_string()),
            format: OutputFormat::Json,
            no_categorize: false,
        };
        let (result, out) = run(catalog(), &args).await;

        assert!(result.is_ok());
        let printed: Value = serde_json::from_str(&out).unwrap();
        let names: Vec<&str> = printed
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["tap", "sim_tap_gesture"]);
        assert_eq!(printed[0]["description"], "Tap at coordinates");
    }

    #[tokio::test]
    async fn test_list_filter_without_matches() {
        let args = ListArgs {
            category: Some("zzz".to_string()),
            ..Default::default()
        };
        let (result, out) = run(catalog(), &args).await;

        assert!(matches!(result, Err(InspectError::NoMatches(ref f)) if f == "zzz"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let (result, out) = run(json!({"data": {"tools": []}}), &ListArgs::default()).await;
        assert!(matches!(result, Err(InspectError::EmptyCatalog)));
        assert!(out.is_empty());
    }
}
