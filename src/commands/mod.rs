//! Command handlers
//!
//! Each submodule implements one subcommand on top of an [`Inspector`]:
//! - call: validate a tool name, then invoke it with `key=value` parameters
//! - schema: show one tool's parameter schema
//! - list: list the catalog, optionally filtered and grouped by workflow
//!
//! Handlers write results to `out` and progress to `err`, so stdout stays
//! parseable in JSON mode.
//!
//! [`Inspector`]: crate::inspector::Inspector

use std::io::Write;

use colored::*;

use crate::error::InspectError;

pub mod call;
pub mod list;
pub mod schema;

pub use call::{CallArgs, handle_call};
pub use list::{ListArgs, handle_list};
pub use schema::{SchemaArgs, handle_schema};

/// Output format for schema and list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a diagnostic for `error`, with hints where they help
pub fn report_error<E: Write + ?Sized>(err: &mut E, error: &InspectError) -> std::io::Result<()> {
    writeln!(err, "{} {}", "Error:".red().bold(), error)?;

    match error {
        InspectError::InvalidParam(_) => {
            writeln!(err, "Parameters must be in format: key=value")?;
        }
        InspectError::Decode { raw, .. } => {
            writeln!(err, "Raw output: {}", raw)?;
        }
        InspectError::ToolNotFound { suggestions, .. } => {
            writeln!(err, "\nDid you mean one of these?")?;
            if suggestions.is_empty() {
                writeln!(err, "  No similar tools found.")?;
            }
            for name in suggestions {
                writeln!(err, "  • {}", name)?;
            }
        }
        _ => {}
    }

    if error.wants_list_hint() {
        writeln!(
            err,
            "\nRun '{} list' to see all available tools.",
            env!("CARGO_PKG_NAME")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(error: &InspectError) -> String {
        let mut buf = Vec::new();
        report_error(&mut buf, error).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_tool_not_found_with_suggestions() {
        let text = report(&InspectError::ToolNotFound {
            name: "boot_simm".to_string(),
            suggestions: vec!["boot_sim".to_string()],
        });
        assert!(text.contains("Tool 'boot_simm' not found."));
        assert!(text.contains("Did you mean one of these?"));
        assert!(text.contains("  • boot_sim\n"));
        assert!(!text.contains("to see all available tools"));
    }

    #[test]
    fn test_report_tool_not_found_without_suggestions() {
        let text = report(&InspectError::ToolNotFound {
            name: "zzz".to_string(),
            suggestions: vec![],
        });
        assert!(text.contains("No similar tools found."));
        assert!(text.contains("list' to see all available tools."));
    }

    #[test]
    fn test_report_schema_not_found_has_hint_only() {
        let text = report(&InspectError::SchemaNotFound("nope".to_string()));
        assert!(text.contains("Tool 'nope' not found."));
        assert!(!text.contains("Did you mean"));
        assert!(text.contains("to see all available tools."));
    }

    #[test]
    fn test_report_invalid_param() {
        let text = report(&InspectError::InvalidParam("oops".to_string()));
        assert!(text.contains("Invalid parameter format: oops"));
        assert!(text.contains("key=value"));
    }

    #[test]
    fn test_report_decode_includes_raw_output() {
        let source = serde_json::from_str::<serde_json::Value>("garbage").unwrap_err();
        let text = report(&InspectError::Decode {
            source,
            raw: "garbage".to_string(),
        });
        assert!(text.contains("Raw output: garbage"));
    }

    #[test]
    fn test_report_transport_includes_stderr() {
        let text = report(&InspectError::Transport {
            status: Some(1),
            stderr: "boom".to_string(),
        });
        assert!(text.contains("boom"));
    }
}
