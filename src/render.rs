//! Text and JSON rendering for schemas, listings and call results

use serde::Serialize;
use serde_json::Value;

use crate::catalog::ToolDescriptor;
use crate::categorize::categorize;
use crate::error::Result;
use crate::inspector::ToolCallResult;

/// Descriptions longer than this are truncated in listings
pub const MAX_DESCRIPTION_CHARS: usize = 80;

const RULE_WIDTH: usize = 60;

/// Binary name used in synthesized example invocations
const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Pretty-printed JSON with two-space indentation
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Shorten to 77 characters plus "..." when over 80 characters
pub fn truncate_description(desc: &str) -> String {
    if desc.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = desc.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
        format!("{}...", head)
    } else {
        desc.to_string()
    }
}

/// Strings print bare, everything else as JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-readable schema for one tool
pub fn schema_text(tool: &ToolDescriptor, verbose: bool) -> String {
    let mut output = vec![
        format!("\nTool: {}", tool.name),
        "=".repeat(tool.name.chars().count() + 6),
        format!(
            "\n{}\n",
            tool.description().unwrap_or("No description available")
        ),
    ];

    let properties = match tool.properties() {
        Some(p) if !p.is_empty() => p,
        _ => {
            output.push("No parameters required.\n".to_string());
            return output.join("\n");
        }
    };
    let required = tool.required();

    output.push("Parameters:".to_string());
    output.push("-".repeat(RULE_WIDTH));

    let mut sorted: Vec<(&String, &Value)> = properties.iter().collect();
    sorted.sort_by(|(a, _), (b, _)| {
        let a_optional = !required.contains(&a.as_str());
        let b_optional = !required.contains(&b.as_str());
        (a_optional, a.as_str()).cmp(&(b_optional, b.as_str()))
    });

    for (name, schema) in sorted {
        let marker = if required.contains(&name.as_str()) {
            "* REQUIRED"
        } else {
            "  (optional)"
        };
        let param_type = schema
            .get("type")
            .map(display_value)
            .unwrap_or_else(|| "unknown".to_string());
        let description = schema
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("No description");

        output.push(format!("\n  {}  {}", name, marker));
        output.push(format!("    Type: {}", param_type));
        output.push(format!("    Description: {}", description));

        if verbose {
            output.extend(constraint_lines(schema, &param_type));
        }
    }

    output.push(format!("\n{}", "-".repeat(RULE_WIDTH)));
    output.push("\nExample usage:".to_string());
    output.extend(example_lines(&tool.name, &required));
    output.push(String::new());

    output.join("\n")
}

fn constraint_lines(schema: &Value, param_type: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(values) = schema.get("enum").and_then(Value::as_array) {
        let values: Vec<String> = values.iter().map(display_value).collect();
        lines.push(format!("    Allowed values: {}", values.join(", ")));
    }
    if let Some(default) = schema.get("default") {
        lines.push(format!("    Default: {}", display_value(default)));
    }

    let labelled: &[(&str, &str)] = match param_type {
        "number" | "integer" => &[("minimum", "Minimum"), ("maximum", "Maximum")],
        "string" => &[
            ("minLength", "Min length"),
            ("maxLength", "Max length"),
            ("pattern", "Pattern"),
        ],
        _ => &[],
    };
    for (key, label) in labelled {
        if let Some(value) = schema.get(*key) {
            lines.push(format!("    {}: {}", label, display_value(value)));
        }
    }

    lines
}

fn example_lines(tool_name: &str, required: &[&str]) -> Vec<String> {
    if required.is_empty() {
        return vec![format!("  {} call {}", PROGRAM, tool_name)];
    }

    let mut lines = vec![format!("  {} call {} \\", PROGRAM, tool_name)];
    for (i, name) in required.iter().enumerate() {
        let continuation = if i + 1 < required.len() { " \\" } else { "" };
        lines.push(format!("    --param {}=<{}>{}", name, name, continuation));
    }
    lines
}

fn push_tool_entry(output: &mut Vec<String>, tool: &ToolDescriptor) {
    output.push(format!("  • {}", tool.name));
    if let Some(desc) = tool.description() {
        output.push(format!("    {}", truncate_description(desc)));
    }
    output.push(String::new());
}

/// Tools grouped under workflow category headings
pub fn categorized_text(tools: &[ToolDescriptor]) -> String {
    let mut output = Vec::new();
    for (category, members) in categorize(tools) {
        let label = category.label();
        output.push(format!("\n{} ({} tools)", label, members.len()));
        output.push("=".repeat(label.chars().count() + 10));
        for tool in members {
            push_tool_entry(&mut output, tool);
        }
    }
    output.join("\n")
}

/// All tools in one alphabetical list
pub fn flat_text(tools: &[ToolDescriptor]) -> String {
    let mut sorted: Vec<&ToolDescriptor> = tools.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut output = vec![
        format!("\nAll Tools ({} total)", tools.len()),
        "=".repeat(30),
    ];
    for tool in sorted {
        push_tool_entry(&mut output, tool);
    }
    output.join("\n")
}

/// Render a call result: the full response when `raw`, else its data or error
pub fn call_result(result: &ToolCallResult, raw: bool) -> Result<String> {
    if raw {
        return pretty_json(&result.raw);
    }
    if result.success {
        let empty = Value::Object(Default::default());
        pretty_json(result.data.as_ref().unwrap_or(&empty))
    } else {
        Ok(format!("Error: {}", result.error_message()))
    }
}
