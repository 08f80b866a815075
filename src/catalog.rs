//! Tool catalog built from inspector responses
//!
//! A catalog is the ordered list of tool descriptors a server exposes at the
//! moment it was queried. It is fetched fresh on every run and never cached.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{InspectError, Result};

/// Maximum number of "did you mean" suggestions
pub const MAX_SUGGESTIONS: usize = 5;

/// One tool as described by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name (e.g., "build_sim", "tap")
    pub name: String,
    /// JSON schema for input parameters
    #[serde(rename = "inputSchema", default, skip_serializing_if = "Value::is_null")]
    pub input_schema: Value,
    /// Everything else the server sent, `description` included, kept as-is
    /// so JSON output stays verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToolDescriptor {
    /// Create a descriptor with an empty object schema
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            extra: Map::from_iter([("description".to_string(), Value::String(description.into()))]),
        }
    }

    /// Set input schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Description, treating an empty or non-string value as absent
    pub fn description(&self) -> Option<&str> {
        self.extra
            .get("description")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }

    /// Declared parameters under `inputSchema.properties`
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.input_schema.get("properties").and_then(Value::as_object)
    }

    /// Names listed under `inputSchema.required`
    pub fn required(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Ordered catalog of tool descriptors
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Create a catalog from descriptors, keeping their order
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Parse a `list-tools` response: `{data: {tools: [...]}}`
    pub fn from_list_response(response: &Value) -> Result<Self> {
        let tools = response
            .pointer("/data/tools")
            .or_else(|| response.get("tools"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Self::from_tools_value(tools)
    }

    /// Parse a `server-info` response: `{capabilities: {tools: [...]}}`
    pub fn from_server_info(response: &Value) -> Result<Self> {
        let tools = response
            .pointer("/capabilities/tools")
            .or_else(|| response.pointer("/data/capabilities/tools"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Self::from_tools_value(tools)
    }

    fn from_tools_value(tools: Value) -> Result<Self> {
        let tools: Vec<ToolDescriptor> = serde_json::from_value(tools)
            .map_err(|e| InspectError::Malformed(format!("invalid tool list: {}", e)))?;
        Ok(Self { tools })
    }

    /// Get a tool by exact name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check if a tool exists (case-sensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// List all tool names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Get all tools in catalog order
    pub fn all(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Names similar to `query`, ignoring case, in catalog order.
    ///
    /// A name is similar when either string contains the other.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.tools
            .iter()
            .filter(|t| {
                let name = t.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
            .take(MAX_SUGGESTIONS)
            .map(|t| t.name.clone())
            .collect()
    }

    /// Confirm `name` exists, or fail with suggestions
    pub fn require(&self, name: &str) -> Result<&ToolDescriptor> {
        self.get(name).ok_or_else(|| InspectError::ToolNotFound {
            name: name.to_string(),
            suggestions: self.suggest(name),
        })
    }

    /// Keep only tools whose name contains `needle`, ignoring case
    pub fn filter_by_name(self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        let tools = self
            .tools
            .into_iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .collect();
        Self { tools }
    }
}
