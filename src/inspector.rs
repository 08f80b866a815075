//! Inspector facade - the directives the commands are built from

use log::info;
use serde_json::Value;

use crate::catalog::ToolCatalog;
use crate::error::Result;
use crate::params::{self, Params};
use crate::transport::InspectorTransport;

/// Decoded `call-tool` response
#[derive(Debug, Clone)]
pub struct ToolCallResult {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<Value>,
    /// The response exactly as received
    pub raw: Value,
}

impl ToolCallResult {
    /// Build from a raw response; a missing `success` counts as failure
    pub fn from_value(raw: Value) -> Self {
        Self {
            success: raw.get("success").and_then(Value::as_bool).unwrap_or(false),
            data: raw.get("data").cloned(),
            error: raw.get("error").cloned(),
            raw,
        }
    }

    /// Error message, or "Unknown error"
    pub fn error_message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
    }
}

/// Issues inspector directives over a transport
pub struct Inspector<T: InspectorTransport> {
    transport: T,
}

impl<T: InspectorTransport> Inspector<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the catalog with `list-tools`
    pub async fn list_tools(&self) -> Result<ToolCatalog> {
        let response = self.transport.run(&["list-tools".to_string()]).await?;
        let catalog = ToolCatalog::from_list_response(&response)?;
        info!("list-tools returned {} tools", catalog.len());
        Ok(catalog)
    }

    /// Fetch the catalog with full schemas via `server-info`
    pub async fn server_info(&self) -> Result<ToolCatalog> {
        let response = self.transport.run(&["server-info".to_string()]).await?;
        let catalog = ToolCatalog::from_server_info(&response)?;
        info!("server-info returned {} tools", catalog.len());
        Ok(catalog)
    }

    /// Fail with suggestions unless `name` is in the current catalog
    pub async fn validate_tool(&self, name: &str) -> Result<()> {
        let catalog = self.list_tools().await?;
        catalog.require(name)?;
        Ok(())
    }

    /// Invoke `call-tool <name> --params <json>`
    pub async fn call_tool(&self, name: &str, params: &Params) -> Result<ToolCallResult> {
        let params_json = params::to_json(params)?;
        info!("Calling tool {} with {}", name, params_json);
        let directive = vec![
            "call-tool".to_string(),
            name.to_string(),
            "--params".to_string(),
            params_json,
        ];
        let response = self.transport.run(&directive).await?;
        Ok(ToolCallResult::from_value(response))
    }
}
