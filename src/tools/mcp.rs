use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use futures::future::BoxFuture;
use serde::{Serialize, Deserialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::ToolError;

/// Handler invoked with the raw `arguments` object of a tools/call request.
pub type McpHandlerFn =
    Arc<dyn Fn(JsonValue) -> BoxFuture<'static, Result<JsonValue, ToolError>> + Send + Sync>;

/// Descriptor for tool-discovery protocols: `{ name, description, inputSchema, handler }`.
///
/// The handler performs no schema validation. Callers are expected to check
/// parameters against the advertised `input_schema` before invoking it.
#[derive(Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
    handler: McpHandlerFn,
}

impl McpTool {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: JsonValue,
        handler: F,
    ) -> Self
    where
        F: Fn(JsonValue) -> BoxFuture<'static, Result<JsonValue, ToolError>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Arc::new(handler),
        }
    }

    pub async fn call(&self, params: JsonValue) -> Result<JsonValue, ToolError> {
        (self.handler)(params).await
    }

    pub fn info(&self) -> McpToolInfo {
        McpToolInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema.clone(),
        }
    }
}

impl fmt::Debug for McpTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Entry of a tools/list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
}

/// The set of tools advertised to discovery clients, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct McpCatalog {
    tools: BTreeMap<String, McpTool>,
}

impl McpCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool with the same name.
    pub fn add(&mut self, tool: McpTool) -> &mut Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&McpTool> {
        self.tools.get(name)
    }

    /// Tool listing in name order.
    pub fn list(&self) -> Vec<McpToolInfo> {
        self.tools.values().map(McpTool::info).collect()
    }

    pub async fn call(&self, name: &str, params: JsonValue) -> Result<JsonValue, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        debug!(tool = name, "dispatching discovery tool call");
        tool.call(params).await
    }
}
