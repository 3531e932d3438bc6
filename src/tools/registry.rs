use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::{
    error::ToolError,
    schema::ToolSchema,
    traits::Tool,
};

/// Agent-side tool table: name lookup, prompt schemas and call dispatch.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under the given name. Replaces any existing tool with the same name.
    /// Returns &mut Self for chaining.
    pub fn register_tool(&mut self, name: Option<&str>, tool: Arc<dyn Tool>) -> &mut Self {
        // If no name is provided, use the tool's own name.
        let name = name.unwrap_or_else(|| tool.name()).to_string();
        self.tools.insert(name, tool);
        self
    }

    /// Look up a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas for every registered tool, sorted by name so prompts are stable.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .iter()
            .map(|(name, tool)| ToolSchema {
                name: name.clone(),
                description: tool.description().to_string(),
                args: tool.args(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Run the named tool on model-supplied arguments.
    pub async fn call(&self, name: &str, args: serde_json::Value) -> Result<String, ToolError> {
        let tool = self
            .get_tool(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        debug!(tool = name, "dispatching tool call");
        tool.run(args).await
    }
}
