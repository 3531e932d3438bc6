use super::error::ToolError;

// re-export schema types for tool implementors
pub use super::schema::{ArgSchema, InputSchema};

/// A tool as seen by an agent: named, described, schema-checked, and run on
/// JSON arguments chosen by the model.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> &InputSchema;

    fn args(&self) -> Vec<ArgSchema> {
        self.input_schema().args()
    }

    /// Run on raw arguments and render the result as text for the model.
    async fn run(&self, input: serde_json::Value) -> Result<String, ToolError>;
}
