use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};

use super::{
    error::ToolError,
    schema::InputSchema,
    traits::Tool,
};

/// Type-erased async function from validated params to a result.
pub type ExecuteFn<P, O> = Arc<dyn Fn(P) -> BoxFuture<'static, Result<O, ToolError>> + Send + Sync>;

/// Descriptor for agent tool-calling frameworks: `{ description, input_schema, execute }`.
///
/// `execute` trusts its input. The framework checks arguments against
/// `input_schema` first; [`Tool::run`] does exactly that when the descriptor is
/// driven through a [`ToolRegistry`](super::registry::ToolRegistry).
pub struct AgentTool<P, O> {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
    execute: ExecuteFn<P, O>,
    _marker: PhantomData<fn(P) -> O>,
}

impl<P, O> AgentTool<P, O> {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
        execute: F,
    ) -> Self
    where
        F: Fn(P) -> BoxFuture<'static, Result<O, ToolError>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            execute: Arc::new(execute),
            _marker: PhantomData,
        }
    }

    pub async fn execute(&self, params: P) -> Result<O, ToolError> {
        (self.execute)(params).await
    }
}

impl<P, O> Clone for AgentTool<P, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema.clone(),
            execute: Arc::clone(&self.execute),
            _marker: PhantomData,
        }
    }
}

impl<P, O> fmt::Debug for AgentTool<P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl<P, O> Tool for AgentTool<P, O>
where
    P: DeserializeOwned + Send + 'static,
    O: Serialize + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }

    async fn run(&self, input: serde_json::Value) -> Result<String, ToolError> {
        self.input_schema.validate(&input)?;
        let params: P = serde_json::from_value(input)
            .map_err(|e| ToolError::ParamsNotMatched(e.to_string()))?;
        let output = self.execute(params).await?;
        Ok(serde_json::to_string(&output)?)
    }
}
