pub use crate::client::{
    traits::ApiClient,
    http::HttpApiClient,
    error::ClientError,
};
pub use crate::config::ClientConfig;
pub use crate::tools::{
    traits::Tool,
    agent::AgentTool,
    mcp::{McpTool, McpToolInfo, McpCatalog},
    registry::ToolRegistry,
    schema::{InputSchema, FieldSchema},
    error::{ToolError, ValidationError},
    order_status::{GetOrderStatusParams, create_agent_tool, create_mcp_tool, fetch_order_status},
};
pub use crate::types::{Order, ResponseEnvelope, ApiErrorBody};
