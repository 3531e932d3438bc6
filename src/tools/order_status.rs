//! Order status lookup, exposed both as an agent tool and as a discovery tool.

use std::sync::Arc;
use futures::FutureExt;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::client::{traits::ApiClient, error::ClientError};
use crate::types::Order;
use super::{
    agent::AgentTool,
    error::ToolError,
    mcp::McpTool,
    schema::{FieldSchema, InputSchema},
};

pub const TOOL_NAME: &str = "getOrderStatus";
pub const AGENT_DESCRIPTION: &str = "Get the status of a specific order by order ID - DemoTradePro";
pub const MCP_DESCRIPTION: &str = "Check the status of a specific trading order - DemoTradePro";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOrderStatusParams {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// `{ orderId: non-empty string }`
pub fn schema() -> InputSchema {
    InputSchema::new().field(
        FieldSchema::string("orderId", "Unique order identifier")
            .min_length(1, "Order ID is required"),
    )
}

/// Fetch one order through `GET /orders/{order_id}`.
///
/// `order_id` is used as given. Transport errors from the client are returned
/// unchanged; a failure envelope becomes [`ToolError::Api`] carrying the
/// server's message, or a message naming the order when there is none.
pub async fn fetch_order_status(
    order_id: &str,
    client: &dyn ApiClient,
) -> Result<Order, ToolError> {
    debug!(order_id, "fetching order status");
    let response = client
        .get(&format!("/orders/{order_id}"))
        .await?
        .decode::<Order>()
        .map_err(ClientError::from)?;

    if !response.success {
        let message = response
            .error_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Failed to fetch order {order_id}"));
        return Err(ToolError::Api(message));
    }

    response
        .data
        .ok_or_else(|| ToolError::MissingData(order_id.to_string()))
}

/// Agent tool-calling descriptor over `client`.
pub fn create_agent_tool(client: Arc<dyn ApiClient>) -> AgentTool<GetOrderStatusParams, Order> {
    AgentTool::new(TOOL_NAME, AGENT_DESCRIPTION, schema(), move |params: GetOrderStatusParams| {
        let client = Arc::clone(&client);
        async move { fetch_order_status(&params.order_id, client.as_ref()).await }.boxed()
    })
}

/// Discovery-protocol descriptor over `client`. The advertised schema is the
/// JSON Schema translation of [`schema`].
pub fn create_mcp_tool(client: Arc<dyn ApiClient>) -> McpTool {
    McpTool::new(TOOL_NAME, MCP_DESCRIPTION, schema().to_json_schema(), move |raw| {
        let client = Arc::clone(&client);
        async move {
            let params: GetOrderStatusParams = serde_json::from_value(raw)
                .map_err(|e| ToolError::ParamsNotMatched(e.to_string()))?;
            let order = fetch_order_status(&params.order_id, client.as_ref()).await?;
            Ok(order.into_inner())
        }
        .boxed()
    })
}
