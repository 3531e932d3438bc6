use std::sync::Arc;
use serde_json::json;
use trade_tools::{
    prelude::*,
    client::traits::client_to_arc_dyn,
};

// Usage: cargo run --example order_status -- <config.toml> <order-id>
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "trade-tools.toml".to_string());
    let order_id = args.next().unwrap_or_else(|| "A1".to_string());

    let config = ClientConfig::from_file(&config_path)?;
    let client = client_to_arc_dyn(HttpApiClient::new(config)?);

    // agent side
    let mut registry = ToolRegistry::new();
    registry.register_tool(None, Arc::new(create_agent_tool(Arc::clone(&client))));
    for schema in registry.schemas() {
        println!("agent tool: {}", serde_json::to_string(&schema)?);
    }
    match registry.call("getOrderStatus", json!({ "orderId": order_id })).await {
        Ok(out) => println!("agent result: {out}"),
        Err(e) => eprintln!("agent call failed: {e}"),
    }

    // discovery side
    let mut catalog = McpCatalog::new();
    catalog.add(create_mcp_tool(client));
    println!("tools/list: {}", serde_json::to_string_pretty(&catalog.list())?);
    match catalog.call("getOrderStatus", json!({ "orderId": order_id })).await {
        Ok(order) => println!("tools/call: {order}"),
        Err(e) => eprintln!("tools/call failed: {e}"),
    }

    Ok(())
}
