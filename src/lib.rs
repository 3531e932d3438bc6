pub mod client;
pub mod tools;
pub mod types;
pub mod config;
pub mod error;
pub mod prelude;

// re-export the pieces most callers need: `use trade_tools::{ApiClient, create_agent_tool};`
pub use client::traits::ApiClient;
pub use client::http::HttpApiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use tools::order_status::{create_agent_tool, create_mcp_tool, fetch_order_status};
pub use types::{Order, ResponseEnvelope};
