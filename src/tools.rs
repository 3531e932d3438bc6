pub mod traits;
pub mod schema;
pub mod error;
pub mod agent;
pub mod mcp;
pub mod registry;
pub mod order_status;
