use std::sync::Arc;
use super::{ClientResult, RawEnvelope};

/// Convert a concrete client into an `Arc<dyn ApiClient>` for handing to the tool factories.
pub fn client_to_arc_dyn<C>(client: C) -> Arc<dyn ApiClient>
where
    C: 'static + ApiClient,
{
    Arc::new(client)
}

/// The one capability the tools need from the trading API.
///
/// Implementations own connection handling, authentication and retries.
/// Transport failures come back as `Err`; application failures come back as
/// an `Ok` envelope with `success: false`.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `path` (e.g. `/orders/A1`) relative to the API root.
    async fn get(&self, path: &str) -> ClientResult<RawEnvelope>;
}
