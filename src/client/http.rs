use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::ClientConfig;
use super::{
    traits::ApiClient,
    error::ClientError,
    ClientResult,
    RawEnvelope,
};

/// [`ApiClient`] over HTTP(S) backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl HttpApiClient {
    /// Build a client from a validated config. The bearer token, if any, is
    /// attached to every request as a default header.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config
            .validate()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = config.api_key.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                ClientError::InvalidConfig("api_key contains invalid header characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str) -> ClientResult<RawEnvelope> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // error envelopes usually ride on 4xx/5xx, so parse before looking at the status
        match serde_json::from_str::<RawEnvelope>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(ClientError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(ClientError::Decode(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_parses_success_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orders/A1")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"data":{"id":"A1","status":"open"}}"#)
            .create_async()
            .await;

        let client = HttpApiClient::new(ClientConfig::new(server.url())).unwrap();
        let envelope = client.get("/orders/A1").await.unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(json!({ "id": "A1", "status": "open" })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sends_bearer_token_and_trims_base_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orders/B2")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_body(r#"{"success":true,"data":{}}"#)
            .create_async()
            .await;

        let config = ClientConfig::new(format!("{}/", server.url())).with_api_key("secret");
        let client = HttpApiClient::new(config).unwrap();
        assert_eq!(client.base_url(), server.url());

        client.get("/orders/B2").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_envelope_on_error_status_is_returned() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/orders/missing")
            .with_status(404)
            .with_body(r#"{"success":false,"error":{"message":"not found"}}"#)
            .create_async()
            .await;

        let client = HttpApiClient::new(ClientConfig::new(server.url())).unwrap();
        let envelope = client.get("/orders/missing").await.unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.error_message(), Some("not found"));
    }

    #[tokio::test]
    async fn non_envelope_error_body_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/orders/A1")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let client = HttpApiClient::new(ClientConfig::new(server.url())).unwrap();
        let err = client.get("/orders/A1").await.unwrap_err();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_envelope_success_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/orders/A1")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let client = HttpApiClient::new(ClientConfig::new(server.url())).unwrap();
        assert!(matches!(client.get("/orders/A1").await, Err(ClientError::Decode(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = HttpApiClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
