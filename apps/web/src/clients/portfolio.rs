use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::clients::{check_status, decode_json, endpoint, parse_base_url, ClientError};
use crate::models::portfolio::PortfolioRecord;

/// Read contract for the public portfolio view.
#[async_trait]
pub trait PortfolioClient: Send + Sync {
    /// Fetches the aggregate record for `username`. No retry.
    async fn fetch_portfolio(&self, username: &str) -> Result<PortfolioRecord, ClientError>;
}

#[derive(Clone)]
pub struct HttpPortfolioClient {
    http: Client,
    base: Url,
}

impl HttpPortfolioClient {
    pub fn new(http: Client, api_base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base_url(api_base_url)?,
        })
    }
}

#[async_trait]
impl PortfolioClient for HttpPortfolioClient {
    async fn fetch_portfolio(&self, username: &str) -> Result<PortfolioRecord, ClientError> {
        let url = endpoint(&self.base, &["portfolio", username]);
        debug!("Fetching portfolio for '{username}'");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Portfolio request for '{username}' failed: {e}");
            ClientError::Network(e)
        })?;
        let response = check_status(response).await?;
        decode_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpPortfolioClient {
        HttpPortfolioClient::new(Client::new(), &server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_portfolio_decodes_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portfolio/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"github_username": "octocat", "portfolio_username": "octo"},
                "projects": [],
                "experience": [],
                "education": [],
                "skills": [{"id": 1, "name": "Rust"}],
                "media": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let record = client_for(&server)
            .await
            .fetch_portfolio("octocat")
            .await
            .unwrap();
        assert_eq!(record.user.portfolio_username, "octo");
        assert_eq!(record.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_portfolio_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portfolio/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .fetch_portfolio("ghost")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[tokio::test]
    async fn test_server_failure_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .fetch_portfolio("octocat")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Server { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .fetch_portfolio("octocat")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Server { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Nothing listens on port 1 of the loopback interface.
        let client = HttpPortfolioClient::new(Client::new(), "http://127.0.0.1:1").unwrap();
        let err = client.fetch_portfolio("octocat").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
