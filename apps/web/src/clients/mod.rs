//! HTTP clients for the upstream OneLink API.
//!
//! Each client is a trait so page handlers and controllers can be exercised with stubs; the
//! reqwest implementations are the only code in this crate that talks to the API.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::resume::validation::UploadRejection;

pub mod portfolio;
pub mod resume;

pub use portfolio::{HttpPortfolioClient, PortfolioClient};
pub use resume::{HttpResumeClient, ResumeClient, SessionToken};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(#[from] UploadRejection),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },
}

/// Builds the shared reqwest client.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("onelink-web/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Parses and checks the configured API base URL once, at startup.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API base URL '{raw}'"))?;
    if url.cannot_be_a_base() {
        bail!("API base URL '{raw}' cannot carry a path");
    }
    Ok(url)
}

/// Appends path segments to `base`, percent-encoding each one.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Maps a non-success status to the error taxonomy; passes successes through.
pub(crate) async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::Unauthorized),
        _ => {
            let message = response.text().await.unwrap_or_default();
            warn!("OneLink API returned {status}: {message}");
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Decodes a JSON body, reporting a malformed body as a server failure.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| ClientError::Server {
        status,
        message: format!("malformed response body: {e}"),
    })
}
