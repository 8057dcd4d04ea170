use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use tracing::{debug, info};

use crate::clients::{check_status, decode_json, endpoint, parse_base_url, ClientError};
use crate::models::resume::{ProfileSummaryUpdate, ResumeTextBody, UploadFile};
use crate::resume::validation::validate_upload;

/// Bearer token of the signed-in user, taken from the session cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Authenticated resume-management contracts. Every call fails with
/// `ClientError::Unauthorized` when the session is not accepted upstream.
#[async_trait]
pub trait ResumeClient: Send + Sync {
    /// Extracted text of the last uploaded resume.
    async fn fetch_resume(&self, session: &SessionToken) -> Result<Option<String>, ClientError>;

    /// Hand-written profile summary.
    async fn fetch_profile(&self, session: &SessionToken) -> Result<Option<String>, ClientError>;

    async fn upload_resume(
        &self,
        session: &SessionToken,
        file: &UploadFile,
    ) -> Result<(), ClientError>;

    async fn save_profile_summary(
        &self,
        session: &SessionToken,
        text: &str,
    ) -> Result<(), ClientError>;
}

#[derive(Clone)]
pub struct HttpResumeClient {
    http: Client,
    base: Url,
}

impl HttpResumeClient {
    pub fn new(http: Client, api_base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base_url(api_base_url)?,
        })
    }

    fn authed(&self, builder: RequestBuilder, session: &SessionToken) -> RequestBuilder {
        builder.bearer_auth(session.as_str())
    }

    async fn get_text(
        &self,
        session: &SessionToken,
        segments: &[&str],
    ) -> Result<Option<String>, ClientError> {
        let url = endpoint(&self.base, segments);
        debug!("GET {url}");
        let response = self.authed(self.http.get(url), session).send().await?;
        let body: ResumeTextBody = decode_json(check_status(response).await?).await?;
        Ok(body.into_text())
    }
}

#[async_trait]
impl ResumeClient for HttpResumeClient {
    async fn fetch_resume(&self, session: &SessionToken) -> Result<Option<String>, ClientError> {
        self.get_text(session, &["resume", "text"]).await
    }

    async fn fetch_profile(&self, session: &SessionToken) -> Result<Option<String>, ClientError> {
        self.get_text(session, &["users", "me"]).await
    }

    async fn upload_resume(
        &self,
        session: &SessionToken,
        file: &UploadFile,
    ) -> Result<(), ClientError> {
        // Same gate as the page controller: nothing invalid leaves this process.
        let file = validate_upload(Some(file))?;

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let url = endpoint(&self.base, &["resume", "upload"]);
        let response = self
            .authed(self.http.post(url), session)
            .multipart(form)
            .send()
            .await?;
        check_status(response).await?;

        info!("Uploaded resume '{}' ({} bytes)", file.file_name, file.size());
        Ok(())
    }

    async fn save_profile_summary(
        &self,
        session: &SessionToken,
        text: &str,
    ) -> Result<(), ClientError> {
        let url = endpoint(&self.base, &["users", "me"]);
        let response = self
            .authed(self.http.put(url), session)
            .json(&ProfileSummaryUpdate { resume_text: text })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
