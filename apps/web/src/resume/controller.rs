use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::{ClientError, ResumeClient, SessionToken};
use crate::models::resume::{ResumeState, UploadFile};
use crate::resume::validation::validate_upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// Transient alert shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Busy flag shared with whoever renders it. Set only through `Indicator::begin`.
#[derive(Debug, Clone, Default)]
pub struct Indicator(Arc<AtomicBool>);

impl Indicator {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Marks the indicator active until the returned guard is dropped.
    pub fn begin(&self) -> IndicatorGuard {
        self.0.store(true, Ordering::SeqCst);
        IndicatorGuard(Arc::clone(&self.0))
    }
}

pub struct IndicatorGuard(Arc<AtomicBool>);

impl Drop for IndicatorGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives the resume dashboard for one signed-in user.
///
/// Every operation reports its outcome as a `Notice`. The only error that escapes is
/// `ClientError::Unauthorized`, which the caller answers with a redirect to login.
pub struct ResumePageController {
    client: Arc<dyn ResumeClient>,
    session: SessionToken,
    state: ResumeState,
    notices: Vec<Notice>,
    uploading: Indicator,
    saving: Indicator,
}

impl ResumePageController {
    /// Loads resume text and profile summary concurrently.
    /// A failed load leaves its field empty and adds no notice.
    pub async fn mount(
        client: Arc<dyn ResumeClient>,
        session: SessionToken,
    ) -> Result<Self, ClientError> {
        let (resume, profile) = tokio::join!(
            client.fetch_resume(&session),
            client.fetch_profile(&session)
        );

        let state = ResumeState {
            resume_text: settle("resume text", resume)?,
            profile_summary: settle("profile summary", profile)?,
        };

        Ok(Self {
            client,
            session,
            state,
            notices: Vec::new(),
            uploading: Indicator::default(),
            saving: Indicator::default(),
        })
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn uploading(&self) -> &Indicator {
        &self.uploading
    }

    pub fn saving(&self) -> &Indicator {
        &self.saving
    }

    /// Validate → upload → reload the extracted text.
    ///
    /// A file that fails validation is never sent.
    pub async fn upload(&mut self, file: Option<UploadFile>) -> Result<(), ClientError> {
        let _busy = self.uploading.begin();

        let file = match validate_upload(file.as_ref()) {
            Ok(file) => file,
            Err(rejection) => {
                info!("Upload rejected before sending: {rejection:?}");
                self.notices.push(Notice::error(rejection.to_string()));
                return Ok(());
            }
        };

        match self.client.upload_resume(&self.session, file).await {
            Ok(()) => {
                self.notices.push(Notice::success("Resume uploaded successfully!"));
                let reloaded = self.client.fetch_resume(&self.session).await;
                if let Some(text) = settle("resume text", reloaded)? {
                    self.state.resume_text = Some(text);
                }
                Ok(())
            }
            Err(ClientError::Unauthorized) => Err(ClientError::Unauthorized),
            Err(ClientError::Validation(rejection)) => {
                self.notices.push(Notice::error(rejection.to_string()));
                Ok(())
            }
            Err(e) => {
                warn!("Resume upload failed: {e}");
                self.notices.push(Notice::error("Failed to upload resume"));
                Ok(())
            }
        }
    }

    pub async fn save_summary(&mut self, text: String) -> Result<(), ClientError> {
        let _busy = self.saving.begin();

        match self.client.save_profile_summary(&self.session, &text).await {
            Ok(()) => {
                self.state.profile_summary = Some(text).filter(|t| !t.is_empty());
                self.notices.push(Notice::success("Profile summary updated!"));
                Ok(())
            }
            Err(ClientError::Unauthorized) => Err(ClientError::Unauthorized),
            Err(e) => {
                warn!("Saving profile summary failed: {e}");
                self.notices.push(Notice::error("Failed to update profile summary"));
                Ok(())
            }
        }
    }
}

/// Keeps a loaded value, or logs the failure and leaves it empty. `Unauthorized` passes through.
fn settle(
    what: &str,
    result: Result<Option<String>, ClientError>,
) -> Result<Option<String>, ClientError> {
    match result {
        Ok(value) => Ok(value),
        Err(ClientError::Unauthorized) => Err(ClientError::Unauthorized),
        Err(e) => {
            warn!("Failed to load {what}: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::validation::{DOCX_MIME, PDF_MIME};
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubClient {
        resume: Mutex<Option<String>>,
        profile: Option<String>,
        fail_loads: bool,
        fail_writes: bool,
        unauthorized: bool,
        uploads: AtomicUsize,
        saved: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn load(&self, value: Option<String>) -> Result<Option<String>, ClientError> {
            if self.unauthorized {
                return Err(ClientError::Unauthorized);
            }
            if self.fail_loads {
                return Err(ClientError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(value)
        }

        fn write(&self) -> Result<(), ClientError> {
            if self.unauthorized {
                return Err(ClientError::Unauthorized);
            }
            if self.fail_writes {
                return Err(ClientError::Server {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ResumeClient for StubClient {
        async fn fetch_resume(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            let current = self.resume.lock().unwrap().clone();
            self.load(current)
        }

        async fn fetch_profile(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            self.load(self.profile.clone())
        }

        async fn upload_resume(
            &self,
            _: &SessionToken,
            file: &UploadFile,
        ) -> Result<(), ClientError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            self.write()?;
            *self.resume.lock().unwrap() = Some(format!("extracted from {}", file.file_name));
            Ok(())
        }

        async fn save_profile_summary(
            &self,
            _: &SessionToken,
            text: &str,
        ) -> Result<(), ClientError> {
            self.write()?;
            self.saved.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn file(size: usize, content_type: &str) -> UploadFile {
        UploadFile {
            file_name: "cv.pdf".to_string(),
            content_type: content_type.to_string(),
            bytes: Bytes::from(vec![0u8; size]),
        }
    }

    async fn mounted(stub: Arc<StubClient>) -> ResumePageController {
        ResumePageController::mount(stub, SessionToken::new("t"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_mount_loads_both_fields() {
        let stub = Arc::new(StubClient {
            resume: Mutex::new(Some("Experienced engineer".to_string())),
            profile: Some("Hi there".to_string()),
            ..Default::default()
        });
        let page = mounted(stub).await;
        assert_eq!(page.state().resume_text.as_deref(), Some("Experienced engineer"));
        assert_eq!(page.state().profile_summary.as_deref(), Some("Hi there"));
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_loads_leave_fields_empty_without_notices() {
        let stub = Arc::new(StubClient {
            resume: Mutex::new(Some("x".to_string())),
            profile: Some("y".to_string()),
            fail_loads: true,
            ..Default::default()
        });
        let page = mounted(stub).await;
        assert_eq!(page.state(), &ResumeState::default());
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_mount_surfaces_unauthorized() {
        let stub = Arc::new(StubClient {
            unauthorized: true,
            ..Default::default()
        });
        let result = ResumePageController::mount(stub, SessionToken::new("t")).await;
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_oversize_file_never_reaches_client() {
        let stub = Arc::new(StubClient::default());
        let mut page = mounted(stub.clone()).await;

        page.upload(Some(file(11 * 1024 * 1024, PDF_MIME))).await.unwrap();

        assert_eq!(stub.uploads.load(Ordering::SeqCst), 0);
        assert_eq!(
            page.notices(),
            &[Notice::error("File size must be less than 10MB")]
        );
        assert!(!page.uploading().is_active());
    }

    #[tokio::test]
    async fn test_missing_and_wrong_type_rejected_locally() {
        let stub = Arc::new(StubClient::default());
        let mut page = mounted(stub.clone()).await;

        page.upload(None).await.unwrap();
        page.upload(Some(file(1024, "image/png"))).await.unwrap();

        assert_eq!(stub.uploads.load(Ordering::SeqCst), 0);
        let messages: Vec<_> = page.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            ["Please choose a file to upload", "Please upload a PDF or DOCX file"]
        );
    }

    #[tokio::test]
    async fn test_valid_upload_sends_once_and_reloads_text() {
        let stub = Arc::new(StubClient::default());
        let mut page = mounted(stub.clone()).await;
        assert_eq!(page.state().resume_text, None);

        page.upload(Some(file(9 * 1024 * 1024, PDF_MIME))).await.unwrap();

        assert_eq!(stub.uploads.load(Ordering::SeqCst), 1);
        assert_eq!(
            page.state().resume_text.as_deref(),
            Some("extracted from cv.pdf")
        );
        assert_eq!(page.notices(), &[Notice::success("Resume uploaded successfully!")]);
        assert!(!page.uploading().is_active());
    }

    #[tokio::test]
    async fn test_upload_failure_shows_notice_and_clears_indicator() {
        let stub = Arc::new(StubClient {
            fail_writes: true,
            ..Default::default()
        });
        let mut page = mounted(stub.clone()).await;

        page.upload(Some(file(2048, DOCX_MIME))).await.unwrap();

        assert_eq!(stub.uploads.load(Ordering::SeqCst), 1);
        assert_eq!(page.notices(), &[Notice::error("Failed to upload resume")]);
        assert!(!page.uploading().is_active());
    }

    #[tokio::test]
    async fn test_save_summary_outcomes() {
        let stub = Arc::new(StubClient::default());
        let mut page = mounted(stub.clone()).await;
        page.save_summary("Rustacean".to_string()).await.unwrap();
        assert_eq!(page.state().profile_summary.as_deref(), Some("Rustacean"));
        assert_eq!(page.notices(), &[Notice::success("Profile summary updated!")]);
        assert_eq!(*stub.saved.lock().unwrap(), vec!["Rustacean".to_string()]);
        assert!(!page.saving().is_active());

        let failing = Arc::new(StubClient {
            fail_writes: true,
            ..Default::default()
        });
        let mut page = mounted(failing).await;
        page.save_summary("Rustacean".to_string()).await.unwrap();
        assert_eq!(page.state().profile_summary, None);
        assert_eq!(
            page.notices(),
            &[Notice::error("Failed to update profile summary")]
        );
        assert!(!page.saving().is_active());
    }

    /// Records whether the page's indicators are lit while each call is in flight.
    #[derive(Default)]
    struct IndicatorWatch {
        uploading: Mutex<Option<Indicator>>,
        saving: Mutex<Option<Indicator>>,
        seen: Mutex<Vec<(&'static str, bool)>>,
    }

    impl IndicatorWatch {
        fn record(&self, call: &'static str, indicator: &Mutex<Option<Indicator>>) {
            if let Some(indicator) = indicator.lock().unwrap().as_ref() {
                self.seen.lock().unwrap().push((call, indicator.is_active()));
            }
        }
    }

    #[async_trait]
    impl ResumeClient for IndicatorWatch {
        async fn fetch_resume(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            self.record("fetch_resume", &self.uploading);
            Ok(Some("text".to_string()))
        }

        async fn fetch_profile(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            Ok(None)
        }

        async fn upload_resume(&self, _: &SessionToken, _: &UploadFile) -> Result<(), ClientError> {
            self.record("upload_resume", &self.uploading);
            Ok(())
        }

        async fn save_profile_summary(&self, _: &SessionToken, _: &str) -> Result<(), ClientError> {
            self.record("save_profile_summary", &self.saving);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_indicators_active_while_requests_run() {
        let watch = Arc::new(IndicatorWatch::default());
        let mut page = ResumePageController::mount(watch.clone(), SessionToken::new("t"))
            .await
            .unwrap();
        *watch.uploading.lock().unwrap() = Some(page.uploading().clone());
        *watch.saving.lock().unwrap() = Some(page.saving().clone());

        page.upload(Some(file(1024, PDF_MIME))).await.unwrap();
        page.save_summary("Rustacean".to_string()).await.unwrap();

        assert_eq!(
            *watch.seen.lock().unwrap(),
            vec![
                ("upload_resume", true),
                ("fetch_resume", true),
                ("save_profile_summary", true),
            ]
        );
        assert!(!page.uploading().is_active());
        assert!(!page.saving().is_active());
    }

    #[test]
    fn test_indicator_guard() {
        let indicator = Indicator::default();
        let observer = indicator.clone();
        {
            let _guard = indicator.begin();
            assert!(observer.is_active());
        }
        assert!(!observer.is_active());
    }
}
