use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Body of `GET /resume/text` and `GET /users/me`.
///
/// Both endpoints use the `resume_text` field name: on `/resume/text` it is the text extracted
/// from the uploaded file, on `/users/me` it is the hand-written profile summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeTextBody {
    #[serde(default)]
    pub resume_text: Option<String>,
}

impl ResumeTextBody {
    /// Upstream sends `""` when nothing is stored; treat that as absent.
    pub fn into_text(self) -> Option<String> {
        self.resume_text.filter(|t| !t.is_empty())
    }
}

/// Body of `PUT /users/me` when saving the profile summary.
#[derive(Debug, Serialize)]
pub struct ProfileSummaryUpdate<'a> {
    pub resume_text: &'a str,
}

/// A file picked for upload, as received from the browser.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Per-user resume state shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeState {
    pub resume_text: Option<String>,
    pub profile_summary: Option<String>,
}
