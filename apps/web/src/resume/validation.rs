use thiserror::Error;

use crate::models::resume::UploadFile;

/// 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_MIME_TYPES: &[&str] = &[PDF_MIME, DOCX_MIME];

/// Limit of the profile summary text area.
pub const MAX_SUMMARY_CHARS: usize = 5000;

/// Why a file was refused before anything went over the network.
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please choose a file to upload")]
    Missing,

    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },

    #[error("Please upload a PDF or DOCX file")]
    UnsupportedType { content_type: String },
}

/// Runs the pre-upload checks in order: presence, size, MIME type.
/// The first failing check wins.
pub fn validate_upload(file: Option<&UploadFile>) -> Result<&UploadFile, UploadRejection> {
    let file = file.ok_or(UploadRejection::Missing)?;

    if file.size() > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge { size: file.size() });
    }

    let mime = essence(&file.content_type);
    if !ALLOWED_MIME_TYPES.iter().any(|allowed| mime.eq_ignore_ascii_case(allowed)) {
        return Err(UploadRejection::UnsupportedType {
            content_type: file.content_type.clone(),
        });
    }

    Ok(file)
}

/// Clamps summary input to what the text area accepts.
pub fn clamp_summary(text: &str) -> String {
    text.chars().take(MAX_SUMMARY_CHARS).collect()
}

/// `application/pdf; charset=binary` → `application/pdf`
fn essence(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or_default().trim()
}
