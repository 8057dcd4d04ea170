//! Resume dashboard page.

use crate::render::assets::DASHBOARD_CSS;
use crate::render::document_shell;
use crate::render::format::html_escape;
use crate::resume::validation::{DOCX_MIME, MAX_SUMMARY_CHARS, PDF_MIME};
use crate::resume::ResumePageController;
use crate::theme::{ThemePack, ThemePackName};

pub fn render_resume_page(page: &ResumePageController) -> String {
    let pack = ThemePack::named(ThemePackName::Cards);
    let state = page.state();

    let notices: String = page
        .notices()
        .iter()
        .map(|notice| {
            format!(
                r#"<div class="notice notice-{}" role="status">{}</div>"#,
                notice.level.as_str(),
                html_escape(&notice.message)
            )
        })
        .collect();

    let uploading = page.uploading().is_active();
    let upload_card = format!(
        r#"<section class="card"><h2>Upload Resume</h2><p class="muted">PDF or DOCX, max 10MB</p><form class="field" method="post" action="/dashboard/resume/upload" enctype="multipart/form-data"><input type="file" name="file" accept=".pdf,.docx,{PDF_MIME},{DOCX_MIME}"><button class="primary" type="submit"{disabled}>{label}</button></form></section>"#,
        disabled = if uploading { " disabled" } else { "" },
        label = if uploading { "Uploading..." } else { "Upload" },
    );

    let summary = state.profile_summary.as_deref().unwrap_or_default();
    let saving = page.saving().is_active();
    let summary_card = format!(
        r#"<section class="card"><h2>Profile Summary</h2><form class="field" method="post" action="/dashboard/resume/summary"><textarea name="summary" maxlength="{MAX_SUMMARY_CHARS}" placeholder="Tell visitors about yourself">{text}</textarea><p class="counter">{count}/{MAX_SUMMARY_CHARS} characters</p><button class="primary" type="submit"{disabled}>{label}</button></form></section>"#,
        text = html_escape(summary),
        count = summary.chars().count(),
        disabled = if saving { " disabled" } else { "" },
        label = if saving { "Saving..." } else { "Save Summary" },
    );

    let resume_card = match state.resume_text.as_deref() {
        Some(text) => format!(
            r#"<section class="card"><h2>Extracted Resume Text</h2><div class="resume-text">{}</div></section>"#,
            html_escape(text)
        ),
        None => r#"<section class="card"><p class="empty-state">No resume uploaded yet. Upload your resume to get started!</p></section>"#.to_string(),
    };

    let body = format!(
        r#"<style>{DASHBOARD_CSS}</style><main class="dashboard"><h1>Resume</h1>{notices}{upload_card}{summary_card}{resume_card}</main>"#
    );
    document_shell("Resume | Dashboard", &pack, pack.base_mode, &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ClientError, ResumeClient, SessionToken};
    use crate::models::resume::UploadFile;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Fixed {
        resume: Option<String>,
        profile: Option<String>,
    }

    #[async_trait]
    impl ResumeClient for Fixed {
        async fn fetch_resume(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            Ok(self.resume.clone())
        }
        async fn fetch_profile(&self, _: &SessionToken) -> Result<Option<String>, ClientError> {
            Ok(self.profile.clone())
        }
        async fn upload_resume(&self, _: &SessionToken, _: &UploadFile) -> Result<(), ClientError> {
            Ok(())
        }
        async fn save_profile_summary(&self, _: &SessionToken, _: &str) -> Result<(), ClientError> {
            Ok(())
        }
    }

    async fn page(resume: Option<&str>, profile: Option<&str>) -> String {
        let client = Arc::new(Fixed {
            resume: resume.map(String::from),
            profile: profile.map(String::from),
        });
        let controller = ResumePageController::mount(client, SessionToken::new("t"))
            .await
            .unwrap();
        render_resume_page(&controller)
    }

    #[tokio::test]
    async fn test_empty_state() {
        let html = page(None, None).await;
        assert!(html.contains("No resume uploaded yet. Upload your resume to get started!"));
        assert!(html.contains("0/5000 characters"));
    }

    #[tokio::test]
    async fn test_counter_and_escaped_text() {
        let html = page(Some("<b>Senior</b> dev"), Some("Hello")).await;
        assert!(html.contains("&lt;b&gt;Senior&lt;/b&gt; dev"));
        assert!(html.contains("5/5000 characters"));
        assert!(html.contains(r#"maxlength="5000""#));
        assert!(!html.contains("No resume uploaded yet"));
    }
}
