use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::clients::{ClientError, SessionToken};
use crate::cookies::read_cookie;
use crate::errors::AppError;
use crate::models::resume::UploadFile;
use crate::render::resume_page::render_resume_page;
use crate::resume::validation::clamp_summary;
use crate::resume::ResumePageController;
use crate::state::AppState;

/// Request body limit of the upload route. Above the 10 MiB file limit so slightly oversize
/// files reach validation and get the size message.
pub const UPLOAD_BODY_LIMIT: usize = 12 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct SummaryForm {
    #[serde(default)]
    pub summary: String,
}

/// GET /dashboard/resume
pub async fn handle_resume_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let page = match open_page(&state, &headers).await? {
        Ok(page) => page,
        Err(redirect) => return Ok(redirect),
    };
    Ok(Html(render_resume_page(&page)).into_response())
}

/// POST /dashboard/resume/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut page = match open_page(&state, &headers).await? {
        Ok(page) => page,
        Err(redirect) => return Ok(redirect),
    };

    let file = read_upload(multipart).await?;
    if let Err(ClientError::Unauthorized) = page.upload(file).await {
        return Ok(to_login(&state));
    }
    Ok(Html(render_resume_page(&page)).into_response())
}

/// POST /dashboard/resume/summary
pub async fn handle_save_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SummaryForm>,
) -> Result<Response, AppError> {
    let mut page = match open_page(&state, &headers).await? {
        Ok(page) => page,
        Err(redirect) => return Ok(redirect),
    };

    if let Err(ClientError::Unauthorized) = page.save_summary(clamp_summary(&form.summary)).await {
        return Ok(to_login(&state));
    }
    Ok(Html(render_resume_page(&page)).into_response())
}

/// Mounts the page controller for the signed-in visitor.
/// The inner `Err` is a redirect to login, for a missing or rejected session.
async fn open_page(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Result<ResumePageController, Response>, AppError> {
    let Some(token) = read_cookie(headers, &state.config.session_cookie) else {
        debug!("No session cookie; redirecting to login");
        return Ok(Err(to_login(state)));
    };

    match ResumePageController::mount(state.resume.clone(), SessionToken::new(token)).await {
        Ok(page) => Ok(Ok(page)),
        Err(ClientError::Unauthorized) => {
            info!("Session rejected upstream; redirecting to login");
            Ok(Err(to_login(state)))
        }
        Err(e) => Err(AppError::Upstream(e)),
    }
}

fn to_login(state: &AppState) -> Response {
    Redirect::to(&state.config.login_url).into_response()
}

/// Reads the `file` field. A field without a file name and without content means
/// nothing was picked.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        if file_name.is_empty() && bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(UploadFile {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}
