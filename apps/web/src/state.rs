use std::sync::Arc;

use crate::clients::{PortfolioClient, ResumeClient};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub portfolio: Arc<dyn PortfolioClient>,
    pub resume: Arc<dyn ResumeClient>,
}
