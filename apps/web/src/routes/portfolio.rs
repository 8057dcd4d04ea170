use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::clients::endpoint;
use crate::render::{render_document, render_not_found, UiToggles};
use crate::reveal::ScriptObserver;
use crate::state::AppState;
use crate::theme::{CookieStore, ThemeController, ThemePack, ThemePackName};
use crate::view::PortfolioView;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    pub pack: Option<String>,
    pub all: Option<String>,
    pub menu: Option<String>,
}

impl ProfileQuery {
    fn toggles(&self) -> UiToggles {
        UiToggles {
            show_all_projects: self.all.as_deref() == Some("true"),
            menu_open: self.menu.as_deref() == Some("open"),
        }
    }

    fn pack_name(&self, default: ThemePackName) -> ThemePackName {
        match self.pack.as_deref().map(str::parse::<ThemePackName>) {
            Some(Ok(name)) => name,
            Some(Err(e)) => {
                debug!("{e}; using {}", default.as_str());
                default
            }
            None => default,
        }
    }
}

/// GET /profile/:username
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<ProfileQuery>,
    headers: HeaderMap,
) -> Response {
    let pack = ThemePack::named(query.pack_name(state.config.default_theme_pack));
    let preferred = ThemeController::mount(CookieStore::from_headers(&headers)).theme();

    let mut view =
        PortfolioView::<ScriptObserver>::mount(pack, preferred, Box::new(ScriptObserver::new));
    view.load(state.portfolio.as_ref(), &username).await;
    view.set_toggles(query.toggles());

    match view.render(&profile_path(&username)) {
        Some(page) => {
            let script = view
                .reveal()
                .map(|reveal| reveal.observer().script())
                .unwrap_or_default();
            Html(render_document(&page, view.pack(), &script)).into_response()
        }
        None => (StatusCode::NOT_FOUND, Html(render_not_found(view.pack()))).into_response(),
    }
}

/// Path of a profile page, with the username percent-encoded as a single segment.
fn profile_path(username: &str) -> String {
    match Url::parse("http://localhost/") {
        Ok(base) => endpoint(&base, &["profile", username]).path().to_string(),
        Err(_) => "/profile".to_string(),
    }
}
