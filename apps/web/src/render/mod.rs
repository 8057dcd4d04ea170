//! Portfolio renderer. Pure: the same inputs always produce the same HTML.
//!
//! Rendering runs in two steps. `render_portfolio` produces the page body and the list of
//! reveal targets it contains; the caller attaches those targets to a `RevealController` and
//! then wraps the body with `render_document`, passing whatever script the observer needs.

pub mod assets;
pub mod format;
pub mod resume_page;
mod sections;

use crate::models::portfolio::PortfolioRecord;
use crate::reveal::{RevealState, SectionId};
use crate::theme::{ThemeMode, ThemePack};

use self::format::html_escape;

/// UI-only switches. Carried in the query string, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiToggles {
    pub show_all_projects: bool,
    pub menu_open: bool,
}

/// Last known pointer position, for the cursor-glow pack.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

pub struct RenderContext<'a> {
    pub record: &'a PortfolioRecord,
    pub reveal: &'a RevealState,
    /// Resolved mode; see `ThemePack::resolve_mode`.
    pub theme: ThemeMode,
    pub toggles: UiToggles,
    pub pack: &'a ThemePack,
    pub pointer: Option<PointerPosition>,
    /// Path this page is served under, e.g. `/profile/octocat`.
    pub page_path: &'a str,
}

impl RenderContext<'_> {
    /// Link to this page with the given toggles.
    pub fn href(&self, toggles: UiToggles) -> String {
        let mut href = format!("{}?pack={}", self.page_path, self.pack.name.as_str());
        if toggles.show_all_projects {
            href.push_str("&all=true");
        }
        if toggles.menu_open {
            href.push_str("&menu=open");
        }
        href
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub theme: ThemeMode,
    pub body: String,
    /// Every `data-reveal` target in `body`, in document order.
    pub reveal_targets: Vec<SectionId>,
}

/// Collects reveal targets while sections are rendered.
pub(crate) struct Marks<'a> {
    state: &'a RevealState,
    targets: Vec<SectionId>,
}

impl<'a> Marks<'a> {
    fn new(state: &'a RevealState) -> Self {
        Self {
            state,
            targets: Vec::new(),
        }
    }

    /// Opening tag of a reveal target.
    pub(crate) fn open(&mut self, tag: &str, id: &str, classes: &str, delay_ms: u64) -> String {
        let target = SectionId::new(id);
        let visible = if self.state.is_visible(&target) {
            " is-visible"
        } else {
            ""
        };
        let extra = if classes.is_empty() {
            String::new()
        } else {
            format!(" {classes}")
        };
        let style = if delay_ms > 0 {
            format!(r#" style="transition-delay:{delay_ms}ms""#)
        } else {
            String::new()
        };
        self.targets.push(target);
        format!(
            r#"<{tag} class="reveal{visible}{extra}" data-reveal="{}"{style}>"#,
            html_escape(id)
        )
    }
}

pub fn render_portfolio(ctx: &RenderContext) -> RenderedPage {
    let mut marks = Marks::new(ctx.reveal);
    let mut body = String::new();

    body.push_str(&sections::backdrop(ctx));
    body.push_str(&sections::nav(ctx));
    body.push_str(r#"<main class="page">"#);
    body.push_str(&sections::hero(ctx, &mut marks));
    body.push_str(&sections::about(ctx, &mut marks));
    body.push_str(&sections::journey(ctx, &mut marks));
    body.push_str(&sections::skills(ctx, &mut marks));
    body.push_str(&sections::projects(ctx, &mut marks));
    body.push_str(&sections::footer(ctx, &mut marks));
    body.push_str("</main>");

    RenderedPage {
        title: format!("{} | Portfolio", ctx.record.user.github_username),
        theme: ctx.theme,
        body,
        reveal_targets: marks.targets,
    }
}

/// Full HTML document around a rendered body.
pub fn render_document(page: &RenderedPage, pack: &ThemePack, reveal_script: &str) -> String {
    let mut scripts = String::new();
    if !reveal_script.is_empty() {
        scripts.push_str(&format!("<script>{reveal_script}</script>"));
    }
    if pack.cursor_glow {
        scripts.push_str(&format!("<script>{}</script>", assets::POINTER_SCRIPT));
    }

    document_shell(
        &page.title,
        pack,
        page.theme,
        &page.body,
        &scripts,
    )
}

/// The single failure state of the portfolio view.
pub fn render_not_found(pack: &ThemePack) -> String {
    let body = r#"<main class="page page-center"><div class="card not-found"><h2>Portfolio Not Found</h2><p class="muted">The portfolio you're looking for doesn't exist.</p></div></main>"#;
    document_shell("Portfolio Not Found", pack, pack.base_mode, body, "")
}

pub(crate) fn document_shell(
    title: &str,
    pack: &ThemePack,
    theme: ThemeMode,
    body: &str,
    scripts: &str,
) -> String {
    let root_vars = pack.palette_for(pack.base_mode).css_variables();
    let alternate_vars = if pack.supports_toggle() {
        let mode = pack.base_mode.toggled();
        format!(
            r#":root[data-theme="{}"]{{{}}}"#,
            mode.as_str(),
            pack.palette_for(mode).css_variables()
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}" data-pack="{pack_name}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>:root{{{root_vars}--heading-font:{heading_font};--body-font:{body_font};}}{alternate_vars}{base_css}{pack_css}</style>
<noscript><style>.reveal{{opacity:1;transform:none}}</style></noscript>
</head>
<body>
{body}
{scripts}
</body>
</html>"#,
        theme = theme.as_str(),
        pack_name = pack.name.as_str(),
        title = html_escape(title),
        heading_font = pack.heading_font,
        body_font = pack.body_font,
        base_css = assets::BASE_CSS,
        pack_css = assets::pack_css(pack.name),
    )
}
