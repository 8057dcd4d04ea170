//! Lifecycle of one portfolio view: loading, reveal wiring, pointer tracking and UI toggles.

use tracing::{info, warn};

use crate::clients::{ClientError, PortfolioClient};
use crate::models::portfolio::PortfolioRecord;
use crate::render::{render_portfolio, PointerPosition, RenderContext, RenderedPage, UiToggles};
use crate::reveal::{IntersectionEntry, RevealController, RevealState, SectionId, VisibilityObserver};
use crate::theme::{ThemeMode, ThemePack};

/// Identifies one load; only the latest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    /// Not found and transient failures alike.
    Failed,
}

pub type ObserverFactory<O> = Box<dyn FnMut() -> O + Send>;

pub struct PortfolioView<O: VisibilityObserver> {
    pack: ThemePack,
    theme: ThemeMode,
    toggles: UiToggles,
    pointer: Option<PointerPosition>,
    username: Option<String>,
    next_ticket: u64,
    current: Option<LoadTicket>,
    status: LoadStatus,
    record: Option<PortfolioRecord>,
    reveal: Option<RevealController<O>>,
    make_observer: ObserverFactory<O>,
    mounted: bool,
}

impl<O: VisibilityObserver> PortfolioView<O> {
    /// `preferred` is the visitor's theme; packs without a toggle override it.
    pub fn mount(pack: ThemePack, preferred: ThemeMode, make_observer: ObserverFactory<O>) -> Self {
        let theme = pack.resolve_mode(preferred);
        Self {
            pack,
            theme,
            toggles: UiToggles::default(),
            pointer: None,
            username: None,
            next_ticket: 0,
            current: None,
            status: LoadStatus::Idle,
            record: None,
            reveal: None,
            make_observer,
            mounted: true,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn record(&self) -> Option<&PortfolioRecord> {
        self.record.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn pack(&self) -> &ThemePack {
        &self.pack
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggles(&self) -> UiToggles {
        self.toggles
    }

    pub fn set_toggles(&mut self, toggles: UiToggles) {
        self.toggles = toggles;
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn reveal(&self) -> Option<&RevealController<O>> {
        self.reveal.as_ref()
    }

    /// Switches to another username. The previous record and reveal controller are dropped
    /// and any load still in flight becomes stale.
    pub fn navigate(&mut self, username: &str) -> LoadTicket {
        self.dispose_reveal();
        self.record = None;
        self.toggles = UiToggles::default();
        self.username = Some(username.to_string());

        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.current = Some(ticket);
        self.status = LoadStatus::Loading;
        ticket
    }

    /// Applies a finished load. Returns `false` when the result was discarded because the view
    /// navigated away or unmounted meanwhile.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PortfolioRecord, ClientError>,
    ) -> bool {
        if !self.mounted || self.current != Some(ticket) {
            info!("Discarding stale portfolio load {ticket:?}");
            return false;
        }
        self.current = None;

        match result {
            Ok(record) => {
                self.record = Some(record);
                self.reveal = Some(RevealController::new(
                    (self.make_observer)(),
                    self.pack.reveal,
                ));
                self.status = LoadStatus::Ready;
            }
            Err(ClientError::NotFound) => {
                info!("Portfolio '{}' not found", self.username.as_deref().unwrap_or_default());
                self.status = LoadStatus::Failed;
            }
            Err(e) => {
                warn!(
                    "Failed to load portfolio '{}': {e}",
                    self.username.as_deref().unwrap_or_default()
                );
                self.status = LoadStatus::Failed;
            }
        }
        true
    }

    /// Navigates to `username` and waits for its record.
    pub async fn load(&mut self, client: &dyn PortfolioClient, username: &str) -> bool {
        let ticket = self.navigate(username);
        let result = client.fetch_portfolio(username).await;
        self.complete_load(ticket, result)
    }

    /// Renders the loaded record and attaches its reveal targets.
    /// `None` unless the view is mounted and ready.
    pub fn render(&mut self, page_path: &str) -> Option<RenderedPage> {
        if !self.mounted {
            return None;
        }
        let record = self.record.as_ref()?;
        let empty = RevealState::default();
        let reveal_state = self.reveal.as_ref().map(|r| r.state()).unwrap_or(&empty);

        let ctx = RenderContext {
            record,
            reveal: reveal_state,
            theme: self.theme,
            toggles: self.toggles,
            pack: &self.pack,
            pointer: self.pointer,
            page_path,
        };
        let page = render_portfolio(&ctx);

        if let Some(reveal) = self.reveal.as_mut() {
            reveal.attach(page.reveal_targets.iter().cloned());
        }
        Some(page)
    }

    /// Forwards intersection observations to the reveal controller.
    pub fn handle_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<SectionId> {
        match self.reveal.as_mut() {
            Some(reveal) if self.mounted => reveal.handle(entries),
            _ => Vec::new(),
        }
    }

    /// Records the pointer position for the cursor glow.
    /// Ignored once unmounted and for packs without a glow.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        if !self.mounted || !self.pack.cursor_glow {
            return false;
        }
        self.pointer = Some(PointerPosition { x, y });
        true
    }

    /// Tears the view down. Loads still in flight are discarded when they complete.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.dispose_reveal();
        self.pointer = None;
        self.mounted = false;
    }

    fn dispose_reveal(&mut self) {
        if let Some(mut reveal) = self.reveal.take() {
            reveal.dispose();
        }
    }
}

impl<O: VisibilityObserver> Drop for PortfolioView<O> {
    fn drop(&mut self) {
        self.unmount();
    }
}
