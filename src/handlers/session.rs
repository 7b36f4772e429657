//! Page session loop
//!
//! Runs the translation fetch, the page timers and the host's events on a
//! single task. All controller mutation happens here, one callback at a
//! time, so nothing needs locking.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};
use crate::config::{PageConfig, Settings};
use crate::dom::Document;
use crate::effects::LoadingScreen;
use crate::i18n::{load_table, ControllerState, LocalizationController, SelectOutcome, TranslationSource};
use crate::state::PreferenceStore;
use crate::utils::logging::log_table_failure;
use super::{PageEvent, PageHost};

/// Stand-in deadline for disabled timers
const IDLE: Duration = Duration::from_secs(3600);

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Reloaded,
    Closed,
}

#[derive(Debug, Default)]
struct Deadlines {
    refresh: Option<Instant>,
    typing: Option<Instant>,
    loader: Option<Instant>,
    page_loaded: Option<Instant>,
    reload: Option<Instant>,
}

fn at(deadline: Option<Instant>) -> Instant {
    deadline.unwrap_or_else(|| Instant::now() + IDLE)
}

pub struct Session<D, S, H, R: Rng> {
    controller: LocalizationController<D, S>,
    loading: LoadingScreen<R>,
    host: H,
    page: PageConfig,
    fetch_timeout: Duration,
    typing_start: Duration,
}

impl<D, S, H, R> Session<D, S, H, R>
where
    D: Document,
    S: PreferenceStore,
    H: PageHost,
    R: Rng,
{
    pub fn new(settings: &Settings, document: D, store: S, host: H, rng: R) -> Self {
        Self {
            controller: LocalizationController::new(&settings.i18n, &settings.page, &settings.typing, document, store),
            loading: LoadingScreen::new(&settings.loader, rng),
            host,
            page: settings.page.clone(),
            fetch_timeout: settings.i18n.fetch_timeout(),
            typing_start: Duration::from_millis(settings.typing.start_delay_ms),
        }
    }

    pub fn controller(&self) -> &LocalizationController<D, S> {
        &self.controller
    }

    pub fn loading(&self) -> &LoadingScreen<R> {
        &self.loading
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Drive the page until it reloads or the host closes it
    pub async fn run(&mut self, source: &TranslationSource, mut events: mpsc::Receiver<PageEvent>) -> SessionEnd {
        let start = Instant::now();
        let mut deadlines = Deadlines {
            typing: Some(start + self.typing_start),
            loader: Some(start + self.loading.start_delay()),
            page_loaded: Some(start + self.page.loaded_delay()),
            ..Default::default()
        };

        let fetch = load_table(source, self.fetch_timeout);
        tokio::pin!(fetch);
        let mut fetching = true;

        loop {
            tokio::select! {
                biased;

                _ = sleep_until(at(deadlines.reload)), if deadlines.reload.is_some() => {
                    info!(language = %self.controller.active_language(), "Reloading page");
                    self.host.reload();
                    return SessionEnd::Reloaded;
                }
                loaded = &mut fetch, if fetching => {
                    fetching = false;
                    let table = match loaded {
                        Ok(table) => Some(table),
                        Err(e) => {
                            log_table_failure(&source.describe(), &e);
                            None
                        }
                    };
                    let state = self.controller.complete_initialization(table);
                    if state == (ControllerState::Ready { translations_loaded: true }) {
                        deadlines.refresh = Some(Instant::now() + self.page.refresh_delay());
                    }
                }
                event = events.recv() => match event {
                    None | Some(PageEvent::Close) => {
                        debug!("Page closed");
                        return SessionEnd::Closed;
                    }
                    Some(event) => self.handle_event(event, &mut deadlines),
                },
                _ = sleep_until(at(deadlines.refresh)), if deadlines.refresh.is_some() => {
                    deadlines.refresh = None;
                    if self.controller.refresh_typing() {
                        deadlines.typing = Some(Instant::now());
                    }
                }
                _ = sleep_until(at(deadlines.typing)), if deadlines.typing.is_some() => {
                    let delay = self.controller.tick_typing();
                    deadlines.typing = Some(Instant::now() + delay);
                }
                _ = sleep_until(at(deadlines.loader)), if deadlines.loader.is_some() => {
                    deadlines.loader = self
                        .loading
                        .advance(self.controller.document_mut())
                        .map(|delay| Instant::now() + delay);
                }
                _ = sleep_until(at(deadlines.page_loaded)), if deadlines.page_loaded.is_some() => {
                    deadlines.page_loaded = None;
                    self.controller.mark_page_loaded();
                }
            }
        }
    }

    fn handle_event(&mut self, event: PageEvent, deadlines: &mut Deadlines) {
        let code = match event {
            PageEvent::Click { element_id } => match self.controller.control_language(&element_id) {
                Some(code) => code.to_string(),
                None => {
                    debug!(element_id = %element_id, "Click outside language controls");
                    return;
                }
            },
            PageEvent::SelectLanguage(code) => code,
            PageEvent::Close => return,
        };

        match self.controller.select_language(&code) {
            Ok(SelectOutcome::Applied(report)) => {
                debug!(updated = report.updated, missed = report.missing.len(), "Language applied");
                deadlines.typing = Some(Instant::now());
            }
            Ok(SelectOutcome::ReloadScheduled { delay }) => {
                deadlines.reload = Some(Instant::now() + delay);
            }
            Ok(SelectOutcome::ReloadPending) | Ok(SelectOutcome::Ignored) => {}
            Err(e) => {
                warn!(code = %code, error = %e, severity = %e.severity(), "Language selection rejected");
            }
        }
    }
}
