//! Loading screen progress
//!
//! Progress climbs in random increments until it reaches 100%, then the
//! overlay is hidden.

use std::time::Duration;

use rand::Rng;
use tracing::debug;
use crate::config::LoaderConfig;
use crate::dom::Document;

#[derive(Debug)]
pub struct LoadingScreen<R: Rng> {
    config: LoaderConfig,
    rng: R,
    progress: u8,
    completed: bool,
}

impl<R: Rng> LoadingScreen<R> {
    pub fn new(config: &LoaderConfig, rng: R) -> Self {
        Self {
            config: config.clone(),
            rng,
            progress: 0,
            completed: false,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Delay before the first progress step
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.config.start_delay_ms)
    }

    /// Run one step. Returns the delay until the next step, or `None` once the overlay is hidden.
    pub fn advance<D: Document>(&mut self, document: &mut D) -> Option<Duration> {
        if self.completed {
            return None;
        }

        if self.progress >= 100 {
            if let Some(screen) = document.element_by_id(&self.config.screen_id) {
                document.toggle_class(screen, &self.config.hidden_class, true);
            }
            self.completed = true;
            debug!("Loading screen hidden");
            return None;
        }

        let increment = self.rng.gen_range(1..=self.config.max_increment.max(1));
        self.progress = self.progress.saturating_add(increment).min(100);

        if let Some(node) = document.first_by_class(&self.config.percentage_class) {
            document.set_text(node, &format!("{}%", self.progress));
        }

        if self.progress < 100 {
            let min = self.config.min_step_delay_ms;
            let ms = self.rng.gen_range(min..=self.config.max_step_delay_ms.max(min));
            Some(Duration::from_millis(ms))
        } else {
            Some(Duration::from_millis(self.config.complete_delay_ms))
        }
    }
}
