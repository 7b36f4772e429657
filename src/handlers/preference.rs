//! Language selection outside a running page

use crate::config::Settings;
use crate::dom::MemoryDocument;
use crate::i18n::{ControllerState, LocalizationController, SelectOutcome, TranslationSource};
use crate::state::PreferenceStore;
use crate::utils::errors::{FolioError, Result};

/// Select `code` against `store` as a control click on a freshly loaded page
/// would: same validation, persistence and reload decision.
pub async fn select_stored_language<S: PreferenceStore>(
    settings: &Settings,
    source: &TranslationSource,
    store: S,
    code: &str,
) -> Result<SelectOutcome> {
    let mut controller = LocalizationController::new(
        &settings.i18n,
        &settings.page,
        &settings.typing,
        MemoryDocument::new(),
        store,
    );

    match controller.initialize(source).await {
        ControllerState::Ready { translations_loaded: true } => controller.select_language(code),
        _ => Err(FolioError::Resource(format!(
            "translations unavailable from {}",
            source.describe()
        ))),
    }
}
