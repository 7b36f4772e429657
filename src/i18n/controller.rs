//! Localization controller
//!
//! Single authority for the active language. It projects the translation
//! table onto tagged document elements, keeps the language controls in sync,
//! persists the chosen language and drives the typing animation.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};
use crate::config::{I18nConfig, PageConfig, TypingConfig};
use crate::dom::{Document, NodeId, Selector};
use crate::effects::TypingAnimator;
use crate::state::PreferenceStore;
use crate::utils::errors::{FolioError, Result};
use crate::utils::helpers::relabel_with_icon;
use crate::utils::logging::{log_apply_pass, log_language_change, log_table_failure, log_translation_miss};
use super::loader::{load_table, TranslationSource};
use super::table::{text_of, TranslationTable};

/// Contact form fields with translated placeholders: tag and `name` attribute,
/// which is also the key under `contact.form`
const FORM_FIELDS: &[(&str, &str)] = &[
    ("input", "name"),
    ("input", "email"),
    ("input", "subject"),
    ("textarea", "message"),
];

/// Lifecycle of the controller within one page session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    /// `translations_loaded` is false when the table failed to load; the controller is then inert
    Ready { translations_loaded: bool },
    /// A reload is scheduled; the session ends when it fires
    Reloading,
}

impl ControllerState {
    fn name(&self) -> &'static str {
        match self {
            ControllerState::Uninitialized => "uninitialized",
            ControllerState::Ready { translations_loaded: true } => "ready",
            ControllerState::Ready { translations_loaded: false } => "inert",
            ControllerState::Reloading => "reloading",
        }
    }
}

/// Result of one rendering pass over the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Tagged elements whose text was replaced
    pub updated: usize,
    /// Keys that did not resolve to text, in document order
    pub missing: Vec<String>,
    /// Placeholders and button labels written on the contact form
    pub form_fields: usize,
}

/// What a language selection did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Rendered in place
    Applied(ApplyReport),
    /// Persisted; the page must reload after `delay`
    ReloadScheduled { delay: Duration },
    /// Persisted while an earlier reload is still pending
    ReloadPending,
    /// The controller is inert, nothing happened
    Ignored,
}

/// A wired language control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageControl {
    pub node: NodeId,
    pub element_id: String,
    pub language: String,
}

pub struct LocalizationController<D, S> {
    i18n: I18nConfig,
    page: PageConfig,
    table: Option<TranslationTable>,
    active: String,
    state: ControllerState,
    controls: Vec<LanguageControl>,
    typing: TypingAnimator,
    document: D,
    store: S,
}

impl<D: Document, S: PreferenceStore> LocalizationController<D, S> {
    pub fn new(i18n: &I18nConfig, page: &PageConfig, typing: &TypingConfig, document: D, store: S) -> Self {
        Self {
            i18n: i18n.clone(),
            page: page.clone(),
            table: None,
            active: i18n.default_language.clone(),
            state: ControllerState::Uninitialized,
            controls: Vec::new(),
            typing: TypingAnimator::new(typing, &page.typing_class),
            document,
            store,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    pub fn table(&self) -> Option<&TranslationTable> {
        self.table.as_ref()
    }

    pub fn controls(&self) -> &[LanguageControl] {
        &self.controls
    }

    pub fn typing(&self) -> &TypingAnimator {
        &self.typing
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the table and bring the controller to Ready. Never fails: a
    /// fetch or parse error leaves the controller inert.
    pub async fn initialize(&mut self, source: &TranslationSource) -> ControllerState {
        let loaded = load_table(source, self.i18n.fetch_timeout()).await;
        if let Err(e) = &loaded {
            log_table_failure(&source.describe(), e);
        }
        self.complete_initialization(loaded.ok())
    }

    /// Second half of [`initialize`](Self::initialize), for hosts that fetch concurrently
    pub fn complete_initialization(&mut self, table: Option<TranslationTable>) -> ControllerState {
        if self.state != ControllerState::Uninitialized {
            warn!(state = self.state.name(), "Controller already initialized");
            return self.state;
        }

        let Some(table) = table else {
            self.state = ControllerState::Ready { translations_loaded: false };
            return self.state;
        };
        self.table = Some(table);

        self.active = match self.read_preference() {
            Some(saved) if self.i18n.is_language_supported(&saved) => saved,
            Some(saved) => {
                warn!(saved = %saved, fallback = %self.i18n.default_language, "Persisted language is not supported");
                self.i18n.default_language.clone()
            }
            None => self.i18n.default_language.clone(),
        };

        self.apply_to_document();
        self.wire_controls();
        self.update_button_states();

        self.state = ControllerState::Ready { translations_loaded: true };
        info!(language = %self.active, controls = self.controls.len(), "Localization ready");
        self.state
    }

    /// Switch to `code`. Unknown codes are rejected without any state change.
    pub fn select_language(&mut self, code: &str) -> Result<SelectOutcome> {
        if !self.i18n.is_language_supported(code) {
            warn!(code = code, supported = ?self.i18n.supported_languages, "Rejected unsupported language");
            return Err(FolioError::UnsupportedLanguage { code: code.to_string() });
        }

        match self.state {
            ControllerState::Uninitialized => Err(FolioError::InvalidStateTransition {
                from: self.state.name().to_string(),
                to: "ready".to_string(),
            }),
            ControllerState::Ready { translations_loaded: false } => {
                debug!(code = code, "Language selection ignored, no translations loaded");
                Ok(SelectOutcome::Ignored)
            }
            ControllerState::Reloading => {
                self.persist(code)?;
                self.active = code.to_string();
                debug!(code = code, "Reload already pending, preference updated");
                Ok(SelectOutcome::ReloadPending)
            }
            ControllerState::Ready { translations_loaded: true } => {
                let previous = self.read_preference();
                self.persist(code)?;
                self.active = code.to_string();

                match previous.as_deref() {
                    Some(prev) if prev != code => {
                        log_language_change(Some(prev), code, true);
                        self.show_loading();
                        self.state = ControllerState::Reloading;
                        Ok(SelectOutcome::ReloadScheduled { delay: self.page.reload_delay() })
                    }
                    _ => {
                        log_language_change(previous.as_deref(), code, false);
                        let report = self.apply_to_document();
                        self.update_button_states();
                        self.refresh_typing();
                        Ok(SelectOutcome::Applied(report))
                    }
                }
            }
        }
    }

    /// Resolve a dotted key under the active language, logging one warning on a miss
    pub fn get_translation(&self, key: &str) -> Option<&Value> {
        resolve(self.table.as_ref(), &self.active, key)
    }

    /// Rewrite every tagged element and the contact form from the active language
    pub fn apply_to_document(&mut self) -> ApplyReport {
        let mut report = ApplyReport::default();
        let Some(table) = self.table.as_ref() else {
            return report;
        };

        for node in self.document.query_attribute(&self.page.key_attribute) {
            let Some(key) = self.document.attribute(node, &self.page.key_attribute) else {
                continue;
            };
            match resolve(Some(table), &self.active, &key).map(|value| (value, text_of(value))) {
                Some((_, Some(text))) => {
                    self.document.set_text(node, &text);
                    report.updated += 1;
                }
                Some((value, None)) => {
                    warn!(key = %key, kind = value_kind(value), "Translation is not text, element left unchanged");
                    report.missing.push(key);
                }
                None => report.missing.push(key),
            }
        }

        report.form_fields = apply_form(&mut self.document, &self.page.contact_form_id, table, &self.active);

        log_apply_pass(&self.active, report.updated, report.missing.len());
        report
    }

    /// Mark the active language's control, unmark the others
    pub fn update_button_states(&mut self) {
        for control in &self.controls {
            let active = control.language == self.active;
            self.document.toggle_class(control.node, &self.page.active_class, active);
        }
    }

    /// Restart the typing animation with the active language's roles.
    /// Returns whether the animation was restarted.
    pub fn refresh_typing(&mut self) -> bool {
        let roles = match self.get_translation(&self.page.roles_key) {
            Some(Value::Array(items)) => items.iter().filter_map(text_of).collect::<Vec<_>>(),
            Some(other) => {
                warn!(key = %self.page.roles_key, kind = value_kind(other), "Roles entry is not a list");
                return false;
            }
            None => return false,
        };
        self.typing.restart(roles)
    }

    /// Render the next typing frame; returns the delay until the following one
    pub fn tick_typing(&mut self) -> Duration {
        self.typing.render(&mut self.document)
    }

    /// Language bound to a wired control, by element id
    pub fn control_language(&self, element_id: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.element_id == element_id)
            .map(|c| c.language.as_str())
    }

    /// Flag the page as loaded (hides the loading overlay), unless a reload is pending
    pub fn mark_page_loaded(&mut self) {
        if self.state == ControllerState::Reloading {
            return;
        }
        let root = self.document.root();
        self.document.toggle_class(root, &self.page.loaded_class, true);
    }

    fn show_loading(&mut self) {
        let root = self.document.root();
        self.document.toggle_class(root, &self.page.loaded_class, false);
    }

    fn wire_controls(&mut self) {
        self.controls.clear();
        for lang in &self.i18n.supported_languages {
            let element_id = self.page.control_id(lang);
            match self.document.element_by_id(&element_id) {
                Some(node) => self.controls.push(LanguageControl {
                    node,
                    element_id,
                    language: lang.clone(),
                }),
                None => warn!(element_id = %element_id, "Language control not found"),
            }
        }
    }

    fn read_preference(&self) -> Option<String> {
        match self.store.get(&self.i18n.preference_key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not read language preference");
                None
            }
        }
    }

    fn persist(&mut self, code: &str) -> Result<()> {
        self.store.set(&self.i18n.preference_key, code)
    }
}

fn resolve<'a>(table: Option<&'a TranslationTable>, lang: &str, key: &str) -> Option<&'a Value> {
    let found = table.and_then(|t| t.lookup(lang, key));
    if found.is_none() {
        log_translation_miss(key, lang);
    }
    found
}

/// Translate the contact form placeholders and submit label. Returns how many were written.
fn apply_form<D: Document>(document: &mut D, form_id: &str, table: &TranslationTable, lang: &str) -> usize {
    let Some(form) = document.element_by_id(form_id) else {
        return 0;
    };
    let mut written = 0;

    for (tag, name) in FORM_FIELDS {
        let Some(node) = document.find_within(form, &Selector::with_attribute(tag, "name", name)) else {
            continue;
        };
        let key = format!("contact.form.{}", name);
        if let Some(text) = resolve(Some(table), lang, &key).and_then(text_of) {
            document.set_attribute(node, "placeholder", &text);
            written += 1;
        }
    }

    if let Some(button) = document.find_within(form, &Selector::with_attribute("button", "type", "submit")) {
        if let Some(text) = resolve(Some(table), lang, "contact.form.send").and_then(text_of) {
            let html = document.inner_html(button).unwrap_or_default();
            document.set_inner_html(button, &relabel_with_icon(&html, &text));
            written += 1;
        }
    }

    written
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
