//! Typing-text animation of the hero roles
//!
//! One role is typed out character by character, held, deleted, and the
//! next role follows. All counters live in [`TypingAnimator`]; the
//! localization controller restarts it with translated roles.

use std::time::Duration;

use tracing::{debug, warn};
use crate::config::TypingConfig;
use crate::dom::Document;
use crate::utils::helpers::char_prefix;

/// One rendered frame and the delay until the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    config: TypingConfig,
    target_class: String,
    roles: Vec<String>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingAnimator {
    pub fn new(config: &TypingConfig, target_class: &str) -> Self {
        Self {
            config: config.clone(),
            target_class: target_class.to_string(),
            roles: non_empty(config.default_roles.clone()),
            role_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Replace the roles and start over from the first character of the first role.
    /// Returns `false` and keeps the current roles when `roles` has no non-empty entry.
    pub fn restart(&mut self, roles: Vec<String>) -> bool {
        let roles = non_empty(roles);
        if roles.is_empty() {
            warn!("Typing animation restart ignored: no roles");
            return false;
        }

        debug!(roles = roles.len(), "Typing animation restarted");
        self.roles = roles;
        self.role_index = 0;
        self.char_index = 0;
        self.deleting = false;
        true
    }

    /// Advance one frame
    pub fn step(&mut self) -> TypingFrame {
        let Some(role) = self.roles.get(self.role_index) else {
            return TypingFrame {
                text: String::new(),
                next_delay: self.delay(self.config.hold_delay_ms),
            };
        };
        let role_len = role.chars().count();

        let text = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            char_prefix(role, self.char_index)
        } else {
            self.char_index = (self.char_index + 1).min(role_len);
            char_prefix(role, self.char_index)
        };

        let next_delay = if !self.deleting && self.char_index == role_len {
            self.deleting = true;
            self.delay(self.config.hold_delay_ms)
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            self.delay(self.config.next_role_delay_ms)
        } else if self.deleting {
            self.delay(self.config.delete_delay_ms)
        } else {
            self.delay(self.config.type_delay_ms)
        };

        TypingFrame { text, next_delay }
    }

    /// Advance one frame and write it to the typing element, if the page has one
    pub fn render<D: Document>(&mut self, document: &mut D) -> Duration {
        let frame = self.step();
        if let Some(node) = document.first_by_class(&self.target_class) {
            document.set_text(node, &frame.text);
        }
        frame.next_delay
    }

    fn delay(&self, ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}

fn non_empty(roles: Vec<String>) -> Vec<String> {
    roles.into_iter().filter(|r| !r.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::dom::{Element, MemoryDocument};

    fn animator(roles: &[&str]) -> TypingAnimator {
        let mut config = Settings::default().typing;
        config.default_roles = roles.iter().map(|r| r.to_string()).collect();
        TypingAnimator::new(&config, "typing-text")
    }

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut typing = animator(&["ab", "c"]);

        assert_eq!(typing.step(), TypingFrame { text: "a".into(), next_delay: Duration::from_millis(100) });
        assert_eq!(typing.step(), TypingFrame { text: "ab".into(), next_delay: Duration::from_millis(2000) });
        assert!(typing.is_deleting());
        assert_eq!(typing.step(), TypingFrame { text: "a".into(), next_delay: Duration::from_millis(50) });
        assert_eq!(typing.step(), TypingFrame { text: "".into(), next_delay: Duration::from_millis(500) });
        assert_eq!(typing.role_index(), 1);
        assert_eq!(typing.step(), TypingFrame { text: "c".into(), next_delay: Duration::from_millis(2000) });
        typing.step();
        assert_eq!(typing.role_index(), 0);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut typing = animator(&["Developer"]);
        typing.step();
        typing.step();

        assert!(typing.restart(vec!["Lập trình viên".into(), String::new()]));
        assert_eq!(typing.roles(), &["Lập trình viên".to_string()]);
        assert_eq!(typing.char_index(), 0);
        assert_eq!(typing.role_index(), 0);
        assert!(!typing.is_deleting());
        assert_eq!(typing.step().text, "L");
    }

    #[test]
    fn test_restart_with_no_roles_keeps_previous() {
        let mut typing = animator(&["Developer"]);
        assert!(!typing.restart(vec![String::new()]));
        assert_eq!(typing.roles(), &["Developer".to_string()]);
    }

    #[test]
    fn test_multibyte_roles_step_by_character() {
        let mut typing = animator(&["Đà"]);
        assert_eq!(typing.step().text, "Đ");
        assert_eq!(typing.step().text, "Đà");
    }

    #[test]
    fn test_render_writes_typing_element() {
        let mut doc = MemoryDocument::new();
        let body = doc.root();
        let node = doc.append(body, Element::new("span").class("typing-text"));
        let mut typing = animator(&["Hi"]);

        let delay = typing.render(&mut doc);
        assert_eq!(delay, Duration::from_millis(100));
        assert_eq!(doc.text(node).as_deref(), Some("H"));
    }

    #[test]
    fn test_no_roles_holds_empty() {
        let mut typing = animator(&[]);
        assert_eq!(typing.step().text, "");
    }
}
