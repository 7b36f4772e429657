//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

/// Leading icon markup of a button label, up to and including the first `</i>`
pub fn icon_prefix(html: &str) -> Option<&str> {
    const CLOSE: &str = "</i>";
    html.find(CLOSE).map(|idx| &html[..idx + CLOSE.len()])
}

/// Replace a button's label while keeping its leading icon
pub fn relabel_with_icon(html: &str, label: &str) -> String {
    match icon_prefix(html) {
        Some(icon) => format!("{} {}", icon, label),
        None => label.to_string(),
    }
}

/// Remove markup tags, keeping text content
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escape text so it can be stored as markup
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inverse of [`escape_html`]
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// First `n` characters of `text`
pub fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}
