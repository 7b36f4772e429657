//! Translation table
//!
//! Parsed form of the JSON resource: one nested object per language code,
//! addressed with dotted key paths such as `contact.form.name`.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value};
use crate::utils::errors::{FolioError, Result};

/// Read-only per-language translation tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    translations: HashMap<String, Map<String, Value>>,
}

impl TranslationTable {
    /// Parse a table from its JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a table from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(FolioError::InvalidTable(
                "top level must be an object keyed by language code".to_string()
            ));
        };

        let mut translations = HashMap::with_capacity(root.len());
        for (lang, tree) in root {
            match tree {
                Value::Object(map) => {
                    translations.insert(lang, map);
                }
                _ => {
                    return Err(FolioError::InvalidTable(
                        format!("entry for language '{}' is not an object", lang)
                    ));
                }
            }
        }

        Ok(Self { translations })
    }

    pub fn contains_language(&self, lang: &str) -> bool {
        self.translations.contains_key(lang)
    }

    /// Language codes present in the table, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Resolve a dotted key path under `lang`. Numeric segments index into lists.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.translations.get(lang)?.get(first)?;

        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i))?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Insert `value` at `key` for `lang` unless something is already there.
    /// Returns whether the value was inserted.
    pub fn insert_default(&mut self, lang: &str, key: &str, value: &str) -> bool {
        let Some(tree) = self.translations.get_mut(lang) else {
            return false;
        };

        let segments: Vec<&str> = key.split('.').collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return false;
        };

        let mut current = tree;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match entry {
                Value::Object(map) => current = map,
                _ => return false,
            }
        }

        if current.contains_key(*leaf) {
            return false;
        }
        current.insert(leaf.to_string(), Value::String(value.to_string()));
        true
    }

    /// All leaf key paths of `lang`, sorted
    pub fn key_paths(&self, lang: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Some(tree) = self.translations.get(lang) {
            collect_paths(tree, "", &mut paths);
        }
        paths
    }

    /// Key paths present in some language but missing in another
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let per_language: Vec<(&str, BTreeSet<String>)> = self
            .languages()
            .into_iter()
            .map(|lang| (lang, self.key_paths(lang)))
            .collect();

        let all: BTreeSet<&String> = per_language.iter().flat_map(|(_, paths)| paths).collect();

        per_language
            .iter()
            .filter_map(|(lang, paths)| {
                let missing: Vec<String> = all
                    .iter()
                    .filter(|path| !paths.contains(path.as_str()))
                    .map(|path| path.to_string())
                    .collect();
                (!missing.is_empty()).then(|| CoverageGap {
                    language: lang.to_string(),
                    missing,
                })
            })
            .collect()
    }

    /// Health of the table for a page serving `supported` languages
    pub fn report(&self, supported: &[String], default_language: &str) -> TableReport {
        TableReport {
            stats: self.stats(default_language),
            missing_languages: supported
                .iter()
                .filter(|lang| !self.contains_language(lang))
                .cloned()
                .collect(),
            gaps: self.coverage_gaps(),
        }
    }

    /// Printable form of the value at `key`: strings as is, anything else as pretty JSON
    pub fn display_value(&self, lang: &str, key: &str) -> Result<Option<String>> {
        match self.lookup(lang, key) {
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(value) => Ok(Some(serde_json::to_string_pretty(value)?)),
            None => Ok(None),
        }
    }

    /// Get translation statistics
    pub fn stats(&self, default_language: &str) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for lang in self.languages() {
            let key_count = self.translations.get(lang).map_or(0, count_keys);
            stats.languages.push(LanguageStats {
                code: lang.to_string(),
                key_count,
            });
            if lang == default_language {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

/// Render a leaf value as element text. Containers have no text form.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn collect_paths(obj: &Map<String, Value>, prefix: &str, out: &mut BTreeSet<String>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) => collect_paths(nested, &path, out),
            _ => {
                out.insert(path);
            }
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    let mut count = 0;
    for value in obj.values() {
        match value {
            Value::Object(nested) => count += count_keys(nested),
            _ => count += 1,
        }
    }
    count
}

/// Keys one language lacks relative to the union of all languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub language: String,
    pub missing: Vec<String>,
}

/// Key counts, absent languages and coverage gaps of a table
#[derive(Debug, Clone)]
pub struct TableReport {
    pub stats: TranslationStats,
    /// Supported languages the table has no entry for
    pub missing_languages: Vec<String>,
    pub gaps: Vec<CoverageGap>,
}

impl TableReport {
    pub fn is_healthy(&self) -> bool {
        self.missing_languages.is_empty() && self.gaps.is_empty()
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TranslationTable {
        TranslationTable::from_value(json!({
            "en": {
                "hero": { "title": "Hi", "roles": ["Developer", "Writer"] },
                "contact": { "form": { "name": "Your Name", "send": "Send" } },
                "stats": { "years": 5 }
            },
            "vi": {
                "hero": { "title": "Chào", "roles": ["Lập trình viên"] },
                "contact": { "form": { "name": "Tên của bạn" } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_nested() {
        let table = sample();
        assert_eq!(table.lookup("en", "contact.form.name"), Some(&json!("Your Name")));
        assert_eq!(table.lookup("vi", "hero.title"), Some(&json!("Chào")));
        assert_eq!(table.lookup("vi", "contact.form.send"), None);
        assert_eq!(table.lookup("fr", "hero.title"), None);
    }

    #[test]
    fn test_lookup_rejects_malformed_paths() {
        let table = sample();
        assert_eq!(table.lookup("en", ""), None);
        assert_eq!(table.lookup("en", "hero..title"), None);
        assert_eq!(table.lookup("en", "hero.title.deeper"), None);
    }

    #[test]
    fn test_lookup_indexes_lists() {
        let table = sample();
        assert_eq!(table.lookup("en", "hero.roles.1"), Some(&json!("Writer")));
        assert_eq!(table.lookup("vi", "hero.roles.0"), Some(&json!("Lập trình viên")));
        assert_eq!(table.lookup("vi", "hero.roles.1"), None);
        assert_eq!(table.lookup("en", "hero.roles.first"), None);
        assert_eq!(table.lookup("en", "hero.roles.-1"), None);
    }

    #[test]
    fn test_text_of_scalars_only() {
        let table = sample();
        assert_eq!(text_of(table.lookup("en", "stats.years").unwrap()), Some("5".to_string()));
        assert_eq!(text_of(table.lookup("en", "hero.roles").unwrap()), None);
        assert_eq!(text_of(table.lookup("en", "hero").unwrap()), None);
    }

    #[test]
    fn test_rejects_non_object_language() {
        let err = TranslationTable::from_value(json!({ "en": "nope" })).unwrap_err();
        assert!(matches!(err, FolioError::InvalidTable(_)));
        assert!(TranslationTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_insert_default_keeps_existing() {
        let mut table = sample();
        assert!(table.insert_default("vi", "loader.loading", "Đang tải"));
        assert!(!table.insert_default("vi", "loader.loading", "other"));
        assert!(!table.insert_default("vi", "hero.title.sub", "x"));
        assert!(!table.insert_default("fr", "loader.loading", "x"));
        assert_eq!(table.lookup("vi", "loader.loading"), Some(&json!("Đang tải")));
    }

    #[test]
    fn test_coverage_gaps() {
        let gaps = sample().coverage_gaps();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].language, "vi");
        assert_eq!(gaps[0].missing, vec!["contact.form.send".to_string(), "stats.years".to_string()]);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats("en");
        assert_eq!(stats.total_keys, 5);
        assert_eq!(stats.languages.len(), 2);
        assert_eq!(stats.languages[1].code, "vi");
        assert_eq!(stats.languages[1].key_count, 3);
    }
}
