//! Property tests for dotted-path lookup and default merging

use folio::TranslationTable;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Nest `leaf` under `path`, outermost segment first
fn nest(path: &[String], leaf: Value) -> Value {
    path.iter().rev().fold(leaf, |inner, segment| {
        let mut map = Map::new();
        map.insert(segment.clone(), inner);
        Value::Object(map)
    })
}

proptest! {
    #[test]
    fn nested_value_is_found_at_its_dotted_path(
        path in prop::collection::vec(segment(), 1..5),
        text in "\\PC{0,24}",
    ) {
        let expected = json!(text);
        let table = TranslationTable::from_value(json!({ "en": nest(&path, expected.clone()) })).unwrap();
        let key = path.join(".");

        prop_assert_eq!(table.lookup("en", &key), Some(&expected));
        prop_assert_eq!(table.lookup("vi", &key), None);
    }

    #[test]
    fn extending_a_leaf_path_misses(
        path in prop::collection::vec(segment(), 1..5),
        extra in segment(),
    ) {
        let table = TranslationTable::from_value(json!({ "en": nest(&path, json!("leaf")) })).unwrap();
        let key = format!("{}.{}", path.join("."), extra);

        prop_assert_eq!(table.lookup("en", &key), None);
    }

    #[test]
    fn empty_segments_never_resolve(path in prop::collection::vec(segment(), 2..5)) {
        let table = TranslationTable::from_value(json!({ "en": nest(&path, json!("leaf")) })).unwrap();
        let joined = path.join(".");

        prop_assert_eq!(table.lookup("en", &format!("{}.", joined)), None);
        prop_assert_eq!(table.lookup("en", &format!(".{}", joined)), None);
        prop_assert_eq!(table.lookup("en", &joined.replacen('.', "..", 1)), None);
    }

    #[test]
    fn insert_default_never_overwrites(
        path in prop::collection::vec(segment(), 1..4),
        existing in "[A-Za-z ]{1,16}",
        fallback in "[A-Za-z ]{1,16}",
    ) {
        let expected = json!(existing);
        let mut table = TranslationTable::from_value(json!({ "en": nest(&path, expected.clone()) })).unwrap();
        let key = path.join(".");

        prop_assert!(!table.insert_default("en", &key, &fallback));
        prop_assert_eq!(table.lookup("en", &key), Some(&expected));
    }

    #[test]
    fn numeric_segments_index_lists(
        path in prop::collection::vec(segment(), 1..4),
        items in prop::collection::vec("[A-Za-z ]{1,16}", 1..6),
        index in 0usize..8,
    ) {
        let list = Value::Array(items.iter().cloned().map(Value::String).collect());
        let table = TranslationTable::from_value(json!({ "en": nest(&path, list) })).unwrap();
        let key = format!("{}.{}", path.join("."), index);

        let expected = items.get(index).map(|item| json!(item));
        prop_assert_eq!(table.lookup("en", &key), expected.as_ref());
    }
}
