use serde_json::Map;

use super::{
    message::{MessageCatalog, MessageData, MessageRecord},
    params::merge_params,
};

/// Merges each locale's flattened records into one catalog keyed by path.
///
/// Locales are visited in the given order, which becomes the order of
/// `MessageData::values` and of `MessageCatalog::locales`. A path seen only in
/// a later locale is simply added: completeness is checked separately so
/// every gap can be reported in one pass.
pub fn aggregate<'a, I>(per_locale: I) -> MessageCatalog
where
    I: IntoIterator<Item = (&'a str, &'a [MessageRecord])>,
{
    let mut catalog = MessageCatalog::new();

    for (locale, records) in per_locale {
        if !catalog.has_locale(locale) {
            catalog.locales.push(locale.to_string());
        }

        for record in records {
            let data = catalog.entry_mut(record.key(), || MessageData {
                path: record.path.clone(),
                params: Vec::new(),
                is_array_root: record.is_array_root,
                array_item: record.array_item.clone(),
                values: Map::new(),
            });
            // With validation off a path may be an array in some locales only.
            data.is_array_root |= record.is_array_root;
            merge_params(&mut data.params, &record.params);
            data.values.insert(locale.to_string(), record.value.clone());
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::{aggregate::*, flatten::flatten_document};

    #[test]
    fn test_aggregate_merges_locales() {
        let en = flatten_document(&json!({"greeting": "Hello {name}", "bye": "Bye"}));
        let es = flatten_document(&json!({"greeting": "Hola {nombre}"}));

        let catalog = aggregate([("en", en.as_slice()), ("es", es.as_slice())]);

        assert_eq!(catalog.locales, vec!["en", "es"]);
        assert_eq!(catalog.paths().collect::<Vec<_>>(), vec!["greeting", "bye"]);

        let greeting = catalog.get("greeting").unwrap();
        assert_eq!(greeting.params, vec!["name", "nombre"]);
        assert_eq!(greeting.value_for("en"), Some(&json!("Hello {name}")));
        assert_eq!(greeting.value_for("es"), Some(&json!("Hola {nombre}")));

        let bye = catalog.get("bye").unwrap();
        assert!(bye.has_locale("en"));
        assert!(!bye.has_locale("es"));
    }

    #[test]
    fn test_aggregate_adds_paths_from_later_locales() {
        let en = flatten_document(&json!({"a": "A"}));
        let es = flatten_document(&json!({"a": "A", "b": "B"}));

        let catalog = aggregate([("en", en.as_slice()), ("es", es.as_slice())]);

        assert_eq!(catalog.paths().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(catalog.get("b").unwrap().values.len(), 1);
    }

    #[test]
    fn test_aggregate_keeps_array_flags() {
        let en = flatten_document(&json!({"items": ["a", "b"]}));
        let catalog = aggregate([("en", en.as_slice())]);

        assert!(catalog.get("items").unwrap().is_array_root);
        let item = catalog.get("items[1]").unwrap();
        assert!(!item.is_array_root);
        assert_eq!(item.array_item.as_ref().unwrap().array_path, "items");
    }

    #[test]
    fn test_aggregate_array_in_later_locale() {
        let en = flatten_document(&json!({"title": "T"}));
        let es = flatten_document(&json!({"title": ["u {n}"]}));
        let catalog = aggregate([("en", en.as_slice()), ("es", es.as_slice())]);

        let title = catalog.get("title").unwrap();
        assert!(title.is_array_root);
        assert_eq!(title.params, vec!["n"]);
        assert!(catalog.contains_path("title[0]"));
    }

    #[test]
    fn test_aggregate_records_empty_documents() {
        let empty: Vec<MessageRecord> = Vec::new();
        let catalog = aggregate([("en", empty.as_slice())]);
        assert!(catalog.is_empty());
        assert!(catalog.has_locale("en"));
    }
}
