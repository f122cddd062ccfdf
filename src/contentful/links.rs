//! Link resolution against a response's `includes`.
//!
//! The Delivery API returns linked entries and assets once, in a side table,
//! and leaves `{"sys": {"type": "Link", ...}}` stubs in the fields. Templates
//! read one level deep (a sponsor's logo, a button's target page), so links in
//! item fields are replaced by their targets. Links inside the targets stay as
//! they are.

use super::entry::Link;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Linked records keyed by `(link_type, id)`.
#[derive(Debug, Default)]
pub struct Includes {
    records: HashMap<(String, String), Value>,
}

impl Includes {
    /// Index a response's `includes` object (`{"Entry": [...], "Asset": [...]}`).
    pub fn from_response(includes: Option<&Value>) -> Self {
        let mut records = HashMap::new();
        let Some(Value::Object(groups)) = includes else {
            return Self { records };
        };

        for (link_type, items) in groups {
            for item in items.as_array().into_iter().flatten() {
                if let Some(id) = item.pointer("/sys/id").and_then(Value::as_str) {
                    records.insert((link_type.clone(), id.to_owned()), item.clone());
                }
            }
        }
        Self { records }
    }

    /// Also make top-level items linkable (entries in the same page may link each other).
    pub fn add_entries(&mut self, items: &[Value]) {
        for item in items {
            if let Some(id) = item.pointer("/sys/id").and_then(Value::as_str) {
                self.records
                    .entry(("Entry".to_owned(), id.to_owned()))
                    .or_insert_with(|| item.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get(&self, link: &Value) -> Option<&Value> {
        let (link_type, id) = Link::parse(link)?;
        self.records.get(&(link_type.to_owned(), id.to_owned()))
    }

    /// Replace links in an item's fields with the linked records.
    pub fn resolve(&self, item: &mut Value) {
        if self.is_empty() {
            return;
        }
        if let Some(Value::Object(fields)) = item.get_mut("fields") {
            self.resolve_fields(fields);
        }
    }

    fn resolve_fields(&self, fields: &mut Map<String, Value>) {
        for value in fields.values_mut() {
            match value {
                Value::Array(items) => {
                    for item in items.iter_mut() {
                        self.resolve_value(item);
                    }
                }
                value => self.resolve_value(value),
            }
        }
    }

    fn resolve_value(&self, value: &mut Value) {
        if let Some(target) = self.get(value) {
            *value = target.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link(link_type: &str, id: &str) -> Value {
        json!({"sys": {"type": "Link", "linkType": link_type, "id": id}})
    }

    #[test]
    fn test_resolves_asset_and_entry_links() {
        let includes = Includes::from_response(Some(&json!({
            "Asset": [{"sys": {"id": "logo1", "type": "Asset"}, "fields": {"file": {"url": "//x/logo.png"}}}],
            "Entry": [{"sys": {"id": "p2", "type": "Entry"}, "fields": {"slug": "om-anton"}}]
        })));
        assert_eq!(includes.len(), 2);

        let mut item = json!({
            "sys": {"id": "page1"},
            "fields": {
                "heroImage": link("Asset", "logo1"),
                "primaryButtonPage": link("Entry", "p2"),
                "title": "Forside"
            }
        });
        includes.resolve(&mut item);

        assert_eq!(item["fields"]["heroImage"]["fields"]["file"]["url"], "//x/logo.png");
        assert_eq!(item["fields"]["primaryButtonPage"]["fields"]["slug"], "om-anton");
        assert_eq!(item["fields"]["title"], "Forside");
    }

    #[test]
    fn test_unknown_links_stay() {
        let includes = Includes::from_response(Some(&json!({"Asset": []})));
        let mut item = json!({"fields": {"logo": link("Asset", "gone")}});
        includes.resolve(&mut item);
        assert_eq!(item["fields"]["logo"], link("Asset", "gone"));
    }

    #[test]
    fn test_resolves_links_in_arrays() {
        let includes = Includes::from_response(Some(&json!({
            "Asset": [{"sys": {"id": "a1"}, "fields": {"title": "Et"}}]
        })));
        let mut item = json!({"fields": {"gallery": [link("Asset", "a1"), link("Asset", "a2")]}});
        includes.resolve(&mut item);

        assert_eq!(item["fields"]["gallery"][0]["fields"]["title"], "Et");
        assert_eq!(item["fields"]["gallery"][1], link("Asset", "a2"));
    }

    #[test]
    fn test_top_level_items_are_linkable() {
        let items = vec![json!({"sys": {"id": "p2"}, "fields": {"slug": "kalender"}})];
        let mut includes = Includes::from_response(None);
        includes.add_entries(&items);

        let mut item = json!({"fields": {"primaryButtonPage": link("Entry", "p2")}});
        includes.resolve(&mut item);
        assert_eq!(item["fields"]["primaryButtonPage"]["fields"]["slug"], "kalender");
    }
}
