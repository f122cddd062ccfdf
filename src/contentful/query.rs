//! Entry filters.
//!
//! [`EntryQuery`] is built once per operation and then either rendered to
//! Delivery API query parameters or evaluated against raw entries by the
//! in-memory store, so both backends answer the same question.

use serde_json::Value;
use std::cmp::Ordering;

/// Sort key on a field path (`fields.date`, `sys.createdAt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub path: String,
    pub descending: bool,
}

impl Order {
    /// Wire form: `fields.date` or `-fields.date`.
    pub fn render(&self) -> String {
        if self.descending {
            format!("-{}", self.path)
        } else {
            self.path.clone()
        }
    }
}

/// A `get_entries` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryQuery {
    pub content_type: String,
    pub equals: Vec<(String, Value)>,
    pub exists: Vec<(String, bool)>,
    pub gte: Vec<(String, Value)>,
    pub any_of: Vec<(String, Vec<String>)>,
    /// Full-text search across the entry's text fields.
    pub text: Option<String>,
    pub order: Vec<Order>,
    pub limit: Option<u32>,
    /// Link depth override; the store default applies when unset.
    pub include: Option<u8>,
    pub locale: Option<String>,
}

fn field_path(field: &str) -> String {
    if field.starts_with("fields.") || field.starts_with("sys.") {
        field.to_owned()
    } else {
        format!("fields.{field}")
    }
}

impl EntryQuery {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            ..Self::default()
        }
    }

    /// `fields.X = value`. On array fields this means "contains".
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.equals.push((field_path(field), value.into()));
        self
    }

    /// Shorthand for an optional equality filter.
    pub fn eq_opt<V: Into<Value>>(self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.eq(field, value),
            None => self,
        }
    }

    pub fn exists(mut self, field: &str, exists: bool) -> Self {
        self.exists.push((field_path(field), exists));
        self
    }

    pub fn gte(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.gte.push((field_path(field), value.into()));
        self
    }

    /// `fields.X[in] = a,b,c`: matches when any value is present.
    ///
    /// The wire form is comma-joined, so a value containing a comma is split
    /// into its parts here and both backends see the same set. Empty parts
    /// are dropped; an empty set matches nothing.
    pub fn any_of<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = values
            .into_iter()
            .flat_map(|value| {
                value
                    .as_ref()
                    .split(',')
                    .filter(|part| !part.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        self.any_of.push((field_path(field), set));
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn asc(mut self, field: &str) -> Self {
        self.order.push(Order {
            path: field_path(field),
            descending: false,
        });
        self
    }

    pub fn desc(mut self, field: &str) -> Self {
        self.order.push(Order {
            path: field_path(field),
            descending: true,
        });
        self
    }

    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub const fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    // ------------------------------------------------------------------------
    // Wire form
    // ------------------------------------------------------------------------

    /// Delivery API query parameters, in a stable order.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_owned(), self.content_type.clone())];

        for (path, value) in &self.equals {
            params.push((path.clone(), render_value(value)));
        }
        for (path, exists) in &self.exists {
            params.push((format!("{path}[exists]"), exists.to_string()));
        }
        for (path, value) in &self.gte {
            params.push((format!("{path}[gte]"), render_value(value)));
        }
        for (path, values) in &self.any_of {
            params.push((format!("{path}[in]"), values.join(",")));
        }
        if let Some(text) = &self.text {
            params.push(("query".to_owned(), text.clone()));
        }
        if !self.order.is_empty() {
            let order: Vec<_> = self.order.iter().map(Order::render).collect();
            params.push(("order".to_owned(), order.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(include) = self.include {
            params.push(("include".to_owned(), include.to_string()));
        }
        if let Some(locale) = &self.locale {
            params.push(("locale".to_owned(), locale.clone()));
        }

        params
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Short description for log lines: `race fields.season=2026`.
    pub fn describe(&self) -> String {
        let filters: Vec<_> = self
            .equals
            .iter()
            .map(|(path, value)| format!("{path}={}", render_value(value)))
            .chain(self.text.iter().map(|text| format!("query={text}")))
            .collect();
        if filters.is_empty() {
            self.content_type.clone()
        } else {
            format!("{} {}", self.content_type, filters.join(" "))
        }
    }

    // ------------------------------------------------------------------------
    // In-memory evaluation
    // ------------------------------------------------------------------------

    /// Whether a raw entry satisfies every filter.
    pub fn matches(&self, entry: &Value) -> bool {
        let content_type = lookup(entry, "sys.contentType.sys.id").and_then(Value::as_str);
        if content_type != Some(self.content_type.as_str()) {
            return false;
        }

        self.equals
            .iter()
            .all(|(path, expected)| lookup(entry, path).is_some_and(|v| value_eq(v, expected)))
            && self
                .exists
                .iter()
                .all(|(path, wanted)| is_present(lookup(entry, path)) == *wanted)
            && self.gte.iter().all(|(path, bound)| {
                lookup(entry, path)
                    .and_then(|v| compare(v, bound))
                    .is_some_and(Ordering::is_ge)
            })
            && self
                .any_of
                .iter()
                .all(|(path, set)| lookup(entry, path).is_some_and(|v| overlaps(v, set)))
            && self.text.as_deref().is_none_or(|text| full_text(entry, text))
    }

    /// Apply order and limit to already-filtered entries.
    pub fn sort_and_limit(&self, entries: &mut Vec<Value>) {
        if !self.order.is_empty() {
            entries.sort_by(|a, b| {
                self.order
                    .iter()
                    .map(|order| {
                        sort_cmp(lookup(a, &order.path), lookup(b, &order.path), order.descending)
                    })
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }
        if let Some(limit) = self.limit {
            entries.truncate(limit as usize);
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Follow a dotted path through nested objects.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |node, key| node.get(key))
}

fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// Equality as the CMS applies it: arrays match when they contain the value,
/// and scalars compare by their rendered form (`true` matches `"true"`).
fn value_eq(actual: &Value, expected: &Value) -> bool {
    match actual {
        Value::Array(items) => items.iter().any(|item| value_eq(item, expected)),
        actual => actual == expected || render_value(actual) == render_value(expected),
    }
}

fn overlaps(actual: &Value, set: &[String]) -> bool {
    match actual {
        Value::Array(items) => items.iter().any(|item| overlaps(item, set)),
        Value::Null => false,
        actual => set.contains(&render_value(actual)),
    }
}

/// Strings compare lexically (ISO dates sort correctly), numbers numerically.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Missing values sort last in either direction.
fn sort_cmp(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = compare(a, b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn full_text(entry: &Value, text: &str) -> bool {
    let needle = text.to_lowercase();
    entry
        .get("fields")
        .is_some_and(|fields| contains_text(fields, &needle))
}

fn contains_text(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items.iter().any(|item| contains_text(item, needle)),
        Value::Object(map) => map.values().any(|item| contains_text(item, needle)),
        _ => false,
    }
}
