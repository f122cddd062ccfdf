//! Generic CMS record shapes: system metadata, links, entries, rich text.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A content type whose entries can be decoded into `Self`.
///
/// `ID` is the CMS content type identifier used in `content_type=` filters.
pub trait ContentType: DeserializeOwned + Serialize + Send + 'static {
    const ID: &'static str;
}

/// System metadata attached by the CMS to every entry and asset.
///
/// Opaque to this crate apart from the identifier; carried through to the
/// templates unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    #[serde(default)]
    pub id: String,

    /// "Entry", "Asset", ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Link>,
}

impl Sys {
    /// Content type identifier, if the CMS reported one.
    pub fn content_type_id(&self) -> Option<&str> {
        self.content_type.as_ref().map(|link| link.sys.id.as_str())
    }
}

/// An unresolved reference to another entry or asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    pub id: String,

    #[serde(rename = "type", default = "link_kind")]
    pub kind: String,

    /// "Asset", "Entry" or "ContentType". Hand-written exports often leave
    /// it out of `sys.contentType`.
    #[serde(default)]
    pub link_type: String,
}

fn link_kind() -> String {
    "Link".into()
}

impl Link {
    /// Recognize a raw JSON value as a link, returning `(link_type, id)`.
    pub fn parse(value: &Value) -> Option<(&str, &str)> {
        let sys = value.get("sys")?;
        if sys.get("type")?.as_str()? != "Link" {
            return None;
        }
        Some((sys.get("linkType")?.as_str()?, sys.get("id")?.as_str()?))
    }
}

/// A single CMS record: metadata plus typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: DeserializeOwned"))]
pub struct Entry<F> {
    pub sys: Sys,
    pub fields: F,
}

impl<F> Entry<F> {
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// Raw result page of a `get_entries` call, links already resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub skip: u64,

    #[serde(default)]
    pub limit: u64,

    #[serde(default)]
    pub items: Vec<Value>,
}

impl EntryCollection {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            total: items.len() as u64,
            skip: 0,
            limit: items.len() as u64,
            items,
        }
    }
}

/// A rich-text document, kept as the CMS sends it.
///
/// Templates render the node tree themselves; [`RichText::plain_text`] is for
/// places that need text only (meta descriptions, excerpts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Value);

impl RichText {
    /// Flatten the document into plain text, one line per top-level block.
    pub fn plain_text(&self) -> String {
        let Some(blocks) = self.0.get("content").and_then(Value::as_array) else {
            return collect_text(&self.0);
        };

        blocks
            .iter()
            .map(collect_text)
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.plain_text().is_empty()
    }
}

fn collect_text(node: &Value) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Value, out: &mut String) {
    if node.get("nodeType").and_then(Value::as_str) == Some("text") {
        if let Some(text) = node.get("value").and_then(Value::as_str) {
            out.push_str(text);
        }
        return;
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            push_text(child, out);
        }
    }
}
