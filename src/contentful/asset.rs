//! Asset descriptors.
//!
//! An asset field on an entry is one of three things, and [`AssetRef`] says
//! which: the resolved asset, a link the response did not include, or nothing.

use super::entry::{Link, Sys};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A media file stored in the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub sys: Sys,
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<AssetFile>,
}

/// File metadata. `url` is protocol-relative as delivered (`//images.ctfassets.net/...`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AssetDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDimensions>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// An asset field on an entry.
///
/// Decoding never fails: a value that is neither an asset nor a link reads as
/// [`AssetRef::Absent`], so one bad logo does not drop the whole entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssetRef {
    /// Asset was embedded in the response.
    Resolved(Asset),
    /// Asset is referenced but was not embedded (unpublished, or beyond `include` depth).
    Link(Link),
    /// Field is empty.
    #[default]
    Absent,
}

impl AssetRef {
    /// Interpret any JSON value as an asset reference.
    ///
    /// Shapes that are neither an asset nor a link become [`AssetRef::Absent`].
    pub fn from_value(value: &Value) -> Self {
        if let Ok(asset) = Asset::deserialize(value) {
            Self::Resolved(asset)
        } else if let Ok(link) = Link::deserialize(value) {
            Self::Link(link)
        } else {
            Self::Absent
        }
    }

    /// The raw file URL, if the asset is resolved and has a file.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Resolved(asset) => asset
                .fields
                .file
                .as_ref()
                .map(|file| file.url.as_str())
                .filter(|url| !url.is_empty()),
            Self::Link(_) | Self::Absent => None,
        }
    }

    pub fn asset(&self) -> Option<&Asset> {
        match self {
            Self::Resolved(asset) => Some(asset),
            Self::Link(_) | Self::Absent => None,
        }
    }

    /// Asset title, used as alt text.
    pub fn title(&self) -> Option<&str> {
        self.asset()?.fields.title.as_deref()
    }

    pub fn dimensions(&self) -> Option<ImageDimensions> {
        self.asset()?.fields.file.as_ref()?.details.as_ref()?.image
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<'de> Deserialize<'de> for AssetRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved() -> Value {
        json!({
            "sys": {"id": "logo1", "type": "Asset"},
            "fields": {
                "title": "Logo",
                "file": {
                    "url": "//images.ctfassets.net/space/logo1/logo.png",
                    "contentType": "image/png",
                    "details": {"size": 1024, "image": {"width": 400, "height": 200}}
                }
            }
        })
    }

    #[test]
    fn test_resolved_asset() {
        let asset = AssetRef::from_value(&resolved());

        assert_eq!(asset.url(), Some("//images.ctfassets.net/space/logo1/logo.png"));
        assert_eq!(asset.title(), Some("Logo"));
        assert_eq!(
            asset.dimensions(),
            Some(ImageDimensions { width: 400, height: 200 })
        );
    }

    #[test]
    fn test_unresolved_link() {
        let asset = AssetRef::from_value(&json!({
            "sys": {"type": "Link", "linkType": "Asset", "id": "missing"}
        }));

        assert!(matches!(asset, AssetRef::Link(ref link) if link.sys.id == "missing"));
        assert_eq!(asset.url(), None);
    }

    #[test]
    fn test_bare_fields_shape() {
        let asset = AssetRef::from_value(&json!({"fields": {"file": {"url": "//x/y.jpg"}}}));
        assert_eq!(asset.url(), Some("//x/y.jpg"));
    }

    #[test]
    fn test_garbage_is_absent() {
        for value in [json!(null), json!(42), json!("logo.png"), json!([1, 2])] {
            assert!(AssetRef::from_value(&value).is_absent(), "{value}");
        }
    }

    #[test]
    fn test_missing_file_has_no_url() {
        let asset = AssetRef::from_value(&json!({"fields": {"title": "No file yet"}}));
        assert!(!asset.is_absent());
        assert_eq!(asset.url(), None);
    }

    #[test]
    fn test_malformed_field_decodes_as_absent() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            logo: AssetRef,
        }

        for logo in [json!("logo.png"), json!({"fields": {"file": 3}}), json!(null), json!(7)] {
            let holder: Holder = serde_json::from_value(json!({ "logo": logo })).unwrap();
            assert!(holder.logo.is_absent(), "{logo}");
        }

        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(holder.logo.is_absent());

        let holder: Holder = serde_json::from_value(json!({ "logo": resolved() })).unwrap();
        assert_eq!(holder.logo.title(), Some("Logo"));
    }

    #[test]
    fn test_absent_serializes_as_null() {
        assert_eq!(serde_json::to_value(AssetRef::Absent).unwrap(), Value::Null);
    }
}
