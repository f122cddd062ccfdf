//! Asset URL building for the CMS image API.

use crate::contentful::AssetRef;

/// Default image API quality.
pub const DEFAULT_QUALITY: u8 = 80;

/// Absolute HTTPS URL for an asset, optionally resized.
///
/// Returns an empty string when the asset is absent, unresolved or has no
/// file. Use [`image_url_opt`] to tell that case apart.
pub fn image_url(asset: &AssetRef, width: Option<u32>, quality: u8) -> String {
    image_url_opt(asset, width, quality).unwrap_or_default()
}

/// Like [`image_url`], with `None` for "no image".
///
/// With a width, appends `w`, `q` and `fm=webp` transform parameters.
pub fn image_url_opt(asset: &AssetRef, width: Option<u32>, quality: u8) -> Option<String> {
    let mut url = absolute_url(asset.url()?);

    if let Some(width) = width {
        let sep = if url.contains('?') { '&' } else { '?' };
        url.push_str(&format!("{sep}w={width}&q={quality}&fm=webp"));
    }

    Some(url)
}

/// Protocol-relative URLs (`//images.ctfassets.net/...`) become `https:`.
pub fn absolute_url(url: &str) -> String {
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn asset(url: &str) -> AssetRef {
        AssetRef::from_value(&json!({"fields": {"file": {"url": url}}}))
    }

    #[test]
    fn test_image_url_protocol_relative() {
        let logo = asset("//images.ctfassets.net/space/id/logo.png");
        assert_eq!(
            image_url(&logo, None, DEFAULT_QUALITY),
            "https://images.ctfassets.net/space/id/logo.png"
        );
    }

    #[test]
    fn test_image_url_with_width() {
        let photo = asset("//images.ctfassets.net/space/id/start.jpg");
        assert_eq!(
            image_url(&photo, Some(400), DEFAULT_QUALITY),
            "https://images.ctfassets.net/space/id/start.jpg?w=400&q=80&fm=webp"
        );
        assert_eq!(
            image_url(&photo, Some(1200), 60),
            "https://images.ctfassets.net/space/id/start.jpg?w=1200&q=60&fm=webp"
        );
    }

    #[test]
    fn test_image_url_existing_query() {
        let photo = asset("https://cdn.example.dk/p.jpg?v=2");
        assert_eq!(
            image_url(&photo, Some(400), DEFAULT_QUALITY),
            "https://cdn.example.dk/p.jpg?v=2&w=400&q=80&fm=webp"
        );
    }

    #[test]
    fn test_image_url_missing_asset() {
        assert_eq!(image_url(&AssetRef::Absent, Some(400), DEFAULT_QUALITY), "");
        assert_eq!(image_url_opt(&AssetRef::Absent, None, DEFAULT_QUALITY), None);

        let malformed = AssetRef::from_value(&json!({"fields": {}}));
        assert_eq!(image_url(&malformed, None, DEFAULT_QUALITY), "");

        let link = AssetRef::from_value(&json!({
            "sys": {"type": "Link", "linkType": "Asset", "id": "x"}
        }));
        assert_eq!(image_url_opt(&link, Some(400), DEFAULT_QUALITY), None);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("//a/b"), "https://a/b");
        assert_eq!(absolute_url("https://a/b"), "https://a/b");
    }
}
