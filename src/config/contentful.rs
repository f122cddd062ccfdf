//! `[contentful]` section configuration.
//!
//! Connection settings for the Contentful Delivery and Preview APIs.
//! Secrets normally come from the environment (see [`super::Config::apply_env`]),
//! the file may still carry them for throwaway local setups.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// `[contentful]` section in kartsite.toml.
///
/// # Example
/// ```toml
/// [contentful]
/// space_id = "x1y2z3"
/// environment = "master"
/// locale = "da-DK"
/// fixtures = "fixtures/content.json"
/// ```
#[derive(Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentfulConfig {
    /// Space identifier (`CONTENTFUL_SPACE_ID`).
    #[serde(default)]
    pub space_id: Option<String>,

    /// Delivery API token (`CONTENTFUL_ACCESS_TOKEN`).
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Preview API token (`CONTENTFUL_PREVIEW_TOKEN`), needed for draft reads only.
    #[serde(default, skip_serializing)]
    pub preview_token: Option<String>,

    /// Contentful environment (`CONTENTFUL_ENVIRONMENT`).
    #[serde(default = "defaults::contentful::environment")]
    #[educe(Default = defaults::contentful::environment())]
    pub environment: String,

    /// Locale requested from the CMS. `None` uses the space default.
    #[serde(default = "defaults::contentful::locale")]
    #[educe(Default = defaults::contentful::locale())]
    pub locale: Option<String>,

    /// Delivery API host, without scheme.
    #[serde(default = "defaults::contentful::host")]
    #[educe(Default = defaults::contentful::host())]
    pub host: String,

    /// Preview API host, without scheme.
    #[serde(default = "defaults::contentful::preview_host")]
    #[educe(Default = defaults::contentful::preview_host())]
    pub preview_host: String,

    /// Depth of linked entries/assets the CMS embeds in responses (0-10).
    #[serde(default = "defaults::contentful::include")]
    #[educe(Default = defaults::contentful::include())]
    pub include: u8,

    #[serde(default = "defaults::contentful::request_timeout_secs")]
    #[educe(Default = defaults::contentful::request_timeout_secs())]
    pub request_timeout_secs: u64,

    #[serde(default = "defaults::contentful::connect_timeout_secs")]
    #[educe(Default = defaults::contentful::connect_timeout_secs())]
    pub connect_timeout_secs: u64,

    /// Offline fixture file. When set, reads are served from it instead of the API.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

impl fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("has_access_token", &self.access_token.is_some())
            .field("has_preview_token", &self.preview_token.is_some())
            .field("environment", &self.environment)
            .field("locale", &self.locale)
            .field("host", &self.host)
            .field("preview_host", &self.preview_host)
            .field("include", &self.include)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("fixtures", &self.fixtures)
            .finish()
    }
}

impl ContentfulConfig {
    /// Whether published content can be read (space + delivery token).
    pub fn has_delivery_credentials(&self) -> bool {
        self.space_id.is_some() && self.access_token.is_some()
    }

    /// Whether draft content can be read (space + delivery token + preview token).
    ///
    /// The delivery token is required as well, matching how the site has
    /// always gated preview on a fully configured space.
    pub fn has_preview_credentials(&self) -> bool {
        self.has_delivery_credentials() && self.preview_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Config;

    #[test]
    fn test_contentful_defaults() {
        let config: Config = toml::from_str("").unwrap();
        let c = &config.contentful;

        assert_eq!(c.space_id, None);
        assert_eq!(c.environment, "master");
        assert_eq!(c.locale.as_deref(), Some("da-DK"));
        assert_eq!(c.host, "cdn.contentful.com");
        assert_eq!(c.preview_host, "preview.contentful.com");
        assert_eq!(c.include, 2);
        assert_eq!(c.request_timeout_secs, 30);
        assert_eq!(c.connect_timeout_secs, 10);
        assert!(!c.has_delivery_credentials());
    }

    #[test]
    fn test_contentful_full() {
        let config = r#"
            [contentful]
            space_id = "space42"
            access_token = "delivery"
            preview_token = "preview"
            environment = "staging"
            host = "cdn.eu.contentful.com"
            include = 1
            fixtures = "fixtures/content.json"
        "#;
        let config: Config = toml::from_str(config).unwrap();
        let c = &config.contentful;

        assert_eq!(c.space_id.as_deref(), Some("space42"));
        assert_eq!(c.environment, "staging");
        assert_eq!(c.host, "cdn.eu.contentful.com");
        assert_eq!(c.include, 1);
        assert!(c.has_delivery_credentials());
        assert!(c.has_preview_credentials());
        assert!(c.fixtures.is_some());
    }

    #[test]
    fn test_preview_requires_delivery_pair() {
        let config = r#"
            [contentful]
            preview_token = "preview"
        "#;
        let config: Config = toml::from_str(config).unwrap();
        assert!(!config.contentful.has_preview_credentials());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = r#"
            [contentful]
            space_id = "space42"
            access_token = "super-secret-delivery"
        "#;
        let config: Config = toml::from_str(config).unwrap();
        let debug = format!("{:?}", config.contentful);

        assert!(debug.contains("has_access_token: true"));
        assert!(!debug.contains("super-secret-delivery"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [contentful]
            space = "typo"
        "#;
        let result: Result<Config, _> = toml::from_str(config);
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
