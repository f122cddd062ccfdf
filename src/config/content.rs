//! `[content]` section configuration.
//!
//! Which seasons, pages and list sizes the site build asks the CMS for.

use super::defaults;
use crate::contentful::PageId;
use crate::utils::date::DateLocale;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[content]` section in kartsite.toml.
///
/// # Example
/// ```toml
/// [content]
/// current_season = "2026"
/// previous_season = "2025"
/// locale = "da"
/// pages = ["forside", "om-anton"]
/// featured_media_limit = 9
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Season shown on the calendar (races query default).
    #[serde(default = "defaults::content::current_season")]
    #[educe(Default = defaults::content::current_season())]
    pub current_season: String,

    #[serde(default = "defaults::content::previous_season")]
    #[educe(Default = defaults::content::previous_season())]
    pub previous_season: String,

    /// Season of the headline stats block (driver stats query default).
    #[serde(default = "defaults::content::driver_stats_season")]
    #[educe(Default = defaults::content::driver_stats_season())]
    pub driver_stats_season: String,

    /// Locale for preformatted date labels in data files.
    #[serde(default = "defaults::content::locale")]
    #[educe(Default = defaults::content::locale())]
    pub locale: DateLocale,

    /// Page slugs fetched into `pages.json`.
    #[serde(default = "defaults::content::pages")]
    #[educe(Default = defaults::content::pages())]
    pub pages: Vec<String>,

    /// Pages whose sections are fetched into `sections.json`.
    #[serde(default = "defaults::content::section_pages")]
    #[educe(Default = defaults::content::section_pages())]
    pub section_pages: Vec<PageId>,

    #[serde(default = "defaults::content::upcoming_limit")]
    #[educe(Default = defaults::content::upcoming_limit())]
    pub upcoming_limit: u32,

    #[serde(default = "defaults::content::featured_media_limit")]
    #[educe(Default = defaults::content::featured_media_limit())]
    pub featured_media_limit: u32,

    #[serde(default = "defaults::content::featured_video_limit")]
    #[educe(Default = defaults::content::featured_video_limit())]
    pub featured_video_limit: u32,
}
