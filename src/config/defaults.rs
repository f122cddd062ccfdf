//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [contentful] Section Defaults
// ============================================================================

pub mod contentful {
    pub fn environment() -> String {
        "master".into()
    }

    pub fn locale() -> Option<String> {
        Some("da-DK".into())
    }

    pub fn host() -> String {
        "cdn.contentful.com".into()
    }

    pub fn preview_host() -> String {
        "preview.contentful.com".into()
    }

    /// Link depth resolved by the CMS (`include` parameter).
    pub fn include() -> u8 {
        2
    }

    pub fn request_timeout_secs() -> u64 {
        30
    }

    pub fn connect_timeout_secs() -> u64 {
        10
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use crate::contentful::PageId;
    use crate::utils::date::DateLocale;

    pub fn current_season() -> String {
        "2026".into()
    }

    pub fn previous_season() -> String {
        "2025".into()
    }

    pub fn driver_stats_season() -> String {
        "2025".into()
    }

    pub fn locale() -> DateLocale {
        DateLocale::Danish
    }

    pub fn pages() -> Vec<String> {
        ["forside", "om-anton", "kalender", "resultater", "galleri", "sponsorer"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn section_pages() -> Vec<PageId> {
        PageId::ALL.to_vec()
    }

    pub fn upcoming_limit() -> u32 {
        5
    }

    pub fn featured_media_limit() -> u32 {
        6
    }

    pub fn featured_video_limit() -> u32 {
        4
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn data_dir() -> PathBuf {
        "src/data".into()
    }
}
