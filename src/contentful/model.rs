//! Typed field sets for every content type the site reads.
//!
//! Field names follow the CMS (camelCase on the wire). Required fields are
//! plain types; an entry missing one fails to decode and is skipped by the
//! query layer rather than poisoning the whole list.

use super::asset::AssetRef;
use super::entry::{ContentType, Entry, Link, RichText, Sys};
use crate::utils::youtube::{self, ThumbnailQuality};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Closed Enumerations
// ============================================================================

/// Declare a closed CMS enumeration with its wire values.
///
/// Generates serde renames, `ALL`, `as_str()`, `Display` and `FromStr`
/// (so the CLI can take these as arguments).
macro_rules! cms_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value as stored in the CMS.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        let expected: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("unknown value `{s}`, expected one of: {}", expected.join(", "))
                    })
            }
        }
    };
}

cms_enum! {
    /// Sponsor tier. The CMS stores the Danish names.
    pub enum SponsorTier {
        Gold => "guld",
        Silver => "sølv",
        Bronze => "bronze",
    }
}

impl SponsorTier {
    /// Display label as shown on the sponsor wall.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Guld",
            Self::Silver => "Sølv",
            Self::Bronze => "Bronze",
        }
    }

    /// Sort key, highest tier first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Gold => 0,
            Self::Silver => 1,
            Self::Bronze => 2,
        }
    }
}

cms_enum! {
    /// Sponsor package tier (English values, unlike [`SponsorTier`]).
    pub enum PackageTier {
        Bronze => "bronze",
        Silver => "silver",
        Gold => "gold",
    }
}

impl PackageTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Sølv",
            Self::Gold => "Guld",
        }
    }
}

cms_enum! {
    pub enum MediaType {
        Image => "image",
        Video => "video",
    }
}

cms_enum! {
    /// Gallery category of a media item.
    pub enum MediaCategory {
        RacingAction => "racing-action",
        BehindScenes => "behind-scenes",
        Professional => "professional",
        Interviews => "interviews",
    }
}

cms_enum! {
    pub enum VideoCategory {
        RaceHighlights => "race-highlights",
        Interviews => "interviews",
        Technical => "technical",
        TeamContent => "team-content",
    }
}

cms_enum! {
    /// File format offered for press downloads.
    pub enum FileFormat {
        #[serde(alias = "jpeg")]
        Jpg => "jpg",
        Png => "png",
        Tiff => "tiff",
        Webp => "webp",
        Raw => "raw",
    }
}

cms_enum! {
    /// Site pages that own page sections.
    pub enum PageId {
        Forside => "forside",
        OmAnton => "om-anton",
        Kalender => "kalender",
        Resultater => "resultater",
        Galleri => "galleri",
        Sponsorer => "sponsorer",
        Global => "global",
    }
}

impl PageId {
    /// Site path of the page. `Global` sections are shared and have none.
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Forside => Some("/"),
            Self::OmAnton => Some("/om-anton"),
            Self::Kalender => Some("/kalender"),
            Self::Resultater => Some("/resultater"),
            Self::Galleri => Some("/galleri"),
            Self::Sponsorer => Some("/sponsorer"),
            Self::Global => None,
        }
    }
}

// ============================================================================
// Races
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceFields {
    pub title: String,
    /// ISO date (`2026-04-18`)
    pub date: String,
    pub track: String,
    pub location: String,
    pub country: String,
    pub championship: String,
    pub season: String,

    /// Finishing position. Present only once the race is run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifying: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_event: Option<String>,
}

impl ContentType for RaceFields {
    const ID: &'static str = "race";
}

impl RaceFields {
    pub const fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub const fn is_win(&self) -> bool {
        matches!(self.result, Some(1))
    }

    pub const fn is_podium(&self) -> bool {
        matches!(self.result, Some(1..=3))
    }
}

// ============================================================================
// Sponsors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorFields {
    pub name: String,

    #[serde(default)]
    pub logo: AssetRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub tier: SponsorTier,

    #[serde(default)]
    pub active: bool,
}

impl ContentType for SponsorFields {
    const ID: &'static str = "sponsor";
}

impl SponsorFields {
    /// Website with a scheme. The CMS accepts `www.example.dk` as well.
    pub fn website_href(&self) -> Option<String> {
        let website = self.website.as_deref()?.trim();
        if website.is_empty() {
            return None;
        }
        Some(if website.starts_with("http://") || website.starts_with("https://") {
            website.to_owned()
        } else {
            format!("https://{website}")
        })
    }
}

// ============================================================================
// Page Content
// ============================================================================

/// A link to another page entry, resolved just far enough to build an href.
///
/// Like [`AssetRef`], anything unrecognised decodes as [`PageRef::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageRef {
    Resolved(PageLink),
    Link(Link),
    #[default]
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    #[serde(default)]
    pub sys: Sys,
    pub fields: PageLinkFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLinkFields {
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PageRef {
    pub fn from_value(value: &Value) -> Self {
        if let Ok(page) = PageLink::deserialize(value) {
            Self::Resolved(page)
        } else if let Ok(link) = Link::deserialize(value) {
            Self::Link(link)
        } else {
            Self::Absent
        }
    }

    /// Site path of the linked page (`forside` is the root).
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Resolved(page) => Some(slug_href(&page.fields.slug)),
            Self::Link(_) | Self::Absent => None,
        }
    }
}

impl<'de> Deserialize<'de> for PageRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn slug_href(slug: &str) -> String {
    match slug {
        "" | "forside" => "/".to_owned(),
        slug => format!("/{slug}"),
    }
}

/// Call-to-action button ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    pub href: String,
    pub new_tab: bool,
    pub external: bool,
}

impl Button {
    /// Build a button from its CMS parts. A linked page wins over a literal URL.
    ///
    /// Returns `None` without text or without any target.
    pub fn resolve(
        text: Option<&str>,
        url: Option<&str>,
        page: &PageRef,
        new_tab: Option<bool>,
    ) -> Option<Self> {
        let text = text.map(str::trim).filter(|t| !t.is_empty())?;
        let href = page.href().or_else(|| {
            url.map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_owned)
        })?;
        let external = href.starts_with("http://") || href.starts_with("https://");

        Some(Self {
            text: text.to_owned(),
            href,
            new_tab: new_tab.unwrap_or(false),
            external,
        })
    }
}

/// Longest meta description the CMS accepts.
pub const SEO_DESCRIPTION_MAX: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContentFields {
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub hero_image: AssetRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_url: Option<String>,

    #[serde(default)]
    pub primary_button_page: PageRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_new_tab: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_url: Option<String>,

    #[serde(default)]
    pub secondary_button_page: PageRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_new_tab: Option<bool>,

    pub content: RichText,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl ContentType for PageContentFields {
    const ID: &'static str = "pageContent";
}

impl PageContentFields {
    pub fn primary_button(&self) -> Option<Button> {
        Button::resolve(
            self.primary_button_text.as_deref(),
            self.primary_button_url.as_deref(),
            &self.primary_button_page,
            self.primary_button_new_tab,
        )
    }

    pub fn secondary_button(&self) -> Option<Button> {
        Button::resolve(
            self.secondary_button_text.as_deref(),
            self.secondary_button_url.as_deref(),
            &self.secondary_button_page,
            self.secondary_button_new_tab,
        )
    }

    /// Meta description: the SEO field, else the hero subtitle, else the body text,
    /// cut at [`SEO_DESCRIPTION_MAX`] characters.
    pub fn meta_description(&self) -> String {
        let text = self
            .seo_description
            .clone()
            .or_else(|| self.hero_subtitle.clone())
            .unwrap_or_else(|| self.content.plain_text().replace('\n', " "));
        let text = text.trim();

        match text.char_indices().nth(SEO_DESCRIPTION_MAX) {
            Some((cut, _)) => text[..cut].trim_end().to_owned(),
            None => text.to_owned(),
        }
    }
}

// ============================================================================
// Driver Stats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatsFields {
    pub season: String,
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub fastest_laps: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub championship_position: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
}

impl ContentType for DriverStatsFields {
    const ID: &'static str = "driverStats";
}

// ============================================================================
// Media Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemFields {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub file: AssetRef,

    #[serde(rename = "type")]
    pub kind: MediaType,

    pub category: MediaCategory,

    #[serde(default)]
    pub tags: Vec<String>,

    pub date: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    // EXIF metadata, filled in by the media import tooling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aperture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutter_speed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<String>,

    /// "lat, lon" as written by the EXIF import, e.g. "55.6761, 12.5683".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_coordinates: Option<String>,
}

impl ContentType for MediaItemFields {
    const ID: &'static str = "mediaItem";
}

impl MediaItemFields {
    /// Parsed GPS position as `(latitude, longitude)`.
    pub fn gps(&self) -> Option<(f64, f64)> {
        let (lat, lon) = self.gps_coordinates.as_deref()?.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
    }
}

// ============================================================================
// Videos
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFields {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,

    #[serde(default)]
    pub thumbnail: AssetRef,

    #[serde(default)]
    pub youtube_url: String,

    #[serde(default)]
    pub youtube_video_id: String,

    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    pub category: VideoCategory,

    pub upload_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

impl ContentType for VideoFields {
    const ID: &'static str = "video";
}

impl VideoFields {
    /// The stored id, else one extracted from the URL.
    pub fn video_id(&self) -> Option<String> {
        let id = self.youtube_video_id.trim();
        if !id.is_empty() {
            return Some(id.to_owned());
        }
        youtube::extract_video_id(&self.youtube_url)
    }

    /// Custom thumbnail if uploaded, else YouTube's.
    pub fn thumbnail_url(&self, width: Option<u32>) -> Option<String> {
        crate::utils::image::image_url_opt(&self.thumbnail, width, crate::utils::image::DEFAULT_QUALITY)
            .or_else(|| {
                self.video_id()
                    .map(|id| youtube::thumbnail_url(&id, ThumbnailQuality::High))
            })
    }

    /// `m:ss`, or `h:mm:ss` from an hour.
    pub fn duration_label(&self) -> Option<String> {
        let total = self.duration?;
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        Some(if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        })
    }
}

// ============================================================================
// Press Photos
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressPhotoFields {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub photo: AssetRef,

    pub credit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    pub category: String,

    pub date: String,

    /// e.g. "6000x4000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    pub file_format: FileFormat,

    /// Size in bytes.
    pub file_size: u64,
}

impl ContentType for PressPhotoFields {
    const ID: &'static str = "pressPhoto";
}

impl PressPhotoFields {
    /// Explicit download link, else the original asset (full resolution, no transforms).
    pub fn download_href(&self) -> Option<String> {
        self.download_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| crate::utils::image::image_url_opt(&self.photo, None, 0))
    }

    /// Human-readable size ("4.2 MB").
    pub fn file_size_label(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;

        #[allow(clippy::cast_precision_loss)] // Display only
        let size = self.file_size as f64;
        if size >= MB {
            format!("{:.1} MB", size / MB)
        } else if size >= KB {
            format!("{:.0} KB", size / KB)
        } else {
            format!("{} B", self.file_size)
        }
    }
}

// ============================================================================
// Sponsor Packages
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorPackageFields {
    pub name: String,
    pub tier: PackageTier,

    /// Price in DKK.
    pub price: u32,

    /// Overrides the rendered price ("Fra 5.000 kr", "Kontakt os").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,

    #[serde(default)]
    pub features: Vec<String>,

    pub display_order: i32,

    #[serde(default)]
    pub active: bool,
}

impl ContentType for SponsorPackageFields {
    const ID: &'static str = "sponsorPackage";
}

impl SponsorPackageFields {
    /// Price as shown on the page: the label if set, else "10.000 kr".
    pub fn price_display(&self) -> String {
        match self.price_label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_owned(),
            _ => format!("{} kr", group_thousands(self.price)),
        }
    }
}

/// Danish digit grouping: 12500 -> "12.500".
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Page Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSectionFields {
    /// Unique key (`^[a-z0-9-_]+$`), e.g. `forside-sponsors-heading`.
    pub key: String,
    pub page: PageId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

impl ContentType for PageSectionFields {
    const ID: &'static str = "pageSection";
}

impl PageSectionFields {
    pub fn button(&self) -> Option<Button> {
        Button::resolve(
            self.button_text.as_deref(),
            self.button_url.as_deref(),
            &PageRef::Absent,
            None,
        )
    }
}

/// Page sections keyed by `key`, as templates look them up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageSectionsByKey(BTreeMap<String, PageSectionEntry>);

impl PageSectionsByKey {
    pub fn get(&self, key: &str) -> Option<&PageSectionEntry> {
        self.0.get(key)
    }

    pub fn heading(&self, key: &str) -> Option<&str> {
        self.get(key)?.fields.heading.as_deref()
    }

    pub fn description(&self, key: &str) -> Option<&str> {
        self.get(key)?.fields.description.as_deref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<PageSectionEntry> for PageSectionsByKey {
    /// Later entries win on duplicate keys.
    fn from_iter<I: IntoIterator<Item = PageSectionEntry>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|section| (section.fields.key.clone(), section))
                .collect(),
        )
    }
}

// ============================================================================
// Singletons
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigFields {
    pub site_name: String,
    pub tagline: String,
    pub contact_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,

    pub current_season: String,
    pub previous_season: String,
    pub social_instagram: String,
    pub social_facebook: String,

    #[serde(default)]
    pub navigation_items: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
}

impl ContentType for SiteConfigFields {
    const ID: &'static str = "siteConfig";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfileFields {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub team: String,
    pub class: String,
    pub kart_brand: String,
    pub number: u32,
    pub start_year: i32,
    pub dream_quote: String,
    pub dream_description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_subtitle: Option<String>,

    #[serde(default)]
    pub portrait_image: AssetRef,
}

impl ContentType for DriverProfileFields {
    const ID: &'static str = "driverProfile";
}

impl DriverProfileFields {
    /// Seasons raced including `year` (a driver starting in 2019 has 8 seasons in 2026).
    pub const fn seasons_racing(&self, year: i32) -> u32 {
        let seasons = year - self.start_year + 1;
        if seasons > 0 { seasons as u32 } else { 0 }
    }
}

// ============================================================================
// Entry Aliases
// ============================================================================

pub type RaceEntry = Entry<RaceFields>;
pub type SponsorEntry = Entry<SponsorFields>;
pub type PageContentEntry = Entry<PageContentFields>;
pub type DriverStatsEntry = Entry<DriverStatsFields>;
pub type MediaItemEntry = Entry<MediaItemFields>;
pub type VideoEntry = Entry<VideoFields>;
pub type PressPhotoEntry = Entry<PressPhotoFields>;
pub type SponsorPackageEntry = Entry<SponsorPackageFields>;
pub type PageSectionEntry = Entry<PageSectionFields>;
pub type SiteConfigEntry = Entry<SiteConfigFields>;
pub type DriverProfileEntry = Entry<DriverProfileFields>;
