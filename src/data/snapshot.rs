//! Site data snapshot.
//!
//! Runs every site-wide query once, concurrently, and writes the results as
//! JSON data files for the templates.

use super::types::{NextRace, SeasonStats, SnapshotMeta};
use crate::contentful::model::{
    DriverProfileEntry, MediaItemEntry, PageContentEntry, PageSectionsByKey, PressPhotoEntry,
    RaceEntry, SiteConfigEntry, SponsorEntry, SponsorPackageEntry, VideoEntry,
};
use crate::contentful::{Content, PageId};
use crate::logger::ProgressBars;
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Progress bar groups, in display order.
const GROUP_RACES: usize = 0;
const GROUP_SPONSORS: usize = 1;
const GROUP_MEDIA: usize = 2;
const GROUP_PAGES: usize = 3;
const GROUP_SITE: usize = 4;

/// Everything the templates read, fetched in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteData {
    pub meta: SnapshotMeta,
    pub site: Option<SiteConfigEntry>,
    pub driver: Option<DriverProfileEntry>,
    pub stats: SeasonStats,
    /// Current season, by date.
    pub races: Vec<RaceEntry>,
    pub upcoming: Vec<RaceEntry>,
    pub next_race: Option<NextRace>,
    /// All completed races, newest first.
    pub results: Vec<RaceEntry>,
    pub sponsors: Vec<SponsorEntry>,
    pub packages: Vec<SponsorPackageEntry>,
    pub media: Vec<MediaItemEntry>,
    pub videos: Vec<VideoEntry>,
    pub press: Vec<PressPhotoEntry>,
    /// Configured pages by slug; a page missing in the CMS is `null`.
    pub pages: BTreeMap<String, Option<PageContentEntry>>,
    /// Page sections by page, then by key.
    pub sections: BTreeMap<PageId, PageSectionsByKey>,
}

impl SiteData {
    /// Run all site queries concurrently.
    pub async fn collect(content: &Content, preview: bool) -> Self {
        Self::collect_with_progress(content, preview, None).await
    }

    /// Like [`SiteData::collect`], ticking `progress` as each dataset arrives.
    ///
    /// Bars are indexed races, sponsors, media, pages, site (see [`SiteData::progress_groups`]).
    pub async fn collect_with_progress(
        content: &Content,
        preview: bool,
        progress: Option<&ProgressBars>,
    ) -> Self {
        let settings = content.settings();
        let tick = |group: usize| {
            if let Some(progress) = progress {
                progress.inc(group);
            }
        };

        macro_rules! tracked {
            ($group:expr, $fut:expr) => {
                async {
                    let value = $fut.await;
                    tick($group);
                    value
                }
            };
        }

        let (
            site,
            driver,
            stats_current,
            stats_previous,
            races,
            upcoming,
            next_race,
            results,
            sponsors,
            packages,
            media,
            videos,
            press,
            pages,
            sections,
        ) = tokio::join!(
            tracked!(GROUP_SITE, content.site_config(preview)),
            tracked!(GROUP_SITE, content.driver_profile(preview)),
            tracked!(
                GROUP_SITE,
                content.driver_stats(Some(settings.current_season.as_str()), preview)
            ),
            tracked!(
                GROUP_SITE,
                content.driver_stats(Some(settings.previous_season.as_str()), preview)
            ),
            tracked!(GROUP_RACES, content.races(Some(settings.current_season.as_str()), preview)),
            tracked!(GROUP_RACES, content.upcoming_races(None, preview)),
            tracked!(GROUP_RACES, content.next_race(preview)),
            tracked!(GROUP_RACES, content.results(None, preview)),
            tracked!(GROUP_SPONSORS, content.sponsors(preview)),
            tracked!(GROUP_SPONSORS, content.sponsor_packages(preview)),
            tracked!(GROUP_MEDIA, content.featured_media_items(None, preview)),
            tracked!(GROUP_MEDIA, content.featured_videos(None, preview)),
            tracked!(GROUP_MEDIA, content.press_photos(None, preview)),
            async {
                let mut pages = BTreeMap::new();
                for slug in &settings.pages {
                    let page = content.page_content(slug, preview).await;
                    tick(GROUP_PAGES);
                    pages.insert(slug.clone(), page);
                }
                pages
            },
            async {
                let mut sections = BTreeMap::new();
                for &page in &settings.section_pages {
                    let by_key = content.page_sections_by_key(page, preview).await;
                    tick(GROUP_PAGES);
                    sections.insert(page, by_key);
                }
                sections
            },
        );

        let now = Utc::now();
        let meta = SnapshotMeta {
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            preview,
            source: content
                .accessor()
                .client(preview)
                .map(|store| store.label().to_owned()),
            current_season: settings.current_season.clone(),
            previous_season: settings.previous_season.clone(),
        };

        Self {
            meta,
            site,
            driver,
            stats: SeasonStats {
                current: stats_current,
                previous: stats_previous,
            },
            races,
            upcoming,
            next_race: next_race.map(|race| NextRace::new(race, now, settings.locale)),
            results,
            sponsors,
            packages,
            media,
            videos,
            press,
            pages,
            sections,
        }
    }

    /// Progress bar groups for a fetch with these settings.
    pub fn progress_groups(content: &Content) -> [(&'static str, usize); 5] {
        let settings = content.settings();
        [
            ("races", 4),
            ("sponsors", 2),
            ("media", 3),
            ("pages", settings.pages.len() + settings.section_pages.len()),
            ("site", 4),
        ]
    }

    /// Data files as `(file name, JSON value)`, in write order.
    pub fn files(&self) -> Result<Vec<(&'static str, serde_json::Value)>> {
        fn json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
            Ok(serde_json::to_value(value)?)
        }

        Ok(vec![
            ("meta.json", json(&self.meta)?),
            ("site.json", json(&self.site)?),
            ("driver.json", json(&self.driver)?),
            ("stats.json", json(&self.stats)?),
            ("races.json", json(&self.races)?),
            ("upcoming.json", json(&self.upcoming)?),
            ("next-race.json", json(&self.next_race)?),
            ("results.json", json(&self.results)?),
            ("sponsors.json", json(&self.sponsors)?),
            ("packages.json", json(&self.packages)?),
            ("media.json", json(&self.media)?),
            ("videos.json", json(&self.videos)?),
            ("press.json", json(&self.press)?),
            ("pages.json", json(&self.pages)?),
            ("sections.json", json(&self.sections)?),
        ])
    }

    /// Write one pretty-printed JSON file per dataset into `dir`.
    ///
    /// Returns the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;

        self.files()?
            .into_iter()
            .map(|(name, value)| {
                let path = dir.join(name);
                let mut content = serde_json::to_string_pretty(&value)?;
                content.push('\n');
                fs::write(&path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Ok(path)
            })
            .collect()
    }

    /// Record counts for the fetch summary line.
    pub fn summary(&self) -> String {
        let present = |found: bool| if found { "ok" } else { "missing" };
        format!(
            "{} races, {} upcoming, {} results, {} sponsors, {} packages, {} media, {} videos, \
             {} press photos, {}/{} pages, site config {}, driver profile {}",
            self.races.len(),
            self.upcoming.len(),
            self.results.len(),
            self.sponsors.len(),
            self.packages.len(),
            self.media.len(),
            self.videos.len(),
            self.press.len(),
            self.pages.values().filter(|page| page.is_some()).count(),
            self.pages.len(),
            present(self.site.is_some()),
            present(self.driver.is_some()),
        )
    }
}
