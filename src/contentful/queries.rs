//! Site queries.
//!
//! One async function per question the templates ask. All of them share one
//! contract, enforced in [`Content::fetch_list`] and [`Content::fetch_one`]:
//!
//! - no store for the mode: empty list / `None`, with a warning
//! - store error: empty list / `None`, with a warning naming the query
//! - an item that does not decode: skipped, with a warning
//!
//! Nothing is retried and no error reaches the caller. A build with a broken
//! CMS produces a site with empty sections, never a failed build.

use super::client::Accessor;
use super::entry::{ContentType, Entry};
use super::model::{
    DriverProfileEntry, DriverStatsEntry, MediaCategory, MediaItemEntry, PackageTier,
    PageContentEntry, PageId, PageSectionEntry, PageSectionsByKey, PressPhotoEntry, RaceEntry,
    SiteConfigEntry, SponsorEntry, SponsorPackageEntry, VideoCategory, VideoEntry,
};
use super::model::{
    DriverProfileFields, DriverStatsFields, MediaItemFields, PageContentFields, PageSectionFields,
    PressPhotoFields, RaceFields, SiteConfigFields, SponsorFields, SponsorPackageFields,
    VideoFields,
};
use super::query::EntryQuery;
use crate::config::{Config, ContentConfig};
use crate::utils::date::today_utc;
use crate::warn;
use serde_json::Value;

/// Query entry point: a store accessor plus the site's default seasons and limits.
#[derive(Debug)]
pub struct Content {
    accessor: Accessor,
    settings: ContentConfig,
}

impl Content {
    pub const fn new(accessor: Accessor, settings: ContentConfig) -> Self {
        Self { accessor, settings }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Accessor::from_config(&config.contentful),
            config.content.clone(),
        )
    }

    pub const fn settings(&self) -> &ContentConfig {
        &self.settings
    }

    pub const fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    // ------------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------------

    /// Run a list query under the degrade-to-empty contract.
    pub async fn fetch_list<T: ContentType>(
        &self,
        operation: &str,
        query: EntryQuery,
        preview: bool,
    ) -> Vec<Entry<T>> {
        debug_assert_eq!(query.content_type, T::ID);

        let Some(store) = self.accessor.client(preview) else {
            warn!("contentful"; "{}: client not configured, returning empty", operation);
            return Vec::new();
        };

        match store.get_entries(&query).await {
            Ok(collection) => decode_items(operation, collection.items),
            Err(err) => {
                warn!(
                    "contentful";
                    "{} failed ({}, {}): {}",
                    operation, store.label(), query.describe(), err
                );
                Vec::new()
            }
        }
    }

    /// Run a single-record query: `limit = 1`, first match or `None`.
    pub async fn fetch_one<T: ContentType>(
        &self,
        operation: &str,
        query: EntryQuery,
        preview: bool,
    ) -> Option<Entry<T>> {
        self.fetch_list(operation, query.limit(1), preview)
            .await
            .into_iter()
            .next()
    }

    // ------------------------------------------------------------------------
    // Races
    // ------------------------------------------------------------------------

    /// Races of a season (default: current season), by date.
    pub async fn races(&self, season: Option<&str>, preview: bool) -> Vec<RaceEntry> {
        let season = season.unwrap_or(self.settings.current_season.as_str());
        let query = EntryQuery::new(RaceFields::ID).eq("season", season).asc("date");
        self.fetch_list(&format!("races({season})"), query, preview).await
    }

    /// Races from today (UTC) on, soonest first.
    pub async fn upcoming_races(&self, limit: Option<u32>, preview: bool) -> Vec<RaceEntry> {
        let limit = limit.unwrap_or(self.settings.upcoming_limit);
        self.upcoming_races_since(&today_utc(), limit, preview).await
    }

    /// Races on or after `today` (`YYYY-MM-DD`), soonest first.
    pub async fn upcoming_races_since(
        &self,
        today: &str,
        limit: u32,
        preview: bool,
    ) -> Vec<RaceEntry> {
        let query = EntryQuery::new(RaceFields::ID)
            .gte("date", today)
            .asc("date")
            .limit(limit);
        self.fetch_list(&format!("upcoming_races({today})"), query, preview)
            .await
    }

    pub async fn next_race(&self, preview: bool) -> Option<RaceEntry> {
        self.next_race_since(&today_utc(), preview).await
    }

    pub async fn next_race_since(&self, today: &str, preview: bool) -> Option<RaceEntry> {
        self.upcoming_races_since(today, 1, preview)
            .await
            .into_iter()
            .next()
    }

    /// Races with a result, newest first, optionally for one season.
    pub async fn results(&self, season: Option<&str>, preview: bool) -> Vec<RaceEntry> {
        let query = EntryQuery::new(RaceFields::ID)
            .exists("result", true)
            .eq_opt("season", season)
            .desc("date");
        self.fetch_list(&format!("results({})", season.unwrap_or("all")), query, preview)
            .await
    }

    // ------------------------------------------------------------------------
    // Sponsors
    // ------------------------------------------------------------------------

    /// Active sponsors by name.
    pub async fn sponsors(&self, preview: bool) -> Vec<SponsorEntry> {
        let query = EntryQuery::new(SponsorFields::ID)
            .eq("active", true)
            .asc("name");
        self.fetch_list("sponsors", query, preview).await
    }

    /// Active sponsor packages by display order.
    pub async fn sponsor_packages(&self, preview: bool) -> Vec<SponsorPackageEntry> {
        let query = EntryQuery::new(SponsorPackageFields::ID)
            .eq("active", true)
            .asc("displayOrder");
        self.fetch_list("sponsor_packages", query, preview).await
    }

    pub async fn sponsor_package_by_tier(
        &self,
        tier: PackageTier,
        preview: bool,
    ) -> Option<SponsorPackageEntry> {
        let query = EntryQuery::new(SponsorPackageFields::ID)
            .eq("active", true)
            .eq("tier", tier.as_str());
        self.fetch_one(&format!("sponsor_package_by_tier({tier})"), query, preview)
            .await
    }

    // ------------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------------

    pub async fn page_content(&self, slug: &str, preview: bool) -> Option<PageContentEntry> {
        let query = EntryQuery::new(PageContentFields::ID).eq("slug", slug);
        self.fetch_one(&format!("page_content({slug})"), query, preview)
            .await
    }

    /// Sections of one page, in CMS order.
    pub async fn page_sections(&self, page: PageId, preview: bool) -> Vec<PageSectionEntry> {
        let query = EntryQuery::new(PageSectionFields::ID).eq("page", page.as_str());
        self.fetch_list(&format!("page_sections({page})"), query, preview)
            .await
    }

    /// Sections of one page, keyed for template lookup.
    pub async fn page_sections_by_key(&self, page: PageId, preview: bool) -> PageSectionsByKey {
        self.page_sections(page, preview).await.into_iter().collect()
    }

    pub async fn page_section(&self, key: &str, preview: bool) -> Option<PageSectionEntry> {
        let query = EntryQuery::new(PageSectionFields::ID).eq("key", key);
        self.fetch_one(&format!("page_section({key})"), query, preview)
            .await
    }

    // ------------------------------------------------------------------------
    // Stats and singletons
    // ------------------------------------------------------------------------

    /// Stats of a season (default: the configured stats season).
    pub async fn driver_stats(&self, season: Option<&str>, preview: bool) -> Option<DriverStatsEntry> {
        let season = season.unwrap_or(self.settings.driver_stats_season.as_str());
        let query = EntryQuery::new(DriverStatsFields::ID).eq("season", season);
        self.fetch_one(&format!("driver_stats({season})"), query, preview)
            .await
    }

    pub async fn site_config(&self, preview: bool) -> Option<SiteConfigEntry> {
        self.fetch_one("site_config", EntryQuery::new(SiteConfigFields::ID), preview)
            .await
    }

    pub async fn driver_profile(&self, preview: bool) -> Option<DriverProfileEntry> {
        self.fetch_one(
            "driver_profile",
            EntryQuery::new(DriverProfileFields::ID),
            preview,
        )
        .await
    }

    // ------------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------------

    /// Gallery items, newest first.
    pub async fn media_items(
        &self,
        category: Option<MediaCategory>,
        season: Option<&str>,
        preview: bool,
    ) -> Vec<MediaItemEntry> {
        let query = EntryQuery::new(MediaItemFields::ID)
            .eq_opt("category", category.map(MediaCategory::as_str))
            .eq_opt("season", season)
            .desc("date");
        self.fetch_list("media_items", query, preview).await
    }

    pub async fn featured_media_items(&self, limit: Option<u32>, preview: bool) -> Vec<MediaItemEntry> {
        let limit = limit.unwrap_or(self.settings.featured_media_limit);
        let query = EntryQuery::new(MediaItemFields::ID)
            .eq("featured", true)
            .desc("date")
            .limit(limit);
        self.fetch_list("featured_media_items", query, preview).await
    }

    /// Items carrying any of `tags`. No tags means no items (and no request).
    ///
    /// A tag containing commas counts as several tags.
    pub async fn media_items_by_tags(&self, tags: &[String], preview: bool) -> Vec<MediaItemEntry> {
        let query = EntryQuery::new(MediaItemFields::ID)
            .any_of("tags", tags)
            .desc("date");
        if query.any_of.iter().any(|(_, set)| set.is_empty()) {
            return Vec::new();
        }
        self.fetch_list(
            &format!("media_items_by_tags({})", tags.join(",")),
            query,
            preview,
        )
        .await
    }

    /// Full-text search over media items.
    pub async fn search_media_items(&self, text: &str, preview: bool) -> Vec<MediaItemEntry> {
        let query = EntryQuery::new(MediaItemFields::ID)
            .search(text)
            .desc("date");
        self.fetch_list(&format!("search_media_items({text})"), query, preview)
            .await
    }

    /// Videos, newest upload first.
    pub async fn videos(
        &self,
        category: Option<VideoCategory>,
        season: Option<&str>,
        preview: bool,
    ) -> Vec<VideoEntry> {
        let query = EntryQuery::new(VideoFields::ID)
            .eq_opt("category", category.map(VideoCategory::as_str))
            .eq_opt("season", season)
            .desc("uploadDate");
        self.fetch_list("videos", query, preview).await
    }

    pub async fn featured_videos(&self, limit: Option<u32>, preview: bool) -> Vec<VideoEntry> {
        let limit = limit.unwrap_or(self.settings.featured_video_limit);
        let query = EntryQuery::new(VideoFields::ID)
            .eq("featured", true)
            .desc("uploadDate")
            .limit(limit);
        self.fetch_list("featured_videos", query, preview).await
    }

    /// Press photos, newest first.
    pub async fn press_photos(&self, category: Option<&str>, preview: bool) -> Vec<PressPhotoEntry> {
        let query = EntryQuery::new(PressPhotoFields::ID)
            .eq_opt("category", category)
            .desc("date");
        self.fetch_list("press_photos", query, preview).await
    }
}

/// Decode raw items, skipping (and reporting) the ones that do not fit `T`.
fn decode_items<T: ContentType>(operation: &str, items: Vec<Value>) -> Vec<Entry<T>> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item
                .pointer("/sys/id")
                .and_then(Value::as_str)
                .unwrap_or("<no id>")
                .to_owned();
            match serde_json::from_value::<Entry<T>>(item) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("contentful"; "{}: skipping {} entry `{}`: {}", operation, T::ID, id, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contentful::{ContentStore, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;

    fn entry(content_type: &str, id: &str, fields: Value) -> Value {
        json!({
            "sys": {"id": id, "type": "Entry", "contentType": {"sys": {"type": "Link", "linkType": "ContentType", "id": content_type}}},
            "fields": fields
        })
    }

    fn race(id: &str, date: &str, season: &str, result: Option<u32>) -> Value {
        let mut fields = json!({
            "title": format!("Løb {id}"),
            "date": date,
            "track": "Padborg Park",
            "location": "Padborg",
            "country": "DK",
            "championship": "DM",
            "season": season
        });
        if let Some(result) = result {
            fields["result"] = json!(result);
        }
        entry("race", id, fields)
    }

    fn media(id: &str, date: &str, tags: &[&str], featured: bool) -> Value {
        let description = if id == "m2" { "Podie i regnvejr" } else { "Træning" };
        let category = if featured { "racing-action" } else { "behind-scenes" };
        let season = &date[..4];
        entry(
            "mediaItem",
            id,
            json!({
                "title": format!("Billede {id}"),
                "description": description,
                "type": "image",
                "category": category,
                "tags": tags,
                "date": date,
                "featured": featured,
                "season": season
            }),
        )
    }

    fn content_with(entries: Vec<Value>) -> (Content, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new(entries));
        let published: Arc<dyn ContentStore> = store.clone();
        let content = Content::new(
            Accessor::with_stores(Some(published), None),
            ContentConfig::default(),
        );
        (content, store)
    }

    fn ids<T>(entries: &[Entry<T>]) -> Vec<&str> {
        entries.iter().map(Entry::id).collect()
    }

    fn season_fixture() -> Vec<Value> {
        vec![
            race("past1", "2026-04-18", "2026", Some(2)),
            race("past2", "2026-05-09", "2026", Some(5)),
            race("next1", "2026-06-13", "2026", None),
            race("next3", "2026-09-05", "2026", None),
            race("next2", "2026-08-01", "2026", None),
            race("old", "2025-08-01", "2025", Some(1)),
        ]
    }

    #[tokio::test]
    async fn test_unconfigured_returns_empty() {
        let content = Content::new(Accessor::unconfigured(), ContentConfig::default());

        assert!(content.races(None, false).await.is_empty());
        assert!(content.sponsors(false).await.is_empty());
        assert!(content.next_race(false).await.is_none());
        assert!(content.site_config(false).await.is_none());
        assert!(content.page_content("forside", true).await.is_none());
    }

    #[tokio::test]
    async fn test_preview_without_preview_store_makes_no_call() {
        let (content, store) = content_with(season_fixture());

        assert!(content.races(None, true).await.is_empty());
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_failing_store_returns_empty() {
        let (content, store) = content_with(season_fixture());
        store.set_failing(true);

        assert!(content.races(None, false).await.is_empty());
        assert!(content.results(None, false).await.is_empty());
        assert!(content.driver_stats(None, false).await.is_none());
        assert_eq!(store.calls(), 3);
    }

    /// Every query, reduced to the number of records it returned.
    async fn result_counts(content: &Content, preview: bool) -> Vec<(&'static str, usize)> {
        let tags = ["padborg".to_owned()];
        vec![
            ("races", content.races(None, preview).await.len()),
            ("upcoming_races", content.upcoming_races(None, preview).await.len()),
            (
                "upcoming_races_since",
                content.upcoming_races_since("2026-01-01", 5, preview).await.len(),
            ),
            ("next_race", content.next_race(preview).await.into_iter().count()),
            (
                "next_race_since",
                content.next_race_since("2026-01-01", preview).await.into_iter().count(),
            ),
            ("results", content.results(None, preview).await.len()),
            ("sponsors", content.sponsors(preview).await.len()),
            ("sponsor_packages", content.sponsor_packages(preview).await.len()),
            (
                "sponsor_package_by_tier",
                content
                    .sponsor_package_by_tier(PackageTier::Gold, preview)
                    .await
                    .into_iter()
                    .count(),
            ),
            ("page_content", content.page_content("forside", preview).await.into_iter().count()),
            ("page_sections", content.page_sections(PageId::Forside, preview).await.len()),
            (
                "page_sections_by_key",
                content.page_sections_by_key(PageId::Forside, preview).await.len(),
            ),
            ("page_section", content.page_section("footer-cta", preview).await.into_iter().count()),
            ("driver_stats", content.driver_stats(None, preview).await.into_iter().count()),
            ("site_config", content.site_config(preview).await.into_iter().count()),
            ("driver_profile", content.driver_profile(preview).await.into_iter().count()),
            ("media_items", content.media_items(None, None, preview).await.len()),
            ("featured_media_items", content.featured_media_items(None, preview).await.len()),
            ("media_items_by_tags", content.media_items_by_tags(&tags, preview).await.len()),
            ("search_media_items", content.search_media_items("regn", preview).await.len()),
            ("videos", content.videos(None, None, preview).await.len()),
            ("featured_videos", content.featured_videos(None, preview).await.len()),
            ("press_photos", content.press_photos(None, preview).await.len()),
        ]
    }

    #[tokio::test]
    async fn test_every_query_degrades_when_unconfigured() {
        let content = Content::new(Accessor::unconfigured(), ContentConfig::default());

        for preview in [false, true] {
            for (query, count) in result_counts(&content, preview).await {
                assert_eq!(count, 0, "{query} (preview: {preview})");
            }
        }
    }

    #[tokio::test]
    async fn test_every_query_degrades_when_store_fails() {
        let (content, store) = content_with(season_fixture());
        store.set_failing(true);

        let counts = result_counts(&content, false).await;
        for (query, count) in &counts {
            assert_eq!(*count, 0, "{query}");
        }
        // One request per query, none retried
        assert_eq!(store.calls(), counts.len());

        store.set_failing(false);
        assert_eq!(content.results(None, false).await.len(), 3);
    }

    #[tokio::test]
    async fn test_races_by_season_in_date_order() {
        let (content, _) = content_with(season_fixture());

        let races = content.races(None, false).await;
        assert_eq!(ids(&races), ["past1", "past2", "next1", "next2", "next3"]);

        let races = content.races(Some("2025"), false).await;
        assert_eq!(ids(&races), ["old"]);
    }

    #[tokio::test]
    async fn test_upcoming_and_next_race() {
        let (content, _) = content_with(season_fixture());

        let upcoming = content.upcoming_races_since("2026-06-01", 5, false).await;
        assert_eq!(ids(&upcoming), ["next1", "next2", "next3"]);

        let upcoming = content.upcoming_races_since("2026-06-01", 2, false).await;
        assert_eq!(ids(&upcoming), ["next1", "next2"]);

        let next = content.next_race_since("2026-06-01", false).await.unwrap();
        assert_eq!(next.id(), "next1");
        assert!(!next.fields.is_completed());

        // A race today still counts as upcoming
        let next = content.next_race_since("2026-06-13", false).await.unwrap();
        assert_eq!(next.id(), "next1");

        assert!(content.next_race_since("2027-01-01", false).await.is_none());
    }

    #[tokio::test]
    async fn test_queries_are_repeatable() {
        let (content, store) = content_with(season_fixture());

        let first = content.upcoming_races_since("2026-06-01", 5, false).await;
        let second = content.upcoming_races_since("2026-06-01", 5, false).await;
        assert_eq!(first, second);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn test_results_newest_first() {
        let (content, _) = content_with(season_fixture());

        let results = content.results(None, false).await;
        assert_eq!(ids(&results), ["past2", "past1", "old"]);
        assert!(results.iter().all(|race| race.fields.is_completed()));

        let results = content.results(Some("2026"), false).await;
        assert_eq!(ids(&results), ["past2", "past1"]);
    }

    #[tokio::test]
    async fn test_undecodable_items_are_skipped() {
        let mut entries = season_fixture();
        entries.push(entry("race", "broken", json!({"title": "Mangler dato", "season": "2026"})));
        let (content, _) = content_with(entries);

        let races = content.races(Some("2026"), false).await;
        assert_eq!(races.len(), 5);
        assert!(races.iter().all(|race| race.id() != "broken"));
    }

    #[tokio::test]
    async fn test_sponsors_active_by_name() {
        let sponsor = |id: &str, name: &str, active: bool| {
            entry("sponsor", id, json!({"name": name, "tier": "guld", "active": active}))
        };
        let (content, _) = content_with(vec![
            sponsor("s1", "Vejle Dæk", true),
            sponsor("s2", "Andersen Auto", true),
            sponsor("s3", "Tidligere ApS", false),
        ]);

        let sponsors = content.sponsors(false).await;
        assert_eq!(ids(&sponsors), ["s2", "s1"]);
    }

    #[tokio::test]
    async fn test_malformed_logo_keeps_sponsor() {
        let (content, _) = content_with(vec![
            entry(
                "sponsor",
                "s1",
                json!({"name": "Vejle Dæk", "tier": "guld", "active": true, "logo": "logo.png"}),
            ),
            entry(
                "sponsor",
                "s2",
                json!({"name": "Andersen Auto", "tier": "sølv", "active": true, "logo": {"fields": {"file": 3}}}),
            ),
        ]);

        let sponsors = content.sponsors(false).await;
        assert_eq!(ids(&sponsors), ["s2", "s1"]);
        assert!(sponsors.iter().all(|sponsor| sponsor.fields.logo.is_absent()));
    }

    #[tokio::test]
    async fn test_short_form_content_type() {
        let (content, _) = content_with(vec![json!({
            "sys": {"id": "s1", "contentType": {"sys": {"id": "sponsor"}}},
            "fields": {"name": "Vejle Dæk", "tier": "guld", "active": true}
        })]);

        let sponsors = content.sponsors(false).await;
        assert_eq!(ids(&sponsors), ["s1"]);
        assert_eq!(sponsors[0].sys.content_type_id(), Some("sponsor"));
    }

    #[tokio::test]
    async fn test_sponsor_packages() {
        let package = |id: &str, tier: &str, order: i32, active: bool| {
            entry(
                "sponsorPackage",
                id,
                json!({"name": id, "tier": tier, "price": 5000, "features": [], "displayOrder": order, "active": active}),
            )
        };
        let (content, _) = content_with(vec![
            package("gold", "gold", 3, true),
            package("bronze", "bronze", 1, true),
            package("silver", "silver", 2, true),
            package("old-gold", "gold", 0, false),
        ]);

        let packages = content.sponsor_packages(false).await;
        assert_eq!(ids(&packages), ["bronze", "silver", "gold"]);

        let gold = content.sponsor_package_by_tier(PackageTier::Gold, false).await.unwrap();
        assert_eq!(gold.id(), "gold");
    }

    #[tokio::test]
    async fn test_page_content_by_slug() {
        let page = |id: &str, slug: &str| {
            entry(
                "pageContent",
                id,
                json!({"slug": slug, "title": slug, "content": {"nodeType": "document", "content": []}}),
            )
        };
        let (content, _) = content_with(vec![page("p1", "forside"), page("p2", "om-anton")]);

        let found = content.page_content("om-anton", false).await.unwrap();
        assert_eq!(found.id(), "p2");
        assert!(content.page_content("findes-ikke", false).await.is_none());
    }

    #[tokio::test]
    async fn test_page_sections() {
        let section = |id: &str, key: &str, page: &str| {
            entry("pageSection", id, json!({"key": key, "page": page, "heading": id}))
        };
        let (content, _) = content_with(vec![
            section("a", "forside-hero", "forside"),
            section("b", "forside-sponsors-heading", "forside"),
            section("c", "footer-cta", "global"),
        ]);

        let sections = content.page_sections(PageId::Forside, false).await;
        assert_eq!(sections.len(), 2);

        let by_key = content.page_sections_by_key(PageId::Forside, false).await;
        assert_eq!(by_key.heading("forside-sponsors-heading"), Some("b"));
        assert!(by_key.get("footer-cta").is_none());

        let footer = content.page_section("footer-cta", false).await.unwrap();
        assert_eq!(footer.fields.page, PageId::Global);
    }

    #[tokio::test]
    async fn test_driver_stats_default_season() {
        let stats = |id: &str, season: &str| {
            entry(
                "driverStats",
                id,
                json!({"season": season, "totalRaces": 12, "wins": 2, "podiums": 5, "fastestLaps": 3}),
            )
        };
        let (content, _) = content_with(vec![stats("s25", "2025"), stats("s26", "2026")]);

        assert_eq!(content.driver_stats(None, false).await.unwrap().id(), "s25");
        assert_eq!(content.driver_stats(Some("2026"), false).await.unwrap().id(), "s26");
        assert!(content.driver_stats(Some("2019"), false).await.is_none());
    }

    #[tokio::test]
    async fn test_media_queries() {
        let (content, _) = content_with(vec![
            media("m1", "2026-05-01", &["padborg"], true),
            media("m2", "2026-06-01", &["regn", "podie"], true),
            media("m3", "2025-07-01", &["padborg", "træning"], false),
        ]);

        let all = content.media_items(None, None, false).await;
        assert_eq!(ids(&all), ["m2", "m1", "m3"]);

        let behind = content
            .media_items(Some(MediaCategory::BehindScenes), None, false)
            .await;
        assert_eq!(ids(&behind), ["m3"]);

        let season = content.media_items(None, Some("2026"), false).await;
        assert_eq!(ids(&season), ["m2", "m1"]);

        let featured = content.featured_media_items(Some(1), false).await;
        assert_eq!(ids(&featured), ["m2"]);

        let tagged = content
            .media_items_by_tags(&["padborg".into(), "sne".into()], false)
            .await;
        assert_eq!(ids(&tagged), ["m1", "m3"]);

        let found = content.search_media_items("REGNVEJR", false).await;
        assert_eq!(ids(&found), ["m2"]);
    }

    #[tokio::test]
    async fn test_media_by_no_tags_skips_request() {
        let (content, store) = content_with(vec![media("m1", "2026-05-01", &["padborg"], true)]);
        assert!(content.media_items_by_tags(&[], false).await.is_empty());
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_media_by_comma_joined_tags() {
        let (content, store) = content_with(vec![
            media("m1", "2026-05-01", &["padborg"], true),
            media("m2", "2026-06-01", &["regn"], true),
            media("m3", "2025-07-01", &["træning"], false),
        ]);

        let tagged = content.media_items_by_tags(&["padborg,regn".into()], false).await;
        assert_eq!(ids(&tagged), ["m2", "m1"]);

        assert!(content.media_items_by_tags(&[",".into()], false).await.is_empty());
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_videos() {
        let video = |id: &str, uploaded: &str, category: &str, featured: bool| {
            entry(
                "video",
                id,
                json!({
                    "title": id,
                    "youtubeUrl": "https://youtu.be/dQw4w9WgXcQ",
                    "category": category,
                    "uploadDate": uploaded,
                    "featured": featured
                }),
            )
        };
        let (content, _) = content_with(vec![
            video("v1", "2026-01-10", "interviews", false),
            video("v2", "2026-03-02", "race-highlights", true),
            video("v3", "2025-11-20", "race-highlights", true),
        ]);

        assert_eq!(ids(&content.videos(None, None, false).await), ["v2", "v1", "v3"]);
        assert_eq!(
            ids(&content.videos(Some(VideoCategory::RaceHighlights), None, false).await),
            ["v2", "v3"]
        );
        assert_eq!(ids(&content.featured_videos(None, false).await), ["v2", "v3"]);
    }

    #[tokio::test]
    async fn test_press_photos() {
        let photo = |id: &str, date: &str, category: &str| {
            entry(
                "pressPhoto",
                id,
                json!({
                    "title": id, "credit": "Foto: JH", "category": category, "date": date,
                    "fileFormat": "jpg", "fileSize": 2048
                }),
            )
        };
        let (content, _) = content_with(vec![
            photo("p1", "2025-03-01", "portrait"),
            photo("p2", "2026-02-01", "action"),
        ]);

        assert_eq!(ids(&content.press_photos(None, false).await), ["p2", "p1"]);
        assert_eq!(ids(&content.press_photos(Some("portrait"), false).await), ["p1"]);
    }

    #[tokio::test]
    async fn test_singletons() {
        let (content, _) = content_with(vec![
            entry(
                "siteConfig",
                "cfg",
                json!({
                    "siteName": "Anton Madsen Racing", "tagline": "Fra Vejle til verden",
                    "contactEmail": "kontakt@example.dk", "currentSeason": "2026",
                    "previousSeason": "2025", "socialInstagram": "https://instagram.com/x",
                    "socialFacebook": "https://facebook.com/x", "navigationItems": ["Forside", "Kalender"]
                }),
            ),
            entry(
                "driverProfile",
                "anton",
                json!({
                    "name": "Anton Madsen", "age": 12, "city": "Vejle", "team": "Madsen Racing",
                    "class": "Rotax Junior", "kartBrand": "Tony Kart", "number": 22,
                    "startYear": 2019, "dreamQuote": "F1", "dreamDescription": "..."
                }),
            ),
        ]);

        let site = content.site_config(false).await.unwrap();
        assert_eq!(site.fields.navigation_items, ["Forside", "Kalender"]);

        let driver = content.driver_profile(false).await.unwrap();
        assert_eq!(driver.fields.number, 22);
    }

    #[tokio::test]
    async fn test_preview_store_is_separate() {
        let published: Arc<dyn ContentStore> =
            Arc::new(MemoryStore::new(vec![race("pub", "2026-06-13", "2026", None)]));
        let draft: Arc<dyn ContentStore> =
            Arc::new(MemoryStore::new(vec![race("draft", "2026-06-13", "2026", None)]));
        let content = Content::new(
            Accessor::with_stores(Some(published), Some(draft)),
            ContentConfig::default(),
        );

        assert_eq!(ids(&content.races(None, false).await), ["pub"]);
        assert_eq!(ids(&content.races(None, true).await), ["draft"]);
    }
}
