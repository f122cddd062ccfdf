//! Template-facing data types.
//!
//! These wrap CMS records with values the templates would otherwise compute
//! themselves (countdowns, formatted dates) and are serialized into the data
//! files.

use crate::contentful::model::{DriverStatsEntry, RaceEntry};
use crate::utils::date::{self, DateLocale};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The next race with its countdown, exposed in `next-race.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRace {
    #[serde(flatten)]
    pub race: RaceEntry,

    /// Whole days until the race, rounded up. `None` if the date is unparseable.
    pub days_until: Option<i64>,

    /// Preformatted date ("18. apr. 2026").
    pub date_label: String,
}

impl NextRace {
    pub fn new(race: RaceEntry, now: DateTime<Utc>, locale: DateLocale) -> Self {
        let days_until = date::days_until_from(&race.fields.date, now);
        let date_label = date::format_date_in(&race.fields.date, locale);
        Self {
            race,
            days_until,
            date_label,
        }
    }

    /// Countdown text for the hero banner.
    pub fn countdown_label(&self) -> Option<String> {
        Some(match self.days_until? {
            ..=0 => "I dag".to_owned(),
            1 => "I morgen".to_owned(),
            days => format!("Om {days} dage"),
        })
    }
}

/// Headline stats for two seasons, exposed in `stats.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonStats {
    pub current: Option<DriverStatsEntry>,
    pub previous: Option<DriverStatsEntry>,
}

/// Build metadata, exposed in `meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    /// RFC 3339 timestamp of the fetch.
    pub generated_at: String,
    /// Whether draft content was included.
    pub preview: bool,
    /// Store that answered ("delivery", "preview", "fixtures"), `None` when unconfigured.
    pub source: Option<String>,
    pub current_season: String,
    pub previous_season: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn race(date: &str) -> RaceEntry {
        serde_json::from_value(json!({
            "sys": {"id": "r1"},
            "fields": {
                "title": "DM Runde 3",
                "date": date,
                "track": "Vojens Kartbane",
                "location": "Vojens",
                "country": "DK",
                "championship": "DM",
                "season": "2026"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_next_race_countdown() {
        let now = Utc.with_ymd_and_hms(2026, 6, 10, 9, 0, 0).unwrap();
        let next = NextRace::new(race("2026-06-13"), now, DateLocale::Danish);

        assert_eq!(next.days_until, Some(3));
        assert_eq!(next.date_label, "13. jun. 2026");
        assert_eq!(next.countdown_label().as_deref(), Some("Om 3 dage"));
    }

    #[test]
    fn test_countdown_labels() {
        let now = Utc.with_ymd_and_hms(2026, 6, 12, 9, 0, 0).unwrap();
        let tomorrow = NextRace::new(race("2026-06-13"), now, DateLocale::Danish);
        assert_eq!(tomorrow.countdown_label().as_deref(), Some("I morgen"));

        let now = Utc.with_ymd_and_hms(2026, 6, 13, 9, 0, 0).unwrap();
        let today = NextRace::new(race("2026-06-13"), now, DateLocale::Danish);
        assert_eq!(today.countdown_label().as_deref(), Some("I dag"));

        let unknown = NextRace::new(race("snart"), now, DateLocale::Danish);
        assert_eq!(unknown.days_until, None);
        assert_eq!(unknown.countdown_label(), None);
        assert_eq!(unknown.date_label, "snart");
    }

    #[test]
    fn test_next_race_serializes_flat() {
        let now = Utc.with_ymd_and_hms(2026, 6, 10, 0, 0, 0).unwrap();
        let next = NextRace::new(race("2026-06-13"), now, DateLocale::English);
        let value = serde_json::to_value(&next).unwrap();

        assert_eq!(value["sys"]["id"], "r1");
        assert_eq!(value["fields"]["track"], "Vojens Kartbane");
        assert_eq!(value["daysUntil"], 3);
        assert_eq!(value["dateLabel"], "13 Jun 2026");
    }
}
