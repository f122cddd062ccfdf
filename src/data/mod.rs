//! Site-wide data for the templates.
//!
//! The site build reads plain JSON files; this module produces them.
//!
//! ```text
//! Content ──► SiteData::collect ──► SiteData::write_to ──► <data_dir>/*.json
//!             (all queries, joined)
//! ```
//!
//! # Data Files
//!
//! | File             | Contents                                        |
//! |------------------|-------------------------------------------------|
//! | `meta.json`      | Fetch time, mode, answering store, seasons      |
//! | `site.json`      | Site configuration singleton (or `null`)        |
//! | `driver.json`    | Driver profile singleton (or `null`)            |
//! | `stats.json`     | Driver stats, current and previous season       |
//! | `races.json`     | Current season calendar                         |
//! | `upcoming.json`  | Races from today on                             |
//! | `next-race.json` | Next race with countdown (or `null`)            |
//! | `results.json`   | Completed races, newest first                   |
//! | `sponsors.json`  | Active sponsors                                 |
//! | `packages.json`  | Active sponsor packages                         |
//! | `media.json`     | Featured gallery items                          |
//! | `videos.json`    | Featured videos                                 |
//! | `press.json`     | Press photos                                    |
//! | `pages.json`     | Page content by slug                            |
//! | `sections.json`  | Page sections by page and key                   |

mod snapshot;
mod types;

pub use snapshot::SiteData;
pub use types::{NextRace, SeasonStats, SnapshotMeta};
