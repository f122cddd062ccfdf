//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::contentful::PageId;
use crate::contentful::model::{MediaCategory, PackageTier, VideoCategory};
use crate::utils::youtube::ThumbnailQuality;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Content layer for the kart site: fetch Contentful data for the build
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "kartsite.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch all site data and write the JSON data files
    Fetch {
        /// Read drafts through the Preview API
        #[arg(long)]
        preview: bool,

        /// Data directory (overrides `[output] data_dir`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run one query and print the result as JSON
    Query {
        /// Read drafts through the Preview API
        #[arg(long, global = true)]
        preview: bool,

        #[command(subcommand)]
        what: QueryCommand,
    },

    /// Print the video id and thumbnail of a YouTube URL
    Youtube {
        /// Watch, short-link or embed URL
        url: String,

        /// Thumbnail size
        #[arg(short, long, default_value_t = ThumbnailQuality::High)]
        quality: ThumbnailQuality,
    },
}

/// One query per site question.
#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommand {
    /// Races of a season, by date
    Races {
        /// Season (default: `[content] current_season`)
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Races from today on
    Upcoming {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// The next race
    NextRace,

    /// Completed races, newest first
    Results {
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Active sponsors
    Sponsors,

    /// Active sponsor packages
    Packages,

    /// The active package of one tier
    Package {
        /// bronze, silver or gold
        tier: PackageTier,
    },

    /// Page content by slug
    Page { slug: String },

    /// Sections of one page
    Sections {
        page: PageId,

        /// Print as an object keyed by section key
        #[arg(long)]
        by_key: bool,
    },

    /// One page section by key
    Section { key: String },

    /// Driver stats of a season
    Stats {
        /// Season (default: `[content] driver_stats_season`)
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Site configuration singleton
    SiteConfig,

    /// Driver profile singleton
    DriverProfile,

    /// Gallery items, newest first
    Media {
        #[arg(short, long)]
        category: Option<MediaCategory>,

        #[arg(short, long)]
        season: Option<String>,
    },

    /// Featured gallery items
    FeaturedMedia {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Gallery items carrying any of the tags
    MediaTags {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Full-text search over gallery items
    SearchMedia { text: String },

    /// Videos, newest first
    Videos {
        #[arg(short, long)]
        category: Option<VideoCategory>,

        #[arg(short, long)]
        season: Option<String>,
    },

    /// Featured videos
    FeaturedVideos {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Press photos
    PressPhotos {
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_fetch(&self) -> bool {
        matches!(self.command, Commands::Fetch { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
    pub const fn is_preview(&self) -> bool {
        matches!(
            self.command,
            Commands::Fetch { preview: true, .. } | Commands::Query { preview: true, .. }
        )
    }
    /// Whether the command reads the CMS (and so needs the config).
    pub const fn needs_config(&self) -> bool {
        !matches!(self.command, Commands::Youtube { .. })
    }
}
