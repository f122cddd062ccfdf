//! Project configuration management for `kartsite.toml`.
//!
//! # Sections
//!
//! | Section         | Purpose                                           |
//! |-----------------|---------------------------------------------------|
//! | `[contentful]`  | Space, environment, hosts, timeouts, fixtures     |
//! | `[content]`     | Seasons, pages and list sizes fetched for a build |
//! | `[output]`      | Where the JSON data files go                      |
//!
//! Credentials are layered on top from the environment:
//!
//! | Variable                   | Field                      |
//! |----------------------------|----------------------------|
//! | `CONTENTFUL_SPACE_ID`      | `contentful.space_id`      |
//! | `CONTENTFUL_ACCESS_TOKEN`  | `contentful.access_token`  |
//! | `CONTENTFUL_PREVIEW_TOKEN` | `contentful.preview_token` |
//! | `CONTENTFUL_ENVIRONMENT`   | `contentful.environment`   |
//!
//! A missing config file is not an error: a checkout without secrets still
//! builds, every query just comes back empty.
//!
//! # Example
//!
//! ```toml
//! [contentful]
//! environment = "master"
//! locale = "da-DK"
//!
//! [content]
//! current_season = "2026"
//! previous_season = "2025"
//!
//! [output]
//! data_dir = "src/data"
//! ```

mod content;
mod contentful;
pub mod defaults;
mod error;
mod output;

pub use content::ContentConfig;
pub use contentful::ContentfulConfig;
pub use error::ConfigError;
pub use output::OutputConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the space identifier.
pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable holding the Delivery API token.
pub const ENV_ACCESS_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";
/// Environment variable holding the Preview API token.
pub const ENV_PREVIEW_TOKEN: &str = "CONTENTFUL_PREVIEW_TOKEN";
/// Environment variable overriding the Contentful environment.
pub const ENV_ENVIRONMENT: &str = "CONTENTFUL_ENVIRONMENT";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing kartsite.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// CMS connection settings
    #[serde(default)]
    pub contentful: ContentfulConfig,

    /// What the site build fetches
    #[serde(default)]
    pub content: ContentConfig,

    /// Data file output
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load configuration for a CLI invocation.
    ///
    /// Reads the config file if present, resolves paths against the root,
    /// applies CLI overrides and the process environment, then validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = Self::normalize_path(&root);
        config.config_path = Self::normalize_path(&config_path);
        config.update_with_cli(cli);
        config.resolve_paths();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Update config options from CLI arguments
    fn update_with_cli(&mut self, cli: &Cli) {
        if let Commands::Fetch { output, .. } = &cli.command {
            Self::update_option(&mut self.output.data_dir, output.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve relative paths against the project root.
    fn resolve_paths(&mut self) {
        self.output.data_dir = Self::normalize_path(&self.root.join(&self.output.data_dir));

        if let Some(fixtures) = &self.contentful.fixtures {
            let expanded = PathBuf::from(shellexpand::tilde(&fixtures.to_string_lossy()).as_ref());
            self.contentful.fixtures = Some(if expanded.is_relative() {
                Self::normalize_path(&self.root.join(expanded))
            } else {
                expanded
            });
        }
    }

    /// Overlay credentials from the environment.
    ///
    /// `lookup` abstracts `std::env::var` so tests never touch process state.
    /// Empty values count as unset.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let c = &mut self.contentful;

        if let Some(space_id) = get(ENV_SPACE_ID) {
            c.space_id = Some(space_id);
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            c.access_token = Some(token);
        }
        if let Some(token) = get(ENV_PREVIEW_TOKEN) {
            c.preview_token = Some(token);
        }
        if let Some(environment) = get(ENV_ENVIRONMENT) {
            c.environment = environment;
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        let c = &self.contentful;

        for (field, host) in [
            ("[contentful.host]", &c.host),
            ("[contentful.preview_host]", &c.preview_host),
        ] {
            if host.is_empty() || host.contains("://") || host.contains('/') {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a bare host name like `cdn.contentful.com`"
                )));
            }
        }

        if c.include > 10 {
            bail!(ConfigError::Validation(
                "[contentful.include] must be between 0 and 10".into()
            ));
        }

        if c.request_timeout_secs == 0 || c.connect_timeout_secs == 0 {
            bail!(ConfigError::Validation(
                "[contentful] timeouts must be at least one second".into()
            ));
        }

        if let Some(fixtures) = &c.fixtures
            && !fixtures.is_file()
        {
            bail!(ConfigError::Validation(format!(
                "[contentful.fixtures] `{}` is not a file",
                fixtures.display()
            )));
        }

        let content = &self.content;
        for (field, season) in [
            ("[content.current_season]", &content.current_season),
            ("[content.previous_season]", &content.previous_season),
            ("[content.driver_stats_season]", &content.driver_stats_season),
        ] {
            if !is_season(season) {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a four-digit year, got `{season}`"
                )));
            }
        }

        if let Some(slug) = content.pages.iter().find(|slug| !is_page_slug(slug)) {
            bail!(ConfigError::Validation(format!(
                "[content.pages] `{slug}` is not a valid slug (a-z, 0-9, -)"
            )));
        }

        if content.upcoming_limit == 0
            || content.featured_media_limit == 0
            || content.featured_video_limit == 0
        {
            bail!(ConfigError::Validation(
                "[content] limits must be greater than zero".into()
            ));
        }

        Ok(())
    }
}

/// Seasons are plain years ("2026").
fn is_season(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Page slugs follow the CMS validation `^[a-z0-9-]+$`.
pub fn is_page_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

// ============================================================================
// Tests
// ============================================================================
