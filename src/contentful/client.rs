//! Content store accessor.
//!
//! Hands out the store for published or preview reads. Stores are built
//! lazily, once per mode, and never touch the network on construction.
//! Missing credentials are not an error: [`Accessor::client`] returns `None`
//! and the query layer serves empty results.

use super::delivery::DeliveryClient;
use super::memory::MemoryStore;
use super::store::ContentStore;
use crate::config::ContentfulConfig;
use crate::warn;
use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, OnceLock},
    time::Duration,
};

/// Connection settings resolved from `[contentful]` and the environment.
#[derive(Clone)]
pub struct Credentials {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub preview_token: Option<String>,
    pub environment: String,
    pub locale: Option<String>,
    pub host: String,
    pub preview_host: String,
    pub include: u8,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

/// What one mode needs to talk to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub space_id: &'a str,
    pub token: &'a str,
    pub host: &'a str,
}

impl Credentials {
    pub fn from_config(config: &ContentfulConfig) -> Self {
        Self {
            space_id: config.space_id.clone(),
            access_token: config.access_token.clone(),
            preview_token: config.preview_token.clone(),
            environment: config.environment.clone(),
            locale: config.locale.clone(),
            host: config.host.clone(),
            preview_host: config.preview_host.clone(),
            include: config.include,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
        }
    }

    /// Endpoint for a mode, if configured.
    ///
    /// Published reads need a space id and access token. Preview reads also
    /// need the preview token, which replaces the access token on the wire.
    pub fn endpoint(&self, preview: bool) -> Option<Endpoint<'_>> {
        let space_id = non_empty(self.space_id.as_deref())?;
        let access_token = non_empty(self.access_token.as_deref())?;

        Some(if preview {
            Endpoint {
                space_id,
                token: non_empty(self.preview_token.as_deref())?,
                host: &self.preview_host,
            }
        } else {
            Endpoint {
                space_id,
                token: access_token,
                host: &self.host,
            }
        })
    }

    pub fn is_configured(&self, preview: bool) -> bool {
        self.endpoint(preview).is_some()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from_config(&ContentfulConfig::default())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("space_id", &self.space_id)
            .field("has_access_token", &self.access_token.is_some())
            .field("has_preview_token", &self.preview_token.is_some())
            .field("environment", &self.environment)
            .field("host", &self.host)
            .field("preview_host", &self.preview_host)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

type StoreCell = OnceLock<Option<Arc<dyn ContentStore>>>;

/// Lazily-built stores for both read modes.
pub struct Accessor {
    credentials: Credentials,
    fixtures: Option<PathBuf>,
    published: StoreCell,
    preview: StoreCell,
}

impl Accessor {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            fixtures: None,
            published: OnceLock::new(),
            preview: OnceLock::new(),
        }
    }

    /// Accessor for a `[contentful]` section. A fixture file, when set, serves
    /// both modes instead of the API.
    pub fn from_config(config: &ContentfulConfig) -> Self {
        Self {
            fixtures: config.fixtures.clone(),
            ..Self::new(Credentials::from_config(config))
        }
    }

    /// Accessor over ready-made stores. `None` leaves a mode unconfigured.
    pub fn with_stores(
        published: Option<Arc<dyn ContentStore>>,
        preview: Option<Arc<dyn ContentStore>>,
    ) -> Self {
        let accessor = Self::new(Credentials::default());
        let _ = accessor.published.set(published);
        let _ = accessor.preview.set(preview);
        accessor
    }

    /// Accessor that never has a store.
    pub fn unconfigured() -> Self {
        Self::with_stores(None, None)
    }

    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The store for a mode, built on first use.
    pub fn client(&self, preview: bool) -> Option<Arc<dyn ContentStore>> {
        let cell = if preview { &self.preview } else { &self.published };
        cell.get_or_init(|| self.build(preview)).clone()
    }

    fn build(&self, preview: bool) -> Option<Arc<dyn ContentStore>> {
        if let Some(path) = &self.fixtures {
            return match MemoryStore::from_json_file(path) {
                Ok(store) => Some(Arc::new(store)),
                Err(err) => {
                    warn!("contentful"; "cannot load fixtures: {}", err);
                    None
                }
            };
        }

        if !self.credentials.is_configured(preview) {
            return None;
        }

        match DeliveryClient::new(&self.credentials, preview) {
            Ok(client) => Some(Arc::new(client)),
            Err(err) => {
                warn!("contentful"; "{}", err);
                None
            }
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("credentials", &self.credentials)
            .field("fixtures", &self.fixtures)
            .field("published", &self.published.get())
            .field("preview", &self.preview.get())
            .finish()
    }
}
