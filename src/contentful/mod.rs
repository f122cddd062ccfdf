//! Contentful content access.
//!
//! # Layers
//!
//! ```text
//! Content (queries)  ── one fn per site question, degrade-to-empty
//!     │
//! Accessor (client)  ── lazily built store per mode (published / preview)
//!     │
//! ContentStore       ── DeliveryClient (HTTPS) or MemoryStore (fixtures, tests)
//!     │
//! EntryQuery         ── filter object, rendered to URL params or evaluated in memory
//! ```
//!
//! Typed records live in [`model`]; asset fields are [`AssetRef`].

mod asset;
mod client;
mod delivery;
mod entry;
mod error;
mod links;
mod memory;
pub mod model;
mod queries;
mod query;
mod store;

pub use asset::{Asset, AssetDetails, AssetFields, AssetFile, AssetRef, ImageDimensions};
pub use client::{Accessor, Credentials, Endpoint};
pub use delivery::{DeliveryClient, decode_response};
pub use entry::{ContentType, Entry, EntryCollection, Link, LinkSys, RichText, Sys};
pub use error::ContentError;
pub use links::Includes;
pub use memory::MemoryStore;
pub use model::PageId;
pub use queries::Content;
pub use query::{EntryQuery, Order};
pub use store::ContentStore;
