//! kartsite - Contentful content layer for a kart driver's static site.
//!
//! Reads races, sponsors, media and page copy from Contentful at build time
//! and hands typed records (or JSON data files) to the site templates.
//! Missing credentials or a failing CMS never break the build: queries
//! degrade to empty results and log a warning.

pub mod logger;

pub mod cli;
pub mod config;
pub mod contentful;
pub mod data;
pub mod utils;
