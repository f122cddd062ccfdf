//! kartsite - Contentful content layer for a kart driver's static site.

use anyhow::{Context, Result};
use clap::Parser;
use kartsite::cli::{Cli, Commands, QueryCommand};
use kartsite::config::Config;
use kartsite::contentful::Content;
use kartsite::data::SiteData;
use kartsite::logger::ProgressBars;
use kartsite::utils::youtube;
use kartsite::{log, warn};
use serde::Serialize;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Youtube { url, quality } = &cli.command {
        return print_youtube(url, *quality);
    }

    let config = Config::load(&cli)?;
    let content = Content::from_config(&config);

    match &cli.command {
        Commands::Fetch { preview, .. } => fetch(&config, &content, *preview).await,
        Commands::Query { preview, what } => {
            let value = run_query(&content, what, *preview).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Commands::Youtube { .. } => Ok(()),
    }
}

/// Fetch every dataset and write the data files.
async fn fetch(config: &Config, content: &Content, preview: bool) -> Result<()> {
    let mode = if preview { "preview" } else { "published" };
    match content.accessor().client(preview) {
        Some(store) => log!("fetch"; "reading {} content from {}", mode, store.label()),
        None => warn!("fetch"; "contentful is not configured for {} reads, data files will be empty", mode),
    }

    let progress = ProgressBars::new(&SiteData::progress_groups(content));
    let data = SiteData::collect_with_progress(content, preview, Some(&progress)).await;
    progress.finish();

    let written = data
        .write_to(&config.output.data_dir)
        .context("failed to write data files")?;

    log!("fetch"; "{}", data.summary());
    log!("fetch"; "wrote {} files to {}", written.len(), config.output.data_dir.display());
    Ok(())
}

/// Run one query and return its result as JSON.
async fn run_query(content: &Content, what: &QueryCommand, preview: bool) -> Result<Value> {
    fn json<T: Serialize>(value: T) -> Result<Value> {
        Ok(serde_json::to_value(value)?)
    }

    match what {
        QueryCommand::Races { season } => json(content.races(season.as_deref(), preview).await),
        QueryCommand::Upcoming { limit } => json(content.upcoming_races(*limit, preview).await),
        QueryCommand::NextRace => json(content.next_race(preview).await),
        QueryCommand::Results { season } => {
            json(content.results(season.as_deref(), preview).await)
        }
        QueryCommand::Sponsors => json(content.sponsors(preview).await),
        QueryCommand::Packages => json(content.sponsor_packages(preview).await),
        QueryCommand::Package { tier } => {
            json(content.sponsor_package_by_tier(*tier, preview).await)
        }
        QueryCommand::Page { slug } => json(content.page_content(slug, preview).await),
        QueryCommand::Sections { page, by_key } => {
            if *by_key {
                json(content.page_sections_by_key(*page, preview).await)
            } else {
                json(content.page_sections(*page, preview).await)
            }
        }
        QueryCommand::Section { key } => json(content.page_section(key, preview).await),
        QueryCommand::Stats { season } => {
            json(content.driver_stats(season.as_deref(), preview).await)
        }
        QueryCommand::SiteConfig => json(content.site_config(preview).await),
        QueryCommand::DriverProfile => json(content.driver_profile(preview).await),
        QueryCommand::Media { category, season } => json(
            content
                .media_items(*category, season.as_deref(), preview)
                .await,
        ),
        QueryCommand::FeaturedMedia { limit } => {
            json(content.featured_media_items(*limit, preview).await)
        }
        QueryCommand::MediaTags { tags } => json(content.media_items_by_tags(tags, preview).await),
        QueryCommand::SearchMedia { text } => {
            json(content.search_media_items(text, preview).await)
        }
        QueryCommand::Videos { category, season } => {
            json(content.videos(*category, season.as_deref(), preview).await)
        }
        QueryCommand::FeaturedVideos { limit } => {
            json(content.featured_videos(*limit, preview).await)
        }
        QueryCommand::PressPhotos { category } => {
            json(content.press_photos(category.as_deref(), preview).await)
        }
    }
}

fn print_youtube(url: &str, quality: youtube::ThumbnailQuality) -> Result<()> {
    let id = youtube::extract_video_id(url)
        .with_context(|| format!("`{url}` is not a recognizable YouTube URL"))?;

    println!("id:        {id}");
    println!("embed:     {}", youtube::embed_url(&id));
    println!("thumbnail: {}", youtube::thumbnail_url(&id, quality));
    Ok(())
}
