//! Crawler module for fetching and harvesting offers
//!
//! This module contains the harvesting logic, including:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - The sequential listing crawl and detail enrichment loops
//! - Run statistics
//!
//! The two run modes exposed here build an [`HttpFetcher`] from configuration
//! and drive a [`Coordinator`] with it.

mod coordinator;
mod fetcher;
mod stats;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use stats::HarvestStats;

use crate::config::Config;
use crate::model::{Dataset, OfferDetail, OfferIdentity};
use crate::HarvestError;
use std::time::Duration;

/// Runs the "collect listings" mode
///
/// Crawls `config.crawler.max_pages` listing pages for `keyword` and returns the
/// unique offers found, together with the run counters. A failed page ends the
/// crawl early; the offers gathered until then are still returned.
///
/// # Example
///
/// ```no_run
/// use offer_harvest::config::Config;
/// use offer_harvest::crawler::collect_listings;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (offers, stats) = collect_listings(&Config::default(), "data").await?;
/// println!("{} offers from {} pages", offers.len(), stats.listing_pages_fetched);
/// # Ok(())
/// # }
/// ```
pub async fn collect_listings(
    config: &Config,
    keyword: &str,
) -> Result<(Dataset<OfferIdentity>, HarvestStats), HarvestError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let mut coordinator = Coordinator::new(
        fetcher,
        config.site.clone(),
        Duration::from_millis(config.crawler.delay_ms),
    );

    let offers = coordinator
        .run_listing_crawl(keyword, config.crawler.max_pages)
        .await?;

    let stats = coordinator.stats().clone();
    stats.log_listing_summary();
    Ok((offers, stats))
}

/// Runs the "enrich details" mode
///
/// Visits the detail page of every unique offer in `identities` and returns
/// the records that could be extracted, together with the run counters.
pub async fn enrich_details(
    config: &Config,
    identities: &Dataset<OfferIdentity>,
) -> Result<(Dataset<OfferDetail>, HarvestStats), HarvestError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let mut coordinator = Coordinator::new(
        fetcher,
        config.site.clone(),
        Duration::from_millis(config.crawler.delay_ms),
    );

    let details = coordinator.run_detail_enrichment(identities).await;

    let stats = coordinator.stats().clone();
    stats.log_detail_summary();
    Ok((details, stats))
}
