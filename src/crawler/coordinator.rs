//! Crawl coordinator - main harvesting orchestration logic
//!
//! This module contains the two sequential crawl loops:
//! - The listing crawl, which walks result pages in order and stops at the
//!   first failed page
//! - The detail enrichment, which visits every unique offer URL once and
//!   skips the ones that fail
//!
//! Requests never overlap. The configured delay is awaited between requests
//! to bound the request rate against the target site.

use crate::config::SiteConfig;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::stats::HarvestStats;
use crate::extract::{extract_detail, extract_listings};
use crate::model::{Dataset, OfferDetail, OfferIdentity};
use crate::url::{listing_url, page_query};
use crate::HarvestError;
use std::time::Duration;

/// Main harvesting coordinator
///
/// Owns the fetcher, the accumulating datasets and the run counters.
pub struct Coordinator<F> {
    fetcher: F,
    site: SiteConfig,
    delay: Duration,
    stats: HarvestStats,
}

impl<F: Fetcher> Coordinator<F> {
    /// Creates a new coordinator
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Source of page bodies
    /// * `site` - Target site layout (origin, listing path, query parameter names)
    /// * `delay` - Minimum pause between consecutive requests
    pub fn new(fetcher: F, site: SiteConfig, delay: Duration) -> Self {
        Self {
            fetcher,
            site,
            delay,
            stats: HarvestStats::new(),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &HarvestStats {
        &self.stats
    }

    /// Crawls listing pages `1..=max_pages` and returns the unique offers found
    ///
    /// A failed page ends the crawl: later pages are not requested and the
    /// offers gathered so far are returned. The result is deduplicated by URL,
    /// keeping the first occurrence.
    ///
    /// # Returns
    ///
    /// * `Ok(Dataset)` - Offers in discovery order (possibly partial)
    /// * `Err(HarvestError)` - The listing URL could not be built from the site config
    pub async fn run_listing_crawl(
        &mut self,
        keyword: &str,
        max_pages: u32,
    ) -> Result<Dataset<OfferIdentity>, HarvestError> {
        let base = listing_url(&self.site)?;
        let mut offers = Dataset::new();

        tracing::info!(
            "Starting listing crawl for '{}' ({} pages max)",
            keyword,
            max_pages
        );

        for page in 1..=max_pages {
            let query = page_query(&self.site, keyword, page);

            let html = match self.fetcher.fetch(base.as_str(), &query).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::error!("Failed on page {}: {}", page, e);
                    self.stats.fetch_failures += 1;
                    self.stats.stopped_at_page = Some(page);
                    break;
                }
            };

            self.stats.listing_pages_fetched += 1;
            let found = extract_listings(&html, &self.site.origin);
            tracing::info!("Fetched page {} ({} offers)", page, found.len());
            self.stats.cards_extracted += found.len();
            offers.extend(found);

            if page < max_pages {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.stats.duplicates_dropped += offers.dedup_by_url();
        Ok(offers)
    }

    /// Fetches and extracts the detail page of every offer
    ///
    /// Input offers are deduplicated by URL first, so each offer is requested
    /// at most once. A failed fetch or an unrecognizable page only drops that
    /// offer; the pass always runs over the whole input.
    pub async fn run_detail_enrichment(
        &mut self,
        identities: &Dataset<OfferIdentity>,
    ) -> Dataset<OfferDetail> {
        let mut unique = identities.clone();
        self.stats.duplicates_dropped += unique.dedup_by_url();

        let total = unique.len();
        let mut details = Dataset::new();

        tracing::info!("Starting detail enrichment for {} offers", total);

        for (index, identity) in unique.iter().enumerate() {
            tracing::info!("Scraping [{}/{}] {}", index + 1, total, identity.url);
            self.stats.details_requested += 1;

            let result = self
                .fetcher
                .fetch(&identity.url, &[])
                .await
                .and_then(|html| extract_detail(&html, &identity.url));

            match result {
                Ok(detail) => {
                    self.stats.details_extracted += 1;
                    details.push(detail);
                }
                Err(e) if e.is_transport() => {
                    tracing::warn!("Error fetching offer {}: {}", identity.url, e);
                    self.stats.fetch_failures += 1;
                }
                Err(e) => {
                    tracing::warn!("Error scraping offer {}: {}", identity.url, e);
                    self.stats.extraction_failures += 1;
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        details
    }
}
