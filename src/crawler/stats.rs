//! Run statistics
//!
//! Counters kept by the coordinator while it crawls, reported once a run mode
//! finishes.

/// Counters for one harvesting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// Listing pages fetched successfully
    pub listing_pages_fetched: u32,

    /// Identity records extracted from listing pages (before deduplication)
    pub cards_extracted: usize,

    /// Records removed because their URL was already present
    pub duplicates_dropped: usize,

    /// Listing page whose failure ended the crawl early
    pub stopped_at_page: Option<u32>,

    /// Detail pages requested
    pub details_requested: usize,

    /// Detail records produced
    pub details_extracted: usize,

    /// Requests that failed at the transport or status level
    pub fetch_failures: usize,

    /// Detail pages fetched but rejected by the extractor
    pub extraction_failures: usize,
}

impl HarvestStats {
    /// Creates a new empty set of counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of requested detail pages that produced a record, as a percentage
    pub fn detail_success_rate(&self) -> f64 {
        if self.details_requested == 0 {
            return 0.0;
        }
        (self.details_extracted as f64 / self.details_requested as f64) * 100.0
    }

    /// Logs the counters relevant to the listing stage
    pub fn log_listing_summary(&self) {
        tracing::info!(
            "Listing crawl: {} pages fetched, {} offers found, {} duplicates dropped",
            self.listing_pages_fetched,
            self.cards_extracted,
            self.duplicates_dropped
        );
        if let Some(page) = self.stopped_at_page {
            tracing::warn!("Listing crawl stopped early at page {}", page);
        }
    }

    /// Logs the counters relevant to the detail stage
    pub fn log_detail_summary(&self) {
        tracing::info!(
            "Detail enrichment: {} / {} offers extracted ({:.1}%), {} fetch failures, {} unparseable pages",
            self.details_extracted,
            self.details_requested,
            self.detail_success_rate(),
            self.fetch_failures,
            self.extraction_failures
        );
        if self.duplicates_dropped > 0 {
            tracing::info!("{} duplicate input URLs skipped", self.duplicates_dropped);
        }
    }
}
