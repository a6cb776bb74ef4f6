//! HTML extraction for listing and detail pages
//!
//! This module turns raw page bodies into offer records:
//! - Listing pages yield one [`OfferIdentity`](crate::model::OfferIdentity) per job card
//! - Detail pages yield one [`OfferDetail`](crate::model::OfferDetail), with absent
//!   fragments replaced by the `"unknown"` sentinel
//!
//! Selectors are declared once in [`selectors`].

mod detail;
mod listing;
pub mod selectors;

pub use detail::{extract_detail, MetaField, LABEL_VOCABULARY};
pub use listing::extract_listings;

use scraper::{ElementRef, Html, Selector};

/// Trimmed text content of an element
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match, or None when absent or blank
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}
