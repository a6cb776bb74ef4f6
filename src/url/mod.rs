//! URL handling module for Offer-Harvest
//!
//! Offer links found in listing cards are frequently site-relative. Everything
//! downstream (deduplication, detail fetching, persistence) keys on the absolute
//! form produced here.

mod canonical;

pub use canonical::{canonicalize, listing_url, page_query};
