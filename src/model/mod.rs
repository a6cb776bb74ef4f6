//! Offer record model
//!
//! The two record shapes produced by the pipeline and the ordered dataset that
//! aggregates and deduplicates them.

mod dataset;
mod offer;

pub use dataset::Dataset;
pub use offer::{or_unknown, Keyed, OfferDetail, OfferIdentity, UNKNOWN};
