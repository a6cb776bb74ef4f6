use serde::{Deserialize, Serialize};

/// Placeholder stored in any field whose source fragment is absent
pub const UNKNOWN: &str = "unknown";

/// Collapses an optional lookup into its value or the [`UNKNOWN`] sentinel
pub fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Records that carry a URL identity key
pub trait Keyed {
    /// The canonical URL identifying the offer
    fn key(&self) -> &str;
}

/// Minimal offer record found on a listing page
///
/// Field renames give the column names of the listing dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferIdentity {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Company")]
    pub company: String,

    /// Absolute offer URL
    #[serde(rename = "URL")]
    pub url: String,
}

impl Keyed for OfferIdentity {
    fn key(&self) -> &str {
        &self.url
    }
}

/// Full offer record scraped from a detail page
///
/// Field order matches the column order of the detail dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDetail {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Company")]
    pub company: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Date Posted")]
    pub date_posted: String,

    /// Technology tags joined with `", "`; empty when the page lists none
    #[serde(rename = "Technologies")]
    pub technologies: String,

    #[serde(rename = "Experience")]
    pub experience: String,

    #[serde(rename = "Contract Type")]
    pub contract_type: String,

    #[serde(rename = "Job Type")]
    pub job_type: String,

    #[serde(rename = "Seniority")]
    pub seniority: String,

    /// Multi-line description text
    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "URL")]
    pub url: String,
}

impl Keyed for OfferDetail {
    fn key(&self) -> &str {
        &self.url
    }
}
