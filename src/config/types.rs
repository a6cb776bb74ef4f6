use serde::Deserialize;

/// Main configuration structure for Offer-Harvest
///
/// Every section falls back to its defaults, so an empty file (or no file at
/// all) yields a configuration that targets the public job board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Target site layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host prepended to relative offer links
    pub origin: String,

    /// Path of the paginated listing page
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Query parameter carrying the search keyword
    #[serde(rename = "keyword-param")]
    pub keyword_param: String,

    /// Query parameter carrying the page number
    #[serde(rename = "page-param")]
    pub page_param: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.tecnoempleo.com".to_string(),
            listing_path: "/ofertas-trabajo/".to_string(),
            keyword_param: "te".to_string(),
            page_param: "pagina".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Pause between consecutive requests (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Number of listing pages to visit
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            max_pages: 5,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "offer-harvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/offer-harvest".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV file holding the listing dataset
    #[serde(rename = "listings-path")]
    pub listings_path: String,

    /// CSV file holding the detail dataset
    #[serde(rename = "details-path")]
    pub details_path: String,

    /// Optional SQLite database mirroring both datasets
    #[serde(rename = "database-path")]
    pub database_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            listings_path: "./data/job_offers_list.csv".to_string(),
            details_path: "./data/job_offers_detailed.csv".to_string(),
            database_path: None,
        }
    }
}
