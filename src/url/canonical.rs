use crate::config::SiteConfig;
use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves an offer link against the site origin
///
/// Links that already start with `http` are returned untouched; anything else is
/// treated as a path and appended to `origin` verbatim. The function is idempotent:
/// a canonicalized link is absolute, so canonicalizing it again changes nothing.
///
/// # Examples
///
/// ```
/// use offer_harvest::url::canonicalize;
///
/// let origin = "https://www.tecnoempleo.com";
/// assert_eq!(
///     canonicalize("/oferta/data-engineer/rf-1234", origin),
///     "https://www.tecnoempleo.com/oferta/data-engineer/rf-1234"
/// );
/// assert_eq!(canonicalize("https://other.com/x", origin), "https://other.com/x");
/// ```
pub fn canonicalize(href: &str, origin: &str) -> String {
    let href = href.trim();
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    }
}

/// Builds the absolute URL of the paginated listing page
///
/// Keyword and page number travel as query parameters (see [`page_query`]).
pub fn listing_url(site: &SiteConfig) -> UrlResult<Url> {
    let url = Url::parse(&format!("{}{}", site.origin, site.listing_path))
        .map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Query parameters selecting one keyword search result page
pub fn page_query(site: &SiteConfig, keyword: &str, page: u32) -> Vec<(String, String)> {
    vec![
        (site.keyword_param.clone(), keyword.to_string()),
        (site.page_param.clone(), page.to_string()),
    ]
}
