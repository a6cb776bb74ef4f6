//! Listing page extraction
//!
//! Each search result page renders a column of job cards. A card contributes
//! one identity record when it carries a title link; cards without one are
//! reported and skipped so that a single malformed card never costs the page.

use crate::extract::selectors::{self, CARD_COMPANY, CARD_TITLE_LINK, JOB_CARD};
use crate::extract::element_text;
use crate::model::{or_unknown, OfferIdentity};
use crate::url::canonicalize;
use scraper::{ElementRef, Html, Selector};

/// Extracts offer identities from one listing page
///
/// Cards are returned in document order. Relative offer links are resolved
/// against `origin`. Duplicates are kept; deduplication happens once the whole
/// crawl is aggregated.
///
/// # Arguments
///
/// * `html` - The listing page body
/// * `origin` - Scheme and host used to absolutize relative links
///
/// # Example
///
/// ```
/// use offer_harvest::extract::extract_listings;
///
/// let html = r#"
///     <div class="p-3 border rounded mb-3 bg-white">
///         <a class="font-weight-bold text-cyan-700" href="/oferta/rf-1">Data Engineer</a>
///         <a class="text-primary link-muted" href="/empresa/acme">Acme</a>
///     </div>"#;
/// let offers = extract_listings(html, "https://www.tecnoempleo.com");
/// assert_eq!(offers[0].url, "https://www.tecnoempleo.com/oferta/rf-1");
/// assert_eq!(offers[0].company, "Acme");
/// ```
pub fn extract_listings(html: &str, origin: &str) -> Vec<OfferIdentity> {
    let (card_selector, title_selector, company_selector) = match (
        selectors::compile(JOB_CARD),
        selectors::compile(CARD_TITLE_LINK),
        selectors::compile(CARD_COMPANY),
    ) {
        (Ok(card), Ok(title), Ok(company)) => (card, title, company),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            tracing::error!("Listing extraction disabled: {}", e);
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let cards: Vec<ElementRef<'_>> = document.select(&card_selector).collect();
    tracing::debug!("Found {} job cards", cards.len());

    let mut offers = Vec::with_capacity(cards.len());
    for (index, card) in cards.into_iter().enumerate() {
        match parse_card(card, &title_selector, &company_selector, origin) {
            Ok(offer) => offers.push(offer),
            Err(reason) => tracing::warn!("Skipping job card #{}: {}", index + 1, reason),
        }
    }

    offers
}

/// Builds one identity from a card, or explains why the card is unusable
fn parse_card(
    card: ElementRef<'_>,
    title_selector: &Selector,
    company_selector: &Selector,
    origin: &str,
) -> Result<OfferIdentity, &'static str> {
    let title_link = card
        .select(title_selector)
        .next()
        .ok_or("missing title link")?;

    let title = element_text(title_link);
    if title.is_empty() {
        return Err("empty title");
    }

    let href = title_link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or("title link has no href")?;

    let company = card
        .select(company_selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty());

    Ok(OfferIdentity {
        title,
        company: or_unknown(company),
        url: canonicalize(href, origin),
    })
}
