//! CSS selectors for the job board markup
//!
//! Every structural assumption about the target site lives here, one named
//! declaration per fragment. A markup change on the site should only require
//! editing the matching constant.

use scraper::Selector;

// ===== Listing page =====

/// One offer card in the search results
pub const JOB_CARD: &str = "div.p-3.border.rounded.mb-3.bg-white";

/// Offer title anchor inside a card; its `href` is the offer link
pub const CARD_TITLE_LINK: &str = "a.font-weight-bold.text-cyan-700";

/// Company anchor inside a card
pub const CARD_COMPANY: &str = "a.text-primary.link-muted";

// ===== Detail page =====

/// Offer title heading
pub const DETAIL_TITLE: &str = "h1.h3.h5-xs.mb-2";

/// Company anchor (carries an extra size marker compared to the card anchor)
pub const DETAIL_COMPANY: &str = "a.text-primary.link-muted.fs--18";

/// Block holding location and publication date
pub const META_BLOCK: &str = "div.ml-0.mt-2";

/// First link of the meta block
pub const LOCATION: &str = "div.ml-0.mt-2 a";

/// First inline span of the meta block
pub const DATE_POSTED: &str = "div.ml-0.mt-2 span";

/// Description body
pub const DESCRIPTION: &str = "div[itemprop='description']";

/// Technology tag buttons in the content column
pub const TECH_TAG: &str = "div.pl--12.pr--12 a.btn.btn-primary.btn-soft";

/// Container of one label/value meta pair
pub const META_PAIR: &str = "div.row.mb-2 div.col-6";

/// Muted label node of a meta pair
pub const PAIR_LABEL: &str = "div.text-muted";

/// Bold value node of a meta pair
pub const PAIR_VALUE: &str = "div.fw-bold";

/// Compiles one of the selector constants
pub fn compile(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {}", css, e))
}
