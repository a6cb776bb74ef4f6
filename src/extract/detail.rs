//! Detail page extraction
//!
//! Every field of an [`OfferDetail`] is looked up independently. A missing
//! fragment only costs that field (it becomes `"unknown"`); the page as a whole
//! is rejected only when none of the offer landmarks can be found.

use crate::extract::selectors::{
    self, DATE_POSTED, DESCRIPTION, DETAIL_COMPANY, DETAIL_TITLE, LOCATION, META_BLOCK, META_PAIR,
    PAIR_LABEL, PAIR_VALUE, TECH_TAG,
};
use crate::extract::{element_text, first_text};
use crate::model::{or_unknown, OfferDetail};
use crate::HarvestError;
use scraper::{Html, Selector};

/// Classification attributes published as label/value pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Experience,
    ContractType,
    JobType,
    Seniority,
}

/// Label substrings recognized on detail pages, checked in order
///
/// The site only publishes Spanish labels; matching is case-sensitive.
pub const LABEL_VOCABULARY: &[(&str, MetaField)] = &[
    ("Experiencia", MetaField::Experience),
    ("Tipo contrato", MetaField::ContractType),
    ("Jornada", MetaField::JobType),
    ("Nivel Profesional", MetaField::Seniority),
];

impl MetaField {
    /// Maps a label text to the field it describes, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use offer_harvest::extract::MetaField;
    ///
    /// assert_eq!(MetaField::from_label("Experiencia mínima"), Some(MetaField::Experience));
    /// assert_eq!(MetaField::from_label("Salario"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        LABEL_VOCABULARY
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, field)| *field)
    }
}

/// Values collected from the meta pairs of one page
#[derive(Debug, Default)]
struct MetaValues {
    experience: Option<String>,
    contract_type: Option<String>,
    job_type: Option<String>,
    seniority: Option<String>,
}

impl MetaValues {
    /// Later pairs for the same field overwrite earlier ones
    fn set(&mut self, field: MetaField, value: String) {
        let slot = match field {
            MetaField::Experience => &mut self.experience,
            MetaField::ContractType => &mut self.contract_type,
            MetaField::JobType => &mut self.job_type,
            MetaField::Seniority => &mut self.seniority,
        };
        *slot = Some(value);
    }
}

/// Compiled selectors for a detail page
struct DetailSelectors {
    title: Selector,
    company: Selector,
    meta_block: Selector,
    location: Selector,
    date_posted: Selector,
    description: Selector,
    tech_tag: Selector,
    meta_pair: Selector,
    pair_label: Selector,
    pair_value: Selector,
}

impl DetailSelectors {
    fn new() -> Result<Self, String> {
        Ok(Self {
            title: selectors::compile(DETAIL_TITLE)?,
            company: selectors::compile(DETAIL_COMPANY)?,
            meta_block: selectors::compile(META_BLOCK)?,
            location: selectors::compile(LOCATION)?,
            date_posted: selectors::compile(DATE_POSTED)?,
            description: selectors::compile(DESCRIPTION)?,
            tech_tag: selectors::compile(TECH_TAG)?,
            meta_pair: selectors::compile(META_PAIR)?,
            pair_label: selectors::compile(PAIR_LABEL)?,
            pair_value: selectors::compile(PAIR_VALUE)?,
        })
    }
}

/// Extracts the structured offer from one detail page
///
/// # Arguments
///
/// * `html` - The detail page body
/// * `source_url` - The offer URL; copied into the record unchanged
///
/// # Returns
///
/// * `Ok(OfferDetail)` - Record with `"unknown"` in every field whose fragment is absent
/// * `Err(HarvestError::ParseShape)` - The page carries none of the offer landmarks
pub fn extract_detail(html: &str, source_url: &str) -> Result<OfferDetail, HarvestError> {
    let sel = DetailSelectors::new().map_err(|message| HarvestError::ParseShape {
        url: source_url.to_string(),
        message,
    })?;

    let document = Html::parse_document(html);

    let title = first_text(&document, &sel.title);
    let company = first_text(&document, &sel.company);
    let location = first_text(&document, &sel.location);
    let date_posted = first_text(&document, &sel.date_posted);
    let description = extract_description(&document, &sel.description);
    let technologies = extract_technologies(&document, &sel.tech_tag);
    let has_meta_block = document.select(&sel.meta_block).next().is_some();

    if title.is_none()
        && company.is_none()
        && description.is_none()
        && technologies.is_empty()
        && !has_meta_block
    {
        return Err(HarvestError::ParseShape {
            url: source_url.to_string(),
            message: "no offer title, company, meta block, description or tags found".to_string(),
        });
    }

    let meta = extract_meta_pairs(&document, &sel);

    Ok(OfferDetail {
        title: or_unknown(title),
        company: or_unknown(company),
        location: or_unknown(location),
        date_posted: or_unknown(date_posted),
        technologies: technologies.join(", "),
        experience: or_unknown(meta.experience),
        contract_type: or_unknown(meta.contract_type),
        job_type: or_unknown(meta.job_type),
        seniority: or_unknown(meta.seniority),
        description: or_unknown(description),
        url: source_url.to_string(),
    })
}

/// Description text with one line per text node
fn extract_description(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join("\n").trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Technology tags in document order, blanks dropped
fn extract_technologies(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(element_text)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Walks the label/value pairs and keeps those with a recognized label
fn extract_meta_pairs(document: &Html, sel: &DetailSelectors) -> MetaValues {
    let mut meta = MetaValues::default();

    for pair in document.select(&sel.meta_pair) {
        let (Some(label), Some(value)) = (
            pair.select(&sel.pair_label).next(),
            pair.select(&sel.pair_value).next(),
        ) else {
            continue;
        };

        let label = element_text(label);
        let value = element_text(value);
        match MetaField::from_label(&label) {
            Some(field) if !value.is_empty() => meta.set(field, value),
            Some(_) => tracing::trace!("Blank value for meta label '{}'", label),
            None => tracing::trace!("Ignoring meta label '{}'", label),
        }
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN;

    const URL: &str = "https://www.tecnoempleo.com/data-engineer-python/rf-0123456789";

    fn meta_pair(label: &str, value: &str) -> String {
        format!(
            r#"<div class="col-6"><div class="text-muted">{}</div><div class="fw-bold">{}</div></div>"#,
            label, value
        )
    }

    fn full_page(pairs: &str) -> String {
        format!(
            r#"<html><body>
            <h1 class="h3 h5-xs mb-2">Data Engineer Python</h1>
            <a class="text-primary link-muted fs--18" href="/empresa">Acme Consulting</a>
            <div class="ml-0 mt-2">
                <a href="/ofertas-trabajo/?pr=madrid">Madrid</a>
                <span>12/03/2025</span>
            </div>
            <div class="pl--12 pr--12">
                <a class="btn btn-primary btn-soft" href="/t/python">Python</a>
                <a class="btn btn-primary btn-soft" href="/t/sql"> SQL </a>
                <a class="btn btn-primary btn-soft" href="/t/spark">Apache Spark</a>
            </div>
            <div class="row mb-2">{}</div>
            <div itemprop="description"><p>Buscamos ingeniero de datos.</p><ul><li>ETL</li><li>Airflow</li></ul></div>
            </body></html>"#,
            pairs
        )
    }

    #[test]
    fn test_extract_full_page() {
        let pairs = [
            meta_pair("Experiencia", "3 años"),
            meta_pair("Tipo contrato", "Indefinido"),
            meta_pair("Jornada", "Completa"),
            meta_pair("Nivel Profesional", "Senior"),
        ]
        .concat();

        let detail = extract_detail(&full_page(&pairs), URL).unwrap();

        assert_eq!(detail.title, "Data Engineer Python");
        assert_eq!(detail.company, "Acme Consulting");
        assert_eq!(detail.location, "Madrid");
        assert_eq!(detail.date_posted, "12/03/2025");
        assert_eq!(detail.technologies, "Python, SQL, Apache Spark");
        assert_eq!(detail.experience, "3 años");
        assert_eq!(detail.contract_type, "Indefinido");
        assert_eq!(detail.job_type, "Completa");
        assert_eq!(detail.seniority, "Senior");
        assert_eq!(detail.description, "Buscamos ingeniero de datos.\nETL\nAirflow");
        assert_eq!(detail.url, URL);
    }

    #[test]
    fn test_missing_company_is_unknown() {
        let html = r#"<html><body>
            <h1 class="h3 h5-xs mb-2">Analista BI</h1>
            <a class="text-primary link-muted" href="/empresa">Card style anchor</a>
        </body></html>"#;

        let detail = extract_detail(html, URL).unwrap();

        assert_eq!(detail.title, "Analista BI");
        assert_eq!(detail.company, UNKNOWN);
        assert_eq!(detail.location, UNKNOWN);
        assert_eq!(detail.date_posted, UNKNOWN);
        assert_eq!(detail.description, UNKNOWN);
        assert_eq!(detail.technologies, "");
    }

    #[test]
    fn test_no_meta_pairs_all_unknown() {
        let detail = extract_detail(&full_page(""), URL).unwrap();

        assert_eq!(detail.experience, UNKNOWN);
        assert_eq!(detail.contract_type, UNKNOWN);
        assert_eq!(detail.job_type, UNKNOWN);
        assert_eq!(detail.seniority, UNKNOWN);
    }

    #[test]
    fn test_label_substring_matching() {
        let pairs = [
            meta_pair("Experiencia mínima", "1 año"),
            meta_pair("Tipo contrato: Indefinido", "Indefinido"),
            meta_pair("Salario", "30.000 €"),
        ]
        .concat();

        let detail = extract_detail(&full_page(&pairs), URL).unwrap();

        assert_eq!(detail.experience, "1 año");
        assert_eq!(detail.contract_type, "Indefinido");
        assert_eq!(detail.job_type, UNKNOWN);
        assert_eq!(detail.seniority, UNKNOWN);
    }

    #[test]
    fn test_label_matching_is_case_sensitive() {
        let pairs = meta_pair("experiencia", "2 años");
        let detail = extract_detail(&full_page(&pairs), URL).unwrap();
        assert_eq!(detail.experience, UNKNOWN);
    }

    #[test]
    fn test_later_pair_overwrites_earlier() {
        let pairs = [
            meta_pair("Jornada", "Parcial"),
            meta_pair("Jornada laboral", "Completa"),
        ]
        .concat();

        let detail = extract_detail(&full_page(&pairs), URL).unwrap();
        assert_eq!(detail.job_type, "Completa");
    }

    #[test]
    fn test_pair_without_value_is_ignored() {
        let pairs = r#"<div class="col-6"><div class="text-muted">Experiencia</div></div>"#;
        let detail = extract_detail(&full_page(pairs), URL).unwrap();
        assert_eq!(detail.experience, UNKNOWN);
    }

    #[test]
    fn test_blank_pair_value_becomes_unknown() {
        let pairs = r#"<div class="col-6"><div class="text-muted">Experiencia</div><div class="fw-bold">   </div></div>
            <div class="col-6"><div class="text-muted">Jornada</div><div class="fw-bold"></div></div>"#;
        let detail = extract_detail(&full_page(pairs), URL).unwrap();
        assert_eq!(detail.experience, UNKNOWN);
        assert_eq!(detail.job_type, UNKNOWN);
    }

    #[test]
    fn test_unrecognizable_page_is_rejected() {
        let html = "<html><body><h2>Página no encontrada</h2></body></html>";

        let result = extract_detail(html, URL);

        match result {
            Err(HarvestError::ParseShape { url, .. }) => assert_eq!(url, URL),
            other => panic!("expected ParseShape error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert!(extract_detail("", URL).is_err());
    }

    #[test]
    fn test_from_label_vocabulary() {
        assert_eq!(
            MetaField::from_label("Nivel Profesional"),
            Some(MetaField::Seniority)
        );
        assert_eq!(MetaField::from_label("Jornada"), Some(MetaField::JobType));
        assert_eq!(
            MetaField::from_label("Tipo contrato"),
            Some(MetaField::ContractType)
        );
        assert_eq!(MetaField::from_label("Ubicación"), None);
    }
}
