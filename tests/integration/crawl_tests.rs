//! Integration tests for the harvester
//!
//! These tests use wiremock to create a mock job board and run both harvest
//! modes end-to-end through the real HTTP fetcher.

use offer_harvest::config::Config;
use offer_harvest::crawler::{collect_listings, enrich_details};
use offer_harvest::storage::{CsvStore, DatasetStore};
use offer_harvest::{Dataset, OfferIdentity, UNKNOWN};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server, without delays
fn create_test_config(origin: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.site.origin = origin.to_string();
    config.crawler.delay_ms = 0;
    config.crawler.max_pages = 5;
    config.output.listings_path = dir.path().join("list.csv").display().to_string();
    config.output.details_path = dir.path().join("detailed.csv").display().to_string();
    config
}

fn listing_page(offers: &[(&str, Option<&str>)]) -> String {
    let cards: String = offers
        .iter()
        .map(|(slug, company)| {
            let company = company
                .map(|c| format!(r#"<a class="text-primary link-muted" href="/empresa">{}</a>"#, c))
                .unwrap_or_default();
            format!(
                r#"<div class="p-3 border rounded mb-3 bg-white">
                    <h3><a class="font-weight-bold text-cyan-700" href="/oferta/{slug}">Offer {slug}</a></h3>
                    {company}
                </div>"#
            )
        })
        .collect();
    format!("<html><body><div class=\"col-lg-9\">{}</div></body></html>", cards)
}

fn detail_page(title: &str, company: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="h3 h5-xs mb-2">{title}</h1>
        <a class="text-primary link-muted fs--18" href="/empresa">{company}</a>
        <div class="ml-0 mt-2"><a href="/madrid">Madrid</a> <span>05/05/2025</span></div>
        <div class="pl--12 pr--12">
            <a class="btn btn-primary btn-soft" href="/t/python">Python</a>
            <a class="btn btn-primary btn-soft" href="/t/aws">AWS</a>
        </div>
        <div class="row mb-2">
            <div class="col-6"><div class="text-muted">Experiencia</div><div class="fw-bold">2 años</div></div>
            <div class="col-6"><div class="text-muted">Tipo contrato</div><div class="fw-bold">Indefinido</div></div>
            <div class="col-6"><div class="text-muted">Salario</div><div class="fw-bold">40.000</div></div>
        </div>
        <div itemprop="description"><p>Primera línea, con coma.</p><p>Segunda línea</p></div>
        </body></html>"#
    )
}

async fn mount_listing_page(server: &MockServer, page: u32, status: u16, body: &str, hits: u64) {
    Mock::given(method("GET"))
        .and(path("/ofertas-trabajo/"))
        .and(query_param("te", "data"))
        .and(query_param("pagina", page.to_string()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(hits)
        .mount(server)
        .await;
}

async fn mount_detail_page(server: &MockServer, slug: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/oferta/{}", slug)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_listing_crawl_stops_on_failed_page() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &dir);

    mount_listing_page(&server, 1, 200, &listing_page(&[("rf-1", Some("Acme")), ("rf-2", None)]), 1).await;
    mount_listing_page(&server, 2, 200, &listing_page(&[("rf-3", Some("Globex"))]), 1).await;
    mount_listing_page(&server, 3, 500, "Internal Server Error", 1).await;
    // Pages after the failure must never be requested
    mount_listing_page(&server, 4, 200, &listing_page(&[("rf-4", None)]), 0).await;
    mount_listing_page(&server, 5, 200, &listing_page(&[("rf-5", None)]), 0).await;

    let (offers, stats) = collect_listings(&config, "data").await.unwrap();

    let urls: Vec<_> = offers.iter().map(|o| o.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/oferta/rf-1", server.uri()),
            format!("{}/oferta/rf-2", server.uri()),
            format!("{}/oferta/rf-3", server.uri()),
        ]
    );
    assert_eq!(offers.as_slice()[0].company, "Acme");
    assert_eq!(offers.as_slice()[1].company, UNKNOWN);
    assert_eq!(stats.listing_pages_fetched, 2);
    assert_eq!(stats.stopped_at_page, Some(3));
}

#[tokio::test]
async fn test_listing_crawl_deduplicates_offers() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), &dir);
    config.crawler.max_pages = 2;

    mount_listing_page(&server, 1, 200, &listing_page(&[("rf-1", Some("First")), ("rf-2", None)]), 1).await;
    mount_listing_page(&server, 2, 200, &listing_page(&[("rf-1", Some("Repost")), ("rf-3", None)]), 1).await;

    let (offers, stats) = collect_listings(&config, "data").await.unwrap();

    assert_eq!(offers.len(), 3);
    assert!(offers.is_unique());
    assert_eq!(offers.as_slice()[0].company, "First");
    assert_eq!(stats.duplicates_dropped, 1);
}

#[tokio::test]
async fn test_detail_enrichment_skips_failed_offer() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &dir);

    mount_detail_page(&server, "rf-1", 200, &detail_page("Data Engineer", "Acme")).await;
    mount_detail_page(&server, "rf-2", 404, "Not Found").await;
    mount_detail_page(&server, "rf-3", 200, &detail_page("ML Engineer", "Globex")).await;

    let identities: Dataset<OfferIdentity> = ["rf-1", "rf-2", "rf-3"]
        .iter()
        .map(|slug| OfferIdentity {
            title: format!("Offer {}", slug),
            company: UNKNOWN.to_string(),
            url: format!("{}/oferta/{}", server.uri(), slug),
        })
        .collect();

    let (details, stats) = enrich_details(&config, &identities).await.unwrap();

    let titles: Vec<_> = details.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Data Engineer", "ML Engineer"]);
    assert_eq!(stats.fetch_failures, 1);

    let first = &details.as_slice()[0];
    assert_eq!(first.company, "Acme");
    assert_eq!(first.location, "Madrid");
    assert_eq!(first.date_posted, "05/05/2025");
    assert_eq!(first.technologies, "Python, AWS");
    assert_eq!(first.experience, "2 años");
    assert_eq!(first.contract_type, "Indefinido");
    assert_eq!(first.job_type, UNKNOWN);
    assert_eq!(first.seniority, UNKNOWN);
    assert_eq!(first.description, "Primera línea, con coma.\nSegunda línea");
    assert_eq!(first.url, format!("{}/oferta/rf-1", server.uri()));
}

#[tokio::test]
async fn test_full_pipeline_through_csv() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), &dir);
    config.crawler.max_pages = 1;

    mount_listing_page(&server, 1, 200, &listing_page(&[("rf-1", Some("Acme")), ("rf-2", Some("Globex"))]), 1).await;
    mount_detail_page(&server, "rf-1", 200, &detail_page("Data Engineer", "Acme")).await;
    mount_detail_page(&server, "rf-2", 200, &detail_page("ML Engineer", "Globex")).await;

    // Stage 1: collect and persist listings
    let (offers, _) = collect_listings(&config, "data").await.unwrap();
    let mut store = CsvStore::from_config(&config.output);
    assert_eq!(store.save_listings(&offers).unwrap(), 2);

    // Stage 2: reload listings, enrich, persist details
    let identities = store.load_listings().unwrap();
    assert_eq!(identities, offers);

    let (details, _) = enrich_details(&config, &identities).await.unwrap();
    store.save_details(&details).unwrap();

    let reloaded = store.load_details().unwrap();
    assert_eq!(reloaded, details);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.as_slice()[1].description.contains('\n'));
}
