//! Extract catalog listings and component trees from the target site's
//! HTML by scanning text for markers and balanced tags.
//!
//! The extraction functions are pure and synchronous. Fetching and caching
//! live around them in [`fetchers`], [`cache`] and [`CatalogScraper`].

pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod layout;
pub mod markup;
pub mod model;

use std::sync::OnceLock;

pub use builder::{CatalogScraper, CatalogScraperBuilder};
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use extractors::{extract_quantity, Extractor};
pub use fetchers::{DocumentSource, RequestFetcher};
pub use layout::{MarkupLayout, RegionRule};
pub use model::{ComponentRequirement, DetailRecord, RecipeEntry, SummaryRecord};

fn default_extractor() -> &'static Extractor {
    static EXTRACTOR: OnceLock<Extractor> = OnceLock::new();
    EXTRACTOR.get_or_init(Extractor::default)
}

/// Summary records of a listing page, using the built-in layout.
///
/// # Example
/// ```
/// let html = r#"<div class="catalog-card" data-id="7">
///     <a class="card-title" href="/item/7">Drill Rig</a></div>"#;
/// let records = catalog_scrape::parse_listing(html);
/// assert_eq!(records[0].id, "7");
/// assert_eq!(records[0].display_name, "Drill Rig");
/// ```
pub fn parse_listing(document: &str) -> Vec<SummaryRecord> {
    default_extractor().parse_listing(document)
}

/// Detail record of a detail page, using the built-in layout.
pub fn parse_detail(document: &str, include_payload: bool) -> DetailRecord {
    default_extractor().parse_detail(document, include_payload)
}

/// Fetch and parse a listing page with a default HTTP fetcher and no cache.
pub async fn fetch_listing(url: &str) -> Result<Vec<SummaryRecord>> {
    let document = RequestFetcher::new(None)?.fetch(url).await?;
    Ok(parse_listing(&document))
}

/// Fetch and parse a detail page with a default HTTP fetcher and no cache.
pub async fn fetch_detail(url: &str, include_payload: bool) -> Result<DetailRecord> {
    let document = RequestFetcher::new(None)?.fetch(url).await?;
    Ok(parse_detail(&document, include_payload))
}
