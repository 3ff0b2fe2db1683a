//! Fetching through the builder API
//!
//! Pass a listing URL and a detail URL of the target site as arguments.

use catalog_scrape::{CatalogScraper, ScraperConfig};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (listing_url, detail_url) = match args.as_slice() {
        [listing, detail, ..] => (listing.clone(), detail.clone()),
        _ => return Err("usage: builder_basic <listing-url> <detail-url>".into()),
    };

    // Example 1: defaults from catalog.toml / CATALOG__* variables
    let config = ScraperConfig::load()?;
    let scraper = CatalogScraper::builder().from_config(&config).build()?;

    let records = scraper.listing(&listing_url).await?;
    println!("{} records on the listing page", records.len());

    // Second call within the TTL is served from the cache
    let again = scraper.listing(&listing_url).await?;
    assert_eq!(records, again);

    // Example 2: short-lived cache and tighter timeout
    let scraper = CatalogScraper::builder()
        .timeout(Duration::from_secs(10))
        .cache_ttl(Duration::from_secs(30))
        .build()?;

    let detail = scraper.detail(&detail_url, true).await?;
    for requirement in &detail.requirements {
        println!("{} x{}", requirement.name, requirement.quantity);
        for recipe in &requirement.sub_recipes {
            println!("    {} x{}", recipe.name, recipe.quantity);
        }
    }

    Ok(())
}
