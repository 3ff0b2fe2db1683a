use catalog_scrape::{CatalogScraper, ScraperConfig};
use log::error;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: catalog-scrape listing <url>\n       catalog-scrape detail <url> [--payload]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    let (command, url) = match args {
        [command, url, ..] => (command.as_str(), url.as_str()),
        _ => return Err(USAGE.into()),
    };
    let include_payload = args[2..].iter().any(|a| a == "--payload");

    let config = ScraperConfig::load()?;
    let scraper = CatalogScraper::builder().from_config(&config).build()?;

    let json = match command {
        "listing" => serde_json::to_string_pretty(&scraper.listing(url).await?)?,
        "detail" => serde_json::to_string_pretty(&scraper.detail(url, include_payload).await?)?,
        _ => return Err(USAGE.into()),
    };
    Ok(json)
}
