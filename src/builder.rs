use log::debug;
use std::time::Duration;

use crate::cache::{cache_key, ResultCache};
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::extractors::Extractor;
use crate::fetchers::{DocumentSource, RequestFetcher};
use crate::layout::MarkupLayout;
use crate::model::{DetailRecord, SummaryRecord};

/// Fetches pages, runs the extractor on cache misses and remembers results.
pub struct CatalogScraper {
    source: Box<dyn DocumentSource>,
    extractor: Extractor,
    listings: ResultCache<Vec<SummaryRecord>>,
    details: ResultCache<DetailRecord>,
}

impl CatalogScraper {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use catalog_scrape::CatalogScraper;
    ///
    /// let builder = CatalogScraper::builder();
    /// ```
    pub fn builder() -> CatalogScraperBuilder {
        CatalogScraperBuilder::default()
    }

    /// Summary records of the listing page at `url`.
    ///
    /// # Errors
    /// Returns `ScrapeError` only when the page cannot be fetched; a page
    /// whose layout has drifted yields fewer or emptier records instead.
    pub async fn listing(&self, url: &str) -> Result<Vec<SummaryRecord>> {
        let key = cache_key("listing", &[("url", url)]);
        if let Some(records) = self.listings.get(&key) {
            return Ok(records);
        }

        let document = self.source.fetch(url).await?;
        let records = self.extractor.parse_listing(&document);
        self.listings.insert(key, records.clone());
        Ok(records)
    }

    /// Detail record of the page at `url`; the raw payload is only filled
    /// when `include_payload` is set.
    pub async fn detail(&self, url: &str, include_payload: bool) -> Result<DetailRecord> {
        let payload = if include_payload { "1" } else { "0" };
        let key = cache_key("detail", &[("url", url), ("payload", payload)]);
        if let Some(record) = self.details.get(&key) {
            return Ok(record);
        }

        let document = self.source.fetch(url).await?;
        let record = self.extractor.parse_detail(&document, include_payload);
        debug!(
            "{}: {} requirements, {} tags",
            url,
            record.requirements.len(),
            record.tags.len()
        );
        self.details.insert(key, record.clone());
        Ok(record)
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.listings.clear();
        self.details.clear();
    }
}

/// Builder for [`CatalogScraper`]
#[derive(Default)]
pub struct CatalogScraperBuilder {
    source: Option<Box<dyn DocumentSource>>,
    layout: Option<MarkupLayout>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    // fetcher settings from `from_config`; only feed the built-in fetcher
    config_timeout: Option<Duration>,
    config_user_agent: Option<String>,
    cache_ttl: Option<Duration>,
    cache_capacity: Option<usize>,
}

impl CatalogScraperBuilder {
    /// Use a custom document source instead of the HTTP fetcher
    pub fn source(mut self, source: impl DocumentSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Replace the built-in markup table
    pub fn layout(mut self, layout: MarkupLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use catalog_scrape::CatalogScraper;
    /// use std::time::Duration;
    ///
    /// let builder = CatalogScraper::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// How long parsed results are reused; `Duration::ZERO` disables reuse
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Take timeout, user agent, cache settings and layout from `config`
    ///
    /// Timeout and user agent only apply when no custom source is set, and
    /// explicit `timeout()` / `user_agent()` calls take precedence.
    pub fn from_config(mut self, config: &ScraperConfig) -> Self {
        self.config_timeout = Some(config.timeout());
        self.config_user_agent = Some(config.user_agent.clone());
        self.cache_ttl = Some(config.cache_ttl());
        self.cache_capacity = Some(config.cache_capacity);
        self.layout = Some(config.layout.clone());
        self
    }

    /// Build the scraper
    ///
    /// # Errors
    /// Returns `ScrapeError` if the layout has unusable attribute names or
    /// the HTTP client cannot be created.
    pub fn build(self) -> Result<CatalogScraper> {
        let defaults = ScraperConfig::default();

        let source: Box<dyn DocumentSource> = match self.source {
            Some(source) => {
                if self.timeout.is_some() || self.user_agent.is_some() {
                    return Err(ScrapeError::BuilderError(
                        "timeout() and user_agent() only apply to the built-in fetcher".to_string(),
                    ));
                }
                source
            }
            None => {
                let timeout = self.timeout.or(self.config_timeout);
                let user_agent = self
                    .user_agent
                    .or(self.config_user_agent)
                    .unwrap_or(defaults.user_agent.clone());
                Box::new(RequestFetcher::with_user_agent(timeout, &user_agent)?)
            }
        };

        let extractor = Extractor::new(self.layout.unwrap_or_default())?;
        let ttl = self.cache_ttl.unwrap_or_else(|| defaults.cache_ttl());
        let capacity = self.cache_capacity.unwrap_or(defaults.cache_capacity);

        Ok(CatalogScraper {
            source,
            extractor,
            listings: ResultCache::new(ttl, capacity),
            details: ResultCache::new(ttl, capacity),
        })
    }
}
