use async_trait::async_trait;

use crate::error::Result;

mod request;

pub(crate) use request::DEFAULT_USER_AGENT;
pub use request::RequestFetcher;

/// Where raw page markup comes from.
///
/// Implementations fail with a transport error on a non-success response;
/// the extraction engine only ever sees the body text.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}
