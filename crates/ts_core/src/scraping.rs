use async_trait::async_trait;
use crate::types::{FetchedArticle, UrlEntry};
use crate::Result;

pub trait UrlSource: Send + Sync {
    /// Returns the `(URL_ID, URL)` pairs in input order
    fn entries(&self) -> Result<Vec<UrlEntry>>;
}

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Downloads a page and extracts its title and body text
    async fn fetch(&self, url: &str) -> Result<FetchedArticle>;
}
