use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use ts_core::{ArticleFetcher, Error, FetchedArticle, Result};

/// Title used when a page has no `<h1>`.
pub const NO_TITLE: &str = "No Title";

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("textscore/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches article pages over HTTP and pulls out the headline and paragraph text.
#[derive(Debug, Clone)]
pub struct HttpArticleFetcher {
    client: Client,
}

impl HttpArticleFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedArticle> {
        let parsed = utils::parse_url(url)?;
        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned HTTP {}", url, status)));
        }
        let html = response.text().await?;
        debug!("Downloaded {} bytes from {}", html.len(), url);

        let (title, text) = extract_article(&html)?;
        Ok(FetchedArticle {
            url: url.to_string(),
            title,
            text,
        })
    }
}

/// Extracts `(title, body_text)` from an article page.
///
/// The title is the first `<h1>` ([`NO_TITLE`] when there is none); the body
/// is every `<p>` joined by a single space. Pages with an empty title or body
/// are rejected.
pub fn extract_article(html: &str) -> Result<(String, String)> {
    let document = Html::parse_document(html);

    let title = utils::extract_first_text(&document, "h1")?
        .unwrap_or_else(|| NO_TITLE.to_string());
    if title.is_empty() {
        return Err(Error::Fetch("empty article title".to_string()));
    }

    let text = utils::extract_texts(&document, "p")?.join(" ");
    if text.is_empty() {
        return Err(Error::Fetch("no article text".to_string()));
    }

    Ok((title, text))
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use scraper::{ElementRef, Html, Selector};
    use ts_core::{Error, Result};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    fn selector(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| Error::Fetch(format!("Invalid selector {}: {}", css, e)))
    }

    /// Element text with every text node trimmed, then concatenated.
    pub fn stripped_text(element: ElementRef<'_>) -> String {
        element.text().map(str::trim).collect()
    }

    pub fn extract_first_text(document: &Html, css: &str) -> Result<Option<String>> {
        let selector = selector(css)?;
        Ok(document.select(&selector).next().map(stripped_text))
    }

    pub fn extract_texts(document: &Html, css: &str) -> Result<Vec<String>> {
        let selector = selector(css)?;
        Ok(document.select(&selector).map(stripped_text).collect())
    }
}
