pub mod error;
pub mod scraping;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use scraping::{ArticleFetcher, UrlSource};
pub use storage::ArticleSink;
pub use types::{FetchedArticle, MetricsRecord, TextMetrics, UrlEntry, REPORT_COLUMNS};
