pub mod manager;
pub mod scrapers;
pub mod source;

pub use manager::{BatchManager, BatchSummary, Outcome};
pub use scrapers::{FetcherConfig, HttpArticleFetcher};
pub use source::CsvUrlSource;

pub mod prelude {
    pub use super::{BatchManager, CsvUrlSource, HttpArticleFetcher};
    pub use ts_core::{ArticleFetcher, ArticleSink, Error, MetricsRecord, Result, UrlEntry, UrlSource};
}
