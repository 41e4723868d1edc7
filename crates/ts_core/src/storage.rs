use async_trait::async_trait;
use crate::types::MetricsRecord;
use crate::Result;

#[async_trait]
pub trait ArticleSink: Send + Sync {
    /// Short backend name used in log lines
    fn name(&self) -> &str;

    /// Archive the raw text of one article, keyed by its URL_ID
    async fn archive_text(&self, url_id: &str, title: &str, text: &str) -> Result<()>;

    /// Persist the full, ordered batch report
    async fn write_report(&self, records: &[MetricsRecord]) -> Result<()>;
}
