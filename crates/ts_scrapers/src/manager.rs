use std::sync::Arc;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, warn};
use ts_core::{ArticleFetcher, ArticleSink, Error, MetricsRecord, Result, UrlEntry};
use ts_metrics::MetricsEngine;

/// Result of processing one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(MetricsRecord),
    Skipped { url_id: String, reason: String },
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Records in input order
    pub records: Vec<MetricsRecord>,
    /// `(URL_ID, reason)` for every article that could not be fetched
    pub skipped: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.records.len()
    }
}

/// Drives a batch: fetch, archive and score each URL, then write one report.
pub struct BatchManager {
    fetcher: Arc<dyn ArticleFetcher>,
    sink: Arc<dyn ArticleSink>,
    engine: Arc<MetricsEngine>,
    concurrency: usize,
}

impl BatchManager {
    pub fn new(
        fetcher: Arc<dyn ArticleFetcher>,
        sink: Arc<dyn ArticleSink>,
        engine: Arc<MetricsEngine>,
        concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            sink,
            engine,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub async fn process_entry(&self, entry: &UrlEntry) -> Outcome {
        info!("📰 Processing {}: {}", entry.url_id, entry.url);

        let article = match self.fetcher.fetch(&entry.url).await {
            Ok(article) => article,
            Err(e) => {
                warn!("⚠️ Failed to process {}: {}", entry.url_id, e);
                return Outcome::Skipped {
                    url_id: entry.url_id.clone(),
                    reason: e.to_string(),
                };
            }
        };

        if let Err(e) = self
            .sink
            .archive_text(&entry.url_id, &article.title, &article.text)
            .await
        {
            error!("💥 Failed to archive text for {}: {}", entry.url_id, e);
        }

        let metrics = self.engine.compute_metrics(&article.text);
        debug!(
            "{}: {} words, {} complex, fog index {:.2}",
            entry.url_id, metrics.word_count, metrics.complex_word_count, metrics.fog_index
        );

        Outcome::Scored(MetricsRecord::new(
            entry.url_id.clone(),
            article.title,
            metrics,
        ))
    }

    /// Processes every entry and writes the report once, in input order.
    ///
    /// Fetch failures are skipped; a report write failure aborts the batch.
    pub async fn run(&self, entries: &[UrlEntry]) -> Result<BatchSummary> {
        info!(
            "🦗 Processing {} URLs ({} at a time)",
            entries.len(),
            self.concurrency
        );

        let outcomes: Vec<Outcome> = stream::iter(entries)
            .map(|entry| self.process_entry(entry))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut summary = BatchSummary::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Scored(record) => summary.records.push(record),
                Outcome::Skipped { url_id, reason } => summary.skipped.push((url_id, reason)),
            }
        }

        self.sink
            .write_report(&summary.records)
            .await
            .map_err(|e| match e {
                Error::Persistence(_) => e,
                other => Error::Persistence(other.to_string()),
            })?;

        info!(
            "💾 Report written via {} sink: {} scored, {} skipped",
            self.sink.name(),
            summary.processed(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Fetches and scores one URL without touching the sink.
    pub async fn analyze_url(&self, url_id: &str, url: &str) -> Result<MetricsRecord> {
        let article = self.fetcher.fetch(url).await?;
        let metrics = self.engine.compute_metrics(&article.text);
        Ok(MetricsRecord::new(url_id, article.title, metrics))
    }
}
