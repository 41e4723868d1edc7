use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use ts_core::{ArticleSink, MetricsRecord, Result};
use crate::report::{self, ReportFormat};

#[derive(Debug, Default)]
pub struct MemoryStore {
    archives: HashMap<String, String>,
    report: Option<Vec<MetricsRecord>>,
}

impl MemoryStore {
    pub fn archive_text(&mut self, url_id: &str, title: &str, text: &str) {
        self.archives
            .insert(url_id.to_string(), report::archive_contents(title, text));
    }

    pub fn write_report(&mut self, records: &[MetricsRecord]) {
        self.report = Some(records.to_vec());
    }
}

/// Keeps everything in process. Used for dry runs and tests.
#[derive(Debug, Clone)]
pub struct MemorySink {
    store: Arc<RwLock<MemoryStore>>,
    format: ReportFormat,
}

impl MemorySink {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::default())),
            format,
        }
    }

    pub async fn archived(&self, url_id: &str) -> Option<String> {
        self.store.read().await.archives.get(url_id).cloned()
    }

    pub async fn archive_count(&self) -> usize {
        self.store.read().await.archives.len()
    }

    pub async fn report(&self) -> Option<Vec<MetricsRecord>> {
        self.store.read().await.report.clone()
    }

    /// The last written report rendered in this sink's format.
    pub async fn rendered_report(&self) -> Result<Option<Vec<u8>>> {
        match self.report().await {
            Some(records) => Ok(Some(report::render(self.format, &records)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ArticleSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn archive_text(&self, url_id: &str, title: &str, text: &str) -> Result<()> {
        self.store.write().await.archive_text(url_id, title, text);
        Ok(())
    }

    async fn write_report(&self, records: &[MetricsRecord]) -> Result<()> {
        self.store.write().await.write_report(records);
        Ok(())
    }
}
