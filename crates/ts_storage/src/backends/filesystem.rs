use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};
use ts_core::{ArticleSink, Error, MetricsRecord, Result};
use crate::report::{self, ReportFormat};
use crate::SinkConfig;

/// Writes archived texts as `<articles_dir>/<URL_ID>.txt` and the report to a single file.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    articles_dir: PathBuf,
    report_path: PathBuf,
    format: ReportFormat,
}

impl FileSystemSink {
    /// Creates the articles directory and the report's parent directory if missing.
    pub async fn new(config: SinkConfig) -> Result<Self> {
        create_dir(&config.articles_dir).await?;
        if let Some(parent) = config.report_path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir(parent).await?;
            }
        }

        Ok(Self {
            articles_dir: config.articles_dir,
            report_path: config.report_path,
            format: config.format,
        })
    }

    pub fn articles_dir(&self) -> &Path {
        &self.articles_dir
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn archive_path(&self, url_id: &str) -> PathBuf {
        self.articles_dir.join(report::archive_file_name(url_id))
    }
}

async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::Persistence(format!("Failed to create {}: {}", path.display(), e)))
}

#[async_trait]
impl ArticleSink for FileSystemSink {
    fn name(&self) -> &str {
        "fs"
    }

    async fn archive_text(&self, url_id: &str, title: &str, text: &str) -> Result<()> {
        let path = self.archive_path(url_id);
        fs::write(&path, report::archive_contents(title, text))
            .await
            .map_err(|e| Error::Persistence(format!("Failed to write {}: {}", path.display(), e)))?;
        debug!("Archived {} to {}", url_id, path.display());
        Ok(())
    }

    async fn write_report(&self, records: &[MetricsRecord]) -> Result<()> {
        let bytes = report::render(self.format, records)?;
        fs::write(&self.report_path, bytes).await.map_err(|e| {
            Error::Persistence(format!("Failed to write {}: {}", self.report_path.display(), e))
        })?;
        info!("📊 Analysis saved to {}", self.report_path.display());
        Ok(())
    }
}
