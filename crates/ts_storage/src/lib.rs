use std::path::PathBuf;
use std::sync::Arc;
use ts_core::{ArticleSink, Error, Result};

pub mod backends;
pub mod report;

pub use backends::*;
pub use report::ReportFormat;

/// Where a sink writes archived texts and the final report.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub articles_dir: PathBuf,
    pub report_path: PathBuf,
    pub format: ReportFormat,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("articles"),
            report_path: PathBuf::from("Output.csv"),
            format: ReportFormat::Csv,
        }
    }
}

/// Builds a sink by backend name: `fs` or `memory`.
pub async fn create_sink(kind: &str, config: SinkConfig) -> Result<Arc<dyn ArticleSink>> {
    match kind {
        "fs" => Ok(Arc::new(FileSystemSink::new(config).await?)),
        "memory" => Ok(Arc::new(MemorySink::new(config.format))),
        other => Err(Error::Persistence(format!("Unknown sink backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_sink, ReportFormat, SinkConfig};
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_sink() {
        let dir = tempdir().unwrap();
        let config = SinkConfig {
            articles_dir: dir.path().join("articles"),
            report_path: dir.path().join("Output.csv"),
            format: ReportFormat::Csv,
        };

        let fs = create_sink("fs", config.clone()).await.unwrap();
        assert_eq!(fs.name(), "fs");
        assert!(config.articles_dir.is_dir());

        let memory = create_sink("memory", config.clone()).await.unwrap();
        assert_eq!(memory.name(), "memory");

        let unknown = create_sink("s3", config).await;
        assert!(matches!(unknown, Err(Error::Persistence(_))));
    }
}
