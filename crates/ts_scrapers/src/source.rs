use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, Trim};
use tracing::info;
use ts_core::{Error, Result, UrlEntry, UrlSource};
use url::Url;

const URL_ID_COLUMN: &str = "URL_ID";
const URL_COLUMN: &str = "URL";

/// Reads `(URL_ID, URL)` pairs from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvUrlSource {
    path: PathBuf,
}

impl CsvUrlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses CSV content. Extra columns are ignored.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<UrlEntry>> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| Error::InputFormat(format!("Failed to read header row: {}", e)))?
            .clone();

        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::InputFormat(format!("Missing column: {}", name)))
        };
        let id_idx = column(URL_ID_COLUMN)?;
        let url_idx = column(URL_COLUMN)?;

        let mut entries = Vec::new();
        for (i, record) in reader.records().enumerate() {
            // header is line 1
            let line = i + 2;
            let record = record
                .map_err(|e| Error::InputFormat(format!("Line {}: {}", line, e)))?;
            let url_id = record.get(id_idx).unwrap_or_default();
            let url = record.get(url_idx).unwrap_or_default();
            if url_id.is_empty() || url.is_empty() {
                return Err(Error::InputFormat(format!(
                    "Line {}: both {} and {} are required",
                    line, URL_ID_COLUMN, URL_COLUMN
                )));
            }
            Url::parse(url)
                .map_err(|e| Error::InputFormat(format!("Line {}: invalid URL {}: {}", line, url, e)))?;
            entries.push(UrlEntry::new(url_id, url));
        }

        Ok(entries)
    }
}

impl UrlSource for CsvUrlSource {
    fn entries(&self) -> Result<Vec<UrlEntry>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::InputFormat(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let entries = Self::parse(file)?;
        info!("📋 Loaded {} URLs from {}", entries.len(), self.path.display());
        Ok(entries)
    }
}
