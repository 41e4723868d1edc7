use std::fmt;
use std::str::FromStr;
use csv::Writer;
use ts_core::{Error, MetricsRecord, Result, REPORT_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {} (expected csv or json)", s)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serializes the report into bytes ready to be written out.
pub fn render(format: ReportFormat, records: &[MetricsRecord]) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Csv => render_csv(records),
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(records)?),
    }
}

fn render_csv(records: &[MetricsRecord]) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::Persistence(format!("Failed to flush CSV report: {}", e)))
}

/// Contents of an archived article file.
pub fn archive_contents(title: &str, text: &str) -> String {
    format!("Title: {}\n\n{}", title, text)
}

/// File name for an archived article; path separators in the id are replaced.
pub fn archive_file_name(url_id: &str) -> String {
    let safe: String = url_id
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.txt", safe)
}
