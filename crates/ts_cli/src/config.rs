use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use ts_core::{Error, Result};
use ts_metrics::{Lexicon, MetricsEngine};
use ts_scrapers::FetcherConfig;
use ts_storage::{ReportFormat, SinkConfig};

pub const DEFAULT_OUTPUT: &str = "Output.csv";
pub const DEFAULT_ARTICLES_DIR: &str = "articles";
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Duration parsed from forms like `30s`, `5m`, `1h15m30s`; bare numbers are seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_value = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| format!("Duration too large: {}", s))?;
                current_number.clear();
                has_value = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| format!("Invalid number in duration: {}", current_number))?;
            total_seconds = total_seconds
                .checked_add(num)
                .ok_or_else(|| format!("Duration too large: {}", s))?;
            has_value = true;
        }

        if !has_value {
            return Err("Duration must include a number".to_string());
        }
        if total_seconds == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

/// Everything a batch run needs, with defaults filled in.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub articles_dir: PathBuf,
    pub format: ReportFormat,
    pub concurrency: usize,
    pub fetcher: FetcherConfig,
    pub positive: Option<PathBuf>,
    pub negative: Option<PathBuf>,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            articles_dir: PathBuf::from(DEFAULT_ARTICLES_DIR),
            format: ReportFormat::Csv,
            concurrency: DEFAULT_CONCURRENCY,
            fetcher: FetcherConfig::default(),
            positive: None,
            negative: None,
            dry_run: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        if self.positive.is_some() != self.negative.is_some() {
            return Err(Error::Config(
                "--positive and --negative must be given together".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            articles_dir: self.articles_dir.clone(),
            report_path: self.output.clone(),
            format: self.format,
        }
    }

    pub fn engine(&self) -> Result<MetricsEngine> {
        load_engine(self.positive.as_deref(), self.negative.as_deref())
    }
}

/// Picks the report format from an explicit flag or, failing that, the output extension.
pub fn resolve_format(explicit: Option<ReportFormat>, output: &Path) -> ReportFormat {
    explicit.unwrap_or_else(|| {
        output
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    })
}

/// Builds the engine from the built-in lexicon or a pair of word-list files.
pub fn load_engine(positive: Option<&Path>, negative: Option<&Path>) -> Result<MetricsEngine> {
    match (positive, negative) {
        (Some(positive), Some(negative)) => {
            Ok(MetricsEngine::new(Lexicon::from_files(positive, negative)?))
        }
        (None, None) => Ok(MetricsEngine::default()),
        _ => Err(Error::Config(
            "--positive and --negative must be given together".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_human_duration() {
        assert_eq!("30s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(30));
        assert_eq!("45".parse::<HumanDuration>().unwrap().0, Duration::from_secs(45));
        assert_eq!(
            "1h15m30s".parse::<HumanDuration>().unwrap().0,
            Duration::from_secs(4530)
        );
        assert!("".parse::<HumanDuration>().is_err());
        assert!("0s".parse::<HumanDuration>().is_err());
        assert!("10x".parse::<HumanDuration>().is_err());
        assert!("abc".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_human_duration_overflow() {
        assert!("213503982334602d".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s1s".parse::<HumanDuration>().is_err());
        assert!("99999999999999999999".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::new("Input.csv");
        assert!(config.validate().is_ok());
        let sink = config.sink_config();
        assert_eq!(sink.report_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(sink.articles_dir, PathBuf::from(DEFAULT_ARTICLES_DIR));
        assert_eq!(sink.format, ReportFormat::Csv);
    }

    #[test]
    fn test_run_config_validation() {
        let mut config = RunConfig::new("Input.csv");
        config.concurrency = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = RunConfig::new("Input.csv");
        config.positive = Some(PathBuf::from("positive.txt"));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, Path::new("out/report.json")), ReportFormat::Json);
        assert_eq!(resolve_format(None, Path::new("Output.csv")), ReportFormat::Csv);
        assert_eq!(resolve_format(None, Path::new("Output.xlsx")), ReportFormat::Csv);
        assert_eq!(
            resolve_format(Some(ReportFormat::Csv), Path::new("report.json")),
            ReportFormat::Csv
        );
    }

    #[test]
    fn test_load_engine() {
        assert_eq!(load_engine(None, None).unwrap().lexicon().positive_len(), 7);

        let mut positive = NamedTempFile::new().unwrap();
        writeln!(positive, "stellar").unwrap();
        let mut negative = NamedTempFile::new().unwrap();
        writeln!(negative, "dismal").unwrap();
        let engine = load_engine(Some(positive.path()), Some(negative.path())).unwrap();
        assert_eq!(engine.compute_metrics("A stellar quarter.").positive_score, 1);

        assert!(matches!(
            load_engine(Some(positive.path()), None),
            Err(Error::Config(_))
        ));
    }
}
