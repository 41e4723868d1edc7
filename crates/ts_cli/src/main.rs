use std::path::PathBuf;
use std::sync::Arc;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::{info, Level};
use ts_core::{ArticleSink, Result, UrlSource};
use ts_scrapers::{BatchManager, CsvUrlSource, FetcherConfig, HttpArticleFetcher};
use ts_storage::{MemorySink, ReportFormat};

mod config;
mod logging;

use config::{load_engine, resolve_format, HumanDuration, RunConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Readability and sentiment scores for news articles", long_about = None)]
pub struct Cli {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch every URL in the input sheet, score it and write the report
    Run(RunArgs),
    /// Score raw text from a file, an argument or stdin and print the metrics as JSON
    Analyze {
        /// Read the text from this file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Score this text directly
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        lexicon: LexiconArgs,
    },
    /// Fetch and score a single URL and print the record as JSON
    Url {
        url: String,
        /// URL_ID to put in the record
        #[arg(long, default_value = "url")]
        id: String,
        /// Request timeout (e.g. 30s, 1m)
        #[arg(long, default_value = "30s")]
        timeout: HumanDuration,
        #[command(flatten)]
        lexicon: LexiconArgs,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// CSV file with URL_ID and URL columns
    #[arg(long)]
    input: PathBuf,
    /// Report file
    #[arg(long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Directory for the archived article texts
    #[arg(long, default_value = config::DEFAULT_ARTICLES_DIR)]
    articles_dir: PathBuf,
    /// Report format (csv or json); defaults to the output file's extension
    #[arg(long)]
    format: Option<ReportFormat>,
    /// Number of articles fetched at once
    #[arg(long, default_value_t = config::DEFAULT_CONCURRENCY)]
    concurrency: usize,
    /// Request timeout (e.g. 30s, 1m)
    #[arg(long, default_value = "30s")]
    timeout: HumanDuration,
    /// User agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,
    /// Keep everything in memory and print the report to stdout
    #[arg(long)]
    dry_run: bool,
    #[command(flatten)]
    lexicon: LexiconArgs,
}

#[derive(Args, Debug)]
struct LexiconArgs {
    /// Positive word list, one word per line
    #[arg(long, requires = "negative")]
    positive: Option<PathBuf>,
    /// Negative word list, one word per line
    #[arg(long, requires = "positive")]
    negative: Option<PathBuf>,
}

impl RunArgs {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.input);
        config.format = resolve_format(self.format, &self.output);
        config.output = self.output;
        config.articles_dir = self.articles_dir;
        config.concurrency = self.concurrency;
        config.fetcher.timeout = self.timeout.0;
        if let Some(user_agent) = self.user_agent {
            config.fetcher.user_agent = user_agent;
        }
        config.positive = self.lexicon.positive;
        config.negative = self.lexicon.negative;
        config.dry_run = self.dry_run;
        config
    }
}

async fn run_batch(config: RunConfig) -> Result<()> {
    config.validate()?;
    let engine = Arc::new(config.engine()?);
    let entries = CsvUrlSource::new(&config.input).entries()?;
    let fetcher = Arc::new(HttpArticleFetcher::new(&config.fetcher)?);

    let memory = config.dry_run.then(|| MemorySink::new(config.format));
    let sink: Arc<dyn ArticleSink> = match &memory {
        Some(memory) => Arc::new(memory.clone()),
        None => ts_storage::create_sink("fs", config.sink_config()).await?,
    };
    info!("💾 Using {} sink", sink.name());

    let manager = BatchManager::new(fetcher, sink, engine, config.concurrency);
    let summary = manager.run(&entries).await?;

    info!(
        "✅ Done: {} of {} articles scored, {} skipped",
        summary.processed(),
        entries.len(),
        summary.skipped.len()
    );

    if let Some(memory) = memory {
        if let Some(report) = memory.rendered_report().await? {
            println!("{}", String::from_utf8_lossy(&report));
        }
    }
    Ok(())
}

async fn analyze_text(file: Option<PathBuf>, text: Option<String>, lexicon: LexiconArgs) -> Result<()> {
    let engine = load_engine(lexicon.positive.as_deref(), lexicon.negative.as_deref())?;
    let text = match (file, text) {
        (Some(path), _) => tokio::fs::read_to_string(&path).await?,
        (None, Some(text)) => text,
        (None, None) => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    let metrics = engine.compute_metrics(&text);
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

async fn analyze_url(url: String, id: String, timeout: HumanDuration, lexicon: LexiconArgs) -> Result<()> {
    let engine = Arc::new(load_engine(lexicon.positive.as_deref(), lexicon.negative.as_deref())?);
    let fetcher = Arc::new(HttpArticleFetcher::new(&FetcherConfig {
        timeout: timeout.0,
        ..FetcherConfig::default()
    })?);
    let sink = Arc::new(MemorySink::new(ReportFormat::Json));
    let manager = BatchManager::new(fetcher, sink, engine, 1);

    info!("Scraping single URL: {}", url);
    let record = manager.analyze_url(&id, &url).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    match cli.command {
        Commands::Run(args) => run_batch(args.into_config()).await,
        Commands::Analyze { file, text, lexicon } => analyze_text(file, text, lexicon).await,
        Commands::Url { url, id, timeout, lexicon } => analyze_url(url, id, timeout, lexicon).await,
    }
}
