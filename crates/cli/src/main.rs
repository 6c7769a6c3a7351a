use ai_client::{GeminiConfig, GeminiProvider};
use analyzer::{AnalysisReport, ReviewId, ReviewStats, ReviewStore, SentimentAnalyzer, StoredReview};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use scorer::Sentiment;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Reviews used by `demo` and `benchmark`
const SAMPLE_REVIEWS: [&str; 4] = [
    "This movie was absolutely amazing! The acting was superb and the plot was captivating.",
    "I hated this film. The script was terrible and the actors seemed bored the entire time.",
    "It was okay. Some parts were good but others were quite boring.",
    "The visual effects were stunning, but the storyline was confusing and hard to follow.",
];

/// ReelSentiment - Movie Review Sentiment Analyzer
#[derive(Parser)]
#[command(name = "reel-sentiment")]
#[command(about = "Classify movie reviews as positive, negative or neutral", long_about = None)]
struct Cli {
    /// Gemini API key; without one, only the rule-based scorer is used
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = ai_client::gemini::DEFAULT_MODEL)]
    model: String,

    /// Provider request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// JSON-lines file holding review history; history is not kept without it
    #[arg(long, env = "REEL_SENTIMENT_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single review
    Analyze {
        /// Review text; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,

        /// Skip the hosted provider even if configured
        #[arg(long)]
        rule_based: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every non-empty line of a file
    Batch {
        /// File with one review per line
        #[arg(long)]
        file: PathBuf,

        /// Number of scored reviews to list (newest first)
        #[arg(long, default_value = "10")]
        show: usize,

        /// Print reviews and stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze the bundled sample reviews
    Demo,

    /// Measure rule-based scoring latency
    Benchmark {
        /// Number of scoring calls to time
        #[arg(long, default_value = "10000")]
        iterations: usize,
    },

    /// List saved reviews, newest first
    History {
        /// Maximum number of reviews to list
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Print reviews as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one saved review
    Show {
        /// Review id
        #[arg(long)]
        id: ReviewId,

        /// Print the review as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize every saved review
    Stats {
        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let analyzer = build_analyzer(&cli)?;
    let store = match &cli.store {
        Some(path) => ReviewStore::open(path)
            .await
            .with_context(|| format!("Failed to open review store {}", path.display()))?,
        None => ReviewStore::new(),
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Analyze {
            text,
            rule_based,
            json,
        } => handle_analyze(&analyzer, &store, text, rule_based, json).await?,
        Commands::Batch { file, show, json } => {
            handle_batch(&analyzer, &store, file, show, json).await?
        }
        Commands::Demo => handle_demo(&analyzer, &store).await?,
        Commands::Benchmark { iterations } => handle_benchmark(iterations)?,
        Commands::History { limit, json } => handle_history(&store, limit, json).await?,
        Commands::Show { id, json } => handle_show(&store, id, json).await?,
        Commands::Stats { json } => handle_stats(&store, json).await?,
    }

    Ok(())
}

/// Use Gemini when a key is present, otherwise the local scorer only
fn build_analyzer(cli: &Cli) -> Result<SentimentAnalyzer> {
    let config = GeminiConfig::new(cli.gemini_api_key.clone())
        .with_model(cli.model.clone())
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let provider = GeminiProvider::new(config).context("Failed to build Gemini client")?;

    if provider.is_configured() {
        info!("Using Gemini model {} with rule-based fallback", provider.model());
        Ok(SentimentAnalyzer::with_provider(provider))
    } else {
        info!("No Gemini API key configured, using rule-based scoring");
        Ok(SentimentAnalyzer::rule_based())
    }
}

/// Handle the 'analyze' command
async fn handle_analyze(
    analyzer: &SentimentAnalyzer,
    store: &ReviewStore,
    text: Option<String>,
    rule_based: bool,
    json: bool,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read review from stdin")?;
            buf
        }
    };

    let report = if rule_based {
        analyzer.analyze_rule_based(&text)?
    } else {
        analyzer.analyze(&text).await?
    };
    let id = save_review(store, &text, &report).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(id, &report);
    }
    Ok(())
}

/// Handle the 'batch' command
async fn handle_batch(
    analyzer: &SentimentAnalyzer,
    store: &ReviewStore,
    file: PathBuf,
    show: usize,
    json: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read reviews from {}", file.display()))?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        bail!("No reviews found in {}", file.display());
    }

    // Scoring is CPU-only, so fan out across rayon's pool
    let start = Instant::now();
    let results: Vec<_> = lines
        .par_iter()
        .map(|line| (*line, analyzer.analyze_rule_based(line)))
        .collect();
    let elapsed = start.elapsed();

    let mut scored = 0usize;
    for (line_no, (line, result)) in results.into_iter().enumerate() {
        match result {
            Ok(report) => {
                save_review(store, line, &report).await;
                scored += 1;
            }
            Err(e) => warn!("Skipping line {}: {}", line_no + 1, e),
        }
    }

    let recent = store.recent(show).await;
    let stats = store.stats().await;

    if json {
        let body = serde_json::json!({ "reviews": recent, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!(
        "{} Scored {} reviews in {:?}",
        "✓".green(),
        scored,
        elapsed
    );
    for review in &recent {
        print_review_line(review);
    }
    print_stats(&stats);
    Ok(())
}

/// Handle the 'demo' command
async fn handle_demo(analyzer: &SentimentAnalyzer, store: &ReviewStore) -> Result<()> {
    println!("{}", "Sample review analysis".bold().blue());
    if let Some(provider) = analyzer.provider_name() {
        println!("Provider: {} (rule-based fallback)", provider);
    }

    for text in SAMPLE_REVIEWS {
        println!();
        println!("{} {}", "Review:".bold(), truncate(text, 60));
        let report = analyzer.analyze(text).await?;
        let id = save_review(store, text, &report).await;
        print_report(id, &report);
    }

    println!();
    print_stats(&store.stats().await);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let mut timings = Vec::with_capacity(iterations);
    let total_start = Instant::now();
    for text in SAMPLE_REVIEWS.iter().cycle().take(iterations) {
        let start = Instant::now();
        std::hint::black_box(scorer::score(text));
        timings.push(start.elapsed());
    }
    let total_time = total_start.elapsed();

    let summary = LatencySummary::from_timings(total_time, timings)
        .context("Benchmark recorded no timings")?;

    println!("Benchmark results:");
    println!("Total time: {:?}", summary.total);
    println!("Average latency: {:?}", summary.average);
    println!("P50 latency: {:?}", summary.p50);
    println!("P95 latency: {:?}", summary.p95);
    println!("P99 latency: {:?}", summary.p99);
    println!("Throughput: {:.2} reviews/second", summary.throughput);

    Ok(())
}

/// Handle the 'history' command
async fn handle_history(store: &ReviewStore, limit: usize, json: bool) -> Result<()> {
    require_store(store, "history")?;
    let recent = store.recent(limit).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    if recent.is_empty() {
        println!("No reviews saved yet");
    }
    for review in &recent {
        print_review_line(review);
    }
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(store: &ReviewStore, id: ReviewId, json: bool) -> Result<()> {
    require_store(store, "show")?;
    let Some(review) = store.get(id).await else {
        bail!("Review #{} not found", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&review)?);
        return Ok(());
    }

    println!(
        "{} #{} {} ({}% confidence) via {}",
        "Review".bold(),
        review.id,
        colored_label(review.sentiment),
        review.confidence,
        review.provider
    );
    println!("{}Saved: {}", "• ".cyan(), review.created_at.to_rfc3339());
    println!(
        "{}Words: {} total, {} positive, {} negative",
        "• ".cyan(),
        review.word_count,
        review.positive_score,
        review.negative_score
    );
    println!("{}Explanation: {}", "• ".cyan(), review.explanation);
    println!("{}Text: {}", "• ".cyan(), review.review_text);
    Ok(())
}

/// Handle the 'stats' command
async fn handle_stats(store: &ReviewStore, json: bool) -> Result<()> {
    require_store(store, "stats")?;
    let stats = store.stats().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }
    Ok(())
}

/// History commands only make sense against a file the previous runs wrote to
fn require_store(store: &ReviewStore, command: &str) -> Result<()> {
    if store.path().is_none() {
        bail!("'{}' needs a review store: pass --store PATH or set REEL_SENTIMENT_STORE", command);
    }
    Ok(())
}

/// Save a review, logging instead of failing when the store cannot be written
async fn save_review(store: &ReviewStore, text: &str, report: &AnalysisReport) -> Option<ReviewId> {
    match store.save(text, report).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Failed to save review: {}", e);
            None
        }
    }
}

/// Latency figures for one benchmark run
#[derive(Debug, PartialEq)]
struct LatencySummary {
    total: Duration,
    average: Duration,
    p50: Duration,
    p95: Duration,
    p99: Duration,
    /// Reviews per second over the whole run
    throughput: f64,
}

impl LatencySummary {
    /// `None` when no timings were recorded
    fn from_timings(total: Duration, mut timings: Vec<Duration>) -> Option<Self> {
        if timings.is_empty() {
            return None;
        }

        let count = timings.len();
        timings.sort();
        let percentile = |p: f64| timings[((count as f64 * p) as usize).min(count - 1)];

        Some(Self {
            total,
            average: total.div_f64(count as f64),
            p50: timings[count / 2],
            p95: percentile(0.95),
            p99: percentile(0.99),
            throughput: count as f64 / total.as_secs_f64(),
        })
    }
}

fn colored_label(sentiment: Sentiment) -> colored::ColoredString {
    let label = sentiment.as_str().to_uppercase();
    match sentiment {
        Sentiment::Positive => label.green(),
        Sentiment::Negative => label.red(),
        Sentiment::Neutral => label.yellow(),
    }
}

/// Helper function to format and print one analysis
fn print_report(id: Option<ReviewId>, report: &AnalysisReport) {
    let saved_as = id.map(|id| format!("#{} ", id)).unwrap_or_default();
    println!(
        "{} {} ({}% confidence) [{}via {}]",
        "Result:".bold(),
        colored_label(report.sentiment),
        report.confidence,
        saved_as,
        report.provider
    );
    println!(
        "{}Words: {} total, {} positive, {} negative",
        "• ".cyan(),
        report.details.word_count,
        report.details.positive_score,
        report.details.negative_score
    );
    println!("{}Explanation: {}", "• ".cyan(), report.explanation);

    if report.ai_powered {
        if let Some(intensity) = report.intensity {
            println!("{}Intensity: {}/10", "• ".cyan(), intensity);
        }
        if !report.emotions.is_empty() {
            println!("{}Emotions: {}", "• ".cyan(), report.emotions.join(", "));
        }
        if !report.key_phrases.is_empty() {
            println!("{}Key phrases: {}", "• ".cyan(), report.key_phrases.join(", "));
        }
    }
}

fn print_review_line(review: &StoredReview) {
    println!(
        "#{} {} ({}%) {}",
        review.id,
        colored_label(review.sentiment),
        review.confidence,
        truncate(&review.review_text, 60)
    );
}

fn print_stats(stats: &ReviewStats) {
    println!("{}", "Summary:".bold().blue());
    println!(
        "  {} positive, {} negative, {} neutral of {} reviews",
        stats.positive_count, stats.negative_count, stats.neutral_count, stats.total_reviews
    );
    if let Some(avg) = stats.avg_confidence {
        println!("  Average confidence: {:.1}%", avg);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
