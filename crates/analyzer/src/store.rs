//! Review history with optional JSONL persistence.
//!
//! Every saved review is kept in memory keyed by an increasing id in a
//! `BTreeMap`, so "most recent first" is a reverse walk over the map. A store
//! opened with [`ReviewStore::open`] also appends each review as one JSON line
//! to its file and reloads that file on the next open.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use scorer::Sentiment;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::report::AnalysisReport;

pub type ReviewId = u64;

/// A saved review with the analysis it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReview {
    pub id: ReviewId,
    /// Full input, not the truncated preview
    pub review_text: String,
    pub sentiment: Sentiment,
    pub confidence: u8,
    pub positive_score: u32,
    pub negative_score: u32,
    pub word_count: u32,
    pub explanation: String,
    pub provider: String,
    pub ai_powered: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts over every stored review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// `None` when the store is empty
    pub avg_confidence: Option<f64>,
}

#[derive(Default)]
struct Inner {
    next_id: ReviewId,
    reviews: BTreeMap<ReviewId, StoredReview>,
}

/// Shared handle to the review store. Clones see the same data.
#[derive(Clone, Default)]
pub struct ReviewStore {
    inner: Arc<RwLock<Inner>>,
    path: Option<PathBuf>,
}

impl ReviewStore {
    /// Store that lives only as long as the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by a JSON-lines file, loading whatever it already holds.
    ///
    /// A missing file is an empty history. Lines that fail to parse are
    /// skipped with a warning; new ids continue after the highest loaded one.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let reviews = load_from_disk(&path).await?;
        let next_id = reviews.keys().next_back().copied().unwrap_or(0);
        info!("Loaded {} reviews from {}", reviews.len(), path.display());

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner { next_id, reviews })),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record `review_text` with its analysis and return the new id.
    ///
    /// For a file-backed store the line is written before the review becomes
    /// visible, so a failed write leaves both memory and disk unchanged.
    pub async fn save(&self, review_text: &str, report: &AnalysisReport) -> StoreResult<ReviewId> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id + 1;

        let review = StoredReview {
            id,
            review_text: review_text.to_string(),
            sentiment: report.sentiment,
            confidence: report.confidence,
            positive_score: report.details.positive_score,
            negative_score: report.details.negative_score,
            word_count: report.details.word_count,
            explanation: report.explanation.clone(),
            provider: report.provider.clone(),
            ai_powered: report.ai_powered,
            created_at: report.timestamp,
        };

        if let Some(path) = &self.path {
            append_to_disk(path, &review).await?;
        }

        inner.next_id = id;
        inner.reviews.insert(id, review);
        debug!("Saved review {} ({})", id, report.sentiment);
        Ok(id)
    }

    /// Up to `limit` reviews, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<StoredReview> {
        let inner = self.inner.read().await;
        inner.reviews.values().rev().take(limit).cloned().collect()
    }

    pub async fn get(&self, id: ReviewId) -> Option<StoredReview> {
        self.inner.read().await.reviews.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reviews.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn stats(&self) -> ReviewStats {
        let inner = self.inner.read().await;
        let mut stats = ReviewStats {
            total_reviews: inner.reviews.len(),
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            avg_confidence: None,
        };

        let mut confidence_sum = 0u64;
        for review in inner.reviews.values() {
            match review.sentiment {
                Sentiment::Positive => stats.positive_count += 1,
                Sentiment::Negative => stats.negative_count += 1,
                Sentiment::Neutral => stats.neutral_count += 1,
            }
            confidence_sum += review.confidence as u64;
        }

        if stats.total_reviews > 0 {
            stats.avg_confidence = Some(confidence_sum as f64 / stats.total_reviews as f64);
        }
        stats
    }
}

/// Append one review as a JSON line
async fn append_to_disk(path: &Path, review: &StoredReview) -> StoreResult<()> {
    let mut line = serde_json::to_string(review)?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

/// Read every parseable review from `path`
async fn load_from_disk(path: &Path) -> StoreResult<BTreeMap<ReviewId, StoredReview>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };

    let mut reviews = BTreeMap::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<StoredReview>(line) {
            Ok(review) => {
                reviews.insert(review.id, review);
            }
            Err(e) => warn!(
                "Skipping unreadable line {} in {}: {}",
                line_no + 1,
                path.display(),
                e
            ),
        }
    }
    Ok(reviews)
}
