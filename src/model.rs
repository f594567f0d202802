//! Wire Types
//!
//! Request and response bodies exchanged with the sentiment server, plus the
//! five sentiment categories they refer to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five fixed feedback polarity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Sentiment {
    /// All categories, most positive first
    pub const ALL: [Sentiment; 5] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::VeryNegative,
    ];

    /// Parse a label as sent by the server.
    ///
    /// Matching ignores case and treats `_`, `-` and spaces alike, so
    /// `"very positive"`, `"very_positive"` and `"VERY_POSITIVE"` are the same.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "very positive" => Some(Sentiment::VeryPositive),
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            "very negative" => Some(Sentiment::VeryNegative),
            _ => None,
        }
    }

    /// Canonical lower-case label
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "very positive",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::VeryNegative => "very negative",
        }
    }

    /// Emoji shown next to the result
    pub fn glyph(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "😄",
            Sentiment::Positive => "🙂",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "🙁",
            Sentiment::VeryNegative => "😢",
        }
    }

    /// Pie slice color
    pub fn color(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "#28a745",
            Sentiment::Positive => "#20c997",
            Sentiment::Neutral => "#6c757d",
            Sentiment::Negative => "#dc3545",
            Sentiment::VeryNegative => "#721c24",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub department: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            department: department.into(),
        }
    }
}

/// Successful body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WireAnalysisResult")]
pub struct AnalysisResult {
    /// Sentiment label; deployed servers call this field `category`
    pub sentiment: String,
    pub score: f64,
    pub error: Option<String>,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub confidence: Option<f64>,
    pub department: Option<String>,
    pub text: Option<String>,
}

/// `/analyze` body as sent; servers may carry the label as `sentiment`,
/// `category` or both
#[derive(Deserialize)]
struct WireAnalysisResult {
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl TryFrom<WireAnalysisResult> for AnalysisResult {
    type Error = String;

    fn try_from(wire: WireAnalysisResult) -> Result<Self, Self::Error> {
        let sentiment = wire
            .sentiment
            .or(wire.category)
            .ok_or_else(|| "missing field `sentiment`".to_string())?;

        Ok(Self {
            sentiment,
            score: wire.score,
            error: wire.error,
            emoji: wire.emoji,
            description: wire.description,
            confidence: wire.confidence,
            department: wire.department,
            text: wire.text,
        })
    }
}

impl AnalysisResult {
    /// Recognized sentiment, if the label is one of the five categories
    pub fn category(&self) -> Option<Sentiment> {
        Sentiment::parse(&self.sentiment)
    }
}

/// Body of `GET /stats`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub average_score: Option<f64>,
}

/// Body of `POST /upload`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Per-row analyses, passed through untouched
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}
