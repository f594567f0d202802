//! Sentiment distribution pie chart

use std::f64::consts::PI;

use super::result::two_decimals;
use crate::model::{Sentiment, StatsResponse};

pub const CHART_TITLE: &str = "Sentiment Distribution";

/// Chart height in pixels
pub const CHART_HEIGHT: u32 = 400;

/// Slice color for labels outside the five categories
pub const UNKNOWN_COLOR: &str = "#adb5bd";

/// One slice of the distribution
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Key exactly as the server sent it
    pub key: String,
    /// Title-cased display label
    pub label: String,
    pub value: u64,
    pub color: &'static str,
    pub sentiment: Option<Sentiment>,
}

/// Angular extent of a slice, in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f64,
    pub end: f64,
}

/// A fully built pie chart, redrawn from scratch on every refresh
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub height: u32,
    pub slices: Vec<PieSlice>,
    pub total: u64,
    pub average_score: Option<f64>,
}

impl PieChart {
    /// Build the chart for a `/stats` response.
    ///
    /// Every distribution key yields exactly one slice. Colors follow the
    /// sentiment of the key, so a missing category never shifts the others.
    /// Known categories come first in their fixed order, anything else
    /// follows in key order.
    pub fn from_stats(stats: &StatsResponse) -> Self {
        let mut slices: Vec<PieSlice> = stats
            .sentiment_distribution
            .iter()
            .map(|(key, &value)| {
                let sentiment = Sentiment::parse(key);
                PieSlice {
                    key: key.clone(),
                    label: title_case(key),
                    value,
                    color: sentiment.map(Sentiment::color).unwrap_or(UNKNOWN_COLOR),
                    sentiment,
                }
            })
            .collect();

        // Stable sort keeps key order within equal ranks
        slices.sort_by_key(|slice| match slice.sentiment {
            Some(s) => s as usize,
            None => Sentiment::ALL.len(),
        });

        let counted: u64 = slices.iter().map(|s| s.value).sum();

        Self {
            title: CHART_TITLE.to_string(),
            height: CHART_HEIGHT,
            slices,
            total: stats.total.unwrap_or(counted),
            average_score: stats.average_score,
        }
    }

    pub fn values(&self) -> Vec<u64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn colors(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.color).collect()
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.value == 0)
    }

    /// Share of each slice in `0.0..=1.0`, aligned with `slices`
    pub fn fractions(&self) -> Vec<f64> {
        let sum: u64 = self.slices.iter().map(|s| s.value).sum();
        if sum == 0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices
            .iter()
            .map(|s| s.value as f64 / sum as f64)
            .collect()
    }

    /// Arc of each slice, aligned with `slices`. Arcs are contiguous and,
    /// for a non-empty chart, cover the full circle.
    pub fn arcs(&self) -> Vec<SliceArc> {
        let mut start = 0.0;
        self.fractions()
            .into_iter()
            .map(|fraction| {
                let end = start + fraction * 2.0 * PI;
                let arc = SliceArc { start, end };
                start = end;
                arc
            })
            .collect()
    }

    /// Caption under the title, e.g. `12 responses · average score 0.41`
    pub fn caption(&self) -> String {
        let noun = if self.total == 1 { "response" } else { "responses" };
        match self.average_score {
            Some(avg) => format!("{} {} · average score {}", self.total, noun, two_decimals(avg)),
            None => format!("{} {}", self.total, noun),
        }
    }
}

/// Display form of a distribution key: underscores become spaces, each word
/// starts upper-case and continues lower-case (`very_positive` → `Very Positive`).
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut word_start = true;

    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }

    out
}
