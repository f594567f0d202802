//! Analysis result rendering

use crate::model::{AnalysisResult, Sentiment};

/// Classes the sentiment display element is reset to before each render
pub const DISPLAY_BASE_CLASSES: &str = "sentiment-display p-3 rounded";

/// What the result container shows for one analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Recognized category, `None` for labels outside the fixed table
    pub sentiment: Option<Sentiment>,
    /// Label as displayed
    pub label: String,
    /// Class added to the display element, e.g. `very-positive`
    pub sentiment_class: String,
    pub glyph: String,
    /// `Sentiment: <label> (Score: <score>)`
    pub text: String,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let sentiment = result.category();

        let (label, glyph) = match sentiment {
            Some(s) => (s.label().to_string(), s.glyph().to_string()),
            None => {
                tracing::warn!(label = %result.sentiment, "Unrecognized sentiment label");
                let glyph = result
                    .emoji
                    .clone()
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| Sentiment::Neutral.glyph().to_string());
                (result.sentiment.trim().to_string(), glyph)
            }
        };

        Self {
            sentiment,
            sentiment_class: sentiment_class(&label),
            text: format!("Sentiment: {} (Score: {})", label, two_decimals(result.score)),
            label,
            glyph,
        }
    }

    /// Full class attribute of the display element after a render
    pub fn display_classes(&self) -> String {
        if self.sentiment_class.is_empty() {
            DISPLAY_BASE_CLASSES.to_string()
        } else {
            format!("{} {}", DISPLAY_BASE_CLASSES, self.sentiment_class)
        }
    }
}

/// Score with two decimals, halves rounded away from zero (`0.125` → `0.13`)
pub fn two_decimals(score: f64) -> String {
    format!("{:.2}", (score * 100.0).round() / 100.0)
}

/// CSS class for a label: whitespace runs become single hyphens
pub fn sentiment_class(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(sentiment: &str, score: f64) -> AnalysisResult {
        AnalysisResult {
            sentiment: sentiment.to_string(),
            score,
            error: None,
            emoji: None,
            description: None,
            confidence: None,
            department: None,
            text: None,
        }
    }

    #[test]
    fn test_glyph_and_class_for_every_label() {
        let expected = [
            ("very positive", "😄", "very-positive"),
            ("positive", "🙂", "positive"),
            ("neutral", "😐", "neutral"),
            ("negative", "🙁", "negative"),
            ("very negative", "😢", "very-negative"),
        ];

        for (label, glyph, class) in expected {
            let view = ResultView::from_result(&result(label, 0.5));
            assert_eq!(view.glyph, glyph, "glyph for {}", label);
            assert_eq!(view.sentiment_class, class, "class for {}", label);
            assert_eq!(view.display_classes(), format!("sentiment-display p-3 rounded {}", class));
        }
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let view = ResultView::from_result(&result("positive", 0.856));
        assert_eq!(view.text, "Sentiment: positive (Score: 0.86)");

        let view = ResultView::from_result(&result("very negative", -0.9));
        assert_eq!(view.text, "Sentiment: very negative (Score: -0.90)");
    }

    #[test]
    fn test_score_halves_round_away_from_zero() {
        let view = ResultView::from_result(&result("positive", 0.125));
        assert_eq!(view.text, "Sentiment: positive (Score: 0.13)");

        let view = ResultView::from_result(&result("negative", -0.125));
        assert_eq!(view.text, "Sentiment: negative (Score: -0.13)");

        assert_eq!(two_decimals(0.625), "0.63");
        assert_eq!(two_decimals(0.5), "0.50");
    }

    #[test]
    fn test_server_spelling_renders_canonical_label() {
        let view = ResultView::from_result(&result("VERY_POSITIVE", 0.91));
        assert_eq!(view.sentiment, Some(Sentiment::VeryPositive));
        assert_eq!(view.label, "very positive");
        assert_eq!(view.sentiment_class, "very-positive");
    }

    #[test]
    fn test_unknown_label_falls_back_to_neutral_glyph() {
        let view = ResultView::from_result(&result("somewhat mixed", 0.1));
        assert_eq!(view.sentiment, None);
        assert_eq!(view.glyph, "😐");
        assert_eq!(view.sentiment_class, "somewhat-mixed");
        assert_eq!(view.text, "Sentiment: somewhat mixed (Score: 0.10)");
    }

    #[test]
    fn test_unknown_label_prefers_server_emoji() {
        let mut r = result("mixed", 0.0);
        r.emoji = Some("🤔".to_string());
        assert_eq!(ResultView::from_result(&r).glyph, "🤔");
    }
}
