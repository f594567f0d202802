//! Terminal Surface
//!
//! Prints what the page would show: results and banners go to `out`, alerts
//! to `err`, and the pie chart becomes a bar table.

use std::io::Write;

use crate::render::{BannerKind, PieChart, ResultView, UploadBanner};
use crate::surface::{Surface, SurfaceError};

/// Width of a full bar in the chart table
const BAR_WIDTH: usize = 30;

pub struct TerminalSurface<W: Write, E: Write> {
    out: W,
    err: E,
}

impl TerminalSurface<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, E: Write> TerminalSurface<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_chart(&mut self, chart: &PieChart) -> std::io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{}", chart.caption())?;
        writeln!(self.out, "{}", "-".repeat(chart.title.chars().count()))?;

        if chart.is_empty() {
            writeln!(self.out, "No feedback yet")?;
            return Ok(());
        }

        let label_width = chart
            .slices
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for (slice, fraction) in chart.slices.iter().zip(chart.fractions()) {
            let filled = (fraction * BAR_WIDTH as f64).round() as usize;
            writeln!(
                self.out,
                "{:<width$}  {:<bar$}  {:>5} ({:>5.1}%)",
                slice.label,
                "█".repeat(filled),
                slice.value,
                fraction * 100.0,
                width = label_width,
                bar = BAR_WIDTH,
            )?;
        }

        Ok(())
    }
}

impl<W: Write, E: Write> Surface for TerminalSurface<W, E> {
    fn show_result(&mut self, view: &ResultView) {
        let _ = writeln!(self.out, "{} {}", view.glyph, view.text);
    }

    fn show_upload_banner(&mut self, banner: &UploadBanner) {
        let tag = match banner.kind {
            BannerKind::Success => "success",
            BannerKind::Danger => "danger",
        };
        let _ = writeln!(self.out, "[{}] {}", tag, banner.message);
    }

    fn draw_chart(&mut self, chart: &PieChart) -> Result<(), SurfaceError> {
        self.write_chart(chart)
            .map_err(|e| SurfaceError::Render(e.to_string()))?;
        let _ = writeln!(
            self.out,
            "Updated {}",
            chrono::Local::now().format("%H:%M:%S")
        );
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.err, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatsResponse;
    use crate::testing::{analysis, distribution};

    fn surface() -> TerminalSurface<Vec<u8>, Vec<u8>> {
        TerminalSurface::new(Vec::new(), Vec::new())
    }

    fn output(surface: TerminalSurface<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = surface.into_parts();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_result_line() {
        let mut s = surface();
        s.show_result(&ResultView::from_result(&analysis("negative", -0.4567)));

        let (out, err) = output(s);
        assert_eq!(out, "🙁 Sentiment: negative (Score: -0.46)\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_alert_goes_to_err() {
        let mut s = surface();
        s.alert("Error: empty text");

        let (out, err) = output(s);
        assert!(out.is_empty());
        assert_eq!(err, "Error: empty text\n");
    }

    #[test]
    fn test_banners() {
        let mut s = surface();
        s.show_upload_banner(&UploadBanner::rejected("No file selected"));

        let (out, _) = output(s);
        assert_eq!(out, "[danger] Error: No file selected\n");
    }

    #[test]
    fn test_chart_table() {
        let mut s = surface();
        let chart = PieChart::from_stats(&distribution(&[("very_positive", 3), ("negative", 1)]));
        s.draw_chart(&chart).unwrap();

        let (out, _) = output(s);
        assert!(out.starts_with("Sentiment Distribution\n4 responses\n"));
        assert!(out.contains("Very Positive"));
        assert!(out.contains("( 75.0%)"));
        assert!(out.contains("( 25.0%)"));
        assert!(out.contains("Updated "));
    }

    #[test]
    fn test_empty_chart() {
        let mut s = surface();
        s.draw_chart(&PieChart::from_stats(&StatsResponse::default())).unwrap();

        let (out, _) = output(s);
        assert!(out.contains("No feedback yet"));
    }
}
