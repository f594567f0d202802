//! Handler Cycles
//!
//! One function per user-visible cycle. Each performs exactly one request
//! per call (plus one chart refresh after a success), never retries, and
//! reports everything through the [`Surface`]. The returned outcome is for
//! callers that need an exit status; the page ignores it.
//!
//! ## Cycles
//!
//! - [`submit_feedback`]: analyze → render result → refresh chart
//! - [`upload_file`]: upload → banner → refresh chart
//! - [`refresh_chart`]: stats → redraw chart (also the page-load cycle)

use crate::api::{ApiError, FeedbackApi};
use crate::model::AnalysisRequest;
use crate::render::{PieChart, ResultView, UploadBanner};
use crate::surface::Surface;

/// Alert shown when an analysis never got a readable answer
pub const ANALYZE_FAILED_MESSAGE: &str = "An error occurred while analyzing the feedback.";

/// How a chart refresh ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Drawn { slices: usize },
    /// Logged only; the previous chart is still on screen
    Failed,
}

/// How a feedback submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered { view: ResultView, chart: ChartOutcome },
    Rejected { message: String },
    Failed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered { .. })
    }
}

/// How a file upload ended
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Imported { banner: UploadBanner, chart: ChartOutcome },
    Rejected { banner: UploadBanner },
    Failed { banner: UploadBanner },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Imported { .. })
    }
}

/// Analyze one piece of feedback and show the result.
///
/// Rejections raise a blocking alert with the server's message and skip the
/// chart refresh. Transport failures are logged and raise a generic alert.
pub async fn submit_feedback<A, S>(api: &A, surface: &mut S, request: &AnalysisRequest) -> SubmitOutcome
where
    A: FeedbackApi + ?Sized,
    S: Surface + ?Sized,
{
    tracing::debug!(
        department = %request.department,
        chars = request.text.chars().count(),
        "Submitting feedback"
    );

    match api.analyze(request).await {
        Ok(result) => {
            let view = ResultView::from_result(&result);
            surface.show_result(&view);
            tracing::info!(sentiment = %view.label, score = result.score, "Feedback analyzed");

            let chart = refresh_chart(api, surface).await;
            SubmitOutcome::Rendered { view, chart }
        }
        Err(ApiError::Rejected { status, message }) => {
            tracing::warn!(status, message = %message, "Analysis rejected");
            surface.alert(&format!("Error: {}", message));
            SubmitOutcome::Rejected { message }
        }
        Err(e) => {
            surface.log_error("Error analyzing feedback", &e);
            surface.alert(ANALYZE_FAILED_MESSAGE);
            SubmitOutcome::Failed
        }
    }
}

/// Upload a feedback file and show a status banner.
///
/// The file is forwarded untouched, or omitted when none was picked; the
/// server is the only validator.
pub async fn upload_file<A, S>(api: &A, surface: &mut S, file: Option<&A::File>) -> UploadOutcome
where
    A: FeedbackApi + ?Sized,
    S: Surface + ?Sized,
{
    match api.upload(file).await {
        Ok(result) => {
            let banner = UploadBanner::success(&result);
            surface.show_upload_banner(&banner);
            tracing::info!(rows = result.results.len(), "Upload processed");

            let chart = refresh_chart(api, surface).await;
            UploadOutcome::Imported { banner, chart }
        }
        Err(ApiError::Rejected { status, message }) => {
            tracing::warn!(status, message = %message, "Upload rejected");
            let banner = UploadBanner::rejected(&message);
            surface.show_upload_banner(&banner);
            UploadOutcome::Rejected { banner }
        }
        Err(e) => {
            surface.log_error("Error uploading file", &e);
            let banner = UploadBanner::failed();
            surface.show_upload_banner(&banner);
            UploadOutcome::Failed { banner }
        }
    }
}

/// Fetch the distribution and redraw the chart.
///
/// Never surfaces an error to the user: fetch and draw failures are logged
/// and the chart on screen is left as it was.
pub async fn refresh_chart<A, S>(api: &A, surface: &mut S) -> ChartOutcome
where
    A: FeedbackApi + ?Sized,
    S: Surface + ?Sized,
{
    let stats = match api.stats().await {
        Ok(stats) => stats,
        Err(e) => {
            surface.log_error("Error updating chart", &e);
            return ChartOutcome::Failed;
        }
    };

    let chart = PieChart::from_stats(&stats);
    match surface.draw_chart(&chart) {
        Ok(()) => {
            tracing::debug!(slices = chart.slices.len(), total = chart.total, "Chart redrawn");
            ChartOutcome::Drawn {
                slices: chart.slices.len(),
            }
        }
        Err(e) => {
            surface.log_error("Error updating chart", &e);
            ChartOutcome::Failed
        }
    }
}
