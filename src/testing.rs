//! Test doubles shared by the unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::fmt;

use crate::api::{ApiError, FeedbackApi};
use crate::model::{AnalysisRequest, AnalysisResult, StatsResponse, UploadResult};
use crate::render::{PieChart, ResultView, UploadBanner};
use crate::surface::{Surface, SurfaceError};

/// API double answering every call with a canned result
pub(crate) struct ScriptedApi {
    pub analyze: Result<AnalysisResult, ApiError>,
    pub upload: Result<UploadResult, ApiError>,
    pub stats: Result<StatsResponse, ApiError>,
    pub calls: RefCell<Vec<&'static str>>,
    pub uploaded: RefCell<Vec<Option<String>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            analyze: Err(ApiError::Transport("unscripted".to_string())),
            upload: Err(ApiError::Transport("unscripted".to_string())),
            stats: Ok(StatsResponse::default()),
            calls: RefCell::new(Vec::new()),
            uploaded: RefCell::new(Vec::new()),
        }
    }

    pub fn with_analyze(mut self, result: Result<AnalysisResult, ApiError>) -> Self {
        self.analyze = result;
        self
    }

    pub fn with_upload(mut self, result: Result<UploadResult, ApiError>) -> Self {
        self.upload = result;
        self
    }

    pub fn with_stats(mut self, result: Result<StatsResponse, ApiError>) -> Self {
        self.stats = result;
        self
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

#[async_trait(?Send)]
impl FeedbackApi for ScriptedApi {
    /// Upload files are identified by name only
    type File = String;

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        self.calls.borrow_mut().push("analyze");
        self.analyze.clone()
    }

    async fn upload(&self, file: Option<&String>) -> Result<UploadResult, ApiError> {
        self.calls.borrow_mut().push("upload");
        self.uploaded.borrow_mut().push(file.cloned());
        self.upload.clone()
    }

    async fn stats(&self) -> Result<StatsResponse, ApiError> {
        self.calls.borrow_mut().push("stats");
        self.stats.clone()
    }
}

/// Surface double keeping everything it was asked to show
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub results: Vec<ResultView>,
    pub banners: Vec<UploadBanner>,
    /// Chart currently on screen
    pub chart: Option<PieChart>,
    pub draws: usize,
    pub alerts: Vec<String>,
    pub errors: Vec<String>,
    pub fail_draw: bool,
}

impl Surface for RecordingSurface {
    fn show_result(&mut self, view: &ResultView) {
        self.results.push(view.clone());
    }

    fn show_upload_banner(&mut self, banner: &UploadBanner) {
        self.banners.push(banner.clone());
    }

    fn draw_chart(&mut self, chart: &PieChart) -> Result<(), SurfaceError> {
        if self.fail_draw {
            return Err(SurfaceError::Render("canvas unavailable".to_string()));
        }
        self.chart = Some(chart.clone());
        self.draws += 1;
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn log_error(&mut self, context: &str, error: &dyn fmt::Display) {
        self.errors.push(format!("{}: {}", context, error));
    }
}

pub(crate) fn analysis(sentiment: &str, score: f64) -> AnalysisResult {
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

pub(crate) fn distribution(entries: &[(&str, u64)]) -> StatsResponse {
    StatsResponse {
        sentiment_distribution: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        total: None,
        average_score: None,
    }
}
