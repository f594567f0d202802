//! # Feedback Pulse
//!
//! Client for a feedback-sentiment server: submits feedback text and feedback
//! files, renders the analysed sentiment with an emoji, and keeps a pie chart
//! of the sentiment distribution up to date.
//!
//! ## Modules
//!
//! - [`model`]: Request and response bodies, the five sentiment categories
//! - [`render`]: Pure transforms from responses to what gets displayed
//! - [`api`]: The `FeedbackApi` seam (and, with `native`, a reqwest client)
//! - [`surface`]: The `Surface` seam the handlers write to
//! - [`handlers`]: Submission, upload and chart refresh cycles
//! - [`bindings`]: Element identifiers the page markup provides
//!
//! With the `native` feature (default) the crate also ships [`config`],
//! [`terminal`] and the `feedback-pulse` binary. The browser front end uses
//! the crate with default features off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedback_pulse::{handlers, AnalysisRequest, HttpFeedbackApi, ServerConfig, TerminalSurface};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpFeedbackApi::new(&ServerConfig::default())?;
//!     let mut surface = TerminalSurface::stdio();
//!
//!     let request = AnalysisRequest::new("Checkout was quick and painless", "Sales");
//!     let outcome = handlers::submit_feedback(&api, &mut surface, &request).await;
//!
//!     println!("success: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bindings;
pub mod handlers;
pub mod model;
pub mod render;
pub mod surface;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod terminal;

#[cfg(test)]
mod testing;

pub use api::{decode_response, ApiError, FeedbackApi};
pub use bindings::DomBindings;
pub use handlers::{
    refresh_chart, submit_feedback, upload_file, ChartOutcome, SubmitOutcome, UploadOutcome,
};
pub use model::{AnalysisRequest, AnalysisResult, Sentiment, StatsResponse, UploadResult};
pub use render::{BannerKind, PieChart, PieSlice, ResultView, SliceArc, UploadBanner};
pub use surface::{Surface, SurfaceError};

#[cfg(feature = "native")]
pub use api::{HttpFeedbackApi, UploadFile};

#[cfg(feature = "native")]
pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, ServerConfig};

#[cfg(feature = "native")]
pub use terminal::TerminalSurface;
