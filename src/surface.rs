//! Rendering Surface
//!
//! Where the handler cycles put their output. The browser front end writes
//! into the page, the terminal front end prints, tests record.

use std::fmt;
use thiserror::Error;

use crate::render::{PieChart, ResultView, UploadBanner};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The chart could not be drawn; whatever was drawn before stays
    #[error("Render failed: {0}")]
    Render(String),
}

/// Output targets of the handler cycles
pub trait Surface {
    /// Reveal the result container and write one analysis into it
    fn show_result(&mut self, view: &ResultView);

    /// Replace the upload container's contents with a banner
    fn show_upload_banner(&mut self, banner: &UploadBanner);

    /// Redraw the distribution chart from scratch.
    ///
    /// On error the previous chart must remain visible.
    fn draw_chart(&mut self, chart: &PieChart) -> Result<(), SurfaceError>;

    /// Blocking, modal message
    fn alert(&mut self, message: &str);

    /// Diagnostic output for failures the user is not shown
    fn log_error(&mut self, context: &str, error: &dyn fmt::Display) {
        tracing::error!(error = %error, "{}", context);
    }
}
