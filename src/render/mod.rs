//! Render Transforms
//!
//! Pure mappings from server responses to what a surface should display.
//! Nothing in here performs I/O, so every surface (browser, terminal, test
//! fake) shows exactly the same text, classes, glyphs and chart geometry.

mod chart;
mod result;
mod upload;

pub use chart::{title_case, PieChart, PieSlice, SliceArc, CHART_HEIGHT, CHART_TITLE, UNKNOWN_COLOR};
pub use result::{sentiment_class, two_decimals, ResultView, DISPLAY_BASE_CLASSES};
pub use upload::{BannerKind, UploadBanner, UPLOAD_FAILED_MESSAGE};
