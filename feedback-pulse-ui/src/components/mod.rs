//! UI Components
//!
//! Leptos components for the feedback page. Element ids come from the
//! `DomBindings` in context.

pub mod chart;
pub mod feedback_form;
pub mod sentiment_result;
pub mod upload_form;
pub mod upload_status;

pub use chart::SentimentChart;
pub use feedback_form::FeedbackForm;
pub use sentiment_result::SentimentResult;
pub use upload_form::UploadForm;
pub use upload_status::UploadStatus;
