//! Upload status banners

use crate::model::UploadResult;

/// Shown when the upload never got a readable answer
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred while processing the file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

/// Banner written into the upload result container.
///
/// `message` is plain text; surfaces must never interpret it as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBanner {
    pub kind: BannerKind,
    pub message: String,
}

impl UploadBanner {
    pub fn success(result: &UploadResult) -> Self {
        Self {
            kind: BannerKind::Success,
            message: result
                .message
                .clone()
                .unwrap_or_else(|| "File processed".to_string()),
        }
    }

    /// Server-side rejection carrying the server's error string
    pub fn rejected(error: &str) -> Self {
        Self {
            kind: BannerKind::Danger,
            message: format!("Error: {}", error),
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: BannerKind::Danger,
            message: UPLOAD_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "alert alert-success",
            BannerKind::Danger => "alert alert-danger",
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == BannerKind::Success
    }
}
