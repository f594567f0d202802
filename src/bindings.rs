//! DOM Binding Contract
//!
//! Element identifiers and class names the page markup must provide. Front
//! ends receive these as a value instead of hard-coding lookups, so a test
//! page or an alternate layout can rebind them.

/// Identifiers of the elements the handlers read from and write to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomBindings {
    /// Feedback form (`submit` triggers an analysis)
    pub feedback_form: &'static str,
    /// Free-text field inside the feedback form
    pub feedback_text: &'static str,
    /// Department field inside the feedback form
    pub department: &'static str,
    /// File upload form
    pub upload_form: &'static str,
    /// File input inside the upload form
    pub upload_file: &'static str,
    /// Result container, hidden until the first analysis
    pub result: &'static str,
    /// Class of the wrapper inside `result` that carries the sentiment class
    pub result_display_class: &'static str,
    /// Class of the emoji element inside `result`
    pub result_emoji_class: &'static str,
    /// Class of the text element inside `result`
    pub result_text_class: &'static str,
    /// Container for upload banners
    pub upload_result: &'static str,
    /// Chart container
    pub chart: &'static str,
    /// Class that hides an element
    pub hidden_class: &'static str,
}

impl DomBindings {
    /// The identifiers used by the stock page
    pub const fn standard() -> Self {
        Self {
            feedback_form: "feedbackForm",
            feedback_text: "feedbackText",
            department: "department",
            upload_form: "fileUploadForm",
            upload_file: "feedbackFile",
            result: "sentimentResult",
            result_display_class: "sentiment-display",
            result_emoji_class: "sentiment-emoji",
            result_text_class: "sentiment-text",
            upload_result: "uploadResult",
            chart: "sentimentChart",
            hidden_class: "d-none",
        }
    }
}

impl Default for DomBindings {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bindings() {
        let bindings = DomBindings::default();
        assert_eq!(bindings.feedback_form, "feedbackForm");
        assert_eq!(bindings.upload_file, "feedbackFile");
        assert_eq!(bindings.result, "sentimentResult");
        assert_eq!(bindings.chart, "sentimentChart");
        assert_eq!(bindings.result_display_class, "sentiment-display");
    }
}
