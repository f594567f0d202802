//! Sentiment Result Component

use leptos::*;

use feedback_pulse::render::DISPLAY_BASE_CLASSES;
use feedback_pulse::{DomBindings, ResultView};

use crate::state::PageState;

/// Result container, hidden until the first analysis arrives
#[component]
pub fn SentimentResult() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let bindings = use_context::<DomBindings>().expect("DomBindings not found");
    let result = state.result;

    // Each render replaces the whole class list, dropping the previous sentiment
    let display_classes = move || {
        result.with(|r| {
            r.as_ref()
                .map(ResultView::display_classes)
                .unwrap_or_else(|| DISPLAY_BASE_CLASSES.to_string())
        })
    };

    view! {
        <div
            id=bindings.result
            class=move || {
                if result.with(Option::is_some) {
                    "mt-3".to_string()
                } else {
                    format!("mt-3 {}", bindings.hidden_class)
                }
            }
        >
            <div class=display_classes>
                <div class=bindings.result_emoji_class style="font-size: 3rem;">
                    {move || result.with(|r| r.as_ref().map(|v| v.glyph.clone()).unwrap_or_default())}
                </div>
                <div class=bindings.result_text_class>
                    {move || result.with(|r| r.as_ref().map(|v| v.text.clone()).unwrap_or_default())}
                </div>
            </div>
        </div>
    }
}
