//! Feedback Form Component
//!
//! Free-text feedback plus department, analyzed on submit.

use leptos::*;

use feedback_pulse::{handlers, AnalysisRequest, DomBindings};

use crate::api::BrowserApi;
use crate::state::PageState;

const DEPARTMENTS: [&str; 6] = [
    "General",
    "Customer Service",
    "Sales",
    "Engineering",
    "Human Resources",
    "Operations",
];

/// Feedback form component
#[component]
pub fn FeedbackForm() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let bindings = use_context::<DomBindings>().expect("DomBindings not found");

    let text_ref = create_node_ref::<html::Textarea>();
    let department_ref = create_node_ref::<html::Select>();

    // The submit button stays enabled; every submit is its own request
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = text_ref.get().map(|el| el.value()).unwrap_or_default();
        let department = department_ref.get().map(|el| el.value()).unwrap_or_default();
        let request = AnalysisRequest::new(text, department);

        let mut surface = state;
        spawn_local(async move {
            handlers::submit_feedback(&BrowserApi::new(), &mut surface, &request).await;
        });
    };

    view! {
        <form id=bindings.feedback_form on:submit=on_submit class="mb-3">
            <div class="mb-3">
                <label for=bindings.feedback_text class="form-label">"Your feedback"</label>
                <textarea
                    id=bindings.feedback_text
                    node_ref=text_ref
                    rows="4"
                    required=true
                    class="form-control"
                    placeholder="Tell us what you think..."
                />
            </div>

            <div class="mb-3">
                <label for=bindings.department class="form-label">"Department"</label>
                <select id=bindings.department node_ref=department_ref class="form-select">
                    {DEPARTMENTS
                        .into_iter()
                        .map(|d| view! { <option value=d>{d}</option> })
                        .collect_view()}
                </select>
            </div>

            <button type="submit" class="btn btn-primary">"Analyze Sentiment"</button>
        </form>
    }
}
