//! App Root Component
//!
//! Single page with the feedback, upload and chart cards.

use leptos::*;

use feedback_pulse::handlers;

use crate::api::BrowserApi;
use crate::components::{FeedbackForm, SentimentChart, SentimentResult, UploadForm, UploadStatus};
use crate::state::{provide_page_state, PageState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_page_state();

    let state = use_context::<PageState>().expect("PageState not found");

    // Initial chart as soon as the canvas is in the document
    create_effect(move |loaded: Option<bool>| {
        if loaded == Some(true) {
            return true;
        }
        if state.chart_canvas.get().is_none() {
            return false;
        }

        let mut surface = state;
        spawn_local(async move {
            handlers::refresh_chart(&BrowserApi::new(), &mut surface).await;
        });
        true
    });

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Feedback Pulse"</h1>

            <div class="row g-4">
                <div class="col-lg-6">
                    <Card title="Share your feedback">
                        <FeedbackForm />
                        <SentimentResult />
                    </Card>

                    <Card title="Upload a feedback file">
                        <UploadForm />
                        <UploadStatus />
                    </Card>
                </div>

                <div class="col-lg-6">
                    <Card title="Overview">
                        <SentimentChart />
                    </Card>
                </div>
            </div>

            <Footer />
        </div>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card mb-4">
            <div class="card-body">
                <h5 class="card-title">{title}</h5>
                {children()}
            </div>
        </div>
    }
}

/// Footer showing when the chart was last redrawn
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    view! {
        <footer class="text-muted small text-end mt-2">
            {move || {
                state.chart_updated.get()
                    .map(|at| format!("Chart updated {}", at.format("%H:%M:%S")))
                    .unwrap_or_else(|| "Chart not loaded".to_string())
            }}
        </footer>
    }
}
