//! Upload Form Component
//!
//! Sends the first picked file to the server as-is.

use leptos::*;

use feedback_pulse::{handlers, DomBindings};

use crate::api::BrowserApi;
use crate::state::PageState;

/// File upload form component
#[component]
pub fn UploadForm() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let bindings = use_context::<DomBindings>().expect("DomBindings not found");

    let file_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let file = file_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let mut surface = state;
        spawn_local(async move {
            handlers::upload_file(&BrowserApi::new(), &mut surface, file.as_ref()).await;
        });
    };

    view! {
        <form id=bindings.upload_form on:submit=on_submit class="mb-3">
            <div class="mb-3">
                <label for=bindings.upload_file class="form-label">"Feedback file"</label>
                <input type="file" id=bindings.upload_file node_ref=file_ref class="form-control" />
            </div>

            <button type="submit" class="btn btn-secondary">"Upload and Analyze"</button>
        </form>
    }
}
