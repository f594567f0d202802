//! Upload Status Component

use leptos::*;

use feedback_pulse::DomBindings;

use crate::state::PageState;

/// Banner container for upload outcomes. Messages are text nodes, so
/// server-supplied strings never become markup.
#[component]
pub fn UploadStatus() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let bindings = use_context::<DomBindings>().expect("DomBindings not found");

    view! {
        <div id=bindings.upload_result>
            {move || {
                state.upload_banner.get().map(|banner| {
                    let class = banner.css_class();
                    view! { <div class=class role="alert">{banner.message}</div> }
                })
            }}
        </div>
    }
}
