//! Feedback Pulse Page
//!
//! Browser front end for the feedback-sentiment server, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Feedback form with an emoji sentiment result
//! - Feedback file upload with a status banner
//! - Sentiment distribution pie chart, redrawn after every success
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Form events run the handler cycles from `feedback-pulse`
//! against a gloo-net client; the page state is the surface they render to.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
