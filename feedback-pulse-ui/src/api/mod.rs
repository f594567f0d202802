//! Sentiment Server Access
//!
//! gloo-net implementation of the `FeedbackApi` seam.

mod client;

pub use client::BrowserApi;
