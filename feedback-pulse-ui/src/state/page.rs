//! Page State
//!
//! Reactive state written by the handler cycles, using Leptos signals.

use leptos::*;
use std::fmt;

use feedback_pulse::{DomBindings, PieChart, ResultView, Surface, SurfaceError, UploadBanner};

use crate::components::chart::draw_pie;

/// Everything the handler cycles write to, provided to all components.
///
/// Signals and node refs are handles, so copies of this struct all point at
/// the same page; every spawned handler gets its own copy.
#[derive(Clone, Copy)]
pub struct PageState {
    /// Last analysis shown; `None` keeps the result container hidden
    pub result: RwSignal<Option<ResultView>>,
    /// Banner in the upload container
    pub upload_banner: RwSignal<Option<UploadBanner>>,
    /// Chart currently drawn on the canvas
    pub chart: RwSignal<Option<PieChart>>,
    /// When the canvas was last redrawn
    pub chart_updated: RwSignal<Option<chrono::DateTime<chrono::Local>>>,
    /// Canvas the pie is drawn on
    pub chart_canvas: NodeRef<html::Canvas>,
}

/// Provide page state and element bindings to the component tree
pub fn provide_page_state() {
    let state = PageState {
        result: create_rw_signal(None),
        upload_banner: create_rw_signal(None),
        chart: create_rw_signal(None),
        chart_updated: create_rw_signal(None),
        chart_canvas: create_node_ref::<html::Canvas>(),
    };

    provide_context(state);
    provide_context(DomBindings::standard());
}

impl Surface for PageState {
    fn show_result(&mut self, view: &ResultView) {
        self.result.set(Some(view.clone()));
    }

    fn show_upload_banner(&mut self, banner: &UploadBanner) {
        self.upload_banner.set(Some(banner.clone()));
    }

    fn draw_chart(&mut self, chart: &PieChart) -> Result<(), SurfaceError> {
        let canvas = self
            .chart_canvas
            .get_untracked()
            .ok_or_else(|| SurfaceError::Render("chart canvas is not mounted".to_string()))?;

        draw_pie(&canvas, chart)?;

        // Legend and caption follow only a successful draw
        self.chart.set(Some(chart.clone()));
        self.chart_updated.set(Some(chrono::Local::now()));
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn log_error(&mut self, context: &str, error: &dyn fmt::Display) {
        web_sys::console::error_1(&format!("{}: {}", context, error).into());
    }
}
