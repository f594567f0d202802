//! Chart Component
//!
//! Sentiment distribution pie using HTML5 Canvas.

use std::f64::consts::FRAC_PI_2;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use feedback_pulse::render::CHART_HEIGHT;
use feedback_pulse::{DomBindings, PieChart, SurfaceError};

use crate::state::PageState;

const CANVAS_WIDTH: u32 = 600;
const TITLE_BAND: f64 = 36.0;

/// Pie chart component
#[component]
pub fn SentimentChart() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let bindings = use_context::<DomBindings>().expect("DomBindings not found");
    let chart = state.chart;

    view! {
        <div id=bindings.chart class="text-center">
            <canvas
                node_ref=state.chart_canvas
                width=CANVAS_WIDTH.to_string()
                height=CHART_HEIGHT.to_string()
                class="mw-100"
            />

            <ChartLegend />

            <p class="text-muted small mt-2">
                {move || chart.with(|c| c.as_ref().map(PieChart::caption).unwrap_or_default())}
            </p>
        </div>
    }
}

/// Horizontal legend under the pie
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let chart = state.chart;

    view! {
        <div class="d-flex justify-content-center flex-wrap gap-3 mt-3">
            {move || {
                chart.with(|c| {
                    c.iter()
                        .flat_map(|c| c.slices.iter())
                        .map(|slice| {
                            let swatch = format!(
                                "display:inline-block;width:12px;height:12px;border-radius:50%;background-color:{}",
                                slice.color
                            );
                            let text = format!("{} ({})", slice.label, slice.value);
                            view! {
                                <div class="d-flex align-items-center gap-1">
                                    <span style=swatch />
                                    <span class="small">{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}

/// Redraw `chart` onto `canvas`, replacing whatever was there.
///
/// Errors only before the canvas is touched, so a failed draw leaves the
/// previous chart in place.
pub fn draw_pie(canvas: &HtmlCanvasElement, chart: &PieChart) -> Result<(), SurfaceError> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| SurfaceError::Render("canvas context unavailable".to_string()))?
        .ok_or_else(|| SurfaceError::Render("canvas has no 2d context".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::Render("unexpected canvas context type".to_string()))?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let cx = width / 2.0;
    let cy = TITLE_BAND + (height - TITLE_BAND) / 2.0;
    let radius = ((height - TITLE_BAND).min(width) / 2.0 - 10.0).max(0.0);

    // Nothing below can fail: a non-negative radius is the only arc precondition
    ctx.clear_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#212529".into());
    ctx.set_font("bold 18px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&chart.title, width / 2.0, 24.0);

    if chart.is_empty() {
        ctx.set_fill_style(&"#6c757d".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No feedback yet", cx, cy);
        return Ok(());
    }

    let fractions = chart.fractions();
    let arcs = chart.arcs();

    for (slice, arc) in chart.slices.iter().zip(&arcs) {
        if arc.end <= arc.start {
            continue;
        }

        // Canvas angles start at 3 o'clock
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, arc.start - FRAC_PI_2, arc.end - FRAC_PI_2);
        ctx.close_path();

        ctx.set_fill_style(&slice.color.into());
        ctx.fill();
        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    // Percentages
    ctx.set_fill_style(&"#ffffff".into());
    ctx.set_font("bold 13px sans-serif");
    for (arc, fraction) in arcs.iter().zip(fractions) {
        if fraction < 0.04 {
            continue;
        }
        let (x, y) = label_anchor(cx, cy, radius * 0.65, (arc.start + arc.end) / 2.0);
        let _ = ctx.fill_text(&format!("{:.0}%", fraction * 100.0), x, y);
    }

    Ok(())
}

/// Canvas point at `distance` from the center, `angle` radians clockwise
/// from 12 o'clock
fn label_anchor(cx: f64, cy: f64, distance: f64, angle: f64) -> (f64, f64) {
    (cx + distance * angle.sin(), cy - distance * angle.cos())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use feedback_pulse::StatsResponse;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        let canvas = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(200);
        canvas.set_height(200);
        canvas
    }

    fn chart(entries: &[(&str, u64)]) -> PieChart {
        PieChart::from_stats(&StatsResponse {
            sentiment_distribution: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            total: None,
            average_score: None,
        })
    }

    fn pixel(canvas: &HtmlCanvasElement, x: f64, y: f64) -> Vec<u8> {
        let ctx = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into::<CanvasRenderingContext2d>()
            .unwrap();
        ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().to_vec()
    }

    #[wasm_bindgen_test]
    fn test_single_slice_fills_the_pie() {
        let canvas = canvas();
        draw_pie(&canvas, &chart(&[("positive", 3)])).unwrap();

        // Center (100, 118), radius 72; away from the seam stroke and the label
        assert_eq!(pixel(&canvas, 120.0, 90.0), vec![0x20, 0xc9, 0x97, 0xff]);
    }

    #[wasm_bindgen_test]
    fn test_redraw_replaces_previous_chart() {
        let canvas = canvas();
        draw_pie(&canvas, &chart(&[("positive", 3)])).unwrap();
        draw_pie(&canvas, &chart(&[("negative", 1)])).unwrap();

        assert_eq!(pixel(&canvas, 120.0, 90.0), vec![0xdc, 0x35, 0x45, 0xff]);
    }

    #[wasm_bindgen_test]
    fn test_canvas_without_2d_context_is_an_error() {
        let canvas = canvas();
        canvas.get_context("bitmaprenderer").unwrap();

        let err = draw_pie(&canvas, &chart(&[("positive", 1)])).unwrap_err();
        assert!(matches!(err, SurfaceError::Render(_)));
    }
}
