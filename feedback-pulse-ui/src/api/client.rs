//! HTTP API Client
//!
//! Talks to the sentiment server that served the page.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use feedback_pulse::api::{
    decode_response, ApiError, FeedbackApi, ANALYZE_PATH, STATS_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use feedback_pulse::{AnalysisRequest, AnalysisResult, StatsResponse, UploadResult};

/// Local storage key overriding the server location
const API_URL_KEY: &str = "feedback_pulse_api_url";

/// Get the API base URL from local storage, or the page's own origin
pub fn api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Sentiment server client over gloo-net
#[derive(Debug, Clone)]
pub struct BrowserApi {
    base: String,
}

impl BrowserApi {
    pub fn new() -> Self {
        Self { base: api_base() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for BrowserApi {
    fn default() -> Self {
        Self::new()
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Network error: {}", e))
}

fn build_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Request build error: {}", e))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(format!("Browser error: {:?}", value))
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    decode_response(status, &body)
}

#[async_trait(?Send)]
impl FeedbackApi for BrowserApi {
    type File = web_sys::File;

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let response = Request::post(&self.url(ANALYZE_PATH))
            .json(request)
            .map_err(build_error)?
            .send()
            .await
            .map_err(network_error)?;

        read(response).await
    }

    async fn upload(&self, file: Option<&web_sys::File>) -> Result<UploadResult, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        if let Some(file) = file {
            form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
                .map_err(js_error)?;
        }

        // The browser sets the multipart boundary itself
        let response = Request::post(&self.url(UPLOAD_PATH))
            .body(form)
            .map_err(build_error)?
            .send()
            .await
            .map_err(network_error)?;

        read(response).await
    }

    async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let response = Request::get(&self.url(STATS_PATH))
            .send()
            .await
            .map_err(network_error)?;

        read(response).await
    }
}
