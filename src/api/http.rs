//! Native HTTP client for the sentiment server

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

use super::{
    decode_response, ApiError, FeedbackApi, ANALYZE_PATH, STATS_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use crate::config::ServerConfig;
use crate::model::{AnalysisRequest, AnalysisResult, StatsResponse, UploadResult};

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk. Contents are sent as-is; the server validates.
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }
}

/// Sentiment server client over reqwest
pub struct HttpFeedbackApi {
    client: Client,
    base_url: String,
}

impl HttpFeedbackApi {
    /// Create a client for the configured server
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request once and classify whatever comes back
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Transport("Request timeout".to_string())
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Received response");
        decode_response(status, &body)
    }
}

#[async_trait(?Send)]
impl FeedbackApi for HttpFeedbackApi {
    type File = UploadFile;

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        self.send(self.client.post(self.url(ANALYZE_PATH)).json(request))
            .await
    }

    async fn upload(&self, file: Option<&UploadFile>) -> Result<UploadResult, ApiError> {
        let mut form = Form::new();
        if let Some(file) = file {
            let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            form = form.part(UPLOAD_FIELD, part);
        }

        self.send(self.client.post(self.url(UPLOAD_PATH)).multipart(form))
            .await
    }

    async fn stats(&self) -> Result<StatsResponse, ApiError> {
        self.send(self.client.get(self.url(STATS_PATH))).await
    }
}
