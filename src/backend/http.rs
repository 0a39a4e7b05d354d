use std::time::Duration;

use crate::{
    backend::GenerationBackend,
    config::BackendConfig,
    error::{Result, UiError},
    models::{ErrorBody, GenerateResponse, GeneratedImage, GenerationRequest, ImportOutcome},
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

#[derive(Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn from_config(config: BackendConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .ok_or_else(|| UiError::NetworkError("Backend base URL is required".into()))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UiError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedImage>> {
        log::info!(
            "Requesting {} image(s) from model {}",
            request.n,
            request.model
        );

        let response = self
            .client
            .post(format!("{}/generate_image", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| generating_failed(&e))?;

        let status = response.status();
        // The body is JSON on both the success and the failure path.
        let payload: serde_json::Value =
            response.json().await.map_err(|e| generating_failed(&e))?;

        if status.is_success() {
            let body: GenerateResponse =
                serde_json::from_value(payload).map_err(|e| generating_failed(&e))?;
            Ok(body.images)
        } else {
            let body: ErrorBody = serde_json::from_value(payload).unwrap_or(ErrorBody { error: None });
            Err(UiError::BackendError(server_message(
                body,
                "Failed to generate images",
            )))
        }
    }

    async fn export_session(&self) -> Result<Vec<u8>> {
        log::info!("Exporting session snapshot");

        let response = self
            .client
            .get(format!("{}/export_session", self.base_url))
            .send()
            .await
            .map_err(|e| exporting_failed(&e))?;

        if response.status().is_success() {
            let bytes = response.bytes().await.map_err(|e| exporting_failed(&e))?;
            Ok(bytes.to_vec())
        } else {
            let body: ErrorBody = response.json().await.map_err(|e| exporting_failed(&e))?;
            Err(UiError::ExportError(server_message(
                body,
                "Failed to export session",
            )))
        }
    }

    async fn import_session(&self, file_name: &str, content: Vec<u8>) -> Result<ImportOutcome> {
        log::info!("Importing session file: {}", file_name);

        let part = Part::bytes(content).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/import_session", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| importing_failed(&e))?;

        let status = response.status();
        let payload: serde_json::Value =
            response.json().await.map_err(|e| importing_failed(&e))?;

        if status.is_success() {
            serde_json::from_value(payload).map_err(|e| importing_failed(&e))
        } else {
            let body: ErrorBody = serde_json::from_value(payload).unwrap_or(ErrorBody { error: None });
            Err(UiError::ImportError(server_message(
                body,
                "Failed to import session",
            )))
        }
    }
}

fn server_message(body: ErrorBody, fallback: &str) -> String {
    body.error
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn generating_failed(source: &dyn std::fmt::Display) -> UiError {
    UiError::NetworkError(format!(
        "An error occurred while generating images: {}",
        source
    ))
}

fn exporting_failed(source: &dyn std::fmt::Display) -> UiError {
    UiError::NetworkError(format!(
        "An error occurred while exporting session: {}",
        source
    ))
}

fn importing_failed(source: &dyn std::fmt::Display) -> UiError {
    UiError::NetworkError(format!(
        "An error occurred while importing session: {}",
        source
    ))
}
