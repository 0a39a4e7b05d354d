use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Raw field values as read from the generation form, before validation.
#[derive(Debug, Clone)]
pub struct GenerationForm {
    pub prompt: String,
    pub model: String,
    pub count: u32,
    pub size: String,
    pub quality: String,
}

impl GenerationForm {
    pub fn validate(self) -> Result<GenerationRequest> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(UiError::ValidationError("Please enter a prompt".into()));
        }

        Ok(GenerationRequest {
            prompt: prompt.to_string(),
            model: self.model,
            n: self.count.max(1),
            size: self.size,
            quality: self.quality,
        })
    }
}

/// JSON body posted to the generate endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub n: u32,
    pub size: String,
    pub quality: String,
}

/// One generated image as returned by the backend. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub image_path: String,
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub quality: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
}

/// Failure body shared by all three endpoints.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
