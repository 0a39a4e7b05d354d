pub mod http;

use crate::error::Result;
use crate::models::{GeneratedImage, GenerationRequest, ImportOutcome};
use async_trait::async_trait;

pub use http::HttpBackend;

/// Port to the image-generation service. The page controller only ever talks
/// to the backend through this trait, so tests can substitute a fake.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// POST the generation request; an empty list is a valid response.
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedImage>>;

    /// Fetch the session snapshot as an opaque payload.
    async fn export_session(&self) -> Result<Vec<u8>>;

    /// Upload a previously exported snapshot.
    async fn import_session(&self, file_name: &str, content: Vec<u8>) -> Result<ImportOutcome>;
}
