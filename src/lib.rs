pub mod backend;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod ui;

pub use backend::{GenerationBackend, HttpBackend};
pub use config::{BackendConfig, Config};
pub use error::{Result, UiError};
pub use models::{
    GeneratedImage, GenerationForm, GenerationRequest, ImportOutcome, SelectedFile,
};
pub use ui::{Clock, ErrorNotifier, FileSaver, ImageCard, PageController, SystemClock, UiSurface};
