use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::GenerationBackend;
use crate::error::Result;
use crate::models::{GeneratedImage, GenerationRequest, ImportOutcome};
use crate::ui::renderer::ImageCard;
use crate::ui::traits::{Clock, FileSaver, UiSurface};

pub fn image(path: &str) -> GeneratedImage {
    GeneratedImage {
        image_path: path.to_string(),
        prompt: "a red fox".to_string(),
        model: "dall-e-3".to_string(),
        size: "1024x1024".to_string(),
        quality: "standard".to_string(),
    }
}

#[derive(Default)]
pub struct SurfaceState {
    pub busy: bool,
    pub busy_transitions: Vec<bool>,
    pub banner: Option<String>,
    pub banner_visible: bool,
    pub cards: Vec<ImageCard>,
    pub placeholder_hidden: bool,
    pub notices: Vec<String>,
    pub reloads: usize,
}

/// Records every surface mutation; `cards` keeps container order, front first.
#[derive(Default)]
pub struct RecordingSurface {
    pub state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    pub fn banner_visible(&self) -> bool {
        self.state.lock().unwrap().banner_visible
    }

    pub fn banner_text(&self) -> Option<String> {
        self.state.lock().unwrap().banner.clone()
    }

    pub fn busy_transitions(&self) -> Vec<bool> {
        self.state.lock().unwrap().busy_transitions.clone()
    }

    pub fn card_paths(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .cards
            .iter()
            .map(|card| card.image.image_path.clone())
            .collect()
    }

    pub fn placeholder_hidden(&self) -> bool {
        self.state.lock().unwrap().placeholder_hidden
    }

    pub fn notices(&self) -> Vec<String> {
        self.state.lock().unwrap().notices.clone()
    }

    pub fn reloads(&self) -> usize {
        self.state.lock().unwrap().reloads
    }
}

impl UiSurface for RecordingSurface {
    fn set_busy(&self, busy: bool) {
        let mut state = self.state.lock().unwrap();
        state.busy = busy;
        state.busy_transitions.push(busy);
    }

    fn show_banner(&self, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.banner = Some(message.to_string());
        state.banner_visible = true;
    }

    fn hide_banner(&self) {
        self.state.lock().unwrap().banner_visible = false;
    }

    fn prepend_card(&self, card: ImageCard) {
        self.state.lock().unwrap().cards.insert(0, card);
    }

    fn hide_placeholder(&self) {
        self.state.lock().unwrap().placeholder_hidden = true;
    }

    fn notify(&self, message: &str) {
        self.state.lock().unwrap().notices.push(message.to_string());
    }

    fn reload(&self) {
        self.state.lock().unwrap().reloads += 1;
    }
}

/// Scripted backend; each result is consumed by the first matching call.
/// When wired with a surface it snapshots the busy flag at call time.
#[derive(Default)]
pub struct FakeBackend {
    pub observe: Option<Arc<RecordingSurface>>,
    pub generate_result: Mutex<Option<Result<Vec<GeneratedImage>>>>,
    pub export_result: Mutex<Option<Result<Vec<u8>>>>,
    pub import_result: Mutex<Option<Result<ImportOutcome>>>,
    pub generate_calls: Mutex<usize>,
    pub import_calls: Mutex<usize>,
    pub busy_during_generate: Mutex<Option<bool>>,
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(&self, _request: GenerationRequest) -> Result<Vec<GeneratedImage>> {
        *self.generate_calls.lock().unwrap() += 1;
        if let Some(surface) = &self.observe {
            *self.busy_during_generate.lock().unwrap() =
                Some(surface.state.lock().unwrap().busy);
        }
        self.generate_result
            .lock()
            .unwrap()
            .take()
            .expect("unexpected generate call")
    }

    async fn export_session(&self) -> Result<Vec<u8>> {
        self.export_result
            .lock()
            .unwrap()
            .take()
            .expect("unexpected export call")
    }

    async fn import_session(&self, _file_name: &str, _content: Vec<u8>) -> Result<ImportOutcome> {
        *self.import_calls.lock().unwrap() += 1;
        self.import_result
            .lock()
            .unwrap()
            .take()
            .expect("unexpected import call")
    }
}

/// Collects saved files in memory.
#[derive(Default)]
pub struct MemorySaver {
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySaver {
    pub fn file_names(&self) -> Vec<String> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl FileSaver for MemorySaver {
    fn save(&self, file_name: &str, content: &[u8]) -> std::io::Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), content.to_vec()));
        Ok(())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
