pub mod notifier;
pub mod renderer;
pub mod traits;

#[cfg(test)]
pub(crate) mod testkit;

use std::sync::Arc;

use crate::backend::GenerationBackend;
use crate::error::{Result, UiError};
use crate::models::{GenerationForm, GenerationRequest, SelectedFile};

pub use notifier::{ErrorNotifier, BANNER_DISPLAY_WINDOW};
pub use renderer::ImageCard;
pub use traits::{Clock, FileSaver, SystemClock, UiSurface};

/// Wires the generation form, the session transfer controls and the results
/// container to the backend. One handler per user action; every failure ends
/// in the error banner and every handler leaves the page idle again.
pub struct PageController {
    backend: Arc<dyn GenerationBackend>,
    surface: Arc<dyn UiSurface>,
    files: Arc<dyn FileSaver>,
    clock: Arc<dyn Clock>,
    notifier: ErrorNotifier,
}

impl PageController {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        surface: Arc<dyn UiSurface>,
        files: Arc<dyn FileSaver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let notifier = ErrorNotifier::new(Arc::clone(&surface));
        Self {
            backend,
            surface,
            files,
            clock,
            notifier,
        }
    }

    /// Submit handler. Validation failures never reach the backend; the busy
    /// state is restored on every terminal path. Concurrent submits are not
    /// deduplicated — the disabled control is the only guard.
    pub async fn submit_generation(&self, form: GenerationForm) {
        if let Err(err) = self.try_submit(form).await {
            self.notifier.show(&err.to_string());
        }
    }

    async fn try_submit(&self, form: GenerationForm) -> Result<()> {
        let request = form.validate()?;

        self.surface.set_busy(true);
        let outcome = self.run_generation(request).await;
        self.surface.set_busy(false);
        outcome
    }

    async fn run_generation(&self, request: GenerationRequest) -> Result<()> {
        let images = self.backend.generate(request).await?;
        if images.is_empty() {
            return Err(UiError::EmptyResultError);
        }

        renderer::render_batch(self.surface.as_ref(), &images);
        Ok(())
    }

    /// Export handler: fetch the snapshot and hand it to the file saver under
    /// a timestamped name.
    pub async fn export_session(&self) {
        if let Err(err) = self.try_export().await {
            self.notifier.show(&err.to_string());
        }
    }

    async fn try_export(&self) -> Result<()> {
        let payload = self.backend.export_session().await?;

        let file_name = format!(
            "image_history_{}.json",
            self.clock.now().format("%Y-%m-%dT%H-%M-%S")
        );
        self.files.save(&file_name, &payload).map_err(|e| {
            UiError::NetworkError(format!("An error occurred while exporting session: {}", e))
        })?;

        log::info!("Session exported to {}", file_name);
        Ok(())
    }

    /// Import handler: requires a selected file, acknowledges the server
    /// message and reloads the page on success.
    pub async fn import_session(&self, file: Option<SelectedFile>) {
        if let Err(err) = self.try_import(file).await {
            self.notifier.show(&err.to_string());
        }
    }

    async fn try_import(&self, file: Option<SelectedFile>) -> Result<()> {
        let file = file.ok_or_else(|| {
            UiError::ValidationError("Please select a JSON file to import".into())
        })?;

        let outcome = self.backend.import_session(&file.name, file.content).await?;
        log::info!("Imported {} image(s)", outcome.imported_count);

        self.surface.notify(&outcome.message);
        self.surface.reload();
        Ok(())
    }
}
