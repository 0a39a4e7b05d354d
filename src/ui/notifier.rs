use std::sync::Arc;
use std::time::Duration;

use crate::ui::traits::UiSurface;

/// Display window for the transient error banner.
pub const BANNER_DISPLAY_WINDOW: Duration = Duration::from_millis(5000);

/// Transient error banner. Every `show` schedules its own hide; a pending
/// hide timer is NOT cancelled when a newer message arrives, so the earliest
/// timer still hides the banner at its own expiry. Last message wins for
/// content.
#[derive(Clone)]
pub struct ErrorNotifier {
    surface: Arc<dyn UiSurface>,
}

impl ErrorNotifier {
    pub fn new(surface: Arc<dyn UiSurface>) -> Self {
        Self { surface }
    }

    pub fn show(&self, message: &str) {
        log::error!("{}", message);
        self.surface.show_banner(message);

        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            tokio::time::sleep(BANNER_DISPLAY_WINDOW).await;
            surface.hide_banner();
        });
    }
}
