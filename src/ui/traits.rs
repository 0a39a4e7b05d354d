use chrono::{DateTime, Utc};

use crate::ui::renderer::ImageCard;

/// Stand-in for the page's element handles: the generate control, the loading
/// indicator, the banner region, the results container and its placeholder.
/// Implementations mutate their own presentation state; the controller never
/// touches anything else.
pub trait UiSurface: Send + Sync {
    /// Disable the generate control, swap its label and reveal the loading
    /// indicator (`true`), or restore all three (`false`).
    fn set_busy(&self, busy: bool);

    fn show_banner(&self, message: &str);

    fn hide_banner(&self);

    /// Insert a card at the front of the results container.
    fn prepend_card(&self, card: ImageCard);

    /// Hide the static "no images yet" placeholder.
    fn hide_placeholder(&self);

    /// Blocking acknowledgment, used on import success.
    fn notify(&self, message: &str);

    /// Reload the page so the backend re-renders existing + imported state.
    fn reload(&self);
}

/// File-download capability: what the browser does with a Blob, an object URL
/// and a synthetic anchor click.
pub trait FileSaver: Send + Sync {
    fn save(&self, file_name: &str, content: &[u8]) -> std::io::Result<()>;
}

/// Clock port so the export filename is deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
