use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::GeneratedImage;
use crate::ui::traits::UiSurface;

/// Rendered unit for one generated image: the source metadata plus the
/// escaped markup snippet a surface can drop into its results container.
#[derive(Debug, Clone)]
pub struct ImageCard {
    pub image: GeneratedImage,
    pub markup: String,
}

impl ImageCard {
    pub fn new(image: GeneratedImage) -> Self {
        let markup = build_card_markup(&image);
        Self { image, markup }
    }
}

/// Prepend one card per entry. Within a batch the last entry ends up
/// frontmost, and a new batch lands above all pre-existing cards.
pub fn render_batch(surface: &dyn UiSurface, images: &[GeneratedImage]) {
    if images.is_empty() {
        return;
    }

    surface.hide_placeholder();
    for image in images {
        surface.prepend_card(ImageCard::new(image.clone()));
    }

    log::debug!("Rendered {} image card(s)", images.len());
}

fn build_card_markup(image: &GeneratedImage) -> String {
    format!(
        "<div class=\"image-card\"><img src=\"{}\" alt=\"{}\"><div class=\"image-info\"><p><strong>Prompt:</strong> {}</p><p><strong>Model:</strong> {}</p><p><strong>Size:</strong> {}</p><p><strong>Quality:</strong> {}</p></div></div>",
        encode_double_quoted_attribute(&image.image_path),
        encode_double_quoted_attribute(&image.prompt),
        encode_text(&image.prompt),
        encode_text(&image.model),
        encode_text(&image.size),
        encode_text(&image.quality),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testkit::{image, RecordingSurface};

    #[test]
    fn batch_renders_newest_first() {
        let surface = RecordingSurface::default();
        surface.prepend_card(ImageCard::new(image("/static/old.png")));

        render_batch(&surface, &[image("/static/a.png"), image("/static/b.png")]);

        assert_eq!(
            surface.card_paths(),
            vec!["/static/b.png", "/static/a.png", "/static/old.png"]
        );
    }

    #[test]
    fn batch_hides_placeholder() {
        let surface = RecordingSurface::default();
        render_batch(&surface, &[image("/static/a.png")]);
        assert!(surface.placeholder_hidden());
    }

    #[test]
    fn empty_batch_leaves_placeholder_alone() {
        let surface = RecordingSurface::default();
        render_batch(&surface, &[]);
        assert!(!surface.placeholder_hidden());
        assert!(surface.card_paths().is_empty());
    }

    #[test]
    fn card_markup_escapes_prompt() {
        let mut img = image("/static/a.png");
        img.prompt = "a <script>\"fox\"</script>".to_string();

        let card = ImageCard::new(img);
        assert!(card.markup.contains("<strong>Prompt:</strong> a &lt;script&gt;\"fox\"&lt;/script&gt;"));
        assert!(card.markup.contains("&quot;fox&quot;"));
    }
}
