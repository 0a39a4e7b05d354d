use colored::*;
use imagegen_ui::{
    BackendConfig, Config, GenerationForm, HttpBackend, ImageCard, PageController, SelectedFile,
    SystemClock, UiSurface,
};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Prints the page state to the terminal: cards, banner, loading indicator.
struct TerminalSurface;

impl UiSurface for TerminalSurface {
    fn set_busy(&self, busy: bool) {
        if busy {
            println!("{}", "Generating...".yellow());
        }
    }

    fn show_banner(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }

    fn hide_banner(&self) {}

    fn prepend_card(&self, card: ImageCard) {
        println!("{}", "----------------------------------------".bright_black());
        println!("Image:   {}", card.image.image_path.cyan());
        println!("Prompt:  {}", card.image.prompt);
        println!("Model:   {}", card.image.model);
        println!("Size:    {}", card.image.size);
        println!("Quality: {}", card.image.quality);
    }

    fn hide_placeholder(&self) {}

    fn notify(&self, message: &str) {
        println!("{}", message.green().bold());
    }

    fn reload(&self) {
        log::info!("🔄 Session changed on the backend; refresh the page view to see it");
    }
}

/// Writes exported snapshots into the current directory.
struct DiskSaver;

impl imagegen_ui::FileSaver for DiskSaver {
    fn save(&self, file_name: &str, content: &[u8]) -> std::io::Result<()> {
        fs::write(file_name, content)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    imagegen_ui::logger::init_with_config(
        imagegen_ui::logger::LoggerConfig::development()
            .with_level(imagegen_ui::logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let mut config = Config::from_env();
    if let Some(backend) = config.backend.as_mut() {
        if backend.base_url.is_none() {
            log::warn!("No IMAGEGEN_BASE_URL set, using {}", DEFAULT_BASE_URL);
            backend.base_url = Some(DEFAULT_BASE_URL.to_string());
        }
    }

    log::info!("🖼️  Available models:");
    for model in &config.models {
        log::info!("  {}", model);
    }

    let backend_config = config
        .backend
        .clone()
        .unwrap_or_else(|| BackendConfig::new().with_base_url(DEFAULT_BASE_URL));

    log::info!("🔄 Connecting to backend at {:?}...", backend_config.base_url);
    let backend = match HttpBackend::from_config(backend_config) {
        Ok(backend) => {
            log::info!("✅ Backend client initialized successfully");
            backend
        }
        Err(e) => {
            log::error!("❌ Failed to initialize backend client: {}", e);
            return Err(e.into());
        }
    };

    let controller = PageController::new(
        Arc::new(backend),
        Arc::new(TerminalSurface),
        Arc::new(DiskSaver),
        Arc::new(SystemClock),
    );

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("generate") => {
            let form = GenerationForm {
                prompt: args[1..].join(" "),
                model: env::var("IMAGEGEN_MODEL")
                    .ok()
                    .or_else(|| config.models.first().cloned())
                    .unwrap_or_else(|| "dall-e-2".to_string()),
                count: env::var("IMAGEGEN_COUNT")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(1),
                size: env::var("IMAGEGEN_SIZE").unwrap_or_else(|_| "1024x1024".to_string()),
                quality: env::var("IMAGEGEN_QUALITY").unwrap_or_else(|_| "standard".to_string()),
            };
            controller.submit_generation(form).await;
        }
        Some("export") => {
            controller.export_session().await;
        }
        Some("import") => {
            let file = args.get(1).and_then(|path| {
                let content = fs::read(path).ok()?;
                let name = Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                Some(SelectedFile { name, content })
            });
            controller.import_session(file).await;
        }
        _ => {
            log::info!("Usage:");
            log::info!("  imagegen-ui generate <prompt>");
            log::info!("  imagegen-ui export");
            log::info!("  imagegen-ui import <file.json>");
        }
    }

    Ok(())
}
