#![windows_subsystem = "windows"]
//! Pizza Menu - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use eframe::egui;
use pizza_menu::app::App;
use pizza_menu::constants::*;
use pizza_menu::document::Document;
use pizza_menu::{catalog, entry, settings, utils};
use tracing::{debug, error, info};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "pizza-menu.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pizza_menu=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Pizza Menu starting");
    debug!(
        items = catalog::PIZZA_DATA.len(),
        catalog = %serde_json::to_string(catalog::PIZZA_DATA).unwrap_or_default(),
        "Catalog loaded"
    );

    let settings = settings::Settings::load(&data_dir);

    let mut document = Document::with_mount_point(MOUNT_ID);
    if let Err(e) = entry::mount(&mut document) {
        error!(error = %e, "Failed to mount root view");
        panic!("Failed to mount root view: {}", e);
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.window_w, settings.window_h])
        .with_title(APP_NAME);

    if let Some((rgba, width, height)) = utils::rasterize_icon(64) {
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, document, &settings)))),
    )
}
