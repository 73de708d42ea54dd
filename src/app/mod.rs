//! App module - contains the window state and the mounted document

pub mod images;
pub mod views;

use crate::constants::MOUNT_ID;
use crate::document::Document;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use images::ImageCache;
use tracing::info;

pub use views::render_node;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    document: Document,
    images: ImageCache,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, document: Document, settings: &Settings) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            document,
            images: ImageCache::new(settings.assets_dir_or_default()),
        }
    }

    /// Paint whatever tree is attached to the mount point
    pub fn render_document(&mut self, ui: &mut egui::Ui) {
        let Some(tree) = self
            .document
            .element(MOUNT_ID)
            .and_then(|element| element.content())
        else {
            return;
        };
        render_node(ui, tree, &mut self.images);
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(theme::page_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_document(ui));
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}
