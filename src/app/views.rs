//! Painting the mounted element tree

use super::images::ImageCache;
use crate::dom::{Element, Node, Tag};
use crate::theme;
use eframe::egui;

/// Paint a node and its descendants top to bottom
pub fn render_node(ui: &mut egui::Ui, node: &Node, images: &mut ImageCache) {
    match node {
        Node::Text(text) => {
            ui.label(text.as_str());
        }
        Node::Element(element) => render_element(ui, element, images),
    }
}

fn render_element(ui: &mut egui::Ui, element: &Element, images: &mut ImageCache) {
    match element.tag {
        Tag::Div => {
            ui.vertical(|ui| {
                // Adjacent text children read as one line, like inline text
                let mut pending = String::new();
                for child in &element.children {
                    match child {
                        Node::Text(text) => pending.push_str(text),
                        Node::Element(_) => {
                            flush_text(ui, &mut pending);
                            render_node(ui, child, images);
                        }
                    }
                }
                flush_text(ui, &mut pending);
            });
        }
        Tag::H1 => heading(ui, element, theme::FONT_TITLE),
        Tag::H2 => heading(ui, element, theme::FONT_HEADING),
        Tag::Img => image(ui, element, images),
    }
}

fn flush_text(ui: &mut egui::Ui, pending: &mut String) {
    if !pending.is_empty() {
        ui.label(std::mem::take(pending));
    }
}

fn heading(ui: &mut egui::Ui, element: &Element, size: f32) {
    ui.label(
        egui::RichText::new(element.text_content())
            .size(size)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
}

fn image(ui: &mut egui::Ui, element: &Element, images: &mut ImageCache) {
    let alt = element.attribute("alt").unwrap_or_default();
    let texture = element
        .attribute("src")
        .and_then(|src| images.load(ui.ctx(), src));

    match texture {
        Some(texture) => {
            ui.add(
                egui::Image::new(&texture)
                    .max_width(theme::IMAGE_MAX_WIDTH)
                    .corner_radius(theme::RADIUS_LARGE),
            )
            .on_hover_text(alt);
        }
        None => {
            let (w, h) = theme::IMAGE_PLACEHOLDER;
            theme::placeholder_frame().show(ui, |ui| {
                ui.set_min_size(egui::vec2(w, h));
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::IMAGE_BROKEN,
                            alt
                        ))
                        .color(theme::TEXT_DIM),
                    );
                });
            });
        }
    }
}
