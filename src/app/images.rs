//! Image loading for `img` elements

use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Textures keyed by `src`, resolved under the assets directory.
/// A failed load is cached as `None` and never retried.
pub struct ImageCache {
    assets_dir: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ImageCache {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            textures: HashMap::new(),
        }
    }

    pub fn load(&mut self, ctx: &egui::Context, src: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(src) {
            return cached.clone();
        }

        let path = self.assets_dir.join(src);
        let texture = match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                Some(ctx.load_texture(
                    src,
                    egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                debug!(error = %e, path = %path.display(), "Image unavailable");
                None
            }
        };
        self.textures.insert(src.to_string(), texture.clone());
        texture
    }

    pub fn is_cached(&self, src: &str) -> bool {
        self.textures.contains_key(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_cached_as_absent() {
        let dir = tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(dir.path().to_path_buf());

        assert!(cache.load(&ctx, "pizzas/funghi.jpg").is_none());
        assert!(cache.is_cached("pizzas/funghi.jpg"));
    }

    #[test]
    fn existing_file_loads_texture() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pizzas")).unwrap();
        image::RgbaImage::from_pixel(4, 2, image::Rgba([200, 40, 40, 255]))
            .save(dir.path().join("pizzas/dot.png"))
            .unwrap();

        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(dir.path().to_path_buf());
        let texture = cache.load(&ctx, "pizzas/dot.png").unwrap();
        assert_eq!(texture.size(), [4, 2]);
    }
}
