//! Placeholder thumbnail texture cache.
//!
//! Placeholder rasters are generated once per project and uploaded as
//! textures; regenerating them every frame would redo the whole gradient
//! and hex grid pass.

use std::collections::HashMap;

use orgview::{render_placeholder, PlaceholderSpec};

/// Thumbnail size used by the project cards (16:9, matching the site's
/// 640×360 placeholders at half resolution).
const THUMB_WIDTH: u32 = 320;
const THUMB_HEIGHT: u32 = 180;

/// Caches one placeholder texture per catalog index.
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<usize, egui::TextureHandle>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the thumbnail texture for a project, generating and
    /// uploading it on first use. The catalog index doubles as the
    /// placeholder seed, so every card gets its own tint.
    pub fn get_or_create(
        &mut self,
        ctx: &egui::Context,
        project_index: usize,
    ) -> egui::TextureHandle {
        if let Some(handle) = self.textures.get(&project_index) {
            return handle.clone();
        }

        let spec = PlaceholderSpec {
            width: THUMB_WIDTH,
            height: THUMB_HEIGHT,
            seed: project_index as u64,
        };
        let img = render_placeholder(&spec);
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [img.width() as usize, img.height() as usize],
            img.as_raw(),
        );
        let handle = ctx.load_texture(
            format!("placeholder_{}", project_index),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(project_index, handle.clone());
        handle
    }
}
