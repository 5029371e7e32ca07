use std::collections::HashMap;

use eframe::egui;

use crate::{
    gallery::{EntryId, ImageEntry},
    image_utils::decode_preview,
};

enum Preview {
    Ready(egui::TextureHandle),
    Undecodable,
}

/// Decoded texture per gallery entry. Bytes are decoded the first time an
/// entry is drawn and dropped together with the entry.
#[derive(Default)]
pub struct TextureStore {
    previews: HashMap<EntryId, Preview>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the bytes do not decode; callers draw a placeholder.
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        entry: &ImageEntry,
    ) -> Option<&egui::TextureHandle> {
        let preview = self.previews.entry(entry.id).or_insert_with(|| {
            match decode_preview(&entry.bytes) {
                Some(color_image) => Preview::Ready(ctx.load_texture(
                    format!("gallery-{}", entry.display_name),
                    color_image,
                    egui::TextureOptions::LINEAR,
                )),
                None => Preview::Undecodable,
            }
        });
        match &*preview {
            Preview::Ready(texture) => Some(texture),
            Preview::Undecodable => None,
        }
    }

    /// Drops previews whose entry is no longer in `entries`.
    pub fn retain(&mut self, entries: &[ImageEntry]) {
        self.previews
            .retain(|id, _| entries.iter().any(|entry| entry.id == *id));
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.previews.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}
