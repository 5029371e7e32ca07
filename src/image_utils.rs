use eframe::egui;
use image::DynamicImage;

pub fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}

/// Decodes picked bytes for display. `None` means the card shows a
/// placeholder instead.
pub fn decode_preview(bytes: &[u8]) -> Option<egui::ColorImage> {
    match image::load_from_memory(bytes) {
        Ok(image) => Some(to_color_image(&image)),
        Err(err) => {
            tracing::warn!("Unable to decode image ({} bytes): {err}", bytes.len());
            None
        }
    }
}
