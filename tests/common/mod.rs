#![allow(dead_code)]

use std::{cell::RefCell, io::Cursor, path::Path, rc::Rc};

use gallerypicker::picker::{
    selection_channel, ImageBytes, ImagePicker, PendingSelection, SelectionSender,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use once_cell::sync::Lazy;

pub static PNG_2X2: Lazy<Vec<u8>> = Lazy::new(|| encode_png(&solid_image(2, 2, [10, 20, 30, 255])));
pub static PNG_4X2: Lazy<Vec<u8>> = Lazy::new(|| encode_png(&solid_image(4, 2, [200, 0, 0, 255])));

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    let pixel = Rgba(color);
    let buffer = RgbaImage::from_pixel(width, height, pixel);
    DynamicImage::ImageRgba8(buffer)
}

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode png");
    cursor.into_inner()
}

pub fn bytes(data: &[u8]) -> ImageBytes {
    ImageBytes::from(data)
}

pub fn write_bytes(path: &Path, data: &[u8]) {
    std::fs::write(path, data).expect("failed to write fixture");
}

#[derive(Default)]
struct Script {
    requests: Vec<bool>,
    senders: Vec<SelectionSender>,
}

/// Picker whose selections are finished by the test. Clones share state, so
/// one copy can be handed to the code under test.
#[derive(Clone, Default)]
pub struct ScriptedPicker {
    script: Rc<RefCell<Script>>,
}

impl ScriptedPicker {
    pub fn finish(&self, images: Vec<ImageBytes>) {
        let sender = self
            .script
            .borrow_mut()
            .senders
            .pop()
            .expect("no outstanding selection");
        sender.complete(images);
    }

    /// Drops the outstanding senders without completing them.
    pub fn abandon(&self) {
        self.script.borrow_mut().senders.clear();
    }

    pub fn requests(&self) -> Vec<bool> {
        self.script.borrow().requests.clone()
    }

    pub fn outstanding(&self) -> usize {
        self.script.borrow().senders.len()
    }
}

impl ImagePicker for ScriptedPicker {
    fn request_selection(&self, allow_multiple: bool) -> PendingSelection {
        let (sender, pending) = selection_channel();
        let mut script = self.script.borrow_mut();
        script.requests.push(allow_multiple);
        script.senders.push(sender);
        pending
    }
}
