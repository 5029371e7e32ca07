use std::{cell::RefCell, convert::Infallible, rc::Rc};

use eframe::egui;
use rfd::AsyncFileDialog;

use super::{selection_channel, ImagePicker, PendingSelection, ReadBarrier};
use crate::fs_utils::BROWSER_EXTENSIONS;

/// Browser picker over a hidden file input. Every chosen file is read by its
/// own future and the results meet in a [`ReadBarrier`].
#[derive(Default)]
pub struct WebFilePicker {
    repaint: Option<egui::Context>,
}

impl WebFilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }
}

impl ImagePicker for WebFilePicker {
    fn request_selection(&self, allow_multiple: bool) -> PendingSelection {
        let (sender, pending) = selection_channel();
        let repaint = self.repaint.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let dialog = AsyncFileDialog::new().add_filter("Images", BROWSER_EXTENSIONS);
            let handles = if allow_multiple {
                dialog.pick_files().await.unwrap_or_default()
            } else {
                dialog.pick_file().await.into_iter().collect()
            };

            let barrier = Rc::new(RefCell::new(ReadBarrier::new(handles.len(), sender)));
            if handles.is_empty() {
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            }
            for (index, handle) in handles.into_iter().enumerate() {
                let barrier = barrier.clone();
                let repaint = repaint.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let bytes = handle.read().await;
                    let released = barrier.borrow_mut().settle_read(
                        index,
                        &handle.file_name(),
                        Ok::<_, Infallible>(bytes),
                    );
                    if let (true, Some(ctx)) = (released, repaint) {
                        ctx.request_repaint();
                    }
                });
            }
        });
        pending
    }
}
