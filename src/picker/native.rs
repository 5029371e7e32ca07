use std::{path::PathBuf, thread};

use eframe::egui;
use rfd::AsyncFileDialog;

use super::{reader::read_all, selection_channel, ImagePicker, PendingSelection};
use crate::fs_utils::{is_pickable_image, PICKER_EXTENSIONS};

pub const DIALOG_TITLE: &str = "Select Images";

/// Desktop picker backed by the system file-open dialog.
///
/// The dialog runs on its own thread so the UI keeps painting while it is
/// open. Selected files are read through [`read_all`].
pub struct NativeDialogPicker {
    parallel: usize,
    repaint: Option<egui::Context>,
}

impl NativeDialogPicker {
    pub fn new(parallel: usize) -> Self {
        Self {
            parallel,
            repaint: None,
        }
    }

    /// Wakes the egui event loop once the selection has been read.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }
}

impl ImagePicker for NativeDialogPicker {
    fn request_selection(&self, allow_multiple: bool) -> PendingSelection {
        let (sender, pending) = selection_channel();
        let parallel = self.parallel;
        let repaint = self.repaint.clone();

        thread::spawn(move || {
            let paths = pollster::block_on(choose_paths(allow_multiple));
            tracing::info!("User selected {} file(s)", paths.len());
            sender.complete(read_all(paths, parallel));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        pending
    }
}

async fn choose_paths(allow_multiple: bool) -> Vec<PathBuf> {
    let dialog = AsyncFileDialog::new()
        .set_title(DIALOG_TITLE)
        .add_filter("Images", PICKER_EXTENSIONS);

    let handles = if allow_multiple {
        dialog.pick_files().await.unwrap_or_default()
    } else {
        dialog.pick_file().await.into_iter().collect()
    };

    // Some dialogs let the user switch the filter off.
    handles
        .iter()
        .map(|handle| handle.path().to_path_buf())
        .filter(|path| is_pickable_image(path))
        .collect()
}
