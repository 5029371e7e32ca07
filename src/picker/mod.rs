//! Platform-neutral contract for asking the user to choose images.
//!
//! An [`ImagePicker`] shows whatever chooser the platform offers and hands back
//! a [`PendingSelection`]. The pending selection resolves exactly once with the
//! raw bytes of every file that could be read. Cancellation, an empty choice and
//! a selection where every read failed all look the same: an empty result.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(not(target_arch = "wasm32"))]
pub mod reader;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::sync::{
    mpsc::{self, Receiver, Sender, TryRecvError},
    Arc,
};

/// Contents of one selected file. Never mutated after it is read.
pub type ImageBytes = Arc<[u8]>;

pub trait ImagePicker {
    /// Presents the platform chooser. With `allow_multiple == false` the
    /// result holds at most one buffer.
    fn request_selection(&self, allow_multiple: bool) -> PendingSelection;
}

/// Creates the one-shot pair an adapter uses to deliver its result.
pub fn selection_channel() -> (SelectionSender, PendingSelection) {
    let (tx, rx) = mpsc::channel();
    (
        SelectionSender { tx },
        PendingSelection {
            rx,
            resolved: false,
        },
    )
}

pub struct SelectionSender {
    tx: Sender<Vec<ImageBytes>>,
}

impl SelectionSender {
    pub fn complete(self, images: Vec<ImageBytes>) {
        // The receiver may already be gone when the app is shutting down.
        let _ = self.tx.send(images);
    }
}

pub struct PendingSelection {
    rx: Receiver<Vec<ImageBytes>>,
    resolved: bool,
}

impl PendingSelection {
    /// Returns `Some` once the adapter is done and `None` on every other call.
    ///
    /// A sender dropped without completing resolves the selection as empty.
    pub fn poll(&mut self) -> Option<Vec<ImageBytes>> {
        if self.resolved {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(images) => images,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("Image picker went away without a result");
                Vec::new()
            }
        };
        self.resolved = true;
        Some(result)
    }

    /// Blocks until the adapter finishes.
    pub fn wait(mut self) -> Vec<ImageBytes> {
        if self.resolved {
            return Vec::new();
        }
        self.resolved = true;
        self.rx.recv().unwrap_or_default()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Joins N independent file reads. Each read settles exactly once, successful
/// or not; after the last one the surviving buffers go out through the sender.
pub struct ReadBarrier {
    expected: usize,
    settled: usize,
    loaded: Vec<(usize, ImageBytes)>,
    sender: Option<SelectionSender>,
}

impl ReadBarrier {
    pub fn new(expected: usize, sender: SelectionSender) -> Self {
        let mut barrier = Self {
            expected,
            settled: 0,
            loaded: Vec::with_capacity(expected),
            sender: Some(sender),
        };
        if expected == 0 {
            barrier.release();
        }
        barrier
    }

    /// Records the outcome of the read at `index`. Returns `true` when this
    /// call released the barrier.
    pub fn settle(&mut self, index: usize, bytes: Option<ImageBytes>) -> bool {
        if self.sender.is_none() {
            return false;
        }
        self.settled += 1;
        if let Some(bytes) = bytes {
            self.loaded.push((index, bytes));
        }
        if self.settled >= self.expected {
            self.release();
            return true;
        }
        false
    }

    /// Settles the read of file `label` from its raw outcome. Any successful
    /// read counts, including an empty file; only a failed read is dropped.
    pub fn settle_read<E: std::fmt::Display>(
        &mut self,
        index: usize,
        label: &str,
        result: Result<Vec<u8>, E>,
    ) -> bool {
        match result {
            Ok(bytes) => {
                tracing::debug!("Read {} bytes from {label}", bytes.len());
                self.settle(index, Some(ImageBytes::from(bytes)))
            }
            Err(err) => {
                tracing::warn!("Skipping {label}: {err:#}");
                self.settle(index, None)
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.expected.saturating_sub(self.settled)
    }

    fn release(&mut self) {
        let Some(sender) = self.sender.take() else { return };
        self.loaded.sort_by_key(|(index, _)| *index);
        let images: Vec<ImageBytes> = self.loaded.drain(..).map(|(_, bytes)| bytes).collect();
        tracing::info!(
            "Loaded {} of {} selected images",
            images.len(),
            self.expected
        );
        sender.complete(images);
    }
}
