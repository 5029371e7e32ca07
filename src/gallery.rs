//! In-memory gallery state and the picker lifecycle that feeds it.

use crate::picker::{ImageBytes, ImagePicker, PendingSelection};

pub const NAME_PREFIX: &str = "IMG_";

/// Identity of an entry for the lifetime of the process. Unlike the display
/// name it is never shared between two entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

#[derive(Clone, Debug)]
pub struct ImageEntry {
    pub id: EntryId,
    pub display_name: String,
    pub bytes: ImageBytes,
}

/// How display names are generated on insertion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NamingPolicy {
    /// `IMG_<n>` from a counter that only grows; names are never reused.
    #[default]
    Monotonic,
    /// `IMG_<len + 1>` at insertion time. After a removal this can hand out a
    /// name that is still in use.
    EntryCount,
}

pub struct GallerySession {
    entries: Vec<ImageEntry>,
    pending: Option<PendingSelection>,
    allow_multiple: bool,
    naming: NamingPolicy,
    next_name: u64,
    next_id: u64,
}

impl Default for GallerySession {
    fn default() -> Self {
        Self::new(true, NamingPolicy::default())
    }
}

impl GallerySession {
    pub fn new(allow_multiple: bool, naming: NamingPolicy) -> Self {
        Self {
            entries: Vec::new(),
            pending: None,
            allow_multiple,
            naming,
            next_name: 1,
            next_id: 0,
        }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn picker_requested(&self) -> bool {
        self.pending.is_some()
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Takes effect on the next picker request.
    pub fn set_allow_multiple(&mut self, allow_multiple: bool) {
        self.allow_multiple = allow_multiple;
    }

    pub fn naming(&self) -> NamingPolicy {
        self.naming
    }

    /// Starts a selection. While one is already outstanding the request is
    /// ignored and `false` is returned.
    pub fn request_pick(&mut self, picker: &dyn ImagePicker) -> bool {
        if self.pending.is_some() {
            tracing::debug!("Pick requested while a selection is outstanding; ignoring");
            return false;
        }
        self.pending = Some(picker.request_selection(self.allow_multiple));
        true
    }

    /// Checks the outstanding selection and applies it once it resolves.
    /// Returns the number of entries added when that happens.
    pub fn poll_selection(&mut self) -> Option<usize> {
        let images = self.pending.as_mut()?.poll()?;
        Some(self.on_selection_complete(images))
    }

    /// Appends one entry per buffer, in order, and returns to idle whatever
    /// the result size.
    pub fn on_selection_complete(&mut self, buffers: Vec<ImageBytes>) -> usize {
        let added = buffers.len();
        for bytes in buffers {
            let display_name = self.next_display_name();
            let id = EntryId(self.next_id);
            self.next_id += 1;
            self.entries.push(ImageEntry {
                id,
                display_name,
                bytes,
            });
        }
        self.pending = None;
        if added > 0 {
            tracing::info!("Added {added} image(s), gallery holds {}", self.entries.len());
        }
        added
    }

    /// Removes the first entry named `display_name`. Unknown names are ignored.
    pub fn remove(&mut self, display_name: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.display_name == display_name)
        {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(idx) => {
                let entry = self.entries.remove(idx);
                tracing::debug!("Removed {}", entry.display_name);
                true
            }
            None => false,
        }
    }

    fn next_display_name(&mut self) -> String {
        let n = match self.naming {
            NamingPolicy::Monotonic => {
                let n = self.next_name;
                self.next_name += 1;
                n
            }
            NamingPolicy::EntryCount => self.entries.len() as u64 + 1,
        };
        format!("{NAME_PREFIX}{n}")
    }
}
