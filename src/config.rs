use std::path::PathBuf;

use crate::gallery::NamingPolicy;

pub const DEFAULT_PARALLEL: usize = 8;
pub const DEFAULT_MIN_CELL: f32 = 128.0;

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Files read into the gallery before the window opens.
    pub preload: Vec<PathBuf>,
    pub allow_multiple: bool,
    /// Worker threads used to read selected files.
    pub parallel: usize,
    /// Smallest edge a grid cell may shrink to, in points.
    pub min_cell: f32,
    pub naming: NamingPolicy,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            preload: Vec::new(),
            allow_multiple: true,
            parallel: DEFAULT_PARALLEL,
            min_cell: DEFAULT_MIN_CELL,
            naming: NamingPolicy::Monotonic,
        }
    }
}
