pub mod app;
pub mod config;
pub mod fs_utils;
pub mod gallery;
pub mod image_utils;
pub mod logging;
pub mod picker;
pub mod ui;
