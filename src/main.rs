use gallerypicker::app::{GalleryApp, APP_TITLE};
use gallerypicker::gallery::GallerySession;

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::path::PathBuf;

    use anyhow::Result;
    use clap::Parser;

    use gallerypicker::config::{GalleryConfig, DEFAULT_MIN_CELL, DEFAULT_PARALLEL};
    use gallerypicker::fs_utils::collect_startup_paths;
    use gallerypicker::gallery::NamingPolicy;

    #[derive(Parser, Debug)]
    #[command(
        author,
        version,
        about = "Pick images with the native file dialog and browse them in a grid"
    )]
    pub struct Args {
        /// Image files or directories to show at startup
        #[arg(value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Recurse into directories given as FILES
        #[arg(short = 'r', long = "recursive", default_value_t = false)]
        recursive: bool,

        /// Start with single-image selection
        #[arg(short = 's', long = "single", default_value_t = false)]
        single: bool,

        /// Number of threads used to read selected files
        #[arg(short = 'j', long = "parallel", default_value_t = DEFAULT_PARALLEL)]
        parallel: usize,

        /// Minimum edge of a grid cell in points
        #[arg(long = "min-cell", default_value_t = DEFAULT_MIN_CELL)]
        min_cell: f32,

        /// Name new images after the current image count instead of a running counter
        #[arg(long = "legacy-names", default_value_t = false)]
        legacy_names: bool,
    }

    impl Args {
        pub fn into_config(self) -> Result<GalleryConfig> {
            Ok(GalleryConfig {
                preload: collect_startup_paths(&self.files, self.recursive)?,
                allow_multiple: !self.single,
                parallel: self.parallel.max(1),
                min_cell: self.min_cell.max(1.0),
                naming: if self.legacy_names {
                    NamingPolicy::EntryCount
                } else {
                    NamingPolicy::Monotonic
                },
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use eframe::egui;

    use gallerypicker::logging::init_tracing;
    use gallerypicker::picker::{native::NativeDialogPicker, reader::read_all};

    init_tracing()?;
    let config = desktop::Args::parse().into_config()?;

    let mut session = GallerySession::new(config.allow_multiple, config.naming);
    if !config.preload.is_empty() {
        let images = read_all(config.preload, config.parallel);
        session.on_selection_complete(images);
    }
    let parallel = config.parallel;
    let min_cell = config.min_cell;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            let picker = NativeDialogPicker::new(parallel).with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(GalleryApp::new(session, Box::new(picker), min_cell)) as Box<dyn eframe::App>)
        }),
    )?;

    Ok(())
}

/// Browser entry point; expects a `<canvas id="gallery_canvas">` on the page.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    use gallerypicker::config::GalleryConfig;
    use gallerypicker::picker::web::WebFilePicker;

    const CANVAS_ID: &str = "gallery_canvas";

    let config = GalleryConfig::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = eframe::web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CANVAS_ID))
            .and_then(|element| element.dyn_into::<eframe::web_sys::HtmlCanvasElement>().ok())
        else {
            tracing::error!("No canvas with id {CANVAS_ID} on the page");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| {
                    let picker = WebFilePicker::new().with_repaint(cc.egui_ctx.clone());
                    let session = GallerySession::new(config.allow_multiple, config.naming);
                    Ok(Box::new(GalleryApp::new(session, Box::new(picker), config.min_cell))
                        as Box<dyn eframe::App>)
                }),
            )
            .await;
        if let Err(err) = result {
            tracing::error!("Unable to start the gallery: {err:?}");
        }
    });
}
