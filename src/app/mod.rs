pub mod textures;

use std::time::Duration;

use eframe::{
    egui::{self, Color32, RichText},
    App, Frame,
};

use crate::{
    gallery::{EntryId, GallerySession},
    picker::ImagePicker,
    ui::{crop_to_square, remove_button_rect, GridLayout, CARD_ROUNDING, CELL_SPACING, CONTENT_PADDING},
};

use self::textures::TextureStore;

pub const APP_TITLE: &str = "Gallery Multiplatform";
pub const EMPTY_MESSAGE: &str = "Your gallery is empty";

const PICK_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct GalleryApp {
    pub session: GallerySession,
    pub textures: TextureStore,
    pub status: String,
    picker: Box<dyn ImagePicker>,
    min_cell: f32,
}

impl GalleryApp {
    pub fn new(session: GallerySession, picker: Box<dyn ImagePicker>, min_cell: f32) -> Self {
        let status = if session.is_empty() {
            String::from("Ready")
        } else {
            format!("Loaded {} image(s)", session.len())
        };
        Self {
            session,
            textures: TextureStore::new(),
            status,
            picker,
            min_cell,
        }
    }

    pub fn pick(&mut self) {
        if self.session.request_pick(self.picker.as_ref()) {
            self.status = "Waiting for selection...".into();
        }
    }

    /// Applies a finished selection, if any. Returns how many images it added.
    pub fn process_selection(&mut self) -> Option<usize> {
        let added = self.session.poll_selection()?;
        self.status = match added {
            0 => "No images selected".into(),
            1 => "Added 1 image".into(),
            n => format!("Added {n} images"),
        };
        Some(added)
    }

    pub fn remove(&mut self, id: EntryId) {
        if let Some(entry) = self.session.entries().iter().find(|entry| entry.id == id) {
            self.status = format!("Removed {}", entry.display_name);
        }
        self.session.remove_entry(id);
        self.textures.retain(self.session.entries());
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let open = ctx.input(|input| input.key_pressed(egui::Key::O) && input.modifiers.command);
        if open {
            self.pick();
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("gallery-top-bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new(APP_TITLE).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} image(s)", self.session.len()));
                    let mut allow_multiple = self.session.allow_multiple();
                    if ui.checkbox(&mut allow_multiple, "Select multiple").changed() {
                        self.session.set_allow_multiple(allow_multiple);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("gallery-status").show(ctx, |ui| {
            ui.label(RichText::new(&self.status).monospace());
        });
    }

    fn pick_button(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("gallery-pick-button"))
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-CONTENT_PADDING, -CONTENT_PADDING - 28.0),
            )
            .show(ctx, |ui| {
                let button = egui::Button::new(RichText::new("+ Pick Image").size(16.0))
                    .min_size(egui::vec2(140.0, 44.0));
                let enabled = !self.session.picker_requested();
                if ui
                    .add_enabled(enabled, button)
                    .on_hover_text("Ctrl+O")
                    .clicked()
                {
                    self.pick();
                }
            });
    }

    fn gallery(&mut self, ctx: &egui::Context) {
        let mut removed = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(EMPTY_MESSAGE)
                            .size(18.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let full_width = ui.available_width();
                    let layout = GridLayout::adaptive(
                        full_width - 2.0 * CONTENT_PADDING,
                        self.min_cell,
                        CELL_SPACING,
                    );
                    let height = layout.content_height(self.session.len()) + 2.0 * CONTENT_PADDING;
                    let (area, _) =
                        ui.allocate_exact_size(egui::vec2(full_width, height), egui::Sense::hover());
                    let origin = area.min + egui::vec2(CONTENT_PADDING, CONTENT_PADDING);

                    for (index, entry) in self.session.entries().iter().enumerate() {
                        let card = layout.cell_rect(origin, index);
                        if !ui.is_rect_visible(card) {
                            continue;
                        }

                        ui.painter()
                            .rect_filled(card, CARD_ROUNDING, ui.visuals().extreme_bg_color);
                        match self.textures.get_or_load(ctx, entry) {
                            Some(texture) => {
                                ui.painter().image(
                                    texture.id(),
                                    card.shrink(2.0),
                                    crop_to_square(texture.size_vec2()),
                                    Color32::WHITE,
                                );
                            }
                            None => {
                                ui.painter().text(
                                    card.center(),
                                    egui::Align2::CENTER_CENTER,
                                    "No preview",
                                    egui::FontId::proportional(14.0),
                                    Color32::GRAY,
                                );
                            }
                        }

                        ui.interact(card, ui.id().with(entry.id), egui::Sense::hover())
                            .on_hover_text(entry.display_name.as_str());

                        let remove = egui::Button::new(RichText::new("x").color(Color32::WHITE))
                            .fill(Color32::from_black_alpha(102));
                        if ui
                            .put(remove_button_rect(card), remove)
                            .on_hover_text("Remove")
                            .clicked()
                        {
                            removed = Some(entry.id);
                        }
                    }
                });
        });

        if let Some(id) = removed {
            self.remove(id);
        }
    }
}

impl App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        let _ = frame;

        self.process_selection();
        self.handle_keyboard(ctx);

        self.top_bar(ctx);
        self.status_bar(ctx);
        self.gallery(ctx);
        self.pick_button(ctx);

        if self.session.picker_requested() {
            ctx.request_repaint_after(PICK_POLL_INTERVAL);
        }
    }
}
