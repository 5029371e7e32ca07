use eframe::egui::{self, Pos2, Rect, Vec2};

pub const CONTENT_PADDING: f32 = 16.0;
pub const CELL_SPACING: f32 = 12.0;
pub const CARD_ROUNDING: f32 = 12.0;
pub const REMOVE_BUTTON_SIZE: f32 = 24.0;

/// Column count and cell edge for a grid that fills `available_width` with
/// square cells no smaller than `min_cell`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub cell: f32,
    pub spacing: f32,
}

impl GridLayout {
    pub fn adaptive(available_width: f32, min_cell: f32, spacing: f32) -> Self {
        let width = available_width.max(0.0);
        let min_cell = min_cell.max(1.0);
        let columns = (((width + spacing) / (min_cell + spacing)).floor() as usize).max(1);
        let cell = ((width - spacing * (columns - 1) as f32) / columns as f32).max(1.0);
        Self {
            columns,
            cell,
            spacing,
        }
    }

    pub fn rows(&self, items: usize) -> usize {
        items.div_ceil(self.columns)
    }

    /// Rectangle of cell `index`, relative to `origin`.
    pub fn cell_rect(&self, origin: Pos2, index: usize) -> Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        let step = self.cell + self.spacing;
        Rect::from_min_size(
            origin + egui::vec2(col as f32 * step, row as f32 * step),
            Vec2::splat(self.cell),
        )
    }

    pub fn content_height(&self, items: usize) -> f32 {
        let rows = self.rows(items);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.cell + (rows - 1) as f32 * self.spacing
    }
}

/// UV rectangle that crops the centre of an image to a square, so the image
/// fills its cell without distortion.
pub fn crop_to_square(image_size: Vec2) -> Rect {
    let width = image_size.x.max(1.0);
    let height = image_size.y.max(1.0);
    if width > height {
        let span = height / width;
        let start = (1.0 - span) * 0.5;
        Rect::from_min_max(egui::pos2(start, 0.0), egui::pos2(start + span, 1.0))
    } else {
        let span = width / height;
        let start = (1.0 - span) * 0.5;
        Rect::from_min_max(egui::pos2(0.0, start), egui::pos2(1.0, start + span))
    }
}

/// Where the remove button sits inside a card.
pub fn remove_button_rect(card: Rect) -> Rect {
    let inset = 4.0;
    Rect::from_min_size(
        egui::pos2(
            card.max.x - inset - REMOVE_BUTTON_SIZE,
            card.min.y + inset,
        ),
        Vec2::splat(REMOVE_BUTTON_SIZE),
    )
}
