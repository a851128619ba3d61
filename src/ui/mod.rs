mod button;
mod dropdown;
mod palette;

pub use button::Button;
pub use dropdown::Dropdown;
pub use palette::Palette;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Largest on-screen cell; grids that don't fit are drawn smaller
pub const MAX_CELL_PX: f32 = 20.0;
pub const GRID_MARGIN: f32 = 16.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Grid size options for the resize dropdown
pub const GRID_SIZES: &[(usize, &str)] = &[
    (10, "10×10"),
    (16, "16×16"),
    (20, "20×20"),
    (24, "24×24"),
    (32, "32×32"),
    (48, "48×48"),
    (64, "64×64"),
];

/// Everything a button or shortcut can ask the session to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Undo,
    Redo,
    Eraser,
    Reset,
    Download,
}

impl ControlAction {
    pub const fn label(self) -> &'static str {
        match self {
            ControlAction::Undo => "Undo",
            ControlAction::Redo => "Redo",
            ControlAction::Eraser => "Eraser",
            ControlAction::Reset => "Reset",
            ControlAction::Download => "Download",
        }
    }
}

/// Button order top to bottom
pub const CONTROL_ACTIONS: [ControlAction; 5] = [
    ControlAction::Undo,
    ControlAction::Redo,
    ControlAction::Eraser,
    ControlAction::Reset,
    ControlAction::Download,
];

pub const BUTTONS_TOP: f32 = 340.0;

/// Create UI buttons with standard layout, one per [`CONTROL_ACTIONS`] entry
pub fn create_buttons(eraser_active: bool) -> Vec<Button> {
    let px = panel_x();
    CONTROL_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            Button::new(
                px + 10.0,
                BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + 10.0),
                PANEL_WIDTH - 20.0,
                BUTTON_HEIGHT,
                action.label(),
            )
            .with_active(*action == ControlAction::Eraser && eraser_active)
        })
        .collect()
}

/// Where the grid sits on screen and how big each cell is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_px: f32,
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Fit a `columns` x `rows` grid into an area, never exceeding [`MAX_CELL_PX`]
    pub fn fit(columns: usize, rows: usize, area_width: f32, area_height: f32) -> Self {
        let usable_w = (area_width - 2.0 * GRID_MARGIN).max(1.0);
        let usable_h = (area_height - 2.0 * GRID_MARGIN).max(1.0);
        let cell_px = (usable_w / columns.max(1) as f32)
            .min(usable_h / rows.max(1) as f32)
            .min(MAX_CELL_PX)
            .floor()
            .max(1.0);

        Self {
            origin_x: GRID_MARGIN,
            origin_y: GRID_MARGIN,
            cell_px,
            columns,
            rows,
        }
    }

    /// Layout for the current window size
    pub fn for_screen(columns: usize, rows: usize) -> Self {
        Self::fit(columns, rows, grid_area_width(), grid_area_height())
    }

    /// Linear cell index under a screen position
    pub fn cell_at(&self, pos: (f32, f32)) -> Option<usize> {
        let gx = (pos.0 - self.origin_x) / self.cell_px;
        let gy = (pos.1 - self.origin_y) / self.cell_px;
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (x, y) = (gx as usize, gy as usize);
        (x < self.columns && y < self.rows).then(|| y * self.columns + x)
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_origin(&self, index: usize) -> (f32, f32) {
        let x = (index % self.columns) as f32;
        let y = (index / self.columns) as f32;
        (self.origin_x + x * self.cell_px, self.origin_y + y * self.cell_px)
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (self.columns as f32 * self.cell_px, self.rows as f32 * self.cell_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_caps_cell_size() {
        let layout = GridLayout::fit(10, 10, 1000.0, 1000.0);
        assert_eq!(layout.cell_px, MAX_CELL_PX);
    }

    #[test]
    fn test_fit_shrinks_large_grids() {
        let layout = GridLayout::fit(64, 64, 800.0, 800.0);
        assert!(layout.cell_px * 64.0 <= 800.0 - 2.0 * GRID_MARGIN);
        assert!(layout.cell_px >= 1.0);
    }

    #[test]
    fn test_cell_at_round_trips_cell_origin() {
        let layout = GridLayout::fit(20, 20, 600.0, 600.0);
        for index in [0, 19, 20, 399] {
            let (x, y) = layout.cell_origin(index);
            assert_eq!(layout.cell_at((x + 1.0, y + 1.0)), Some(index));
        }
    }

    #[test]
    fn test_cell_at_outside_grid() {
        let layout = GridLayout::fit(4, 4, 600.0, 600.0);
        assert_eq!(layout.cell_at((0.0, 0.0)), None);
        let (w, h) = layout.pixel_size();
        assert_eq!(layout.cell_at((GRID_MARGIN + w + 1.0, GRID_MARGIN)), None);
        assert_eq!(layout.cell_at((GRID_MARGIN, GRID_MARGIN + h + 1.0)), None);
    }

    #[test]
    fn test_grid_sizes_include_default() {
        assert!(GRID_SIZES.iter().any(|(size, _)| *size == 20));
    }
}
