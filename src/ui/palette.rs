use macroquad::prelude::*;

use crate::domain::{Color as GridColor, PaletteEntry};

const SWATCH: f32 = 26.0;
const GAP: f32 = 4.0;

/// Grid of clickable color swatches
#[derive(Clone)]
pub struct Palette {
    x: f32,
    y: f32,
    columns: usize,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(x: f32, y: f32, columns: usize, entries: &[PaletteEntry]) -> Self {
        Self {
            x,
            y,
            columns: columns.max(1),
            entries: entries.to_vec(),
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Screen y just below the last swatch row
    pub fn bottom(&self) -> f32 {
        let rows = self.entries.len().div_ceil(self.columns);
        self.y + rows as f32 * (SWATCH + GAP)
    }

    fn swatch_origin(&self, index: usize) -> (f32, f32) {
        let col = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        (self.x + col * (SWATCH + GAP), self.y + row * (SWATCH + GAP))
    }

    /// Swatch under the mouse, if any
    pub fn swatch_at(&self, mouse_pos: (f32, f32)) -> Option<&PaletteEntry> {
        self.entries.iter().enumerate().find_map(|(i, entry)| {
            let (sx, sy) = self.swatch_origin(i);
            let inside = mouse_pos.0 >= sx
                && mouse_pos.0 < sx + SWATCH
                && mouse_pos.1 >= sy
                && mouse_pos.1 < sy + SWATCH;
            inside.then_some(entry)
        })
    }

    /// Color picked with a left click this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<GridColor> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.swatch_at(mouse_pos).map(|entry| entry.color)
    }

    /// Draw swatches, outlining the selected one unless the eraser is on
    pub fn draw(&self, selected: GridColor, eraser: bool, mouse_pos: (f32, f32)) {
        for (i, entry) in self.entries.iter().enumerate() {
            let (sx, sy) = self.swatch_origin(i);
            let c = entry.color;
            draw_rectangle(sx, sy, SWATCH, SWATCH, Color::from_rgba(c.r, c.g, c.b, 255));

            let outline = if !eraser && c == selected {
                Some((3.0, YELLOW))
            } else if self.swatch_at(mouse_pos).is_some_and(|hovered| hovered == entry) {
                Some((2.0, WHITE))
            } else {
                None
            };
            match outline {
                Some((thickness, color)) => draw_rectangle_lines(sx, sy, SWATCH, SWATCH, thickness, color),
                None => draw_rectangle_lines(sx, sy, SWATCH, SWATCH, 1.0, DARKGRAY),
            }
        }
    }
}
