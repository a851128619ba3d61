use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::{Cell, Color as GridColor, GridModel};
use crate::ui::{Button, Dropdown, GridLayout, Palette, panel_x, PANEL_WIDTH};

/// Convert a grid color into a macroquad draw color
pub fn to_draw_color(color: GridColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Draw every cell; unset cells show the export background
pub fn draw_grid(grid: &GridModel, layout: &GridLayout, background: GridColor) {
    let cell_px = layout.cell_px;
    let grid_line_color = Color::from_rgba(220, 220, 220, 255);
    let draw_grid_lines = cell_px >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = layout.cell_origin(y * grid.width() + x);
        draw_rectangle(sx, sy, cell_px, cell_px, to_draw_color(cell.color_or(background)));
        if draw_grid_lines {
            draw_rectangle_lines(sx, sy, cell_px, cell_px, 1.0, grid_line_color);
        }
    }

    let (w, h) = layout.pixel_size();
    draw_rectangle_lines(layout.origin_x, layout.origin_y, w, h, 2.0, DARKGRAY);
}

/// Outline the hovered cell in the color it would be painted
pub fn draw_hover(session: &Session, layout: &GridLayout, mouse_pos: (f32, f32)) {
    let Some(index) = layout.cell_at(mouse_pos) else {
        return;
    };
    let (sx, sy) = layout.cell_origin(index);
    let outline = match session.brush().cell() {
        Cell::Painted(color) => to_draw_color(color),
        Cell::Unset => RED,
    };
    draw_rectangle_lines(sx, sy, layout.cell_px, layout.cell_px, 2.0, outline);
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with palette, buttons, status and dropdowns
pub fn draw_controls(
    session: &Session,
    palette: &Palette,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    let px = panel_x() + 10.0;

    draw_text("Palette", px, 125.0, 14.0, GRAY);
    let brush = session.brush();
    palette.draw(brush.color, brush.eraser, mouse_pos);

    // Current tool preview
    let preview_y = palette.bottom() + 10.0;
    draw_text("Brush:", px, preview_y + 15.0, 16.0, WHITE);
    if brush.eraser {
        draw_text("Eraser", px + 60.0, preview_y + 15.0, 16.0, ORANGE);
    } else {
        draw_rectangle(px + 60.0, preview_y, 24.0, 20.0, to_draw_color(brush.color));
        draw_rectangle_lines(px + 60.0, preview_y, 24.0, 20.0, 1.0, WHITE);
        draw_text(&brush.color.to_hex(), px + 92.0, preview_y + 15.0, 14.0, GRAY);
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (gw, gh) = session.grid().dimensions();
    let history = session.history();
    let status = [
        (format!("Grid: {}×{}", gw, gh), 590.0),
        (format!("Undo: {}/{}  Redo: {}", history.undo_depth(), history.capacity(), history.redo_depth()), 606.0),
        (format!("Undo mode: {}", history.policy().name()), 622.0),
    ];
    status.iter().for_each(|(text, y)| {
        draw_text(text, px, *y, 13.0, Color::from_rgba(150, 150, 150, 255));
    });

    let controls = [
        ("Controls:", 650.0, 14.0, WHITE),
        ("LMB drag: Paint", 665.0, 12.0, GRAY),
        ("Z / Y: Undo / Redo", 678.0, 12.0, GRAY),
        ("E: Eraser  S: Save", 691.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Closed dropdowns first, the open one last so its menu is on top
    dropdowns
        .iter()
        .filter(|dd| !dd.is_open())
        .for_each(|dd| dd.draw(mouse_pos));
    if let Some(open) = dropdowns.iter().find(|dd| dd.is_open()) {
        open.draw(mouse_pos);
    }
}
