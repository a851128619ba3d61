use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle a click this frame. Returns the picked item index, including
    /// re-picking the current one, so a pattern can be stamped twice.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.click(mouse_pos)
    }

    /// Click handling without reading the mouse button
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if self.hit_row(mouse_pos, 0) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }

        self.is_open = false;
        let picked = (0..self.items.len()).find(|&i| self.hit_row(mouse_pos, i + 1))?;
        self.selected = picked;
        Some(picked)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let main_color = if self.hit_row(mouse_pos, 0) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ROW_HEIGHT, main_color);
        draw_rectangle_lines(self.x, self.y, self.width, ROW_HEIGHT, 2.0, WHITE);

        let current = self.items.get(self.selected).map(String::as_str).unwrap_or("");
        draw_text(
            &self.fit_text(current, self.width - 30.0),
            self.x + 5.0,
            self.y + 21.0,
            FONT_SIZE,
            WHITE,
        );
        draw_text("▼", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ROW_HEIGHT;
        draw_rectangle(self.x, self.y + ROW_HEIGHT, self.width, menu_height, Color::from_rgba(30, 30, 30, 255));

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + (i + 1) as f32 * ROW_HEIGHT;
            let item_color = if self.hit_row(mouse_pos, i + 1) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, ROW_HEIGHT, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, ROW_HEIGHT, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&self.fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + ROW_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    /// Row 0 is the main button, rows 1.. are menu items
    fn hit_row(&self, mouse_pos: (f32, f32), row: usize) -> bool {
        let row_y = self.y + row as f32 * ROW_HEIGHT;
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= row_y
            && mouse_pos.1 <= row_y + ROW_HEIGHT
    }

    /// Truncate with an ellipsis until the text fits
    fn fit_text(&self, text: &str, max_width: f32) -> String {
        let width_of = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
        if width_of(text) <= max_width {
            return text.to_string();
        }
        let mut truncated = text.to_string();
        while !truncated.is_empty() && width_of(&format!("{}...", truncated)) > max_width {
            truncated.pop();
        }
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        let items = vec!["heart".to_string(), "dog".to_string(), "fish".to_string()];
        Dropdown::new(0.0, 0.0, 100.0, "Pattern", items)
    }

    #[test]
    fn test_click_main_toggles_open() {
        let mut dd = dropdown();
        assert_eq!(dd.click((50.0, 10.0)), None);
        assert!(dd.is_open());
        assert_eq!(dd.click((50.0, 10.0)), None);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_click_item_picks_and_closes() {
        let mut dd = dropdown();
        dd.click((50.0, 10.0));
        assert_eq!(dd.click((50.0, 3.0 * ROW_HEIGHT - 10.0)), Some(1));
        assert_eq!(dd.selected(), 1);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_repicking_current_item_is_reported() {
        let mut dd = dropdown();
        dd.click((50.0, 10.0));
        assert_eq!(dd.click((50.0, ROW_HEIGHT + 10.0)), Some(0));
    }

    #[test]
    fn test_click_outside_closes_without_pick() {
        let mut dd = dropdown();
        dd.click((50.0, 10.0));
        assert_eq!(dd.click((500.0, 500.0)), None);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_set_selected_ignores_out_of_range() {
        let mut dd = dropdown();
        dd.set_selected(7);
        assert_eq!(dd.selected(), 0);
    }
}
