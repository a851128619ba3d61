use macroquad::prelude::*;

/// Button UI component with hover, click and toggled-on state
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    active: bool,
}

const BASE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const ACTIVE_COLOR: Color = Color::new(0.85, 0.45, 0.15, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            active: false,
        }
    }

    /// Mark the button as a toggle that is currently on
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.active, self.is_hovered(mouse_pos)) {
            (true, _) => ACTIVE_COLOR,
            (false, true) => HOVER_COLOR,
            (false, false) => BASE_COLOR,
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(10.0, 10.0, 100.0, 30.0, "Undo");
        assert!(button.is_hovered((10.0, 10.0)));
        assert!(button.is_hovered((110.0, 40.0)));
        assert!(!button.is_hovered((111.0, 20.0)));
    }
}
