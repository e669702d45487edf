use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

const FILL: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const FILL_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            FILL_HOVER
        } else {
            FILL
        };
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.rect.x + (self.rect.w - text_size.width) / 2.0,
            self.rect.y + (self.rect.h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
