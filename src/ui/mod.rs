mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 12.0;

/// X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the board area left of the panel
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, in dispatch order: Start/Pause, Reset, Random.
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start/Pause"),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
