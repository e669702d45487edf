use macroquad::prelude::*;

use crate::application::{Automaton, Camera, PresentationSink, RunState};
use crate::domain::Cell;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};

const LIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

fn color_for(cell: Cell) -> Color {
    if cell.is_alive() { LIVE_COLOR } else { DEAD_COLOR }
}

/// Per-cell color table, the presentation half of the board.
///
/// Indexed with the same row-major linearization as the engine buffers —
/// a plain lookup table standing in for per-cell display objects. Single
/// edits recolor one entry; whole-board changes mark the table dirty and
/// `refresh` re-reads every cell.
pub struct BoardView {
    width: usize,
    height: usize,
    colors: Vec<Color>,
    dirty: bool,
}

impl BoardView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            colors: vec![DEAD_COLOR; width * height],
            dirty: true,
        }
    }

    /// Re-read every cell if a whole-board change was reported.
    pub fn refresh(&mut self, automaton: &Automaton) {
        if !self.dirty {
            return;
        }
        for (x, y, cell) in automaton.grid().iter_cells() {
            self.colors[y * self.width + x] = color_for(cell);
        }
        self.dirty = false;
    }
}

impl PresentationSink for BoardView {
    fn on_cell_changed(&mut self, x: usize, y: usize, cell: Cell) {
        self.colors[y * self.width + x] = color_for(cell);
    }

    fn on_generation_advanced(&mut self) {
        self.dirty = true;
    }
}

/// Draw the board through the camera.
pub fn draw_board(view: &BoardView, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let draw_grid_lines = cell_size >= 4.0;

    for y in 0..view.height {
        for x in 0..view.width {
            let (screen_x, screen_y) = camera.grid_to_screen(x, y, CELL_SIZE);
            draw_rectangle(
                screen_x,
                screen_y,
                cell_size,
                cell_size,
                view.colors[y * view.width + x],
            );
            if draw_grid_lines {
                draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
            }
        }
    }
}

/// Draw the control panel: buttons, counters, status, help.
pub fn draw_hud(
    automaton: &Automaton,
    run_state: RunState,
    camera: &Camera,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(
        px,
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::new(0.12, 0.12, 0.12, 1.0),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    // Counter overlay, the two bound HUD texts.
    draw_text(&automaton.evolutions_text(), px, 200.0, 20.0, WHITE);
    draw_text(&automaton.population_text(), px, 225.0, 20.0, WHITE);

    let (status, status_color) = match run_state {
        RunState::Running => ("Running", GREEN),
        RunState::Paused => ("Paused", ORANGE),
        RunState::Stopped => ("Stopped", GRAY),
    };
    draw_text("Status:", px, 265.0, 16.0, WHITE);
    draw_text(status, px, 283.0, 16.0, status_color);

    let (width, height) = automaton.dimensions();
    draw_text(
        &format!("Board: {width}x{height}"),
        px,
        315.0,
        14.0,
        LIGHTGRAY,
    );
    draw_text(&format!("Zoom: {:.1}x", camera.zoom), px, 333.0, 14.0, LIGHTGRAY);

    let help = [
        "Controls:",
        "LMB: Toggle cell",
        "Space: Start/Pause",
        "C: Reset",
        "R: Random",
        "Wheel: Zoom",
        "Mid-drag: Pan",
    ];
    for (i, line) in help.iter().enumerate() {
        let size = if i == 0 { 14.0 } else { 12.0 };
        draw_text(line, px, 370.0 + i as f32 * 15.0, size, GRAY);
    }
}
