/// Viewport over the board: pan offset plus zoom factor.
///
/// Presentation-side only; the engine never sees screen coordinates.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Multiply the zoom, clamped to a usable range.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.5, 10.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen position to (possibly off-board, possibly negative) grid
    /// coordinates. The caller bounds-checks against the board.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (i32, i32) {
        let scale = cell_size * self.zoom;
        (
            ((screen_x - self.offset_x) / scale).floor() as i32,
            ((screen_y - self.offset_y) / scale).floor() as i32,
        )
    }

    /// Top-left screen corner of a grid cell.
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize, cell_size: f32) -> (f32, f32) {
        let scale = cell_size * self.zoom;
        (
            grid_x as f32 * scale + self.offset_x,
            grid_y as f32 * scale + self.offset_y,
        )
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
