use macroquad::prelude::*;
use tracing::warn;

use crate::application::{
    Automaton, Camera, Clock, InteractionController, Lifecycle, PresentationSink,
};
use crate::ui::{Button, CELL_SIZE, grid_area_width};

/// Resolve the pointer position to a board coordinate, or `None` when it
/// is over the panel or off the board. The engine never hit-tests; this
/// is the only place screen space meets board space.
pub fn resolve_cell(
    automaton: &Automaton,
    camera: &Camera,
    mouse_pos: (f32, f32),
) -> Option<(usize, usize)> {
    if mouse_pos.0 >= grid_area_width() {
        return None;
    }
    let (gx, gy) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    if gx < 0 || gy < 0 {
        return None;
    }
    let (width, height) = automaton.dimensions();
    let (x, y) = (gx as usize, gy as usize);
    (x < width && y < height).then_some((x, y))
}

/// Drive one frame of the press-drag-release edit gesture. Pressing
/// pauses the clock first, so a tick can never race an edit.
pub fn handle_pointer<C: Clock>(
    automaton: &mut Automaton,
    interaction: &mut InteractionController,
    lifecycle: &mut Lifecycle<C>,
    camera: &Camera,
    mouse_pos: (f32, f32),
    sink: &mut dyn PresentationSink,
) {
    if is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < grid_area_width() {
        lifecycle.pause_only();
        interaction.begin_gesture(automaton);
    }

    if is_mouse_button_down(MouseButton::Left) && interaction.is_dragging() {
        if let Some((x, y)) = resolve_cell(automaton, camera, mouse_pos) {
            if let Err(err) = interaction.report_cell(automaton, x, y, sink) {
                warn!(%err, "cell report rejected");
            }
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        interaction.end_gesture();
    }
}

/// Keyboard bindings: Space toggles the clock, C resets, R randomizes,
/// H homes the camera.
pub fn handle_keyboard<C: Clock>(
    automaton: &mut Automaton,
    lifecycle: &mut Lifecycle<C>,
    camera: &mut Camera,
    sink: &mut dyn PresentationSink,
) {
    if is_key_pressed(KeyCode::Space) {
        lifecycle.toggle_run();
    }
    if is_key_pressed(KeyCode::C) {
        lifecycle.reset(automaton, sink);
    }
    if is_key_pressed(KeyCode::R) {
        lifecycle.pause_only();
        automaton.randomize(sink);
    }
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Dispatch panel button clicks, same actions as the keyboard.
pub fn handle_buttons<C: Clock>(
    automaton: &mut Automaton,
    lifecycle: &mut Lifecycle<C>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    sink: &mut dyn PresentationSink,
) {
    for (idx, btn) in buttons.iter().enumerate() {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => lifecycle.toggle_run(),
            1 => lifecycle.reset(automaton, sink),
            2 => {
                lifecycle.pause_only();
                automaton.randomize(sink);
            }
            _ => {}
        }
    }
}

/// Handle zoom with the mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_by(1.1);
    } else if wheel < 0.0 {
        camera.zoom_by(1.0 / 1.1);
    }
}

/// Last pointer position of an ongoing middle-drag pan, owned by the
/// frame loop.
#[derive(Default)]
pub struct PanTracker {
    last: Option<(f32, f32)>,
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, tracker: &mut PanTracker, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some((lx, ly)) = tracker.last {
            camera.pan(mouse_pos.0 - lx, mouse_pos.1 - ly);
        }
        tracker.last = Some(mouse_pos);
    } else {
        tracker.last = None;
    }
}
