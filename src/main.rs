use macroquad::prelude::*;
use tracing::error;

use cellular_automaton::{
    Automaton, AutomatonConfig, Camera, InteractionController, IntervalClock, Lifecycle,
    input, rendering::{self, BoardView}, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automaton - Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AutomatonConfig::default();
    let mut automaton = match Automaton::new(&config) {
        Ok(automaton) => automaton,
        Err(err) => {
            error!(%err, "could not start the session");
            return;
        }
    };

    let (width, height) = automaton.dimensions();
    let mut view = BoardView::new(width, height);
    let mut interaction = InteractionController::new();
    let mut lifecycle = Lifecycle::new(IntervalClock::default(), config.tick_period);
    let mut camera = Camera::new();
    let mut pan = input::PanTracker::default();

    loop {
        let mouse_pos = mouse_position();
        // Recreate buttons each frame so the panel tracks window resizes.
        let buttons = ui::create_buttons();

        input::handle_buttons(&mut automaton, &mut lifecycle, &buttons, mouse_pos, &mut view);
        input::handle_pointer(
            &mut automaton,
            &mut interaction,
            &mut lifecycle,
            &camera,
            mouse_pos,
            &mut view,
        );
        input::handle_keyboard(&mut automaton, &mut lifecycle, &mut camera, &mut view);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, &mut pan, mouse_pos);

        lifecycle.update(get_frame_time() as f64, &mut automaton, &mut view);

        view.refresh(&automaton);
        clear_background(BLACK);
        rendering::draw_board(&view, &camera);
        rendering::draw_hud(&automaton, lifecycle.state(), &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
