//! Sky Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        DeviceOrientationEvent, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use sky_hopper::renderer::CanvasRenderer;
    use sky_hopper::sim::{GameEvent, GameState, step};
    use sky_hopper::{Config, InputState, ui};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: InputState,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // The profile is chosen once from the viewport and frozen for
        // the session; resizing later does not re-select it
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(sky_hopper::config::MOBILE_BREAKPOINT);
        let config = Config::from_viewport_width(viewport_width);
        log::info!(
            "Using {} profile ({}x{})",
            config.profile.as_str(),
            config.board_width,
            config.board_height
        );

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(config.board_width as u32);
        canvas.set_height(config.board_height as u32);

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to create renderer");
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(config, seed),
            renderer,
            input: InputState::new(),
        }));

        setup_input_handlers(&document, game.clone());

        request_animation_frame(game);

        log::info!("Sky Hopper running!");
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Tap: manual jump while playing, reset once the game is over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input.touch_start();
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Swipe to steer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if event.touches().length() == 1 {
                    if let Some(touch) = event.touches().get(0) {
                        game.borrow_mut().input.swipe_move(touch.client_x() as f32);
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Lifted finger ends the swipe
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input.swipe_end();
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Device tilt
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceOrientationEvent| {
                if let Some(gamma) = event.gamma() {
                    game.borrow_mut().input.tilt(gamma as f32);
                }
            });
            let _ = window.add_event_listener_with_callback(
                "deviceorientation",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Keyboard steering; Space restarts after a game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_down(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Desktop click mirrors the tap
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.touch_start();
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let event = {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;

            let event = step(&mut g.state, &g.input);
            g.input.clear_transient();

            if let Err(e) = g.renderer.render(&g.state) {
                log::warn!("Render error: {:?}", e);
            }
            event
        };

        match event {
            Some(GameEvent::GameOver) => {
                log::info!("Game over at score {}", game.borrow().state.score);
                let document = web_sys::window().unwrap().document().unwrap();
                let restart_game = game.clone();
                if let Err(e) = ui::show_game_over(&document, move || {
                    restart_game.borrow_mut().input.restart = true;
                }) {
                    log::warn!("Overlay error: {:?}", e);
                }
            }
            Some(GameEvent::Restarted) => {
                log::info!("Game restarted");
                let document = web_sys::window().unwrap().document().unwrap();
                ui::dismiss_game_over(&document);
            }
            None => {}
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_hopper::config::{Config, DeviceProfile};
    use sky_hopper::sim::{GamePhase, GameState, step};
    use sky_hopper::InputState;
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = Config::for_profile(DeviceProfile::Desktop);
    let mut state = GameState::new(config, seed);
    let input = InputState::new();

    log::info!("Sky Hopper headless demo, seed {}", seed);

    // Run the sim until the actor drops off the board or the frame
    // cap is reached (with no steering it can bounce forever)
    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 20_000 {
        step(&mut state, &input);
        frames += 1;
    }

    println!("{} frames simulated, final score {}", frames, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
