//! Flappy entry point
//!
//! Handles platform-specific initialization and runs the frame loop. The
//! library never schedules itself; these drivers call `tick()` once per frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, PointerEvent};

    use flappy::Game;
    use flappy::audio::WebAudio;
    use flappy::persistence::LocalStorageStore;
    use flappy::sim::{SeededRandom, SimConfig};

    // Hand each frame to the page; drawing lives in JS
    #[wasm_bindgen(inline_js = "
        export function present(json) {
            if (typeof window.flappyPresent === 'function') {
                window.flappyPresent(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn present(json: &str);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.tick();
            match g.snapshot().to_json() {
                Ok(json) => present(&json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
        }

        request_animation_frame(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Pointer/touch on the canvas
        if let Some(canvas) = window
            .document()
            .and_then(|d| d.get_element_by_id("game"))
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().flap();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space / ArrowUp
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if code == "Space" || code == "ArrowUp" {
                    event.prevent_default();
                    game.borrow_mut().flap();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Flappy starting...");

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(
            SimConfig::default(),
            Box::new(SeededRandom::new(seed)),
            Box::new(LocalStorageStore::new()),
            Box::new(WebAudio::new()),
        ) {
            Ok(game) => Rc::new(RefCell::new(game)),
            Err(e) => {
                log::error!("Invalid game configuration: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Flappy running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: the autopilot plays one session and the result is printed
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy::persistence::FileStore;
    use flappy::sim::{GamePhase, SeededRandom, SimConfig, autopilot};
    use flappy::{Game, SilentAudio};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let max_ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(36_000);

    let store = FileStore::default_location();
    log::info!("Flappy (native) starting, best score file: {}", store.path().display());

    let mut game = match Game::new(
        SimConfig::default(),
        Box::new(SeededRandom::new(seed)),
        Box::new(store),
        Box::new(SilentAudio),
    ) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    for _ in 0..max_ticks {
        if autopilot::should_flap(game.state(), game.config()) {
            game.flap();
        }
        game.tick();
        if game.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = game.snapshot();
    println!(
        "seed {}: score {} (best {}) after {} frames, {:?}",
        seed, snapshot.score, snapshot.best, snapshot.frame, snapshot.phase
    );
}
