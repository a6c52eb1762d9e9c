//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::audio::AudioManager;
    use brick_breaker::renderer::{RenderState, shapes};
    use brick_breaker::sim::GameState;
    use brick_breaker::{GameLoop, Presenter, Settings};

    /// Draws frames with wgpu and mirrors score/lives into the DOM
    struct WebPresenter {
        render_state: Option<RenderState>,
        document: Document,
        show_grid: bool,
        showing_game_over: bool,
    }

    impl WebPresenter {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_game_over_visible(&mut self, visible: bool) {
            if visible == self.showing_game_over {
                return;
            }
            self.showing_game_over = visible;
            if let Some(el) = self.document.get_element_by_id("game-over") {
                let class = if visible { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    impl Presenter for WebPresenter {
        fn present(&mut self, state: &GameState) {
            self.set_game_over_visible(state.is_game_over());

            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = shapes::scene(state, self.show_grid);
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn update_hud(&mut self, score: u32, lives: u8) {
            self.set_text("score", &score.to_string());
            self.set_text("lives", &lives.to_string());
        }
    }

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop,
        presenter: WebPresenter,
        audio: AudioManager,
    }

    impl Game {
        fn frame(&mut self) {
            self.game_loop.frame(&mut self.presenter, &mut self.audio);
        }

        fn restart(&mut self) {
            self.game_loop.restart(&mut self.presenter, &mut self.audio);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };

        let settings = Settings::load();
        let playfield = settings.playfield();
        canvas.set_width(playfield.width as u32);
        canvas.set_height(playfield.height as u32);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(
            surface,
            &adapter,
            canvas.width(),
            canvas.height(),
            playfield,
        )
        .await
        {
            Ok(render_state) => Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                None
            }
        };

        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::new(playfield),
            presenter: WebPresenter {
                render_state,
                document: document.clone(),
                show_grid: settings.show_grid,
                showing_game_over: true,
            },
            audio: AudioManager::new(settings),
        }));

        // Sync HUD and hide any stale overlay
        game.borrow_mut().restart();

        setup_input_handlers(&window, game.clone());
        setup_restart_button(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                // First gesture unlocks audio
                g.audio.resume();
                match event.key().as_str() {
                    "i" | "I" => {
                        g.game_loop.toggle_idle_mode();
                    }
                    "m" | "M" => {
                        g.audio.toggle_muted();
                    }
                    key => g.game_loop.key_down(key),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().game_loop.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-up events won't arrive while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().game_loop.release_keys();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("restartButton") else {
            log::warn!("No #restartButton element - restart disabled");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            g.audio.resume();
            g.restart();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use brick_breaker::sim::{GameState, SoundCue};
    use brick_breaker::{GameLoop, Presenter, Settings, SoundSink};

    /// Upper bound on simulated frames (two minutes at 60 Hz)
    pub const MAX_FRAMES: u64 = 60 * 120;

    /// Logs HUD changes instead of drawing
    #[derive(Default)]
    pub struct LogPresenter {
        pub hud_updates: u32,
    }

    impl Presenter for LogPresenter {
        fn present(&mut self, _state: &GameState) {}

        fn update_hud(&mut self, score: u32, lives: u8) {
            self.hud_updates += 1;
            log::debug!("HUD score={} lives={}", score, lives);
        }
    }

    /// Logs sound cues instead of playing them
    #[derive(Default)]
    pub struct LogSounds {
        pub played: u32,
    }

    impl SoundSink for LogSounds {
        fn play(&mut self, cue: SoundCue) {
            self.played += 1;
            log::trace!("Sound {:?}", cue);
        }
    }

    /// Run an autopilot game until it ends or the frame budget runs out
    pub fn run(settings: &Settings) -> GameLoop {
        let mut game = GameLoop::from_settings(settings);
        game.set_idle_mode(true);

        let mut presenter = LogPresenter::default();
        let mut sounds = LogSounds::default();
        game.restart(&mut presenter, &mut sounds);

        while !game.state().is_game_over() && game.state().time_ticks < MAX_FRAMES {
            game.frame(&mut presenter, &mut sounds);
        }

        log::info!(
            "Headless run finished: {} HUD updates, {} sound cues",
            presenter.hud_updates,
            sounds.played
        );
        game
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot game - run with `trunk serve` for web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(std::path::Path::new(&path)),
        None => Settings::default(),
    };

    let game = headless::run(&settings);
    let state = game.state();
    println!(
        "Ticks: {}  Score: {}  Lives: {}  Blocks left: {}  Game over: {}",
        state.time_ticks,
        state.score,
        state.lives,
        state.active_block_count(),
        state.is_game_over()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
