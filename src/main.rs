//! Pyramerge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pyramerge::renderer::{RenderState, build_scene};
    use pyramerge::sim::{GameEvent, GameState, PointerInput, apply};
    use pyramerge::{Effects, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        effects: Effects,
        /// Effect jitter only; the deal has its own seeded RNG
        fx_rng: Pcg32,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Canvas size in CSS pixels
        viewport: (f32, f32),
    }

    impl Game {
        fn new(seed: u64, settings: Settings, viewport: (f32, f32)) -> Self {
            let state = deal(seed, &settings, viewport);
            let mut effects = Effects::new(settings.effect_duration_ms);
            effects.reduced_motion = settings.reduced_motion;
            Self {
                state,
                effects,
                fx_rng: Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
                settings,
                render_state: None,
                viewport,
            }
        }

        /// Feed one pointer event through the core, then present the result
        fn handle(&mut self, input: PointerInput) {
            match apply(&mut self.state, input) {
                Some(GameEvent::Merged { value, at, .. }) => {
                    let now = js_sys::Date::now();
                    self.effects.spawn(at, value, now, &mut self.fx_rng);
                }
                Some(GameEvent::Blocked { index }) => {
                    log::debug!("Cell {} is held down", index);
                }
                _ => {}
            }
        }

        fn restart(&mut self, seed: u64) {
            self.state = deal(seed, &self.settings, self.viewport);
            self.effects.clear();
            log::info!("Game restarted with seed: {}", seed);
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.effects, self.settings.show_values);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        render_state.resize(w, h, self.viewport);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
        }
    }

    /// Deal a pyramid centred on the canvas
    fn deal(seed: u64, settings: &Settings, viewport: (f32, f32)) -> GameState {
        let origin = Vec2::new(viewport.0 / 2.0, viewport.1 / 2.0);
        match GameState::new(seed, &settings.rules(origin)) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Stored settings cannot deal a pyramid ({}), using defaults", e);
                GameState::new(seed, &Settings::default().rules(origin))
                    .expect("default settings always deal")
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pyramerge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let viewport = (client_w as f32, client_h as f32);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, settings, viewport)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, viewport).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_keyboard(game.clone());

        request_animation_frame(game);

        log::info!("Pyramerge running!");
    }

    /// Viewport client coordinates relative to the canvas
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn touch_point(canvas: &HtmlCanvasElement, touch: &web_sys::Touch) -> Vec2 {
        canvas_point(canvas, touch.client_x(), touch.client_y())
    }

    fn mouse_point(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down: pick up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().handle(PointerInput::Pick(mouse_point(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move: drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().handle(PointerInput::Move(mouse_point(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up: drop, on the window so a release off the canvas still lets go
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().handle(PointerInput::Release(point));
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().handle(PointerInput::Pick(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().handle(PointerInput::Move(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: the lifted finger is only in changed_touches
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().handle(PointerInput::Release(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "r" | "R" => g.restart(js_sys::Date::now() as u64),
                "v" | "V" => {
                    g.settings.show_values = !g.settings.show_values;
                    g.settings.save();
                }
                _ => {}
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.effects.advance(js_sys::Date::now());
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use pyramerge::Settings;
    use pyramerge::sim::GameState;

    env_logger::init();
    log::info!("Pyramerge (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let mut seed = 1u64;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => match other.parse() {
                Ok(s) => seed = s,
                Err(_) => log::warn!("Ignoring argument {:?}", other),
            },
        }
    }

    let settings = Settings::load();
    let state = match GameState::new(seed, &settings.rules(Vec2::new(400.0, 300.0))) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot deal pyramid: {}", e);
            std::process::exit(1);
        }
    };

    let board = &state.board;
    for tier in 0..settings.layer_count {
        let cells: Vec<usize> = board.active().filter(|&i| board.cells[i].tier == tier).collect();
        let free = cells
            .iter()
            .filter(|&&i| !board.supports.is_covered(i))
            .count();
        log::info!("tier {}: {} cells, {} free", tier, cells.len(), free);
    }

    if json {
        match serde_json::to_string_pretty(board) {
            Ok(out) => println!("{}", out),
            Err(e) => log::error!("Cannot serialize board: {}", e),
        }
    } else {
        println!(
            "Dealt {} cells (seed {}), {} can be picked up",
            board.cells.len(),
            seed,
            board.uncovered().count()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
