//! Paddle Ball entry point
//!
//! Platform-specific initialization: the canvas 2D context, the fixed-rate
//! interval timer and the input listeners on wasm, with explicit teardown
//! of all three; a headless smoke run on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use paddle_ball::consts::TICK_INTERVAL_MS;
    use paddle_ball::renderer::{Color, DrawSurface};
    use paddle_ball::{Engine, EngineError, Tuning};

    /// `DrawSurface` over the browser canvas 2D context.
    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
                .ok_or_else(|| {
                    EngineError::SurfaceUnavailable("canvas has no 2d context".into())
                })?;
            Ok(Self { canvas, ctx })
        }
    }

    impl DrawSurface for CanvasSurface {
        fn width(&self) -> f32 {
            self.canvas.width() as f32
        }

        fn height(&self) -> f32 {
            self.canvas.height() as f32
        }

        fn set_size(&mut self, width: f32, height: f32) {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
        }

        fn set_fill(&mut self, color: Color) {
            self.ctx.set_fill_style_str(color.0);
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }

    /// Timer and listener handles retained for deterministic teardown.
    struct Handles {
        interval_id: i32,
        on_tick: Closure<dyn FnMut()>,
        on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
        on_resize: Closure<dyn FnMut()>,
        canvas: HtmlCanvasElement,
    }

    /// A running game: the engine plus everything that must be released
    /// when the host tears the view down.
    pub struct Game {
        _engine: Rc<RefCell<Engine<CanvasSurface>>>,
        handles: Handles,
    }

    impl Game {
        /// Clear the interval and remove the listeners so no further tick
        /// can fire against a destroyed surface, then drop the closures.
        fn teardown(self) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.handles.interval_id);
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.handles.on_resize.as_ref().unchecked_ref(),
                );
            }
            let _ = self.handles.canvas.remove_event_listener_with_callback(
                "mousemove",
                self.handles.on_mouse_move.as_ref().unchecked_ref(),
            );
            // Closures drop here, after deregistration
            log::info!("game torn down");
        }
    }

    thread_local! {
        static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
    }

    fn viewport(window: &web_sys::Window) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as f32, h as f32)
    }

    fn boot() -> Result<Game, EngineError> {
        let window = web_sys::window()
            .ok_or_else(|| EngineError::SurfaceUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::SurfaceUnavailable("no document".into()))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| EngineError::SurfaceUnavailable("no #canvas element".into()))?;

        let surface = CanvasSurface::new(canvas.clone())?;
        let (vw, vh) = viewport(&window);

        let mut engine = Engine::new(surface, vw, vh, Tuning::load())?;
        engine.start()?;
        let engine = Rc::new(RefCell::new(engine));

        // Fixed-rate tick: one recurring callback for the game's lifetime
        let on_tick = {
            let engine = engine.clone();
            Closure::<dyn FnMut()>::new(move || {
                engine.borrow_mut().tick(js_sys::Date::now());
            })
        };
        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                on_tick.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS as i32,
            )
            .map_err(|_| EngineError::SurfaceUnavailable("setInterval failed".into()))?;

        // Pointer x relative to the canvas, page scroll included
        let on_mouse_move = {
            let engine = engine.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let scroll_left = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|root| root.scroll_left())
                    .unwrap_or(0);
                let x = event.client_x() as f32 - rect.left() as f32 - scroll_left as f32;
                engine.borrow_mut().pointer_moved(x);
            })
        };
        canvas
            .add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())
            .map_err(|_| EngineError::SurfaceUnavailable("mousemove listener failed".into()))?;

        // Viewport resizes; the engine self-throttles
        let on_resize = {
            let engine = engine.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(window) = web_sys::window() {
                    let (vw, vh) = viewport(&window);
                    engine
                        .borrow_mut()
                        .viewport_resized(vw, vh, js_sys::Date::now());
                }
            })
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|_| EngineError::SurfaceUnavailable("resize listener failed".into()))?;

        Ok(Game {
            _engine: engine,
            handles: Handles {
                interval_id,
                on_tick,
                on_mouse_move,
                on_resize,
                canvas,
            },
        })
    }

    /// Start the game. A second call while one is running is a no-op; the
    /// engine-level guard backs this up.
    pub fn start() -> Result<(), JsValue> {
        GAME.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                log::warn!("start ignored: game already running");
                return Ok(());
            }
            match boot() {
                Ok(game) => {
                    *slot = Some(game);
                    log::info!("Paddle Ball running");
                    Ok(())
                }
                Err(err) => {
                    log::error!("failed to start: {err}");
                    Err(JsValue::from_str(&err.to_string()))
                }
            }
        })
    }

    /// Stop the game and release the timer and listeners.
    pub fn stop() {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow_mut().take() {
                game.teardown();
            }
        });
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Paddle Ball starting...");
        start()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Host entry points for toggling between the menu view and the game view.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    wasm_game::start()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop_game() {
    wasm_game::stop();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Ball (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the engine for a few seconds of simulated time against a
/// recording surface and report where the round ended up.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use paddle_ball::consts::TICK_INTERVAL_MS;
    use paddle_ball::renderer::RecordingSurface;
    use paddle_ball::{Engine, Tuning};

    let surface = RecordingSurface::new(800.0, 600.0);
    let mut engine =
        Engine::new(surface, 800.0, 600.0, Tuning::default()).expect("viewport has area");
    engine.start().expect("first start");

    for i in 0..300u32 {
        engine.surface_mut().clear();
        // Sweep the pointer so the paddle sees some action
        engine.pointer_moved(250.0 + (i % 100) as f32 * 3.0);
        engine.tick(f64::from(i) * TICK_INTERVAL_MS);
    }

    let state = engine.state();
    println!(
        "300 ticks: ball at ({:.1}, {:.1}), {} bricks remaining, {} draw commands/frame",
        state.ball.pos.x,
        state.ball.pos.y,
        state.grid.remaining(),
        engine.surface().commands.len()
    );
}
