//! Pull Ball entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use pull_ball::consts::SURFACE_SIZE;
    use pull_ball::renderer::RenderState;
    use pull_ball::sim::{Bounds, DrawCommand, PointerEvent, SimConstants, Simulation};
    use pull_ball::{FrameLoop, SetupError};

    const CANVAS_ID: &str = "canvas";

    /// Everything the DOM callbacks share
    struct App {
        frames: FrameLoop,
        render_state: RenderState,
    }

    impl App {
        fn draw(&mut self, commands: &[DrawCommand]) {
            match self.render_state.render(commands) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| SetupError::MissingElement(CANVAS_ID.into()))?
            .dyn_into()
            .map_err(|_| SetupError::NotACanvas(CANVAS_ID.into()))?;

        // Display size in CSS pixels
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{SURFACE_SIZE}px"));
        let _ = style.set_property("height", &format!("{SURFACE_SIZE}px"));

        // Backing store scaled for pixel density
        let dpr = window.device_pixel_ratio();
        let width = (SURFACE_SIZE as f64 * dpr) as u32;
        let height = (SURFACE_SIZE as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Bounds are measured once; the canvas is not expected to resize
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let bounds = if client_w > 0 && client_h > 0 {
            Bounds::new(client_w as f32, client_h as f32)
        } else {
            Bounds::default()
        };
        log::info!(
            "Surface {}x{} logical, {}x{} physical (dpr {})",
            bounds.width,
            bounds.height,
            width,
            height,
            dpr
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let logical = Vec2::new(bounds.width, bounds.height);
        let render_state = RenderState::new(surface, &adapter, width, height, logical).await?;

        let sim = Simulation::new(SimConstants::default(), bounds);
        let app = Rc::new(RefCell::new(App {
            frames: FrameLoop::new(sim),
            render_state,
        }));

        // Draw once so the canvas is not blank before the pointer arrives
        {
            let mut a = app.borrow_mut();
            let commands = a.frames.initial_frame();
            a.draw(&commands);
        }

        setup_input_handlers(&canvas, app);

        log::info!("Pull Ball ready");
        Ok(())
    }

    fn pointer_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn dispatch(app: &Rc<RefCell<App>>, event: PointerEvent) {
        let schedule = app.borrow_mut().frames.handle(event);
        if schedule {
            request_animation_frame(app.clone());
        }
    }

    fn add_mouse_listener(
        canvas: &HtmlCanvasElement,
        name: &str,
        app: &Rc<RefCell<App>>,
        to_event: fn(&MouseEvent) -> Option<PointerEvent>,
    ) {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if let Some(pointer_event) = to_event(&event) {
                dispatch(&app, pointer_event);
            }
        });
        let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Primary button only
        add_mouse_listener(canvas, "mousedown", &app, |e| {
            (e.button() == 0).then(|| PointerEvent::Down(pointer_pos(e)))
        });
        add_mouse_listener(canvas, "mousemove", &app, |e| {
            Some(PointerEvent::Move(pointer_pos(e)))
        });
        add_mouse_listener(canvas, "mouseup", &app, |e| {
            (e.button() == 0).then_some(PointerEvent::Up)
        });
        add_mouse_listener(canvas, "mouseover", &app, |_| Some(PointerEvent::Enter));
        add_mouse_listener(canvas, "mouseout", &app, |_| Some(PointerEvent::Leave));
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule a frame on");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_callback(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_callback(app: Rc<RefCell<App>>) {
        let reschedule = {
            let mut a = app.borrow_mut();
            let frame = a.frames.run_frame();
            a.draw(&frame.commands);
            frame.reschedule
        };

        if reschedule {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Pull Ball starting...");

    if let Err(e) = wasm_app::run().await {
        log::error!("Startup failed: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pull Ball (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the frame loop through a scripted pointer session and log the ball
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use glam::Vec2;
    use pull_ball::{FrameLoop, PointerEvent, Simulation};

    let script = [
        (0, PointerEvent::Enter),
        (30, PointerEvent::Down(Vec2::new(200.0, 60.0))),
        (90, PointerEvent::Move(Vec2::new(40.0, 200.0))),
        (150, PointerEvent::Up),
        (300, PointerEvent::Leave),
    ];

    let mut frames = FrameLoop::new(Simulation::with_default_surface());
    let mut pending = false;
    let mut bounces = 0;

    for n in 0..=300 {
        for (_, event) in script.iter().filter(|(at, _)| *at == n) {
            pending |= frames.handle(*event);
        }
        if !pending {
            continue;
        }

        let frame = frames.run_frame();
        if frame.report.walls.any() {
            bounces += 1;
        }
        pending = frame.reschedule;

        if n % 60 == 0 {
            let body = frames.simulation().body;
            log::info!(
                "frame {n:3}: pos ({:6.1}, {:6.1}) vel ({:5.2}, {:5.2})",
                body.pos.x,
                body.pos.y,
                body.vel.x,
                body.vel.y
            );
        }
    }

    let sim = frames.simulation();
    println!("\n{} ticks, {} bounces", sim.ticks, bounces);
    println!("{}", sim.snapshot_json());
}
