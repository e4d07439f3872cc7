//! Moonfield entry point
//!
//! Handles platform-specific initialization and runs the sketch loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_sketch {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use moonfield::consts::{GUIDE_HALF_LEN, GUIDE_WIDTH};
    use moonfield::input::{self, CameraCommand, CameraTuning};
    use moonfield::renderer::{RenderState, Vertex, colors, shapes};
    use moonfield::sim::Scene;
    use moonfield::view::Viewport;

    /// Disc tessellation quality.
    const DISC_SEGMENTS: u32 = 24;

    /// Sketch instance holding all state
    struct Sketch {
        scene: Scene,
        viewport: Viewport,
        tuning: CameraTuning,
        render_state: Option<RenderState>,
        /// Camera commands queued by key events since the last frame.
        pending: Vec<CameraCommand>,
    }

    impl Sketch {
        fn new() -> Self {
            Self {
                scene: Scene::standard(),
                viewport: Viewport::start(),
                tuning: CameraTuning::default(),
                render_state: None,
                pending: Vec::new(),
            }
        }

        /// Advance the simulation and camera, then draw one frame.
        fn frame(&mut self, mark: f64) {
            let f = self.scene.advance(mark);

            for cmd in self.pending.drain(..) {
                self.viewport.apply(cmd, &self.tuning);
            }

            let vertices = build_vertices(&self.scene, &self.viewport, f);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Project the scene into an NDC triangle list: interpolated bodies,
    /// the origin marker, then the camera guide lines.
    fn build_vertices(scene: &Scene, viewport: &Viewport, f: f32) -> Vec<Vertex> {
        let mut vertices = Vec::new();

        for body in scene.bodies() {
            if let Some(p) = viewport.project(body.interpolated(f)) {
                vertices.extend(shapes::disc(
                    p.center,
                    body.radius * p.scale,
                    body.style,
                    DISC_SEGMENTS,
                ));
            }
        }

        let marker = scene.marker();
        if let Some(p) = viewport.project(marker.interpolated(f)) {
            vertices.extend(shapes::disc(
                p.center,
                marker.radius * p.scale,
                marker.style,
                DISC_SEGMENTS,
            ));
        }

        for guide in viewport.guides(GUIDE_HALF_LEN) {
            vertices.extend(shapes::line(
                guide.a,
                guide.b,
                GUIDE_WIDTH,
                colors::GUIDES[guide.axis],
            ));
        }

        vertices
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Moonfield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let sketch = Rc::new(RefCell::new(Sketch::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
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

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        sketch.borrow_mut().render_state = Some(render_state);

        setup_key_handler(sketch.clone());

        // Start the frame loop
        request_animation_frame(sketch);

        log::info!("Moonfield running!");
    }

    /// Queue camera commands from keydown events; unbound keys are ignored.
    fn setup_key_handler(sketch: Rc<RefCell<Sketch>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(cmd) = input::command_for(&event.key()) {
                sketch.borrow_mut().pending.push(cmd);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(sketch: Rc<RefCell<Sketch>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |mark: f64| {
            frame_loop(sketch, mark);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(sketch: Rc<RefCell<Sketch>>, mark: f64) {
        // The callback timestamp is the simulation's time mark
        sketch.borrow_mut().frame(mark);
        request_animation_frame(sketch);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_sketch::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Moonfield (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the interactive version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use moonfield::consts::STEP_INTERVAL_MS;
    use moonfield::sim::Scene;

    let mut scene = Scene::standard();
    for step in 0..50u32 {
        // Marks spaced two intervals apart so every call commits a step
        let mark = (step as f64 + 1.0) * STEP_INTERVAL_MS * 2.0;
        scene.advance(mark);
    }

    for (i, body) in scene.bodies().iter().enumerate() {
        log::info!("body {}: {:?}", i, body.step_end);
    }
}
