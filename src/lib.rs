mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod field;
pub mod input;
pub mod line;
pub mod log;
pub mod particle;
pub mod surface;
pub mod viewport;

use crate::animation::{FrameLoop, Tick};
use crate::config::FieldConfig;
use crate::field::Field;
use crate::input::PointerBinding;
use crate::viewport::ViewportBinding;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A particle field mounted on a canvas element.
///
/// Mounting sizes the canvas to the viewport, listens for resizes and pointer
/// movement, and starts the frame loop. Dropping it (or `unmount`) stops the
/// loop, cancels the pending frame and removes every listener.
#[wasm_bindgen]
pub struct ParticleCanvas {
    window: Window,
    frame_loop: Rc<RefCell<FrameLoop>>,
    frame_request: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    _viewport: ViewportBinding,
    _pointer: PointerBinding,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleCanvas, JsValue> {
        ParticleCanvas::with_config(canvas, FieldConfig::default())
    }

    pub fn mount_by_id(id: &str) -> Result<ParticleCanvas, JsValue> {
        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        ParticleCanvas::new(canvas)
    }

    pub fn particle_count(&self) -> usize {
        self.frame_loop.borrow().field().particles().len()
    }

    /// Particle positions flattened as `[x0, y0, x1, y1, ...]`.
    pub fn particle_positions(&self) -> Vec<f64> {
        self.frame_loop
            .borrow()
            .field()
            .particles()
            .iter()
            .flat_map(|p| p.pos().to_vec())
            .collect()
    }

    pub fn hue(&self) -> u32 {
        self.frame_loop.borrow().field().hue()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }

    /// Stops the frame loop; listeners stay registered until unmount.
    pub fn stop(&self) {
        self.frame_loop.borrow().stop_token().stop();
        if let Some(id) = self.frame_request.take() {
            if self.window.cancel_animation_frame(id).is_err() {
                log::warn("failed to cancel animation frame");
            }
        }
    }

    pub fn unmount(self) {}
}

impl ParticleCanvas {
    pub fn with_config(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<ParticleCanvas, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let context = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let viewport = ViewportBinding::attach(&window, &canvas)?;

        let frame_loop = Rc::new(RefCell::new(FrameLoop::new(Field::new(config))));
        let pointer = {
            let frame_loop = frame_loop.clone();
            PointerBinding::attach(&canvas, move |x, y| {
                frame_loop.borrow_mut().field_mut().spawn_at(x, y);
            })?
        };

        let frame_request = Rc::new(Cell::new(None));
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        *frame_callback.borrow_mut() = Some(frame_closure(
            window.clone(),
            context,
            frame_loop.clone(),
            frame_request.clone(),
            Rc::downgrade(&frame_callback),
        ));
        request_frame(&window, &frame_callback, &frame_request)?;

        log::info("particle field mounted");
        Ok(ParticleCanvas {
            window,
            frame_loop,
            frame_request,
            frame_callback,
            _viewport: viewport,
            _pointer: pointer,
        })
    }
}

impl Drop for ParticleCanvas {
    fn drop(&mut self) {
        self.stop();
        self.frame_callback.borrow_mut().take();
        log::info("particle field unmounted");
    }
}

// The closure reaches itself through a Weak so dropping the canvas frees it.
fn frame_closure(
    window: Window,
    mut context: CanvasRenderingContext2d,
    frame_loop: Rc<RefCell<FrameLoop>>,
    frame_request: Rc<Cell<Option<i32>>>,
    callback: Weak<RefCell<Option<Closure<dyn FnMut()>>>>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        frame_request.set(None);
        let tick = frame_loop.borrow_mut().tick(&mut context);
        if tick == Tick::Stopped {
            return;
        }
        if let Some(callback) = callback.upgrade() {
            if let Err(err) = request_frame(&window, &callback, &frame_request) {
                log::warn(&format!("failed to schedule frame: {:?}", err));
            }
        }
    }) as Box<dyn FnMut()>)
}

fn request_frame(
    window: &Window,
    callback: &RefCell<Option<Closure<dyn FnMut()>>>,
    frame_request: &Cell<Option<i32>>,
) -> Result<(), JsValue> {
    if let Some(closure) = callback.borrow().as_ref() {
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        frame_request.set(Some(id));
    }
    Ok(())
}
