// Pointer-move listener on the canvas. Reports coordinates relative to the
// canvas origin and unregisters itself on drop.

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

pub struct PointerBinding {
    target: HtmlCanvasElement,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerBinding {
    pub fn attach<F>(canvas: &HtmlCanvasElement, mut on_move: F) -> Result<PointerBinding, JsValue>
    where
        F: FnMut(f64, f64) + 'static,
    {
        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            on_move(event.offset_x() as f64, event.offset_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())?;

        Ok(PointerBinding {
            target: canvas.clone(),
            listener,
        })
    }
}

impl Drop for PointerBinding {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            "mousemove",
            self.listener.as_ref().unchecked_ref(),
        );
        if removed.is_err() {
            log::warn("failed to remove mousemove listener");
        }
    }
}
