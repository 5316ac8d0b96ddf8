// Keeps the canvas backing store the same size as the browser viewport.
// The resize listener lives as long as the binding and is removed on drop.

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

/// Whole pixels for a viewport extent; anything negative or NaN is zero.
pub fn pixel_extent(extent: f64) -> u32 {
    if extent.is_nan() || extent <= 0.0 {
        0
    } else if extent >= u32::MAX as f64 {
        u32::MAX
    } else {
        extent.floor() as u32
    }
}

/// Sets the canvas width/height to the window's innerWidth/innerHeight.
pub fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(u32, u32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;

    let (width, height) = (pixel_extent(width), pixel_extent(height));
    canvas.set_height(height);
    canvas.set_width(width);
    Ok((width, height))
}

pub struct ViewportBinding {
    window: Window,
    listener: Closure<dyn FnMut()>,
}

impl ViewportBinding {
    pub fn attach(window: &Window, canvas: &HtmlCanvasElement) -> Result<ViewportBinding, JsValue> {
        let (width, height) = fit_to_viewport(window, canvas)?;
        log::info(&format!("canvas sized to {}x{}", width, height));

        let listener = {
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                if let Err(err) = fit_to_viewport(&window, &canvas) {
                    log::warn(&format!("failed to resize canvas: {:?}", err));
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;

        Ok(ViewportBinding {
            window: window.clone(),
            listener,
        })
    }
}

impl Drop for ViewportBinding {
    fn drop(&mut self) {
        let removed = self.window.remove_event_listener_with_callback(
            "resize",
            self.listener.as_ref().unchecked_ref(),
        );
        if removed.is_err() {
            log::warn("failed to remove resize listener");
        }
    }
}
