// Drawing seam between the simulation and whatever it renders into.
// The browser build draws through CanvasRenderingContext2d; tests record calls.

use crate::color::Color;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    /// Current drawable width and height in pixels.
    fn bounds(&self) -> (f64, f64);

    fn clear(&mut self);

    /// Filled circle with a shadow glow of `glow_blur` in the same color.
    fn fill_glowing_circle(&mut self, center: [f64; 2], radius: f64, color: Color, glow_blur: f64);

    /// Straight segment at the default line width.
    fn stroke_segment(&mut self, from: [f64; 2], to: [f64; 2], color: Color);
}

// set_fill_style / set_stroke_style take a JsValue in older web-sys releases
#[allow(deprecated)]
impl Surface for CanvasRenderingContext2d {
    fn bounds(&self) -> (f64, f64) {
        match self.canvas() {
            Some(canvas) => (canvas.width() as f64, canvas.height() as f64),
            None => (0.0, 0.0),
        }
    }

    fn clear(&mut self) {
        let (width, height) = self.bounds();
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_glowing_circle(&mut self, center: [f64; 2], radius: f64, color: Color, glow_blur: f64) {
        let style = color.to_css();
        self.set_fill_style(&JsValue::from_str(&style));
        self.begin_path();
        self.set_shadow_color(&style);
        self.set_shadow_blur(glow_blur);
        // Only fails for a negative radius, which callers never pass
        if self
            .arc(center[0], center[1], radius, 0.0, 2.0 * std::f64::consts::PI)
            .is_ok()
        {
            self.fill();
        }
    }

    fn stroke_segment(&mut self, from: [f64; 2], to: [f64; 2], color: Color) {
        self.begin_path();
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
    }
}
