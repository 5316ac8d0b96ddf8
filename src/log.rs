// Console logging. Imported JS functions can't be called off wasm32, so on
// the host these are no-ops and tests run without a browser.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

// console.time / console.timeEnd around a scope
#[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
