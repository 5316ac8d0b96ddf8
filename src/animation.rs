// Frame driver. The browser calls `tick` from requestAnimationFrame and only
// schedules another frame while the loop reports `Tick::Continue`.

use crate::field::Field;
use crate::surface::Surface;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

#[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
use crate::log::Timer;

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stopped: Rc<Cell<bool>>,
}

impl StopToken {
    pub fn new() -> Self {
        StopToken::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stopped,
}

pub struct FrameLoop<R = ThreadRng> {
    field: Field<R>,
    stop: StopToken,
    frames: u64,
}

impl<R: Rng> FrameLoop<R> {
    pub fn new(field: Field<R>) -> Self {
        FrameLoop {
            field,
            stop: StopToken::new(),
            frames: 0,
        }
    }

    pub fn field(&self) -> &Field<R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field<R> {
        &mut self.field
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    /// Frames rendered since the loop was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Tick {
        if self.stop.is_stopped() {
            return Tick::Stopped;
        }

        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        let _timer = Timer::new("particle-field frame");

        self.field.frame(surface);
        self.frames += 1;
        Tick::Continue
    }

    /// Ticks until the token is stopped or `max_frames` have run.
    /// Returns the number of frames rendered.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S, max_frames: u64) -> u64 {
        let mut rendered = 0;
        while rendered < max_frames && self.tick(surface) == Tick::Continue {
            rendered += 1;
        }
        rendered
    }
}
