// Particle struct tracking position, velocity, size and color.
// Each frame it moves, bounces off the surface edges and shrinks until invisible.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    size: f64,
    color: Color,
    invisible: bool,
    decay: f64,
}

impl Particle {
    /// Exact particle with the stock decay of `FieldConfig::SIZE_DECAY` per
    /// update. `with_decay` overrides it.
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
            invisible: false,
            decay: FieldConfig::SIZE_DECAY,
        }
    }

    // Random size and velocity from the configured ranges, color from the hue counter
    pub fn spawn<R: Rng>(
        x: f64,
        y: f64,
        hue: u32,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Particle {
        let size = rng.gen_range(config.spawn_size.start, config.spawn_size.end);
        let vel_x = rng.gen_range(config.spawn_speed.start, config.spawn_speed.end);
        let vel_y = rng.gen_range(config.spawn_speed.start, config.spawn_speed.end);
        Particle::new([x, y], [vel_x, vel_y], size, Color::from_hue(hue))
            .with_decay(config.size_decay)
    }

    pub fn with_decay(self, decay: f64) -> Particle {
        Particle { decay, ..self }
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }

    /// Moves one step, reflects velocity on any axis that left
    /// `[0, width] x [0, height]`, then shrinks. Once the size is at or
    /// below one decay step the particle turns invisible for good.
    pub fn update(&mut self, bounds_width: f64, bounds_height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if self.pos[0] < 0.0 || self.pos[0] > bounds_width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > bounds_height {
            self.vel[1] = -self.vel[1];
        }

        if self.size > self.decay {
            self.size -= self.decay;
        } else {
            self.invisible = true;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, glow_blur: f64) {
        if self.size <= 0.0 {
            return;
        }
        surface.fill_glowing_circle(self.pos, self.size, self.color, glow_blur);
    }
}
