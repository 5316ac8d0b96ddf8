// Particle field state: the live particle collection, the hue counter and the
// random source used for new particles. One `frame` call is one animation step.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::line::Line;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct Field<R = ThreadRng> {
    particles: Vec<Particle>,
    hue: u32,
    config: FieldConfig,
    rng: R,
}

impl Field<ThreadRng> {
    pub fn new(config: FieldConfig) -> Self {
        Field::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Field<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        Field {
            particles: Vec::new(),
            hue: 0,
            config,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn hue(&self) -> u32 {
        self.hue
    }

    /// Adds an already built particle to the end of the collection. It
    /// shrinks by the field's configured decay from then on.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle.with_decay(self.config.size_decay));
    }

    /// Pointer moved to `(x, y)`: append a burst of particles there, all
    /// colored from the same hue snapshot.
    pub fn spawn_at(&mut self, x: f64, y: f64) {
        let hue = self.hue;
        let count = self.config.particles_per_spawn;
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(x, y, hue, &self.config, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Runs one animation step against `surface`.
    ///
    /// Every line in the frame is drawn from pre-update positions: particle
    /// `i` is only moved after all of its pairs `(i, j >= i)` are drawn, and
    /// pairs `(k, i)` with `k < i` were drawn before `i` was reached.
    /// Invisible particles are compacted out after the pass, so each particle
    /// is drawn and updated exactly once per frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        let (width, height) = surface.bounds();
        let link_color = Color::from_u32(self.config.link_color);
        let first_partner = if self.config.connect_self { 0 } else { 1 };

        for i in 0..self.particles.len() {
            for j in i + first_partner..self.particles.len() {
                let (p1, p2) = (&self.particles[i], &self.particles[j]);
                if p1.distance_to(p2) < self.config.link_distance {
                    Line::new(p1, p2).draw(surface, link_color);
                }
            }

            let particle = &mut self.particles[i];
            particle.draw(surface, self.config.glow_blur);
            particle.update(width, height);
        }

        self.particles.retain(|p| !p.is_invisible());
        self.hue = self.hue.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Command, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> Field<StdRng> {
        Field::with_rng(FieldConfig::default(), StdRng::seed_from_u64(3))
    }

    fn still(x: f64, y: f64, size: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], size, Color::from_hue(0))
    }

    fn non_self_segments(surface: &Recorder) -> Vec<([f64; 2], [f64; 2])> {
        surface
            .segments()
            .into_iter()
            .filter(|(from, to)| from != to)
            .collect()
    }

    #[test]
    fn spawn_adds_three_at_pointer() {
        let mut field = field();
        field.spawn_at(50.0, 60.0);
        assert_eq!(field.particles().len(), 3);
        let color = field.particles()[0].color();
        for p in field.particles() {
            assert_eq!(p.pos(), [50.0, 60.0]);
            assert_eq!(p.color(), color);
        }
        assert_eq!(color, Color::from_hue(0));
    }

    #[test]
    fn spawn_uses_current_hue() {
        let mut field = field();
        let mut surface = Recorder::new(100.0, 100.0);
        for _ in 0..5 {
            field.frame(&mut surface);
        }
        field.spawn_at(1.0, 1.0);
        field.spawn_at(2.0, 2.0);
        assert_eq!(field.particles().len(), 6);
        assert!(field.particles().iter().all(|p| p.color() == Color::from_hue(5)));
    }

    #[test]
    fn empty_frames_only_advance_hue() {
        let mut field = field();
        let mut surface = Recorder::new(100.0, 100.0);
        for _ in 0..42 {
            field.frame(&mut surface);
        }
        assert!(field.particles().is_empty());
        assert_eq!(field.hue(), 42);
        assert!(surface.commands.iter().all(|c| *c == Command::Clear));
        assert_eq!(surface.commands.len(), 42);
    }

    #[test]
    fn hue_wraps_instead_of_overflowing() {
        let mut field = field();
        field.hue = u32::MAX;
        field.frame(&mut Recorder::new(10.0, 10.0));
        assert_eq!(field.hue(), 0);
    }

    #[test]
    fn close_particles_are_linked() {
        let mut field = field();
        field.push(still(0.0, 0.0, 5.0));
        field.push(still(30.0, 0.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert_eq!(non_self_segments(&surface), vec![([0.0, 0.0], [30.0, 0.0])]);
    }

    #[test]
    fn distant_particles_are_not_linked() {
        let mut field = field();
        field.push(still(0.0, 0.0, 5.0));
        field.push(still(100.0, 0.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert!(non_self_segments(&surface).is_empty());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut field = field();
        field.push(still(0.0, 0.0, 5.0));
        field.push(still(50.0, 0.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert!(non_self_segments(&surface).is_empty());
    }

    #[test]
    fn self_pairs_draw_zero_length_lines() {
        let mut field = field();
        field.push(still(10.0, 10.0, 5.0));
        field.push(still(150.0, 150.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert_eq!(
            surface.segments(),
            vec![([10.0, 10.0], [10.0, 10.0]), ([150.0, 150.0], [150.0, 150.0])]
        );
    }

    #[test]
    fn self_pairs_can_be_disabled() {
        let config = FieldConfig {
            connect_self: false,
            ..FieldConfig::default()
        };
        let mut field = Field::with_rng(config, StdRng::seed_from_u64(3));
        field.push(still(10.0, 10.0, 5.0));
        field.push(still(20.0, 10.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert_eq!(surface.segments(), vec![([10.0, 10.0], [20.0, 10.0])]);
    }

    #[test]
    fn lines_use_positions_before_update() {
        let mut field = field();
        field.push(Particle::new([0.0, 0.0], [5.0, 0.0], 5.0, Color::from_hue(0)));
        field.push(Particle::new([20.0, 0.0], [-5.0, 0.0], 5.0, Color::from_hue(0)));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);
        assert_eq!(non_self_segments(&surface), vec![([0.0, 0.0], [20.0, 0.0])]);
        assert_eq!(field.particles()[0].pos(), [5.0, 0.0]);
        assert_eq!(field.particles()[1].pos(), [15.0, 0.0]);
    }

    #[test]
    fn draw_order_is_lines_then_particle() {
        let mut field = field();
        field.push(still(0.0, 0.0, 5.0));
        field.push(still(10.0, 0.0, 5.0));
        let mut surface = Recorder::new(200.0, 200.0);
        field.frame(&mut surface);

        let kinds: Vec<&str> = surface
            .commands
            .iter()
            .map(|c| match c {
                Command::Clear => "clear",
                Command::Circle { .. } => "circle",
                Command::Segment { .. } => "segment",
            })
            .collect();
        assert_eq!(kinds, vec!["clear", "segment", "segment", "circle", "segment", "circle"]);
    }

    #[test]
    fn removal_skips_nothing_and_visits_once() {
        let mut field = field();
        field.push(Particle::new([10.0, 10.0], [1.0, 0.0], 0.05, Color::from_hue(0)));
        field.push(Particle::new([100.0, 10.0], [1.0, 0.0], 5.0, Color::from_hue(0)));
        field.push(Particle::new([190.0, 10.0], [1.0, 0.0], 5.0, Color::from_hue(0)));
        let mut surface = Recorder::new(400.0, 400.0);
        field.frame(&mut surface);

        assert_eq!(surface.circles(), vec![[10.0, 10.0], [100.0, 10.0], [190.0, 10.0]]);
        let survivors: Vec<[f64; 2]> = field.particles().iter().map(|p| p.pos()).collect();
        assert_eq!(survivors, vec![[101.0, 10.0], [191.0, 10.0]]);
        for p in field.particles() {
            assert_eq!(p.size(), 5.0 - 0.1);
        }
    }

    #[test]
    fn all_particles_eventually_disappear() {
        let mut field = field();
        let mut surface = Recorder::new(300.0, 300.0);
        field.spawn_at(150.0, 150.0);
        field.spawn_at(20.0, 280.0);
        // largest spawn size is just under 12.0, so roughly 120 frames at most
        for _ in 0..130 {
            field.frame(&mut surface);
        }
        assert!(field.particles().is_empty());
        assert_eq!(field.hue(), 130);
    }

    #[test]
    fn pushed_particles_follow_configured_decay() {
        let config = FieldConfig {
            size_decay: 0.5,
            ..FieldConfig::default()
        };
        let mut field = Field::with_rng(config, StdRng::seed_from_u64(3));
        field.push(still(100.0, 100.0, 5.0));
        field.frame(&mut Recorder::new(200.0, 200.0));
        assert_eq!(field.particles()[0].size(), 4.5);

        for _ in 0..8 {
            field.frame(&mut Recorder::new(200.0, 200.0));
        }
        assert_eq!(field.particles()[0].size(), 0.5);
        field.frame(&mut Recorder::new(200.0, 200.0));
        assert!(field.particles().is_empty());
    }

    #[test]
    fn bounds_come_from_surface() {
        let mut narrow = field();
        narrow.push(Particle::new([49.0, 5.0], [2.0, 0.0], 5.0, Color::from_hue(0)));
        narrow.frame(&mut Recorder::new(50.0, 50.0));
        assert_eq!(narrow.particles()[0].vel(), [-2.0, 0.0]);

        let mut wide = field();
        wide.push(Particle::new([49.0, 5.0], [2.0, 0.0], 5.0, Color::from_hue(0)));
        wide.frame(&mut Recorder::new(500.0, 50.0));
        assert_eq!(wide.particles()[0].vel(), [2.0, 0.0]);
    }
}
