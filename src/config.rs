use std::ops::Range;

/// Tunables for the particle field. `Default` reproduces the stock effect.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Particles closer than this are joined by a line
    pub link_distance: f64,
    /// RRGGBBAA color of connecting lines
    pub link_color: u32,
    /// Also pair every particle with itself, which draws a zero-length line
    pub connect_self: bool,
    pub glow_blur: f64,
    /// Size lost per frame
    pub size_decay: f64,
    pub spawn_size: Range<f64>,
    /// Range for each velocity component of a new particle
    pub spawn_speed: Range<f64>,
    pub particles_per_spawn: usize,
}

impl FieldConfig {
    pub const LINK_DISTANCE: f64 = 50.0;
    pub const LINK_COLOR: u32 = 0xffffff3d;
    pub const GLOW_BLUR: f64 = 15.0;
    pub const SIZE_DECAY: f64 = 0.1;
    pub const PARTICLES_PER_SPAWN: usize = 3;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            link_distance: FieldConfig::LINK_DISTANCE,
            link_color: FieldConfig::LINK_COLOR,
            connect_self: true,
            glow_blur: FieldConfig::GLOW_BLUR,
            size_decay: FieldConfig::SIZE_DECAY,
            spawn_size: 2.0..12.0,
            spawn_speed: -2.0..2.0,
            particles_per_spawn: FieldConfig::PARTICLES_PER_SPAWN,
        }
    }
}
