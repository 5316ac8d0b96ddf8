// Connector between two nearby particles. Built and drawn within one frame, never stored.

use crate::color::Color;
use crate::particle::Particle;
use crate::surface::Surface;

pub struct Line<'a> {
    pub p1: &'a Particle,
    pub p2: &'a Particle,
}

impl<'a> Line<'a> {
    pub fn new(p1: &'a Particle, p2: &'a Particle) -> Line<'a> {
        Line { p1, p2 }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) {
        surface.stroke_segment(self.p1.pos(), self.p2.pos(), color);
    }
}
