//! Pointer-reactive particle field rendered behind the page content.
//!
//! The field owns every piece of per-frame state (particles, pointer, the
//! shared excited hue) so independent instances can coexist and tear down
//! cleanly. All coordinates are surface pixels; the frontend only reads the
//! results back out to draw them.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Hsla;
use crate::constants::{
    AREA_PER_PARTICLE, BASE_HUE_MIN, BASE_HUE_SPAN, BASE_LIGHTNESS, CONNECT_MAX_OPACITY,
    CONNECT_RADIUS, EXCITED_LIGHTNESS, HUE_STEP, PARTICLE_ALPHA, POINTER_RADIUS, RADIUS_MIN,
    RADIUS_SPAN, REPULSION_DIVISOR, REPULSION_SCALE, SPEED_SPAN, VELOCITY_DAMPING,
};

/// One simulated point in the field.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Color assigned at creation; restored whenever the pointer is far away.
    pub base_color: Hsla,
    /// Color drawn this frame.
    pub color: Hsla,
}

/// Line segment produced by the pairwise connection pass.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Vec2,
    hue: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            hue: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Particle budget for a surface: floor(area / 15000).
    pub fn particle_count_for(width: f32, height: f32) -> usize {
        (width * height / AREA_PER_PARTICLE).floor() as usize
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Shared hue driving the excited color this frame.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Adopt new surface dimensions and rebuild the whole collection.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Record the latest pointer position in surface coordinates.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    fn populate(&mut self) {
        let count = Self::particle_count_for(self.width, self.height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let base = Hsla::new(
                BASE_HUE_MIN + self.rng.gen::<f32>() * BASE_HUE_SPAN,
                100.0,
                BASE_LIGHTNESS,
                PARTICLE_ALPHA,
            );
            self.particles.push(Particle {
                position: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                velocity: Vec2::new(
                    self.rng.gen::<f32>() * SPEED_SPAN - SPEED_SPAN / 2.0,
                    self.rng.gen::<f32>() * SPEED_SPAN - SPEED_SPAN / 2.0,
                ),
                radius: RADIUS_MIN + self.rng.gen::<f32>() * RADIUS_SPAN,
                base_color: base,
                color: base,
            });
        }
        log::debug!(
            "field rebuilt: {}x{}, {} particles",
            self.width,
            self.height,
            count
        );
    }

    /// Advance the simulation one frame.
    pub fn step(&mut self) {
        self.hue = (self.hue + HUE_STEP) % 360.0;
        let excited = Hsla::new(self.hue, 100.0, EXCITED_LIGHTNESS, PARTICLE_ALPHA);

        for p in &mut self.particles {
            let delta = p.position - self.pointer;
            let distance = delta.length();
            if distance < POINTER_RADIUS {
                // Push away from the pointer, harder the closer it sits.
                let angle = delta.y.atan2(delta.x);
                let force = (POINTER_RADIUS - distance) / REPULSION_DIVISOR;
                p.velocity.x += angle.cos() * force * REPULSION_SCALE;
                p.velocity.y += angle.sin() * force * REPULSION_SCALE;
                p.color = excited;
            } else {
                p.color = p.base_color;
            }

            p.velocity *= VELOCITY_DAMPING;
            p.position += p.velocity;

            // Edge-snap wrap; plain comparisons, not modulo.
            if p.position.x < 0.0 {
                p.position.x = self.width;
            }
            if p.position.x > self.width {
                p.position.x = 0.0;
            }
            if p.position.y < 0.0 {
                p.position.y = self.height;
            }
            if p.position.y > self.height {
                p.position.y = 0.0;
            }
        }
    }

    /// Collect the line segments between nearby pairs into `out`.
    ///
    /// Quadratic over the collection, which is fine at one particle per
    /// 15000 px²; a spatial grid would only pay off at much higher density.
    pub fn connections(&self, out: &mut Vec<Connection>) {
        out.clear();
        for i in 0..self.particles.len() {
            for j in i..self.particles.len() {
                let from = self.particles[i].position;
                let to = self.particles[j].position;
                if let Some(opacity) = connection_opacity(from.distance(to)) {
                    out.push(Connection { from, to, opacity });
                }
            }
        }
    }
}

/// Opacity of the segment joining a pair at `distance`, if the pair connects.
#[inline]
pub fn connection_opacity(distance: f32) -> Option<f32> {
    (distance < CONNECT_RADIUS).then(|| (1.0 - distance / CONNECT_RADIUS) * CONNECT_MAX_OPACITY)
}
