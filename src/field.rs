// The particle field: a fixed set of particles, the bounds they bounce in,
// and the proximity links drawn between them every frame

use crate::color::Color;
use crate::error::Error;
use crate::particle::{Bounds, Particle};
use crate::surface::Surface;
use log::debug;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Largest absolute velocity component at spawn, in pixels per frame.
    pub max_speed: f64,
    /// Pairs closer than this get a line, fading out towards it.
    pub link_distance: f64,
    pub line_width: f64,
    pub dot_radius: f64,
    pub color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 50,
            max_speed: 0.25,
            link_distance: 100.0,
            line_width: 0.5,
            dot_radius: 2.0,
            color: Color::CYAN,
        }
    }
}

/// A candidate edge between particles `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pair {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// A pair close enough to be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub opacity: f64,
}

/// Linear falloff from 1 at distance 0 to 0 at `link_distance`.
pub fn link_opacity(distance: f64, link_distance: f64) -> f64 {
    (1.0 - distance / link_distance).max(0.0)
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: FieldConfig,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, config: FieldConfig, rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, bounds, config.max_speed));
        }
        ParticleField {
            particles,
            bounds,
            config,
        }
    }

    /// Build a field from known particles, e.g. to replay a specific layout.
    pub fn with_particles(bounds: Bounds, config: FieldConfig, particles: Vec<Particle>) -> Self {
        ParticleField {
            particles,
            bounds,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    // Only the cached bounds change; particles keep flying where they are.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        debug!(
            "field bounds {}x{} -> {}x{}",
            self.bounds.width, self.bounds.height, bounds.width, bounds.height
        );
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Every unordered pair in allocation order, `n * (n - 1) / 2` of them.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |a| {
            (a + 1..particles.len()).map(move |b| Pair {
                a,
                b,
                distance: particles[a].distance_to(&particles[b]),
            })
        })
    }

    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let link_distance = self.config.link_distance;
        self.pairs()
            .filter(move |pair| pair.distance < link_distance)
            .map(move |pair| Link {
                from: self.particles[pair.a].pos,
                to: self.particles[pair.b].pos,
                opacity: link_opacity(pair.distance, link_distance),
            })
    }

    /// Lines first, then dots on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        let config = &self.config;
        for link in self.links() {
            surface.draw_line(config.color, link.opacity, config.line_width, link.from, link.to)?;
        }
        for particle in &self.particles {
            surface.fill_circle(config.color, particle.pos, config.dot_radius)?;
        }
        Ok(())
    }
}
