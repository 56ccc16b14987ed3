// Simple particle struct to keep track of individual position and velocity,
// plus the surface bounds it bounces between

use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Bounds {
        Bounds { width, height }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
        }
    }

    /// Random position in `[0, width) x [0, height)`, random velocity in
    /// `[-max_speed, max_speed)` on each axis.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, max_speed: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * bounds.width as f64;
        let pos_y = rng.gen::<f64>() * bounds.height as f64;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        Particle::new(pos_x, pos_y, vel_x, vel_y)
    }

    // Move first, then bounce. A particle may sit past the edge for a frame;
    // it is never clamped back.
    pub fn step(&mut self, bounds: Bounds) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let limits = [bounds.width as f64, bounds.height as f64];
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > limits[axis] {
                self.vel[axis] *= -1.0;
            }
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
