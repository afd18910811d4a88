// Simple particle struct to keep track of individual position, velocity, size and opacity.
// Only the position changes once a particle has been created.

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: [f64; 2],
    vel: [f64; 2],
    radius: f64,
    opacity: f64,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    // Uniformly placed anywhere on a width x height surface
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * config.max_speed * 2.0 - config.max_speed;
        let vel_y = rng.gen::<f64>() * config.max_speed * 2.0 - config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let opacity =
            rng.gen::<f64>() * (config.max_opacity - config.min_opacity) + config.min_opacity;

        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, opacity)
    }

    pub fn pos(&self) -> [f64; 2] {
        self.pos
    }

    pub fn vel(&self) -> [f64; 2] {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    // Moves one step, then wraps each axis to the opposite edge once it
    // strictly passes a border
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap(self.pos[0] + self.vel[0], width);
        self.pos[1] = wrap(self.pos[1] + self.vel[1], height);
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(
            &glm::vec2(self.pos[0], self.pos[1]),
            &glm::vec2(other.pos[0], other.pos[1]),
        )
    }
}

fn wrap(coord: f64, extent: f64) -> f64 {
    if coord > extent {
        0.0
    } else if coord < 0.0 {
        extent
    } else {
        coord
    }
}
