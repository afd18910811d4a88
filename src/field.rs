// The particle field: a fixed set of particles plus the surface size they
// drift across. Particles are created once and only ever handed out as a
// slice, so the count stays the same for the lifetime of the field.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;

// A line to draw between two particles that are close enough to each other
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

/// A fixed set of particles drifting across a `width` x `height` surface.
///
/// Outside the crate the particles can only be read. Neither the slice nor a
/// particle's position can be written to:
///
/// ```compile_fail
/// use particle_field_backend::config::FieldConfig;
/// use particle_field_backend::field::ParticleField;
///
/// let mut field = ParticleField::new(800.0, 600.0, &FieldConfig::default(), &mut rand::thread_rng());
/// let _ = field.particles_mut();
/// ```
///
/// ```compile_fail
/// use particle_field_backend::config::FieldConfig;
/// use particle_field_backend::field::ParticleField;
///
/// let field = ParticleField::new(800.0, 600.0, &FieldConfig::default(), &mut rand::thread_rng());
/// let mut particle = field.particles()[0];
/// particle.pos = [-500.0, 1e9];
/// ```
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    link_distance: f64,
    max_link_alpha: f64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: &FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, width, height, config));
        }

        ParticleField {
            width,
            height,
            particles,
            link_distance: config.link_distance,
            max_link_alpha: config.max_link_alpha,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    // Particles keep their positions, anything now outside the surface gets
    // wrapped on the next update
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.update(width, height);
        }
    }

    // Every unordered pair of particle indices exactly once, i < j
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.particles.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }

    // Line alpha for two particles `distance` apart, None when too far apart
    // to be connected
    pub fn connection_alpha(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some(self.max_link_alpha * (1.0 - distance / self.link_distance))
        } else {
            None
        }
    }

    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.pairs().filter_map(move |(i, j)| {
            let a = &self.particles[i];
            let b = &self.particles[j];
            self.connection_alpha(a.distance_to(b))
                .map(|alpha| Connection {
                    from: a.pos(),
                    to: b.pos(),
                    alpha,
                })
        })
    }
}
