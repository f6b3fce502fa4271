//! Scatters a ring of debris around a point.

use gravity::bodies::{Body, Vec3};

/// A Ring sprinkles `count` small bodies around `center` at roughly the
/// `orbit` distance, each with a tangential starting velocity. The same
/// ring always scatters the same way; the rng is seeded from the ring's
/// own numbers.
pub struct Ring {
    pub center: Vec3,
    pub count: usize,
    /// Mean distance from the center.
    pub orbit: f64,
    /// Mean radius of each debris body.
    pub body_radius: f64,
    /// Standard deviation of the orbit distance. Zero means a perfect circle.
    pub jitter: f64,
    /// Tangential speed given to every body.
    pub speed: f64,
    pub seed: u64,
    pub clockwise: bool,
}

impl Ring {
    /// Build the actual debris bodies.
    pub fn build(&self) -> Vec<Body> {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        use rand_distr::{Distribution, Normal};

        let seed = self
            .orbit
            .to_bits()
            .wrapping_add(self.body_radius.to_bits())
            .wrapping_add(self.speed.to_bits())
            .wrapping_add(self.count as u64)
            .wrapping_add(self.seed)
            .wrapping_add(self.clockwise as u64);
        let mut rand = SmallRng::seed_from_u64(seed);
        let normal = if self.jitter > 0.0 {
            Some(Normal::new(0.0, self.jitter).unwrap())
        } else {
            None
        };

        let spin = if self.clockwise { -1.0 } else { 1.0 };

        let mut debris = Vec::with_capacity(self.count);
        for n in 0..self.count {
            let theta = 2.0 * std::f64::consts::PI * (n as f64) / (self.count as f64);
            let orbit = self.orbit
                + match &normal {
                    Some(normal) => normal.sample(&mut rand),
                    None => 0.0,
                };

            // A little variety in the rubble. Mostly rock, some ice, the
            // occasional iron chunk, each with its own density.
            let kind = rand.gen_range(0, 100);
            let (density, color, outline): (f64, u32, u32) = if kind < 75 {
                (0.004, 0x6b5d4f, 0x4c4138) // rock
            } else if kind < 92 {
                (0.002, 0xb8d8e8, 0x89a8b8) // ice
            } else {
                (0.009, 0xc9d2e4, 0x8d99ad) // iron
            };
            let radius = self.body_radius * rand.gen_range(0.8, 1.2);

            let mut body = Body::new(
                Vec3::new(
                    self.center.x + theta.cos() * orbit,
                    self.center.y + theta.sin() * orbit,
                    0.0,
                ),
                radius,
                density,
            );
            body.color = color;
            body.outline = outline;
            body.set_velocity(Vec3::new(
                -theta.sin() * self.speed * spin,
                theta.cos() * self.speed * spin,
                0.0,
            ));
            debris.push(body);
        }

        debris
    }
}

/// The tangential speed of a circular orbit at `orbit` around a mass,
/// with G = 1 like the rest of the sandbox.
pub fn circular_speed(central_mass: f64, orbit: f64) -> f64 {
    (central_mass * orbit.recip()).sqrt()
}
