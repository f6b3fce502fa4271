//! Handles bodies and the gravity between them

use euclid::default::{Point2D, Vector3D};

/// Positions, velocities and forces all live in this.
/// The z component only matters to the camera; the integrator never touches it.
pub type Vec3 = Vector3D<f64>;

/// One simulated mass.
/// Mass is always derived from density and radius; there is no way to set it
/// directly. Use `set_radius`/`set_density` and the mass follows.
#[derive(Clone, Debug)]
pub struct Body {
    /// Display id, like "CB4". Assigned by the Space on insert.
    pub id: String,
    radius: f64,
    density: f64,
    mass: f64,
    /// Radius limits this body clamps to. Player-drawn planets get the
    /// planet limits; free bodies just have to stay positive.
    radius_min: f64,
    radius_max: f64,
    pub pos: Vec3,
    pub vel: Vec3,
    pub acc: Vec3,
    /// Force accumulator, zeroed again at the end of every step.
    pub force: Vec3,
    /// True once this body has run its force pass for the current step.
    /// The Space clears it at the start of every step; the engine only
    /// ever sets it.
    pub force_done: bool,
    /// Camera pose as of the last update, pushed in by the Space.
    pub world_offset: Vec3,
    pub world_rotation: Vec3,
    /// Where the body lands on screen, after rotation and pan.
    pub draw_pos: Point2D<f64>,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    /// Color is stored as 0xRRGGBB
    pub outline: u32,
}

impl Body {
    /// A body with no radius limits beyond staying positive.
    pub fn new(center: Vec3, radius: f64, density: f64) -> Self {
        Body::with_limits(center, radius, density, 1.0, std::f64::INFINITY)
    }

    /// A player-drawn planet. Starts at the minimum radius; the sizing drag
    /// grows it from there, clamped to the planet limits.
    pub fn planet(center: Vec3) -> Self {
        Body::with_limits(
            center,
            0.0,
            PLANET_DEFAULT_DENSITY,
            PLANET_MIN_RADIUS,
            PLANET_MAX_RADIUS,
        )
    }

    fn with_limits(center: Vec3, radius: f64, density: f64, min: f64, max: f64) -> Self {
        let radius = radius.max(min).min(max);
        Body {
            id: "0".to_string(),
            radius,
            density,
            mass: ball_mass(density, radius),
            radius_min: min,
            radius_max: max,
            pos: Vec3::new(center.x, center.y, 0.0),
            vel: Vec3::zero(),
            acc: Vec3::zero(),
            force: Vec3::zero(),
            force_done: false,
            world_offset: Vec3::zero(),
            world_rotation: Vec3::zero(),
            draw_pos: Point2D::new(center.x, center.y),
            color: PLANET_COLOR,
            outline: PLANET_OUTLINE,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the radius, clamped to this body's limits. Mass is recomputed.
    pub fn set_radius(&mut self, r: f64) {
        self.radius = r.max(self.radius_min).min(self.radius_max);
        self.mass = ball_mass(self.density, self.radius);
    }

    /// Set the density and recompute the mass. Zero or negative densities
    /// are ignored; a body never loses all its mass.
    pub fn set_density(&mut self, d: f64) {
        if d > 0.0 {
            self.density = d;
            self.mass = ball_mass(self.density, self.radius);
        }
    }

    /// Take a drawn arrow vector and turn it into this body's starting
    /// velocity. The arrow is in pixels; the ratio maps it down to
    /// simulation speed. z is always zero.
    pub fn commit_velocity(&mut self, arrow: Vec3) {
        self.vel = Vec3::new(
            arrow.x * ARROW_TO_VEL_RATIO,
            arrow.y * ARROW_TO_VEL_RATIO,
            0.0,
        );
    }

    /// Set the velocity exactly, for preset scenes. z is always zero.
    pub fn set_velocity(&mut self, v: Vec3) {
        self.vel = Vec3::new(v.x, v.y, 0.0);
    }

    /// Integrate this body one step from its accumulated force.
    /// The half-step acceleration term scales linearly with dt, not
    /// quadratically.
    pub fn advance(&mut self, dt: f64) {
        self.acc.x = self.force.x / self.mass;
        self.acc.y = self.force.y / self.mass;

        self.pos.x += self.vel.x * dt + 0.5 * self.acc.x * dt;
        self.pos.y += self.vel.y * dt + 0.5 * self.acc.y * dt;

        self.vel.x += self.acc.x * dt;
        self.vel.y += self.acc.y * dt;

        self.force = Vec3::zero();
    }
}

/// Advance every body by one step.
///
/// Each pair's force is computed once and written to both sides: the first
/// body of a pair to run its pass does the writing, and the partner skips
/// the pair when its own turn comes (its `force_done` flag is the tell).
/// The caller must clear every `force_done` flag before calling this; the
/// engine only sets them.
pub fn tick(bodies: &mut [Body], dt: f64) {
    for i in 0..bodies.len() {
        accumulate_forces(i, bodies);
        bodies[i].advance(dt);
    }
}

/// The force pass for one body: pull in every pair it is the first to see.
fn accumulate_forces(i: usize, bodies: &mut [Body]) {
    for j in 0..bodies.len() {
        if j == i || bodies[j].force_done {
            continue;
        }
        let f = gravity(&bodies[i], &bodies[j]);
        bodies[i].force += f;
        bodies[j].force -= f;
    }
    bodies[i].force_done = true;
}

/// Gravitational pull of `other` on `body`, with G = 1.
///
/// Coincident bodies have no defined direction, so anything closer than
/// `MIN_SEPARATION` contributes nothing this step.
fn gravity(body: &Body, other: &Body) -> Vec3 {
    let d = Vec3::new(other.pos.x - body.pos.x, other.pos.y - body.pos.y, 0.0);
    let dist = (other.pos - body.pos).length();
    if dist <= MIN_SEPARATION {
        return Vec3::zero();
    }
    // Cubed, not squared: the directional vector is not normalized, so the
    // extra power folds the normalization into the inverse-square law.
    let factor = body.mass * other.mass / (dist * dist * dist);
    Vec3::new(d.x * factor, d.y * factor, 0.0)
}

/// Mass of a uniform ball.
pub fn ball_mass(density: f64, radius: f64) -> f64 {
    density * (4.0 / 3.0 * std::f64::consts::PI * radius * radius * radius)
}

/// Fixed step fed to the integrator once per frame.
pub const DELTA_T: f64 = 0.1;
/// Below this separation a pair contributes no force for the step.
pub const MIN_SEPARATION: f64 = 1e-9;
/// Pixels of drawn arrow per unit of committed velocity.
pub const ARROW_TO_VEL_RATIO: f64 = 0.05;

pub const PLANET_DEFAULT_DENSITY: f64 = 0.005;
pub const PLANET_MIN_RADIUS: f64 = 5.0;
pub const PLANET_MAX_RADIUS: f64 = 100.0;
const PLANET_COLOR: u32 = 0xd8d3c9; // chalky white
const PLANET_OUTLINE: u32 = 0x8a857c; // darker chalk
