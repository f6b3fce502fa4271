//! Handles the simulated space of the gravity sandbox

pub mod bodies;
pub mod camera;
pub mod indicator;
pub mod transform;

use crate::bodies::{Body, Vec3};
use crate::camera::Camera;
use crate::indicator::{ArrowKind, Indicator, ARROW_COLOR_ACC, ARROW_COLOR_VEL};

/// Everything the sandbox simulates: the bodies, the indicator arrows bound
/// to them, and the camera the scene looks through.
///
/// Every body interacts gravitationally with every other live body. Bodies
/// are only added between updates (when a placement gesture commits) and
/// only removed all at once, never while the force pass is running.
pub struct Space {
    bodies: Vec<Body>,
    indicators: Vec<Indicator>,
    pub camera: Camera,
    /// Next display id to hand out. Keeps counting across clears.
    next_id: usize,
}

impl Space {
    pub fn new() -> Self {
        Space {
            bodies: Vec::new(),
            indicators: Vec::new(),
            camera: Camera::new(),
            next_id: 1,
        }
    }

    /// One simulation step, then the camera and projection pass.
    pub fn update(&mut self, dt: f64) {
        // The force flags are per-step pair bookkeeping. Clearing them is
        // this scene's job; the engine only ever sets them.
        for body in self.bodies.iter_mut() {
            body.force_done = false;
        }

        bodies::tick(&mut self.bodies, dt);

        // Push the current camera pose into everything, then project.
        for body in self.bodies.iter_mut() {
            body.world_offset = self.camera.position;
            body.world_rotation = self.camera.rotation;
            body.draw_pos =
                transform::draw_space(body.pos, body.world_rotation, body.world_offset);
        }
        for arrow in self.indicators.iter_mut() {
            if let Some(parent) = arrow.parent {
                if let Some(body) = self.bodies.get(parent) {
                    arrow.rederive(body);
                }
            }
            arrow.project(self.camera.rotation, self.camera.position);
        }
    }

    /// Add a finished body to the space.
    ///
    /// The body arrives at a screen position; the current pan is subtracted
    /// so it sits where the player actually clicked. It gets a display id
    /// and a pair of bound arrows (acceleration, then velocity).
    pub fn insert(&mut self, mut body: Body) -> usize {
        body.pos = Vec3::new(
            body.pos.x - self.camera.position.x.floor(),
            body.pos.y - self.camera.position.y.floor(),
            0.0,
        );
        body.id = format!("CB{}", self.next_id);
        self.next_id += 1;

        println!("Added body {}: r = {}, m = {}", body.id, body.radius(), body.mass());

        let idx = self.bodies.len();
        let pos = body.pos;
        self.indicators.push(Indicator::bound(
            idx,
            pos,
            ArrowKind::Acceleration,
            ARROW_COLOR_ACC,
        ));
        self.indicators.push(Indicator::bound(
            idx,
            pos,
            ArrowKind::Velocity,
            ARROW_COLOR_VEL,
        ));
        self.bodies.push(body);
        idx
    }

    /// Remove every body and every arrow.
    pub fn clear(&mut self) {
        println!(
            "Cleared {} bodies and {} arrows",
            self.bodies.len(),
            self.indicators.len()
        );
        self.bodies.clear();
        self.indicators.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }
}
