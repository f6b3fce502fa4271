//! Arrows showing a body's velocity or acceleration, plus the freestanding
//! arrow the player drags out to aim a new body's starting velocity.

use crate::bodies::{Body, Vec3, ARROW_TO_VEL_RATIO};
use crate::transform;
use euclid::default::Point2D;

/// What a bound arrow tracks on its body. `None` is the freestanding
/// aiming arrow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrowKind {
    Velocity,
    Acceleration,
    None,
}

/// An arrow from `start` to `end`, never longer than `max_length`.
///
/// Bound arrows (`parent` set) live in simulation space and get projected
/// with the camera every update. The freestanding aiming arrow lives
/// directly in screen space and its draw points are just its endpoints.
#[derive(Clone, Debug)]
pub struct Indicator {
    pub start: Vec3,
    pub end: Vec3,
    pub kind: ArrowKind,
    /// Index of the body this arrow tracks, if any. Bodies and arrows are
    /// only ever cleared together, so the index stays valid for the arrow's
    /// whole life; it is still checked before use.
    pub parent: Option<usize>,
    pub max_length: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    pub thickness: f32,
    pub draw_start: Point2D<f64>,
    pub draw_end: Point2D<f64>,
}

impl Indicator {
    /// The aiming arrow, dragged out in screen space.
    pub fn freestanding(start: Vec3) -> Self {
        Indicator::raw(start, ArrowKind::None, None, ARROW_COLOR_VEL, 2.0)
    }

    /// An arrow that tracks one body, re-derived every update.
    pub fn bound(parent: usize, start: Vec3, kind: ArrowKind, color: u32) -> Self {
        Indicator::raw(start, kind, Some(parent), color, 1.0)
    }

    fn raw(start: Vec3, kind: ArrowKind, parent: Option<usize>, color: u32, thickness: f32) -> Self {
        let start = Vec3::new(start.x, start.y, 0.0);
        let end = Vec3::new(start.x + 1.0, start.y + 1.0, 0.0);
        Indicator {
            start,
            end,
            kind,
            parent,
            max_length: ARROW_MAX_LENGTH,
            color,
            thickness,
            draw_start: Point2D::new(start.x, start.y),
            draw_end: Point2D::new(end.x, end.y),
        }
    }

    /// Move the tip. If that would make the arrow longer than `max_length`
    /// the tip is pulled back along the same direction to exactly that
    /// length.
    pub fn set_end(&mut self, e: Vec3) {
        self.end = Vec3::new(e.x, e.y, 0.0);
        self.limit_length();
    }

    fn limit_length(&mut self) {
        let length = (self.end - self.start).length();
        if length > self.max_length {
            self.end = Vec3::new(
                (self.end.x - self.start.x) / length * self.max_length + self.start.x,
                (self.end.y - self.start.y) / length * self.max_length + self.start.y,
                0.0,
            );
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    fn angle(&self) -> f64 {
        (self.start.y - self.end.y).atan2(self.end.x - self.start.x)
    }

    /// The drawn arrow read back as a velocity vector. Screen y grows
    /// downward, so callers flip the y sign when committing it to a body.
    pub fn velocity_component(&self) -> Vec3 {
        let angle = self.angle();
        let length = self.length();
        Vec3::new(length * angle.cos(), length * angle.sin(), 0.0)
    }

    /// Re-derive the endpoints from the tracked body, then clamp.
    pub fn rederive(&mut self, body: &Body) {
        self.start = Vec3::new(body.pos.x, body.pos.y, 0.0);
        let end = match self.kind {
            ArrowKind::Velocity => body.pos + body.vel / ARROW_TO_VEL_RATIO,
            ArrowKind::Acceleration => body.pos + body.acc / ARROW_TO_ACC_RATIO,
            ArrowKind::None => self.end,
        };
        self.set_end(end);
    }

    /// Project both endpoints with the camera pose the Space passes in.
    pub fn project(&mut self, rotation: Vec3, offset: Vec3) {
        self.draw_start = transform::draw_space(self.start, rotation, offset);
        self.draw_end = transform::draw_space(self.end, rotation, offset);
    }
}

/// Arrows never draw longer than this many pixels.
pub const ARROW_MAX_LENGTH: f64 = 150.0;
/// Shrinks a body's acceleration down to a drawable arrow.
pub const ARROW_TO_ACC_RATIO: f64 = 0.005;

pub const ARROW_COLOR_VEL: u32 = 0x0046aa; // blue
pub const ARROW_COLOR_ACC: u32 = 0xc80000; // red
