//! The camera the scene looks through.
//!
//! x and y of `position` are the pan offset in pixels; z is the zoom level,
//! kept inside `[ZOOM_MIN, ZOOM_MAX]`. Rotation is in degrees per axis.

use crate::bodies::Vec3;

#[derive(Clone, Debug)]
pub struct Camera {
    /// Field of view. Only ever displayed, never used in any math.
    pub fov: f64,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Which way to pan.
#[derive(Copy, Clone, Debug)]
pub enum Pan {
    Left,
    Right,
    Up,
    Down,
}

/// Fixed camera poses to jump to.
#[derive(Copy, Clone, Debug)]
pub enum Pose {
    /// Offset and rotation both zero.
    Normal,
    /// Shifted out along x and turned 90 degrees about y.
    Front,
}

impl Camera {
    pub fn new() -> Self {
        Camera {
            fov: 90.0,
            position: Vec3::zero(),
            rotation: Vec3::zero(),
        }
    }

    /// Shift the camera. Returns false and moves nothing if the shift would
    /// push the zoom level out of its limits.
    pub fn shift(&mut self, v: Vec3) -> bool {
        let z = self.position.z + v.z;
        if z < ZOOM_MIN || z > ZOOM_MAX {
            return false;
        }
        self.position += v;
        true
    }

    pub fn pan(&mut self, dir: Pan) {
        let v = match dir {
            Pan::Left => Vec3::new(CAM_MOVE_SPEED, 0.0, 0.0),
            Pan::Right => Vec3::new(-CAM_MOVE_SPEED, 0.0, 0.0),
            Pan::Up => Vec3::new(0.0, CAM_MOVE_SPEED, 0.0),
            Pan::Down => Vec3::new(0.0, -CAM_MOVE_SPEED, 0.0),
        };
        self.shift(v);
    }

    /// Zoom one step in. False means the step was refused at the limit.
    pub fn zoom_in(&mut self) -> bool {
        self.shift(Vec3::new(0.0, 0.0, CAM_ZOOM_STEP))
    }

    /// Zoom one step out. False means the step was refused at the limit.
    pub fn zoom_out(&mut self) -> bool {
        self.shift(Vec3::new(0.0, 0.0, -CAM_ZOOM_STEP))
    }

    /// Jump straight to a fixed pose.
    pub fn set_pose(&mut self, pose: Pose) {
        match pose {
            Pose::Normal => {
                self.position = Vec3::zero();
                self.rotation = Vec3::zero();
            }
            Pose::Front => {
                self.position = Vec3::new(100.0, 0.0, 0.0);
                self.rotation = Vec3::new(0.0, 90.0, 0.0);
            }
        }
    }
}

/// Pan this many pixels per step
pub const CAM_MOVE_SPEED: f64 = 10.0;
/// Zoom level change per wheel notch
pub const CAM_ZOOM_STEP: f64 = 10.0;
pub const ZOOM_MIN: f64 = -90.0;
pub const ZOOM_MAX: f64 = 400.0;
