//! Projects simulated positions into draw space.

use crate::bodies::Vec3;
use euclid::default::{Point2D, Rotation3D};
use euclid::Angle;

/// The camera rotation, applied about x, then y, then z.
fn rotation(degrees: Vec3) -> Rotation3D<f64> {
    Rotation3D::around_x(Angle::degrees(degrees.x))
        .post_rotate(&Rotation3D::around_y(Angle::degrees(degrees.y)))
        .post_rotate(&Rotation3D::around_z(Angle::degrees(degrees.z)))
}

/// Where a simulated point lands on screen under the given camera pose.
/// The pan offset is applied after the rotation, in whole pixels.
pub fn draw_space(pos: Vec3, rotation_degrees: Vec3, offset: Vec3) -> Point2D<f64> {
    let p = rotation(rotation_degrees).transform_vector3d(pos);
    Point2D::new(p.x + offset.x.floor(), p.y + offset.y.floor())
}
