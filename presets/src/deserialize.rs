//! Lets you load a sandbox scene from a file.

use serde::Deserialize;

/// A point or vector in the file.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

/// One entry in a scene file: either a single planet or a whole ring of
/// debris. The two are told apart by their fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Planet {
        center: Vec2D,
        radius: f64,
        #[serde(default)]
        velocity: Option<Vec2D>,
        #[serde(default)]
        density: Option<f64>,
        #[serde(default)]
        color: Option<u32>,
        #[serde(default)]
        outline: Option<u32>,
    },
    Ring {
        center: Vec2D,
        count: usize,
        orbit: f64,
        body_radius: f64,
        #[serde(default)]
        jitter: f64,
        #[serde(default)]
        speed: f64,
        #[serde(default)]
        seed: u64,
        #[serde(default)]
        clockwise: bool,
    },
}

/// Serde needs you to define the thing to use it on...
#[derive(Deserialize)]
struct RawScene(Vec<Entry>);

use crate::ring::Ring;
use gravity::bodies::{Body, Vec3, PLANET_DEFAULT_DENSITY};
use json5;

/// Loads a scene file's contents and returns the bodies to insert.
pub fn load(contents: String) -> Result<Vec<Body>, json5::Error> {
    let contents = &*contents;
    let raw: RawScene = json5::from_str(contents)?;

    let mut out = Vec::new();
    for entry in raw.0 {
        out.append(&mut build_entry(entry));
    }
    Ok(out)
}

/// Helper function to convert from serde to real
fn build_entry(entry: Entry) -> Vec<Body> {
    match entry {
        Entry::Planet {
            center,
            radius,
            velocity,
            density,
            color,
            outline,
        } => {
            let mut body = Body::new(
                Vec3::new(center.0, center.1, 0.0),
                radius,
                density.unwrap_or(PLANET_DEFAULT_DENSITY),
            );
            if let Some(vel) = velocity {
                body.set_velocity(Vec3::new(vel.0, vel.1, 0.0));
            }
            if let Some(color) = color {
                body.color = color;
            }
            if let Some(outline) = outline {
                body.outline = outline;
            }
            vec![body]
        }
        Entry::Ring {
            center,
            count,
            orbit,
            body_radius,
            jitter,
            speed,
            seed,
            clockwise,
        } => Ring {
            center: Vec3::new(center.0, center.1, 0.0),
            count,
            orbit,
            body_radius,
            jitter,
            speed,
            seed,
            clockwise,
        }
        .build(),
    }
}
