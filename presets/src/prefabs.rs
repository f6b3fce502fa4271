//! Prefabricated scenes to start the sandbox from.

pub mod scenes {
    use crate::ring::{circular_speed, Ring};
    use gravity::bodies::{ball_mass, Body, Vec3, PLANET_DEFAULT_DENSITY};

    /// Two equal planets circling their common center.
    pub fn binary() -> Vec<Body> {
        let radius = 20.0;
        let mass = ball_mass(PLANET_DEFAULT_DENSITY, radius);
        let separation = 200.0;
        // Each one orbits the barycenter, half the separation away.
        let speed = (mass / (2.0 * separation)).sqrt();

        let mut a = Body::new(Vec3::new(300.0, 300.0, 0.0), radius, PLANET_DEFAULT_DENSITY);
        a.set_velocity(Vec3::new(0.0, -speed, 0.0));
        a.color = 0x3669ff; // blue
        let mut b = Body::new(Vec3::new(500.0, 300.0, 0.0), radius, PLANET_DEFAULT_DENSITY);
        b.set_velocity(Vec3::new(0.0, speed, 0.0));
        b.color = 0xff5c26; // red-orange

        vec![a, b]
    }

    /// A heavy sun, a planet, and a moonlet around the planet.
    pub fn trio() -> Vec<Body> {
        let mut sun = Body::new(Vec3::new(400.0, 300.0, 0.0), 60.0, PLANET_DEFAULT_DENSITY);
        sun.color = 0xffdf22; // sunny yellow
        sun.outline = 0xe87513;

        let planet_orbit = 180.0;
        let planet_speed = circular_speed(sun.mass(), planet_orbit);
        let mut planet = Body::new(
            Vec3::new(400.0 + planet_orbit, 300.0, 0.0),
            10.0,
            PLANET_DEFAULT_DENSITY,
        );
        planet.set_velocity(Vec3::new(0.0, -planet_speed, 0.0));
        planet.color = 0x3669ff; // blue
        planet.outline = 0x56ff2d; // green

        let moon_orbit = 25.0;
        let moon_speed = circular_speed(planet.mass(), moon_orbit);
        let mut moon = Body::new(
            Vec3::new(400.0 + planet_orbit + moon_orbit, 300.0, 0.0),
            3.0,
            PLANET_DEFAULT_DENSITY,
        );
        // The moon rides along with its planet.
        moon.set_velocity(Vec3::new(0.0, -planet_speed - moon_speed, 0.0));
        moon.color = 0xadaca9; // light gray

        vec![sun, planet, moon]
    }

    /// A sun with a ring of rubble around it.
    pub fn ringworld() -> Vec<Body> {
        let mut sun = Body::new(Vec3::new(400.0, 300.0, 0.0), 50.0, PLANET_DEFAULT_DENSITY);
        sun.color = 0xffdf22; // sunny yellow
        sun.outline = 0xe87513;
        let sun_mass = sun.mass();

        let orbit = 200.0;
        let mut out = vec![sun];
        out.append(
            &mut Ring {
                center: Vec3::new(400.0, 300.0, 0.0),
                count: 24,
                orbit,
                body_radius: 4.0,
                jitter: 8.0,
                speed: circular_speed(sun_mass, orbit),
                seed: 5,
                clockwise: false,
            }
            .build(),
        );
        out
    }
}

use gravity::bodies::Body;

/// Gets a premade scene from a string
pub fn by_name(name: &str) -> Option<Vec<Body>> {
    use std::collections::HashMap;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<String, fn() -> Vec<Body>> = HashMap::new();
                $( h.insert(stringify!($name).to_string(), scenes::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref SCENES: HashMap<String, fn() -> Vec<Body>> = {
            let h = maker![binary, trio, ringworld];

            h
        };
    }

    SCENES.get(name).map(|build| build())
}
