use gravity::bodies::{Vec3, PLANET_DEFAULT_DENSITY};
use presets::ring::{circular_speed, Ring};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ==================================================================================
// Scene files
// ==================================================================================

#[test]
fn loads_planets_from_json5() {
    let scene = r#"[
        // A heavy one sitting still...
        { center: [400, 300], radius: 40 },
        // ...and a light one flying past.
        { center: [600, 300], radius: 10, velocity: [0, -2.5], density: 0.01, color: 0x3669ff },
    ]"#;

    let bodies = presets::load(scene.to_string()).unwrap();
    assert_eq!(bodies.len(), 2);

    assert_eq!(bodies[0].pos, Vec3::new(400.0, 300.0, 0.0));
    assert_eq!(bodies[0].radius(), 40.0);
    assert_eq!(bodies[0].density(), PLANET_DEFAULT_DENSITY);
    assert_eq!(bodies[0].vel, Vec3::zero());

    assert_eq!(bodies[1].radius(), 10.0);
    assert_eq!(bodies[1].density(), 0.01);
    assert_eq!(bodies[1].vel, Vec3::new(0.0, -2.5, 0.0));
    assert_eq!(bodies[1].color, 0x3669ff);
}

#[test]
fn loads_rings_mixed_with_planets() {
    let scene = r#"[
        { center: [400, 300], radius: 50 },
        { center: [400, 300], count: 12, orbit: 150, body_radius: 4, speed: 1.5 },
    ]"#;

    let bodies = presets::load(scene.to_string()).unwrap();
    assert_eq!(bodies.len(), 13);
}

#[test]
fn garbage_files_error_out() {
    assert!(presets::load("not a scene at all".to_string()).is_err());
}

// ==================================================================================
// Rings
// ==================================================================================

fn test_ring() -> Ring {
    Ring {
        center: Vec3::new(100.0, 100.0, 0.0),
        count: 12,
        orbit: 80.0,
        body_radius: 4.0,
        jitter: 0.0,
        speed: 1.5,
        seed: 3,
        clockwise: false,
    }
}

#[test]
fn ring_scatters_deterministically() {
    let first = test_ring().build();
    let second = test_ring().build();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        assert_eq!(a.radius(), b.radius());
    }
}

#[test]
fn unjittered_ring_is_a_circle() {
    let debris = test_ring().build();
    assert_eq!(debris.len(), 12);

    for body in &debris {
        let dist = (body.pos - Vec3::new(100.0, 100.0, 0.0)).length();
        assert!(close(dist, 80.0), "Debris off the circle: {}", dist);

        let speed = (body.vel.x * body.vel.x + body.vel.y * body.vel.y).sqrt();
        assert!(close(speed, 1.5), "Wrong debris speed: {}", speed);
    }
}

#[test]
fn circular_speed_matches_gravity() {
    // v^2 / r must equal the G=1 attraction m / r^2.
    let v = circular_speed(1000.0, 40.0);
    assert!(close(v * v / 40.0, 1000.0 / (40.0 * 40.0)));
}

// ==================================================================================
// Prefabs
// ==================================================================================

#[test]
fn prefab_registry_knows_its_scenes() {
    assert_eq!(presets::prefabs::by_name("binary").unwrap().len(), 2);
    assert_eq!(presets::prefabs::by_name("trio").unwrap().len(), 3);
    assert!(presets::prefabs::by_name("ringworld").unwrap().len() > 1);
    assert!(presets::prefabs::by_name("the_backrooms").is_none());
}

#[test]
fn binary_prefab_carries_no_net_momentum() {
    let pair = presets::prefabs::by_name("binary").unwrap();
    let net_y: f64 = pair.iter().map(|b| b.mass() * b.vel.y).sum();
    assert!(close(net_y, 0.0));
}
