use gravity::bodies::{self, ball_mass, Body, Vec3, ARROW_TO_VEL_RATIO, DELTA_T};

/// Build a body of (almost exactly) the given mass at (x, y).
/// Radius 1 so the density works out to mass / (4/3 pi).
fn ball(x: f64, y: f64, mass: f64) -> Body {
    let density = mass / (4.0 / 3.0 * std::f64::consts::PI);
    Body::new(Vec3::new(x, y, 0.0), 1.0, density)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ==================================================================================
// Force accumulation
// ==================================================================================

#[test]
fn two_body_force_factor() {
    // Masses 10 and 20 at distance 5 along x: factor = 10*20/125 = 1.6,
    // so the pair force is 1.6 * 5 = 8 along x.
    let mut bodies = vec![ball(0.0, 0.0, 10.0), ball(5.0, 0.0, 20.0)];
    bodies::tick(&mut bodies, DELTA_T);

    assert!(
        close(bodies[0].acc.x, 8.0 / 10.0),
        "Wrong acceleration on the light body: {}",
        bodies[0].acc.x
    );
    assert!(
        close(bodies[1].acc.x, -8.0 / 20.0),
        "Wrong acceleration on the heavy body: {}",
        bodies[1].acc.x
    );
    assert!(close(bodies[0].acc.y, 0.0));
    assert!(close(bodies[1].acc.y, 0.0));
}

#[test]
fn reaction_is_equal_and_opposite() {
    let mut bodies = vec![ball(-1.0, 2.0, 2.0), ball(3.0, -0.5, 7.0)];
    bodies::tick(&mut bodies, DELTA_T);

    let net_x = bodies[0].mass() * bodies[0].acc.x + bodies[1].mass() * bodies[1].acc.x;
    let net_y = bodies[0].mass() * bodies[0].acc.y + bodies[1].mass() * bodies[1].acc.y;
    assert!(
        close(net_x, 0.0) && close(net_y, 0.0),
        "Net force not zero: ({}, {})",
        net_x,
        net_y
    );
}

#[test]
fn momentum_balance_three_bodies() {
    // Three bodies means three pairs; every pair must land on both members
    // exactly once for the net force to cancel.
    let mut bodies = vec![
        ball(0.0, 0.0, 5.0),
        ball(4.0, 1.0, 11.0),
        ball(-2.0, 6.0, 3.0),
    ];
    bodies::tick(&mut bodies, DELTA_T);

    let net_x: f64 = bodies.iter().map(|b| b.mass() * b.acc.x).sum();
    let net_y: f64 = bodies.iter().map(|b| b.mass() * b.acc.y).sum();
    assert!(
        close(net_x, 0.0) && close(net_y, 0.0),
        "Net force not zero: ({}, {})",
        net_x,
        net_y
    );
}

#[test]
fn iteration_order_does_not_change_forces() {
    let fresh = || {
        vec![
            ball(0.0, 0.0, 5.0),
            ball(4.0, 1.0, 11.0),
            ball(-2.0, 6.0, 3.0),
        ]
    };

    let mut forward = fresh();
    bodies::tick(&mut forward, DELTA_T);

    let mut backward = fresh();
    backward.reverse();
    bodies::tick(&mut backward, DELTA_T);
    backward.reverse();

    for (a, b) in forward.iter().zip(backward.iter()) {
        assert!(
            close(a.acc.x, b.acc.x) && close(a.acc.y, b.acc.y),
            "Accelerations depend on iteration order: ({}, {}) vs ({}, {})",
            a.acc.x,
            a.acc.y,
            b.acc.x,
            b.acc.y
        );
    }
}

#[test]
fn coincident_bodies_contribute_nothing() {
    // Zero separation has no defined direction; the pair is skipped rather
    // than blowing up into NaN.
    let mut bodies = vec![ball(1.0, 1.0, 10.0), ball(1.0, 1.0, 20.0)];
    bodies::tick(&mut bodies, DELTA_T);

    for body in &bodies {
        assert!(body.acc.x.is_finite() && body.acc.y.is_finite());
        assert!(close(body.acc.x, 0.0) && close(body.acc.y, 0.0));
        assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
    }
}

#[test]
fn engine_sets_flags_and_drains_forces() {
    let mut bodies = vec![ball(0.0, 0.0, 1.0), ball(3.0, 0.0, 1.0)];
    bodies::tick(&mut bodies, DELTA_T);

    for body in &bodies {
        assert!(body.force_done, "Engine should leave the force flag set");
        assert!(
            close(body.force.x, 0.0) && close(body.force.y, 0.0),
            "Force accumulator should be drained after the step"
        );
    }
}

// ==================================================================================
// Integration
// ==================================================================================

#[test]
fn drift_without_neighbors() {
    let mut bodies = vec![ball(0.0, 0.0, 4.0)];
    bodies[0].set_velocity(Vec3::new(1.0, 0.0, 0.0));
    bodies::tick(&mut bodies, 1.0);

    assert_eq!(bodies[0].pos.x, 1.0);
    assert_eq!(bodies[0].pos.y, 0.0);
    assert_eq!(bodies[0].vel.x, 1.0);
    assert_eq!(bodies[0].vel.y, 0.0);
}

#[test]
fn half_step_term_is_linear_in_dt() {
    // With constant force F the position change over one step is
    // v*dt + 0.5*(F/m)*dt, the acceleration term linear in dt.
    let mut body = ball(0.0, 0.0, 2.0);
    body.force = Vec3::new(6.0, 0.0, 0.0);
    body.advance(0.5);

    // acc = 3, so dx = 0 + 0.5 * 3 * 0.5 = 0.75 and vx = 1.5.
    assert!(close(body.pos.x, 0.75), "Got dx = {}", body.pos.x);
    assert!(close(body.vel.x, 1.5), "Got vx = {}", body.vel.x);
}

// ==================================================================================
// Mass bookkeeping
// ==================================================================================

#[test]
fn mass_follows_radius_and_density() {
    let mut body = Body::planet(Vec3::new(0.0, 0.0, 0.0));

    body.set_radius(7.0);
    assert_eq!(body.radius(), 7.0);
    assert_eq!(body.mass(), ball_mass(body.density(), 7.0));

    body.set_density(0.02);
    assert_eq!(body.density(), 0.02);
    assert_eq!(body.mass(), ball_mass(0.02, 7.0));

    // Nonpositive density is refused outright.
    body.set_density(-1.0);
    assert_eq!(body.density(), 0.02);
}

#[test]
fn planet_radius_clamps() {
    let mut planet = Body::planet(Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(planet.radius(), gravity::bodies::PLANET_MIN_RADIUS);
    assert!(planet.mass() > 0.0, "A fresh planet must never be massless");

    planet.set_radius(1e6);
    assert_eq!(planet.radius(), gravity::bodies::PLANET_MAX_RADIUS);

    planet.set_radius(0.0);
    assert_eq!(planet.radius(), gravity::bodies::PLANET_MIN_RADIUS);
}

#[test]
fn free_body_radius_stays_positive() {
    let body = Body::new(Vec3::new(0.0, 0.0, 0.0), 0.2, 1.0);
    assert_eq!(body.radius(), 1.0);
    assert!(body.mass() > 0.0);
}

#[test]
fn commit_velocity_scales_the_arrow() {
    let mut body = Body::planet(Vec3::new(0.0, 0.0, 0.0));
    body.commit_velocity(Vec3::new(3.0, 4.0, 9.0));

    assert!(close(body.vel.x, 3.0 * ARROW_TO_VEL_RATIO));
    assert!(close(body.vel.y, 4.0 * ARROW_TO_VEL_RATIO));
    assert_eq!(body.vel.z, 0.0, "Committed velocity must stay planar");
}
