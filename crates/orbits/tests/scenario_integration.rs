//! End-to-end runs of scenarios through the public API.

use std::time::Duration;

use nalgebra::{Point2, Vector2};

use orbits::config::Scenario;
use orbits::launch::Launcher;
use orbits::{Body, Simulation};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn random_field_collapses_without_losing_mass() {
    let yaml = r#"
g: 0.3
anchor:
  mass: 20000.0
  position: [400.0, 300.0]
random:
  count: 150
  width: 800.0
  height: 600.0
  seed: 5
"#;
    let mut sim = Scenario::from_yaml_str(yaml).unwrap().build().unwrap();
    let initial_mass = sim.total_mass();
    let initial_count = sim.body_count();

    let mut last_frame = 0;
    for _ in 0..300 {
        let telemetry = sim.step(FRAME);
        assert_eq!(telemetry.frame, last_frame + 1);
        last_frame = telemetry.frame;

        assert!(telemetry.fastest_speed.is_finite());
        assert_eq!(telemetry.body_count, sim.body_count());
    }

    let telemetry = sim.telemetry();
    assert!(telemetry.collision_count > 0);
    assert_eq!(
        telemetry.collision_count as usize,
        initial_count - sim.body_count()
    );
    assert!((sim.total_mass() - initial_mass).abs() / initial_mass < 1e-12);

    // The anchor is the heaviest body and never moves
    let anchor = &sim.bodies()[0];
    assert_eq!(anchor.position(), Point2::new(400.0, 300.0));
    assert!(anchor.mass() >= 20000.0);

    for body in sim.bodies() {
        assert!(body.position().x.is_finite() && body.position().y.is_finite());
        assert!(body.mass() > 0.0);
    }
}

#[test]
fn launched_body_orbits_fixed_anchor() {
    let mut sim = Simulation::with_g(0.3).unwrap();
    sim.add(Body::fixed(20000.0, Point2::new(0.0, 0.0))).unwrap();

    // Place a body 200 units out and pull back below it for a sideways launch
    let mut launcher = Launcher::new();
    launcher.press(Point2::new(200.0, 0.0));
    launcher.drag(Point2::new(206.0, 0.0)).unwrap();
    launcher.release(&mut sim).unwrap();
    launcher.press(Point2::new(200.0, 0.0));

    // Circular speed is sqrt(G M / r) ≈ 5.48
    let pull = (5.48_f64 * 75.0).powf(1.0 / 1.1);
    launcher.drag(Point2::new(200.0, pull)).unwrap();
    let index = launcher.release(&mut sim).unwrap().unwrap();
    assert_eq!(index, 1);

    let mut min_r = f64::MAX;
    let mut max_r = 0.0_f64;
    for _ in 0..200 {
        sim.step(FRAME);
        let r = sim.bodies()[1].position().coords.magnitude();
        min_r = min_r.min(r);
        max_r = max_r.max(r);
    }

    assert_eq!(sim.body_count(), 2);
    assert_eq!(sim.collision_count(), 0);
    // Unit-step Euler drifts, but the body stays bound near its radius
    assert!(min_r > 150.0, "fell in to {}", min_r);
    assert!(max_r < 260.0, "escaped to {}", max_r);
}

#[test]
fn head_on_merge_keeps_momentum() {
    let mut sim = Simulation::with_g(0.0).unwrap();
    sim.add(Body::new(10.0, Point2::new(0.0, 0.0), Vector2::new(2.0, 0.0)))
        .unwrap();
    sim.add(Body::new(20.0, Point2::new(12.0, 0.0), Vector2::new(-1.0, 0.0)))
        .unwrap();
    let momentum = sim.total_momentum();

    let mut steps = 0;
    while sim.body_count() > 1 && steps < 20 {
        sim.step(FRAME);
        steps += 1;
    }

    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.collision_count(), 1);
    assert!((sim.total_momentum() - momentum).magnitude() < 1e-12);
    assert_eq!(sim.bodies()[0].mass(), 30.0);
}
