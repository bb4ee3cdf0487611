use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::collisions::resolution::*;
use crate::collisions::CollisionEvent;
use crate::collisions::detection_test::detect_collisions;

fn body(mass: f64, x: f64, velocity: [f64; 2]) -> Body {
    Body::new(mass, Point2::new(x, 0.0), Vector2::new(velocity[0], velocity[1]))
}

fn event(a: usize, b: usize, separation: f64) -> CollisionEvent {
    CollisionEvent {
        body_a: a,
        body_b: b,
        separation,
        collision_radius: 10.0,
    }
}

fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::mass).sum()
}

fn total_momentum(bodies: &[Body]) -> Vector2<f64> {
    bodies.iter().map(Body::momentum).fold(Vector2::zeros(), |acc, p| acc + p)
}

#[test]
fn test_heavier_body_absorbs() {
    let light = body(1.0, 0.0, [0.0, 0.0]);
    let heavy = body(2.0, 0.0, [0.0, 0.0]);

    assert_eq!(absorber(0, &heavy, 1, &light), (0, 1));
    assert_eq!(absorber(0, &light, 1, &heavy), (1, 0));
}

#[test]
fn test_equal_mass_lower_index_absorbs() {
    let a = body(3.0, 0.0, [0.0, 0.0]);
    let b = body(3.0, 1.0, [0.0, 0.0]);

    assert_eq!(absorber(4, &a, 2, &b), (2, 4));
    assert_eq!(absorber(2, &b, 4, &a), (2, 4));
}

#[test]
fn test_resolve_single_merge() {
    let mut bodies = vec![
        body(10.0, 0.0, [3.0, 0.0]),
        body(20.0, 1.0, [0.0, 3.0]),
        body(5.0, 100.0, [0.0, 0.0]),
    ];
    let p_initial = total_momentum(&bodies);

    let mergers = resolve_collisions(&mut bodies, vec![event(0, 1, 1.0)]);

    assert_eq!(
        mergers,
        vec![Merger {
            absorber: 1,
            absorbed: 0
        }]
    );
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].mass(), 30.0);
    assert_eq!(bodies[0].position(), Point2::new(1.0, 0.0));
    assert_relative_eq!(bodies[0].velocity(), Vector2::new(1.0, 2.0), epsilon = 1e-12);
    assert_eq!(bodies[1].mass(), 5.0);
    assert_relative_eq!(total_momentum(&bodies), p_initial, epsilon = 1e-12);
}

#[test]
fn test_resolve_independent_pairs() {
    let mut bodies = vec![
        body(1.0, 0.0, [1.0, 0.0]),
        body(2.0, 0.5, [0.0, 0.0]),
        body(4.0, 50.0, [0.0, 1.0]),
        body(3.0, 50.5, [0.0, -1.0]),
    ];
    let mass = total_mass(&bodies);
    let momentum = total_momentum(&bodies);

    let mergers = resolve_collisions(&mut bodies, vec![event(2, 3, 0.5), event(0, 1, 0.5)]);

    assert_eq!(mergers.len(), 2);
    assert_eq!(bodies.len(), 2);
    assert_relative_eq!(total_mass(&bodies), mass);
    assert_relative_eq!(total_momentum(&bodies), momentum, epsilon = 1e-12);
    // Survivors keep their relative order
    assert_eq!(bodies[0].mass(), 3.0);
    assert_eq!(bodies[1].mass(), 7.0);
}

#[test]
fn test_cascade_merges_each_body_once() {
    let mut bodies = vec![
        body(1.0, 0.0, [0.0, 0.0]),
        body(1.0, 0.1, [0.0, 0.0]),
        body(1.0, 0.3, [0.0, 0.0]),
    ];

    // All three overlap; the closest pair wins this step
    let events = vec![event(0, 2, 0.3), event(1, 2, 0.2), event(0, 1, 0.1)];
    let mergers = resolve_collisions(&mut bodies, events);

    assert_eq!(
        mergers,
        vec![Merger {
            absorber: 0,
            absorbed: 1
        }]
    );
    assert_eq!(bodies.len(), 2);
    assert_relative_eq!(total_mass(&bodies), 3.0);
}

#[test]
fn test_cascade_finishes_on_next_pass() {
    let mut bodies = vec![
        body(1.0, 0.0, [0.0, 0.0]),
        body(1.0, 0.1, [0.0, 0.0]),
        body(1.0, 0.3, [0.0, 0.0]),
    ];

    let first = detect_collisions(&bodies);
    resolve_collisions(&mut bodies, first);
    let second = detect_collisions(&bodies);
    resolve_collisions(&mut bodies, second);

    assert_eq!(bodies.len(), 1);
    assert_relative_eq!(bodies[0].mass(), 3.0);
}

#[test]
fn test_empty_events_list() {
    let mut bodies = vec![body(1.0, 0.0, [0.0, 0.0])];
    let mergers = resolve_collisions(&mut bodies, vec![]);

    assert!(mergers.is_empty());
    assert_eq!(bodies.len(), 1);
}

#[test]
fn test_stale_events_are_ignored() {
    let mut bodies = vec![body(1.0, 0.0, [0.0, 0.0])];
    let mergers = resolve_collisions(&mut bodies, vec![event(0, 3, 0.1), event(0, 0, 0.0)]);

    assert!(mergers.is_empty());
    assert_eq!(bodies.len(), 1);
}
