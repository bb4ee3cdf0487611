//! Merging colliding bodies
//!
//! Every merge conserves total mass and linear momentum. The absorbed body
//! is tombstoned while events are processed and removed afterwards, so no
//! index shifts while events still refer to the original ordering.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::body::Body;
use crate::collisions::CollisionEvent;

/// Outcome of one resolved collision, in pre-compaction indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merger {
    pub absorber: usize,
    pub absorbed: usize,
}

/// Picks which body of a colliding pair survives
///
/// The strictly heavier body absorbs the lighter one. On equal masses the
/// body with the lower index absorbs, so ties never depend on the order
/// in which the pair was visited.
///
/// # Examples
///
/// ```
/// use orbits::body::Body;
/// use orbits::collisions::absorber;
/// use nalgebra::{Point2, Vector2};
///
/// let light = Body::new(1.0, Point2::new(0.0, 0.0), Vector2::zeros());
/// let heavy = Body::new(5.0, Point2::new(0.5, 0.0), Vector2::zeros());
///
/// assert_eq!(absorber(0, &light, 1, &heavy), (1, 0));
/// assert_eq!(absorber(3, &light, 7, &light), (3, 7));
/// ```
pub fn absorber(i: usize, a: &Body, j: usize, b: &Body) -> (usize, usize) {
    match a.mass().total_cmp(&b.mass()) {
        Ordering::Greater => (i, j),
        Ordering::Less => (j, i),
        Ordering::Equal => (i.min(j), i.max(j)),
    }
}

/// Resolves collision events and compacts the body collection
///
/// Events are handled closest pair first. A body takes part in at most one
/// merge per call: events touching a body that already merged are skipped,
/// and the pair, if still overlapping, is found again on the next step.
///
/// Returns the mergers that were applied, one per resolved event.
///
/// # Examples
///
/// ```
/// use orbits::body::Body;
/// use orbits::collisions::{check_pair, resolve_collisions};
/// use nalgebra::{Point2, Vector2};
///
/// let mut bodies = vec![
///     Body::new(10.0, Point2::new(0.0, 0.0), Vector2::new(3.0, 0.0)),
///     Body::new(20.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 3.0)),
/// ];
///
/// let events: Vec<_> = check_pair(0, &bodies[0], 1, &bodies[1], 1.0)
///     .into_iter()
///     .collect();
/// let mergers = resolve_collisions(&mut bodies, events);
///
/// assert_eq!(mergers.len(), 1);
/// assert_eq!(bodies.len(), 1);
/// assert_eq!(bodies[0].mass(), 30.0);
/// ```
pub fn resolve_collisions(bodies: &mut Vec<Body>, mut events: Vec<CollisionEvent>) -> Vec<Merger> {
    if events.is_empty() {
        return Vec::new();
    }

    events.sort_by(|a, b| {
        a.separation
            .total_cmp(&b.separation)
            .then(a.body_a.cmp(&b.body_a))
            .then(a.body_b.cmp(&b.body_b))
    });

    let mut merged = vec![false; bodies.len()];
    let mut removed = vec![false; bodies.len()];
    let mut mergers = Vec::with_capacity(events.len());

    for event in events {
        let (i, j) = (event.body_a, event.body_b);
        if i >= bodies.len() || j >= bodies.len() || i == j {
            continue;
        }
        if merged[i] || merged[j] {
            continue;
        }

        let (winner, loser) = absorber(i, &bodies[i], j, &bodies[j]);
        let absorbed = bodies[loser].clone();
        bodies[winner].absorb(&absorbed);

        debug!(
            absorber = winner,
            absorbed = loser,
            mass = bodies[winner].mass(),
            "bodies merged"
        );

        merged[i] = true;
        merged[j] = true;
        removed[loser] = true;
        mergers.push(Merger {
            absorber: winner,
            absorbed: loser,
        });
    }

    compact(bodies, &removed);
    mergers
}

/// Drops tombstoned bodies in one pass, keeping the survivors in order
fn compact(bodies: &mut Vec<Body>, removed: &[bool]) {
    let before = bodies.len();
    let mut index = 0;
    bodies.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
    let after = bodies.len();
    if before != after {
        info!(before, after, removed = before - after, "compacted bodies");
    }
}
