//! Merging swarm around a fixed anchor
//!
//! Scatters a ring of small bodies around a heavy fixed anchor and steps the
//! simulation until most of them have merged or fallen in.
//!
//! Run with: cargo run --package orbits --example collision_demo

use std::f64::consts::TAU;
use std::time::Duration;

use nalgebra::{Point2, Vector2};
use orbits::{Body, Simulation};

fn main() {
    println!("Orbits Collision Demo: Accreting Ring\n");
    println!("{}", "=".repeat(60));

    let centre = Point2::new(400.0, 300.0);
    let anchor_mass = 20_000.0;
    let g = 0.3;

    let mut sim = Simulation::with_g(g).expect("valid gravitational constant");
    sim.add(Body::fixed(anchor_mass, centre))
        .expect("anchor has positive mass");

    println!("\nInitial system:");
    println!("  Anchor: mass={:.0} at ({:.0}, {:.0})", anchor_mass, centre.x, centre.y);

    // Sixteen bodies on a ring, launched slightly slower than circular so
    // their orbits cross
    for i in 0..16 {
        let r = 120.0 + (i % 4) as f64 * 15.0;
        let theta = i as f64 * TAU / 16.0;
        let position = centre + Vector2::new(r * theta.cos(), r * theta.sin());

        let v_circ = (g * anchor_mass / r).sqrt() * 0.9;
        let velocity = Vector2::new(-v_circ * theta.sin(), v_circ * theta.cos());

        let mass = 5.0 + i as f64;
        sim.add(Body::new(mass, position, velocity))
            .expect("ring bodies are valid");

        println!(
            "  Body {:2}: mass={:5.1}, r={:.0}, v={:.3}",
            i + 1,
            mass,
            r,
            velocity.magnitude()
        );
    }

    println!("\nInitial body count: {}", sim.body_count());
    println!("Initial total mass: {:.1}", sim.total_mass());
    let initial_energy = sim.kinetic_energy() + sim.potential_energy();
    println!("Initial total energy: {:.1}", initial_energy);

    println!("\n{}", "=".repeat(60));
    println!("Starting simulation...\n");

    let frame = Duration::from_millis(16);
    let total_steps = 2_000;
    let mut last_collisions = 0;

    for _ in 0..total_steps {
        let telemetry = sim.step(frame);

        if telemetry.collision_count > last_collisions {
            println!(
                "frame {:5}: {} merge(s), {} bodies left, fastest={:.3}",
                telemetry.frame,
                telemetry.collision_count - last_collisions,
                telemetry.body_count,
                telemetry.fastest_speed
            );
            last_collisions = telemetry.collision_count;
        }
    }

    println!("{}", "=".repeat(60));
    println!("Simulation complete!\n");

    let telemetry = sim.telemetry();
    println!("Final statistics:");
    println!("  Frames: {}", telemetry.frame);
    println!("  Bodies: {}", telemetry.body_count);
    println!("  Total collisions: {}", telemetry.collision_count);
    println!("  Total mass: {:.1}", sim.total_mass());
    let final_energy = sim.kinetic_energy() + sim.potential_energy();
    println!(
        "  Total energy: {:.1} ({:+.1} since the start)",
        final_energy,
        final_energy - initial_energy
    );
    if let Some(farthest) = &telemetry.farthest {
        println!("  Farthest pair: {:.1} apart", farthest.vector.magnitude);
    }

    println!("\nSurvivors:");
    for (i, body) in sim.bodies().iter().enumerate() {
        println!(
            "  Body {}: mass={:.1}, r={:.1}, v={:.3}",
            i,
            body.mass(),
            (body.position() - centre).magnitude(),
            body.velocity().magnitude()
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
}
