//! Minimal end-to-end example: dimension-checked kinematics.

use dimq::{Joules, Kilograms, Meters, MetersPerSecond, MetersPerSecondSquared, Seconds, M, S};

fn main() {
    // Free fall for two seconds.
    let g: MetersPerSecondSquared = 9.81 * M / (S * S);
    let t = Seconds::new(2.0);

    let speed: MetersPerSecond = g * t;
    let distance: Meters = 0.5 * g * t.squared();
    println!("after {}: speed {}, distance {}", t, speed, distance);

    // Kinetic energy of the falling mass.
    let mass = Kilograms::new(80.0);
    let energy: Joules = 0.5 * mass * speed.squared();
    println!("kinetic energy: {}", energy);

    // The payload leaves the dimension system only at the boundary.
    let raw = energy.strip().value();
    assert!((raw - 15_397.776).abs() < 1e-9);
}
