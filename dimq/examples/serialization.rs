//! Examples of serializing and deserializing dimension-tagged scalars.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use dimq::{Joules, Meters, MetersPerSecond, Seconds};
    use serde::{Deserialize, Serialize};

    println!("=== Scalar Serialization Examples ===\n");

    // Example 1: Basic serialization to JSON (raw payload only).
    println!("1. Basic JSON Serialization:");
    let distance = Meters::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   Distance: {} → JSON: {}", distance, json);

    let speed = MetersPerSecond::new(3.14);
    let json = serde_json::to_string(&speed).unwrap();
    println!("   Speed: {} → JSON: {}", speed, json);
    println!();

    // Example 2: Deserialization picks up the dimension from the target type.
    println!("2. JSON Deserialization:");
    let time: Seconds = serde_json::from_str("12.5").unwrap();
    println!("   JSON: 12.5 → {}", time);
    println!();

    // Example 3: Tagged serialization preserves the dimension signature.
    println!("3. Dimension-Tagged Serialization:");

    #[derive(Serialize, Deserialize)]
    struct Telemetry {
        #[serde(with = "dimq::serde_with_unit")]
        altitude: Meters,
        #[serde(with = "dimq::serde_with_unit")]
        energy: Joules,
    }

    let t = Telemetry {
        altitude: Meters::new(812.0),
        energy: Joules::new(3_500.0),
    };
    let json = serde_json::to_string_pretty(&t).unwrap();
    println!("{}", json);
    println!();

    // Example 4: A mismatched signature is rejected on the way back in.
    println!("4. Signature Validation:");
    let bad = r#"{"altitude":{"value":1.0,"unit":"s"},"energy":{"value":0.0,"unit":"kg m^2 s^-2"}}"#;
    let result: Result<Telemetry, _> = serde_json::from_str(bad);
    println!("   wrong signature → {:?}", result.err().map(|e| e.to_string()));

    println!();
    println!("=== Important Notes ===");
    println!("• Scalars serialize as bare f64 payloads by default");
    println!("• Use serde_with_unit to tag values with their dimension signature");
    println!("• Tagged data is validated against the target dimension on load");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
