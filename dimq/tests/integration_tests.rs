//! Integration-level smoke tests for the `dimq` facade crate.

use dimq::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn smoke_test_velocity() {
    let d = Meters::new(100.0);
    let t = Seconds::new(20.0);
    let v: MetersPerSecond = d / t;
    assert_abs_diff_eq!(v.value(), 5.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_area_and_volume() {
    let side = Meters::new(3.0);
    let area: SquareMeters = side * side;
    let volume: CubicMeters = area * side;
    assert_abs_diff_eq!(volume.value(), 27.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_frequency() {
    let period = Seconds::new(0.02);
    let f: Hertz = Unitless::new(1.0) / period;
    assert_abs_diff_eq!(f.value(), 50.0, epsilon = 1e-9);
}

#[test]
fn free_fall_kinematics() {
    // v = g·t and d = ½·g·t² after two seconds of free fall.
    let g: MetersPerSecondSquared = 9.81 * M / (S * S);
    let t = Seconds::new(2.0);

    let v: MetersPerSecond = g * t;
    assert_abs_diff_eq!(v.value(), 19.62, epsilon = 1e-12);

    let d: Meters = 0.5 * g * t.squared();
    assert_abs_diff_eq!(d.value(), 19.62, epsilon = 1e-12);
}

#[test]
fn kinetic_energy() {
    // E = ½·m·v² for an 80 kg runner at 5 m/s.
    let m = Kilograms::new(80.0);
    let v = MetersPerSecond::new(5.0);
    let e: Joules = 0.5 * m * v.squared();
    assert_abs_diff_eq!(e.value(), 1_000.0, epsilon = 1e-9);
}

#[test]
fn pressure_from_force_over_area() {
    let force: Newtons = 10.0 * KG * M / (S * S);
    let area = SquareMeters::new(0.5);
    let p: Pascals = force / area;
    assert_abs_diff_eq!(p.value(), 20.0, epsilon = 1e-12);
}

#[test]
fn power_from_energy_over_time() {
    let e = Joules::new(600.0);
    let t = Seconds::new(120.0);
    let p: Watts = e / t;
    assert_abs_diff_eq!(p.value(), 5.0, epsilon = 1e-12);
}

#[test]
fn side_length_from_area() {
    let area = SquareMeters::new(2.0);
    let side: Meters = area.sqrt();
    assert_relative_eq!(side.value(), core::f64::consts::SQRT_2, max_relative = 1e-15);
}

#[test]
fn sqrt_of_squared_velocity_recovers_magnitude() {
    let v = MetersPerSecond::new(-7.25);
    let magnitude: MetersPerSecond = v.squared().sqrt();
    assert_relative_eq!(magnitude.value(), 7.25, max_relative = 1e-12);
}

#[test]
fn density_times_volume_is_mass() {
    let rho = KilogramsPerCubicMeter::new(1_000.0);
    let v = CubicMeters::new(0.002);
    let m: Kilograms = rho * v;
    assert_abs_diff_eq!(m.value(), 2.0, epsilon = 1e-12);
}

#[test]
fn ratio_feeds_transcendentals() {
    // Opposite over hypotenuse is dimensionless, so trig applies.
    let opposite = Meters::new(1.0);
    let hypotenuse = Meters::new(2.0);
    let ratio: Unitless = opposite / hypotenuse;
    let angle = Unitless::PI / 6.0;
    assert_abs_diff_eq!(angle.sin().value(), ratio.value(), epsilon = 1e-12);
}

#[test]
fn nan_propagates_through_a_pipeline() {
    let v: MetersPerSecond = Meters::NAN / Seconds::new(2.0);
    let e: Joules = 0.5 * Kilograms::new(80.0) * v.squared();
    assert!(e.is_nan());
    assert!(e != e);
}

#[test]
fn division_by_zero_yields_infinity() {
    let v: MetersPerSecond = Meters::new(1.0) / Seconds::ZERO;
    assert!(v.is_infinite());
    assert_eq!(MetersPerSecond::signed_infinity(v), MetersPerSecond::INFINITY);
}

#[test]
fn compound_assignment_scales_in_place() {
    let mut d = Meters::new(10.0);
    d += Meters::new(5.0);
    d -= Meters::new(3.0);
    d *= Unitless::new(2.0);
    d /= 4.0;
    assert_abs_diff_eq!(d.value(), 6.0, epsilon = 1e-12);
}

#[test]
fn strip_at_the_rendering_boundary() {
    // A layout position is computed with full dimension checking, then handed
    // to drawing code that wants bare numbers.
    fn draw_at(x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    let x = Meters::new(12.0);
    let y = Meters::new(8.0);
    let (px, py) = draw_at(x.strip().value(), y.strip().value());
    assert_eq!((px, py), (12.0, 8.0));
}

#[test]
fn display_formats_signatures() {
    assert_eq!(Meters::new(42.0).to_string(), "42 m");
    assert_eq!(MetersPerSecond::new(10.0).to_string(), "10 m s^-1");
    assert_eq!(Joules::new(1.5).to_string(), "1.5 kg m^2 s^-2");
    assert_eq!(Unitless::new(0.5).to_string(), "0.5");
}

#[test]
fn unit_constants_have_value_one() {
    assert_eq!(M.value(), 1.0);
    assert_eq!(S.value(), 1.0);
    assert_eq!(KG.value(), 1.0);
}

#[test]
fn constants_can_be_scaled() {
    let distance = 4.2 * M;
    assert_eq!(distance.value(), 4.2);

    let dt = 0.25 * S;
    assert_eq!(dt.value(), 0.25);
}

#[cfg(feature = "serde")]
mod serde_integration {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn scalar_roundtrips_as_raw_f64() {
        let v = MetersPerSecond::new(29.78);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "29.78");
        let back: MetersPerSecond = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[derive(Serialize, Deserialize)]
    struct Snapshot {
        #[serde(with = "dimq::serde_with_unit")]
        position: Meters,
        #[serde(with = "dimq::serde_with_unit")]
        velocity: MetersPerSecond,
    }

    #[test]
    fn tagged_snapshot_roundtrips() {
        let s = Snapshot {
            position: Meters::new(1.5),
            velocity: MetersPerSecond::new(-3.0),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"{"position":{"value":1.5,"unit":"m"},"velocity":{"value":-3.0,"unit":"m s^-1"}}"#
        );

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.position, s.position);
        assert_eq!(back.velocity, s.velocity);
    }

    #[test]
    fn tagged_snapshot_rejects_wrong_signature() {
        let json = r#"{"position":{"value":1.5,"unit":"s"},"velocity":{"value":0.0,"unit":"m s^-1"}}"#;
        let result: Result<Snapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
