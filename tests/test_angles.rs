use sun_events::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Degree trig ──

#[test]
fn test_degree_trig_known_values() {
    assert_approx!(degree_sin(90.0), 1.0, 1e-12);
    assert_approx!(degree_cos(0.0), 1.0, 1e-12);
    assert_approx!(degree_tan(45.0), 1.0, 1e-12);
    assert_approx!(degree_sin(30.0), 0.5, 1e-12);
    assert_approx!(degree_cos(60.0), 0.5, 1e-12);
    assert_approx!(degree_cos(90.0), 0.0, 1e-12);
}

#[test]
fn test_degree_inverse_trig_known_values() {
    assert_approx!(degree_asin(1.0), 90.0, 1e-10);
    assert_approx!(degree_acos(0.0), 90.0, 1e-10);
    assert_approx!(degree_acos(-1.0), 180.0, 1e-10);
    assert_approx!(degree_atan(1.0), 45.0, 1e-10);
    assert_approx!(degree_atan(-1.0), -45.0, 1e-10);
}

#[test]
fn test_degree_trig_inverse_roundtrip() {
    for &deg in &[-80.0, -45.0, -10.0, 0.0, 12.5, 45.0, 80.0] {
        assert_approx!(degree_asin(degree_sin(deg)), deg, 1e-9);
        assert_approx!(degree_atan(degree_tan(deg)), deg, 1e-9);
    }
    for &deg in &[0.0, 30.0, 83.0, 90.0, 135.0, 180.0] {
        assert_approx!(degree_acos(degree_cos(deg)), deg, 1e-6);
    }
}

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}

// ── NormalizeRange ──

#[test]
fn test_normalize_range_known_values() {
    assert_eq!(normalize_range(370.0, 360.0), 10.0);
    assert_eq!(normalize_range(-10.0, 360.0), 350.0);
    assert_eq!(normalize_range(25.0, 24.0), 1.0);
    assert_eq!(normalize_range(360.0, 360.0), 0.0);
    assert_eq!(normalize_range(24.0, 24.0), 0.0);
    assert_eq!(normalize_range(0.0, 24.0), 0.0);
}

#[test]
fn test_normalize_range_multiple_wraps() {
    assert_approx!(normalize_range(725.5, 360.0), 5.5, 1e-9);
    assert_approx!(normalize_range(-725.5, 360.0), 354.5, 1e-9);
    assert_approx!(normalize_range(-30.0, 24.0), 18.0, 1e-9);
    assert_approx!(normalize_range(50.25, 24.0), 2.25, 1e-9);
}

#[test]
fn test_normalize_range_bounds_and_idempotence() {
    let inputs = [
        -1e9, -1081.3, -360.0, -24.0, -1e-20, -0.001, 0.0, 0.001, 23.999, 24.0, 359.999, 360.0,
        1000.0, 1e12,
    ];
    for &max in &[24.0, 360.0] {
        for &v in &inputs {
            let once = normalize_range(v, max);
            assert!((0.0..max).contains(&once), "v={} max={} got {}", v, max, once);
            assert_eq!(normalize_range(once, max), once, "v={} max={}", v, max);
        }
    }
}

#[test]
fn test_normalize_angle_and_hours() {
    assert_approx!(normalize_angle(-90.0), 270.0, 1e-12);
    assert_approx!(normalize_angle(405.0), 45.0, 1e-12);
    assert_approx!(normalize_hours(-1.5), 22.5, 1e-12);
    assert_approx!(normalize_hours(30.0), 6.0, 1e-12);
}

// ── Quadrant ──

#[test]
fn test_quadrant() {
    assert_eq!(quadrant(0.0), 0.0);
    assert_eq!(quadrant(89.9), 0.0);
    assert_eq!(quadrant(90.0), 90.0);
    assert_eq!(quadrant(200.0), 180.0);
    assert_eq!(quadrant(359.9), 270.0);
}

#[test]
fn test_degrees_per_hour() {
    assert_eq!(DEGREES_PER_HOUR * 24.0, 360.0);
}
