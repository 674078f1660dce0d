pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn degree_sin(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn degree_cos(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn degree_tan(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

pub fn degree_asin(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn degree_acos(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn degree_atan(x: f64) -> f64 {
    rad_to_deg(x.atan())
}

/// Wraps `value` into `[0, max)`.
///
/// Equivalent to repeatedly adding or subtracting `max`, but runs in constant
/// time for any finite input.
pub fn normalize_range(value: f64, max: f64) -> f64 {
    let wrapped = value.rem_euclid(max);
    // tiny negative inputs round up to exactly `max`
    if wrapped >= max {
        wrapped - max
    } else {
        wrapped
    }
}

pub fn normalize_angle(angle: f64) -> f64 {
    normalize_range(angle, 360.0)
}

pub fn normalize_hours(hours: f64) -> f64 {
    normalize_range(hours, 24.0)
}

/// Index of the 90° quadrant containing `angle`, scaled back to degrees.
pub fn quadrant(angle: f64) -> f64 {
    (angle / 90.0).floor() * 90.0
}
