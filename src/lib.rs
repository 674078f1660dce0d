//! Sunrise, sunset, dawn and dusk for a latitude/longitude, computed with the
//! sunrise equation on the reference instant's calendar date.
//!
//! ```no_run
//! use sun_events::{sunrise, SunEventError};
//!
//! match sunrise(52.52, 13.40) {
//!     Ok(time) => println!("sunrise at {}", time.format("%H:%M:%S")),
//!     Err(SunEventError::NeverRises) => println!("polar night"),
//!     Err(SunEventError::NeverSets) => println!("midnight sun"),
//! }
//! ```

pub mod angles;
pub mod sun_event;
pub mod types;

pub use angles::{
    deg_to_rad, degree_acos, degree_asin, degree_atan, degree_cos, degree_sin, degree_tan,
    normalize_angle, normalize_hours, normalize_range, quadrant, rad_to_deg, DEGREES_PER_HOUR,
};

pub use sun_event::{
    compute_event_time, dawn, dawn_at, day_events, day_events_at, dusk, dusk_at, event_time,
    event_time_at, hours_to_hms, local_event_hours, sunrise, sunrise_at, sunset, sunset_at,
};

pub use types::{
    DayEvents, Direction, EventTime, Location, SolarEvent, SunEventError, ZENITH_CIVIL,
    ZENITH_OFFICIAL,
};
