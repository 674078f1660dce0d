use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Civil zenith used for the twilight events.
pub const ZENITH_CIVIL: f64 = 83.0;
/// Official zenith: the geometric horizon.
pub const ZENITH_OFFICIAL: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rising,
    Setting,
}

impl Direction {
    pub fn is_rising(self) -> bool {
        matches!(self, Direction::Rising)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Rising => "rising",
            Direction::Setting => "setting",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
    Dawn,
    Dusk,
}

impl SolarEvent {
    pub const ALL: [SolarEvent; 4] = [
        SolarEvent::Sunrise,
        SolarEvent::Sunset,
        SolarEvent::Dawn,
        SolarEvent::Dusk,
    ];

    pub fn direction(self) -> Direction {
        match self {
            SolarEvent::Sunrise | SolarEvent::Dawn => Direction::Rising,
            SolarEvent::Sunset | SolarEvent::Dusk => Direction::Setting,
        }
    }

    pub fn zenith(self) -> f64 {
        match self {
            SolarEvent::Sunrise | SolarEvent::Sunset => ZENITH_OFFICIAL,
            SolarEvent::Dawn | SolarEvent::Dusk => ZENITH_CIVIL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolarEvent::Sunrise => "sunrise",
            SolarEvent::Sunset => "sunset",
            SolarEvent::Dawn => "dawn",
            SolarEvent::Dusk => "dusk",
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sun does not cross the requested zenith on the reference date.
///
/// Both cases are ordinary outcomes inside the polar circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SunEventError {
    #[error("the sun never rises at this location on this date")]
    NeverRises,
    #[error("the sun never sets at this location on this date")]
    NeverSets,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            longitude: -89.6,
        }
    }
}

pub type EventTime = Result<DateTime<FixedOffset>, SunEventError>;

#[derive(Debug, Clone, PartialEq)]
pub struct DayEvents {
    pub sunrise: EventTime,
    pub sunset: EventTime,
    pub dawn: EventTime,
    pub dusk: EventTime,
}

impl DayEvents {
    pub fn get(&self, event: SolarEvent) -> &EventTime {
        match event {
            SolarEvent::Sunrise => &self.sunrise,
            SolarEvent::Sunset => &self.sunset,
            SolarEvent::Dawn => &self.dawn,
            SolarEvent::Dusk => &self.dusk,
        }
    }
}
