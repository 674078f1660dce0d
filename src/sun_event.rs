use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveTime, Offset, TimeDelta, TimeZone};
use log::{debug, trace};

use crate::angles::{
    degree_acos, degree_asin, degree_atan, degree_cos, degree_sin, degree_tan, normalize_angle,
    normalize_hours, quadrant, DEGREES_PER_HOUR,
};
use crate::types::{DayEvents, Direction, EventTime, Location, SolarEvent, SunEventError};

/// Local clock hour (fractional, in `[0, 24)`) at which the sun crosses
/// `zenith` on day `day_of_year`.
///
/// `utc_offset_hours` is added to the UTC result and may be fractional.
/// Fails when the sun stays below (`NeverRises`) or above (`NeverSets`) the
/// zenith for the whole day.
pub fn local_event_hours(
    direction: Direction,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    day_of_year: u32,
    utc_offset_hours: f64,
) -> Result<f64, SunEventError> {
    let n = day_of_year as f64;

    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = match direction {
        Direction::Rising => n + ((6.0 - lng_hour) / 24.0),
        Direction::Setting => n + ((18.0 - lng_hour) / 24.0),
    };

    // mean anomaly
    let m = (0.9856 * t) - 3.289;

    // true longitude
    let l = normalize_angle(
        m + (1.916 * degree_sin(m)) + (0.020 * degree_sin(2.0 * m)) + 282.634,
    );

    // right ascension, pulled into the quadrant of L, in hours
    let mut ra = normalize_angle(degree_atan(0.91764 * degree_tan(l)));
    ra += quadrant(l) - quadrant(ra);
    ra /= DEGREES_PER_HOUR;

    let sin_dec = 0.39782 * degree_sin(l);
    let cos_dec = degree_cos(degree_asin(sin_dec));

    let cos_h = (degree_cos(zenith) - (sin_dec * degree_sin(latitude)))
        / (cos_dec * degree_cos(latitude));
    trace!(
        "{} at ({}, {}) zenith {}: t={:.5} M={:.5} L={:.5} RA={:.5}h sinDec={:.5} cosH={:.5}",
        direction, latitude, longitude, zenith, t, m, l, ra, sin_dec, cos_h
    );
    if cos_h > 1.0 {
        debug!("cosH={:.4} at latitude {}: sun never rises", cos_h, latitude);
        return Err(SunEventError::NeverRises);
    }
    if cos_h < -1.0 {
        debug!("cosH={:.4} at latitude {}: sun never sets", cos_h, latitude);
        return Err(SunEventError::NeverSets);
    }

    let h = match direction {
        Direction::Rising => 360.0 - degree_acos(cos_h),
        Direction::Setting => degree_acos(cos_h),
    } / DEGREES_PER_HOUR;

    // local mean time of the event
    let local_mean = h + ra - (0.06571 * t) - 6.622;

    let ut = normalize_hours(local_mean - lng_hour);
    let local = normalize_hours(ut + utc_offset_hours);
    trace!("T={:.5} UT={:.5} local={:.5}", local_mean, ut, local);
    Ok(local)
}

/// Splits fractional hours into whole hour, minute and second, flooring each.
pub fn hours_to_hms(hours: f64) -> (u32, u32, u32) {
    let hour = hours.floor();
    let minute = ((hours - hour) * 60.0).floor();
    let second = (((hours - hour) * 60.0 - minute) * 60.0).floor();
    // float rounding must not push a component onto the next unit
    (
        (hour as u32).min(23),
        (minute as u32).min(59),
        (second as u32).min(59),
    )
}

/// Time of the event on `reference`'s calendar date, expressed in the UTC
/// offset in effect at `reference`.
///
/// The offset is taken once, at `reference`, and applied to the whole day even
/// when a daylight-saving transition falls between `reference` and the event.
pub fn compute_event_time<Tz: TimeZone>(
    direction: Direction,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    let offset: FixedOffset = reference.offset().fix();
    let offset_secs = offset.local_minus_utc();
    let offset_hours = offset_secs as f64 / 3600.0;

    let local_hours = local_event_hours(
        direction,
        latitude,
        longitude,
        zenith,
        reference.ordinal(),
        offset_hours,
    )?;
    let (hour, minute, second) = hours_to_hms(local_hours);

    let since_midnight = i64::from(hour * 3600 + minute * 60 + second);
    let local = reference
        .date_naive()
        .and_time(NaiveTime::MIN + TimeDelta::seconds(since_midnight));
    let utc = local - TimeDelta::seconds(i64::from(offset_secs));
    Ok(DateTime::from_naive_utc_and_offset(utc, offset))
}

pub fn event_time_at<Tz: TimeZone>(
    event: SolarEvent,
    latitude: f64,
    longitude: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    compute_event_time(
        event.direction(),
        latitude,
        longitude,
        event.zenith(),
        reference,
    )
}

/// Like [`event_time_at`], for today in the process's local time zone.
pub fn event_time(event: SolarEvent, latitude: f64, longitude: f64) -> EventTime {
    event_time_at(event, latitude, longitude, &Local::now())
}

pub fn sunrise(latitude: f64, longitude: f64) -> EventTime {
    event_time(SolarEvent::Sunrise, latitude, longitude)
}

pub fn sunset(latitude: f64, longitude: f64) -> EventTime {
    event_time(SolarEvent::Sunset, latitude, longitude)
}

pub fn dawn(latitude: f64, longitude: f64) -> EventTime {
    event_time(SolarEvent::Dawn, latitude, longitude)
}

pub fn dusk(latitude: f64, longitude: f64) -> EventTime {
    event_time(SolarEvent::Dusk, latitude, longitude)
}

pub fn sunrise_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    event_time_at(SolarEvent::Sunrise, latitude, longitude, reference)
}

pub fn sunset_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    event_time_at(SolarEvent::Sunset, latitude, longitude, reference)
}

pub fn dawn_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    event_time_at(SolarEvent::Dawn, latitude, longitude, reference)
}

pub fn dusk_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    reference: &DateTime<Tz>,
) -> EventTime {
    event_time_at(SolarEvent::Dusk, latitude, longitude, reference)
}

pub fn day_events_at<Tz: TimeZone>(location: Location, reference: &DateTime<Tz>) -> DayEvents {
    let at = |event| event_time_at(event, location.latitude, location.longitude, reference);
    DayEvents {
        sunrise: at(SolarEvent::Sunrise),
        sunset: at(SolarEvent::Sunset),
        dawn: at(SolarEvent::Dawn),
        dusk: at(SolarEvent::Dusk),
    }
}

pub fn day_events(location: Location) -> DayEvents {
    day_events_at(location, &Local::now())
}
