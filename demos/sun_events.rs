use chrono::TimeZone;
use chrono_tz::America::Chicago;

use sun_events::{day_events, day_events_at, Location, SolarEvent};

fn main() {
    let location = Location::default();
    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();

    println!("=== Sun Events Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        location.latitude, -location.longitude
    );
    println!("Date: {}", dt.date_naive());
    println!();

    let events = day_events_at(location, &dt);
    for event in SolarEvent::ALL {
        match events.get(event) {
            Ok(time) => println!("{:<8} {}", event, time.format("%H:%M:%S %:z")),
            Err(err) => println!("{:<8} {}", event, err),
        }
    }

    println!();
    println!("--- Today, local time zone ---");
    let today = day_events(location);
    for event in SolarEvent::ALL {
        match today.get(event) {
            Ok(time) => println!("{:<8} {}", event, time),
            Err(err) => println!("{:<8} {}", event, err),
        }
    }
}
