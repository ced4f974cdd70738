//! Human-readable event listings.

use std::fmt::Write;

use moments_core::Event;

/// Formats minutes as "Xh Ym" when at least an hour, else "Xm".
/// Negative durations render as 0m.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 0 {
        return "0m".to_string();
    }
    let hours = minutes / 60;
    let minutes = minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// One line per event: time span, name, size, duration, density, type, confidence.
///
/// Durations are shown in whole minutes, rounded down.
#[allow(clippy::cast_possible_truncation)]
pub fn format_event(event: &Event) -> String {
    format!(
        "{}-{}  {:<16}{:>4} photos  {:>7}  {:>6.1}/hr  {:<12}{}",
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M"),
        event.name,
        event.photo_count,
        format_duration(event.duration_minutes.floor() as i64),
        event.photo_density,
        event.event_type,
        event.confidence,
    )
}

/// Formats a list of events under a heading.
pub fn format_events(heading: &str, events: &[Event]) -> String {
    let mut output = String::new();
    writeln!(output, "{heading}").unwrap();

    if events.is_empty() {
        writeln!(output, "  No events found.").unwrap();
        return output;
    }

    for event in events {
        writeln!(output, "  {}", format_event(event)).unwrap();
        if !event.devices.is_empty() {
            let devices: Vec<String> = event
                .devices
                .iter()
                .map(|d| format!("{} ({})", d.model, d.count))
                .collect();
            writeln!(output, "      devices: {}", devices.join(", ")).unwrap();
        }
    }

    output
}
