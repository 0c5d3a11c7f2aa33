//! 12-hour clock formatting shared by the base-hour readout and the
//! per-timezone results.

/// Splits a fractional base hour into whole hours and rounded minutes.
///
/// Hours outside `[0, 24)` wrap into the day, and a fractional part that
/// rounds up to a full hour carries over (so `13.9999` is `(14, 0)`,
/// never `13:60`).
pub fn split_base_hour(base_hour: f64) -> (u32, u32) {
    let base_hour = if base_hour.is_finite() {
        base_hour.rem_euclid(24.0)
    } else {
        0.0
    };
    let hour = base_hour.floor() as u32;
    let minute = ((base_hour - base_hour.floor()) * 60.0).round() as u32;
    if minute == 60 {
        ((hour + 1) % 24, 0)
    } else {
        (hour % 24, minute)
    }
}

/// Formats a 24-hour time as `H:MM AM/PM`. Hour 0 renders as 12 AM and
/// hour 12 as 12 PM.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// Formats the base hour directly, without any timezone conversion. It is
/// already expressed in the reference timezone's local terms.
pub fn format_base_hour(base_hour: f64) -> String {
    let (hour, minute) = split_base_hour(base_hour);
    format_clock(hour, minute)
}
