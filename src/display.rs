//! Human-readable time phrases shown in challenge prompts, feedback text,
//! and screen-reader labels.

use crate::clock::ClockTime;

/// 12-hour display value for a zero-based hour (0 renders as 12).
pub fn display_hour(hour: i32) -> i32 {
    let h = hour.rem_euclid(12);
    if h == 0 { 12 } else { h }
}

/// Converts a 24-hour clock hour to its 12-hour display value.
pub fn to_12_hour(hour24: i32) -> i32 {
    display_hour(hour24)
}

/// Converts a 12-hour display value (1..=12) to a 24-hour clock hour.
pub fn to_24_hour(hour12: i32, is_pm: bool) -> i32 {
    let h = hour12.rem_euclid(12); // 12 -> 0
    if is_pm { h + 12 } else { h }
}

/// Phrase for a time on the face.
///
/// The quarter marks get the spoken forms children learn first:
/// ":00" is "`H` o'clock", ":15" "Quarter past `H`", ":30" "Half past `H`",
/// and ":45" "Quarter to `H+1`" (the hour rolls over, 11:45 reads
/// "Quarter to 12"). Anything else renders zero-padded as "`H:MM`".
pub fn format_time(hour: i32, minute: i32) -> String {
    let h = display_hour(hour);
    match minute.rem_euclid(60) {
        0 => format!("{h} o'clock"),
        15 => format!("Quarter past {h}"),
        30 => format!("Half past {h}"),
        45 => format!("Quarter to {}", display_hour(hour + 1)),
        m => format!("{h}:{m:02}"),
    }
}

/// Zero-padded 24-hour rendering ("07:05").
pub fn format_time_24h(hour24: i32, minute: i32) -> String {
    format!("{:02}:{:02}", hour24.rem_euclid(24), minute.rem_euclid(60))
}

/// Screen-reader label for a 24-hour wall time ("3:05 PM", "9 o'clock AM").
pub fn aria_label(hour24: i32, minute: i32) -> String {
    let h24 = hour24.rem_euclid(24);
    let m = minute.rem_euclid(60);
    let period = if h24 >= 12 { "PM" } else { "AM" };
    let h = display_hour(h24);
    if m == 0 {
        format!("{h} o'clock {period}")
    } else {
        format!("{h}:{m:02} {period}")
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_time(self.hour as i32, self.minute as i32))
    }
}
