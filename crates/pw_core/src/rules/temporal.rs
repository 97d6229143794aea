// Rules that read the clock. Re-derived on every evaluation, never cached.

use chrono::{Datelike, Timelike, Weekday};

use super::Probe;

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Rule 9: today's and tomorrow's weekday, any case.
pub fn today_and_tomorrow(p: &Probe<'_>) -> bool {
    let today = p.now.weekday();
    let lower = p.candidate.to_lowercase();
    lower.contains(&weekday_name(today).to_lowercase())
        && lower.contains(&weekday_name(today.succ()).to_lowercase())
}

/// Rule 22: hour unpadded, minute padded to two digits.
pub fn hour_and_minute(p: &Probe<'_>) -> bool {
    let hour = p.now.hour().to_string();
    let minute = format!("{:02}", p.now.minute());
    p.candidate.contains(&hour) && p.candidate.contains(&minute)
}

/// Rule 36
pub fn meridiem(p: &Probe<'_>) -> bool {
    let marker = if p.now.hour() < 12 { "AM" } else { "PM" };
    p.candidate.contains(marker)
}
