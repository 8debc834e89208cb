// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for the itinerary calendar and date formatting.
//!
//! Itinerary times are local wall-clock strings; no timezone conversion is
//! ever applied.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::models::DAY_COUNT;

/// Calendar date of itinerary day 1 (Senin, 18 Agustus 2025).
fn first_day() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 8, 18)
}

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jum'at",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Ahad",
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Calendar date of a 1-based itinerary day, `None` outside 1..=11.
pub fn itinerary_date(day: u8) -> Option<NaiveDate> {
    if !(1..=DAY_COUNT).contains(&day) {
        return None;
    }
    first_day()?.checked_add_days(chrono::Days::new(u64::from(day) - 1))
}

/// "Hari N"
pub fn day_name(day: u8) -> String {
    format!("Hari {}", day)
}

/// Short day-date, e.g. "18 Agustus". Empty for days outside the itinerary.
pub fn short_day_date(day: u8) -> String {
    itinerary_date(day)
        .map(|date| format!("{} {}", date.day(), month_name(date)))
        .unwrap_or_default()
}

/// Long day-date, e.g. "Senin, 18 Agustus 2025". Empty for days outside the
/// itinerary. Uniforms are keyed by this exact string.
pub fn long_day_date(day: u8) -> String {
    itinerary_date(day)
        .map(|date| {
            format!(
                "{}, {} {} {}",
                weekday_name(date.weekday()),
                date.day(),
                month_name(date),
                date.year()
            )
        })
        .unwrap_or_default()
}

/// Whether `value` is a zero-padded 24-hour `HH:MM` clock time.
pub fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hour < 24 && minute < 60
}

/// Attachment name for an exported checklist.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("umroh-itinerary-{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_day_dates_match_printed_schedule() {
        assert_eq!(long_day_date(1), "Senin, 18 Agustus 2025");
        assert_eq!(long_day_date(5), "Jum'at, 22 Agustus 2025");
        assert_eq!(long_day_date(7), "Ahad, 24 Agustus 2025");
        assert_eq!(long_day_date(11), "Kamis, 28 Agustus 2025");
    }

    #[test]
    fn test_out_of_range_days_format_empty() {
        assert_eq!(long_day_date(0), "");
        assert_eq!(short_day_date(12), "");
        assert!(itinerary_date(12).is_none());
    }

    #[test]
    fn test_short_day_date_and_name() {
        assert_eq!(short_day_date(3), "20 Agustus");
        assert_eq!(day_name(10), "Hari 10");
    }

    #[test]
    fn test_is_clock_time() {
        assert!(is_clock_time("00:00"));
        assert!(is_clock_time("23:59"));
        assert!(!is_clock_time("24:00"));
        assert!(!is_clock_time("9:00"));
        assert!(!is_clock_time("09:0a"));
        assert!(!is_clock_time("09-00"));
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2025, 8, 21, 6, 30, 0).unwrap();
        assert_eq!(export_file_name(now), "umroh-itinerary-2025-08-21.json");
    }
}
