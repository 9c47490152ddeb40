use chrono::{DateTime, Local, TimeZone, Utc};

/// Day/month/year hour:minute in the device's local time.
pub fn format_date_time(at: &DateTime<Utc>) -> String {
    format_date_time_in(at, &Local)
}

pub fn format_date_time_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%d/%m/%Y %H:%M").to_string()
}

/// Hour:minute in local time, used for "present since" notices.
pub fn format_clock(at: &DateTime<Utc>) -> String {
    format_clock_in(at, &Local)
}

pub fn format_clock_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%H:%M").to_string()
}
