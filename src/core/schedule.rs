use chrono::{DateTime, Days, NaiveDate, TimeZone, Timelike, Utc};

pub fn local_now<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> DateTime<Tz> {
    now.with_timezone(tz)
}

pub fn local_hour<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> u32 {
    local_now(now, tz).hour()
}

/// The local calendar day before the one `now` falls on.
pub fn previous_day<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    let today = local_now(now, tz).date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

/// Date segment format of the price API, e.g. `20231027`.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
