//! Calendar Helpers
//!
//! Only the calendar day of a date matters to the checklist.

use chrono::{
    DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};

/// Format used by `<input type="date">`
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Step used to walk past a DST gap; gaps are whole multiples of it
const GAP_STEP_MINUTES: i64 = 15;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Start of `date` in `tz`, as a UTC timestamp with millisecond precision
/// (`2026-10-15T03:00:00.000Z`)
pub fn start_of_day_iso<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> String {
    let instant = first_instant_of_day(date, |local| {
        tz.from_local_datetime(local)
            .earliest()
            .map(|resolved| resolved.with_timezone(&Utc))
    });
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// First local time of `date` that `resolve` maps to an instant. Midnight is
/// skipped in zones whose DST starts at 00:00.
fn first_instant_of_day(
    date: NaiveDate,
    resolve: impl Fn(&NaiveDateTime) -> Option<DateTime<Utc>>,
) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    let step = Duration::minutes(GAP_STEP_MINUTES);
    let mut local = midnight;
    while local.date() == date {
        if let Some(instant) = resolve(&local) {
            return instant;
        }
        local += step;
    }
    Utc.from_utc_datetime(&midnight)
}

/// Query value for `GET /day` in the browser's time zone
pub fn day_query_value(date: NaiveDate) -> String {
    start_of_day_iso(date, &Local)
}

/// True once the last millisecond of `date` lies strictly before `now`
pub fn is_date_in_past(date: NaiveDate, now: NaiveDateTime) -> bool {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .is_some_and(|end_of_day| end_of_day < now)
}

pub fn is_locked_now(date: NaiveDate) -> bool {
    is_date_in_past(date, Local::now().naive_local())
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}
