use chrono::{DateTime, Local, NaiveTime, Utc};

/// Current wall-clock time, milliseconds since epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Midnight at the start of `now`'s local calendar day, in epoch ms.
/// When local midnight does not exist (DST edge), the earliest valid
/// local time of the day is used.
pub fn start_of_day_ms(now: DateTime<Local>) -> i64 {
    now.date_naive()
        .and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}
