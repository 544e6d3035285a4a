use chrono::{TimeZone, Utc};

/// Human readable age of a unix timestamp, e.g. "3 years ago".
pub fn timestamp_to_elapsed(timestamp: i64) -> String {
    let Some(then) = Utc.timestamp_opt(timestamp, 0).single() else {
        return "some time ago".to_string();
    };
    let duration = Utc::now().signed_duration_since(then);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_hours() < 24 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_days() < 30 {
        plural(duration.num_days(), "day")
    } else if duration.num_days() < 365 {
        plural(duration.num_days() / 30, "month")
    } else {
        plural(duration.num_days() / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}

/// The API entity-encodes titles and markdown bodies.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
