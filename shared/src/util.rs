/// Current local calendar date as `YYYY-MM-DD`.
///
/// Matches the wire format of `Order::date`, so "today" checks are plain
/// string equality.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Current instant as an ISO-8601 timestamp.
pub fn now_iso() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
