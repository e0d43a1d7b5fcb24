use chrono::DateTime;

/// Convert Windows filetime values to unixepoch
pub(crate) fn filetime_to_unixepoch(filetime: &u64) -> i64 {
    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 11644473600;

    // We should not overflow because of the division.
    (filetime / windows_nano) as i64 - seconds_to_unix
}

/// Format unixepoch seconds as a calendar datetime. Values chrono cannot represent fall back to the epoch
pub(crate) fn unixepoch_to_datetime(timestamp: i64) -> String {
    let date_opt = DateTime::from_timestamp(timestamp, 0);
    match date_opt {
        Some(result) => result.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::from("1970-01-01 00:00:00"),
    }
}
