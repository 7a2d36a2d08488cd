//! Rendering chapter offsets as clock strings

/// Format whole seconds as `H:MM:SS` (hours unpadded, always present).
///
/// `3661` renders as `"1:01:01"`, `0` as `"0:00:00"`.
pub fn format_timestamp(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}
