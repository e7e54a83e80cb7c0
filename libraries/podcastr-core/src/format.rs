//! Display formatting shared by the listing pages and the player

/// Format a duration in seconds as `HH:MM:SS`
///
/// Every component is zero padded to two digits; hours are not wrapped, so
/// 100 hours renders as `100:00:00`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
