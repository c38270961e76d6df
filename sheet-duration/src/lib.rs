use std::time::Duration;

/// Sub-millisecond durations are printed in microseconds, anything above a
/// second as seconds with two decimals.
pub fn beautify_duration(elapsed_duration: Duration) -> String {
    let millis = elapsed_duration.as_millis();
    if millis == 0 {
        format!("{}µs", elapsed_duration.as_micros())
    } else if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", elapsed_duration.as_secs_f64())
    }
}
