//! Human-readable rendering of byte counts and durations

const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format a byte count using binary (1024-based) units.
///
/// Counts below one KiB are printed as whole bytes; larger counts use the
/// largest unit whose scaled value is at least one, with three decimals.
/// A value that rounds up to 1024 moves to the next unit.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for candidate in UNITS {
        value /= 1024.0;
        unit = candidate;
        if (value * 1000.0).round() < 1_024_000.0 {
            break;
        }
    }

    format!("{value:.3} {unit}")
}

/// Format elapsed seconds as `1h2m3s`, leaving out zero components.
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s"));
    }
    out
}
