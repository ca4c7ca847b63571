//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format bytes into human-readable string (e.g., "1.20 KB", "5.30 MB")
///
/// # Examples
/// ```
/// use pintui::logic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(2_097_152), "2.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Size in megabytes with two decimals, as the upload panel shows it
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Pin date in the local timezone, date only
pub fn format_pin_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Pin date and time in the local timezone
pub fn format_pin_timestamp(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format elapsed seconds as the two most significant units
///
/// # Examples
/// ```
/// use pintui::logic::formatting::format_elapsed;
///
/// assert_eq!(format_elapsed(42), "42s");
/// assert_eq!(format_elapsed(3660), "1h 1m");
/// ```
pub fn format_elapsed(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Truncate to a display width, ending with '…' when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Shorten a content hash to `head…tail`
///
/// # Examples
/// ```
/// use pintui::logic::formatting::shorten_hash;
///
/// assert_eq!(shorten_hash("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG", 6), "QmYwAP…WnPbdG");
/// assert_eq!(shorten_hash("QmShort", 6), "QmShort");
/// ```
pub fn shorten_hash(hash: &str, keep: usize) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= keep * 2 + 1 {
        return hash.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Mask a secret for display, keeping its length readable
pub fn mask_secret(secret: &str) -> String {
    "•".repeat(secret.chars().count().min(32))
}
