/// Bytes per kilobyte (binary, 1024-based).
pub const KB: u64 = 1024;
/// Bytes per megabyte.
pub const MB: u64 = KB * 1024;
/// Bytes per gigabyte.
pub const GB: u64 = MB * 1024;
/// Bytes per terabyte. Exposed as a threshold for callers; the formatter
/// never selects TB and reports anything this large in GB.
pub const TB: u64 = GB * 1024;

/// Format a byte count into a human-readable string using the largest
/// applicable unit, e.g. `"1.50 KB"` or `"1023 B"`.
pub fn format_file_size(size_in_bytes: u64) -> String {
    if size_in_bytes >= GB {
        format!("{:.2} GB", size_in_bytes as f64 / GB as f64)
    } else if size_in_bytes >= MB {
        format!("{:.2} MB", size_in_bytes as f64 / MB as f64)
    } else if size_in_bytes >= KB {
        format!("{:.2} KB", size_in_bytes as f64 / KB as f64)
    } else {
        format!("{size_in_bytes} B")
    }
}
