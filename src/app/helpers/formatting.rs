//! Text formatting utilities for UI display

use std::path::Path;

/// Lines of description shown before "Show more"
pub const DESCRIPTION_PREVIEW_LINES: usize = 3;

/// Compact counter label: 950, 45K, 1.2M
#[allow(clippy::cast_precision_loss)]
pub fn format_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => compact(n as f64 / 1_000.0, "K"),
        _ => compact(n as f64 / 1_000_000.0, "M"),
    }
}

fn compact(value: f64, suffix: &str) -> String {
    if value >= 100.0 || (value.fract() * 10.0).floor() == 0.0 {
        format!("{}{suffix}", value.floor())
    } else {
        format!("{:.1}{suffix}", (value * 10.0).floor() / 10.0)
    }
}

/// First lines of a description and whether anything was cut
pub fn description_preview(description: &str, max_lines: usize) -> (String, bool) {
    let mut lines = description.lines();
    let shown: Vec<&str> = lines.by_ref().take(max_lines).collect();
    let truncated = lines.next().is_some();
    (shown.join("\n"), truncated)
}

/// Shortens a file path for labels, keeping the file name and, if it fits,
/// its parent directory: `/home/me/videos/launch/clip.mp4` becomes
/// `.../launch/clip.mp4`.
pub fn truncate_path_smart(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let path_obj = Path::new(path);
    let filename = path_obj
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("file");

    path_obj
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|p| p.to_str())
        .map(|parent| format!(".../{parent}/{filename}"))
        .filter(|short| short.len() <= max_len)
        .unwrap_or_else(|| format!(".../{filename}"))
}
