//! Directory helpers and small string utilities
//!
//! Paths follow the XDG Base Directory layout:
//!
//! - Data: `~/.local/share/glasstube/` - `config.json` and exported catalogs
//! - State: `~/.local/state/glasstube/` - `glasstube.log`
//!
//! # Example
//!
//! ```
//! use glasstube::utils::{ensure_dirs, get_data_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(data_path) = get_data_dir() {
//!     let _config = data_path.join("config.json");
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "glasstube", "glasstube")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700);
        builder.recursive(true);

        for dir in [get_data_dir(), get_state_dir()].into_iter().flatten() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        for dir in [get_data_dir(), get_state_dir()].into_iter().flatten() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

/// Truncates to at most `max_len` bytes, ending in "..." when cut
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Stay on a char boundary
        let end = s
            .char_indices()
            .map(|(idx, _)| idx)
            .take_while(|&idx| idx <= max_len.saturating_sub(3))
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_string("Gaming Hub", 20), "Gaming Hub");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_string("Advanced Programming Techniques", 14);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 14);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let out = truncate_string("Café Crème Brûlée", 8);
        assert!(out.ends_with("..."));
        assert!(out.is_char_boundary(out.len() - 3));
    }

    #[test]
    fn test_dirs_are_namespaced() {
        if let Some(dir) = get_data_dir() {
            assert!(dir.to_string_lossy().contains("glasstube"));
        }
    }
}
