//! Path utilities for the Zellij sandbox.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, which
//! usually points at the directory Zellij was started from.

use std::path::PathBuf;

/// Returns the directory used for trace output.
///
/// Resolves to `/host/.local/share/zellij/lurkforwork`, i.e.
/// `~/.local/share/zellij/lurkforwork` when Zellij was started from `$HOME`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("lurkforwork")
}

/// Expands tilde paths to the `/host` mount.
///
/// ```
/// use lurkforwork::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/cv.png"), "/host/cv.png");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/cv.png"), "/tmp/cv.png");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
