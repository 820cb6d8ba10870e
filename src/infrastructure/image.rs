//! Image file to data URL conversion.
//!
//! Job and profile images are uploaded inline as `data:` URLs. Only PNG and
//! JPEG files are accepted, matched by extension.

use super::paths::expand_tilde;
use crate::domain::error::{LurkError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

const UNSUPPORTED: &str = "provided file is not a png, jpg or jpeg image.";

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Reads an image file and encodes it as a base64 data URL.
///
/// `~` is expanded to the sandbox host mount before reading.
///
/// # Errors
///
/// Returns [`LurkError::Image`] if the extension is not png/jpg/jpeg or the
/// file cannot be read.
pub fn file_to_data_url(path: &str) -> Result<String> {
    let expanded = expand_tilde(path.trim());
    let path = Path::new(&expanded);

    let mime = mime_for(path).ok_or_else(|| LurkError::Image(UNSUPPORTED.to_string()))?;

    let bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "failed to read image");
        LurkError::Image("Cannot read image file".to_string())
    })?;

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_png_as_data_url() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"abc").unwrap();

        let url = file_to_data_url(file.path().to_str().unwrap()).unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn accepts_uppercase_jpeg_extension() {
        let mut file = tempfile::Builder::new().suffix(".JPEG").tempfile().unwrap();
        file.write_all(b"abc").unwrap();

        let url = file_to_data_url(file.path().to_str().unwrap()).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn rejects_other_extensions() {
        let file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
        let err = file_to_data_url(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.user_message(), UNSUPPORTED);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let err = file_to_data_url(missing.to_str().unwrap()).unwrap_err();
        assert_eq!(err.user_message(), "Cannot read image file");
    }
}
