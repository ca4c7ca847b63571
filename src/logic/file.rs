//! File type detection and utilities
//!
//! Pure functions for identifying media types and staging local files.

use std::path::Path;

use crate::model::StagedFile;

/// Guess a media type from a file name's extension
///
/// # Examples
/// ```
/// use pintui::logic::file::guess_media_type;
///
/// assert_eq!(guess_media_type("report.pdf"), "application/pdf");
/// assert_eq!(guess_media_type("photo.JPG"), "image/jpeg");
/// assert_eq!(guess_media_type("Makefile"), "application/octet-stream");
/// ```
pub fn guess_media_type(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Check if a media type string describes an image
pub fn is_image_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Short category label used as the list icon
pub fn media_category(media_type: &str) -> &'static str {
    match media_type.split('/').next().unwrap_or("") {
        "image" => "IMG",
        "video" => "VID",
        "audio" => "AUD",
        "text" => "TXT",
        _ if media_type == "application/pdf" => "PDF",
        _ if media_type.contains("zip") || media_type.contains("tar") || media_type.contains("gzip") => "ARC",
        "application" => "BIN",
        _ => "???",
    }
}

/// Build a staged file from local metadata. No type or size validation.
pub fn stage_file(path: &Path) -> std::io::Result<StagedFile> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(StagedFile {
        path: path.to_path_buf(),
        media_type: guess_media_type(&name),
        name,
        size: metadata.len(),
    })
}

/// Expand a leading `~/` against the home directory
pub fn expand_home(input: &str) -> std::path::PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    std::path::PathBuf::from(input)
}
