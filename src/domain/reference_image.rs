//! Reference images passed alongside text instructions.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::AppError;

/// Inline image payload: a mime type plus base64 data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub mime_type: String,
    pub data: String,
}

impl ReferenceImage {
    /// Parse a `data:<mime>;base64,<data>` URI.
    ///
    /// Returns `None` for anything malformed; callers skip such images.
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let (header, data) = uri.split_once(',')?;
        let mime_type = header.strip_prefix("data:")?.split(';').next()?.trim();
        if mime_type.is_empty() || data.is_empty() {
            return None;
        }
        Some(Self { mime_type: mime_type.to_string(), data: data.to_string() })
    }

    /// Read an image file and encode it.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mime_type = mime_type_for(path).ok_or_else(|| AppError::ReferenceImage {
            path: path.display().to_string(),
            reason: "unsupported image extension".into(),
        })?;
        let bytes = fs::read(path).map_err(|err| AppError::ReferenceImage {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { mime_type: mime_type.to_string(), data: STANDARD.encode(bytes) })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>, AppError> {
        STANDARD.decode(&self.data).map_err(|err| {
            AppError::InvalidAiResponse(format!("Image data is not valid base64: {}", err))
        })
    }
}

/// Parse data URIs, dropping malformed ones with a warning.
pub fn parse_data_uris<S: AsRef<str>>(uris: &[S]) -> Vec<ReferenceImage> {
    uris.iter()
        .filter_map(|uri| {
            let parsed = ReferenceImage::from_data_uri(uri.as_ref());
            if parsed.is_none() {
                tracing::warn!("skipping malformed image data URI");
            }
            parsed
        })
        .collect()
}

/// Mime type implied by a file extension.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime)
}

/// File extension for a generated media mime type.
pub fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "video/mp4" => "mp4",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_well_formed_data_uri() {
        let image = ReferenceImage::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn malformed_uris_are_skipped() {
        let uris = [
            "not a uri",
            "data:;base64,abcd",
            "data:image/png;base64,",
            "data:image/gif;base64,R0lG",
        ];
        let images = parse_data_uris(&uris);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].mime_type, "image/gif");
    }

    #[test]
    fn load_encodes_file_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.JPG");
        fs::write(&path, b"hello").unwrap();

        let image = ReferenceImage::load(&path).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "aGVsbG8=");
        assert_eq!(image.decode().unwrap(), b"hello");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = ReferenceImage::load(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, AppError::ReferenceImage { .. }));
    }

    #[test]
    fn mime_types_cover_supported_extensions() {
        assert_eq!(mime_type_for(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(mime_type_for(Path::new("a.heif")), Some("image/heif"));
        assert_eq!(mime_type_for(Path::new("a")), None);
    }
}
