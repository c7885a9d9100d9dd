//! Image resources and their wire encoding.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};
use crate::types::InlineImage;

/// An image to edit.
///
/// The resource is borrowed read-only for the duration of one call and
/// read exactly once per call; the SDK never mutates or persists it.
#[derive(Debug, Clone)]
pub enum ImageResource {
    /// Image file on disk. The mime type is sniffed from the file's
    /// magic bytes, falling back to the extension.
    Path(PathBuf),
    /// In-memory image bytes with an explicit mime type.
    Bytes { mime_type: String, data: Vec<u8> },
    /// A pre-encoded `data:<mime>;base64,<payload>` URI.
    DataUri(String),
}

impl ImageResource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ImageResource::Path(path.into())
    }

    pub fn from_bytes(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        ImageResource::Bytes {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        ImageResource::DataUri(uri.into())
    }

    /// Encodes the resource into the mime/base64 pair the wire format
    /// expects.
    ///
    /// Fails with [`Error::Encoding`] if the resource cannot be read,
    /// its image type cannot be determined, or a data URI is not a
    /// well-formed two-part `data:<mime>;base64,<payload>` string.
    pub async fn encode(&self) -> Result<InlineImage> {
        match self {
            ImageResource::Path(path) => {
                let data = tokio::fs::read(path).await.map_err(|e| {
                    Error::Encoding(format!("cannot read {}: {e}", path.display()))
                })?;
                let mime_type = sniff_mime(&data)
                    .or_else(|| mime_from_extension(path))
                    .ok_or_else(|| {
                        Error::Encoding(format!(
                            "cannot determine image type of {}",
                            path.display()
                        ))
                    })?;
                Ok(InlineImage::new(mime_type, STANDARD.encode(&data)))
            }
            ImageResource::Bytes { mime_type, data } => {
                Ok(InlineImage::new(mime_type.clone(), STANDARD.encode(data)))
            }
            ImageResource::DataUri(uri) => parse_data_uri(uri),
        }
    }
}

/// Splits a data URI into its mime-type header and base64 payload.
fn parse_data_uri(uri: &str) -> Result<InlineImage> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::Encoding("not a data URI (missing \"data:\" prefix)".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Encoding("malformed data URI (missing comma separator)".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::Encoding("data URI payload is not base64-encoded".to_string()))?;
    if mime_type.is_empty() || !mime_type.contains('/') {
        return Err(Error::Encoding(format!(
            "unparseable mime type in data URI: {mime_type:?}"
        )));
    }
    Ok(InlineImage::new(mime_type, payload))
}

/// Determines the mime type from the file's magic bytes.
fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.starts_with(b"BM") {
        Some("image/bmp")
    } else {
        None
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
