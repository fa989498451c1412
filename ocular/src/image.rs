//! Local image handling: format detection, base64 encoding, data URLs.
//!
//! [`ImageFile`] holds raw bytes read from disk and turns them into the
//! `data:<mime>;base64,<payload>` URIs that vision chat APIs accept. The
//! format is detected from the file extension or the leading magic bytes;
//! JPEG is the last-resort fallback when neither matches.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ImageFormat {
    /// PNG format.
    Png,
    /// JPEG format (fallback when detection fails).
    #[default]
    Jpeg,
    /// GIF format.
    Gif,
    /// WebP format.
    Webp,
}

impl ImageFormat {
    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// Detect format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Detect format from magic bytes (file signature).
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }
        match bytes {
            [0x89, 0x50, 0x4E, 0x47, ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x47, 0x49, 0x46, 0x38, ..] => Some(Self::Gif),
            [0x52, 0x49, 0x46, 0x46, ..] if bytes.len() >= 12 && &bytes[8..12] == b"WEBP" => {
                Some(Self::Webp)
            }
            _ => None,
        }
    }
}

/// A local image loaded into memory.
#[derive(Debug, Clone)]
pub struct ImageFile {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ImageFile {
    /// Create an image from raw bytes.
    ///
    /// The format is auto-detected from magic bytes if `None` is given.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, format: impl Into<Option<ImageFormat>>) -> Self {
        let format = format
            .into()
            .or_else(|| ImageFormat::from_magic_bytes(&bytes))
            .unwrap_or_default();
        Self { bytes, format }
    }

    /// Read an image from disk.
    ///
    /// The format is detected from the file extension first, then from the
    /// file signature.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .or_else(|| ImageFormat::from_magic_bytes(&bytes))
            .unwrap_or_default();
        Ok(Self { bytes, format })
    }

    /// Get the image format.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Get the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the image is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the raw bytes as a standard base64 string.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// Build a data URL (`data:image/png;base64,...`) from the bytes.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }
}

impl std::fmt::Display for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Image: {} bytes, {}]",
            self.bytes.len(),
            self.format.mime_type()
        )
    }
}
