//! Codec options

use crate::encoding::TextEncoding;
use crate::exif::{ExifByteOrder, ExifParts};
use crate::psd::PsdInfoPolicy;

/// Pixel dimensions of the host image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Options passed to [`crate::ImageProfile::decode`] and the profile encoders
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecOptions {
    /// Host image dimensions; clip paths are only rendered when known
    pub image_size: Option<ImageSize>,
    /// Which PSD additional-info blocks survive re-encoding
    pub psd_info_policy: PsdInfoPolicy,
    /// Which EXIF IFDs are written
    pub exif_parts: ExifParts,
    /// Byte order of written EXIF data
    pub exif_byte_order: ExifByteOrder,
    /// Encoding used for new IPTC string values
    pub text_encoding: TextEncoding,
}

impl CodecOptions {
    /// Default options with a known image size
    pub fn with_image_size(width: u32, height: u32) -> Self {
        Self {
            image_size: Some(ImageSize::new(width, height)),
            ..Self::default()
        }
    }
}
