//! Photoshop image resource identifiers

use std::fmt;

/// 16-bit image resource ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u16);

impl ResourceId {
    pub const RESOLUTION_INFO: Self = Self(0x03ED);
    pub const ALPHA_CHANNEL_NAMES: Self = Self(0x03EE);
    pub const CAPTION: Self = Self(0x03F0);
    pub const BORDER_INFO: Self = Self(0x03F1);
    pub const BACKGROUND_COLOR: Self = Self(0x03F2);
    pub const PRINT_FLAGS: Self = Self(0x03F3);
    pub const COLOR_HALFTONING: Self = Self(0x03F5);
    pub const COLOR_TRANSFER: Self = Self(0x03F7);
    pub const LAYER_STATE: Self = Self(0x0400);
    pub const LAYER_GROUP: Self = Self(0x0402);
    pub const IPTC: Self = Self(0x0404);
    pub const JPEG_QUALITY: Self = Self(0x0406);
    pub const GRID_GUIDES: Self = Self(0x0408);
    pub const THUMBNAIL_PS4: Self = Self(0x0409);
    pub const COPYRIGHT_FLAG: Self = Self(0x040A);
    pub const URL: Self = Self(0x040B);
    pub const THUMBNAIL: Self = Self(0x040C);
    pub const GLOBAL_ANGLE: Self = Self(0x040D);
    pub const ICC_PROFILE: Self = Self(0x040F);
    pub const WATERMARK: Self = Self(0x0410);
    pub const ICC_UNTAGGED: Self = Self(0x0411);
    pub const DOCUMENT_SPECIFIC_IDS: Self = Self(0x0414);
    pub const UNICODE_ALPHA_NAMES: Self = Self(0x0415);
    pub const GLOBAL_ALTITUDE: Self = Self(0x0419);
    pub const SLICES: Self = Self(0x041A);
    pub const ALPHA_IDENTIFIERS: Self = Self(0x041D);
    pub const URL_LIST: Self = Self(0x041E);
    pub const VERSION_INFO: Self = Self(0x0421);
    pub const EXIF_DATA_1: Self = Self(0x0422);
    pub const EXIF_DATA_3: Self = Self(0x0423);
    pub const XMP: Self = Self(0x0424);
    pub const CAPTION_DIGEST: Self = Self(0x0425);
    pub const PRINT_SCALE: Self = Self(0x0426);
    pub const PIXEL_ASPECT_RATIO: Self = Self(0x0428);
    pub const LAYER_SELECTION_IDS: Self = Self(0x042D);
    pub const PRINT_INFO: Self = Self(0x043A);
    pub const PRINT_STYLE: Self = Self(0x043B);
    pub const CLIPPING_PATH_NAME: Self = Self(0x0BB7);
    pub const PRINT_FLAGS_INFO: Self = Self(0x2710);

    /// First resource ID of the saved path range
    pub const FIRST_CLIP_PATH: u16 = 2000;
    /// Last resource ID of the saved path range
    pub const LAST_CLIP_PATH: u16 = 2997;

    /// Whether the resource holds a saved path
    pub fn is_clip_path(&self) -> bool {
        (Self::FIRST_CLIP_PATH..=Self::LAST_CLIP_PATH).contains(&self.0)
    }

    /// Human-readable name of well-known resources
    pub fn name(&self) -> Option<&'static str> {
        if self.is_clip_path() {
            return Some("Path Information");
        }

        Some(match *self {
            Self::RESOLUTION_INFO => "Resolution Info",
            Self::ALPHA_CHANNEL_NAMES => "Alpha Channel Names",
            Self::CAPTION => "Caption",
            Self::BORDER_INFO => "Border Info",
            Self::BACKGROUND_COLOR => "Background Color",
            Self::PRINT_FLAGS => "Print Flags",
            Self::COLOR_HALFTONING => "Color Halftoning Info",
            Self::COLOR_TRANSFER => "Color Transfer Functions",
            Self::LAYER_STATE => "Layer State Info",
            Self::LAYER_GROUP => "Layer Group Info",
            Self::IPTC => "IPTC-NAA Record",
            Self::JPEG_QUALITY => "JPEG Quality",
            Self::GRID_GUIDES => "Grid and Guides Info",
            Self::THUMBNAIL_PS4 => "Thumbnail (Photoshop 4.0)",
            Self::COPYRIGHT_FLAG => "Copyright Flag",
            Self::URL => "URL",
            Self::THUMBNAIL => "Thumbnail",
            Self::GLOBAL_ANGLE => "Global Angle",
            Self::ICC_PROFILE => "ICC Profile",
            Self::WATERMARK => "Watermark",
            Self::ICC_UNTAGGED => "ICC Untagged Profile",
            Self::DOCUMENT_SPECIFIC_IDS => "Document-Specific IDs Seed",
            Self::UNICODE_ALPHA_NAMES => "Unicode Alpha Names",
            Self::GLOBAL_ALTITUDE => "Global Altitude",
            Self::SLICES => "Slices",
            Self::ALPHA_IDENTIFIERS => "Alpha Identifiers",
            Self::URL_LIST => "URL List",
            Self::VERSION_INFO => "Version Info",
            Self::EXIF_DATA_1 => "EXIF Data 1",
            Self::EXIF_DATA_3 => "EXIF Data 3",
            Self::XMP => "XMP Metadata",
            Self::CAPTION_DIGEST => "Caption Digest",
            Self::PRINT_SCALE => "Print Scale",
            Self::PIXEL_ASPECT_RATIO => "Pixel Aspect Ratio",
            Self::LAYER_SELECTION_IDS => "Layer Selection IDs",
            Self::PRINT_INFO => "Print Info",
            Self::PRINT_STYLE => "Print Style",
            Self::CLIPPING_PATH_NAME => "Clipping Path Name",
            Self::PRINT_FLAGS_INFO => "Print Flags Info",
            _ => return None,
        })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_path_range() {
        assert!(!ResourceId(1999).is_clip_path());
        assert!(ResourceId(2000).is_clip_path());
        assert!(ResourceId(2997).is_clip_path());
        assert!(!ResourceId(2998).is_clip_path());
        assert!(!ResourceId::CLIPPING_PATH_NAME.is_clip_path());
    }

    #[test]
    fn test_names() {
        assert_eq!(ResourceId::IPTC.name(), Some("IPTC-NAA Record"));
        assert_eq!(ResourceId(2001).name(), Some("Path Information"));
        assert_eq!(ResourceId(0x7777).name(), None);
        assert_eq!(ResourceId::XMP.to_string(), "0x0424");
    }
}
