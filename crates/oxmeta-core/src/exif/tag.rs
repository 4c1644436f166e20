//! EXIF tag identifiers and the tag registry

use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;
use std::sync::OnceLock;

use super::data_type::ExifDataType::{
    self, Ascii, Byte, Long, Rational, Short, SignedRational, Undefined,
};

/// IFD an EXIF tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExifIfd {
    /// IFD0 (primary image)
    Primary,
    /// Exif sub-IFD
    Exif,
    /// GPS IFD
    Gps,
    /// IFD1 thumbnail location; read only
    Thumbnail,
    /// Sub-IFD offsets, managed by the reader and writer
    Pointer,
}

/// Set of IFDs written by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExifParts(pub u8);

impl ExifParts {
    pub const NONE: Self = Self(0);
    pub const IFD_TAGS: Self = Self(1);
    pub const EXIF_TAGS: Self = Self(4);
    pub const GPS_TAGS: Self = Self(8);
    pub const ALL: Self = Self(Self::IFD_TAGS.0 | Self::EXIF_TAGS.0 | Self::GPS_TAGS.0);

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether values of `ifd` are written
    pub fn allows(&self, ifd: ExifIfd) -> bool {
        match ifd {
            ExifIfd::Primary => self.contains(Self::IFD_TAGS),
            ExifIfd::Exif => self.contains(Self::EXIF_TAGS),
            ExifIfd::Gps => self.contains(Self::GPS_TAGS),
            ExifIfd::Thumbnail | ExifIfd::Pointer => false,
        }
    }
}

impl Default for ExifParts {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for ExifParts {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Registry entry for an EXIF tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifTagInfo {
    pub tag: ExifTag,
    pub name: &'static str,
    pub data_type: ExifDataType,
    /// Whether the value holds several components (never set for ASCII)
    pub is_array: bool,
    pub ifd: ExifIfd,
}

impl ExifTagInfo {
    const fn new(
        tag: ExifTag,
        name: &'static str,
        data_type: ExifDataType,
        is_array: bool,
        ifd: ExifIfd,
    ) -> Self {
        Self {
            tag,
            name,
            data_type,
            is_array,
            ifd,
        }
    }
}

/// 16-bit EXIF/TIFF tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExifTag(pub u16);

impl ExifTag {
    pub const SUBFILE_TYPE: Self = Self(0x00FE);
    pub const OLD_SUBFILE_TYPE: Self = Self(0x00FF);
    pub const IMAGE_WIDTH: Self = Self(0x0100);
    pub const IMAGE_LENGTH: Self = Self(0x0101);
    pub const BITS_PER_SAMPLE: Self = Self(0x0102);
    pub const COMPRESSION: Self = Self(0x0103);
    pub const PHOTOMETRIC_INTERPRETATION: Self = Self(0x0106);
    pub const THRESHOLDING: Self = Self(0x0107);
    pub const CELL_WIDTH: Self = Self(0x0108);
    pub const CELL_LENGTH: Self = Self(0x0109);
    pub const FILL_ORDER: Self = Self(0x010A);
    pub const DOCUMENT_NAME: Self = Self(0x010D);
    pub const IMAGE_DESCRIPTION: Self = Self(0x010E);
    pub const MAKE: Self = Self(0x010F);
    pub const MODEL: Self = Self(0x0110);
    pub const STRIP_OFFSETS: Self = Self(0x0111);
    pub const ORIENTATION: Self = Self(0x0112);
    pub const SAMPLES_PER_PIXEL: Self = Self(0x0115);
    pub const ROWS_PER_STRIP: Self = Self(0x0116);
    pub const STRIP_BYTE_COUNTS: Self = Self(0x0117);
    pub const MIN_SAMPLE_VALUE: Self = Self(0x0118);
    pub const MAX_SAMPLE_VALUE: Self = Self(0x0119);
    pub const X_RESOLUTION: Self = Self(0x011A);
    pub const Y_RESOLUTION: Self = Self(0x011B);
    pub const PLANAR_CONFIGURATION: Self = Self(0x011C);
    pub const PAGE_NAME: Self = Self(0x011D);
    pub const X_POSITION: Self = Self(0x011E);
    pub const Y_POSITION: Self = Self(0x011F);
    pub const FREE_OFFSETS: Self = Self(0x0120);
    pub const FREE_BYTE_COUNTS: Self = Self(0x0121);
    pub const GRAY_RESPONSE_UNIT: Self = Self(0x0122);
    pub const GRAY_RESPONSE_CURVE: Self = Self(0x0123);
    pub const T4_OPTIONS: Self = Self(0x0124);
    pub const T6_OPTIONS: Self = Self(0x0125);
    pub const RESOLUTION_UNIT: Self = Self(0x0128);
    pub const PAGE_NUMBER: Self = Self(0x0129);
    pub const COLOR_RESPONSE_UNIT: Self = Self(0x012C);
    pub const TRANSFER_FUNCTION: Self = Self(0x012D);
    pub const SOFTWARE: Self = Self(0x0131);
    pub const DATE_TIME: Self = Self(0x0132);
    pub const ARTIST: Self = Self(0x013B);
    pub const HOST_COMPUTER: Self = Self(0x013C);
    pub const PREDICTOR: Self = Self(0x013D);
    pub const WHITE_POINT: Self = Self(0x013E);
    pub const PRIMARY_CHROMATICITIES: Self = Self(0x013F);
    pub const COLOR_MAP: Self = Self(0x0140);
    pub const HALFTONE_HINTS: Self = Self(0x0141);
    pub const TILE_WIDTH: Self = Self(0x0142);
    pub const TILE_LENGTH: Self = Self(0x0143);
    pub const TILE_OFFSETS: Self = Self(0x0144);
    pub const TILE_BYTE_COUNTS: Self = Self(0x0145);
    pub const INK_SET: Self = Self(0x014C);
    pub const INK_NAMES: Self = Self(0x014D);
    pub const NUMBER_OF_INKS: Self = Self(0x014E);
    pub const TARGET_PRINTER: Self = Self(0x0151);
    pub const EXTRA_SAMPLES: Self = Self(0x0152);
    pub const SAMPLE_FORMAT: Self = Self(0x0153);
    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x0201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x0202);
    pub const YCBCR_COEFFICIENTS: Self = Self(0x0211);
    pub const YCBCR_SUBSAMPLING: Self = Self(0x0212);
    pub const YCBCR_POSITIONING: Self = Self(0x0213);
    pub const REFERENCE_BLACK_WHITE: Self = Self(0x0214);
    pub const XMP: Self = Self(0x02BC);
    pub const RATING: Self = Self(0x4746);
    pub const RATING_PERCENT: Self = Self(0x4749);
    pub const COPYRIGHT: Self = Self(0x8298);
    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_IFD_POINTER: Self = Self(0x8825);
    pub const XP_TITLE: Self = Self(0x9C9B);
    pub const XP_COMMENT: Self = Self(0x9C9C);
    pub const XP_AUTHOR: Self = Self(0x9C9D);
    pub const XP_KEYWORDS: Self = Self(0x9C9E);
    pub const XP_SUBJECT: Self = Self(0x9C9F);
    pub const EXPOSURE_TIME: Self = Self(0x829A);
    pub const F_NUMBER: Self = Self(0x829D);
    pub const EXPOSURE_PROGRAM: Self = Self(0x8822);
    pub const SPECTRAL_SENSITIVITY: Self = Self(0x8824);
    pub const ISO_SPEED_RATINGS: Self = Self(0x8827);
    pub const OECF: Self = Self(0x8828);
    pub const SENSITIVITY_TYPE: Self = Self(0x8830);
    pub const STANDARD_OUTPUT_SENSITIVITY: Self = Self(0x8831);
    pub const RECOMMENDED_EXPOSURE_INDEX: Self = Self(0x8832);
    pub const ISO_SPEED: Self = Self(0x8833);
    pub const EXIF_VERSION: Self = Self(0x9000);
    pub const DATE_TIME_ORIGINAL: Self = Self(0x9003);
    pub const DATE_TIME_DIGITIZED: Self = Self(0x9004);
    pub const OFFSET_TIME: Self = Self(0x9010);
    pub const OFFSET_TIME_ORIGINAL: Self = Self(0x9011);
    pub const OFFSET_TIME_DIGITIZED: Self = Self(0x9012);
    pub const COMPONENTS_CONFIGURATION: Self = Self(0x9101);
    pub const COMPRESSED_BITS_PER_PIXEL: Self = Self(0x9102);
    pub const SHUTTER_SPEED_VALUE: Self = Self(0x9201);
    pub const APERTURE_VALUE: Self = Self(0x9202);
    pub const BRIGHTNESS_VALUE: Self = Self(0x9203);
    pub const EXPOSURE_BIAS_VALUE: Self = Self(0x9204);
    pub const MAX_APERTURE_VALUE: Self = Self(0x9205);
    pub const SUBJECT_DISTANCE: Self = Self(0x9206);
    pub const METERING_MODE: Self = Self(0x9207);
    pub const LIGHT_SOURCE: Self = Self(0x9208);
    pub const FLASH: Self = Self(0x9209);
    pub const FOCAL_LENGTH: Self = Self(0x920A);
    pub const SUBJECT_AREA: Self = Self(0x9214);
    pub const MAKER_NOTE: Self = Self(0x927C);
    pub const USER_COMMENT: Self = Self(0x9286);
    pub const SUBSEC_TIME: Self = Self(0x9290);
    pub const SUBSEC_TIME_ORIGINAL: Self = Self(0x9291);
    pub const SUBSEC_TIME_DIGITIZED: Self = Self(0x9292);
    pub const AMBIENT_TEMPERATURE: Self = Self(0x9400);
    pub const HUMIDITY: Self = Self(0x9401);
    pub const PRESSURE: Self = Self(0x9402);
    pub const WATER_DEPTH: Self = Self(0x9403);
    pub const ACCELERATION: Self = Self(0x9404);
    pub const CAMERA_ELEVATION_ANGLE: Self = Self(0x9405);
    pub const FLASHPIX_VERSION: Self = Self(0xA000);
    pub const COLOR_SPACE: Self = Self(0xA001);
    pub const PIXEL_X_DIMENSION: Self = Self(0xA002);
    pub const PIXEL_Y_DIMENSION: Self = Self(0xA003);
    pub const RELATED_SOUND_FILE: Self = Self(0xA004);
    pub const FLASH_ENERGY: Self = Self(0xA20B);
    pub const SPATIAL_FREQUENCY_RESPONSE: Self = Self(0xA20C);
    pub const FOCAL_PLANE_X_RESOLUTION: Self = Self(0xA20E);
    pub const FOCAL_PLANE_Y_RESOLUTION: Self = Self(0xA20F);
    pub const FOCAL_PLANE_RESOLUTION_UNIT: Self = Self(0xA210);
    pub const SUBJECT_LOCATION: Self = Self(0xA214);
    pub const EXPOSURE_INDEX: Self = Self(0xA215);
    pub const SENSING_METHOD: Self = Self(0xA217);
    pub const FILE_SOURCE: Self = Self(0xA300);
    pub const SCENE_TYPE: Self = Self(0xA301);
    pub const CFA_PATTERN: Self = Self(0xA302);
    pub const CUSTOM_RENDERED: Self = Self(0xA401);
    pub const EXPOSURE_MODE: Self = Self(0xA402);
    pub const WHITE_BALANCE: Self = Self(0xA403);
    pub const DIGITAL_ZOOM_RATIO: Self = Self(0xA404);
    pub const FOCAL_LENGTH_IN_35MM_FILM: Self = Self(0xA405);
    pub const SCENE_CAPTURE_TYPE: Self = Self(0xA406);
    pub const GAIN_CONTROL: Self = Self(0xA407);
    pub const CONTRAST: Self = Self(0xA408);
    pub const SATURATION: Self = Self(0xA409);
    pub const SHARPNESS: Self = Self(0xA40A);
    pub const DEVICE_SETTING_DESCRIPTION: Self = Self(0xA40B);
    pub const SUBJECT_DISTANCE_RANGE: Self = Self(0xA40C);
    pub const IMAGE_UNIQUE_ID: Self = Self(0xA420);
    pub const OWNER_NAME: Self = Self(0xA430);
    pub const SERIAL_NUMBER: Self = Self(0xA431);
    pub const LENS_INFO: Self = Self(0xA432);
    pub const LENS_MAKE: Self = Self(0xA433);
    pub const LENS_MODEL: Self = Self(0xA434);
    pub const LENS_SERIAL_NUMBER: Self = Self(0xA435);
    pub const GPS_VERSION_ID: Self = Self(0x0000);
    pub const GPS_LATITUDE_REF: Self = Self(0x0001);
    pub const GPS_LATITUDE: Self = Self(0x0002);
    pub const GPS_LONGITUDE_REF: Self = Self(0x0003);
    pub const GPS_LONGITUDE: Self = Self(0x0004);
    pub const GPS_ALTITUDE_REF: Self = Self(0x0005);
    pub const GPS_ALTITUDE: Self = Self(0x0006);
    pub const GPS_TIMESTAMP: Self = Self(0x0007);
    pub const GPS_SATELLITES: Self = Self(0x0008);
    pub const GPS_STATUS: Self = Self(0x0009);
    pub const GPS_MEASURE_MODE: Self = Self(0x000A);
    pub const GPS_DOP: Self = Self(0x000B);
    pub const GPS_SPEED_REF: Self = Self(0x000C);
    pub const GPS_SPEED: Self = Self(0x000D);
    pub const GPS_TRACK_REF: Self = Self(0x000E);
    pub const GPS_TRACK: Self = Self(0x000F);
    pub const GPS_IMG_DIRECTION_REF: Self = Self(0x0010);
    pub const GPS_IMG_DIRECTION: Self = Self(0x0011);
    pub const GPS_MAP_DATUM: Self = Self(0x0012);
    pub const GPS_DEST_LATITUDE_REF: Self = Self(0x0013);
    pub const GPS_DEST_LATITUDE: Self = Self(0x0014);
    pub const GPS_DEST_LONGITUDE_REF: Self = Self(0x0015);
    pub const GPS_DEST_LONGITUDE: Self = Self(0x0016);
    pub const GPS_DEST_BEARING_REF: Self = Self(0x0017);
    pub const GPS_DEST_BEARING: Self = Self(0x0018);
    pub const GPS_DEST_DISTANCE_REF: Self = Self(0x0019);
    pub const GPS_DEST_DISTANCE: Self = Self(0x001A);
    pub const GPS_PROCESSING_METHOD: Self = Self(0x001B);
    pub const GPS_AREA_INFORMATION: Self = Self(0x001C);
    pub const GPS_DATE_STAMP: Self = Self(0x001D);
    pub const GPS_DIFFERENTIAL: Self = Self(0x001E);

    /// Registry entry, if the tag is known
    pub fn info(&self) -> Option<&'static ExifTagInfo> {
        registry().get(self).copied()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    /// IFD the tag is written to; unknown tags have none
    pub fn ifd(&self) -> Option<ExifIfd> {
        self.info().map(|info| info.ifd)
    }
}

impl fmt::Display for ExifTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

/// All known tags
pub static EXIF_TAGS: &[ExifTagInfo] = &[
    ExifTagInfo::new(ExifTag::SUBFILE_TYPE, "SubfileType", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::OLD_SUBFILE_TYPE, "OldSubfileType", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::IMAGE_WIDTH, "ImageWidth", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::IMAGE_LENGTH, "ImageLength", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::BITS_PER_SAMPLE, "BitsPerSample", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::COMPRESSION, "Compression", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::THRESHOLDING, "Thresholding", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::CELL_WIDTH, "CellWidth", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::CELL_LENGTH, "CellLength", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::FILL_ORDER, "FillOrder", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::DOCUMENT_NAME, "DocumentName", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::IMAGE_DESCRIPTION, "ImageDescription", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::MAKE, "Make", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::MODEL, "Model", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::STRIP_OFFSETS, "StripOffsets", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::ORIENTATION, "Orientation", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::SAMPLES_PER_PIXEL, "SamplesPerPixel", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::ROWS_PER_STRIP, "RowsPerStrip", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::STRIP_BYTE_COUNTS, "StripByteCounts", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::MIN_SAMPLE_VALUE, "MinSampleValue", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::MAX_SAMPLE_VALUE, "MaxSampleValue", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::X_RESOLUTION, "XResolution", Rational, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::Y_RESOLUTION, "YResolution", Rational, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PLANAR_CONFIGURATION, "PlanarConfiguration", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PAGE_NAME, "PageName", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::X_POSITION, "XPosition", Rational, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::Y_POSITION, "YPosition", Rational, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::FREE_OFFSETS, "FreeOffsets", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::FREE_BYTE_COUNTS, "FreeByteCounts", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::GRAY_RESPONSE_UNIT, "GrayResponseUnit", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::GRAY_RESPONSE_CURVE, "GrayResponseCurve", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::T4_OPTIONS, "T4Options", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::T6_OPTIONS, "T6Options", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::RESOLUTION_UNIT, "ResolutionUnit", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PAGE_NUMBER, "PageNumber", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::COLOR_RESPONSE_UNIT, "ColorResponseUnit", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TRANSFER_FUNCTION, "TransferFunction", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::SOFTWARE, "Software", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::DATE_TIME, "DateTime", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::ARTIST, "Artist", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::HOST_COMPUTER, "HostComputer", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PREDICTOR, "Predictor", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::WHITE_POINT, "WhitePoint", Rational, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::PRIMARY_CHROMATICITIES, "PrimaryChromaticities", Rational, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::COLOR_MAP, "ColorMap", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::HALFTONE_HINTS, "HalftoneHints", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TILE_WIDTH, "TileWidth", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TILE_LENGTH, "TileLength", Long, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TILE_OFFSETS, "TileOffsets", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TILE_BYTE_COUNTS, "TileByteCounts", Long, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::INK_SET, "InkSet", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::INK_NAMES, "InkNames", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::NUMBER_OF_INKS, "NumberOfInks", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::TARGET_PRINTER, "TargetPrinter", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::EXTRA_SAMPLES, "ExtraSamples", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::SAMPLE_FORMAT, "SampleFormat", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::JPEG_INTERCHANGE_FORMAT, "JPEGInterchangeFormat", Long, false, ExifIfd::Thumbnail),
    ExifTagInfo::new(ExifTag::JPEG_INTERCHANGE_FORMAT_LENGTH, "JPEGInterchangeFormatLength", Long, false, ExifIfd::Thumbnail),
    ExifTagInfo::new(ExifTag::YCBCR_COEFFICIENTS, "YCbCrCoefficients", Rational, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::YCBCR_SUBSAMPLING, "YCbCrSubsampling", Short, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::YCBCR_POSITIONING, "YCbCrPositioning", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::REFERENCE_BLACK_WHITE, "ReferenceBlackWhite", Rational, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::XMP, "XMP", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::RATING, "Rating", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::RATING_PERCENT, "RatingPercent", Short, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::COPYRIGHT, "Copyright", Ascii, false, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::EXIF_IFD_POINTER, "ExifIfdPointer", Long, false, ExifIfd::Pointer),
    ExifTagInfo::new(ExifTag::GPS_IFD_POINTER, "GpsIfdPointer", Long, false, ExifIfd::Pointer),
    ExifTagInfo::new(ExifTag::XP_TITLE, "XPTitle", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::XP_COMMENT, "XPComment", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::XP_AUTHOR, "XPAuthor", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::XP_KEYWORDS, "XPKeywords", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::XP_SUBJECT, "XPSubject", Byte, true, ExifIfd::Primary),
    ExifTagInfo::new(ExifTag::EXPOSURE_TIME, "ExposureTime", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::F_NUMBER, "FNumber", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::EXPOSURE_PROGRAM, "ExposureProgram", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SPECTRAL_SENSITIVITY, "SpectralSensitivity", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::ISO_SPEED_RATINGS, "ISOSpeedRatings", Short, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::OECF, "OECF", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SENSITIVITY_TYPE, "SensitivityType", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::STANDARD_OUTPUT_SENSITIVITY, "StandardOutputSensitivity", Long, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::RECOMMENDED_EXPOSURE_INDEX, "RecommendedExposureIndex", Long, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::ISO_SPEED, "ISOSpeed", Long, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::EXIF_VERSION, "ExifVersion", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::DATE_TIME_ORIGINAL, "DateTimeOriginal", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::DATE_TIME_DIGITIZED, "DateTimeDigitized", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::OFFSET_TIME, "OffsetTime", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::OFFSET_TIME_ORIGINAL, "OffsetTimeOriginal", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::OFFSET_TIME_DIGITIZED, "OffsetTimeDigitized", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::COMPONENTS_CONFIGURATION, "ComponentsConfiguration", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::COMPRESSED_BITS_PER_PIXEL, "CompressedBitsPerPixel", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SHUTTER_SPEED_VALUE, "ShutterSpeedValue", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::APERTURE_VALUE, "ApertureValue", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::BRIGHTNESS_VALUE, "BrightnessValue", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::EXPOSURE_BIAS_VALUE, "ExposureBiasValue", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::MAX_APERTURE_VALUE, "MaxApertureValue", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBJECT_DISTANCE, "SubjectDistance", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::METERING_MODE, "MeteringMode", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::LIGHT_SOURCE, "LightSource", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FLASH, "Flash", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FOCAL_LENGTH, "FocalLength", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBJECT_AREA, "SubjectArea", Short, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::MAKER_NOTE, "MakerNote", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::USER_COMMENT, "UserComment", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBSEC_TIME, "SubsecTime", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBSEC_TIME_ORIGINAL, "SubsecTimeOriginal", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBSEC_TIME_DIGITIZED, "SubsecTimeDigitized", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::AMBIENT_TEMPERATURE, "AmbientTemperature", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::HUMIDITY, "Humidity", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::PRESSURE, "Pressure", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::WATER_DEPTH, "WaterDepth", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::ACCELERATION, "Acceleration", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::CAMERA_ELEVATION_ANGLE, "CameraElevationAngle", SignedRational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FLASHPIX_VERSION, "FlashpixVersion", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::COLOR_SPACE, "ColorSpace", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::PIXEL_X_DIMENSION, "PixelXDimension", Long, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::PIXEL_Y_DIMENSION, "PixelYDimension", Long, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::RELATED_SOUND_FILE, "RelatedSoundFile", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FLASH_ENERGY, "FlashEnergy", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SPATIAL_FREQUENCY_RESPONSE, "SpatialFrequencyResponse", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FOCAL_PLANE_X_RESOLUTION, "FocalPlaneXResolution", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FOCAL_PLANE_Y_RESOLUTION, "FocalPlaneYResolution", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, "FocalPlaneResolutionUnit", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBJECT_LOCATION, "SubjectLocation", Short, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::EXPOSURE_INDEX, "ExposureIndex", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SENSING_METHOD, "SensingMethod", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FILE_SOURCE, "FileSource", Undefined, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SCENE_TYPE, "SceneType", Undefined, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::CFA_PATTERN, "CFAPattern", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::CUSTOM_RENDERED, "CustomRendered", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::EXPOSURE_MODE, "ExposureMode", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::WHITE_BALANCE, "WhiteBalance", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::DIGITAL_ZOOM_RATIO, "DigitalZoomRatio", Rational, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::FOCAL_LENGTH_IN_35MM_FILM, "FocalLengthIn35mmFilm", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SCENE_CAPTURE_TYPE, "SceneCaptureType", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::GAIN_CONTROL, "GainControl", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::CONTRAST, "Contrast", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SATURATION, "Saturation", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SHARPNESS, "Sharpness", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::DEVICE_SETTING_DESCRIPTION, "DeviceSettingDescription", Undefined, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SUBJECT_DISTANCE_RANGE, "SubjectDistanceRange", Short, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::IMAGE_UNIQUE_ID, "ImageUniqueID", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::OWNER_NAME, "OwnerName", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::SERIAL_NUMBER, "SerialNumber", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::LENS_INFO, "LensInfo", Rational, true, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::LENS_MAKE, "LensMake", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::LENS_MODEL, "LensModel", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::LENS_SERIAL_NUMBER, "LensSerialNumber", Ascii, false, ExifIfd::Exif),
    ExifTagInfo::new(ExifTag::GPS_VERSION_ID, "GPSVersionID", Byte, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_LATITUDE_REF, "GPSLatitudeRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_LATITUDE, "GPSLatitude", Rational, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_LONGITUDE_REF, "GPSLongitudeRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_LONGITUDE, "GPSLongitude", Rational, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_ALTITUDE_REF, "GPSAltitudeRef", Byte, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_ALTITUDE, "GPSAltitude", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_TIMESTAMP, "GPSTimestamp", Rational, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_SATELLITES, "GPSSatellites", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_STATUS, "GPSStatus", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_MEASURE_MODE, "GPSMeasureMode", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DOP, "GPSDOP", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_SPEED_REF, "GPSSpeedRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_SPEED, "GPSSpeed", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_TRACK_REF, "GPSTrackRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_TRACK, "GPSTrack", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_IMG_DIRECTION_REF, "GPSImgDirectionRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_IMG_DIRECTION, "GPSImgDirection", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_MAP_DATUM, "GPSMapDatum", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_LATITUDE_REF, "GPSDestLatitudeRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_LATITUDE, "GPSDestLatitude", Rational, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_LONGITUDE_REF, "GPSDestLongitudeRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_LONGITUDE, "GPSDestLongitude", Rational, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_BEARING_REF, "GPSDestBearingRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_BEARING, "GPSDestBearing", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_DISTANCE_REF, "GPSDestDistanceRef", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DEST_DISTANCE, "GPSDestDistance", Rational, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_PROCESSING_METHOD, "GPSProcessingMethod", Undefined, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_AREA_INFORMATION, "GPSAreaInformation", Undefined, true, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DATE_STAMP, "GPSDateStamp", Ascii, false, ExifIfd::Gps),
    ExifTagInfo::new(ExifTag::GPS_DIFFERENTIAL, "GPSDifferential", Short, false, ExifIfd::Gps),
];

fn registry() -> &'static HashMap<ExifTag, &'static ExifTagInfo> {
    static REGISTRY: OnceLock<HashMap<ExifTag, &'static ExifTagInfo>> = OnceLock::new();
    REGISTRY.get_or_init(|| EXIF_TAGS.iter().map(|info| (info.tag, info)).collect())
}
