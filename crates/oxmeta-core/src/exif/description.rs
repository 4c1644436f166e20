//! Human-readable descriptions of enumerated EXIF values

use std::collections::HashMap;
use std::sync::OnceLock;

use super::tag::ExifTag;

const DESCRIPTIONS: &[(ExifTag, u32, &str)] = &[
    (ExifTag::SUBFILE_TYPE, 0, "Full-resolution image"),
    (ExifTag::SUBFILE_TYPE, 1, "Reduced-resolution image"),
    (ExifTag::SUBFILE_TYPE, 2, "Single page of multi-page image"),
    (ExifTag::SUBFILE_TYPE, 4, "Transparency mask"),
    (ExifTag::OLD_SUBFILE_TYPE, 1, "Full-resolution image"),
    (ExifTag::OLD_SUBFILE_TYPE, 2, "Reduced-resolution image"),
    (ExifTag::OLD_SUBFILE_TYPE, 3, "Single page of multi-page image"),
    (ExifTag::COMPRESSION, 1, "Uncompressed"),
    (ExifTag::COMPRESSION, 2, "CCITT 1D"),
    (ExifTag::COMPRESSION, 3, "T4/Group 3 Fax"),
    (ExifTag::COMPRESSION, 4, "T6/Group 4 Fax"),
    (ExifTag::COMPRESSION, 5, "LZW"),
    (ExifTag::COMPRESSION, 6, "JPEG (old-style)"),
    (ExifTag::COMPRESSION, 7, "JPEG"),
    (ExifTag::COMPRESSION, 8, "Adobe Deflate"),
    (ExifTag::COMPRESSION, 32773, "PackBits"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 0, "WhiteIsZero"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 1, "BlackIsZero"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 2, "RGB"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 3, "RGB Palette"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 4, "Transparency Mask"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 5, "CMYK"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 6, "YCbCr"),
    (ExifTag::PHOTOMETRIC_INTERPRETATION, 8, "CIELab"),
    (ExifTag::THRESHOLDING, 1, "No dithering or halftoning"),
    (ExifTag::THRESHOLDING, 2, "Ordered dither or halftone"),
    (ExifTag::THRESHOLDING, 3, "Randomized dither"),
    (ExifTag::FILL_ORDER, 1, "Normal"),
    (ExifTag::FILL_ORDER, 2, "Reversed"),
    (ExifTag::ORIENTATION, 0, "Unknown"),
    (ExifTag::ORIENTATION, 1, "Top-left"),
    (ExifTag::ORIENTATION, 2, "Top-right"),
    (ExifTag::ORIENTATION, 3, "Bottom-right"),
    (ExifTag::ORIENTATION, 4, "Bottom-left"),
    (ExifTag::ORIENTATION, 5, "Left-top"),
    (ExifTag::ORIENTATION, 6, "Right-top"),
    (ExifTag::ORIENTATION, 7, "Right-bottom"),
    (ExifTag::ORIENTATION, 8, "Left-bottom"),
    (ExifTag::PLANAR_CONFIGURATION, 1, "Chunky"),
    (ExifTag::PLANAR_CONFIGURATION, 2, "Planar"),
    (ExifTag::GRAY_RESPONSE_UNIT, 1, "0.1"),
    (ExifTag::GRAY_RESPONSE_UNIT, 2, "0.001"),
    (ExifTag::GRAY_RESPONSE_UNIT, 3, "0.0001"),
    (ExifTag::GRAY_RESPONSE_UNIT, 4, "1e-05"),
    (ExifTag::GRAY_RESPONSE_UNIT, 5, "1e-06"),
    (ExifTag::RESOLUTION_UNIT, 1, "None"),
    (ExifTag::RESOLUTION_UNIT, 2, "Inches"),
    (ExifTag::RESOLUTION_UNIT, 3, "Centimeter"),
    (ExifTag::PREDICTOR, 1, "None"),
    (ExifTag::PREDICTOR, 2, "Horizontal differencing"),
    (ExifTag::INK_SET, 1, "CMYK"),
    (ExifTag::INK_SET, 2, "Not CMYK"),
    (ExifTag::YCBCR_POSITIONING, 1, "Centered"),
    (ExifTag::YCBCR_POSITIONING, 2, "Co-sited"),
    (ExifTag::EXPOSURE_PROGRAM, 0, "Not defined"),
    (ExifTag::EXPOSURE_PROGRAM, 1, "Manual"),
    (ExifTag::EXPOSURE_PROGRAM, 2, "Normal program"),
    (ExifTag::EXPOSURE_PROGRAM, 3, "Aperture priority"),
    (ExifTag::EXPOSURE_PROGRAM, 4, "Shutter priority"),
    (ExifTag::EXPOSURE_PROGRAM, 5, "Creative program"),
    (ExifTag::EXPOSURE_PROGRAM, 6, "Action program"),
    (ExifTag::EXPOSURE_PROGRAM, 7, "Portrait mode"),
    (ExifTag::EXPOSURE_PROGRAM, 8, "Landscape mode"),
    (ExifTag::METERING_MODE, 0, "Unknown"),
    (ExifTag::METERING_MODE, 1, "Average"),
    (ExifTag::METERING_MODE, 2, "CenterWeightedAverage"),
    (ExifTag::METERING_MODE, 3, "Spot"),
    (ExifTag::METERING_MODE, 4, "MultiSpot"),
    (ExifTag::METERING_MODE, 5, "Pattern"),
    (ExifTag::METERING_MODE, 6, "Partial"),
    (ExifTag::METERING_MODE, 255, "Other"),
    (ExifTag::LIGHT_SOURCE, 0, "Unknown"),
    (ExifTag::LIGHT_SOURCE, 1, "Daylight"),
    (ExifTag::LIGHT_SOURCE, 2, "Fluorescent"),
    (ExifTag::LIGHT_SOURCE, 3, "Tungsten"),
    (ExifTag::LIGHT_SOURCE, 4, "Flash"),
    (ExifTag::LIGHT_SOURCE, 9, "Fine Weather"),
    (ExifTag::LIGHT_SOURCE, 10, "Cloudy"),
    (ExifTag::LIGHT_SOURCE, 11, "Shade"),
    (ExifTag::LIGHT_SOURCE, 12, "Daylight Fluorescent"),
    (ExifTag::LIGHT_SOURCE, 13, "Day White Fluorescent"),
    (ExifTag::LIGHT_SOURCE, 14, "Cool White Fluorescent"),
    (ExifTag::LIGHT_SOURCE, 15, "White Fluorescent"),
    (ExifTag::LIGHT_SOURCE, 17, "Standard Light A"),
    (ExifTag::LIGHT_SOURCE, 18, "Standard Light B"),
    (ExifTag::LIGHT_SOURCE, 19, "Standard Light C"),
    (ExifTag::LIGHT_SOURCE, 20, "D55"),
    (ExifTag::LIGHT_SOURCE, 21, "D65"),
    (ExifTag::LIGHT_SOURCE, 22, "D75"),
    (ExifTag::LIGHT_SOURCE, 23, "D50"),
    (ExifTag::LIGHT_SOURCE, 24, "ISO Studio Tungsten"),
    (ExifTag::LIGHT_SOURCE, 255, "Other"),
    (ExifTag::FLASH, 0x00, "No Flash"),
    (ExifTag::FLASH, 0x01, "Fired"),
    (ExifTag::FLASH, 0x05, "Fired, Return not detected"),
    (ExifTag::FLASH, 0x07, "Fired, Return detected"),
    (ExifTag::FLASH, 0x08, "On, Did not fire"),
    (ExifTag::FLASH, 0x09, "On, Fired"),
    (ExifTag::FLASH, 0x0D, "On, Return not detected"),
    (ExifTag::FLASH, 0x0F, "On, Return detected"),
    (ExifTag::FLASH, 0x10, "Off, Did not fire"),
    (ExifTag::FLASH, 0x14, "Off, Did not fire, Return not detected"),
    (ExifTag::FLASH, 0x18, "Auto, Did not fire"),
    (ExifTag::FLASH, 0x19, "Auto, Fired"),
    (ExifTag::FLASH, 0x1D, "Auto, Fired, Return not detected"),
    (ExifTag::FLASH, 0x1F, "Auto, Fired, Return detected"),
    (ExifTag::FLASH, 0x20, "No flash function"),
    (ExifTag::FLASH, 0x30, "Off, No flash function"),
    (ExifTag::FLASH, 0x41, "Fired, Red-eye reduction"),
    (ExifTag::FLASH, 0x45, "Fired, Red-eye reduction, Return not detected"),
    (ExifTag::FLASH, 0x47, "Fired, Red-eye reduction, Return detected"),
    (ExifTag::FLASH, 0x49, "On, Red-eye reduction"),
    (ExifTag::FLASH, 0x4D, "On, Red-eye reduction, Return not detected"),
    (ExifTag::FLASH, 0x4F, "On, Red-eye reduction, Return detected"),
    (ExifTag::FLASH, 0x50, "Off, Red-eye reduction"),
    (ExifTag::FLASH, 0x58, "Auto, Did not fire, Red-eye reduction"),
    (ExifTag::FLASH, 0x59, "Auto, Fired, Red-eye reduction"),
    (ExifTag::FLASH, 0x5D, "Auto, Fired, Red-eye reduction, Return not detected"),
    (ExifTag::FLASH, 0x5F, "Auto, Fired, Red-eye reduction, Return detected"),
    (ExifTag::SENSITIVITY_TYPE, 0, "Unknown"),
    (ExifTag::SENSITIVITY_TYPE, 1, "Standard Output Sensitivity"),
    (ExifTag::SENSITIVITY_TYPE, 2, "Recommended Exposure Index"),
    (ExifTag::SENSITIVITY_TYPE, 3, "ISO Speed"),
    (ExifTag::SENSITIVITY_TYPE, 4, "Standard Output Sensitivity and Recommended Exposure Index"),
    (ExifTag::SENSITIVITY_TYPE, 5, "Standard Output Sensitivity and ISO Speed"),
    (ExifTag::SENSITIVITY_TYPE, 6, "Recommended Exposure Index and ISO Speed"),
    (ExifTag::SENSITIVITY_TYPE, 7, "Standard Output Sensitivity, Recommended Exposure Index and ISO Speed"),
    (ExifTag::COLOR_SPACE, 1, "sRGB"),
    (ExifTag::COLOR_SPACE, 0xFFFF, "Uncalibrated"),
    (ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, 1, "None"),
    (ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, 2, "Inches"),
    (ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, 3, "Centimeter"),
    (ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, 4, "Millimeter"),
    (ExifTag::FOCAL_PLANE_RESOLUTION_UNIT, 5, "Micrometer"),
    (ExifTag::SENSING_METHOD, 1, "Not defined"),
    (ExifTag::SENSING_METHOD, 2, "One-chip color area"),
    (ExifTag::SENSING_METHOD, 3, "Two-chip color area"),
    (ExifTag::SENSING_METHOD, 4, "Three-chip color area"),
    (ExifTag::SENSING_METHOD, 5, "Color sequential area"),
    (ExifTag::SENSING_METHOD, 7, "Trilinear"),
    (ExifTag::SENSING_METHOD, 8, "Color sequential linear"),
    (ExifTag::FILE_SOURCE, 1, "Film Scanner"),
    (ExifTag::FILE_SOURCE, 2, "Reflection Print Scanner"),
    (ExifTag::FILE_SOURCE, 3, "Digital Camera"),
    (ExifTag::SCENE_TYPE, 1, "Directly photographed"),
    (ExifTag::CUSTOM_RENDERED, 0, "Normal"),
    (ExifTag::CUSTOM_RENDERED, 1, "Custom"),
    (ExifTag::EXPOSURE_MODE, 0, "Auto"),
    (ExifTag::EXPOSURE_MODE, 1, "Manual"),
    (ExifTag::EXPOSURE_MODE, 2, "Auto bracket"),
    (ExifTag::WHITE_BALANCE, 0, "Auto"),
    (ExifTag::WHITE_BALANCE, 1, "Manual"),
    (ExifTag::SCENE_CAPTURE_TYPE, 0, "Standard"),
    (ExifTag::SCENE_CAPTURE_TYPE, 1, "Landscape"),
    (ExifTag::SCENE_CAPTURE_TYPE, 2, "Portrait"),
    (ExifTag::SCENE_CAPTURE_TYPE, 3, "Night"),
    (ExifTag::GAIN_CONTROL, 0, "None"),
    (ExifTag::GAIN_CONTROL, 1, "Low gain up"),
    (ExifTag::GAIN_CONTROL, 2, "High gain up"),
    (ExifTag::GAIN_CONTROL, 3, "Low gain down"),
    (ExifTag::GAIN_CONTROL, 4, "High gain down"),
    (ExifTag::CONTRAST, 0, "Normal"),
    (ExifTag::CONTRAST, 1, "Low"),
    (ExifTag::CONTRAST, 2, "High"),
    (ExifTag::SATURATION, 0, "Normal"),
    (ExifTag::SATURATION, 1, "Low"),
    (ExifTag::SATURATION, 2, "High"),
    (ExifTag::SHARPNESS, 0, "Normal"),
    (ExifTag::SHARPNESS, 1, "Soft"),
    (ExifTag::SHARPNESS, 2, "Hard"),
    (ExifTag::SUBJECT_DISTANCE_RANGE, 0, "Unknown"),
    (ExifTag::SUBJECT_DISTANCE_RANGE, 1, "Macro"),
    (ExifTag::SUBJECT_DISTANCE_RANGE, 2, "Close view"),
    (ExifTag::SUBJECT_DISTANCE_RANGE, 3, "Distant view"),
    (ExifTag::GPS_ALTITUDE_REF, 0, "Sea level"),
    (ExifTag::GPS_ALTITUDE_REF, 1, "Sea level reference (negative value)"),
    (ExifTag::GPS_DIFFERENTIAL, 0, "No Correction"),
    (ExifTag::GPS_DIFFERENTIAL, 1, "Differential Corrected"),
];

/// Description of `value` for `tag`, if the tag is enumerated
pub fn description(tag: ExifTag, value: u32) -> Option<&'static str> {
    static TABLE: OnceLock<HashMap<(ExifTag, u32), &'static str>> = OnceLock::new();

    TABLE
        .get_or_init(|| {
            DESCRIPTIONS
                .iter()
                .map(|&(tag, value, text)| ((tag, value), text))
                .collect()
        })
        .get(&(tag, value))
        .copied()
}
