//! EXIF tag tables
//!
//! Values live in IFD0, the Exif sub-IFD and the GPS IFD of a TIFF structure.
//! Each registry tag has a declared [`ExifDataType`] and arrayness. Decoded
//! registry values are converted to it; unknown tags keep the stored type and
//! are written back to IFD0.

mod data_type;
mod description;
mod profile;
mod rational;
mod reader;
mod tag;
mod value;
mod writer;

pub use data_type::ExifDataType;
pub use description::description;
pub use profile::{EXIF_PROFILE_NAME, ExifProfile};
pub use rational::{Rational, SignedRational};
pub use reader::{EXIF_HEADER, ExifData, read_exif};
pub use tag::{EXIF_TAGS, ExifIfd, ExifParts, ExifTag, ExifTagInfo};
pub use value::{ExifValue, ExifValueData};
pub use writer::write_exif;

/// Byte order of an encoded TIFF structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExifByteOrder {
    /// `II`
    #[default]
    LittleEndian,
    /// `MM`
    BigEndian,
}
