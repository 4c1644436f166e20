//! IPTC-IIM profiles
//!
//! Datasets of the IPTC Information Interchange Model as stored in JPEG APP13
//! segments and Photoshop resource 0x0404.

mod parser;
mod profile;
mod tag;
mod value;

pub use parser::{
    HEADER_SIZE, MAX_STANDARD_LENGTH, TAG_MARKER, read_datasets, read_datasets_with, write_dataset,
    write_datasets,
};
pub use profile::{IPTC_PROFILE_NAME, IptcProfile};
pub use tag::{IptcDataType, IptcTag, IptcTagInfo, known_tags};
pub use value::IptcValue;
