//! # oxmeta - embedded image metadata profiles
//!
//! Parsers and encoders for the metadata blocks image files carry next to their
//! pixels: IPTC-IIM datasets, Photoshop 8BIM resources (including clipping
//! paths), PSD additional layer information, XMP packets and EXIF IFDs.
//!
//! ## Goals
//!
//! - **Lossless**: decoded profiles re-encode to the same bytes where the format
//!   defines an exact layout
//! - **Forgiving**: malformed input yields a partial result flagged as truncated,
//!   never a panic or an error
//! - **Typed**: tags, data types and cardinality come from static registries
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxmeta_core::{CodecOptions, ImageProfile};
//! use oxmeta_core::iptc::{IptcProfile, IptcTag};
//!
//! let mut iptc = IptcProfile::new();
//! iptc.set_value(IptcTag::BYLINE, "test");
//! iptc.set_value(IptcTag::BYLINE, "another one");
//! iptc.set_value(IptcTag::TITLE, "Harbor at dawn");
//!
//! let bytes = ImageProfile::from(iptc).to_bytes().unwrap();
//!
//! // Bytes coming back from an image engine
//! let profile = ImageProfile::decode("iptc", &bytes, &CodecOptions::default());
//! if let ImageProfile::Iptc(iptc) = profile {
//!     assert_eq!(iptc.get_all_values(IptcTag::BYLINE).len(), 2);
//! }
//! ```

pub mod config;
pub mod container;
pub mod eightbim;
pub mod encoding;
pub mod error;
pub mod exif;
pub mod iptc;
pub mod profile;
pub mod psd;
pub mod xmp;

pub use config::{CodecOptions, ImageSize};
pub use container::{Decoded, ProfileContainer, ProfileValue};
pub use eightbim::{ClipPath, EightBimProfile, EightBimValue, ResourceId};
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use exif::{ExifByteOrder, ExifParts, ExifProfile, ExifTag, ExifValue, ExifValueData};
pub use iptc::{IptcProfile, IptcTag, IptcValue};
pub use profile::ImageProfile;
pub use psd::{PsdAdditionalInfo, PsdInfoPolicy};
pub use xmp::XmpProfile;

/// Version of oxmeta
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of the profiles decoded into typed structures
pub const KNOWN_PROFILE_NAMES: [&str; 5] = [
    iptc::IPTC_PROFILE_NAME,
    eightbim::EIGHTBIM_PROFILE_NAME,
    exif::EXIF_PROFILE_NAME,
    xmp::XMP_PROFILE_NAME,
    psd::PSD_INFO_PROFILE_NAME,
];
