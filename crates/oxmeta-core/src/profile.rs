//! Named profile dispatch
//!
//! Image engines hand profiles around as `(name, bytes)` pairs. [`ImageProfile`]
//! maps the names this crate understands onto typed profiles and keeps
//! everything else as opaque bytes.

use tracing::debug;

use crate::config::CodecOptions;
use crate::container::Decoded;
use crate::eightbim::{EIGHTBIM_PROFILE_NAME, EightBimProfile};
use crate::error::{Error, Result};
use crate::exif::{EXIF_PROFILE_NAME, ExifProfile};
use crate::iptc::{IPTC_PROFILE_NAME, IptcProfile};
use crate::psd::{PSD_INFO_PROFILE_NAME, PsdAdditionalInfo};
use crate::xmp::{XMP_PROFILE_NAME, XmpProfile};

/// A decoded image profile
#[derive(Debug, Clone, PartialEq)]
pub enum ImageProfile {
    Iptc(IptcProfile),
    EightBim(EightBimProfile),
    Exif(ExifProfile),
    Xmp(XmpProfile),
    PsdAdditionalInfo(PsdAdditionalInfo),
    /// Any other profile, kept verbatim
    Generic { name: String, data: Vec<u8> },
}

impl ImageProfile {
    /// Decode a named profile
    ///
    /// Names are matched case-insensitively. Malformed input yields whatever
    /// could be read; use [`Self::decode_with_status`] to learn about truncation.
    pub fn decode(name: &str, data: &[u8], options: &CodecOptions) -> Self {
        Self::decode_with_status(name, data, options).into_value()
    }

    /// Decode a named profile, reporting truncation
    pub fn decode_with_status(name: &str, data: &[u8], options: &CodecOptions) -> Decoded<Self> {
        let decoded = if name.eq_ignore_ascii_case(IPTC_PROFILE_NAME) {
            IptcProfile::parse_with_encoding(data, options.text_encoding).map(Self::Iptc)
        } else if name.eq_ignore_ascii_case(EIGHTBIM_PROFILE_NAME) {
            EightBimProfile::parse(data, options.image_size).map(Self::EightBim)
        } else if name.eq_ignore_ascii_case(EXIF_PROFILE_NAME) {
            ExifProfile::parse(data).map(|mut exif| {
                exif.set_parts(options.exif_parts);
                exif.set_byte_order(options.exif_byte_order);
                Self::Exif(exif)
            })
        } else if name.eq_ignore_ascii_case(XMP_PROFILE_NAME) {
            XmpProfile::parse(data).map(Self::Xmp)
        } else if name.eq_ignore_ascii_case(PSD_INFO_PROFILE_NAME) {
            PsdAdditionalInfo::parse(data, options.psd_info_policy).map(Self::PsdAdditionalInfo)
        } else {
            Decoded::complete(Self::Generic {
                name: name.to_string(),
                data: data.to_vec(),
            })
        };

        if decoded.truncated {
            debug!(name, len = data.len(), "profile decoded with truncation");
        }
        decoded
    }

    /// An opaque profile; the name must not be empty
    pub fn generic(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("name", "profile name is empty"));
        }
        Ok(Self::Generic { name, data })
    }

    /// Profile name as used by image engines
    pub fn name(&self) -> &str {
        match self {
            Self::Iptc(_) => IPTC_PROFILE_NAME,
            Self::EightBim(_) => EIGHTBIM_PROFILE_NAME,
            Self::Exif(_) => EXIF_PROFILE_NAME,
            Self::Xmp(_) => XMP_PROFILE_NAME,
            Self::PsdAdditionalInfo(_) => PSD_INFO_PROFILE_NAME,
            Self::Generic { name, .. } => name,
        }
    }

    /// Encode the profile; an empty buffer means the profile should be dropped
    ///
    /// Fails for an opaque profile without a name, which no image can carry.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Iptc(iptc) => iptc.to_bytes(),
            Self::EightBim(eightbim) => eightbim.to_bytes(),
            Self::Exif(exif) => exif.to_bytes(),
            Self::Xmp(xmp) => xmp.to_bytes(),
            Self::PsdAdditionalInfo(info) => info.to_bytes(),
            Self::Generic { name, .. } if name.is_empty() => {
                return Err(Error::invalid_argument("name", "profile name is empty"));
            }
            Self::Generic { data, .. } => data.clone(),
        })
    }
}

impl From<IptcProfile> for ImageProfile {
    fn from(profile: IptcProfile) -> Self {
        Self::Iptc(profile)
    }
}

impl From<EightBimProfile> for ImageProfile {
    fn from(profile: EightBimProfile) -> Self {
        Self::EightBim(profile)
    }
}

impl From<ExifProfile> for ImageProfile {
    fn from(profile: ExifProfile) -> Self {
        Self::Exif(profile)
    }
}

impl From<XmpProfile> for ImageProfile {
    fn from(profile: XmpProfile) -> Self {
        Self::Xmp(profile)
    }
}

impl From<PsdAdditionalInfo> for ImageProfile {
    fn from(info: PsdAdditionalInfo) -> Self {
        Self::PsdAdditionalInfo(info)
    }
}
