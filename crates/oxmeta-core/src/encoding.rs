//! Text encodings for string-typed profile values
//!
//! Raw bytes are always the source of truth. A [`TextEncoding`] only describes how
//! those bytes project to a `String` and back.

/// Character encoding used to store a string value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8 (default)
    #[default]
    Utf8,
    /// 7-bit ASCII, unmappable characters become '?'
    Ascii,
    /// ISO-8859-1, unmappable characters become '?'
    Latin1,
    /// UTF-16, big-endian code units
    Utf16Be,
    /// UTF-16, little-endian code units
    Utf16Le,
}

/// Byte order of UTF-16 code units in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitOrder {
    Big,
    Little,
}

impl TextEncoding {
    /// Decode bytes into a string. Invalid sequences are replaced, never rejected.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '?' })
                .collect(),
            Self::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Self::Utf16Be => String::from_utf16_lossy(&code_units(bytes, UnitOrder::Big)),
            Self::Utf16Le => String::from_utf16_lossy(&code_units(bytes, UnitOrder::Little)),
        }
    }

    /// Encode a string into bytes
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Self::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            Self::Utf16Be => {
                let units: Vec<u16> = text.encode_utf16().collect();
                code_unit_bytes(&units, UnitOrder::Big)
            }
            Self::Utf16Le => {
                let units: Vec<u16> = text.encode_utf16().collect();
                code_unit_bytes(&units, UnitOrder::Little)
            }
        }
    }

    /// Short name of the encoding
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "us-ascii",
            Self::Latin1 => "iso-8859-1",
            Self::Utf16Be => "utf-16be",
            Self::Utf16Le => "utf-16le",
        }
    }
}

/// Copy bytes into a code-unit buffer and convert each unit to native order.
///
/// A trailing odd byte is ignored.
pub(crate) fn code_units(bytes: &[u8], order: UnitOrder) -> Vec<u16> {
    let mut units = vec![0u16; bytes.len() / 2];
    let len = units.len() * 2;
    bytemuck::cast_slice_mut::<u16, u8>(&mut units).copy_from_slice(&bytes[..len]);

    match order {
        UnitOrder::Big => units.iter_mut().for_each(|u| *u = u16::from_be(*u)),
        UnitOrder::Little => units.iter_mut().for_each(|u| *u = u16::from_le(*u)),
    }

    units
}

/// Inverse of [`code_units`]
pub(crate) fn code_unit_bytes(units: &[u16], order: UnitOrder) -> Vec<u8> {
    let converted: Vec<u16> = match order {
        UnitOrder::Big => units.iter().map(|u| u.to_be()).collect(),
        UnitOrder::Little => units.iter().map(|u| u.to_le()).collect(),
    };

    bytemuck::cast_slice::<u16, u8>(&converted).to_vec()
}
