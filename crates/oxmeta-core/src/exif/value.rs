//! Typed EXIF values

use std::fmt;

use byteorder::ByteOrder;

use super::data_type::ExifDataType;
use super::description::description;
use super::rational::{Rational, SignedRational};
use super::tag::ExifTag;
use crate::container::ProfileValue;
use crate::error::{Error, Result};

/// Payload of an EXIF value
#[derive(Debug, Clone, PartialEq)]
pub enum ExifValueData {
    Byte(u8),
    ByteArray(Vec<u8>),
    Ascii(String),
    Short(u16),
    ShortArray(Vec<u16>),
    Long(u32),
    LongArray(Vec<u32>),
    Rational(Rational),
    RationalArray(Vec<Rational>),
    SignedByte(i8),
    SignedByteArray(Vec<i8>),
    Undefined(u8),
    UndefinedArray(Vec<u8>),
    SignedShort(i16),
    SignedShortArray(Vec<i16>),
    SignedLong(i32),
    SignedLongArray(Vec<i32>),
    SignedRational(SignedRational),
    SignedRationalArray(Vec<SignedRational>),
    Float(f32),
    FloatArray(Vec<f32>),
    Double(f64),
    DoubleArray(Vec<f64>),
}

fn components<T>(bytes: &[u8], size: usize, read: impl Fn(&[u8]) -> T) -> Vec<T> {
    bytes.chunks_exact(size).map(read).collect()
}

fn read_rational<B: ByteOrder>(b: &[u8]) -> Rational {
    Rational::new(B::read_u32(&b[..4]), B::read_u32(&b[4..8]))
}

fn read_signed_rational<B: ByteOrder>(b: &[u8]) -> SignedRational {
    SignedRational::new(B::read_i32(&b[..4]), B::read_i32(&b[4..8]))
}

impl ExifValueData {
    pub fn data_type(&self) -> ExifDataType {
        match self {
            Self::Byte(_) | Self::ByteArray(_) => ExifDataType::Byte,
            Self::Ascii(_) => ExifDataType::Ascii,
            Self::Short(_) | Self::ShortArray(_) => ExifDataType::Short,
            Self::Long(_) | Self::LongArray(_) => ExifDataType::Long,
            Self::Rational(_) | Self::RationalArray(_) => ExifDataType::Rational,
            Self::SignedByte(_) | Self::SignedByteArray(_) => ExifDataType::SignedByte,
            Self::Undefined(_) | Self::UndefinedArray(_) => ExifDataType::Undefined,
            Self::SignedShort(_) | Self::SignedShortArray(_) => ExifDataType::SignedShort,
            Self::SignedLong(_) | Self::SignedLongArray(_) => ExifDataType::SignedLong,
            Self::SignedRational(_) | Self::SignedRationalArray(_) => ExifDataType::SignedRational,
            Self::Float(_) | Self::FloatArray(_) => ExifDataType::Float,
            Self::Double(_) | Self::DoubleArray(_) => ExifDataType::Double,
        }
    }

    /// Whether the payload holds several components; ASCII never does
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Self::ByteArray(_)
                | Self::ShortArray(_)
                | Self::LongArray(_)
                | Self::RationalArray(_)
                | Self::SignedByteArray(_)
                | Self::UndefinedArray(_)
                | Self::SignedShortArray(_)
                | Self::SignedLongArray(_)
                | Self::SignedRationalArray(_)
                | Self::FloatArray(_)
                | Self::DoubleArray(_)
        )
    }

    /// Number of components as written to an IFD entry
    ///
    /// ASCII counts its terminating NUL.
    pub fn component_count(&self) -> usize {
        match self {
            Self::Ascii(s) => s.len() + 1,
            Self::ByteArray(v) | Self::UndefinedArray(v) => v.len(),
            Self::ShortArray(v) => v.len(),
            Self::LongArray(v) => v.len(),
            Self::RationalArray(v) => v.len(),
            Self::SignedByteArray(v) => v.len(),
            Self::SignedShortArray(v) => v.len(),
            Self::SignedLongArray(v) => v.len(),
            Self::SignedRationalArray(v) => v.len(),
            Self::FloatArray(v) => v.len(),
            Self::DoubleArray(v) => v.len(),
            _ => 1,
        }
    }

    /// Encoded size in bytes
    pub fn byte_len(&self) -> usize {
        self.component_count() * self.data_type().size()
    }

    /// True for empty strings and arrays; such values are not written
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ascii(s) => s.is_empty(),
            _ => self.is_array() && self.component_count() == 0,
        }
    }

    /// Decode `count` components of `data_type` from `bytes`
    ///
    /// `bytes` must hold exactly `count * data_type.size()` bytes.
    pub fn decode<B: ByteOrder>(data_type: ExifDataType, bytes: &[u8], count: usize) -> Option<Self> {
        if count == 0 || bytes.len() != count * data_type.size() {
            return None;
        }
        let single = count == 1;

        Some(match data_type {
            ExifDataType::Ascii => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                Self::Ascii(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            ExifDataType::Byte if single => Self::Byte(bytes[0]),
            ExifDataType::Byte => Self::ByteArray(bytes.to_vec()),
            ExifDataType::Undefined if single => Self::Undefined(bytes[0]),
            ExifDataType::Undefined => Self::UndefinedArray(bytes.to_vec()),
            ExifDataType::SignedByte if single => Self::SignedByte(bytes[0] as i8),
            ExifDataType::SignedByte => {
                Self::SignedByteArray(bytes.iter().map(|&b| b as i8).collect())
            }
            ExifDataType::Short if single => Self::Short(B::read_u16(bytes)),
            ExifDataType::Short => Self::ShortArray(components(bytes, 2, B::read_u16)),
            ExifDataType::SignedShort if single => Self::SignedShort(B::read_i16(bytes)),
            ExifDataType::SignedShort => {
                Self::SignedShortArray(components(bytes, 2, B::read_i16))
            }
            ExifDataType::Long if single => Self::Long(B::read_u32(bytes)),
            ExifDataType::Long => Self::LongArray(components(bytes, 4, B::read_u32)),
            ExifDataType::SignedLong if single => Self::SignedLong(B::read_i32(bytes)),
            ExifDataType::SignedLong => Self::SignedLongArray(components(bytes, 4, B::read_i32)),
            ExifDataType::Float if single => Self::Float(B::read_f32(bytes)),
            ExifDataType::Float => Self::FloatArray(components(bytes, 4, B::read_f32)),
            ExifDataType::Double if single => Self::Double(B::read_f64(bytes)),
            ExifDataType::Double => Self::DoubleArray(components(bytes, 8, B::read_f64)),
            ExifDataType::Rational if single => Self::Rational(read_rational::<B>(bytes)),
            ExifDataType::Rational => Self::RationalArray(components(bytes, 8, read_rational::<B>)),
            ExifDataType::SignedRational if single => {
                Self::SignedRational(read_signed_rational::<B>(bytes))
            }
            ExifDataType::SignedRational => {
                Self::SignedRationalArray(components(bytes, 8, read_signed_rational::<B>))
            }
        })
    }

    /// Append the encoded components to `out`
    pub fn write<B: ByteOrder>(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + self.byte_len(), 0);
        let buf = &mut out[start..];

        match self {
            Self::Ascii(s) => buf[..s.len()].copy_from_slice(s.as_bytes()),
            Self::Byte(v) | Self::Undefined(v) => buf[0] = *v,
            Self::ByteArray(v) | Self::UndefinedArray(v) => buf.copy_from_slice(v),
            Self::SignedByte(v) => buf[0] = *v as u8,
            Self::SignedByteArray(v) => {
                for (dst, src) in buf.iter_mut().zip(v) {
                    *dst = *src as u8;
                }
            }
            Self::Short(v) => B::write_u16(buf, *v),
            Self::ShortArray(v) => B::write_u16_into(v, buf),
            Self::SignedShort(v) => B::write_i16(buf, *v),
            Self::SignedShortArray(v) => B::write_i16_into(v, buf),
            Self::Long(v) => B::write_u32(buf, *v),
            Self::LongArray(v) => B::write_u32_into(v, buf),
            Self::SignedLong(v) => B::write_i32(buf, *v),
            Self::SignedLongArray(v) => B::write_i32_into(v, buf),
            Self::Float(v) => B::write_f32(buf, *v),
            Self::FloatArray(v) => B::write_f32_into(v, buf),
            Self::Double(v) => B::write_f64(buf, *v),
            Self::DoubleArray(v) => B::write_f64_into(v, buf),
            Self::Rational(r) => write_rational::<B>(buf, r),
            Self::RationalArray(v) => {
                for (chunk, r) in buf.chunks_exact_mut(8).zip(v) {
                    write_rational::<B>(chunk, r);
                }
            }
            Self::SignedRational(r) => write_signed_rational::<B>(buf, r),
            Self::SignedRationalArray(v) => {
                for (chunk, r) in buf.chunks_exact_mut(8).zip(v) {
                    write_signed_rational::<B>(chunk, r);
                }
            }
        }
    }

    /// Rendering of each component, consulting the description table
    fn format_components(&self, tag: ExifTag) -> Vec<String> {
        fn enumerated(tag: ExifTag, value: u32, fallback: String) -> String {
            description(tag, value).map_or(fallback, str::to_string)
        }
        fn hex(tag: ExifTag, value: u8) -> String {
            enumerated(tag, u32::from(value), format!("{value:02X}"))
        }
        fn number<T: Into<u32> + Copy + fmt::Display>(tag: ExifTag, value: T) -> String {
            enumerated(tag, value.into(), value.to_string())
        }

        match self {
            Self::Ascii(s) => vec![s.clone()],
            Self::Byte(v) | Self::Undefined(v) => vec![hex(tag, *v)],
            Self::ByteArray(v) | Self::UndefinedArray(v) => v.iter().map(|b| hex(tag, *b)).collect(),
            Self::SignedByte(v) => vec![format!("{:02X}", *v as u8)],
            Self::SignedByteArray(v) => v.iter().map(|b| format!("{:02X}", *b as u8)).collect(),
            Self::Short(v) => vec![number(tag, *v)],
            Self::ShortArray(v) => v.iter().map(|s| number(tag, *s)).collect(),
            Self::Long(v) => vec![number(tag, *v)],
            Self::LongArray(v) => v.iter().map(|l| number(tag, *l)).collect(),
            Self::SignedShort(v) => vec![v.to_string()],
            Self::SignedShortArray(v) => v.iter().map(ToString::to_string).collect(),
            Self::SignedLong(v) => vec![v.to_string()],
            Self::SignedLongArray(v) => v.iter().map(ToString::to_string).collect(),
            Self::Rational(r) => vec![r.to_string()],
            Self::RationalArray(v) => v.iter().map(ToString::to_string).collect(),
            Self::SignedRational(r) => vec![r.to_string()],
            Self::SignedRationalArray(v) => v.iter().map(ToString::to_string).collect(),
            Self::Float(v) => vec![v.to_string()],
            Self::FloatArray(v) => v.iter().map(ToString::to_string).collect(),
            Self::Double(v) => vec![v.to_string()],
            Self::DoubleArray(v) => v.iter().map(ToString::to_string).collect(),
        }
    }

    /// Single-component payload as a one-element array; other payloads unchanged
    pub(crate) fn into_array(self) -> Self {
        match self {
            Self::Byte(v) => Self::ByteArray(vec![v]),
            Self::Short(v) => Self::ShortArray(vec![v]),
            Self::Long(v) => Self::LongArray(vec![v]),
            Self::Rational(v) => Self::RationalArray(vec![v]),
            Self::SignedByte(v) => Self::SignedByteArray(vec![v]),
            Self::Undefined(v) => Self::UndefinedArray(vec![v]),
            Self::SignedShort(v) => Self::SignedShortArray(vec![v]),
            Self::SignedLong(v) => Self::SignedLongArray(vec![v]),
            Self::SignedRational(v) => Self::SignedRationalArray(vec![v]),
            Self::Float(v) => Self::FloatArray(vec![v]),
            Self::Double(v) => Self::DoubleArray(vec![v]),
            other => other,
        }
    }

    /// One-element array as its single component; scalars unchanged
    fn into_single(self) -> Option<Self> {
        fn only<T>(mut v: Vec<T>) -> Option<T> {
            if v.len() == 1 { v.pop() } else { None }
        }

        Some(match self {
            Self::ByteArray(v) => Self::Byte(only(v)?),
            Self::ShortArray(v) => Self::Short(only(v)?),
            Self::LongArray(v) => Self::Long(only(v)?),
            Self::RationalArray(v) => Self::Rational(only(v)?),
            Self::SignedByteArray(v) => Self::SignedByte(only(v)?),
            Self::UndefinedArray(v) => Self::Undefined(only(v)?),
            Self::SignedShortArray(v) => Self::SignedShort(only(v)?),
            Self::SignedLongArray(v) => Self::SignedLong(only(v)?),
            Self::SignedRationalArray(v) => Self::SignedRational(only(v)?),
            Self::FloatArray(v) => Self::Float(only(v)?),
            Self::DoubleArray(v) => Self::Double(only(v)?),
            other => other,
        })
    }

    /// Components of the integer types, widened
    fn integer_components(&self) -> Option<Vec<i64>> {
        fn widen<T: Copy + Into<i64>>(v: &[T]) -> Vec<i64> {
            v.iter().map(|&c| c.into()).collect()
        }

        Some(match self {
            Self::Byte(v) | Self::Undefined(v) => vec![i64::from(*v)],
            Self::ByteArray(v) | Self::UndefinedArray(v) => widen(v),
            Self::Short(v) => vec![i64::from(*v)],
            Self::ShortArray(v) => widen(v),
            Self::Long(v) => vec![i64::from(*v)],
            Self::LongArray(v) => widen(v),
            Self::SignedByte(v) => vec![i64::from(*v)],
            Self::SignedByteArray(v) => widen(v),
            Self::SignedShort(v) => vec![i64::from(*v)],
            Self::SignedShortArray(v) => widen(v),
            Self::SignedLong(v) => vec![i64::from(*v)],
            Self::SignedLongArray(v) => widen(v),
            _ => return None,
        })
    }

    /// Reshape the payload to `data_type` and arrayness
    ///
    /// Integer types convert into each other when every component fits.
    /// Scalars need exactly one component. Anything else gives `None`.
    pub(crate) fn convert(self, data_type: ExifDataType, is_array: bool) -> Option<Self> {
        fn narrow<T: TryFrom<i64>>(components: &[i64]) -> Option<Vec<T>> {
            components.iter().map(|&c| T::try_from(c).ok()).collect()
        }

        let converted = if self.data_type() == data_type {
            self
        } else {
            let components = self.integer_components()?;
            match data_type {
                ExifDataType::Byte => Self::ByteArray(narrow(&components)?),
                ExifDataType::Undefined => Self::UndefinedArray(narrow(&components)?),
                ExifDataType::Short => Self::ShortArray(narrow(&components)?),
                ExifDataType::Long => Self::LongArray(narrow(&components)?),
                ExifDataType::SignedByte => Self::SignedByteArray(narrow(&components)?),
                ExifDataType::SignedShort => Self::SignedShortArray(narrow(&components)?),
                ExifDataType::SignedLong => Self::SignedLongArray(narrow(&components)?),
                _ => return None,
            }
        };

        if is_array {
            Some(converted.into_array())
        } else {
            converted.into_single()
        }
    }

    /// First component as an unsigned integer, for offset and length entries
    pub(crate) fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Long(v) => Some(*v),
            Self::Short(v) => Some(u32::from(*v)),
            _ => None,
        }
    }
}

fn write_rational<B: ByteOrder>(buf: &mut [u8], r: &Rational) {
    B::write_u32(&mut buf[..4], r.numerator);
    B::write_u32(&mut buf[4..8], r.denominator);
}

fn write_signed_rational<B: ByteOrder>(buf: &mut [u8], r: &SignedRational) {
    B::write_i32(&mut buf[..4], r.numerator);
    B::write_i32(&mut buf[4..8], r.denominator);
}

/// `Short`, `Rational array` and so on, for error messages
pub(crate) fn type_name(data_type: ExifDataType, is_array: bool) -> String {
    if is_array {
        format!("{data_type} array")
    } else {
        data_type.to_string()
    }
}

/// A tagged EXIF value with a fixed declared type
#[derive(Debug, Clone, PartialEq)]
pub struct ExifValue {
    tag: ExifTag,
    data_type: ExifDataType,
    is_array: bool,
    data: ExifValueData,
}

impl ExifValue {
    /// Create a value for a registry tag, checking the declared type
    pub fn new(tag: ExifTag, data: ExifValueData) -> Result<Self> {
        let info = tag.info().ok_or(Error::UnknownTag(tag.0))?;
        if info.data_type != data.data_type() || info.is_array != data.is_array() {
            return Err(Error::TypeMismatch {
                tag: tag.0,
                expected: type_name(info.data_type, info.is_array),
            });
        }

        Ok(Self::from_data(tag, data))
    }

    /// Value whose declared type is taken from its payload
    pub(crate) fn from_data(tag: ExifTag, data: ExifValueData) -> Self {
        Self {
            tag,
            data_type: data.data_type(),
            is_array: data.is_array(),
            data,
        }
    }

    pub fn tag(&self) -> ExifTag {
        self.tag
    }

    pub fn data_type(&self) -> ExifDataType {
        self.data_type
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    pub fn data(&self) -> &ExifValueData {
        &self.data
    }

    /// Replace the payload if `candidate` matches the declared type and arrayness
    pub fn set_value(&mut self, candidate: ExifValueData) -> bool {
        if candidate.data_type() != self.data_type || candidate.is_array() != self.is_array {
            return false;
        }

        self.data = candidate;
        true
    }
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data.format_components(self.tag).join(" "))
    }
}

impl ProfileValue for ExifValue {
    type Tag = ExifTag;

    fn tag(&self) -> ExifTag {
        self.tag
    }

    fn is_repeatable(_: ExifTag) -> bool {
        false
    }
}
