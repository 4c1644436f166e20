//! IPTC profile

use chrono::{DateTime, FixedOffset};

use super::parser::{read_datasets_with, write_datasets};
use super::tag::IptcTag;
use super::value::{DATE_FORMAT, IptcValue, TIME_FORMAT};
use crate::container::{Decoded, ProfileContainer};
use crate::encoding::TextEncoding;
use crate::error::{Error, Result};

/// Profile name used by image engines
pub const IPTC_PROFILE_NAME: &str = "iptc";

/// An IPTC-IIM profile
///
/// Two profiles are equal when they hold the same values in the same order,
/// whatever encoding new values would use.
#[derive(Debug, Clone)]
pub struct IptcProfile {
    values: ProfileContainer<IptcValue>,
    encoding: TextEncoding,
}

impl Default for IptcProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for IptcProfile {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl IptcProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::with_encoding(TextEncoding::Utf8)
    }

    /// Create an empty profile whose new values use `encoding`
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            values: ProfileContainer::new(IPTC_PROFILE_NAME),
            encoding,
        }
    }

    /// Parse a dataset stream
    ///
    /// A non-repeatable tag seen twice keeps its latest value at the first position.
    pub fn parse(data: &[u8]) -> Decoded<Self> {
        Self::parse_with_encoding(data, TextEncoding::Utf8)
    }

    /// Parse a dataset stream whose text is stored in `encoding`
    pub fn parse_with_encoding(data: &[u8], encoding: TextEncoding) -> Decoded<Self> {
        read_datasets_with(data, encoding).map(|datasets| {
            let mut profile = Self::with_encoding(encoding);
            profile.values.extend(datasets);
            profile
        })
    }

    /// Parse, dropping the truncation flag
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::parse(data).into_value()
    }

    /// All values in stream order
    pub fn values(&self) -> &[IptcValue] {
        self.values.values()
    }

    /// Underlying container
    pub fn container(&self) -> &ProfileContainer<IptcValue> {
        &self.values
    }

    /// Mutable access to the underlying container
    pub fn container_mut(&mut self) -> &mut ProfileContainer<IptcValue> {
        &mut self.values
    }

    /// Distinct tags in first-seen order
    pub fn tags(&self) -> Vec<IptcTag> {
        self.values.tags()
    }

    /// First value with `tag`
    pub fn get_value(&self, tag: IptcTag) -> Option<&IptcValue> {
        self.values.get(tag)
    }

    /// All values with `tag`
    pub fn get_all_values(&self, tag: IptcTag) -> Vec<&IptcValue> {
        self.values.get_all(tag)
    }

    /// Encoding of values created through [`Self::set_value`]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Set a value in the profile's encoding
    pub fn set_value(&mut self, tag: IptcTag, value: &str) {
        self.set_value_with_encoding(tag, self.encoding, value);
    }

    /// Set a value with an explicit encoding
    ///
    /// Repeatable tags gain another value; others are replaced in place.
    pub fn set_value_with_encoding(&mut self, tag: IptcTag, encoding: TextEncoding, value: &str) {
        self.values.add(IptcValue::with_text(tag, encoding, value));
    }

    /// Set a date or time dataset from a timestamp
    pub fn set_date_time(&mut self, tag: IptcTag, timestamp: &DateTime<FixedOffset>) -> Result<()> {
        let format = if tag.is_date() {
            DATE_FORMAT
        } else if tag.is_time() {
            TIME_FORMAT
        } else {
            return Err(Error::invalid_argument(
                "tag",
                format!("{tag} is not a date or time dataset"),
            ));
        };

        let text = timestamp.format(format).to_string();
        self.set_value(tag, &text);
        Ok(())
    }

    /// Remove every value with `tag`
    pub fn remove_value(&mut self, tag: IptcTag) -> bool {
        self.values.remove(tag)
    }

    /// Remove the values with `tag` whose text equals `value`
    pub fn remove_value_matching(&mut self, tag: IptcTag, value: &str) -> bool {
        self.values.remove_where(tag, |v| v.value() == value)
    }

    /// Re-encode every value with `encoding`, which also applies to new values
    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
        for value in self.values.values_mut() {
            value.set_encoding(encoding);
        }
    }

    /// Serialize in container order
    pub fn to_bytes(&self) -> Vec<u8> {
        write_datasets(self.values.values())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
