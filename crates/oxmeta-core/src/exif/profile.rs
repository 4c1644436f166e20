//! EXIF profile

use tracing::debug;

use super::ExifByteOrder;
use super::reader::read_exif;
use super::tag::{ExifParts, ExifTag};
use super::value::{ExifValue, ExifValueData, type_name};
use super::writer::write_exif;
use crate::container::{Decoded, ProfileContainer};
use crate::error::{Error, Result};

/// Profile name used by image engines
pub const EXIF_PROFILE_NAME: &str = "exif";

/// Decoded EXIF block
#[derive(Debug, Clone, PartialEq)]
pub struct ExifProfile {
    values: ProfileContainer<ExifValue>,
    invalid_tags: Vec<ExifTag>,
    thumbnail: Option<Vec<u8>>,
    parts: ExifParts,
    byte_order: ExifByteOrder,
}

impl Default for ExifProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ExifProfile {
    pub fn new() -> Self {
        Self {
            values: ProfileContainer::new(EXIF_PROFILE_NAME),
            invalid_tags: Vec::new(),
            thumbnail: None,
            parts: ExifParts::ALL,
            byte_order: ExifByteOrder::default(),
        }
    }

    /// Decode an EXIF block, keeping its byte order for re-encoding
    pub fn parse(data: &[u8]) -> Decoded<Self> {
        read_exif(data).map(|exif| {
            let mut profile = Self::new();
            profile.values.extend(exif.values);
            profile.invalid_tags = exif.invalid_tags;
            profile.thumbnail = exif.thumbnail;
            profile.byte_order = exif.byte_order;
            profile
        })
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self::parse(data).into_value()
    }

    pub fn values(&self) -> &[ExifValue] {
        self.values.values()
    }

    pub fn container(&self) -> &ProfileContainer<ExifValue> {
        &self.values
    }

    pub fn get_value(&self, tag: ExifTag) -> Option<&ExifValue> {
        self.values.get(tag)
    }

    /// Set the value of `tag`
    ///
    /// An existing value keeps its declared type, which for unknown tags is
    /// the type found in the decoded block. New values must match the
    /// registry.
    pub fn set_value(&mut self, tag: ExifTag, data: ExifValueData) -> Result<()> {
        if let Some(existing) = self.values.get_mut(tag) {
            let expected = type_name(existing.data_type(), existing.is_array());
            if existing.set_value(data) {
                return Ok(());
            }
            return Err(Error::TypeMismatch { tag: tag.0, expected });
        }

        self.values.add(ExifValue::new(tag, data)?);
        Ok(())
    }

    pub fn remove_value(&mut self, tag: ExifTag) -> bool {
        self.values.remove(tag)
    }

    /// Tags whose data could not be read from the decoded block
    pub fn invalid_tags(&self) -> &[ExifTag] {
        &self.invalid_tags
    }

    /// JPEG thumbnail referenced by IFD1
    pub fn thumbnail_data(&self) -> Option<&[u8]> {
        self.thumbnail.as_deref()
    }

    pub fn remove_thumbnail(&mut self) {
        if self.thumbnail.take().is_some() {
            debug!("removed EXIF thumbnail");
        }
    }

    pub fn parts(&self) -> ExifParts {
        self.parts
    }

    pub fn set_parts(&mut self, parts: ExifParts) {
        self.parts = parts;
    }

    pub fn byte_order(&self) -> ExifByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ExifByteOrder) {
        self.byte_order = byte_order;
    }

    /// Encode the selected IFDs; empty when nothing is left
    pub fn to_bytes(&self) -> Vec<u8> {
        write_exif(self.values.values(), self.parts, self.byte_order)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
