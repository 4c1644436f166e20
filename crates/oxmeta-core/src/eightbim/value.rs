//! A single image resource block

use std::hash::{Hash, Hasher};

use super::resource::ResourceId;
use crate::container::ProfileValue;
use crate::encoding::TextEncoding;
use crate::error::{Error, Result};

/// Longest Pascal name a resource block can carry
pub const MAX_NAME_LENGTH: usize = 255;

/// 8BIM resource value
///
/// The Pascal name is kept for byte-exact re-encoding but takes no part in
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct EightBimValue {
    id: ResourceId,
    name: Vec<u8>,
    data: Vec<u8>,
}

impl EightBimValue {
    /// Unnamed resource
    pub fn new(id: ResourceId, data: Vec<u8>) -> Self {
        Self {
            id,
            name: Vec::new(),
            data,
        }
    }

    /// Named resource
    pub fn with_name(id: ResourceId, name: Vec<u8>, data: Vec<u8>) -> Result<Self> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::invalid_argument(
                "name",
                format!("{} bytes exceeds the Pascal string limit of {MAX_NAME_LENGTH}", name.len()),
            ));
        }

        Ok(Self { id, name, data })
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Raw Pascal name bytes
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Pascal name as text
    pub fn name_lossy(&self) -> String {
        TextEncoding::Latin1.decode(&self.name)
    }

    /// Raw payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Payload decoded as UTF-8, for display
    pub fn to_string_lossy(&self) -> String {
        TextEncoding::Utf8.decode(&self.data)
    }

    /// Payload decoded with `encoding`, for display
    pub fn to_string_with(&self, encoding: TextEncoding) -> String {
        encoding.decode(&self.data)
    }
}

impl PartialEq for EightBimValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.data == other.data
    }
}

impl Eq for EightBimValue {}

impl Hash for EightBimValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.data.hash(state);
    }
}

impl ProfileValue for EightBimValue {
    type Tag = ResourceId;

    fn tag(&self) -> ResourceId {
        self.id
    }

    // Duplicate blocks are legal and must survive a round trip
    fn is_repeatable(_: ResourceId) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_name() {
        let a = EightBimValue::with_name(ResourceId::CAPTION, b"one".to_vec(), vec![1, 2, 3])
            .expect("short name");
        let b = EightBimValue::new(ResourceId::CAPTION, vec![1, 2, 3]);
        let c = EightBimValue::new(ResourceId::URL, vec![1, 2, 3]);
        let d = EightBimValue::new(ResourceId::CAPTION, vec![1, 2, 4]);

        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_name_too_long() {
        let result = EightBimValue::with_name(ResourceId::CAPTION, vec![b'a'; 256], Vec::new());
        assert!(matches!(result, Err(Error::InvalidArgument { name: "name", .. })));

        let max = EightBimValue::with_name(ResourceId::CAPTION, vec![b'a'; 255], Vec::new());
        assert!(max.is_ok());
    }

    #[test]
    fn test_display_projection() {
        let value = EightBimValue::new(ResourceId::URL, b"https://example.org".to_vec());
        assert_eq!(value.to_string_lossy(), "https://example.org");
        assert_eq!(
            EightBimValue::new(ResourceId::CAPTION, vec![0x00, b'H', 0x00, b'i'])
                .to_string_with(TextEncoding::Utf16Be),
            "Hi"
        );
    }
}
