//! 8BIM (Photoshop image resource) profile

use tracing::warn;

use super::clip_path::{self, ClipPath};
use super::parser::{read_resources, write_resources};
use super::resource::ResourceId;
use super::value::EightBimValue;
use crate::config::ImageSize;
use crate::container::{Decoded, ProfileContainer};
use crate::iptc::IptcProfile;
use crate::xmp::XmpProfile;

/// Profile name used by image engines
pub const EIGHTBIM_PROFILE_NAME: &str = "8bim";

/// A sequence of Photoshop image resource blocks
#[derive(Debug, Clone)]
pub struct EightBimProfile {
    values: ProfileContainer<EightBimValue>,
    image_size: Option<ImageSize>,
}

impl Default for EightBimProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EightBimProfile {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl EightBimProfile {
    pub fn new() -> Self {
        Self {
            values: ProfileContainer::new(EIGHTBIM_PROFILE_NAME),
            image_size: None,
        }
    }

    /// Parse a resource block stream
    ///
    /// `image_size` is needed to render clip paths; without it [`Self::clip_paths`]
    /// is always empty.
    pub fn parse(data: &[u8], image_size: Option<ImageSize>) -> Decoded<Self> {
        read_resources(data).map(|resources| {
            let mut profile = Self::new();
            profile.image_size = image_size;
            profile.values.extend(resources);
            profile
        })
    }

    /// Parse, dropping the truncation flag
    pub fn from_bytes(data: &[u8], image_size: Option<ImageSize>) -> Self {
        Self::parse(data, image_size).into_value()
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn set_image_size(&mut self, image_size: Option<ImageSize>) {
        self.image_size = image_size;
    }

    /// All resources in stream order
    pub fn values(&self) -> &[EightBimValue] {
        self.values.values()
    }

    pub fn container(&self) -> &ProfileContainer<EightBimValue> {
        &self.values
    }

    /// First resource with `id`
    pub fn get_value(&self, id: ResourceId) -> Option<&EightBimValue> {
        self.values.get(id)
    }

    /// All resources with `id`
    pub fn get_all_values(&self, id: ResourceId) -> Vec<&EightBimValue> {
        self.values.get_all(id)
    }

    /// Append a resource
    pub fn set_value(&mut self, value: EightBimValue) {
        self.values.add(value);
    }

    /// Remove every resource with `id`
    pub fn remove_value(&mut self, id: ResourceId) -> bool {
        self.values.remove(id)
    }

    /// IPTC datasets stored in resource 0x0404
    pub fn iptc_profile(&self) -> Option<IptcProfile> {
        self.get_value(ResourceId::IPTC)
            .map(|value| IptcProfile::from_bytes(value.data()))
    }

    /// XMP packet stored in resource 0x0424
    pub fn xmp_profile(&self) -> Option<XmpProfile> {
        self.get_value(ResourceId::XMP)
            .map(|value| XmpProfile::new(value.data().to_vec()))
    }

    /// Clip paths rendered against the image size
    pub fn clip_paths(&self) -> Vec<ClipPath> {
        let Some(size) = self.image_size else {
            return Vec::new();
        };

        self.values
            .values()
            .iter()
            .filter(|value| value.id().is_clip_path())
            .filter_map(|value| match clip_path::render(value.data(), size) {
                Ok(Some(path)) => Some(ClipPath {
                    name: value.name_lossy(),
                    path,
                }),
                Ok(None) => None,
                Err(err) => {
                    warn!(id = %value.id(), error = %err, "Failed to render clip path");
                    None
                }
            })
            .collect()
    }

    /// Clip path with the given resource name
    pub fn clip_path(&self, name: &str) -> Option<ClipPath> {
        self.clip_paths().into_iter().find(|path| path.name == name)
    }

    /// Serialize in container order
    pub fn to_bytes(&self) -> Vec<u8> {
        write_resources(self.values.values())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eightbim::clip_path::tests::square_path;
    use crate::iptc::IptcTag;

    fn sample() -> EightBimProfile {
        let mut iptc = IptcProfile::new();
        iptc.set_value(IptcTag::TITLE, "Lighthouse");

        let mut profile = EightBimProfile::new();
        profile.set_value(EightBimValue::new(ResourceId::RESOLUTION_INFO, vec![0; 16]));
        profile.set_value(EightBimValue::new(ResourceId::IPTC, iptc.to_bytes()));
        profile.set_value(
            EightBimValue::with_name(ResourceId(2000), b"Path 1".to_vec(), square_path())
                .expect("short name"),
        );
        profile
    }

    #[test]
    fn test_round_trip() {
        let profile = sample();
        let decoded = EightBimProfile::parse(&profile.to_bytes(), None);

        assert!(!decoded.truncated);
        assert_eq!(decoded.value, profile);
        assert_eq!(decoded.value.to_bytes(), profile.to_bytes());
    }

    #[test]
    fn test_duplicates_kept() {
        let mut profile = EightBimProfile::new();
        profile.set_value(EightBimValue::new(ResourceId::URL, vec![1]));
        profile.set_value(EightBimValue::new(ResourceId::URL, vec![2]));
        assert_eq!(profile.get_all_values(ResourceId::URL).len(), 2);
    }

    #[test]
    fn test_nested_iptc() {
        let iptc = sample().iptc_profile().expect("resource 0x0404");
        assert_eq!(
            iptc.get_value(IptcTag::TITLE).map(|v| v.value()),
            Some("Lighthouse".to_string())
        );
        assert!(sample().xmp_profile().is_none());
    }

    #[test]
    fn test_clip_paths_need_size() {
        let bytes = sample().to_bytes();
        assert!(EightBimProfile::from_bytes(&bytes, None).clip_paths().is_empty());

        let profile = EightBimProfile::from_bytes(&bytes, Some(ImageSize::new(100, 100)));
        let paths = profile.clip_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].name, "Path 1");
        assert!(paths[0].path.contains("M 25 25"));

        assert!(profile.clip_path("Path 1").is_some());
        assert!(profile.clip_path("Path 2").is_none());
    }

    #[test]
    fn test_remove_value() {
        let mut profile = sample();
        assert!(profile.remove_value(ResourceId::IPTC));
        assert!(!profile.remove_value(ResourceId::IPTC));
        assert!(profile.iptc_profile().is_none());
        assert_eq!(profile.len(), 2);
    }
}
