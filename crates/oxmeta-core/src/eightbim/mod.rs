//! Photoshop image resource (8BIM) profiles
//!
//! Resource blocks as found in JPEG APP13 segments and PSD/TIFF image resource
//! sections, including clipping paths rendered to SVG.

pub mod clip_path;
mod parser;
mod profile;
mod resource;
mod value;

pub use clip_path::ClipPath;
pub use parser::{SIGNATURE, read_resources, write_resource, write_resources};
pub use profile::{EIGHTBIM_PROFILE_NAME, EightBimProfile};
pub use resource::ResourceId;
pub use value::{EightBimValue, MAX_NAME_LENGTH};
