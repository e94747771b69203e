//! Asset loading: OBJ/MTL text parsing, folder pairing, smooth-normal
//! synthesis, and pluggable texture decoding.

pub mod folder;
pub mod image_provider;
pub mod mtl;
pub mod obj;
pub mod smooth;

pub use self::folder::load_mesh;
pub use self::image_provider::{DecodedImage, ImageProvider};
#[cfg(feature = "image_compat")]
pub use self::image_provider::ImageCrateProvider;
pub use self::mtl::MtlMaterial;
pub use self::obj::ParsedObj;
