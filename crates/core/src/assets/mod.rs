//! Assets module - the static catalog of assets the service can value.

mod assets_model;
mod catalog;

// Re-export the public interface
pub use assets_model::{AssetDescriptor, AssetId};
pub use catalog::AssetCatalog;
