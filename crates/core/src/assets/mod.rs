//! Assets module - stored asset records and the repository seam.

mod assets_model;
mod assets_traits;


// Re-export the public interface
pub use assets_model::Asset;
pub use assets_traits::AssetRepositoryTrait;
