use super::assets_model::Asset;
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
///
/// Implemented by the storage layer of the surrounding application. The
/// valuation core only reads.
pub trait AssetRepositoryTrait: Send + Sync {
    /// Looks up a single asset by its unique name.
    fn get_by_name(&self, name: &str) -> Result<Asset>;
    fn list(&self) -> Result<Vec<Asset>>;
}
