mod kitchen_assets;
pub mod meshes;

pub use kitchen_assets::KitchenAssets;
pub use meshes::MeshAssets;
