pub mod manifest;
pub mod store;
pub mod types;

pub use manifest::{load_manifest, manifest_from_store, save_manifest, seed_store};
pub use store::MarkerStore;
pub use types::*;
