pub mod layers;
pub mod state;
pub mod transform;
