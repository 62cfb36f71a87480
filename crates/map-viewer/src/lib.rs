pub mod app;
pub mod constants;
pub mod error;
pub mod marker;
pub mod ui;
pub mod viewer;
pub mod widget;

pub use error::{MapError, Result};
pub use marker::*;
pub use viewer::layers::LayerKind;
pub use viewer::state::MapViewerState;
pub use viewer::transform::ViewportTransform;
pub use widget::MapViewerWidget;
