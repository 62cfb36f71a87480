pub mod canvas;
pub mod controls;
pub mod marker_overlay;
pub mod marker_panel;
pub mod viewer_panel;
