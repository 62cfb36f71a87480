use egui::Color32;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 4.0;
pub const DEFAULT_SCALE: f32 = 0.5;
pub const SCALE_EPSILON: f32 = 1e-4;

pub const WHEEL_ZOOM_STEP: f32 = 0.15;
pub const BUTTON_ZOOM_STEP: f32 = 0.2;
pub const KEYBOARD_PAN_STEP: f32 = 10.0;

pub const MARKER_RADIUS: f32 = 6.0;
pub const MARKER_STROKE_WIDTH: f32 = 2.0;
pub const MARKER_HIT_RADIUS: f32 = 10.0;

pub const MARKER_COLOR_PERMANENT: Color32 = Color32::from_rgb(0, 200, 80);
pub const MARKER_COLOR_EPHEMERAL: Color32 = Color32::from_rgb(255, 200, 0);
pub const MARKER_LABEL_COLOR: Color32 = Color32::WHITE;

pub const MANIFEST_VERSION: &str = "1.0.0";
