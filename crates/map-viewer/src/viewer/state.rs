use super::layers::{LayerKind, LayerSet, MapLayer};
use super::transform::ViewportTransform;
use crate::error::Result;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize)]
pub struct MapViewerState {
    pub transform: ViewportTransform,
    pub active_layer: LayerKind,
    pub marker_mode: bool,
    #[serde(skip)]
    pub layers: LayerSet,
    #[serde(skip)]
    pub last_error: Option<String>,
    #[serde(skip)]
    hovered_image_pos: Option<Pos2>,
    #[serde(skip)]
    last_viewport_size: Option<Vec2>,
}

impl MapViewerState {
    pub fn new() -> Self {
        Self {
            transform: ViewportTransform::new(),
            active_layer: LayerKind::Satellite,
            marker_mode: false,
            layers: LayerSet::new(),
            last_error: None,
            hovered_image_pos: None,
            last_viewport_size: None,
        }
    }

    pub fn open_layer(&mut self, kind: LayerKind, path: &Path) -> Result<()> {
        self.clear_error();

        let layer = MapLayer::from_path(path)?;
        let first_layer = !self.layers.any_loaded();
        self.layers.set(kind, layer);

        if first_layer {
            self.active_layer = kind;
        }
        if kind == self.active_layer {
            self.reset_view();
        }

        Ok(())
    }

    pub fn active_layer_size(&self) -> Option<Vec2> {
        self.layers.get(self.active_layer).map(MapLayer::size)
    }

    /// Layer switch re-centers at the current scale; the two layers may
    /// have different pixel dimensions.
    pub fn set_active_layer(&mut self, kind: LayerKind) {
        if self.active_layer == kind {
            return;
        }
        self.active_layer = kind;
        if let Some(layer_size) = self.active_layer_size() {
            self.transform.center_on(layer_size);
        }
    }

    /// Pushes the viewport dimensions for this frame; a size change
    /// re-centers the active layer without touching the scale.
    pub fn sync_viewport(&mut self, size: Vec2) {
        self.transform.set_viewport_size(size);

        if self.last_viewport_size != Some(size) {
            self.last_viewport_size = Some(size);
            if let Some(layer_size) = self.active_layer_size() {
                self.transform.center_on(layer_size);
            }
        }
    }

    pub fn reset_view(&mut self) {
        let layer_size = self.active_layer_size().unwrap_or(Vec2::ZERO);
        self.transform.reset(layer_size);
    }

    pub fn toggle_marker_mode(&mut self) {
        self.marker_mode = !self.marker_mode;
    }

    pub fn set_hovered_image_pos(&mut self, pos: Option<Pos2>) {
        self.hovered_image_pos = pos;
    }

    pub fn hovered_image_pos(&self) -> Option<Pos2> {
        self.hovered_image_pos
    }

    pub fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

impl Default for MapViewerState {
    fn default() -> Self {
        Self::new()
    }
}
