use crate::error::Result;
use crate::marker::MarkerStore;
use crate::ui::marker_panel::MarkerPanel;
use crate::ui::viewer_panel::MapViewerPanel;
use crate::viewer::layers::LayerKind;
use crate::viewer::state::MapViewerState;
use eframe::egui;
use std::path::Path;

pub struct MapViewerWidget {
    viewer_state: MapViewerState,
    markers: MarkerStore,
    viewer_panel: MapViewerPanel,
    marker_panel: MarkerPanel,
}

impl MapViewerWidget {
    pub fn new() -> Self {
        Self {
            viewer_state: MapViewerState::default(),
            markers: MarkerStore::default(),
            viewer_panel: MapViewerPanel::new(),
            marker_panel: MarkerPanel::default(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.viewer_panel.show(
            ctx,
            &mut self.viewer_state,
            &mut self.markers,
            &mut self.marker_panel,
        );
    }

    pub fn state(&self) -> &MapViewerState {
        &self.viewer_state
    }

    pub fn state_mut(&mut self) -> &mut MapViewerState {
        &mut self.viewer_state
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut MarkerStore {
        &mut self.markers
    }

    pub fn open_layer(&mut self, kind: LayerKind, path: &Path) -> Result<()> {
        self.viewer_state.open_layer(kind, path)
    }
}

impl Default for MapViewerWidget {
    fn default() -> Self {
        Self::new()
    }
}
