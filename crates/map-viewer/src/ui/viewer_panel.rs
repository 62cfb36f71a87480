use super::{canvas, controls, marker_panel};
use crate::marker::manifest;
use crate::marker::MarkerStore;
use crate::ui::marker_panel::MarkerPanel;
use crate::viewer::layers::LayerKind;
use crate::viewer::state::MapViewerState;
use eframe::egui;
use std::path::PathBuf;

pub struct MapViewerPanel {
    show_controls: bool,
    pending_layer: Option<(LayerKind, PathBuf)>,
}

impl MapViewerPanel {
    pub fn new() -> Self {
        Self {
            show_controls: true,
            pending_layer: None,
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        state: &mut MapViewerState,
        markers: &mut MarkerStore,
        panel: &mut MarkerPanel,
    ) {
        egui::SidePanel::left("marker_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                marker_panel::show_marker_panel(ctx, ui, state, markers, panel);
            });

        if let Some((kind, path)) = self.pending_layer.take() {
            match state.open_layer(kind, &path) {
                Ok(()) => eprintln!("Loaded {} layer: {:?}", kind.display_name(), path),
                Err(e) => {
                    eprintln!("Failed to load {} layer: {}", kind.display_name(), e);
                    state.set_error(e.to_string());
                }
            }
        }

        if let Some(path) = panel.pending_manifest_load.take() {
            match manifest::load_manifest(&path)
                .and_then(|m| manifest::seed_store(markers, &m))
            {
                Ok(count) => {
                    eprintln!("Seeded {} markers from {:?}", count, path);
                    panel.last_error = None;
                }
                Err(e) => panel.last_error = Some(e.to_string()),
            }
        }

        if let Some(path) = panel.pending_manifest_save.take() {
            let name = path
                .file_stem()
                .map_or_else(|| "markers".to_string(), |s| s.to_string_lossy().into_owned());
            let snapshot = manifest::manifest_from_store(name, markers);
            match manifest::save_manifest(&snapshot, &path) {
                Ok(()) => {
                    eprintln!("Saved {} markers to {:?}", snapshot.markers.len(), path);
                    panel.last_error = None;
                }
                Err(e) => panel.last_error = Some(e.to_string()),
            }
        }

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            display_status(ui, state, markers);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.show_controls {
                controls::show_controls(ui, state, &mut self.pending_layer);
                ui.separator();
            }

            canvas::show_canvas(ui, state, markers, panel);
        });
    }

    pub fn toggle_controls(&mut self) {
        self.show_controls = !self.show_controls;
    }
}

impl Default for MapViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn display_status(ui: &mut egui::Ui, state: &MapViewerState, markers: &MarkerStore) {
    ui.horizontal(|ui| {
        let transform = &state.transform;
        let layer_info = state.active_layer_size().map_or_else(
            || "not loaded".to_string(),
            |size| format!("{}x{}", size.x as u32, size.y as u32),
        );
        let pointer_info = state.hovered_image_pos().map_or_else(
            || "-".to_string(),
            |pos| format!("({:.0}, {:.0})", pos.x, pos.y),
        );

        ui.label(format!(
            "{} {} | Zoom: {:.0}% | Offset: ({:.0}, {:.0}) | Pointer: {} | Markers: {}",
            state.active_layer.display_name(),
            layer_info,
            transform.scale * 100.0,
            transform.offset.x,
            transform.offset.y,
            pointer_info,
            markers.len()
        ));

        if let Some(error) = &state.last_error {
            ui.separator();
            ui.colored_label(egui::Color32::RED, error);
        }
    });
}
