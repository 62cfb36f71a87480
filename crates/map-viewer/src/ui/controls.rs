use crate::constants::*;
use crate::viewer::layers::LayerKind;
use crate::viewer::state::MapViewerState;
use eframe::egui;
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

pub fn show_controls(
    ui: &mut egui::Ui,
    state: &mut MapViewerState,
    pending_layer: &mut Option<(LayerKind, PathBuf)>,
) {
    ui.horizontal(|ui| {
        for kind in [LayerKind::Satellite, LayerKind::Atlas] {
            if ui.button(format!("📂 Open {}", kind.display_name())).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Image", IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    *pending_layer = Some((kind, path));
                }
            }
        }

        ui.separator();

        for kind in [LayerKind::Satellite, LayerKind::Atlas] {
            let selected = state.active_layer == kind;
            let enabled = state.layers.is_loaded(kind);
            if ui
                .add_enabled(enabled, egui::SelectableLabel::new(selected, kind.display_name()))
                .clicked()
            {
                state.set_active_layer(kind);
            }
        }

        ui.separator();

        if ui.button("🔍-").clicked() {
            state.transform.zoom_at(-BUTTON_ZOOM_STEP, None);
        }

        let mut zoom_pct = (state.transform.scale * 100.0) as i32;
        if ui
            .add(
                egui::Slider::new(
                    &mut zoom_pct,
                    (MIN_SCALE * 100.0) as i32..=(MAX_SCALE * 100.0) as i32,
                )
                .text("%"),
            )
            .changed()
        {
            state.transform.set_scale(zoom_pct as f32 / 100.0);
        }

        if ui.button("🔍+").clicked() {
            state.transform.zoom_at(BUTTON_ZOOM_STEP, None);
        }

        if ui.button("Reset View").clicked() {
            state.reset_view();
        }

        ui.separator();

        let marker_button_text = if state.marker_mode {
            "📍 Cancel Marker"
        } else {
            "📍 Place Marker"
        };

        if ui.button(marker_button_text).clicked() {
            state.toggle_marker_mode();
        }
    });
}
