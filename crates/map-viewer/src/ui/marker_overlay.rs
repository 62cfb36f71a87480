use crate::constants::*;
use crate::marker::MarkerStore;
use crate::viewer::state::MapViewerState;
use eframe::egui;

pub fn render_marker_overlay(
    ui: &mut egui::Ui,
    state: &MapViewerState,
    markers: &MarkerStore,
    viewport_rect: egui::Rect,
) {
    let painter = ui.painter();

    for marker in markers.list() {
        let local = state.transform.image_to_screen(marker.position);
        let screen_pos = viewport_rect.min + local.to_vec2();

        if !viewport_rect.expand(MARKER_RADIUS * 2.0).contains(screen_pos) {
            continue;
        }

        let color = if marker.permanent {
            MARKER_COLOR_PERMANENT
        } else {
            MARKER_COLOR_EPHEMERAL
        };

        painter.circle_filled(screen_pos, MARKER_RADIUS, color);
        painter.circle_stroke(
            screen_pos,
            MARKER_RADIUS,
            egui::Stroke::new(MARKER_STROKE_WIDTH, egui::Color32::WHITE),
        );

        painter.text(
            screen_pos + egui::vec2(MARKER_RADIUS + 4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &marker.label,
            egui::FontId::proportional(10.0),
            MARKER_LABEL_COLOR,
        );
    }
}
