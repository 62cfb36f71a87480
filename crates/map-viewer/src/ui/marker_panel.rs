use crate::marker::manifest::{self, MarkerEntry};
use crate::marker::{Marker, MarkerStore};
use crate::viewer::state::MapViewerState;
use eframe::egui;
use std::path::PathBuf;

pub struct MarkerPanel {
    pub pending_manifest_load: Option<PathBuf>,
    pub pending_manifest_save: Option<PathBuf>,
    pub last_error: Option<String>,
    pending_placement: Option<egui::Pos2>,
    label_input: String,
}

impl Default for MarkerPanel {
    fn default() -> Self {
        Self {
            pending_manifest_load: None,
            pending_manifest_save: None,
            last_error: None,
            pending_placement: None,
            label_input: String::new(),
        }
    }
}

impl MarkerPanel {
    /// Called by the canvas when a marker-mode click lands; `image_pos`
    /// is already converted to image space.
    pub fn begin_placement(&mut self, image_pos: egui::Pos2) {
        self.pending_placement = Some(image_pos);
        self.label_input.clear();
    }

    pub fn placement_pending(&self) -> bool {
        self.pending_placement.is_some()
    }
}

pub fn show_marker_panel(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    state: &mut MapViewerState,
    markers: &mut MarkerStore,
    panel: &mut MarkerPanel,
) {
    ui.heading("Markers");

    show_manifest_section(ui, panel);

    ui.separator();

    if let Some(error) = &panel.last_error {
        ui.colored_label(egui::Color32::RED, error);
        ui.separator();
    }

    show_marker_list(ctx, ui, markers, panel);

    show_placement_window(ctx, state, markers, panel);
}

fn show_manifest_section(ui: &mut egui::Ui, panel: &mut MarkerPanel) {
    ui.horizontal(|ui| {
        if ui.button("📂 Load").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                panel.pending_manifest_load = Some(path);
            }
        }

        if ui.button("💾 Save").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("markers.json")
                .save_file()
            {
                panel.pending_manifest_save = Some(path);
            }
        }
    });
}

fn show_marker_list(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    markers: &mut MarkerStore,
    panel: &mut MarkerPanel,
) {
    if markers.is_empty() {
        ui.label("No markers yet");
        return;
    }

    let mut remove_id = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for marker in markers.list() {
            ui.horizontal(|ui| {
                let icon = if marker.permanent { "🔒" } else { "📍" };
                ui.label(icon);
                ui.label(&marker.label);
                ui.weak(format!(
                    "({:.0}, {:.0})",
                    marker.position.x, marker.position.y
                ));

                if ui.small_button("📋").clicked() {
                    ctx.copy_text(coord_snippet(marker));
                }

                if let Some(id) = marker.id {
                    if ui.small_button("🗑").clicked() {
                        remove_id = Some(id);
                    }
                }
            });
        }
    });

    if let Some(id) = remove_id {
        match markers.remove(id) {
            Ok(()) => panel.last_error = None,
            Err(e) => panel.last_error = Some(e.to_string()),
        }
    }
}

fn show_placement_window(
    ctx: &egui::Context,
    state: &mut MapViewerState,
    markers: &mut MarkerStore,
    panel: &mut MarkerPanel,
) {
    let Some(image_pos) = panel.pending_placement else {
        return;
    };

    let mut place = false;
    let mut cancel = false;

    egui::Window::new("New Marker")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "Position: ({:.0}, {:.0})",
                image_pos.x, image_pos.y
            ));

            ui.horizontal(|ui| {
                ui.label("Label:");
                let response = ui.text_edit_singleline(&mut panel.label_input);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    place = true;
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Place").clicked() {
                    place = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        panel.pending_placement = None;
        panel.label_input.clear();
        return;
    }

    if place {
        let label = panel.label_input.trim().to_string();
        match markers.place_ephemeral(image_pos, label) {
            Ok(id) => {
                if let Some(marker) = markers.get(id) {
                    ctx.copy_text(coord_snippet(marker));
                }
                panel.last_error = None;
                panel.pending_placement = None;
                panel.label_input.clear();
                // Marker mode disarms after each placement.
                state.marker_mode = false;
            }
            Err(e) => panel.last_error = Some(e.to_string()),
        }
    }
}

fn coord_snippet(marker: &Marker) -> String {
    manifest::entry_snippet(&MarkerEntry::from(marker))
}
