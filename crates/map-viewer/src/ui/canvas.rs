use crate::constants::*;
use crate::marker::MarkerStore;
use crate::ui::marker_overlay;
use crate::ui::marker_panel::MarkerPanel;
use crate::viewer::state::MapViewerState;
use eframe::egui;

pub fn show_canvas(
    ui: &mut egui::Ui,
    state: &mut MapViewerState,
    markers: &mut MarkerStore,
    marker_panel: &mut MarkerPanel,
) {
    let viewport_rect = ui.available_rect_before_wrap();
    state.sync_viewport(viewport_rect.size());

    if !state.layers.is_loaded(state.active_layer) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.label("Open a satellite or atlas image to view");
        });
        return;
    }

    let response = ui.allocate_rect(viewport_rect, egui::Sense::click_and_drag());

    handle_pointer(state, markers, marker_panel, &response, viewport_rect);
    if response.hovered() {
        handle_wheel_input(ui, state, viewport_rect);
    }
    handle_keyboard_shortcuts(ui, state);
    update_cursor_icon(ui, state);

    track_hovered_position(state, &response, viewport_rect);

    render_active_layer(ui, state, viewport_rect);

    marker_overlay::render_marker_overlay(ui, state, markers, viewport_rect);
}

fn to_viewport(pos: egui::Pos2, viewport_rect: egui::Rect) -> egui::Pos2 {
    (pos - viewport_rect.min).to_pos2()
}

fn handle_pointer(
    state: &mut MapViewerState,
    markers: &mut MarkerStore,
    marker_panel: &mut MarkerPanel,
    response: &egui::Response,
    viewport_rect: egui::Rect,
) {
    if state.marker_mode {
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            let image_pos = state
                .transform
                .screen_to_image(to_viewport(pos, viewport_rect));
            marker_panel.begin_placement(image_pos);
        }
        return;
    }

    if response.drag_started()
        && let Some(pos) = response.interact_pointer_pos()
    {
        state.transform.begin_pan(to_viewport(pos, viewport_rect));
    }

    if response.dragged()
        && let Some(pos) = response.interact_pointer_pos()
    {
        state.transform.pan_to(to_viewport(pos, viewport_rect));
    }

    if response.drag_stopped() {
        state.transform.end_pan();
    }

    if response.secondary_clicked()
        && let Some(pos) = response.interact_pointer_pos()
    {
        let image_pos = state
            .transform
            .screen_to_image(to_viewport(pos, viewport_rect));
        let hit_radius = MARKER_HIT_RADIUS / state.transform.scale;
        if let Some(id) = markers.ephemeral_at(image_pos, hit_radius) {
            match markers.remove(id) {
                Ok(()) => marker_panel.last_error = None,
                Err(e) => marker_panel.last_error = Some(e.to_string()),
            }
        }
    }
}

fn handle_wheel_input(ui: &mut egui::Ui, state: &mut MapViewerState, viewport_rect: egui::Rect) {
    ui.input(|i| {
        let scroll_delta = i.raw_scroll_delta;

        if scroll_delta.y.abs() < 0.1 {
            return;
        }

        // Wheel up zooms in, anchored under the pointer.
        let delta = if scroll_delta.y > 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            -WHEEL_ZOOM_STEP
        };

        let anchor = i
            .pointer
            .hover_pos()
            .filter(|pos| viewport_rect.contains(*pos))
            .map(|pos| to_viewport(pos, viewport_rect));

        state.transform.zoom_at(delta, anchor);
    });
}

fn handle_keyboard_shortcuts(ui: &mut egui::Ui, state: &mut MapViewerState) {
    ui.input_mut(|i| {
        if i.consume_key(egui::Modifiers::CTRL, egui::Key::Plus)
            || i.consume_key(egui::Modifiers::CTRL, egui::Key::Equals)
        {
            state.transform.zoom_at(BUTTON_ZOOM_STEP, None);
        }

        if i.consume_key(egui::Modifiers::CTRL, egui::Key::Minus) {
            state.transform.zoom_at(-BUTTON_ZOOM_STEP, None);
        }

        if i.consume_key(egui::Modifiers::CTRL, egui::Key::Num0) {
            state.reset_view();
        }

        let mut pan_delta = egui::Vec2::ZERO;
        if i.key_pressed(egui::Key::ArrowLeft) {
            pan_delta.x += KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            pan_delta.x -= KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowUp) {
            pan_delta.y += KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowDown) {
            pan_delta.y -= KEYBOARD_PAN_STEP;
        }

        if pan_delta != egui::Vec2::ZERO {
            state.transform.pan(pan_delta);
        }
    });
}

fn update_cursor_icon(ui: &mut egui::Ui, state: &MapViewerState) {
    if state.marker_mode {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    } else if state.transform.is_panning() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
}

fn track_hovered_position(
    state: &mut MapViewerState,
    response: &egui::Response,
    viewport_rect: egui::Rect,
) {
    let hovered = response.hover_pos().map(|pos| {
        state
            .transform
            .screen_to_image(to_viewport(pos, viewport_rect))
    });
    state.set_hovered_image_pos(hovered);
}

fn render_active_layer(ui: &mut egui::Ui, state: &mut MapViewerState, viewport_rect: egui::Rect) {
    let scale = state.transform.scale;
    let offset = state.transform.offset;
    let kind = state.active_layer;

    let Some(layer) = state.layers.get_mut(kind) else {
        return;
    };

    let scaled_size = layer.size() * scale;
    let texture = layer.texture(ui.ctx(), kind.texture_name()).clone();

    let image_rect = egui::Rect::from_min_size(viewport_rect.min + offset, scaled_size);

    ui.set_clip_rect(viewport_rect);

    let image_widget = egui::Image::new(&texture).fit_to_exact_size(scaled_size);

    ui.put(image_rect, image_widget);
}
