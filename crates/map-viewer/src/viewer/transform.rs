use crate::constants::*;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanGesture {
    start_offset: Vec2,
    start_pointer: Pos2,
}

/// Affine mapping between image space and viewport-local screen space:
/// `screen = offset + image * scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f32,
    pub offset: Vec2,
    viewport_size: Vec2,
    default_scale: f32,
    #[serde(skip)]
    gesture: Option<PanGesture>,
}

impl ViewportTransform {
    pub fn new() -> Self {
        Self::with_default_scale(DEFAULT_SCALE)
    }

    pub fn with_default_scale(default_scale: f32) -> Self {
        let default_scale = default_scale.clamp(MIN_SCALE, MAX_SCALE);
        Self {
            scale: default_scale,
            offset: Vec2::ZERO,
            viewport_size: Vec2::ZERO,
            default_scale,
            gesture: None,
        }
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }

    pub fn image_to_screen(&self, p: Pos2) -> Pos2 {
        (self.offset + p.to_vec2() * self.scale).to_pos2()
    }

    pub fn screen_to_image(&self, p: Pos2) -> Pos2 {
        ((p.to_vec2() - self.offset) / self.scale).to_pos2()
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn begin_pan(&mut self, pointer: Pos2) {
        self.gesture = Some(PanGesture {
            start_offset: self.offset,
            start_pointer: pointer,
        });
    }

    /// Recomputes the offset from the fixed gesture start rather than
    /// accumulating per-event deltas, so a long drag cannot drift.
    pub fn pan_to(&mut self, pointer: Pos2) {
        if let Some(gesture) = self.gesture {
            self.offset = gesture.start_offset + (pointer - gesture.start_pointer);
        }
    }

    pub fn end_pan(&mut self) {
        self.gesture = None;
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_some()
    }

    /// Zooms by `delta`, keeping `anchor` (viewport center when `None`)
    /// visually stationary.
    pub fn zoom_at(&mut self, delta: f32, anchor: Option<Pos2>) {
        let new_scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);

        if (new_scale - self.scale).abs() < SCALE_EPSILON {
            return;
        }

        let anchor = anchor.unwrap_or_else(|| (self.viewport_size * 0.5).to_pos2());
        let ratio = new_scale / self.scale;

        self.offset = anchor.to_vec2() - (anchor.to_vec2() - self.offset) * ratio;
        self.scale = new_scale;
    }

    pub fn set_scale(&mut self, scale: f32) {
        let target = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.zoom_at(target - self.scale, None);
    }

    pub fn center_on(&mut self, layer_size: Vec2) {
        self.offset = (self.viewport_size - layer_size * self.scale) * 0.5;
    }

    pub fn reset(&mut self, layer_size: Vec2) {
        self.scale = self.default_scale;
        self.center_on(layer_size);
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    const TOLERANCE: f32 = 1e-3;

    fn assert_pos_eq(a: Pos2, b: Pos2) {
        assert!(
            (a - b).length() < TOLERANCE,
            "positions differ: {:?} vs {:?}",
            a,
            b
        );
    }

    fn assert_vec_eq(a: Vec2, b: Vec2) {
        assert!(
            (a - b).length() < TOLERANCE,
            "vectors differ: {:?} vs {:?}",
            a,
            b
        );
    }

    fn unit_transform() -> ViewportTransform {
        let mut t = ViewportTransform::with_default_scale(1.0);
        t.set_viewport_size(vec2(800.0, 600.0));
        t
    }

    #[test]
    fn test_new_uses_default_scale() {
        let t = ViewportTransform::new();
        assert_eq!(t.scale, DEFAULT_SCALE);
        assert_eq!(t.offset, Vec2::ZERO);
    }

    #[test]
    fn test_default_scale_is_clamped() {
        let t = ViewportTransform::with_default_scale(10.0);
        assert_eq!(t.scale, MAX_SCALE);
        let t = ViewportTransform::with_default_scale(0.0);
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn test_image_to_screen() {
        let mut t = unit_transform();
        t.offset = vec2(10.0, 20.0);
        t.scale = 2.0;
        assert_pos_eq(t.image_to_screen(pos2(5.0, 5.0)), pos2(20.0, 30.0));
    }

    #[test]
    fn test_screen_to_image_round_trip() {
        let mut t = unit_transform();
        t.offset = vec2(-123.4, 56.7);
        t.zoom_at(1.5, Some(pos2(40.0, 40.0)));

        for p in [
            pos2(0.0, 0.0),
            pos2(2372.0, 3791.0),
            pos2(-50.0, 1000.5),
            pos2(799.0, 599.0),
        ] {
            assert_pos_eq(t.screen_to_image(t.image_to_screen(p)), p);
        }
    }

    #[test]
    fn test_scale_stays_in_bounds() {
        let mut t = unit_transform();
        for _ in 0..100 {
            t.zoom_at(0.15, None);
            assert!(t.scale >= MIN_SCALE && t.scale <= MAX_SCALE);
        }
        assert_eq!(t.scale, MAX_SCALE);
        for _ in 0..100 {
            t.zoom_at(-0.15, None);
            assert!(t.scale >= MIN_SCALE && t.scale <= MAX_SCALE);
        }
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn test_set_scale_clamps() {
        let mut t = unit_transform();
        t.set_scale(100.0);
        assert_eq!(t.scale, MAX_SCALE);
        t.set_scale(-3.0);
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn test_zoom_at_doubles_scale_around_anchor() {
        let mut t = unit_transform();
        t.zoom_at(1.0, Some(pos2(100.0, 100.0)));
        assert_eq!(t.scale, 2.0);
        assert_vec_eq(t.offset, vec2(-100.0, -100.0));
    }

    #[test]
    fn test_zoom_anchor_stays_stationary() {
        let mut t = unit_transform();
        t.offset = vec2(37.0, -12.0);

        let anchor = pos2(250.0, 130.0);
        let image_under_anchor = t.screen_to_image(anchor);

        t.zoom_at(0.7, Some(anchor));
        assert_pos_eq(t.image_to_screen(image_under_anchor), anchor);

        t.zoom_at(-1.3, Some(anchor));
        assert_pos_eq(t.image_to_screen(image_under_anchor), anchor);
    }

    #[test]
    fn test_zoom_saturated_is_noop() {
        let mut t = unit_transform();
        t.set_scale(MAX_SCALE);
        let offset_before = t.offset;
        t.zoom_at(0.5, Some(pos2(100.0, 100.0)));
        assert_eq!(t.scale, MAX_SCALE);
        assert_eq!(t.offset, offset_before);
    }

    #[test]
    fn test_zoom_defaults_to_viewport_center() {
        let mut a = unit_transform();
        let mut b = unit_transform();
        a.zoom_at(0.5, None);
        b.zoom_at(0.5, Some(pos2(400.0, 300.0)));
        assert_vec_eq(a.offset, b.offset);
        assert_eq!(a.scale, b.scale);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut t = unit_transform();
        t.pan(vec2(10.0, -5.0));
        t.pan(vec2(-3.0, 8.0));
        assert_vec_eq(t.offset, vec2(7.0, 3.0));
    }

    #[test]
    fn test_pan_gesture_recomputes_from_start() {
        let mut t = unit_transform();
        t.offset = vec2(100.0, 100.0);

        t.begin_pan(pos2(400.0, 300.0));
        assert!(t.is_panning());

        // Many intermediate moves must land exactly where one jump would.
        for i in 0..50 {
            t.pan_to(pos2(400.0 + i as f32, 300.0 - i as f32));
        }
        t.pan_to(pos2(420.0, 310.0));
        assert_vec_eq(t.offset, vec2(120.0, 110.0));

        t.end_pan();
        assert!(!t.is_panning());
    }

    #[test]
    fn test_pan_to_ignored_while_idle() {
        let mut t = unit_transform();
        let offset_before = t.offset;
        t.pan_to(pos2(500.0, 500.0));
        assert_eq!(t.offset, offset_before);
    }

    #[test]
    fn test_center_on_scenario() {
        let mut t = ViewportTransform::with_default_scale(0.5);
        t.set_viewport_size(vec2(800.0, 600.0));
        t.center_on(vec2(4000.0, 3000.0));
        assert_vec_eq(t.offset, vec2(-600.0, -450.0));
    }

    #[test]
    fn test_center_on_is_idempotent() {
        let mut t = unit_transform();
        t.set_scale(2.0);
        t.center_on(vec2(1000.0, 500.0));
        let offset_once = t.offset;
        t.center_on(vec2(1000.0, 500.0));
        assert_eq!(t.offset, offset_once);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut t = unit_transform();
        t.zoom_at(1.7, Some(pos2(13.0, 13.0)));
        t.pan(vec2(99.0, -99.0));

        let layer = vec2(4000.0, 3000.0);
        t.reset(layer);
        let (scale_once, offset_once) = (t.scale, t.offset);
        t.reset(layer);
        assert_eq!(t.scale, scale_once);
        assert_eq!(t.offset, offset_once);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn test_reset_recenters() {
        let mut t = ViewportTransform::new();
        t.set_viewport_size(vec2(800.0, 600.0));
        t.zoom_at(3.0, None);
        t.reset(vec2(4000.0, 3000.0));
        assert_eq!(t.scale, DEFAULT_SCALE);
        assert_vec_eq(t.offset, vec2(-600.0, -450.0));
    }

    #[test]
    fn test_resize_recenter_keeps_scale() {
        let mut t = unit_transform();
        t.set_scale(2.5);
        t.set_viewport_size(vec2(1024.0, 768.0));
        t.center_on(vec2(400.0, 400.0));
        assert_eq!(t.scale, 2.5);
        assert_vec_eq(t.offset, vec2(12.0, -116.0));
    }
}
