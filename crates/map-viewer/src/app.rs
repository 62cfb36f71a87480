use crate::widget::MapViewerWidget;
use eframe::egui;

pub struct MapViewerApp {
    widget: MapViewerWidget,
}

impl MapViewerApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for MapViewerApp {
    fn default() -> Self {
        Self {
            widget: MapViewerWidget::new(),
        }
    }
}

impl eframe::App for MapViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.show(ctx);
    }
}
