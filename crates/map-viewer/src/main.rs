use eframe::egui;
use map_viewer::app::MapViewerApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_title("Map Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Map Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(MapViewerApp::default()))),
    )
}
