use crate::error::{MapError, Result};
use egui::{ColorImage, TextureHandle, TextureOptions, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Satellite,
    Atlas,
}

impl LayerKind {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Satellite => "Satellite",
            Self::Atlas => "Atlas",
        }
    }

    pub fn texture_name(self) -> &'static str {
        match self {
            Self::Satellite => "satellite_layer",
            Self::Atlas => "atlas_layer",
        }
    }
}

/// One decoded image layer plus its lazily uploaded GPU texture.
pub struct MapLayer {
    image: Arc<ColorImage>,
    size: Vec2,
    texture: Option<TextureHandle>,
}

impl MapLayer {
    pub fn new(image: ColorImage) -> Self {
        let size = Vec2::new(image.size[0] as f32, image.size[1] as f32);
        Self {
            image: Arc::new(image),
            size,
            texture: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .map_err(|e| MapError::ImageLoad(e.to_string()))?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        let image = ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            decoded.as_raw(),
        );

        Ok(Self::new(image))
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn texture(&mut self, ctx: &egui::Context, name: &str) -> &TextureHandle {
        self.texture
            .get_or_insert_with(|| ctx.load_texture(name, self.image.clone(), TextureOptions::LINEAR))
    }
}

#[derive(Default)]
pub struct LayerSet {
    satellite: Option<MapLayer>,
    atlas: Option<MapLayer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: LayerKind) -> Option<&MapLayer> {
        match kind {
            LayerKind::Satellite => self.satellite.as_ref(),
            LayerKind::Atlas => self.atlas.as_ref(),
        }
    }

    pub fn get_mut(&mut self, kind: LayerKind) -> Option<&mut MapLayer> {
        match kind {
            LayerKind::Satellite => self.satellite.as_mut(),
            LayerKind::Atlas => self.atlas.as_mut(),
        }
    }

    pub fn set(&mut self, kind: LayerKind, layer: MapLayer) {
        match kind {
            LayerKind::Satellite => self.satellite = Some(layer),
            LayerKind::Atlas => self.atlas = Some(layer),
        }
    }

    pub fn is_loaded(&self, kind: LayerKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn any_loaded(&self) -> bool {
        self.satellite.is_some() || self.atlas.is_some()
    }
}
