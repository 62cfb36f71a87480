use egui::Pos2;
use serde::{Deserialize, Serialize};

pub type MarkerId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Assigned only to ephemeral markers; permanent markers carry no id
    /// and can never be removed through the store.
    pub id: Option<MarkerId>,
    /// Image-space position, so the marker stays anchored under pan/zoom.
    pub position: Pos2,
    pub label: String,
    pub permanent: bool,
}

impl Marker {
    pub fn permanent(position: Pos2, label: String) -> Self {
        Self {
            id: None,
            position,
            label,
            permanent: true,
        }
    }

    pub fn ephemeral(id: MarkerId, position: Pos2, label: String) -> Self {
        Self {
            id: Some(id),
            position,
            label,
            permanent: false,
        }
    }
}
