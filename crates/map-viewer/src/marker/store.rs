use crate::error::{MapError, Result};
use crate::marker::types::{Marker, MarkerId};
use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Insertion-ordered marker collection. Ephemeral ids start at 1 and are
/// never reused, even after removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    next_id: MarkerId,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_permanent(&mut self, position: Pos2, label: String) -> Result<()> {
        if label.trim().is_empty() {
            return Err(MapError::InvalidLabel);
        }
        self.markers.push(Marker::permanent(position, label));
        Ok(())
    }

    pub fn place_ephemeral(&mut self, position: Pos2, label: String) -> Result<MarkerId> {
        if label.trim().is_empty() {
            return Err(MapError::InvalidLabel);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.markers.push(Marker::ephemeral(id, position, label));
        Ok(id)
    }

    pub fn remove(&mut self, id: MarkerId) -> Result<()> {
        let index = self
            .markers
            .iter()
            .position(|m| m.id == Some(id))
            .ok_or(MapError::MarkerNotFound(id))?;
        self.markers.remove(index);
        Ok(())
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == Some(id))
    }

    pub fn list(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Nearest ephemeral marker within `radius` of `position`, both in
    /// image space. Used for right-click removal.
    pub fn ephemeral_at(&self, position: Pos2, radius: f32) -> Option<MarkerId> {
        self.markers
            .iter()
            .filter(|m| !m.permanent)
            .map(|m| (m, (m.position - position).length()))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .and_then(|(m, _)| m.id)
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut store = MarkerStore::new();
        let a = store.place_ephemeral(pos2(1.0, 1.0), "A".into()).unwrap();
        let b = store.place_ephemeral(pos2(2.0, 2.0), "B".into()).unwrap();
        let c = store.place_ephemeral(pos2(3.0, 3.0), "C".into()).unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut store = MarkerStore::new();
        store.place_ephemeral(pos2(1.0, 1.0), "A".into()).unwrap();
        store.place_ephemeral(pos2(2.0, 2.0), "B".into()).unwrap();
        store.place_ephemeral(pos2(3.0, 3.0), "C".into()).unwrap();

        store.remove(2).unwrap();

        let d = store.place_ephemeral(pos2(4.0, 4.0), "D".into()).unwrap();
        assert_eq!(d, 4);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_label_rejected() {
        let mut store = MarkerStore::new();
        let result = store.place_ephemeral(pos2(10.0, 20.0), "".into());
        assert!(matches!(result, Err(MapError::InvalidLabel)));
        assert!(store.is_empty());

        let result = store.place_ephemeral(pos2(10.0, 20.0), "   ".into());
        assert!(matches!(result, Err(MapError::InvalidLabel)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_label_rejected_for_permanent() {
        let mut store = MarkerStore::new();
        let result = store.add_permanent(pos2(0.0, 0.0), "".into());
        assert!(matches!(result, Err(MapError::InvalidLabel)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let mut store = MarkerStore::new();
        let result = store.remove(999);
        assert!(matches!(result, Err(MapError::MarkerNotFound(999))));
    }

    #[test]
    fn test_permanent_markers_are_not_removable() {
        let mut store = MarkerStore::new();
        store
            .add_permanent(pos2(2372.0, 3791.0), "Depot North".into())
            .unwrap();

        // Permanent markers carry no id, so no id can reach them.
        assert!(store.remove(1).is_err());
        assert_eq!(store.len(), 1);
        assert!(store.list()[0].permanent);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = MarkerStore::new();
        store.add_permanent(pos2(1.0, 1.0), "P1".into()).unwrap();
        store.place_ephemeral(pos2(2.0, 2.0), "E1".into()).unwrap();
        store.add_permanent(pos2(3.0, 3.0), "P2".into()).unwrap();
        store.place_ephemeral(pos2(4.0, 4.0), "E2".into()).unwrap();

        let labels: Vec<&str> = store.list().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["P1", "E1", "P2", "E2"]);
    }

    #[test]
    fn test_get_finds_ephemeral_only() {
        let mut store = MarkerStore::new();
        store.add_permanent(pos2(1.0, 1.0), "P".into()).unwrap();
        let id = store.place_ephemeral(pos2(2.0, 2.0), "E".into()).unwrap();

        assert_eq!(store.get(id).map(|m| m.label.as_str()), Some("E"));
        assert!(store.get(id + 1).is_none());
    }

    #[test]
    fn test_ephemeral_at_picks_nearest_within_radius() {
        let mut store = MarkerStore::new();
        store.add_permanent(pos2(0.0, 0.0), "P".into()).unwrap();
        let near = store.place_ephemeral(pos2(1.0, 1.0), "near".into()).unwrap();
        store.place_ephemeral(pos2(8.0, 8.0), "far".into()).unwrap();

        assert_eq!(store.ephemeral_at(pos2(0.0, 0.0), 5.0), Some(near));
        assert_eq!(store.ephemeral_at(pos2(100.0, 100.0), 5.0), None);
    }

    #[test]
    fn test_ephemeral_at_ignores_permanent() {
        let mut store = MarkerStore::new();
        store.add_permanent(pos2(0.0, 0.0), "P".into()).unwrap();
        assert_eq!(store.ephemeral_at(pos2(0.0, 0.0), 10.0), None);
    }
}
