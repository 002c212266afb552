//! In-memory working copy of the open task's annotations.
//!
//! The store is seeded when a task is opened and explicitly synced back on
//! save or navigation, never auto-saved. Dirty state is computed by deep
//! comparison against the last-loaded snapshot rather than a mutation
//! counter, so net-zero edit sequences do not raise false "unsaved
//! changes" warnings or trigger needless writes.

use crate::model::CanvasAnnotation;

/// Ordered annotation list plus free-text notes for the open task.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<CanvasAnnotation>,
    notes: String,
    snapshot: Snapshot,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Snapshot {
    annotations: Vec<CanvasAnnotation>,
    notes: String,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working state and reset the dirty baseline to a deep
    /// copy of the input. Called when opening a task.
    pub fn load(&mut self, annotations: Vec<CanvasAnnotation>, notes: impl Into<String>) {
        let notes = notes.into();
        self.snapshot = Snapshot {
            annotations: annotations.clone(),
            notes: notes.clone(),
        };
        self.annotations = annotations;
        self.notes = notes;
    }

    /// Append a freshly hand-drawn box and return a reference to it.
    pub fn add(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        category: impl Into<String>,
    ) -> &CanvasAnnotation {
        self.annotations
            .push(CanvasAnnotation::manual(x, y, width, height, category));
        self.annotations.last().unwrap()
    }

    /// Replace an annotation's category. Editing is an implicit
    /// confirmation, so this also marks the box verified. A stale id is
    /// benign concurrent-edit noise and is ignored.
    pub fn update_category(&mut self, id: &str, category: impl Into<String>) {
        match self.annotations.iter_mut().find(|a| a.id == id) {
            Some(ann) => {
                ann.category = category.into();
                ann.verified = true;
            }
            None => log::debug!("update_category: stale annotation id {id}, ignoring"),
        }
    }

    /// Mark an annotation verified without changing its category.
    pub fn verify(&mut self, id: &str) {
        match self.annotations.iter_mut().find(|a| a.id == id) {
            Some(ann) => ann.verified = true,
            None => log::debug!("verify: stale annotation id {id}, ignoring"),
        }
    }

    /// Remove an annotation. No-op for a stale id.
    pub fn remove(&mut self, id: &str) {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            log::debug!("remove: stale annotation id {id}, ignoring");
        }
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn annotations(&self) -> &[CanvasAnnotation] {
        &self.annotations
    }

    pub fn get(&self, id: &str) -> Option<&CanvasAnnotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Whether the working state differs from the last-loaded or
    /// last-saved baseline (annotations or notes).
    pub fn is_dirty(&self) -> bool {
        self.annotations != self.snapshot.annotations || self.notes != self.snapshot.notes
    }

    /// Reset the dirty baseline to the current state after a successful
    /// save.
    pub fn mark_saved(&mut self) {
        self.snapshot = Snapshot {
            annotations: self.annotations.clone(),
            notes: self.notes.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> AnnotationStore {
        let mut store = AnnotationStore::new();
        store.load(
            vec![CanvasAnnotation {
                id: "srv-1".into(),
                x: 10.0,
                y: 10.0,
                width: 20.0,
                height: 20.0,
                category: "laptop".into(),
                confidence: Some(0.8),
                ai_generated: true,
                verified: false,
            }],
            "",
        );
        store
    }

    #[test]
    fn test_clean_after_load() {
        let store = seeded_store();
        assert!(!store.is_dirty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_marks_dirty_and_sets_provenance() {
        let mut store = seeded_store();
        let id = store.add(5.0, 5.0, 10.0, 10.0, "battery").id.clone();
        assert!(store.is_dirty());
        let ann = store.get(&id).unwrap();
        assert!(!ann.ai_generated);
        assert!(ann.verified);
    }

    #[test]
    fn test_update_category_always_verifies() {
        let mut store = seeded_store();
        store.update_category("srv-1", "smartphone");
        let ann = store.get("srv-1").unwrap();
        assert_eq!(ann.category, "smartphone");
        assert!(ann.verified);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_verify_leaves_category_untouched() {
        let mut store = seeded_store();
        store.verify("srv-1");
        let ann = store.get("srv-1").unwrap();
        assert!(ann.verified);
        assert_eq!(ann.category, "laptop");
    }

    #[test]
    fn test_stale_ids_are_silent_noops() {
        let mut store = seeded_store();
        store.update_category("gone", "mouse");
        store.verify("gone");
        store.remove("gone");
        assert_eq!(store.len(), 1);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_remove() {
        let mut store = seeded_store();
        store.remove("srv-1");
        assert!(store.is_empty());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_net_zero_edits_are_clean() {
        let mut store = seeded_store();
        let id = store.add(5.0, 5.0, 10.0, 10.0, "battery").id.clone();
        store.remove(&id);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_notes_participate_in_dirty_tracking() {
        let mut store = seeded_store();
        store.set_notes("blurry image");
        assert!(store.is_dirty());
        store.set_notes("");
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_mark_saved_resets_baseline() {
        let mut store = seeded_store();
        store.add(5.0, 5.0, 10.0, 10.0, "battery");
        store.mark_saved();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_reload_with_saved_data_is_clean() {
        let mut store = seeded_store();
        store.update_category("srv-1", "tablet");
        let saved = store.annotations().to_vec();
        store.load(saved, "");
        assert!(!store.is_dirty());
    }
}
