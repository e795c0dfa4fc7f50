// StegoSight - core/selection.rs
//
// Single-selection model behind a column of method cards. The selected card
// is stored as one index, so "exactly one card selected" holds by
// construction whenever the catalog is non-empty.

use crate::core::catalog::{self, MethodInfo, Workflow};
use crate::core::media::MediaType;

/// Current media type, its technique list and the highlighted card.
#[derive(Debug, Clone)]
pub struct MethodSelection {
    workflow: Workflow,
    media: MediaType,
    methods: &'static [MethodInfo],
    selected: Option<usize>,
}

impl MethodSelection {
    /// Start on `media` with the workflow's default method highlighted
    /// (or the first card when the default is not in that catalog).
    pub fn new(workflow: Workflow, media: MediaType) -> Self {
        let mut selection = Self {
            workflow,
            media,
            methods: catalog::methods(workflow, media),
            selected: None,
        };
        selection.select_key_or_first(workflow.default_method());
        selection
    }

    pub fn media_type(&self) -> MediaType {
        self.media
    }

    /// Cards in display order.
    pub fn methods(&self) -> &'static [MethodInfo] {
        self.methods
    }

    pub fn selected(&self) -> Option<&'static MethodInfo> {
        let methods = self.methods;
        self.selected.and_then(|i| methods.get(i))
    }

    /// Key of the highlighted card, or `""` when the catalog is empty.
    pub fn selected_key(&self) -> &'static str {
        self.selected().map_or("", |m| m.key)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Handle a click on card `index`. Out-of-range indices are ignored.
    /// Returns true when the selection is valid after the click.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.methods.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Select the card with `key`. Unknown keys leave the selection alone.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.methods.iter().position(|m| m.key == key) {
            Some(i) => self.select_index(i),
            None => false,
        }
    }

    /// Switch to another media type's catalog.
    ///
    /// The current key stays selected when the new catalog also contains it;
    /// otherwise the first card is selected. Returns false (and changes
    /// nothing) when `media` is already active.
    pub fn set_media_type(&mut self, media: MediaType) -> bool {
        if media == self.media {
            return false;
        }
        let previous = self.selected_key();
        self.media = media;
        self.methods = catalog::methods(self.workflow, media);
        self.selected = None;
        self.select_key_or_first(previous);
        true
    }

    fn select_key_or_first(&mut self, key: &str) {
        if !self.select_key(key) && !self.methods.is_empty() {
            self.selected = Some(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(s: &MethodSelection) -> usize {
        (0..s.methods().len()).filter(|&i| s.is_selected(i)).count()
    }

    #[test]
    fn test_new_selects_workflow_default() {
        let embed = MethodSelection::new(Workflow::Embed, MediaType::Image);
        assert_eq!(embed.selected_key(), "content_adaptive");
        let extract = MethodSelection::new(Workflow::Extract, MediaType::Image);
        assert_eq!(extract.selected_key(), "adaptive");
    }

    #[test]
    fn test_new_falls_back_to_first_card() {
        let s = MethodSelection::new(Workflow::Embed, MediaType::Audio);
        assert!(s.is_selected(0));
        assert_eq!(s.selected_key(), "audio_adaptive");
    }

    #[test]
    fn test_any_click_leaves_exactly_one_card_selected() {
        for workflow in [Workflow::Embed, Workflow::Extract] {
            for media in MediaType::all() {
                let mut s = MethodSelection::new(workflow, *media);
                let n = s.methods().len();
                for click in 0..n {
                    assert!(s.select_index(click));
                    assert_eq!(selected_count(&s), 1);
                    assert!(s.is_selected(click));
                    for sibling in (0..n).filter(|&i| i != click) {
                        assert!(!s.is_selected(sibling));
                    }
                }
                // Clicking in reverse order as well.
                for click in (0..n).rev() {
                    s.select_index(click);
                    assert_eq!(selected_count(&s), 1);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let mut s = MethodSelection::new(Workflow::Embed, MediaType::Image);
        s.select_index(2);
        assert!(!s.select_index(99));
        assert!(s.is_selected(2));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut s = MethodSelection::new(Workflow::Embed, MediaType::Image);
        assert!(!s.select_key("does_not_exist"));
        assert_eq!(s.selected_key(), "content_adaptive");
    }

    #[test]
    fn test_media_switch_selects_first_when_key_missing() {
        let mut s = MethodSelection::new(Workflow::Extract, MediaType::Audio);
        s.select_key("audio_lsb");
        assert!(s.set_media_type(MediaType::Image));
        // "audio_lsb" is not an image technique
        assert_eq!(s.selected_key(), "adaptive");

        s.select_key("lsb");
        assert!(s.set_media_type(MediaType::Video));
        assert_eq!(s.selected_key(), "video_adaptive");
        assert_eq!(selected_count(&s), 1);
    }

    #[test]
    fn test_media_switch_to_same_type_is_noop() {
        let mut s = MethodSelection::new(Workflow::Embed, MediaType::Image);
        s.select_key("dct");
        assert!(!s.set_media_type(MediaType::Image));
        assert_eq!(s.selected_key(), "dct");
    }
}
