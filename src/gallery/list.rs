// SPDX-License-Identifier: MPL-2.0
//! Gallery list state: bounded preview, expand toggle and selection.

use crate::catalog::ProjectRecord;
use crate::config::DEFAULT_PREVIEW_COUNT;

/// Returns the records shown for the given expansion state, in authorial order.
///
/// Collapsed galleries show the first `preview_count` records; expanded ones
/// show all of them.
pub fn visible_projects(
    records: &[ProjectRecord],
    expanded: bool,
    preview_count: usize,
) -> impl Iterator<Item = (usize, &ProjectRecord)> {
    let limit = if expanded {
        records.len()
    } else {
        preview_count.min(records.len())
    };
    records.iter().enumerate().take(limit)
}

/// State owned by the gallery list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    expanded: bool,
    selected: Option<usize>,
    modal_open: bool,
    preview_count: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_COUNT)
    }
}

impl GalleryState {
    /// Creates a collapsed gallery with nothing selected.
    #[must_use]
    pub fn new(preview_count: usize) -> Self {
        Self {
            expanded: false,
            selected: None,
            modal_open: false,
            preview_count,
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    /// Records currently shown as cards.
    pub fn visible<'a>(
        &self,
        records: &'a [ProjectRecord],
    ) -> impl Iterator<Item = (usize, &'a ProjectRecord)> {
        visible_projects(records, self.expanded, self.preview_count)
    }

    /// Whether the expand/collapse toggle is offered for a collection of `total` records.
    #[must_use]
    pub fn has_toggle(&self, total: usize) -> bool {
        total > self.preview_count
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Selects the record at `index` and opens the modal.
    ///
    /// Returns `false` when nothing changed (same record already open).
    pub fn select_project(&mut self, index: usize) -> bool {
        if self.modal_open && self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        self.modal_open = true;
        true
    }

    /// Closes the modal and clears the selection.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected = None;
    }
}

/// Pure projection of one project card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub index: usize,
    pub title: &'a str,
    pub short_description: &'a str,
    pub thumbnail: Option<&'a str>,
    /// Leading tech badges.
    pub tech_badges: &'a [String],
    /// Number of technologies hidden behind the `+N` badge.
    pub tech_overflow: usize,
    pub repository_url: Option<&'a str>,
}

impl<'a> CardView<'a> {
    #[must_use]
    pub fn new(index: usize, record: &'a ProjectRecord, tech_preview_count: usize) -> Self {
        let shown = tech_preview_count.min(record.tech_stack.len());
        Self {
            index,
            title: &record.title,
            short_description: &record.short_description,
            thumbnail: record.thumbnail(),
            tech_badges: &record.tech_stack[..shown],
            tech_overflow: record.tech_stack.len() - shown,
            repository_url: record.repository_url(),
        }
    }
}

/// Cards for the records currently shown by `state`.
pub fn card_views<'a>(
    state: &GalleryState,
    records: &'a [ProjectRecord],
    tech_preview_count: usize,
) -> Vec<CardView<'a>> {
    state
        .visible(records)
        .map(|(index, record)| CardView::new(index, record, tech_preview_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::test_support::{project, projects};

    fn titles<'a>(iter: impl Iterator<Item = (usize, &'a ProjectRecord)>) -> Vec<String> {
        iter.map(|(_, record)| record.title.clone()).collect()
    }

    #[test]
    fn collapsed_shows_min_of_preview_and_len_in_order() {
        for len in 0..8 {
            let records = projects(len);
            let shown = titles(visible_projects(&records, false, 4));
            let expected: Vec<String> = records.iter().take(4).map(|r| r.title.clone()).collect();
            assert_eq!(shown.len(), len.min(4));
            assert_eq!(shown, expected);
        }
    }

    #[test]
    fn expanded_shows_all_in_order() {
        let records = projects(7);
        let shown = titles(visible_projects(&records, true, 4));
        let expected: Vec<String> = records.iter().map(|r| r.title.clone()).collect();
        assert_eq!(shown, expected);
    }

    #[test]
    fn zero_preview_count_shows_nothing_until_expanded() {
        let records = projects(3);
        assert_eq!(visible_projects(&records, false, 0).count(), 0);
        assert_eq!(visible_projects(&records, true, 0).count(), 3);
    }

    #[test]
    fn toggle_expanded_is_its_own_inverse() {
        let mut state = GalleryState::default();
        let before = state.is_expanded();
        state.toggle_expanded();
        assert_ne!(state.is_expanded(), before);
        state.toggle_expanded();
        assert_eq!(state.is_expanded(), before);
    }

    #[test]
    fn six_records_show_four_then_six_then_four() {
        let records = projects(6);
        let mut state = GalleryState::new(4);
        assert_eq!(state.visible(&records).count(), 4);
        state.toggle_expanded();
        assert_eq!(state.visible(&records).count(), 6);
        state.toggle_expanded();
        assert_eq!(state.visible(&records).count(), 4);
    }

    #[test]
    fn toggle_is_offered_only_for_large_collections() {
        let state = GalleryState::new(4);
        assert!(!state.has_toggle(4));
        assert!(state.has_toggle(5));
    }

    #[test]
    fn select_project_opens_modal() {
        let mut state = GalleryState::default();
        assert!(state.select_project(2));
        assert_eq!(state.selected(), Some(2));
        assert!(state.is_modal_open());
    }

    #[test]
    fn reselecting_open_project_is_idempotent() {
        let mut state = GalleryState::default();
        state.select_project(1);
        let snapshot = state.clone();
        assert!(!state.select_project(1));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn close_modal_clears_selection() {
        let mut state = GalleryState::default();
        state.select_project(0);
        state.close_modal();
        assert!(!state.is_modal_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn card_view_truncates_tech_stack() {
        let mut record = project("Alpha", 1);
        record.tech_stack = ["A", "B", "C", "D", "E"].map(String::from).to_vec();
        let card = CardView::new(0, &record, 3);
        assert_eq!(card.tech_badges, &record.tech_stack[..3]);
        assert_eq!(card.tech_overflow, 2);
    }

    #[test]
    fn card_view_without_overflow() {
        let mut record = project("Alpha", 0);
        record.tech_stack = vec!["Rust".to_string()];
        let card = CardView::new(0, &record, 3);
        assert_eq!(card.tech_badges.len(), 1);
        assert_eq!(card.tech_overflow, 0);
        assert_eq!(card.thumbnail, None);
    }

    #[test]
    fn card_views_follow_visibility() {
        let records = projects(6);
        let mut state = GalleryState::new(4);
        let cards = card_views(&state, &records, 3);
        assert_eq!(cards.iter().map(|c| c.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        state.toggle_expanded();
        assert_eq!(card_views(&state, &records, 3).len(), 6);
    }
}
