// SPDX-License-Identifier: MPL-2.0
//! Modal viewer state machine.
//!
//! The viewer is either `Closed` or `Open` on one project with its own
//! [`Carousel`]. Entering `Open`, or switching to another project while open,
//! always restarts the carousel at the first image.

use super::carousel::Carousel;
use crate::catalog::ProjectRecord;

/// Lifecycle of the modal viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { project: usize, carousel: Carousel },
}

/// Modal viewer for the selected project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalViewer {
    state: ModalState,
}

impl ModalViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Project shown while open.
    #[must_use]
    pub fn project(&self) -> Option<usize> {
        match self.state {
            ModalState::Open { project, .. } => Some(project),
            ModalState::Closed => None,
        }
    }

    /// Current carousel index, 0 when closed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        match self.state {
            ModalState::Open { carousel, .. } => carousel.current_index(),
            ModalState::Closed => 0,
        }
    }

    /// Reconciles the viewer with the gallery's `selected` / `modal_open` pair.
    ///
    /// A missing selection, a closed flag, or a selection outside `records`
    /// all render nothing. A new selection restarts at image 0; the same
    /// selection keeps its position, clamped to the current image count.
    pub fn sync(&mut self, selected: Option<usize>, modal_open: bool, records: &[ProjectRecord]) {
        let target = selected
            .filter(|_| modal_open)
            .and_then(|index| records.get(index).map(|record| (index, record.images.len())));

        self.state = match (self.state, target) {
            (_, None) => ModalState::Closed,
            (ModalState::Open { project, mut carousel }, Some((index, len))) if project == index => {
                carousel.clamp_to(len);
                ModalState::Open { project, carousel }
            }
            (_, Some((index, len))) => {
                tracing::debug!(project = index, images = len, "modal opened");
                ModalState::Open {
                    project: index,
                    carousel: Carousel::new(len),
                }
            }
        };
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn next(&mut self) {
        if let ModalState::Open { carousel, .. } = &mut self.state {
            carousel.next();
        }
    }

    pub fn previous(&mut self) {
        if let ModalState::Open { carousel, .. } = &mut self.state {
            carousel.previous();
        }
    }

    /// Jumps to image `index`. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if let ModalState::Open { carousel, .. } = &mut self.state {
            if !carousel.jump_to(index) {
                tracing::warn!(index, len = carousel.len(), "ignoring out-of-range image index");
            }
        }
    }

    /// Projection of the open modal, or `None` when nothing should render.
    #[must_use]
    pub fn view<'a>(&self, records: &'a [ProjectRecord]) -> Option<ModalView<'a>> {
        let ModalState::Open { project, carousel } = self.state else {
            return None;
        };
        let record = records.get(project)?;
        Some(ModalView {
            project,
            title: &record.title,
            image: record.images.get(carousel.current_index()).map(String::as_str),
            current_index: carousel.current_index(),
            image_count: record.images.len(),
            show_navigation: carousel.is_navigable(),
            indicators: carousel.indicators(),
            detailed_description: &record.detailed_description,
            tech_stack: &record.tech_stack,
            skills: &record.skills,
            video: record.video.as_deref(),
            repository_url: record.repository_url(),
            live_demo_url: record.live_demo_url(),
        })
    }
}

/// Everything the modal dialog displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView<'a> {
    pub project: usize,
    pub title: &'a str,
    /// Image at the carousel position; `None` for projects without images.
    pub image: Option<&'a str>,
    pub current_index: usize,
    pub image_count: usize,
    /// Arrows and indicators are offered only with more than one image.
    pub show_navigation: bool,
    pub indicators: Vec<bool>,
    pub detailed_description: &'a str,
    pub tech_stack: &'a [String],
    pub skills: &'a [String],
    pub video: Option<&'a str>,
    pub repository_url: Option<&'a str>,
    pub live_demo_url: Option<&'a str>,
}
