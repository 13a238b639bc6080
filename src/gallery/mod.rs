// SPDX-License-Identifier: MPL-2.0
//! Gallery domain logic, independent of the UI toolkit.
//!
//! - [`list`] - bounded preview, expand toggle and selection
//! - [`viewer`] - modal lifecycle for the selected project
//! - [`carousel`] - wrapping image cursor used by the viewer

pub mod carousel;
pub mod list;
pub mod viewer;

pub use carousel::Carousel;
pub use list::{card_views, visible_projects, CardView, GalleryState};
pub use viewer::{ModalState, ModalView, ModalViewer};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::ProjectRecord;

    /// Record named `title` with `images` image paths `"{title}-{i}.png"`.
    pub fn project(title: &str, images: usize) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            short_description: format!("{title} short"),
            detailed_description: format!("{title} detailed"),
            tech_stack: vec!["Rust".to_string()],
            skills: Vec::new(),
            images: (0..images).map(|i| format!("{title}-{i}.png")).collect(),
            video: None,
            repository_link: "#".to_string(),
            live_demo_link: None,
        }
    }

    pub fn projects(count: usize) -> Vec<ProjectRecord> {
        (0..count).map(|i| project(&format!("P{i}"), 1)).collect()
    }
}
