// SPDX-License-Identifier: MPL-2.0
//! Static project catalog.
//!
//! The catalog is a TOML document listing `[[project]]` tables in display
//! order. A default catalog is embedded in the binary; a custom one can be
//! supplied on the command line or in `settings.toml`. Records are loaded
//! once at startup and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use iced_folio::catalog::Catalog;
//!
//! let catalog = Catalog::from_toml_str(
//!     r#"
//!     [[project]]
//!     title = "Demo"
//!     short_description = "Short"
//!     detailed_description = "Long"
//!     images = ["a.png"]
//!     "#,
//!     None,
//! )
//! .expect("valid catalog");
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.projects()[0].repository_url(), None);
//! ```

use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "projects.toml";

/// Repository link value meaning "no link available".
pub const NO_LINK_SENTINEL: &str = "#";

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    /// Technologies in display order.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Image paths in carousel order. The first one doubles as the card thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default = "default_repository_link")]
    pub repository_link: String,
    #[serde(default)]
    pub live_demo_link: Option<String>,
}

fn default_repository_link() -> String {
    NO_LINK_SENTINEL.to_string()
}

impl ProjectRecord {
    /// Repository URL, or `None` when the record carries the placeholder sentinel.
    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        let link = self.repository_link.trim();
        if link.is_empty() || link == NO_LINK_SENTINEL {
            None
        } else {
            Some(link)
        }
    }

    /// Live demo URL, ignoring blank values.
    #[must_use]
    pub fn live_demo_url(&self) -> Option<&str> {
        self.live_demo_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty() && *link != NO_LINK_SENTINEL)
    }

    /// Card thumbnail, the first carousel image.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    fn resolve_assets(&mut self, root: &Path) {
        for image in &mut self.images {
            *image = resolve_asset(root, image);
        }
        if let Some(video) = &mut self.video {
            *video = resolve_asset(root, video);
        }
    }
}

/// Resolves a catalog asset reference against the asset root.
///
/// Absolute paths and URLs are returned unchanged.
fn resolve_asset(root: &Path, value: &str) -> String {
    if value.contains("://") || Path::new(value).is_absolute() || root.as_os_str().is_empty() {
        return value.to_string();
    }
    root.join(value).to_string_lossy().into_owned()
}

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    asset_root: Option<PathBuf>,
    #[serde(default, rename = "project")]
    projects: Vec<ProjectRecord>,
}

/// Ordered, read-only collection of project records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    owner: Option<String>,
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Builds a catalog from records already in memory.
    #[must_use]
    pub fn new(owner: Option<String>, projects: Vec<ProjectRecord>) -> Self {
        Self { owner, projects }
    }

    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG).ok_or(CatalogError::MissingEmbedded)?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml_str(&content, None)
    }

    /// Loads a catalog file. Relative asset paths resolve against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, path.parent())
    }

    /// Parses a catalog document.
    ///
    /// `base_dir` anchors a relative `asset_root`; `None` leaves it relative
    /// to the working directory.
    pub fn from_toml_str(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;

        if file.projects.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let root = match (base_dir, file.asset_root) {
            (Some(base), Some(root)) => base.join(root),
            (Some(base), None) => base.to_path_buf(),
            (None, Some(root)) => root,
            (None, None) => PathBuf::new(),
        };

        let mut projects = file.projects;
        for (index, project) in projects.iter_mut().enumerate() {
            if project.title.trim().is_empty() {
                tracing::warn!(index, "project has an empty title");
            }
            if project.images.is_empty() {
                tracing::warn!(index, title = %project.title, "project has no images");
            }
            project.resolve_assets(&root);
        }

        Ok(Self {
            owner: file.owner.filter(|owner| !owner.trim().is_empty()),
            projects,
        })
    }

    /// Display name of the portfolio owner, if the catalog provides one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Local image files referenced by the catalog that do not exist on disk.
    ///
    /// Remote URLs are not checked. The embedded catalog ships without its
    /// images, so running it outside a checkout that provides `public/`
    /// reports every image here.
    #[must_use]
    pub fn missing_images(&self) -> Vec<&str> {
        self.projects
            .iter()
            .flat_map(|project| project.images.iter())
            .map(String::as_str)
            .filter(|image| !image.contains("://") && !Path::new(image).exists())
            .collect()
    }
}

/// Loads the catalog at `path`, or the embedded one when no path is given.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading project catalog");
            Catalog::load_from_path(path)?
        }
        None => Catalog::embedded()?,
    };
    tracing::info!(projects = catalog.len(), "project catalog ready");
    Ok(catalog)
}
