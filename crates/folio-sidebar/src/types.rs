//! Sidebar item types and the per-version container.
//!
//! The JSON shape mirrors what a site build hands over after sidebar
//! construction: every item carries a `type` tag, categories nest further
//! items, and a category may link either to a doc or to a generated index
//! page.

use std::collections::BTreeMap;
use std::path::Path;

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered list of top-level sidebar items.
pub type Sidebar = Vec<SidebarItem>;

/// Sidebars of one version, keyed (and iterated) by sidebar name.
pub type Sidebars = BTreeMap<String, Sidebar>;

/// A single node of a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SidebarItem {
    /// Link to a doc of the same version.
    Doc(SidebarItemDoc),
    /// Arbitrary (usually external) link.
    Link(SidebarItemLink),
    /// Raw HTML rendered in place.
    Html(SidebarItemHtml),
    /// Group of child items.
    Category(SidebarItemCategory),
}

/// A doc entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItemDoc {
    /// Doc id.
    pub id: String,

    /// Label override; the doc title is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItemLink {
    /// Link target.
    pub href: String,
    /// Displayed text.
    pub label: String,
}

/// An HTML entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItemHtml {
    /// Raw markup.
    pub value: String,
}

/// A category entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItemCategory {
    /// Displayed label.
    pub label: String,

    /// Child items, in display order.
    #[serde(default)]
    pub items: Vec<SidebarItem>,

    /// Whether the category starts collapsed.
    #[serde(default = "default_true")]
    pub collapsed: bool,

    /// Whether the category can be collapsed at all.
    #[serde(default = "default_true")]
    pub collapsible: bool,

    /// Page the category label links to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

impl SidebarItemCategory {
    /// Creates a collapsed, collapsible category with no link.
    pub fn new(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            label: label.into(),
            items,
            collapsed: true,
            collapsible: true,
            link: None,
        }
    }

    /// Sets the category link.
    pub fn with_link(mut self, link: CategoryLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Returns the generated-index link, if the category has one.
    pub fn generated_index(&self) -> Option<&CategoryLinkGeneratedIndex> {
        match &self.link {
            Some(CategoryLink::GeneratedIndex(link)) => Some(link),
            _ => None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Target of a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// The category links to an existing doc.
    Doc(CategoryLinkDoc),
    /// The category links to an auto-created index page.
    GeneratedIndex(CategoryLinkGeneratedIndex),
}

/// Category link to an existing doc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLinkDoc {
    /// Doc id.
    pub id: String,
}

/// Category link to an auto-created index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLinkGeneratedIndex {
    /// Slug of the generated page, relative to the version.
    pub slug: String,

    /// Absolute URL path of the generated page.
    pub permalink: String,

    /// Page title; the category label is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description shown on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryLinkGeneratedIndex {
    /// Creates a generated-index link without title or description.
    pub fn new(slug: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            permalink: permalink.into(),
            title: None,
            description: None,
        }
    }
}

/// A documentation version together with its sidebars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedVersion {
    /// Version name (e.g. `current`, `1.0.0`).
    pub version_name: String,

    /// URL path prefix of the version (e.g. `/docs`, `/docs/1.0.0`).
    pub version_path: String,

    /// Sidebars by name.
    #[serde(default)]
    pub sidebars: Sidebars,
}

impl LoadedVersion {
    /// Parse a version description from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::parse(format!("Invalid version description: {e}")))
    }

    /// Read and parse a version description file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))?;
        let version = Self::from_json_str(&content)
            .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;

        log::debug!(
            "Loaded version '{}' from {} ({} sidebars)",
            version.version_name,
            path.display(),
            version.sidebars.len()
        );
        Ok(version)
    }
}
