//! Route descriptors and generated-index payloads.

use std::collections::BTreeMap;

use folio_sidebar::{CategoryLinkGeneratedIndex, SidebarItemCategory};
use serde::{Deserialize, Serialize};

/// Component that renders a generated category index page.
pub const CATEGORY_GENERATED_INDEX_COMPONENT: &str = "@theme/DocCategoryGeneratedIndex";

/// Module name under which a route references its generated-index payload.
pub const CATEGORY_INDEX_MODULE: &str = "categoryIndex";

/// A path-to-renderable-unit mapping consumed by the site router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    /// URL path the route matches.
    pub path: String,

    /// Component identifier that renders the route.
    pub component: String,

    /// Whether only the exact path matches.
    pub exact: bool,

    /// Data modules loaded for the component, by prop name.
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl RouteConfig {
    /// Route for a generated category index page whose payload lives at
    /// `data_ref`.
    pub fn category_generated_index(permalink: impl Into<String>, data_ref: String) -> Self {
        Self {
            path: permalink.into(),
            component: CATEGORY_GENERATED_INDEX_COMPONENT.to_string(),
            exact: true,
            modules: BTreeMap::from([(CATEGORY_INDEX_MODULE.to_string(), data_ref)]),
        }
    }
}

/// Data handed to the generated-index component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropCategoryGeneratedIndex {
    /// Category label.
    pub label: String,

    /// Slug of the generated page.
    pub slug: String,

    /// Absolute URL path of the generated page.
    pub permalink: String,

    /// Page title, when it differs from the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description shown on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropCategoryGeneratedIndex {
    /// Build the payload for `category`, linked through `link`.
    pub fn new(category: &SidebarItemCategory, link: &CategoryLinkGeneratedIndex) -> Self {
        Self {
            label: category.label.clone(),
            slug: link.slug.clone(),
            permalink: link.permalink.clone(),
            title: link.title.clone(),
            description: link.description.clone(),
        }
    }
}
