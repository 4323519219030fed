//! Sidebar data model and traversal helpers.
//!
//! A documentation version carries one or more named sidebars. Each sidebar
//! is an ordered tree of items: docs, external links, raw HTML, and
//! categories that group further items. This crate defines that shape, loads
//! it from JSON, and provides the collectors route generators walk it with.
//!
//! # Modules
//!
//! - [`types`]: Sidebar items, category links, and [`LoadedVersion`]
//! - [`utils`]: Pre-order collectors over a sidebar tree
//!
//! # Example
//!
//! ```rust
//! use folio_sidebar::{collect_sidebar_categories, LoadedVersion};
//!
//! let json = r#"{
//!   "versionName": "current",
//!   "versionPath": "/docs",
//!   "sidebars": {
//!     "tutorialSidebar": [
//!       { "type": "category", "label": "Guides", "items": [] }
//!     ]
//!   }
//! }"#;
//!
//! let version = LoadedVersion::from_json_str(json).unwrap();
//! let sidebar = &version.sidebars["tutorialSidebar"];
//! assert_eq!(collect_sidebar_categories(sidebar)[0].label, "Guides");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;
pub mod utils;

pub use types::{
    CategoryLink, CategoryLinkDoc, CategoryLinkGeneratedIndex, LoadedVersion, Sidebar,
    SidebarItem, SidebarItemCategory, SidebarItemDoc, SidebarItemHtml, SidebarItemLink, Sidebars,
};
pub use utils::{collect_sidebar_categories, collect_sidebar_doc_ids, collect_sidebar_links};
