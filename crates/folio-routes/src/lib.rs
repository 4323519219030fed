//! Routes for auto-generated category index pages.
//!
//! Walks every sidebar of a documentation version, and for each category
//! whose link is a generated index, writes a small JSON payload through a
//! [`DataSink`] and emits a [`RouteConfig`] that points the router at it.
//!
//! # Modules
//!
//! - [`types`]: Route descriptors and the generated-index payload
//! - [`sink`]: Where generated payloads are written
//! - [`routes`]: The traversal that ties both together
//!
//! # Example
//!
//! ```rust
//! use folio_routes::{create_sidebars_routes, MemoryDataSink};
//! use folio_sidebar::LoadedVersion;
//!
//! # tokio_test::block_on(async {
//! let version = LoadedVersion::from_json_str(r#"{
//!   "versionName": "current",
//!   "versionPath": "/docs",
//!   "sidebars": {
//!     "tutorialSidebar": [{
//!       "type": "category",
//!       "label": "Guides",
//!       "link": {
//!         "type": "generated-index",
//!         "slug": "/category/guides",
//!         "permalink": "/docs/category/guides"
//!       }
//!     }]
//!   }
//! }"#).unwrap();
//!
//! let sink = MemoryDataSink::new();
//! let routes = create_sidebars_routes(&version, &sink).await.unwrap();
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].path, "/docs/category/guides");
//! # });
//! ```

#![warn(missing_docs)]

pub mod routes;
pub mod sink;
pub mod types;

pub use folio_core::{Error, Result};
pub use routes::{create_sidebar_routes, create_sidebars_routes};
pub use sink::{DataSink, FsDataSink, MemoryDataSink};
pub use types::{
    CATEGORY_GENERATED_INDEX_COMPONENT, CATEGORY_INDEX_MODULE, PropCategoryGeneratedIndex,
    RouteConfig,
};
