//! Common fixtures and sinks for folio-routes integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_routes::{DataSink, Error, Result};
use folio_sidebar::LoadedVersion;

/// A version with two sidebars, nested categories, a repeated label, and
/// categories that must not produce routes.
pub const MULTI_SIDEBAR_VERSION: &str = r#"{
  "versionName": "1.0.0",
  "versionPath": "/docs/1.0.0",
  "sidebars": {
    "tutorialSidebar": [
      { "type": "doc", "id": "intro" },
      {
        "type": "category",
        "label": "Getting Started",
        "link": {
          "type": "generated-index",
          "slug": "/category/getting-started",
          "permalink": "/docs/1.0.0/category/getting-started",
          "description": "First steps"
        },
        "items": [
          { "type": "doc", "id": "install" },
          {
            "type": "category",
            "label": "Advanced",
            "link": {
              "type": "generated-index",
              "slug": "/category/advanced",
              "permalink": "/docs/1.0.0/category/advanced"
            },
            "items": []
          },
          {
            "type": "category",
            "label": "Plain",
            "items": [{ "type": "doc", "id": "plain-doc" }]
          }
        ]
      },
      {
        "type": "category",
        "label": "Overview",
        "link": { "type": "doc", "id": "overview" },
        "items": []
      }
    ],
    "apiSidebar": [
      {
        "type": "category",
        "label": "Reference",
        "link": {
          "type": "generated-index",
          "slug": "/category/reference",
          "permalink": "/docs/1.0.0/category/reference"
        },
        "items": [
          {
            "type": "category",
            "label": "Reference",
            "link": {
              "type": "generated-index",
              "slug": "/category/reference-nested",
              "permalink": "/docs/1.0.0/category/reference-nested"
            },
            "items": []
          }
        ]
      }
    ]
  }
}"#;

/// Parse [`MULTI_SIDEBAR_VERSION`].
pub fn multi_sidebar_version() -> LoadedVersion {
    LoadedVersion::from_json_str(MULTI_SIDEBAR_VERSION).expect("fixture should parse")
}

/// Sink that accepts a fixed number of writes and fails afterwards.
pub struct FailingSink {
    remaining: AtomicUsize,
}

impl FailingSink {
    /// Creates a sink that fails on write number `succeed_first + 1`.
    pub fn after(succeed_first: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(succeed_first),
        }
    }
}

#[async_trait]
impl DataSink for FailingSink {
    async fn create_data(&self, file_name: &str, _content: &str) -> Result<String> {
        let accepted = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if accepted {
            Ok(format!("ok/{file_name}"))
        } else {
            Err(Error::sink(format!("refusing {file_name}")))
        }
    }
}
