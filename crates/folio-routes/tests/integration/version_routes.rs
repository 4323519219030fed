//! Integration tests for whole-version route generation.

use folio_core::docu_hash;
use folio_routes::{
    CATEGORY_GENERATED_INDEX_COMPONENT, CATEGORY_INDEX_MODULE, Error, MemoryDataSink,
    create_sidebar_routes, create_sidebars_routes,
};
use folio_sidebar::{LoadedVersion, collect_sidebar_categories};

use crate::common::{FailingSink, multi_sidebar_version};

fn file_name(prop_file_name: &str) -> String {
    format!("{}.json", docu_hash(&format!("category/{prop_file_name}")))
}

#[tokio::test]
async fn test_one_route_per_generated_index_category() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    let routes = create_sidebars_routes(&version, &sink)
        .await
        .expect("routes should be generated");

    let mut expected = Vec::new();
    for sidebar in version.sidebars.values() {
        for category in collect_sidebar_categories(sidebar) {
            if let Some(link) = category.generated_index() {
                expected.push(link.permalink.as_str());
            }
        }
    }
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, expected);
    assert_eq!(routes.len(), 4);
    assert_eq!(sink.len().await, 4);
}

#[tokio::test]
async fn test_routes_are_grouped_by_sidebar_name_then_tree_order() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    let routes = create_sidebars_routes(&version, &sink).await.unwrap();

    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "/docs/1.0.0/category/reference",
            "/docs/1.0.0/category/reference-nested",
            "/docs/1.0.0/category/getting-started",
            "/docs/1.0.0/category/advanced",
        ]
    );
}

#[tokio::test]
async fn test_every_route_is_exact_and_uses_index_component() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    let routes = create_sidebars_routes(&version, &sink).await.unwrap();

    for route in &routes {
        assert!(route.exact);
        assert_eq!(route.component, CATEGORY_GENERATED_INDEX_COMPONENT);
        assert_eq!(route.modules.len(), 1);
        assert!(route.modules[CATEGORY_INDEX_MODULE].starts_with("@generated/category-"));
    }
}

#[tokio::test]
async fn test_data_file_names_are_scoped_per_sidebar() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    create_sidebars_routes(&version, &sink).await.unwrap();

    let mut expected = vec![
        file_name("docs100-apisidebar-category-reference"),
        file_name("docs100-apisidebar-category-reference-1"),
        file_name("docs100-tutorialsidebar-category-getting-started"),
        file_name("docs100-tutorialsidebar-category-advanced"),
    ];
    expected.sort();
    assert_eq!(sink.file_names().await, expected);
}

#[tokio::test]
async fn test_payload_content() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    create_sidebars_routes(&version, &sink).await.unwrap();

    let content = sink
        .get(&file_name("docs100-tutorialsidebar-category-getting-started"))
        .await
        .expect("payload should be written");
    let payload: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({
            "label": "Getting Started",
            "slug": "/category/getting-started",
            "permalink": "/docs/1.0.0/category/getting-started",
            "description": "First steps"
        })
    );
    assert!(content.contains("\n  \"label\""), "payload should be pretty-printed");
}

#[tokio::test]
async fn test_single_sidebar_matches_version_slice() {
    let version = multi_sidebar_version();
    let sink = MemoryDataSink::new();

    let routes = create_sidebar_routes(
        "tutorialSidebar",
        &version.sidebars["tutorialSidebar"],
        &version.version_path,
        &sink,
    )
    .await
    .unwrap();

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].path, "/docs/1.0.0/category/getting-started");
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let version = multi_sidebar_version();

    let first = create_sidebars_routes(&version, &MemoryDataSink::new())
        .await
        .unwrap();
    let second = create_sidebars_routes(&version, &MemoryDataSink::new())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_sink_failure_aborts_generation() {
    let version = multi_sidebar_version();
    let sink = FailingSink::after(2);

    let err = create_sidebars_routes(&version, &sink).await.unwrap_err();
    assert!(matches!(err, Error::Sink(_)));
}

#[tokio::test]
async fn test_version_without_generated_indexes() {
    let version = LoadedVersion::from_json_str(
        r#"{
          "versionName": "current",
          "versionPath": "/docs",
          "sidebars": {
            "s": [{ "type": "category", "label": "Only", "items": [] }]
          }
        }"#,
    )
    .unwrap();
    let sink = FailingSink::after(0);

    let routes = create_sidebars_routes(&version, &sink).await.unwrap();
    assert!(routes.is_empty());
}
