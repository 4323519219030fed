//! Integration tests writing generated payloads to disk.

use folio_routes::{
    CATEGORY_INDEX_MODULE, FsDataSink, PropCategoryGeneratedIndex, create_sidebar_routes,
    create_sidebars_routes,
};
use folio_sidebar::{CategoryLink, CategoryLinkGeneratedIndex, SidebarItem, SidebarItemCategory};

use crate::common::multi_sidebar_version;

#[tokio::test]
async fn test_payloads_written_to_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let sink = FsDataSink::new(&data_dir);
    let version = multi_sidebar_version();

    let routes = create_sidebars_routes(&version, &sink).await.unwrap();

    let written = std::fs::read_dir(&data_dir).unwrap().count();
    assert_eq!(written, routes.len());

    for route in &routes {
        let path = &route.modules[CATEGORY_INDEX_MODULE];
        let content = std::fs::read_to_string(path).expect("module path should exist");
        let prop: PropCategoryGeneratedIndex = serde_json::from_str(&content).unwrap();
        assert_eq!(prop.permalink, route.path);
    }
}

#[tokio::test]
async fn test_long_labels_fit_file_name_limit() {
    let dir = tempfile::TempDir::new().unwrap();
    let sink = FsDataSink::new(dir.path());

    // Labels around 224 bytes used to yield names that only overflowed
    // once `.json` was appended.
    for len in 215..=235 {
        let label = "x".repeat(len);
        let sidebar = vec![SidebarItem::Category(
            SidebarItemCategory::new(label.as_str(), vec![]).with_link(
                CategoryLink::GeneratedIndex(CategoryLinkGeneratedIndex::new(
                    "/category/long",
                    "/docs/category/long",
                )),
            ),
        )];

        let result = create_sidebar_routes("s", &sidebar, "/docs", &sink).await;
        assert!(
            result.is_ok(),
            "label of {len} bytes: {}",
            result.as_ref().unwrap_err()
        );
        let routes = result.unwrap();
        assert_eq!(routes.len(), 1);

        let path = std::path::Path::new(&routes[0].modules[CATEGORY_INDEX_MODULE]);
        assert!(path.file_name().unwrap().len() <= 255);
        assert!(path.exists());
    }
}
