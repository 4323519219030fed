//! Generated category index routes.
//!
//! For each sidebar of a version:
//!
//! 1. Collect every category in tree order.
//! 2. Keep those linking to a generated index, and name each payload file
//!    with a per-sidebar [`Slugger`], so repeated labels stay distinct.
//! 3. Write all payloads concurrently, then emit one exact route per
//!    category, in tree order.
//!
//! Sidebars are processed concurrently as well; their routes are
//! concatenated in sidebar-name order.

use std::collections::HashSet;

use folio_core::{Result, Slugger, docu_hash};
use folio_sidebar::{
    CategoryLinkGeneratedIndex, LoadedVersion, Sidebar, SidebarItemCategory,
    collect_sidebar_categories,
};
use futures::future::try_join_all;

use crate::sink::DataSink;
use crate::types::{PropCategoryGeneratedIndex, RouteConfig};

/// Create the generated-index routes of a single sidebar.
///
/// Categories without a generated-index link contribute no route. The
/// returned routes follow the sidebar's tree order.
pub async fn create_sidebar_routes(
    sidebar_name: &str,
    sidebar: &Sidebar,
    version_path: &str,
    sink: &dyn DataSink,
) -> Result<Vec<RouteConfig>> {
    let mut slugs = Slugger::new();

    let pending = collect_sidebar_categories(sidebar)
        .into_iter()
        .filter_map(|category| category.generated_index().map(|link| (category, link)))
        .map(|(category, link)| {
            let prop_file_name = slugs.slug(&format!(
                "{version_path}-{sidebar_name}-category-{}",
                category.label
            ));
            create_category_generated_index_route(category, link, prop_file_name, sink)
        })
        .collect::<Vec<_>>();

    let routes = try_join_all(pending).await?;
    log::debug!(
        "Sidebar '{sidebar_name}' ({version_path}): {} generated index routes",
        routes.len()
    );
    Ok(routes)
}

async fn create_category_generated_index_route(
    category: &SidebarItemCategory,
    link: &CategoryLinkGeneratedIndex,
    prop_file_name: String,
    sink: &dyn DataSink,
) -> Result<RouteConfig> {
    let prop = PropCategoryGeneratedIndex::new(category, link);
    let content = serde_json::to_string_pretty(&prop)?;
    let file_name = format!("{}.json", docu_hash(&format!("category/{prop_file_name}")));

    let data_ref = sink.create_data(&file_name, &content).await?;
    log::trace!(
        "Category '{}' -> {} ({file_name})",
        category.label,
        link.permalink
    );

    Ok(RouteConfig::category_generated_index(
        link.permalink.clone(),
        data_ref,
    ))
}

/// Create the generated-index routes of every sidebar of `version`.
///
/// All sidebars are processed concurrently and their routes flattened into
/// one list. The first failure aborts the whole operation.
pub async fn create_sidebars_routes(
    version: &LoadedVersion,
    sink: &dyn DataSink,
) -> Result<Vec<RouteConfig>> {
    let per_sidebar = try_join_all(version.sidebars.iter().map(|(sidebar_name, sidebar)| {
        create_sidebar_routes(sidebar_name, sidebar, &version.version_path, sink)
    }))
    .await?;

    let routes: Vec<RouteConfig> = per_sidebar.into_iter().flatten().collect();
    let shared = warn_on_duplicate_paths(&version.version_name, &routes);

    log::info!(
        "Version '{}': {} generated index routes across {} sidebars ({shared} shared)",
        version.version_name,
        routes.len(),
        version.sidebars.len()
    );
    Ok(routes)
}

/// Warn about every route whose path was already taken; returns how many.
fn warn_on_duplicate_paths(version_name: &str, routes: &[RouteConfig]) -> usize {
    let mut seen = HashSet::new();
    let mut shared = 0;
    for route in routes {
        if !seen.insert(route.path.as_str()) {
            shared += 1;
            log::warn!(
                "Version '{version_name}': more than one generated index route for {}",
                route.path
            );
        }
    }
    shared
}
