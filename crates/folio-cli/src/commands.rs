//! `folio routes` and `folio categories`.

use std::path::{Path, PathBuf};

use folio_core::{Error, Result};
use folio_routes::{DataSink, FsDataSink, MemoryDataSink, RouteConfig, create_sidebars_routes};
use folio_sidebar::{LoadedVersion, collect_sidebar_categories};
use serde::Serialize;

use crate::config::FolioConfig;

/// Options of `folio routes`.
#[derive(Debug, Clone)]
pub struct RoutesOptions {
    /// Version description file.
    pub version: PathBuf,
    /// Data directory override.
    pub out_dir: Option<PathBuf>,
    /// Where to write the route list; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Keep data files in memory.
    pub dry_run: bool,
}

/// Load the version, generate its routes, and render them as pretty JSON.
pub async fn generate_routes_json(config: &FolioConfig, options: &RoutesOptions) -> Result<String> {
    let version = LoadedVersion::load(&options.version).await?;

    let sink: Box<dyn DataSink> = if options.dry_run {
        log::info!("Dry run: data files are kept in memory");
        Box::new(MemoryDataSink::new())
    } else {
        let data_dir = options.out_dir.as_ref().unwrap_or(&config.data_dir);
        log::info!("Writing data files to {}", data_dir.display());
        Box::new(FsDataSink::new(data_dir))
    };

    let routes = create_sidebars_routes(&version, sink.as_ref()).await?;
    render_routes(&routes)
}

/// Render routes as pretty JSON.
pub fn render_routes(routes: &[RouteConfig]) -> Result<String> {
    Ok(serde_json::to_string_pretty(routes)?)
}

/// Run `folio routes`.
pub async fn cmd_routes(config: &FolioConfig, options: RoutesOptions) -> Result<()> {
    let json = generate_routes_json(config, &options).await?;
    match &options.output {
        Some(path) => write_output(path, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io_with_path(e, path))?;
    log::info!("Routes written to {}", path.display());
    Ok(())
}

/// One row of `folio categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Sidebar the category belongs to.
    pub sidebar: String,
    /// Category label.
    pub label: String,
    /// Permalink of its generated index page, if any.
    pub generated_index: Option<String>,
}

/// Every category of every sidebar, grouped by sidebar name, in tree order.
pub fn list_categories(version: &LoadedVersion) -> Vec<CategoryEntry> {
    version
        .sidebars
        .iter()
        .flat_map(|(name, sidebar)| {
            collect_sidebar_categories(sidebar)
                .into_iter()
                .map(move |category| CategoryEntry {
                    sidebar: name.clone(),
                    label: category.label.clone(),
                    generated_index: category.generated_index().map(|l| l.permalink.clone()),
                })
        })
        .collect()
}

/// Run `folio categories`.
pub async fn cmd_categories(version_path: &Path) -> Result<()> {
    let version = LoadedVersion::load(version_path).await?;
    for entry in list_categories(&version) {
        println!(
            "{}\t{}\t{}",
            entry.sidebar,
            entry.label,
            entry.generated_index.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
