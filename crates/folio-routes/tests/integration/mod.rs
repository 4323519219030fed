mod fs_sink;
mod version_routes;
