//! cloudpile
//!
//! Terminal UI for a cloud resource inventory. Fetches the resource list
//! from an inventory backend and shows it in a sortable, filterable,
//! paginated grid with type, region and account facets.

pub mod api;
pub mod app;
pub mod config;
pub mod event;
pub mod filter;
pub mod grid;
pub mod model;
pub mod route;
pub mod ui;

/// Version injected at compile time via CLOUDPILE_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("CLOUDPILE_VERSION") {
    Some(v) => v,
    None => "dev",
};
