//! Routes
//!
//! The navigable views and the paths that reach them.

/// A routed view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    List,
    Search,
    /// Catch-all, keeps the unmatched path for display
    NotFound(String),
}

impl Route {
    /// Destinations shown in the navigation menu, in menu order
    pub const MENU: [Route; 3] = [Route::Home, Route::List, Route::Search];

    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Home,
            "/list" => Route::List,
            "/search" => Route::Search,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::List => "/list",
            Route::Search => "/search",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::List => "List",
            Route::Search => "Search",
            Route::NotFound(_) => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/list"), Route::List);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/list/"), Route::List);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound("/settings".to_string())
        );
        assert_eq!(Route::parse("list"), Route::NotFound("list".to_string()));
        assert_eq!(
            Route::parse("/list/extra"),
            Route::NotFound("/list/extra".to_string())
        );
    }

    #[test]
    fn test_path_round_trips_menu() {
        for route in Route::MENU {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
