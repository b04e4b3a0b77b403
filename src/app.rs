//! Application State
//!
//! Central application state management for cloudpile. The App is the only
//! writer of view state; the fetch task reports back through a channel.

use crate::api::{FetchEvent, ResourceClient};
use crate::config::Config;
use crate::filter::{Facet, FacetValues, FilterMsg, FilterState};
use crate::grid::GridState;
use crate::model::Resource;
use crate::route::Route;
use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Application modes
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,      // Viewing the current route
    Command,     // : command input
    Help,        // ? help popup
    FacetSelect, // Facet selector popup
    Detail,      // Viewing one resource
}

/// Open facet selector control
#[derive(Debug, Clone)]
pub struct FacetSelector {
    pub facet: Facet,
    /// Distinct values of the facet when the selector was opened
    pub values: Vec<String>,
    pub search_text: String,
    /// Values matching `search_text`
    pub filtered: Vec<String>,
    /// Cursor over the options: 0 is "(any)", `i` is `filtered[i - 1]`
    pub selected: usize,
}

impl FacetSelector {
    pub fn new(facet: Facet, values: &[String], current: Option<&str>) -> Self {
        let selected = current
            .and_then(|c| values.iter().position(|v| v == c))
            .map(|i| i + 1)
            .unwrap_or(0);

        Self {
            facet,
            values: values.to_vec(),
            search_text: String::new(),
            filtered: values.to_vec(),
            selected,
        }
    }

    /// Number of options including "(any)"
    pub fn option_count(&self) -> usize {
        self.filtered.len() + 1
    }

    /// Narrow `filtered` to the search text, keeping the cursor on the value
    /// it was on. Falls back to "(any)" when that value is filtered out.
    pub fn apply_search(&mut self) {
        let highlighted = self
            .selected
            .checked_sub(1)
            .and_then(|i| self.filtered.get(i))
            .cloned();
        let needle = self.search_text.to_lowercase();
        self.filtered = if needle.is_empty() {
            self.values.clone()
        } else {
            self.values
                .iter()
                .filter(|v| v.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
        self.selected = highlighted
            .and_then(|value| self.filtered.iter().position(|v| *v == value))
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1).min(self.option_count() - 1);
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self, page_size: usize) {
        self.selected = (self.selected + page_size).min(self.option_count() - 1);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn go_to_bottom(&mut self) {
        self.selected = self.option_count() - 1;
    }

    /// Message the current option dispatches
    pub fn choice(&self) -> FilterMsg {
        match self.selected.checked_sub(1).and_then(|i| self.filtered.get(i)) {
            Some(value) => FilterMsg::Select(self.facet, value.clone()),
            None => FilterMsg::Clear(self.facet),
        }
    }
}

/// Main application state
pub struct App {
    // Backend
    pub client: ResourceClient,

    // Routing
    pub route: Route,
    pub mode: Mode,

    // List view: `None` until the first successful fetch of this mount
    pub resources: Option<Vec<Resource>>,
    pub facet_values: FacetValues,
    pub filter: FilterState,
    pub grid: GridState,
    pub fetched_at: Option<DateTime<Local>>,
    pub fetch_in_flight: bool,
    pub fetch_error: Option<String>,

    // Fetch completion channel
    generation: u64,
    fetch_tx: UnboundedSender<FetchEvent>,
    fetch_rx: UnboundedReceiver<FetchEvent>,

    // Controls
    pub selector: Option<FacetSelector>,
    pub column_filter_active: bool,

    // Command input
    pub command_text: String,
    pub command_suggestions: Vec<String>,
    pub command_suggestion_selected: usize,
    pub command_preview: Option<String>,

    // UI state
    pub error_message: Option<String>,
    pub detail_scroll: usize,
    /// Largest useful `detail_scroll`, reported by the last detail render
    pub detail_max_scroll: usize,
    pub spinner_tick: usize,

    // Persistent configuration
    pub config: Config,

    // Key press tracking
    pub last_key_press: Option<(KeyCode, std::time::Instant)>,
}

impl App {
    /// Create the App on `route`. Mounting the list view spawns its fetch,
    /// so this must run inside a tokio runtime when `route` is `/list`.
    pub fn new(client: ResourceClient, config: Config, route: Route) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            client,
            route: Route::Home,
            mode: Mode::Normal,
            resources: None,
            facet_values: FacetValues::default(),
            filter: FilterState::new(),
            grid: GridState::new(),
            fetched_at: None,
            fetch_in_flight: false,
            fetch_error: None,
            generation: 0,
            fetch_tx,
            fetch_rx,
            selector: None,
            column_filter_active: false,
            command_text: String::new(),
            command_suggestions: Vec::new(),
            command_suggestion_selected: 0,
            command_preview: None,
            error_message: None,
            detail_scroll: 0,
            detail_max_scroll: 0,
            spinner_tick: 0,
            config,
            last_key_press: None,
        };

        if route != Route::Home {
            app.navigate(route);
        }
        app
    }

    /// Advance animations, called once per event loop iteration
    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    // =========================================================================
    // Routing
    // =========================================================================

    pub fn navigate(&mut self, route: Route) {
        self.mode = Mode::Normal;
        self.error_message = None;

        if route == self.route {
            return;
        }

        tracing::info!("Navigating {} -> {}", self.route.path(), route.path());

        if self.route == Route::List {
            self.unmount_list();
        }
        self.route = route;
        if self.route == Route::List {
            self.mount_list();
        }

        if let Err(e) = self.config.set_last_route(self.route.path()) {
            tracing::warn!("Failed to save route to config: {}", e);
        }
    }

    /// Move to the next menu destination, wrapping around
    pub fn next_menu_route(&mut self) {
        let next = Route::MENU
            .iter()
            .position(|r| *r == self.route)
            .map(|i| (i + 1) % Route::MENU.len())
            .unwrap_or(0);
        self.navigate(Route::MENU[next].clone());
    }

    fn mount_list(&mut self) {
        self.generation += 1;
        self.resources = None;
        self.facet_values = FacetValues::default();
        self.filter = FilterState::new();
        self.grid = GridState::new();
        self.fetched_at = None;
        self.fetch_error = None;
        self.column_filter_active = false;
        self.spawn_fetch();
    }

    /// Discard the collection. An in-flight request keeps running; its
    /// result is dropped when it arrives.
    fn unmount_list(&mut self) {
        self.generation += 1;
        self.resources = None;
        self.fetch_in_flight = false;
        self.column_filter_active = false;
        self.selector = None;
    }

    // =========================================================================
    // Data Fetching
    // =========================================================================

    fn spawn_fetch(&mut self) {
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        let generation = self.generation;

        self.fetch_in_flight = true;
        tokio::spawn(async move {
            let result = client.fetch_resources().await;
            if tx.send(FetchEvent { generation, result }).is_err() {
                tracing::debug!("Fetch finished after the app shut down");
            }
        });
    }

    /// Re-fetch the list view. Ignored while a fetch is outstanding.
    pub fn refetch(&mut self) {
        if self.route != Route::List || self.fetch_in_flight {
            return;
        }
        self.spawn_fetch();
    }

    /// Apply every completed fetch without blocking
    pub fn drain_fetch_events(&mut self) {
        while let Ok(event) = self.fetch_rx.try_recv() {
            self.on_fetch_complete(event);
        }
    }

    /// Wait for the next completed fetch and apply it
    pub async fn await_fetch(&mut self) {
        if let Some(event) = self.fetch_rx.recv().await {
            self.on_fetch_complete(event);
        }
    }

    pub fn on_fetch_complete(&mut self, event: FetchEvent) {
        if event.generation != self.generation {
            tracing::debug!(
                "Dropping fetch result of unmounted list view (generation {})",
                event.generation
            );
            return;
        }
        self.fetch_in_flight = false;

        match event.result {
            Ok(resources) => self.set_resources(resources),
            Err(e) => {
                tracing::error!("Failed to fetch resources: {}", e);
                if self.config.surface_fetch_errors {
                    self.fetch_error = Some(e.to_string());
                }
            },
        }
    }

    /// Replace the collection wholesale. Filter selections are kept.
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.facet_values = FacetValues::from_resources(&resources);
        self.grid.refresh(&resources, &self.filter);
        self.resources = Some(resources);
        self.fetched_at = Some(Local::now());
        self.fetch_error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.route == Route::List && self.resources.is_none()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Replace the filter state and re-evaluate visibility once
    pub fn dispatch_filter(&mut self, msg: FilterMsg) {
        self.filter = self.filter.apply(msg);
        tracing::debug!("Filter state: {:?}", self.filter);
        self.on_filter_changed();
    }

    /// Recompute visible rows after a filter input or sort changed
    pub fn on_filter_changed(&mut self) {
        if let Some(resources) = &self.resources {
            self.grid.refresh(resources, &self.filter);
        }
    }

    pub fn open_selector(&mut self, facet: Facet) {
        if self.resources.is_none() {
            return;
        }
        self.selector = Some(FacetSelector::new(
            facet,
            self.facet_values.get(facet),
            self.filter.get(facet),
        ));
        self.mode = Mode::FacetSelect;
    }

    pub fn confirm_selector(&mut self) {
        if let Some(selector) = self.selector.take() {
            self.dispatch_filter(selector.choice());
        }
        self.mode = Mode::Normal;
    }

    pub fn cancel_selector(&mut self) {
        self.selector = None;
        self.mode = Mode::Normal;
    }

    pub fn start_column_filter(&mut self) {
        if self.resources.is_some() && self.grid.focused_filter_mut().is_some() {
            self.column_filter_active = true;
        }
    }

    pub fn push_column_filter(&mut self, c: char) {
        if let Some(text) = self.grid.focused_filter_mut() {
            text.push(c);
            self.on_filter_changed();
        }
    }

    pub fn pop_column_filter(&mut self) {
        if let Some(text) = self.grid.focused_filter_mut() {
            text.pop();
            self.on_filter_changed();
        }
    }

    pub fn clear_column_filter(&mut self) {
        if let Some(text) = self.grid.focused_filter_mut() {
            text.clear();
            self.on_filter_changed();
        }
        self.column_filter_active = false;
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    pub fn sort_by_column(&mut self, column: usize) {
        self.grid.sort_by_column(column);
        self.on_filter_changed();
    }

    pub fn clear_sort(&mut self) {
        self.grid.clear_sort();
        self.on_filter_changed();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected_resource(&self) -> Option<&Resource> {
        let resources = self.resources.as_ref()?;
        self.grid.selected_row().and_then(|idx| resources.get(idx))
    }

    /// Visible resources, in display order
    pub fn visible_resources(&self) -> Vec<&Resource> {
        match &self.resources {
            Some(resources) => self
                .grid
                .rows()
                .iter()
                .filter_map(|&idx| resources.get(idx))
                .collect(),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Mode Transitions
    // =========================================================================

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn enter_detail_mode(&mut self) {
        if self.selected_resource().is_some() {
            self.detail_scroll = 0;
            self.detail_max_scroll = 0;
            self.mode = Mode::Detail;
        }
    }

    pub fn scroll_detail_down(&mut self, lines: usize) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(lines)
            .min(self.detail_max_scroll);
    }

    pub fn scroll_detail_up(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    /// Record how far the detail view can scroll and pull the offset back inside it
    pub fn set_detail_max_scroll(&mut self, max_scroll: usize) {
        self.detail_max_scroll = max_scroll;
        self.detail_scroll = self.detail_scroll.min(max_scroll);
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
        self.selector = None;
    }

    pub fn enter_command_mode(&mut self) {
        self.mode = Mode::Command;
        self.command_text.clear();
        self.command_suggestions = Self::available_commands();
        self.command_suggestion_selected = 0;
        self.command_preview = None;
    }

    pub fn available_commands() -> Vec<String> {
        let mut commands: Vec<String> = Route::MENU.iter().map(|r| r.path().to_string()).collect();
        commands.extend(
            ["clear", "help", "quit", "refresh"]
                .iter()
                .map(|s| s.to_string()),
        );
        commands
    }

    pub fn update_command_suggestions(&mut self) {
        let input = self.command_text.to_lowercase();
        let all_commands = Self::available_commands();

        if input.is_empty() {
            self.command_suggestions = all_commands;
        } else {
            self.command_suggestions = all_commands
                .into_iter()
                .filter(|cmd| cmd.starts_with(&input))
                .collect();
        }

        if self.command_suggestion_selected >= self.command_suggestions.len() {
            self.command_suggestion_selected = 0;
        }

        self.update_preview();
    }

    fn update_preview(&mut self) {
        self.command_preview = self
            .command_suggestions
            .get(self.command_suggestion_selected)
            .cloned();
    }

    pub fn next_suggestion(&mut self) {
        if !self.command_suggestions.is_empty() {
            self.command_suggestion_selected =
                (self.command_suggestion_selected + 1) % self.command_suggestions.len();
            self.update_preview();
        }
    }

    pub fn prev_suggestion(&mut self) {
        if !self.command_suggestions.is_empty() {
            if self.command_suggestion_selected == 0 {
                self.command_suggestion_selected = self.command_suggestions.len() - 1;
            } else {
                self.command_suggestion_selected -= 1;
            }
            self.update_preview();
        }
    }

    pub fn apply_suggestion(&mut self) {
        if let Some(preview) = &self.command_preview {
            self.command_text = preview.clone();
            self.update_command_suggestions();
        }
    }

    // =========================================================================
    // Command Execution
    // =========================================================================

    /// Run the typed command (or the highlighted suggestion when nothing was
    /// typed). Returns true if the app should quit.
    pub fn execute_command(&mut self) -> bool {
        let command_text = if self.command_text.is_empty() {
            self.command_preview.clone().unwrap_or_default()
        } else {
            self.command_text.clone()
        };
        let command = command_text.trim();

        match command {
            "" => {},
            "q" | "quit" => return true,
            "refresh" => {
                self.mode = Mode::Normal;
                self.refetch();
            },
            "clear" => {
                self.mode = Mode::Normal;
                self.dispatch_filter(FilterMsg::ClearAll);
            },
            "help" => {
                self.enter_help_mode();
            },
            path if path.starts_with('/') => {
                self.navigate(Route::parse(path));
            },
            other => {
                self.mode = Mode::Normal;
                self.error_message = Some(format!("Unknown command: {}", other));
            },
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use url::Url;

    fn client() -> ResourceClient {
        ResourceClient::new(&Url::parse("http://127.0.0.1:9").unwrap()).unwrap()
    }

    fn resource(id: &str, resource_type: &str, region: &str, account: &str, alias: &str) -> Resource {
        Resource {
            id: id.to_string(),
            resource_type: resource_type.to_string(),
            region: region.to_string(),
            account: account.to_string(),
            account_alias: alias.to_string(),
            ..Default::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.route = Route::List;
        app.set_resources(vec![
            resource("i-1", "EC2", "us-east-1", "111", "prod"),
            resource("i-2", "RDS", "us-west-2", "222", "dev"),
        ]);
        app
    }

    fn visible_ids(app: &App) -> Vec<String> {
        app.visible_resources()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn test_set_resources_builds_facets_and_grid() {
        let app = loaded_app();
        assert_eq!(app.facet_values.get(Facet::Type), &["EC2", "RDS"]);
        assert_eq!(
            app.facet_values.get(Facet::Account),
            &["dev (222)", "prod (111)"]
        );
        assert_eq!(visible_ids(&app), vec!["i-1", "i-2"]);
        assert!(app.fetched_at.is_some());
    }

    #[test]
    fn test_dispatch_filter_recomputes_visibility() {
        let mut app = loaded_app();
        app.dispatch_filter(FilterMsg::Select(Facet::Account, "dev (222)".to_string()));
        assert_eq!(visible_ids(&app), vec!["i-2"]);

        app.dispatch_filter(FilterMsg::ClearAll);
        assert_eq!(visible_ids(&app), vec!["i-1", "i-2"]);
    }

    #[test]
    fn test_refetch_keeps_stale_selection() {
        let mut app = loaded_app();
        app.dispatch_filter(FilterMsg::Select(Facet::Type, "RDS".to_string()));
        app.set_resources(vec![resource("i-9", "EC2", "us-east-1", "111", "prod")]);

        assert_eq!(app.filter.get(Facet::Type), Some("RDS"));
        assert!(visible_ids(&app).is_empty());
        assert_eq!(app.facet_values.get(Facet::Type), &["EC2"]);
    }

    #[test]
    fn test_failed_fetch_leaves_state_untouched() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.route = Route::List;
        let generation = app.generation;

        app.on_fetch_complete(FetchEvent {
            generation,
            result: Err(FetchError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        });

        assert!(app.resources.is_none());
        assert!(app.is_loading());
        assert!(app.fetch_error.is_none());
    }

    #[test]
    fn test_failed_fetch_surfaced_when_configured() {
        let config = Config {
            surface_fetch_errors: true,
            ..Config::default()
        };
        let mut app = App::new(client(), config, Route::Home);
        app.route = Route::List;
        let generation = app.generation;

        app.on_fetch_complete(FetchEvent {
            generation,
            result: Err(FetchError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
            }),
        });

        assert!(app.is_loading());
        assert!(app.fetch_error.as_deref().unwrap().contains("502"));
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.route = Route::List;
        let stale = app.generation;
        app.generation += 1;

        app.on_fetch_complete(FetchEvent {
            generation: stale,
            result: Ok(vec![resource("i-1", "EC2", "us-east-1", "111", "prod")]),
        });
        assert!(app.resources.is_none());
    }

    #[test]
    fn test_selector_choice() {
        let values = vec!["EC2".to_string(), "RDS".to_string()];

        let mut selector = FacetSelector::new(Facet::Type, &values, Some("RDS"));
        assert_eq!(selector.selected, 2);
        assert_eq!(
            selector.choice(),
            FilterMsg::Select(Facet::Type, "RDS".to_string())
        );

        selector.go_to_bottom();
        selector.next();
        assert_eq!(selector.selected, 2);

        selector.selected = 0;
        assert_eq!(selector.choice(), FilterMsg::Clear(Facet::Type));
    }

    #[test]
    fn test_selector_search_narrows() {
        let values = vec!["eu-west-1".to_string(), "us-east-1".to_string(), "us-west-2".to_string()];
        let mut selector = FacetSelector::new(Facet::Region, &values, None);
        selector.search_text = "WEST".to_string();
        selector.apply_search();
        assert_eq!(selector.filtered, vec!["eu-west-1", "us-west-2"]);
        assert_eq!(selector.option_count(), 3);
    }

    #[test]
    fn test_selector_search_keeps_highlighted_value() {
        let values = vec!["eu-west-1".to_string(), "us-east-1".to_string(), "us-west-2".to_string()];
        let mut selector = FacetSelector::new(Facet::Region, &values, Some("us-west-2"));
        assert_eq!(selector.selected, 3);

        selector.search_text = "west".to_string();
        selector.apply_search();
        assert_eq!(selector.selected, 2);
        assert_eq!(
            selector.choice(),
            FilterMsg::Select(Facet::Region, "us-west-2".to_string())
        );

        // Once the highlighted value is filtered out the cursor falls back to "(any)"
        selector.search_text = "eu".to_string();
        selector.apply_search();
        assert_eq!(selector.selected, 0);
        assert_eq!(selector.choice(), FilterMsg::Clear(Facet::Region));
    }

    #[test]
    fn test_detail_scroll_is_clamped() {
        let mut app = loaded_app();
        app.enter_detail_mode();
        app.set_detail_max_scroll(3);

        for _ in 0..20 {
            app.scroll_detail_down(1);
        }
        assert_eq!(app.detail_scroll, 3);
        app.scroll_detail_up(1);
        assert_eq!(app.detail_scroll, 2);

        app.scroll_detail_down(10);
        assert_eq!(app.detail_scroll, 3);

        // A taller viewport pulls the offset back
        app.set_detail_max_scroll(1);
        assert_eq!(app.detail_scroll, 1);
    }

    #[test]
    fn test_confirm_selector_dispatches() {
        let mut app = loaded_app();
        app.open_selector(Facet::Region);
        assert_eq!(app.mode, Mode::FacetSelect);

        if let Some(selector) = app.selector.as_mut() {
            selector.selected = 1; // us-east-1
        }
        app.confirm_selector();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.filter.get(Facet::Region), Some("us-east-1"));
        assert_eq!(visible_ids(&app), vec!["i-1"]);
    }

    #[test]
    fn test_selector_needs_data() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.open_selector(Facet::Type);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.selector.is_none());
    }

    #[test]
    fn test_column_filter_input() {
        let mut app = loaded_app();
        app.grid.focus_next_column(); // Type
        app.start_column_filter();
        assert!(app.column_filter_active);

        app.push_column_filter('r');
        app.push_column_filter('d');
        assert_eq!(visible_ids(&app), vec!["i-2"]);

        app.pop_column_filter();
        app.pop_column_filter();
        assert_eq!(visible_ids(&app), vec!["i-1", "i-2"]);

        app.push_column_filter('x');
        app.clear_column_filter();
        assert!(!app.column_filter_active);
        assert_eq!(visible_ids(&app), vec!["i-1", "i-2"]);
    }

    #[test]
    fn test_navigation_between_static_views() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.navigate(Route::Search);
        assert_eq!(app.route, Route::Search);

        app.command_text = "/nowhere".to_string();
        assert!(!app.execute_command());
        assert_eq!(app.route, Route::NotFound("/nowhere".to_string()));

        app.command_text = "/".to_string();
        app.execute_command();
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_unknown_command_sets_error() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.command_text = "frobnicate".to_string();
        assert!(!app.execute_command());
        assert_eq!(app.error_message.as_deref(), Some("Unknown command: frobnicate"));

        app.command_text = "quit".to_string();
        assert!(app.execute_command());
    }

    #[test]
    fn test_command_suggestions_prefix() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.enter_command_mode();
        app.command_text = "/l".to_string();
        app.update_command_suggestions();
        assert_eq!(app.command_suggestions, vec!["/list"]);
        assert_eq!(app.command_preview.as_deref(), Some("/list"));
    }

    #[tokio::test]
    async fn test_leaving_list_discards_collection() {
        let mut app = App::new(client(), Config::default(), Route::Home);
        app.navigate(Route::List);
        assert!(app.is_loading());
        assert!(app.fetch_in_flight);
        let mounted = app.generation;

        app.navigate(Route::Home);
        assert!(app.resources.is_none());
        assert!(!app.fetch_in_flight);
        assert_ne!(app.generation, mounted);
    }
}
