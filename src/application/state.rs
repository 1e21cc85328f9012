//! Application state for the terminal maze client.
//!
//! [`App`] owns the store, the service adapter and the little UI state the
//! terminal needs (current popup, help scroll, last status line).

use super::orchestration;
use super::store::{Store, TransportPolicy};
use crate::domain::{Dimensions, Direction, MazeSnapshot};
use crate::infrastructure::MazeApi;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Grid view, key bindings trigger service calls
    Normal,
    /// Help screen is displayed
    Help,
    /// Printed maze from the service is displayed
    Printout,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use pony_maze::application::{App, AppMode};
/// use pony_maze::infrastructure::HttpMazeApi;
///
/// let app = App::new(Box::new(HttpMazeApi::default()));
/// assert_eq!(app.mode, AppMode::Normal);
/// assert!(app.store.maze_id().is_none());
/// ```
pub struct App {
    /// Request containers and the game slot
    pub store: Store,
    api: Box<dyn MazeApi>,
    /// Size requested when creating a maze
    pub dimensions: Dimensions,
    /// Player name sent when creating a maze
    pub player_name: String,
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Last text returned by the print endpoint
    pub printout: Option<String>,
}

impl App {
    pub fn new(api: Box<dyn MazeApi>) -> Self {
        Self {
            store: Store::default(),
            api,
            dimensions: Dimensions::default(),
            player_name: "rarity".to_string(),
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            printout: None,
        }
    }

    pub fn with_settings(
        mut self,
        dimensions: Dimensions,
        player_name: impl Into<String>,
        transport_policy: TransportPolicy,
    ) -> Self {
        self.dimensions = dimensions;
        self.player_name = player_name.into();
        self.store.transport_policy = transport_policy;
        self
    }

    /// Snapshot the grid is drawn from.
    pub fn snapshot(&self) -> &MazeSnapshot {
        &self.store.maze_state.data
    }

    /// "Create Maze" control.
    pub fn create_maze(&mut self) {
        orchestration::create_maze(&mut self.store, self.api.as_ref(), self.dimensions, &self.player_name);
        self.status_message = Some(match self.store.maze_id() {
            Some(id) if !self.store.maze.loading && !self.store.maze.error => format!("Maze {id} created"),
            _ => "Create maze finished without a new maze".to_string(),
        });
    }

    /// "Get Maze" control.
    pub fn get_maze(&mut self) {
        let fetched = orchestration::get_maze(&mut self.store, self.api.as_ref());
        self.status_message = Some(if fetched.is_some() {
            "Maze state refreshed".to_string()
        } else {
            "Maze state unchanged".to_string()
        });
    }

    /// Sends a move and refreshes the grid when the move went through.
    pub fn move_pony(&mut self, direction: Direction) {
        match orchestration::move_pony(&mut self.store, self.api.as_ref(), direction) {
            Some(result) => {
                self.status_message = result.state_result.clone().or(result.state.clone());
                if self.store.maze_id().is_some() {
                    orchestration::get_maze(&mut self.store, self.api.as_ref());
                }
            }
            None => {
                self.status_message = Some(format!("Move {direction} not applied"));
            }
        }
    }

    /// Fetches the printable maze and opens it in a popup.
    pub fn print_maze(&mut self) {
        match orchestration::print_maze(&self.store, self.api.as_ref()) {
            Some(text) => {
                self.printout = Some(text);
                self.mode = AppMode::Printout;
                self.status_message = None;
            }
            None => {
                self.status_message = Some("Nothing to print".to_string());
            }
        }
    }

    /// Uses the created maze's id as the game id for move and print calls.
    pub fn adopt_maze_as_game(&mut self) {
        self.status_message = Some(match self.store.adopt_maze_as_game() {
            Some(id) => format!("Playing game {id}"),
            None => "Create a maze first".to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    /// Closes any popup and returns to the grid.
    pub fn close_popup(&mut self) {
        self.mode = AppMode::Normal;
    }
}
