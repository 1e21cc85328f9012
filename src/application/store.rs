//! Aggregate state shared by orchestration and the view.

use super::requests::{RequestState, Signal};
use crate::domain::{MazeIdentity, MazeSnapshot, MoveResult};
use tracing::debug;

/// A signal addressed to one of the store's containers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Maze(Signal<MazeIdentity>),
    MazeState(Signal<MazeSnapshot>),
    NextMove(Signal<MoveResult>),
}

impl Action {
    fn target(&self) -> &'static str {
        match self {
            Action::Maze(_) => "maze",
            Action::MazeState(_) => "mazeState",
            Action::NextMove(_) => "nextMove",
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Action::Maze(signal) => signal.kind(),
            Action::MazeState(signal) => signal.kind(),
            Action::NextMove(signal) => signal.kind(),
        }
    }
}

/// What orchestration does when a call gets no response at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportPolicy {
    /// Log and dispatch nothing. A preceding `Request` leaves `loading` set.
    #[default]
    Swallow,
    /// Dispatch `Fail` on the originating container.
    DispatchFail,
}

/// Game identifier used by move and print calls.
///
/// Kept apart from the maze container's `maze_id`; it is only set when the
/// user explicitly adopts a maze as the current game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSlot {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub maze: RequestState<MazeIdentity>,
    pub maze_state: RequestState<MazeSnapshot>,
    pub next_move: RequestState<MoveResult>,
    pub game: GameSlot,
    pub transport_policy: TransportPolicy,
}

impl Store {
    pub fn with_policy(transport_policy: TransportPolicy) -> Self {
        Self {
            transport_policy,
            ..Self::default()
        }
    }

    /// Routes an action to the container it names. The other containers are
    /// not touched.
    pub fn dispatch(&mut self, action: Action) {
        debug!(container = action.target(), signal = action.kind(), "dispatch");
        match action {
            Action::Maze(signal) => self.maze.reduce(signal),
            Action::MazeState(signal) => self.maze_state.reduce(signal),
            Action::NextMove(signal) => self.next_move.reduce(signal),
        }
    }

    /// Current maze id, if a maze has been created.
    pub fn maze_id(&self) -> Option<&str> {
        self.maze.data.maze_id.as_deref()
    }

    /// Current game id used by move and print calls.
    pub fn game_id(&self) -> Option<&str> {
        self.game.id.as_deref()
    }

    /// Copies the created maze id into the game slot. Returns the adopted id.
    pub fn adopt_maze_as_game(&mut self) -> Option<String> {
        let id = self.maze.data.maze_id.clone()?;
        self.game.id = Some(id.clone());
        Some(id)
    }
}
