//! Operations that drive the store through the maze service.
//!
//! Each function dispatches its signals around a single adapter call. None of
//! them retries or returns an error to the caller: failures end up in the
//! store, in the log, or both.

use super::requests::Signal;
use super::store::{Action, Store, TransportPolicy};
use crate::domain::{ApiError, Dimensions, Direction, MazeSnapshot, MoveResult, RawMazeSnapshot};
use crate::infrastructure::MazeApi;
use serde_json::Value;
use tracing::{info, warn};

/// Creates a maze and stores its identity in the maze container.
///
/// A server error becomes `Fail` with the service's body. A call with no
/// response is handed to the store's [`TransportPolicy`].
pub fn create_maze(store: &mut Store, api: &dyn MazeApi, dimensions: Dimensions, player_name: &str) {
    store.dispatch(Action::Maze(Signal::request()));
    match api.create_maze(dimensions, player_name) {
        Ok(identity) => {
            info!(maze_id = ?identity.maze_id, "maze created");
            store.dispatch(Action::Maze(Signal::success(identity)));
        }
        Err(ApiError::Server { status, body }) => {
            warn!(status, %body, "maze creation rejected");
            store.dispatch(Action::Maze(Signal::fail(body)));
        }
        Err(err) => {
            if let Some(body) = transport_failure(store.transport_policy, &err) {
                store.dispatch(Action::Maze(Signal::fail(body)));
            }
        }
    }
}

/// Fetches the current maze and stores it in the mazeState container.
///
/// Returns the snapshot as the service sent it. Failures are logged and no
/// `Fail` is dispatched.
pub fn get_maze(store: &mut Store, api: &dyn MazeApi) -> Option<RawMazeSnapshot> {
    let Some(maze_id) = store.maze_id().map(str::to_string) else {
        warn!(error = %ApiError::MissingMazeId, "cannot fetch maze");
        return None;
    };
    match api.get_maze(&maze_id) {
        Ok(raw) => {
            info!(%maze_id, "maze state fetched");
            store.dispatch(Action::MazeState(Signal::success(MazeSnapshot::from(raw.clone()))));
            Some(raw)
        }
        Err(err) => {
            log_swallowed("get maze", &err);
            None
        }
    }
}

/// Moves the pony in the game named by the game slot.
///
/// The reply lands in the nextMove container and is returned. No `Request`
/// is dispatched, so a swallowed transport error cannot leave the container
/// loading.
pub fn move_pony(store: &mut Store, api: &dyn MazeApi, direction: Direction) -> Option<MoveResult> {
    let Some(game_id) = store.game_id().map(str::to_string) else {
        warn!(error = %ApiError::MissingGameId, %direction, "cannot move pony");
        return None;
    };
    match api.move_pony(&game_id, direction) {
        Ok(result) => {
            info!(%game_id, %direction, state = ?result.state, "pony moved");
            store.dispatch(Action::NextMove(Signal::success(result.clone())));
            Some(result)
        }
        Err(ApiError::Server { status, body }) => {
            warn!(status, %body, "move rejected");
            store.dispatch(Action::NextMove(Signal::fail(body)));
            None
        }
        Err(err) => {
            if let Some(body) = transport_failure(store.transport_policy, &err) {
                store.dispatch(Action::NextMove(Signal::fail(body)));
            }
            None
        }
    }
}

/// Fetches the printable maze for the current game, logging it.
pub fn print_maze(store: &Store, api: &dyn MazeApi) -> Option<String> {
    let Some(game_id) = store.game_id() else {
        warn!(error = %ApiError::MissingGameId, "cannot print maze");
        return None;
    };
    match api.print_maze(game_id) {
        Ok(text) => {
            info!(%game_id, "printed maze:\n{text}");
            Some(text)
        }
        Err(err) => {
            log_swallowed("print maze", &err);
            None
        }
    }
}

fn log_swallowed(operation: &str, err: &ApiError) {
    match err.server_body() {
        Some(body) => warn!(operation, %body, "maze service error"),
        None => warn!(operation, error = %err, "maze service unreachable"),
    }
}

/// Applies the transport policy. Returns the body to dispatch as `Fail`, if
/// any.
fn transport_failure(policy: TransportPolicy, err: &ApiError) -> Option<Value> {
    match policy {
        TransportPolicy::Swallow => {
            warn!(error = %err, "no response from maze service; leaving state as is");
            None
        }
        TransportPolicy::DispatchFail => {
            warn!(error = %err, "no response from maze service");
            Some(Value::String(err.to_string()))
        }
    }
}
