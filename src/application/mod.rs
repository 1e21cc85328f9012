//! Application layer managing state and service workflows.
//!
//! This module holds the request containers, the aggregate store, the
//! orchestration functions that talk to the maze service and the
//! top-level application state the terminal UI renders.

pub mod requests;
pub mod store;
pub mod orchestration;
pub mod state;

pub use requests::*;
pub use store::*;
pub use state::*;
