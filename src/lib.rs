//! pony-maze - Terminal client for the pony maze challenge
//!
//! Creates a maze on the remote service, fetches its state, draws the grid
//! and sends the pony's moves.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
