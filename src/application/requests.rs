//! Loading/data/error containers for server interactions.
//!
//! Each category of request the client makes (creating a maze, reading its
//! state, moving the pony) gets one [`RequestState`] that is driven only by
//! the three [`Signal`] kinds below.

use serde_json::Value;

/// Event consumed by a single [`RequestState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<T> {
    /// A request has been issued.
    Request,
    /// The request succeeded with this payload.
    Success(T),
    /// The service rejected the request; carries its error body.
    Fail(Value),
}

impl<T> Signal<T> {
    pub fn request() -> Self {
        Signal::Request
    }

    pub fn success(data: T) -> Self {
        Signal::Success(data)
    }

    pub fn fail(error: Value) -> Self {
        Signal::Fail(error)
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Signal::Request => "REQUEST",
            Signal::Success(_) => "SUCCESS",
            Signal::Fail(_) => "FAIL",
        }
    }
}

/// Tracks one category of server interaction.
///
/// # Examples
///
/// ```
/// use pony_maze::application::{RequestState, Signal};
///
/// let mut state = RequestState::new(0);
/// state.reduce(Signal::request());
/// assert!(state.loading);
///
/// state.reduce(Signal::success(42));
/// assert!(!state.loading);
/// assert_eq!(state.data, 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub data: T,
    pub error: bool,
}

impl<T: Default> Default for RequestState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> RequestState<T> {
    /// Creates an idle container holding `initial` as its data.
    pub fn new(initial: T) -> Self {
        Self {
            loading: false,
            data: initial,
            error: false,
        }
    }

    /// Applies one signal.
    ///
    /// `Request` only raises `loading`. `Success` replaces the data and
    /// lowers `loading`. `Fail` raises `error`, lowers `loading` and keeps the
    /// previous data.
    pub fn reduce(&mut self, signal: Signal<T>) {
        match signal {
            Signal::Request => {
                self.loading = true;
            }
            Signal::Success(data) => {
                self.data = data;
                self.loading = false;
            }
            Signal::Fail(_) => {
                self.error = true;
                self.loading = false;
            }
        }
    }
}
