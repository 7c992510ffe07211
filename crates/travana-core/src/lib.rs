//! Travana client core
//!
//! Models, state slices, async action plumbing and form rules for the
//! Travana trip planner. Nothing in here touches the DOM or the network;
//! the UI crate supplies the HTTP work and the browser bindings.

pub mod auth;
pub mod autosuggest;
pub mod category;
pub mod config;
pub mod endpoints;
pub mod entity;
pub mod error;
pub mod models;
pub mod request;
pub mod slices;
pub mod summary;
pub mod thunk;
pub mod thunks;
pub mod validation;

pub use error::ApiError;
pub use slices::{Action, AppState, Phase, Status};
pub use thunk::{Dispatcher, Thunk, ThunkOptions};
