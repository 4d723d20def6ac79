//! Web layer for the journey planner.
//!
//! Provides HTTP endpoints for planning routes and for changing network
//! conditions (closing stations, suspending lines).

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
