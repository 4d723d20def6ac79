//! Domain types for the journey planner.
//!
//! Stations and lines are shared handles carrying the mutable network
//! conditions (closures and suspensions). Segments and routes are plain
//! values built from them.

mod error;
mod line;
mod route;
mod segment;
mod station;

pub use error::DomainError;
pub use line::Line;
pub use route::{Route, Run};
pub use segment::Segment;
pub use station::Station;
