//! Journey planner using depth-first search.
//!
//! This module answers "how can I get from here to there?" on a
//! [`SubwayMap`](crate::network::SubwayMap): it enumerates every route that
//! doesn't revisit a station, drops routes made invalid by suspended lines
//! or closed interchanges, and ranks what is left.

mod config;
mod rank;
mod search;


pub use config::SearchConfig;
pub use rank::{Optimise, UnknownOptimise, rank_routes};
