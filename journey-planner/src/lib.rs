//! Subway journey planner.
//!
//! Models a small transit network of stations joined by timed segments on
//! named lines, and answers: "what are all the ways from here to there,
//! given which stations are closed and which lines are suspended?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
