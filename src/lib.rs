//! Courtside - Career Statistics Dashboard
//!
//! Loads a player's per-season, career and per-team CSV tables and renders
//! them as an egui dashboard.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod session;
pub mod stats;
