//! Astrodeck - Celestial Observation Dashboard
//!
//! A library crate exposing the dashboard's catalog, view state, and
//! interaction components for testing and integration purposes.

pub mod catalog;
pub mod engine;
pub mod interaction;
pub mod search;
pub mod telemetry;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
