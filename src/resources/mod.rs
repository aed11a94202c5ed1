//! Shared state supplied to systems by the frame driver.
//!
//! Submodules overview:
//! - [`gameconfig`] – INI-backed window and camera settings
//! - [`input`] – per-frame logical key snapshot from the input device
//! - [`tilemap`] – map data handed over by the map-asset loader
//! - [`worldtime`] – elapsed and per-frame delta time

pub mod gameconfig;
pub mod input;
pub mod tilemap;
pub mod worldtime;
