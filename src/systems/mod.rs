//! Engine systems.
//!
//! Each system is a stateless per-frame pass over one or more of the
//! storage's component indices, invoked by the driver in a fixed order:
//! input, position, camera, render, collision.
//!
//! Submodules overview:
//! - [`camera`] – smooth the camera toward its target and expose the view transform
//! - [`collision`] – pairwise AABB detection and reaction dispatch
//! - [`input`] – translate the key snapshot into velocity on the controlled entity
//! - [`position`] – integrate positions from velocities and frame time
//! - [`render`] – hand sprite draw data to the rendering backend

pub mod camera;
pub mod collision;
pub mod input;
pub mod position;
pub mod render;
