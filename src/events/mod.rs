//! Event types exchanged across systems.
//!
//! Submodules:
//! - [`collision`] – collision notifications and the reactions that consume
//!   them

pub mod collision;
