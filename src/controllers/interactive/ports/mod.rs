//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and the rendering backend.

pub mod renderer;
