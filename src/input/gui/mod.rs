//! GUI input adapter for interactive Julia exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the inspector panel.

pub mod app;
pub mod commands;
