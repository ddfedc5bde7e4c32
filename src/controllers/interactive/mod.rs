//! Interactive controller for real-time fractal rendering.
//!
//! This module provides the application layer for interactive exploration:
//! it owns the view, feeds input through the gesture reducer and drives the
//! renderer once per display refresh.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `GestureEvent`s and inspector edits from the host
//! - **Output**: `RendererPort` trait for drawing and reading back frames
//! - **Core**: Uses the view and gesture types from `core/`

pub mod capture;
pub mod controller;
pub mod data;
pub mod ports;

pub use capture::{CaptureError, CaptureResult, CaptureTicket};
pub use controller::{RenderLoopController, TickReport};
pub use data::render_settings::RenderSettings;
pub use ports::renderer::{RendererError, RendererPort};
