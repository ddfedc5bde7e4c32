//! Input adapters for the Julia explorer.
//!
//! This module contains adapters that receive input from the windowing system
//! and translate it into gesture events and controller requests.

pub mod gui;
