pub mod errors;
pub mod gui_app;
pub mod inspector;
pub mod ports;
pub mod winit_input;
