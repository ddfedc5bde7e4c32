pub mod cpu_julia_renderer;
