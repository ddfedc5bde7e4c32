pub mod generate_pixel_buffer;
