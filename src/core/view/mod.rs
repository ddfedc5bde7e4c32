pub mod coordinate_mapper;
pub mod share_link;
pub mod view_state;

pub use coordinate_mapper::screen_to_plane;
pub use share_link::ShareState;
pub use view_state::{MIN_ZOOM_SIZE, ViewState};
