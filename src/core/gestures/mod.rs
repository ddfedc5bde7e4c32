pub mod events;
pub mod limits;
pub mod reducer;
pub mod touch;

pub use events::GestureEvent;
pub use limits::GestureLimits;
pub use reducer::{GesturePhase, GestureReducer, GestureSession};
pub use touch::TouchTracker;
