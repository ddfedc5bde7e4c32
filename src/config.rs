use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::core::gestures::limits::GestureLimits;
use crate::core::view::share_link::ShareState;
use crate::core::view::view_state::ViewState;

/// Everything needed to start an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerConfig {
    pub view: ViewState,
    pub settings: RenderSettings,
    pub gestures: GestureLimits,
}

impl ExplorerConfig {
    /// Seeds the initial view from a share link or bare query string.
    /// Unreadable fields keep their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            view: ShareState::parse(query).into(),
            ..Self::default()
        }
    }
}
