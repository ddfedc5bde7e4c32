use crate::controllers::interactive::data::render_settings::{
    ANTI_ALIASING_RANGE, MAX_ITERATIONS_RANGE, RenderSettings, SCALING_RANGE,
};

/// Buttons pressed during one inspector frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectorActions {
    pub reset_view: bool,
    pub screenshot: bool,
    pub share_link: bool,
}

/// The egui panel exposing render settings and view actions.
pub struct Inspector {
    settings: RenderSettings,
    share_link: String,
    status: Option<String>,
    error: Option<String>,
}

impl Inspector {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            share_link: String::new(),
            status: None,
            error: None,
        }
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn set_share_link(&mut self, link: String) {
        self.share_link = link;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show(&mut self, ctx: &egui::Context) -> InspectorActions {
        let mut actions = InspectorActions::default();

        egui::Window::new("Inspector")
            .default_pos([10.0, 10.0])
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings.anti_aliasing, ANTI_ALIASING_RANGE)
                        .text("Anti-Aliasing"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.max_iterations, MAX_ITERATIONS_RANGE)
                        .text("Max. Iterations"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.scaling, SCALING_RANGE)
                        .logarithmic(true)
                        .text("Scaling"),
                );

                ui.separator();
                ui.horizontal(|ui| {
                    actions.reset_view = ui.button("Reset View").clicked();
                    actions.screenshot = ui.button("Screenshot").clicked();
                    actions.share_link = ui.button("Share Link").clicked();
                });

                if !self.share_link.is_empty() {
                    ui.text_edit_singleline(&mut self.share_link);
                }

                if let Some(status) = &self.status {
                    ui.label(status.as_str());
                }
                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error.as_str());
                }
            });

        actions
    }
}
