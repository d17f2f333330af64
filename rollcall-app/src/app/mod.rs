//! Application assembly: settings, theme, and the iced runtime wiring.

use iced::Settings;

use crate::theme::RollcallTheme;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Rollcall", update::update, view::view)
        .settings(default_settings())
        .theme(|_| RollcallTheme::theme())
        .window(iced::window::Settings {
            size: iced::Size::new(900.0, 640.0),
            min_size: Some(iced::Size::new(480.0, 360.0)),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("rollcall".to_string());
    settings.antialiasing = true;
    settings
}
