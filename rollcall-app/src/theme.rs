//! Dark theme with a single accent color.

use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Color palette and theme constructor.
#[derive(Debug, Clone, Copy)]
pub struct RollcallTheme;

impl RollcallTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.07, 0.09);
    pub const CARD_BG: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.22, 0.22, 0.25);

    pub const ACCENT: Color = Color::from_rgb(0.20, 0.45, 0.95);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.28, 0.53, 1.0);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.70, 0.70, 0.72);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.50, 0.50, 0.52);

    pub const ERROR: Color = Color::from_rgb(1.0, 0.30, 0.30);

    /// Backdrop behind the modal form.
    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.danger = Self::ERROR;

        Theme::custom("Rollcall Dark".to_string(), palette)
    }
}

/// Container styles using closures.
#[derive(Debug)]
pub enum Container {
    Card,
    Modal,
    ModalOverlay,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(RollcallTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RollcallTheme::CARD_BG)),
                border: Border {
                    color: RollcallTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Modal => |_| container::Style {
                text_color: Some(RollcallTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RollcallTheme::CARD_BG)),
                border: Border {
                    color: RollcallTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 24.0,
                },
            },
            Container::ModalOverlay => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(RollcallTheme::SCRIM)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
        }
    }
}

/// Button styles using closures.
#[derive(Debug)]
pub enum Button {
    Primary,
    Secondary,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered => RollcallTheme::ACCENT_HOVER,
                    _ => RollcallTheme::ACCENT,
                };

                button::Style {
                    text_color: RollcallTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Secondary => |_, status| {
                let background = match status {
                    button::Status::Hovered => RollcallTheme::BORDER_COLOR,
                    _ => RollcallTheme::CARD_BG,
                };

                button::Style {
                    text_color: RollcallTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: RollcallTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}
