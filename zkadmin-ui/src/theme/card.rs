use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: radius.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: radius.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple, 25.0)
}

/// Inner block of a card, less rounded than the card itself.
pub fn section(theme: &Theme) -> Style {
    card(&theme.colors.cards.section, 8.0)
}
