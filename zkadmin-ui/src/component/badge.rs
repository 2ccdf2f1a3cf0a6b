use iced::Length;

use crate::{component::text, theme, widget::*};

/// Small rounded label, used for static markers next to titles.
pub fn badge_pill<'a, T: 'a>(label: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(label))
        .padding([4, 12])
        .center_x(Length::Shrink)
        .style(theme::pill::simple)
}
