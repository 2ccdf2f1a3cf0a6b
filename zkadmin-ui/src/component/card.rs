use iced::Length;

use crate::{component::text, theme, widget::*};

/// Card with a bold header and free content below it.
pub fn titled<'a, T: 'a>(title: &'a str, content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(20)
            .push(text::h3(title))
            .push(content),
    )
    .padding(25)
    .width(Length::Fill)
    .style(theme::card::simple)
}

pub fn section<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .width(Length::Fill)
        .style(theme::card::section)
}
