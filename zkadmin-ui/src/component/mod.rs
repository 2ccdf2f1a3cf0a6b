pub mod badge;
pub mod button;
pub mod card;
pub mod table;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// One pixel horizontal line.
pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new())
        .style(theme::container::rule)
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
}
