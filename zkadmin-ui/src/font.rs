use iced::{
    font::{Family, Stretch, Weight},
    Font,
};

// Shipped fonts are not bundled, the system sans-serif family is used instead.
pub const BOLD: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Bold,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const MEDIUM: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Medium,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const REGULAR: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Normal,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};
