use iced::{
    widget::{checkbox, Space},
    Alignment, Length,
};

use zkadmin_ui::{
    component::{badge, button, card, table::Table, text::*},
    theme,
    widget::*,
};

use super::{
    asset::{format_value, Asset},
    message::Message,
    proof::ChosenFile,
    selection::Selection,
};

pub const TITLE: &str = "Admin (ZK)";

#[allow(clippy::too_many_arguments)]
pub fn wallet_status_view<'a>(
    button_label: &str,
    is_active: bool,
    total_value: u64,
    wallet_address: &str,
    assets: &'a [Asset],
    selection: &'a Selection,
    chosen_file: &'a ChosenFile,
) -> Element<'a, Message> {
    card::titled(
        TITLE,
        Column::new()
            .spacing(25)
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .spacing(10)
                    .push(button::primary(None, button_label).on_press(Message::Connect))
                    .push_maybe(if is_active {
                        Some(button::secondary(None, "Disconnect").on_press(Message::Disconnect))
                    } else {
                        None
                    })
                    .push(Space::with_width(Length::Fill))
                    .push(badge::badge_pill("ZK")),
            )
            .push(h3(format!("Inheritable total: {}", format_value(total_value))))
            .push(h5_medium(format!("Wallet address: {}", wallet_address)))
            .push(assets_table(assets, selection))
            .push(proof_section(chosen_file)),
    )
    .max_width(700.0)
    .into()
}

fn assets_table<'a>(assets: &'a [Asset], selection: &'a Selection) -> Element<'a, Message> {
    let widths = vec![
        Length::Fixed(30.0),
        Length::FillPortion(2),
        Length::FillPortion(1),
        Length::FillPortion(1),
        Length::FillPortion(1),
    ];
    let header: Vec<Element<'a, Message>> = vec![
        checkbox("", selection.is_all_selected(assets.len()))
            .on_toggle(|_| Message::SelectAll)
            .into(),
        p1_bold("Asset").style(theme::text::secondary).into(),
        p1_bold("Type").style(theme::text::secondary).into(),
        p1_bold("Balance").style(theme::text::secondary).into(),
        p1_bold("Value").style(theme::text::secondary).into(),
    ];
    assets
        .iter()
        .enumerate()
        .fold(Table::new(widths).header(header), |table, (i, asset)| {
            table.push(vec![
                checkbox("", selection.contains(i))
                    .on_toggle(move |_| Message::SelectAsset(i))
                    .into(),
                p1_regular(&asset.name).into(),
                p1_regular(asset.kind).into(),
                p1_regular(&asset.balance).into(),
                p1_regular(format_value(asset.value)).into(),
            ])
        })
        .into()
}

fn proof_section(chosen_file: &ChosenFile) -> Container<'_, Message> {
    card::section(
        Column::new()
            .spacing(10)
            .push(h5_medium("Prepare your secret information in advance."))
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        button::primary(None, "Generate ZK proof")
                            .on_press(Message::ChooseProofFile),
                    )
                    .push(p2_regular(chosen_file.label()).style(theme::text::secondary)),
            ),
    )
}
