//! Roster list view.

use iced::widget::{Space, Text, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use rollcall_model::User;

use crate::message::Message;
use crate::state::{RosterLoad, State};
use crate::theme::{self, RollcallTheme};

/// The list surface: header bar plus one row per record, or a placeholder
/// while the roster is loading or failed.
pub fn view_roster(state: &State) -> Element<'_, Message> {
    let header = container(
        row![
            text("User list")
                .size(22)
                .color(RollcallTheme::TEXT_PRIMARY),
            Space::with_width(Length::Fill),
            button("New user")
                .style(theme::Button::Primary.style())
                .padding([8, 14])
                .on_press(Message::OpenCreateForm),
        ]
        .align_y(Alignment::Center),
    )
    .style(theme::Container::Card.style())
    .padding(16)
    .width(Length::Fill);

    let body: Element<'_, Message> = match &state.load {
        RosterLoad::Loading => placeholder(
            text("Loading...")
                .size(16)
                .color(RollcallTheme::TEXT_SECONDARY),
        ),
        RosterLoad::Failed(diagnostic) => placeholder(
            text(format!("Error {diagnostic}"))
                .size(16)
                .color(RollcallTheme::ERROR),
        ),
        RosterLoad::Ready => scrollable(
            container(column(state.roster.users().iter().map(user_row)).spacing(8))
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into(),
    };

    container(column![header, body].spacing(12).padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn placeholder(content: Text<'_>) -> Element<'_, Message> {
    container(content)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}

fn user_row(user: &User) -> Element<'_, Message> {
    // The secret value is served in cleartext and shown as-is.
    let fields = column![
        field_line("User name", &user.name),
        field_line("Email", &user.email),
        field_line("Password", &user.password),
    ]
    .spacing(4)
    .width(Length::Fill);

    container(
        row![
            fields,
            button("Edit")
                .style(theme::Button::Secondary.style())
                .padding([6, 10])
                .on_press(Message::OpenEditForm(user.clone())),
        ]
        .align_y(Alignment::Center)
        .spacing(10),
    )
    .style(theme::Container::Card.style())
    .padding([10, 12])
    .width(Length::Fill)
    .into()
}

fn field_line<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(label).size(14).color(RollcallTheme::TEXT_SECONDARY),
        text(value).size(16),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
