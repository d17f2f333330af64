//! Modal form for creating or editing a record.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::UserFormState;
use crate::theme::{self, RollcallTheme};

/// The modal dialog. Field values come from [`UserFormState`] only; the
/// record a form was opened with is never consulted again after open.
pub fn view_user_form(form: &UserFormState) -> Element<'_, Message> {
    let title = if form.is_edit() { "Edit user" } else { "New user" };

    let fields = column![
        labeled_input(
            "Name",
            "Enter user name",
            &form.name,
            Message::NameChanged,
            false,
        ),
        labeled_input(
            "Email",
            "Enter email",
            &form.email,
            Message::EmailChanged,
            false,
        ),
        labeled_input(
            "Password",
            "Enter password",
            &form.password,
            Message::PasswordChanged,
            true,
        ),
    ]
    .spacing(15);

    let actions = row![
        Space::with_width(Length::Fill),
        button("Close")
            .style(theme::Button::Secondary.style())
            .padding([8, 14])
            .on_press(Message::CloseForm),
        Space::with_width(Length::Fixed(10.0)),
        button("Save")
            .style(theme::Button::Primary.style())
            .padding([8, 14])
            .on_press(Message::SubmitForm),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            text(title).size(20).color(RollcallTheme::TEXT_PRIMARY),
            fields,
            actions,
        ]
        .spacing(20),
    )
    .style(theme::Container::Modal.style())
    .padding(20)
    .width(Length::Fixed(420.0))
    .into()
}

fn labeled_input<'a>(
    label: &'a str,
    hint: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    secure: bool,
) -> Element<'a, Message> {
    column![
        text(label).size(14).color(RollcallTheme::TEXT_SECONDARY),
        text_input(hint, value)
            .on_input(on_input)
            .secure(secure)
            .padding(10)
            .size(16),
    ]
    .spacing(5)
    .into()
}
