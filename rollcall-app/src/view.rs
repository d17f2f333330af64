//! Root view composition.

use iced::Element;
use iced::widget::{center, opaque, stack};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views::{roster, user_form};

/// Roster underneath, modal form stacked on top while open.
pub fn view(state: &State) -> Element<'_, Message> {
    let base = roster::view_roster(state);

    match &state.form {
        Some(form) => {
            let dialog = user_form::view_user_form(form);
            // The scrim blocks interaction with the list; the modal closes
            // only through its own buttons.
            stack![
                base,
                opaque(center(opaque(dialog)).style(theme::Container::ModalOverlay.style())),
            ]
            .into()
        }
        None => base,
    }
}
