// View construction tests
//
// Loading, error, and empty states must all build a widget tree without
// panicking; the modal must stack over the roster in both modes. Element
// construction is pure, so these run without a window.

mod common;

use common::{fresh_state, user};
use iced::Element;
use rollcall_app::message::Message;
use rollcall_app::state::{RosterLoad, UserFormState};
use rollcall_app::view::view;

#[test]
fn view_builds_for_every_load_state() {
    let mut state = fresh_state();

    // Loading placeholder, no rows.
    let element: Element<Message> = view(&state);
    drop(element);

    // Error placeholder renders the diagnostic without crashing.
    state.load = RosterLoad::Failed("connection refused".to_string());
    let element: Element<Message> = view(&state);
    drop(element);

    // Ready with an empty roster renders zero rows without error.
    state.load = RosterLoad::Ready;
    let element: Element<Message> = view(&state);
    drop(element);

    // Ready with records renders one row per record.
    state.roster.replace_all(vec![user(1, "Ana"), user(2, "Bea")]);
    let element: Element<Message> = view(&state);
    drop(element);
}

#[test]
fn view_builds_with_the_modal_open() {
    let mut state = fresh_state();
    state.load = RosterLoad::Ready;
    state.roster.replace_all(vec![user(1, "Ana")]);

    state.form = Some(UserFormState::blank());
    let element: Element<Message> = view(&state);
    drop(element);

    state.form = Some(UserFormState::for_record(&user(1, "Ana")));
    let element: Element<Message> = view(&state);
    drop(element);
}
