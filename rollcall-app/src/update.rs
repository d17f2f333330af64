//! Update handlers for the application messages.

use iced::Task;
use log::{debug, error, info, warn};
use rollcall_model::{User, UserDraft};

use crate::message::Message;
use crate::state::{MutationOutcome, RosterLoad, State, UserFormState};

/// Main message handler.
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    debug!("update: {}", message.name());

    match message {
        Message::LoadUsers => handle_load_users(state),
        Message::UsersLoaded(result) => handle_users_loaded(state, result),
        Message::OpenCreateForm => handle_open_create_form(state),
        Message::OpenEditForm(user) => handle_open_edit_form(state, user),
        Message::CloseForm => handle_close_form(state),
        Message::NameChanged(value) => handle_name_changed(state, value),
        Message::EmailChanged(value) => handle_email_changed(state, value),
        Message::PasswordChanged(value) => handle_password_changed(state, value),
        Message::SubmitForm => handle_submit_form(state),
        Message::UserAdded(result) => handle_user_added(state, result),
        Message::UserSaved(result) => handle_user_saved(state, result),
    }
}

fn handle_load_users(state: &mut State) -> Task<Message> {
    info!("Loading users from directory");
    state.load = RosterLoad::Loading;

    let directory = state.directory.clone();
    Task::perform(
        async move { directory.list_users().await.map_err(|e| e.to_string()) },
        Message::UsersLoaded,
    )
}

fn handle_users_loaded(state: &mut State, result: Result<Vec<User>, String>) -> Task<Message> {
    match result {
        Ok(users) => {
            info!("Loaded {} users", users.len());
            state.roster.replace_all(users);
            state.load = RosterLoad::Ready;
        }
        Err(diagnostic) => {
            error!("Failed to load users: {diagnostic}");
            state.load = RosterLoad::Failed(diagnostic);
        }
    }
    Task::none()
}

fn handle_open_create_form(state: &mut State) -> Task<Message> {
    // Always a fresh blank form; a previously abandoned open leaves nothing
    // behind.
    state.form = Some(UserFormState::blank());
    Task::none()
}

fn handle_open_edit_form(state: &mut State, user: User) -> Task<Message> {
    info!("Editing user {}", user.id);
    // One-shot synchronization: fields are copied from the record here, at
    // open, and never re-populated while the form stays up.
    state.form = Some(UserFormState::for_record(&user));
    Task::none()
}

fn handle_close_form(state: &mut State) -> Task<Message> {
    state.form = None;
    Task::none()
}

fn handle_name_changed(state: &mut State, value: String) -> Task<Message> {
    if let Some(form) = &mut state.form {
        form.name = value;
    } else {
        debug!("Name input with no open form, ignoring");
    }
    Task::none()
}

fn handle_email_changed(state: &mut State, value: String) -> Task<Message> {
    if let Some(form) = &mut state.form {
        form.email = value;
    } else {
        debug!("Email input with no open form, ignoring");
    }
    Task::none()
}

fn handle_password_changed(state: &mut State, value: String) -> Task<Message> {
    if let Some(form) = &mut state.form {
        form.password = value;
    } else {
        debug!("Password input with no open form, ignoring");
    }
    Task::none()
}

fn handle_submit_form(state: &mut State) -> Task<Message> {
    // Taking the form closes the modal and clears the currently-editing
    // record before the mutation resolves; the outcome only touches the
    // roster, never the form.
    let Some(form) = state.form.take() else {
        warn!("SubmitForm with no open form, ignoring");
        return Task::none();
    };

    let draft = UserDraft {
        name: form.name,
        email: form.email,
        password: form.password,
    };
    let directory = state.directory.clone();

    match form.editing {
        Some(id) => {
            info!("Submitting update for user {id}");
            Task::perform(
                async move {
                    directory
                        .update_user(id, draft)
                        .await
                        .map_err(|e| e.to_string())
                },
                Message::UserSaved,
            )
        }
        None => {
            info!("Submitting new user");
            Task::perform(
                async move { directory.add_user(draft).await.map_err(|e| e.to_string()) },
                Message::UserAdded,
            )
        }
    }
}

fn handle_user_added(state: &mut State, result: Result<User, String>) -> Task<Message> {
    match &result {
        Ok(user) => {
            info!("User {} created, merging into roster", user.id);
            state.roster.prepend(user.clone());
        }
        Err(diagnostic) => {
            // The modal closed at submission; by default the failure is only
            // logged. The hook below lets an embedder surface it.
            error!("Failed to create user: {diagnostic}");
        }
    }
    notify_mutation(state, MutationOutcome::Inserted(result));
    Task::none()
}

fn handle_user_saved(state: &mut State, result: Result<User, String>) -> Task<Message> {
    match &result {
        Ok(user) => {
            if state.roster.apply_update(user.clone()) {
                info!("User {} updated in place", user.id);
            } else {
                warn!("Update result for unknown user {}, ignoring", user.id);
            }
        }
        Err(diagnostic) => {
            error!("Failed to update user: {diagnostic}");
        }
    }
    notify_mutation(state, MutationOutcome::Updated(result));
    Task::none()
}

fn notify_mutation(state: &State, outcome: MutationOutcome) {
    if let Some(hook) = &state.on_mutation_result {
        hook(&outcome);
    }
}
