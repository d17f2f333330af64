//! Application messages.

use rollcall_model::User;

/// Every event the update loop handles.
///
/// Results from async tasks arrive with errors already flattened to their
/// display strings, so messages stay `Clone` and renderable.
#[derive(Debug, Clone)]
pub enum Message {
    // Roster
    /// Fetch the roster from the directory endpoint.
    LoadUsers,
    /// Roster fetch finished.
    UsersLoaded(Result<Vec<User>, String>),

    // Form lifecycle
    /// Open the modal form empty, in create mode.
    OpenCreateForm,
    /// Open the modal form pre-populated from a record, in edit mode.
    OpenEditForm(User),
    /// Close the modal form, discarding any entered values.
    CloseForm,

    // Form fields
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),

    // Submission
    /// Submit the form; dispatches an insert or update mutation and closes
    /// the modal.
    SubmitForm,
    /// Insert mutation finished.
    UserAdded(Result<User, String>),
    /// Update mutation finished.
    UserSaved(Result<User, String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "LoadUsers",
            Self::UsersLoaded(_) => "UsersLoaded",
            Self::OpenCreateForm => "OpenCreateForm",
            Self::OpenEditForm(_) => "OpenEditForm",
            Self::CloseForm => "CloseForm",
            Self::NameChanged(_) => "NameChanged",
            Self::EmailChanged(_) => "EmailChanged",
            Self::PasswordChanged(_) => "PasswordChanged",
            Self::SubmitForm => "SubmitForm",
            Self::UserAdded(_) => "UserAdded",
            Self::UserSaved(_) => "UserSaved",
        }
    }
}
