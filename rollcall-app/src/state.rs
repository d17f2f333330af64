//! Application state.

use std::sync::Arc;

use rollcall_client::UserDirectoryService;
use rollcall_model::{User, UserId};

use crate::store::UserStore;

/// Three-state projection of the roster fetch.
#[derive(Debug, Clone, Default)]
pub enum RosterLoad {
    /// A fetch is in flight and nothing has been shown yet.
    #[default]
    Loading,
    /// The last fetch failed; the diagnostic is rendered as-is.
    Failed(String),
    /// The roster in [`UserStore`] is current.
    Ready,
}

/// Local state of the modal form, one field per input.
///
/// Fields are populated exactly once, when the form is opened: empty for
/// create mode, copied from the supplied record for edit mode. Nothing
/// re-synchronizes them afterwards, so in-progress edits are never
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct UserFormState {
    /// `Some` in edit mode, carrying the identifier the update mutation
    /// will target. `None` in create mode.
    pub editing: Option<UserId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserFormState {
    /// An empty create-mode form.
    pub fn blank() -> Self {
        Self::default()
    }

    /// An edit-mode form populated from a record.
    pub fn for_record(user: &User) -> Self {
        Self {
            editing: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }
}

/// Outcome of one mutation, as seen by the [`MutationHook`].
///
/// The default contract swallows mutation failures (the modal has already
/// closed); embedders that want stricter handling observe outcomes here.
#[derive(Debug, Clone)]
pub enum MutationOutcome {
    Inserted(Result<User, String>),
    Updated(Result<User, String>),
}

/// Observer invoked after every mutation result is applied.
pub type MutationHook = Arc<dyn Fn(&MutationOutcome) + Send + Sync>;

/// Root application state.
pub struct State {
    /// Directory service, injected once at boot.
    pub directory: Arc<dyn UserDirectoryService>,
    /// The single client-side cache of fetched records.
    pub roster: UserStore,
    /// Current fetch state driving the list view.
    pub load: RosterLoad,
    /// `Some` while the modal form is open.
    pub form: Option<UserFormState>,
    /// Optional observer for mutation outcomes.
    pub on_mutation_result: Option<MutationHook>,
}

impl State {
    /// Fresh state around an injected directory service.
    pub fn new(directory: Arc<dyn UserDirectoryService>) -> Self {
        Self {
            directory,
            roster: UserStore::new(),
            load: RosterLoad::Loading,
            form: None,
            on_mutation_result: None,
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("roster", &self.roster)
            .field("load", &self.load)
            .field("form", &self.form)
            .field("has_mutation_hook", &self.on_mutation_result.is_some())
            .finish_non_exhaustive()
    }
}
