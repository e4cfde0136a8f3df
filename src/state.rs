//! Everything the page renders, and the only way it changes.
//!
//! The board never mutates the DOM itself. It dispatches [`BoardAction`]s and
//! the reducer here decides what sticks: stale list responses and stale hide
//! timers are dropped on the floor.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::model::ActivityList;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(ActivityList),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Bumped by the board on every show; hide requests carry the epoch they
    /// were scheduled for.
    pub epoch: u64,
    pub kind: BannerKind,
    pub text: String,
    pub visible: bool,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            epoch: 0,
            kind: BannerKind::Success,
            text: String::new(),
            visible: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub list: ListState,
    /// Token of the newest list request; only its response is applied.
    pub latest_token: u64,
    pub form: SignupForm,
    pub banner: Banner,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            latest_token: 0,
            form: SignupForm::default(),
            banner: Banner::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    ListRequested { token: u64 },
    ListLoaded { token: u64, activities: ActivityList },
    ListFailed { token: u64 },
    ParticipantRemoved { activity: String, email: String },
    EmailEdited(String),
    ActivityChosen(String),
    FormCleared,
    ShowBanner { epoch: u64, kind: BannerKind, text: String },
    HideBanner { epoch: u64 },
}

impl Reducible for UiState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            BoardAction::ListRequested { token } => {
                next.latest_token = next.latest_token.max(token);
            }
            BoardAction::ListLoaded { token, activities } => {
                if token != next.latest_token {
                    log::debug!(
                        "dropping stale activity list #{token} (latest #{})",
                        next.latest_token
                    );
                    return self;
                }
                next.list = ListState::Ready(activities);
            }
            BoardAction::ListFailed { token } => {
                if token != next.latest_token {
                    log::debug!(
                        "dropping stale list failure #{token} (latest #{})",
                        next.latest_token
                    );
                    return self;
                }
                next.list = ListState::Failed;
            }
            BoardAction::ParticipantRemoved { activity, email } => {
                let removed = match &mut next.list {
                    ListState::Ready(list) => list
                        .get_mut(&activity)
                        .is_some_and(|a| a.remove_participant(&email)),
                    _ => false,
                };
                if !removed {
                    return self;
                }
            }
            BoardAction::EmailEdited(email) => next.form.email = email,
            BoardAction::ActivityChosen(activity) => next.form.activity = activity,
            BoardAction::FormCleared => next.form = SignupForm::default(),
            BoardAction::ShowBanner { epoch, kind, text } => {
                next.banner = Banner {
                    epoch,
                    kind,
                    text,
                    visible: true,
                };
            }
            BoardAction::HideBanner { epoch } => {
                if epoch != next.banner.epoch || !next.banner.visible {
                    return self;
                }
                next.banner.visible = false;
            }
        }

        Rc::new(next)
    }
}

/// Applies actions in order, as the Yew dispatcher would.
#[cfg(test)]
pub fn replay<'a>(actions: impl IntoIterator<Item = &'a BoardAction>) -> Rc<UiState> {
    actions
        .into_iter()
        .fold(Rc::new(UiState::default()), |state, action| state.reduce(action.clone()))
}
