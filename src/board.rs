//! The activity board controller.
//!
//! [`ActivityBoard`] runs the three user-facing flows (load, signup,
//! unregister) against an injected [`ActivityApi`] and reports every outcome
//! to a [`BoardHost`] as [`BoardAction`]s. It holds no DOM handles.

use std::cell::Cell;

use crate::api::{ActivityApi, Reply};
use crate::config::BannerTimings;
use crate::state::{BannerKind, BoardAction};

const SIGNUP_REJECTED: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_REJECTED: &str = "Failed to unregister";
const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// What the board needs from the page it runs in.
pub trait BoardHost {
    fn dispatch(&self, action: BoardAction);

    /// Blocking yes/no question to the user.
    fn confirm(&self, prompt: &str) -> bool;

    /// Hide the banner shown at `epoch` after `delay_ms`, replacing any
    /// pending hide.
    fn schedule_hide(&self, epoch: u64, delay_ms: u32);

    fn cancel_hide(&self);
}

pub fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Unregister {email} from \"{activity}\"?")
}

pub struct ActivityBoard<A, H> {
    api: A,
    host: H,
    timings: BannerTimings,
    load_token: Cell<u64>,
    banner_epoch: Cell<u64>,
}

impl<A: ActivityApi, H: BoardHost> ActivityBoard<A, H> {
    pub fn new(api: A, host: H, timings: BannerTimings) -> Self {
        Self {
            api,
            host,
            timings,
            load_token: Cell::new(0),
            banner_epoch: Cell::new(0),
        }
    }

    pub async fn load_activities(&self) {
        let token = self.load_token.get() + 1;
        self.load_token.set(token);
        self.host.dispatch(BoardAction::ListRequested { token });

        match self.api.list_activities().await {
            Ok(activities) => {
                log::debug!("list #{token}: {} activities", activities.len());
                self.host.dispatch(BoardAction::ListLoaded { token, activities });
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.host.dispatch(BoardAction::ListFailed { token });
            }
        }
    }

    pub async fn submit_signup(&self, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(Reply::Accepted { message }) => {
                self.host.dispatch(BoardAction::FormCleared);
                self.load_activities().await;
                self.show(BannerKind::Success, message, Some(self.timings.signup_ms));
            }
            Ok(Reply::Rejected { status, detail }) => {
                log::warn!("signup of {email} for {activity} rejected: HTTP {status}");
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED.to_string());
                self.show(BannerKind::Error, text, Some(self.timings.signup_ms));
            }
            Err(e) => {
                log::error!("Error signing up: {e}");
                self.show(
                    BannerKind::Error,
                    SIGNUP_FAILED.to_string(),
                    self.timings.sticky_error_ms,
                );
            }
        }
    }

    /// Returns false when nothing was sent: a blank activity or email, or the
    /// user declined the confirmation.
    pub async fn submit_unregister(&self, activity: &str, email: &str) -> bool {
        if activity.is_empty() || email.is_empty() {
            return false;
        }
        if !self.host.confirm(&unregister_prompt(activity, email)) {
            return false;
        }

        match self.api.unregister(activity, email).await {
            Ok(Reply::Accepted { message }) => {
                self.host.dispatch(BoardAction::ParticipantRemoved {
                    activity: activity.to_string(),
                    email: email.to_string(),
                });
                self.show(BannerKind::Success, message, Some(self.timings.unregister_ms));
            }
            Ok(Reply::Rejected { status, detail }) => {
                log::warn!("unregister of {email} from {activity} rejected: HTTP {status}");
                let text = detail.unwrap_or_else(|| UNREGISTER_REJECTED.to_string());
                self.show(BannerKind::Error, text, self.timings.sticky_error_ms);
            }
            Err(e) => {
                log::error!("Error unregistering participant: {e}");
                self.show(
                    BannerKind::Error,
                    UNREGISTER_FAILED.to_string(),
                    self.timings.sticky_error_ms,
                );
            }
        }
        true
    }

    fn show(&self, kind: BannerKind, text: String, hide_after: Option<u32>) {
        let epoch = self.banner_epoch.get() + 1;
        self.banner_epoch.set(epoch);
        self.host.dispatch(BoardAction::ShowBanner { epoch, kind, text });

        match hide_after {
            Some(ms) => self.host.schedule_hide(epoch, ms),
            None => self.host.cancel_hide(),
        }
    }
}
