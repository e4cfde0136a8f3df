use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use yew::functional::UseReducerDispatcher;

use crate::board::BoardHost;
use crate::state::{BoardAction, UiState};

/// At most one pending task. Arming drops the previous task, and dropping a
/// gloo `Timeout` cancels it.
struct PendingSlot<T>(RefCell<Option<T>>);

impl<T> PendingSlot<T> {
    fn new() -> Self {
        Self(RefCell::new(None))
    }

    fn arm(&self, task: T) {
        let previous = self.0.replace(Some(task));
        drop(previous);
    }

    fn disarm(&self) {
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Runs the board inside the Yew app: actions go to the reducer, confirms to
/// `window.confirm`, hides to a single gloo timeout slot.
pub struct BrowserHost {
    dispatcher: UseReducerDispatcher<UiState>,
    hide_timer: PendingSlot<Timeout>,
}

impl BrowserHost {
    pub fn new(dispatcher: UseReducerDispatcher<UiState>) -> Self {
        Self {
            dispatcher,
            hide_timer: PendingSlot::new(),
        }
    }
}

impl BoardHost for BrowserHost {
    fn dispatch(&self, action: BoardAction) {
        self.dispatcher.dispatch(action);
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn schedule_hide(&self, epoch: u64, delay_ms: u32) {
        let dispatcher = self.dispatcher.clone();
        self.hide_timer.arm(Timeout::new(delay_ms, move || {
            dispatcher.dispatch(BoardAction::HideBanner { epoch });
        }));
    }

    fn cancel_hide(&self) {
        self.hide_timer.disarm();
    }
}
