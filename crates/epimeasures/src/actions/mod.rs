// Actions module - applies confirmed modal values to the widget state
//
// Each file handles the modal actions of one kind of input.

mod cohort;
mod field;
mod ypll;

pub use cohort::*;
pub use field::*;
pub use ypll::*;

use crate::state::{AppState, ModalAction, ModalState};

/// Result of an action handler
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message for the status bar
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }
}

/// Dispatch a confirmed modal value to its handler.
pub fn handle_modal_result(state: &mut AppState, action: ModalAction, value: &str) -> ActionResult {
    match action {
        ModalAction::EditField { tab, index } => handle_edit_field(state, tab, index, value),
        ModalAction::AddAge => handle_add_age(state, value),
        ModalAction::EditFollowUp { id } => handle_edit_follow_up(state, id, value),
    }
}

/// Install the modal an action asked for, or report its error.
pub fn apply_action_result(state: &mut AppState, result: ActionResult) {
    match result {
        ActionResult::Done(modal) => {
            state.modal = modal.unwrap_or(ModalState::None);
        }
        ActionResult::Error(msg) => {
            tracing::warn!(error = %msg, "modal action failed");
            state.set_error(msg);
            state.modal = ModalState::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TabId;

    #[test]
    fn error_result_closes_modal_and_sets_status() {
        let mut state = AppState::default();
        let result = handle_modal_result(
            &mut state,
            ModalAction::EditFollowUp { id: 1 },
            "soon",
        );
        apply_action_result(&mut state, result);
        assert!(matches!(state.modal, ModalState::None));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn confirmed_field_edit_recomputes() {
        let mut state = AppState::default();
        let result = handle_modal_result(
            &mut state,
            ModalAction::EditField {
                tab: TabId::Mortality,
                index: 0,
            },
            "20",
        );
        apply_action_result(&mut state, result);
        let summary = state.mortality_state.outcome.ready().copied().unwrap();
        assert!((summary.cfr - 0.1).abs() < 1e-12);
        assert!(state.error_message.is_none());
    }
}
