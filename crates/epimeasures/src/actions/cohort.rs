use super::ActionResult;
use crate::state::AppState;
use epimeasures_core::{ValidationError, parse_number};

/// Set a participant's follow-up to a typed number of years. Values outside
/// the slider range are clamped by the cohort.
pub fn handle_edit_follow_up(state: &mut AppState, id: u32, value: &str) -> ActionResult {
    match parse_number(value) {
        Some(years) if years >= 0.0 => {
            state.incidence_state.set_follow_up(id, years);
            ActionResult::close()
        }
        Some(_) => ActionResult::error(ValidationError::NegativeTime.to_string()),
        None => ActionResult::error(format!("'{}' is not a number of years", value.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_follow_up_updates_person_time() {
        let mut state = AppState::default();
        handle_edit_follow_up(&mut state, 1, "7");
        assert_eq!(state.incidence_state.summary.total_person_time, 18.0);
    }

    #[test]
    fn negative_follow_up_is_rejected() {
        let mut state = AppState::default();
        let result = handle_edit_follow_up(&mut state, 1, "-2");
        assert!(matches!(result, ActionResult::Error(msg) if msg == "Time cannot be negative."));
        assert_eq!(state.incidence_state.summary.total_person_time, 16.0);
    }
}
