use super::ActionResult;
use crate::state::{AppState, MessageModal, ModalState};
use epimeasures_core::{ValidationError, parse_number};

/// Append an age at death to the YPLL list.
///
/// Rejected ages reopen as an error message so the list stays unchanged.
pub fn handle_add_age(state: &mut AppState, value: &str) -> ActionResult {
    let added = parse_number(value)
        .ok_or(ValidationError::InvalidAge)
        .and_then(|age| state.ypll_state.add_age(age));

    match added {
        Ok(()) => ActionResult::close(),
        Err(err) => ActionResult::modal(ModalState::Message(MessageModal::error(
            "Invalid Age",
            &err.to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_age_is_added_sorted() {
        let mut state = AppState::default();
        let result = handle_add_age(&mut state, "60");
        assert!(matches!(result, ActionResult::Done(None)));
        assert_eq!(state.ypll_state.ages.ages(), &[25.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn invalid_age_shows_message() {
        let mut state = AppState::default();
        for input in ["abc", "-4"] {
            match handle_add_age(&mut state, input) {
                ActionResult::Done(Some(ModalState::Message(m))) => {
                    assert!(m.is_error);
                    assert_eq!(m.message, "Please enter a valid, non-negative age.");
                }
                _ => panic!("expected an error message for {input}"),
            }
        }
        assert_eq!(state.ypll_state.ages.len(), 3);
    }
}
