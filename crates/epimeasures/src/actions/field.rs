use super::ActionResult;
use crate::state::{AppState, TabId};
use epimeasures_core::parse_number;

/// Apply the typed text to a calculator field.
///
/// Text fields keep whatever was typed: an unparsable value leaves the
/// output pending rather than failing. Life-table death rates are numbers
/// only.
pub fn handle_edit_field(state: &mut AppState, tab: TabId, index: usize, value: &str) -> ActionResult {
    if tab == TabId::LifeExpectancy {
        return match parse_number(value) {
            Some(rate) => {
                state.life_expectancy_state.set_rate(index, rate);
                ActionResult::close()
            }
            None => ActionResult::error(format!("'{}' is not a valid death rate", value.trim())),
        };
    }

    match state.field_mut(tab, index) {
        Some(field) => {
            field.set_text(value);
            state.recompute(tab);
            ActionResult::close()
        }
        None => ActionResult::error(format!("{} has no field {index}", tab.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_text_leaves_output_pending() {
        let mut state = AppState::default();
        let result = handle_edit_field(&mut state, TabId::RateRisk, 0, "fifty");
        assert!(matches!(result, ActionResult::Done(None)));
        assert!(state.rate_risk_state.outcome.is_pending());
    }

    #[test]
    fn life_table_rates_must_be_numbers() {
        let mut state = AppState::default();
        let before = state.life_expectancy_state.groups[2].death_rate_per_thousand;
        let result = handle_edit_field(&mut state, TabId::LifeExpectancy, 2, "x");
        assert!(matches!(result, ActionResult::Error(_)));
        assert_eq!(state.life_expectancy_state.groups[2].death_rate_per_thousand, before);

        handle_edit_field(&mut state, TabId::LifeExpectancy, 2, "12.5");
        assert_eq!(state.life_expectancy_state.groups[2].death_rate_per_thousand, 12.5);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut state = AppState::default();
        let result = handle_edit_field(&mut state, TabId::Quiz, 0, "1");
        assert!(matches!(result, ActionResult::Error(_)));
    }
}
