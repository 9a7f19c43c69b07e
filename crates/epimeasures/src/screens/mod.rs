pub mod fertility;
pub mod glossary;
pub mod incidence;
pub mod life_expectancy;
pub mod mortality;
pub mod overview;
pub mod prevalence;
pub mod quiz;
pub mod rate_risk;
pub mod ypll;

use epimeasures_core::{PLACEHOLDER, ValidationError};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::components::Component;
use crate::state::{AppState, ModalAction, ModalState, Outcome, TabId, TextInputModal};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Notes on the left, interactive widgets on the right.
pub(crate) fn split_with_notes(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Open the text input modal on calculator field `index` of `tab`.
pub(crate) fn open_field_editor(state: &mut AppState, tab: TabId, index: usize) {
    let Some(field) = state.field_mut(tab, index) else {
        return;
    };
    let prompt = format!("{} ({})", field.label, field.unit);
    let modal = TextInputModal::new(
        "Edit Value",
        &prompt,
        &field.text,
        ModalAction::EditField { tab, index },
    );
    state.modal = ModalState::TextInput(modal);
}

/// A labelled result value.
pub(crate) fn result_line(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {label}: ")),
        Span::styled(value, style.add_modifier(Modifier::BOLD)),
    ])
}

/// Lines for a derived output: the placeholder while inputs are incomplete,
/// the blocking message when they are invalid, `ready` otherwise.
pub(crate) fn outcome_lines<T>(
    outcome: &Outcome<T>,
    ready: impl FnOnce(&T) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    match outcome {
        Outcome::Pending => vec![Line::from(Span::styled(
            format!("  {PLACEHOLDER}"),
            Style::default().fg(HELP_COLOR),
        ))],
        Outcome::Invalid(err) => vec![error_line(err)],
        Outcome::Ready(value) => ready(value),
    }
}

pub(crate) fn error_line(err: &ValidationError) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {err}"),
        Style::default().fg(NEGATIVE_COLOR),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn outcome_lines_per_state() {
        let pending: Outcome<f64> = Outcome::Pending;
        assert_eq!(text(&outcome_lines(&pending, |_| vec![])[0]), "  ...");

        let invalid: Outcome<f64> = Outcome::Invalid(ValidationError::NegativeEvents);
        assert_eq!(
            text(&outcome_lines(&invalid, |_| vec![])[0]),
            "  Events cannot be negative."
        );

        let ready = Outcome::Ready(2.0);
        let lines = outcome_lines(&ready, |v| vec![Line::from(format!("{v}"))]);
        assert_eq!(text(&lines[0]), "2");
    }

    #[test]
    fn field_editor_opens_with_current_text() {
        let mut state = AppState::default();
        open_field_editor(&mut state, TabId::Mortality, 1);
        match &state.modal {
            ModalState::TextInput(modal) => {
                assert_eq!(modal.value, "200");
                assert_eq!(
                    modal.action,
                    ModalAction::EditField {
                        tab: TabId::Mortality,
                        index: 1
                    }
                );
            }
            other => panic!("unexpected modal {other:?}"),
        }

        state.modal = ModalState::None;
        open_field_editor(&mut state, TabId::Quiz, 0);
        assert!(matches!(state.modal, ModalState::None));
    }
}
