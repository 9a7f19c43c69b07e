use crate::components::collapsible::CollapsiblePanel;
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::content::{GLOSSARY, REFERENCES};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, GlossaryState};
use crate::util::styles::{HELP_COLOR, focused_block_with_help};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::Screen;

#[derive(Default)]
pub struct GlossaryScreen;

impl GlossaryScreen {
    pub fn new() -> Self {
        Self
    }

    /// Term headers with the definitions of expanded terms, and the line
    /// index of the selected header.
    fn term_lines(glossary: &GlossaryState) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut selected_line = 0;
        for (idx, (term, fold)) in GLOSSARY.iter().zip(&glossary.terms).enumerate() {
            let focused = idx == glossary.selected && !glossary.references_focused;
            if idx == glossary.selected {
                selected_line = lines.len();
            }
            lines.push(
                CollapsiblePanel::new(term.term, fold.expanded)
                    .focused(focused)
                    .header_line(),
            );
            if fold.expanded {
                lines.push(Line::from(format!("      {}", term.definition)));
                lines.push(Line::from(""));
            }
        }
        (lines, selected_line)
    }

    fn render_terms(&self, frame: &mut Frame, area: Rect, glossary: &GlossaryState) {
        let (lines, selected_line) = Self::term_lines(glossary);
        let visible = area.height.saturating_sub(2) as usize;
        let offset = calculate_centered_scroll(selected_line, lines.len(), visible);

        let block = focused_block_with_help(
            " Key Terms ",
            !glossary.references_focused,
            "[Space] Toggle [+] Expand all [-] Collapse all",
        );
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((offset as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_references(&self, frame: &mut Frame, area: Rect, glossary: &GlossaryState) {
        let panel = CollapsiblePanel::new("References", glossary.references.expanded)
            .focused(glossary.references_focused);
        if !glossary.references.expanded {
            panel.render_collapsed(frame, area);
            return;
        }

        let lines: Vec<Line> = REFERENCES
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled("  • ", Style::default().fg(HELP_COLOR)),
                    Span::raw(*r),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(panel.block())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl Component for GlossaryScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let kb = &state.keybindings;
        let glossary = &mut state.glossary_state;

        if KeybindingsConfig::matches(&key, &kb.navigation.next_panel)
            || KeybindingsConfig::matches(&key, &kb.navigation.prev_panel)
        {
            glossary.references_focused = !glossary.references_focused;
            return EventResult::Handled;
        }

        if glossary.references_focused {
            let handled = key
                .char()
                .is_some_and(|c| CollapsiblePanel::handle_collapse_key(c, &mut glossary.references));
            return if handled {
                EventResult::Handled
            } else {
                EventResult::NotHandled
            };
        }

        let total = glossary.terms.len();
        if handle_list_navigation(&key, kb, &mut glossary.selected, total) {
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &kb.widgets.toggle)
            || KeybindingsConfig::matches(&key, &kb.navigation.confirm)
        {
            glossary.toggle_selected();
        } else if KeybindingsConfig::matches(&key, &kb.widgets.increase) {
            glossary.expand_all();
        } else if KeybindingsConfig::matches(&key, &kb.widgets.decrease) {
            glossary.collapse_all();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let glossary = &state.glossary_state;
        let references_height = if glossary.references.expanded {
            REFERENCES.len() as u16 * 2 + 2
        } else {
            3
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(references_height)])
            .split(area);

        self.render_terms(frame, chunks[0], glossary);
        self.render_references(frame, chunks[1], glossary);
    }
}

impl Screen for GlossaryScreen {
    fn title(&self) -> &str {
        "Glossary"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    fn press(state: &mut AppState, code: KeyCode) {
        GlossaryScreen::new().handle_key(AppKeyEvent::new(code), state);
    }

    #[test]
    fn toggling_a_term_adds_its_definition() {
        let mut state = AppState::default();
        let (collapsed, _) = GlossaryScreen::term_lines(&state.glossary_state);
        assert_eq!(collapsed.len(), GLOSSARY.len());

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        let (lines, selected_line) = GlossaryScreen::term_lines(&state.glossary_state);
        assert_eq!(lines.len(), GLOSSARY.len() + 2);
        assert_eq!(selected_line, 1);

        press(&mut state, KeyCode::Char('-'));
        assert!(state.glossary_state.terms.iter().all(|t| !t.expanded));
        press(&mut state, KeyCode::Char('+'));
        assert!(state.glossary_state.terms.iter().all(|t| t.expanded));
    }

    #[test]
    fn references_panel_folds_independently() {
        let mut state = AppState::default();
        press(&mut state, KeyCode::Tab);
        assert!(state.glossary_state.references_focused);

        press(&mut state, KeyCode::Char('-'));
        assert!(!state.glossary_state.references.expanded);
        assert!(state.glossary_state.terms.iter().all(|t| !t.expanded));
    }
}
