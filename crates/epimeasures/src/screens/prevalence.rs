use crate::components::charts::render_level;
use crate::components::field_list::slider_line;
use crate::components::lists::handle_panel_navigation;
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult, PanelNavigable};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, PrevalenceSlider, PrevalenceState, TabId};
use crate::util::format::{format_fixed, format_percent};
use crate::util::styles::{
    FORMULA_COLOR, HELP_COLOR, SERIES_A_COLOR, SERIES_B_COLOR, agreement_color, focused_block,
    focused_block_with_help, header_style,
};
use epimeasures_core::PrevalenceResult;
use epimeasures_core::descriptors::{DURATION_YEARS, INCIDENCE_PER_THOUSAND};
use epimeasures_core::measures::prevalence::duration_from_prevalence;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, error_line, outcome_lines, result_line, split_with_notes};

/// Rheumatoid arthritis: prevalence 1%, incidence 0.04% per year
const RA_PREVALENCE: f64 = 0.01;
const RA_INCIDENCE: f64 = 0.0004;

#[derive(Default)]
pub struct PrevalenceScreen;

impl PrevalenceScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_sliders(&self, frame: &mut Frame, area: Rect, prev: &PrevalenceState) {
        let width = (area.width as usize).saturating_sub(46).max(4);
        let lines = vec![
            slider_line(
                &INCIDENCE_PER_THOUSAND,
                prev.incidence,
                width,
                prev.focused == PrevalenceSlider::Incidence,
            ),
            slider_line(
                &DURATION_YEARS,
                prev.duration,
                width,
                prev.focused == PrevalenceSlider::Duration,
            ),
        ];
        let block = focused_block_with_help(
            " Bathtub model ",
            true,
            "[Tab] Slider [+/-] Adjust",
        );
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn result_lines(prev: &PrevalenceState) -> Vec<Line<'static>> {
        outcome_lines(&prev.outcome, |r: &PrevalenceResult| {
            let color = agreement_color(r.agreement);
            vec![
                result_line(
                    "Incidence (I)",
                    format!("{} per person-year", format_fixed(r.incidence_proportion, 4)),
                    Style::default(),
                ),
                result_line("I × D", format_fixed(r.id_product, 3), Style::default()),
                Line::from(""),
                Line::from(Span::styled(
                    "  Exact:  P = (I·D) / (1 + I·D)",
                    Style::default().fg(FORMULA_COLOR),
                )),
                result_line(
                    "Exact prevalence",
                    format_percent(r.exact, 2),
                    Style::default().fg(SERIES_A_COLOR),
                ),
                Line::from(Span::styled(
                    "  Approximation:  P ≈ I × D",
                    Style::default().fg(FORMULA_COLOR),
                )),
                result_line(
                    "Approximate prevalence",
                    format_percent(r.approx, 2),
                    Style::default().fg(SERIES_B_COLOR),
                ),
                Line::from(""),
                result_line(
                    "Difference",
                    format!(
                        "{} percentage points ({})",
                        format_fixed(r.difference * 100.0, 2),
                        r.agreement.label()
                    ),
                    Style::default().fg(color),
                ),
            ]
        })
    }

    fn example_lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("Worked example: rheumatoid arthritis", header_style())),
            Line::from(format!(
                "  P = {}, I = {} per year",
                format_percent(RA_PREVALENCE, 0),
                format_percent(RA_INCIDENCE, 2)
            )),
        ];
        match duration_from_prevalence(RA_PREVALENCE, RA_INCIDENCE) {
            Ok(duration) => lines.push(Line::from(Span::styled(
                format!("  D ≈ P / I = {} years", format_fixed(duration, 0)),
                Style::default().fg(FORMULA_COLOR),
            ))),
            Err(err) => lines.push(error_line(&err)),
        }
        lines
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, prev: &PrevalenceState) {
        let mut lines = Self::result_lines(prev);
        lines.push(Line::from(""));
        lines.extend(Self::example_lines());

        let paragraph = Paragraph::new(lines)
            .block(focused_block(" Prevalence ", false))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_tub(&self, frame: &mut Frame, area: Rect, prev: &PrevalenceState) {
        let block = focused_block(" Pool ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled("↓ new cases", Style::default().fg(HELP_COLOR))),
            chunks[0],
        );
        let level = prev.outcome.ready().map_or(0.0, PrevalenceResult::fill_level);
        render_level(frame, chunks[1], level / 100.0, SERIES_A_COLOR);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("↓ recovery/death  {level:.1}%"),
                Style::default().fg(HELP_COLOR),
            )),
            chunks[2],
        );
    }
}

impl Component for PrevalenceScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if handle_panel_navigation(&key, &state.keybindings, &mut state.prevalence_state.focused) {
            return EventResult::Handled;
        }

        let kb = &state.keybindings;
        if KeybindingsConfig::matches(&key, &kb.navigation.down)
            || KeybindingsConfig::matches(&key, &kb.navigation.up)
        {
            state.prevalence_state.focused = state.prevalence_state.focused.next();
            return EventResult::Handled;
        }

        let up = KeybindingsConfig::matches(&key, &kb.widgets.increase)
            || KeybindingsConfig::matches(&key, &kb.navigation.right);
        let down = KeybindingsConfig::matches(&key, &kb.widgets.decrease)
            || KeybindingsConfig::matches(&key, &kb.navigation.left);
        if up || down {
            state.prevalence_state.nudge(up);
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &kb.widgets.reset) {
            state.prevalence_state = PrevalenceState::default();
            return EventResult::Handled;
        }

        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let prev = &state.prevalence_state;
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::Prevalence, state.active_notes_scroll());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(main_area);
        self.render_sliders(frame, rows[0], prev);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(rows[1]);
        self.render_tub(frame, cols[0], prev);
        self.render_results(frame, cols[1], prev);
    }
}

impl Screen for PrevalenceScreen {
    fn title(&self) -> &str {
        "Prevalence"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn sliders_follow_focus() {
        let mut state = AppState::default();
        let mut screen = PrevalenceScreen::new();

        screen.handle_key(AppKeyEvent::new(KeyCode::Char('+')), &mut state);
        assert_eq!(state.prevalence_state.incidence, 5.5);

        screen.handle_key(AppKeyEvent::new(KeyCode::Tab), &mut state);
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('-')), &mut state);
        assert_eq!(state.prevalence_state.duration, 9.5);

        screen.handle_key(AppKeyEvent::new(KeyCode::Char('r')), &mut state);
        assert_eq!(state.prevalence_state.incidence, INCIDENCE_PER_THOUSAND.default);
    }

    #[test]
    fn rheumatoid_arthritis_duration() {
        let lines = PrevalenceScreen::example_lines();
        assert_eq!(text(&lines[2]), "  D ≈ P / I = 25 years");
    }
}
