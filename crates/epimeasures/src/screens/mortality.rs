use crate::components::charts::bar;
use crate::components::field_list::{FieldList, FieldRow};
use crate::components::lists::handle_list_navigation;
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, MortalitySummary, TabId, summarize_mortality};
use crate::util::format::{format_count, format_fixed, format_per, format_percent};
use crate::util::styles::{
    FORMULA_COLOR, HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, SERIES_A_COLOR, focused_block,
    header_style,
};
use epimeasures_core::measures::mortality::{DeathBreakdown, proportional_mortality_populations};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, error_line, open_field_editor, outcome_lines, result_line, split_with_notes};

/// Outbreak example: 16 deaths among 400 cases in a city of 2 million
const OUTBREAK: (f64, f64, f64) = (16.0, 400.0, 2_000_000.0);

#[derive(Default)]
pub struct MortalityScreen;

impl MortalityScreen {
    pub fn new() -> Self {
        Self
    }

    fn summary_lines(summary: &MortalitySummary) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "  CFR = deaths / cases × 100%",
                Style::default().fg(FORMULA_COLOR),
            )),
            result_line(
                "Case fatality rate",
                format_percent(summary.cfr, 1),
                Style::default().fg(NEGATIVE_COLOR),
            ),
            result_line(
                "Survival among cases",
                format_percent(summary.survival, 1),
                Style::default().fg(POSITIVE_COLOR),
            ),
            result_line(
                "Cause-specific mortality",
                format_per(summary.mortality_per_100k, 2, 100_000.0),
                Style::default().fg(SERIES_A_COLOR),
            ),
        ]
    }

    fn breakdown_line(breakdown: &DeathBreakdown, width: usize) -> Line<'static> {
        match breakdown.proportional_mortality() {
            Ok(share) => Line::from(vec![
                Span::raw(format!("  {:<14}", breakdown.name)),
                Span::styled(bar(share * 10.0, width), Style::default().fg(SERIES_A_COLOR)),
                Span::raw(format!(
                    " {} of {} deaths = {}",
                    format_count(breakdown.cause_deaths),
                    format_count(breakdown.total()),
                    format_percent(share, 1)
                )),
            ]),
            Err(err) => error_line(&err),
        }
    }

    fn render_proportional(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width as usize).saturating_sub(44).max(4);
        let mut lines: Vec<Line> = proportional_mortality_populations()
            .iter()
            .map(|b| Self::breakdown_line(b, width))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Same disease deaths, twice the total: the proportion halves.",
            Style::default().fg(HELP_COLOR),
        )));

        let paragraph = Paragraph::new(lines)
            .block(focused_block(" Proportional mortality (bar scale 0-10%) ", false))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn example_lines() -> Vec<Line<'static>> {
        let (deaths, cases, population) = OUTBREAK;
        let mut lines = vec![
            Line::from(Span::styled("Worked example: outbreak", header_style())),
            Line::from(format!(
                "  {} deaths among {} cases in a population of {}",
                format_count(deaths),
                format_count(cases),
                format_count(population)
            )),
        ];
        match summarize_mortality(deaths, cases, population) {
            Ok(summary) => {
                lines.push(result_line(
                    "CFR",
                    format_percent(summary.cfr, 1),
                    Style::default(),
                ));
                lines.push(result_line(
                    "Mortality rate",
                    format_per(summary.mortality_per_100k, 1, 100_000.0),
                    Style::default(),
                ));
            }
            Err(err) => lines.push(error_line(&err)),
        }
        lines
    }
}

impl Component for MortalityScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let rows = state.mortality_state.fields.len();
        if handle_list_navigation(
            &key,
            &state.keybindings,
            &mut state.mortality_state.selected_row,
            rows,
        ) {
            return EventResult::Handled;
        }

        let kb = &state.keybindings.widgets;
        if KeybindingsConfig::matches(&key, &kb.edit) {
            let row = state.mortality_state.selected_row;
            open_field_editor(state, TabId::Mortality, row);
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &kb.reset) {
            state.mortality_state.reset();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mortality = &state.mortality_state;
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::Mortality, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12), // Calculator
                Constraint::Length(6),  // Proportional mortality
                Constraint::Min(0),     // Worked example
            ])
            .split(main_area);

        let rows = mortality.fields.iter().map(FieldRow::from).collect();
        let results = outcome_lines(&mortality.outcome, Self::summary_lines);
        FieldList::new(" Case fatality & mortality ", rows)
            .focused(true)
            .help_text("[e] Edit [r] Reset")
            .selected(mortality.selected_row)
            .render(frame, chunks[0], results);

        self.render_proportional(frame, chunks[1]);

        let example = Paragraph::new(Self::example_lines()).block(focused_block(" Example ", false));
        frame.render_widget(example, chunks[2]);
    }
}

impl Screen for MortalityScreen {
    fn title(&self) -> &str {
        "Mortality"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn outbreak_example_values() {
        let lines = MortalityScreen::example_lines();
        assert_eq!(text(&lines[2]), "  CFR: 4.0%");
        assert_eq!(text(&lines[3]), "  Mortality rate: 0.8 per 100,000");
    }

    #[test]
    fn proportional_mortality_halves() {
        let [a, b] = proportional_mortality_populations();
        assert!(text(&MortalityScreen::breakdown_line(&a, 10)).ends_with("4 of 100 deaths = 4.0%"));
        assert!(text(&MortalityScreen::breakdown_line(&b, 10)).ends_with("4 of 200 deaths = 2.0%"));
    }
}
