use crate::components::charts::bar;
use crate::components::field_list::{FieldList, FieldRow};
use crate::components::lists::handle_list_navigation;
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use crate::util::format::format_fixed;
use crate::util::styles::{FORMULA_COLOR, HELP_COLOR, SERIES_A_COLOR, SERIES_B_COLOR, focused_block};
use epimeasures_core::{BirthRates, ValidationError};
use epimeasures_core::measures::fertility::{
    EXAMPLE_ASFRS, fetal_death_rate, infant_mortality_rate, neonatal_mortality_rate,
    perinatal_mortality_rate, total_fertility_rate,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, error_line, open_field_editor, outcome_lines, result_line, split_with_notes};

const ASFR_GROUPS: [&str; 6] = ["15-19", "20-24", "25-29", "30-34", "35-39", "40-44"];
const ASFR_GROUP_WIDTH: f64 = 5.0;
/// Bar scale of the ASFR chart, births per 1,000 women
const ASFR_SCALE: f64 = 120.0;

/// Illustrative birth cohort for the perinatal rates
struct PerinatalExample {
    live_births: f64,
    fetal_deaths: f64,
    early_neonatal_deaths: f64,
    neonatal_deaths: f64,
    infant_deaths: f64,
}

const PERINATAL: PerinatalExample = PerinatalExample {
    live_births: 8000.0,
    fetal_deaths: 40.0,
    early_neonatal_deaths: 24.0,
    neonatal_deaths: 32.0,
    infant_deaths: 48.0,
};

#[derive(Default)]
pub struct FertilityScreen;

impl FertilityScreen {
    pub fn new() -> Self {
        Self
    }

    fn rate_lines(rates: &BirthRates) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "  CBR = births / total population × 1,000",
                Style::default().fg(FORMULA_COLOR),
            )),
            result_line(
                "Crude birth rate",
                format!("{} per 1,000 people", format_fixed(rates.cbr, 1)),
                Style::default().fg(SERIES_A_COLOR),
            ),
            Line::from(Span::styled(
                "  GFR = births / women aged 15-44 × 1,000",
                Style::default().fg(FORMULA_COLOR),
            )),
            result_line(
                "General fertility rate",
                format!("{} per 1,000 women", format_fixed(rates.gfr, 1)),
                Style::default().fg(SERIES_B_COLOR),
            ),
        ]
    }

    fn tfr_lines(width: usize) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = ASFR_GROUPS
            .iter()
            .zip(EXAMPLE_ASFRS)
            .map(|(group, asfr)| {
                Line::from(vec![
                    Span::raw(format!("  {group}  ")),
                    Span::styled(bar(asfr / ASFR_SCALE, width), Style::default().fg(SERIES_B_COLOR)),
                    Span::raw(format!(" {:>3}", format_fixed(asfr, 0))),
                ])
            })
            .collect();

        lines.push(Line::from(Span::styled(
            "  TFR = 5 × Σ ASFR / 1,000",
            Style::default().fg(FORMULA_COLOR),
        )));
        lines.push(match total_fertility_rate(&EXAMPLE_ASFRS, ASFR_GROUP_WIDTH) {
            Ok(tfr) => result_line(
                "Total fertility rate",
                format!("{} children per woman", format_fixed(tfr, 3)),
                Style::default().fg(SERIES_A_COLOR),
            ),
            Err(err) => error_line(&err),
        });
        lines
    }

    fn perinatal_lines() -> Vec<Line<'static>> {
        let p = &PERINATAL;
        let rates: [(&str, Result<f64, ValidationError>, &str); 4] = [
            (
                "Fetal death rate",
                fetal_death_rate(p.fetal_deaths, p.live_births),
                "total births",
            ),
            (
                "Perinatal mortality",
                perinatal_mortality_rate(p.fetal_deaths, p.early_neonatal_deaths, p.live_births),
                "total births",
            ),
            (
                "Neonatal mortality",
                neonatal_mortality_rate(p.neonatal_deaths, p.live_births),
                "live births",
            ),
            (
                "Infant mortality",
                infant_mortality_rate(p.infant_deaths, p.live_births),
                "live births",
            ),
        ];

        let mut lines = vec![Line::from(Span::styled(
            format!(
                "  Illustrative: {} live births, {} fetal deaths, {} early neonatal, {} neonatal, {} infant deaths",
                p.live_births, p.fetal_deaths, p.early_neonatal_deaths, p.neonatal_deaths, p.infant_deaths
            ),
            Style::default().fg(HELP_COLOR),
        ))];
        lines.extend(rates.into_iter().map(|(label, rate, denominator)| match rate {
            Ok(rate) => result_line(
                label,
                format!("{} per 1,000 {denominator}", format_fixed(rate, 1)),
                Style::default(),
            ),
            Err(err) => error_line(&err),
        }));
        lines
    }
}

impl Component for FertilityScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let rows = state.fertility_state.fields.len();
        if handle_list_navigation(
            &key,
            &state.keybindings,
            &mut state.fertility_state.selected_row,
            rows,
        ) {
            return EventResult::Handled;
        }

        let kb = &state.keybindings.widgets;
        if KeybindingsConfig::matches(&key, &kb.edit) {
            let row = state.fertility_state.selected_row;
            open_field_editor(state, TabId::Fertility, row);
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &kb.reset) {
            state.fertility_state.reset();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let fertility = &state.fertility_state;
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::Fertility, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12), // Birth rate calculator
                Constraint::Length(10), // TFR
                Constraint::Min(0),     // Perinatal rates
            ])
            .split(main_area);

        let rows = fertility.fields.iter().map(FieldRow::from).collect();
        FieldList::new(" Birth & fertility rates ", rows)
            .focused(true)
            .help_text("[e] Edit [r] Reset")
            .selected(fertility.selected_row)
            .render(frame, chunks[0], outcome_lines(&fertility.outcome, Self::rate_lines));

        let width = (chunks[1].width as usize).saturating_sub(16).max(4);
        let tfr = Paragraph::new(Self::tfr_lines(width))
            .block(focused_block(" Total fertility rate (example ASFRs) ", false));
        frame.render_widget(tfr, chunks[1]);

        let perinatal = Paragraph::new(Self::perinatal_lines())
            .block(focused_block(" Fetal & infant mortality ", false))
            .wrap(Wrap { trim: false });
        frame.render_widget(perinatal, chunks[2]);
    }
}

impl Screen for FertilityScreen {
    fn title(&self) -> &str {
        "Fertility"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn default_rates_round_to_one_decimal() {
        let state = AppState::default();
        let lines = outcome_lines(&state.fertility_state.outcome, FertilityScreen::rate_lines);
        assert_eq!(text(&lines[1]), "  Crude birth rate: 13.3 per 1,000 people");
        assert_eq!(text(&lines[3]), "  General fertility rate: 53.3 per 1,000 women");
    }

    #[test]
    fn tfr_from_example_rates() {
        let lines = FertilityScreen::tfr_lines(8);
        let last = lines.last().map(text).unwrap_or_default();
        assert_eq!(last, "  Total fertility rate: 1.775 children per woman");
    }

    #[test]
    fn perinatal_rates() {
        let lines = FertilityScreen::perinatal_lines();
        assert_eq!(text(&lines[1]), "  Fetal death rate: 5.0 per 1,000 total births");
        assert_eq!(text(&lines[4]), "  Infant mortality: 6.0 per 1,000 live births");
    }
}
