use crate::components::charts::LineChart;
use crate::components::field_list::{FieldList, FieldRow, slider_line};
use crate::components::lists::{handle_list_navigation, handle_panel_navigation};
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, RateRiskPanel, RateRiskState, TabId};
use crate::util::format::{format_count, format_fixed, format_per};
use crate::util::styles::{
    FORMULA_COLOR, HELP_COLOR, SERIES_A_COLOR, SERIES_B_COLOR, WARNING_COLOR, focused_block,
};
use epimeasures_core::chart::series::RATE_Y_MAX;
use epimeasures_core::descriptors::RISK_SLIDER;
use epimeasures_core::measures::rate_risk::format_risk_percent;
use epimeasures_core::{Domain, PlotPoint, RateRiskResult, risk_vs_rate_series};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, open_field_editor, outcome_lines, result_line, split_with_notes};

const TIME_UNIT_LABEL: &str = "Time unit";

#[derive(Default)]
pub struct RateRiskScreen;

impl RateRiskScreen {
    pub fn new() -> Self {
        Self
    }

    fn result_lines(rr: &RateRiskState) -> Vec<Line<'static>> {
        let unit = rr.time_unit.label();
        let events = rr.fields[RateRiskState::EVENTS].text.clone();
        let population = rr.fields[RateRiskState::POPULATION].text.clone();

        outcome_lines(&rr.outcome, |result: &RateRiskResult| {
            let mut lines = vec![
                result_line("Count", format!("{events} events"), Style::default()),
                result_line(
                    "Risk",
                    format_risk_percent(result.risk),
                    Style::default().fg(SERIES_A_COLOR),
                ),
                result_line(
                    "Rate",
                    format!("{} per {unit}", format_per(result.rate, 2, result.multiplier)),
                    Style::default().fg(SERIES_B_COLOR),
                ),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  Risk = {events} / {population} × 100%"),
                    Style::default().fg(FORMULA_COLOR),
                )),
                Line::from(Span::styled(
                    format!(
                        "  Rate = {events} / {population} × {} per {unit}",
                        format_count(result.multiplier)
                    ),
                    Style::default().fg(FORMULA_COLOR),
                )),
            ];
            if let Some(warning) = result.warning {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("  {warning}"),
                    Style::default().fg(WARNING_COLOR),
                )));
            }
            lines
        })
    }

    fn render_calculator(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rr = &state.rate_risk_state;
        let focused = rr.focused_panel == RateRiskPanel::Calculator;

        let mut rows: Vec<FieldRow> = rr.fields.iter().map(FieldRow::from).collect();
        rows.push(FieldRow {
            label: TIME_UNIT_LABEL,
            value: rr.time_unit.label().to_string(),
            unit: "",
        });

        FieldList::new(" Calculator ", rows)
            .focused(focused)
            .help_text("[e] Edit [Space] Unit [r] Reset")
            .selected(rr.selected_row)
            .render(frame, area, Self::result_lines(rr));
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rr = &state.rate_risk_state;
        let focused = rr.focused_panel == RateRiskPanel::Chart;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        let slider_rate = rr.slider_rate().ok();
        let marker = slider_rate
            .filter(|rate| rate.is_finite() && *rate <= RATE_Y_MAX)
            .map(|rate| PlotPoint::new(rr.risk, rate));

        let (risk, rate) = risk_vs_rate_series();
        LineChart::new(
            " Rate vs Risk ",
            Domain::new(0.0, 1.0),
            Domain::new(0.0, RATE_Y_MAX),
        )
        .series(&risk, SERIES_A_COLOR)
        .series(&rate, SERIES_B_COLOR)
        .x_format(|v| format!("{:.0}%", v * 100.0))
        .y_format(|v| format!("{v:.1}"))
        .marker(marker)
        .focused(focused)
        .render(frame, chunks[0]);

        let width = (chunks[1].width as usize).saturating_sub(34).max(4);
        let readout = match slider_rate {
            Some(rate) => format!(
                "  Affected: {:.0}%   Risk {:.2}%   Rate {} per person-time",
                rr.risk * 100.0,
                rr.risk * 100.0,
                format_fixed(rate, 3)
            ),
            None => String::new(),
        };
        let lines = vec![
            slider_line(&RISK_SLIDER, rr.risk, width, focused),
            Line::from(Span::styled(readout, Style::default().fg(HELP_COLOR))),
        ];
        let block = focused_block(" Constant risk over one time unit ", focused);
        frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
    }

    fn handle_calculator_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let row = state.rate_risk_state.selected_row;
        let kb = &state.keybindings;

        if row == RateRiskState::TIME_UNIT_ROW
            && (KeybindingsConfig::matches(key, &kb.widgets.toggle)
                || KeybindingsConfig::matches(key, &kb.widgets.edit))
        {
            state.rate_risk_state.cycle_time_unit();
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(key, &kb.widgets.edit) {
            open_field_editor(state, TabId::RateRisk, row);
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn handle_chart_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let kb = &state.keybindings;
        let up = KeybindingsConfig::matches(key, &kb.widgets.increase)
            || KeybindingsConfig::matches(key, &kb.navigation.right);
        let down = KeybindingsConfig::matches(key, &kb.widgets.decrease)
            || KeybindingsConfig::matches(key, &kb.navigation.left);

        if up || down {
            state.rate_risk_state.nudge_risk(up);
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }
}

impl Component for RateRiskScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if handle_panel_navigation(
            &key,
            &state.keybindings,
            &mut state.rate_risk_state.focused_panel,
        ) {
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(&key, &state.keybindings.widgets.reset) {
            state.rate_risk_state.reset();
            return EventResult::Handled;
        }

        match state.rate_risk_state.focused_panel {
            RateRiskPanel::Calculator => {
                if handle_list_navigation(
                    &key,
                    &state.keybindings,
                    &mut state.rate_risk_state.selected_row,
                    RateRiskState::ROWS,
                ) {
                    return EventResult::Handled;
                }
                Self::handle_calculator_key(&key, state)
            }
            RateRiskPanel::Chart => Self::handle_chart_key(&key, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::RateRisk, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(17), Constraint::Min(0)])
            .split(main_area);

        self.render_calculator(frame, chunks[0], state);
        self.render_chart(frame, chunks[1], state);
    }
}

impl Screen for RateRiskScreen {
    fn title(&self) -> &str {
        "Rate & Risk"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::ModalState;
    use epimeasures_core::TimeUnit;

    fn press(screen: &mut RateRiskScreen, state: &mut AppState, code: KeyCode) -> EventResult {
        screen.handle_key(AppKeyEvent::new(code), state)
    }

    #[test]
    fn time_unit_row_cycles_unit() {
        let mut state = AppState::default();
        let mut screen = RateRiskScreen::new();
        for _ in 0..RateRiskState::TIME_UNIT_ROW {
            press(&mut screen, &mut state, KeyCode::Down);
        }
        press(&mut screen, &mut state, KeyCode::Char(' '));
        assert_eq!(state.rate_risk_state.time_unit, TimeUnit::Day);
        assert!(matches!(state.modal, ModalState::None));
    }

    #[test]
    fn edit_opens_modal_on_field_rows() {
        let mut state = AppState::default();
        let mut screen = RateRiskScreen::new();
        press(&mut screen, &mut state, KeyCode::Char('e'));
        assert!(matches!(state.modal, ModalState::TextInput(_)));
    }

    #[test]
    fn chart_panel_moves_slider() {
        let mut state = AppState::default();
        let mut screen = RateRiskScreen::new();
        press(&mut screen, &mut state, KeyCode::Tab);
        assert_eq!(state.rate_risk_state.focused_panel, RateRiskPanel::Chart);

        let before = state.rate_risk_state.risk;
        press(&mut screen, &mut state, KeyCode::Right);
        assert!(state.rate_risk_state.risk > before);

        // Row navigation belongs to the calculator panel
        assert_eq!(press(&mut screen, &mut state, KeyCode::Down), EventResult::NotHandled);
    }
}
