use crate::components::charts::LineChart;
use crate::components::lists::handle_list_navigation;
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult, PanelNavigable};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{
    AppState, LifeChart, LifeExpectancyState, ModalAction, ModalState, TabId, TextInputModal,
};
use crate::util::format::{format_count, format_fixed, format_percent};
use crate::util::styles::{
    FOCUS_COLOR, FORMULA_COLOR, SERIES_A_COLOR, SERIES_B_COLOR, focused_block,
    focused_block_with_help, header_style,
};
use epimeasures_core::chart::series::CUMULATIVE_RISK_X_LABELS;
use epimeasures_core::measures::life_table::{adjusted_lifetime_risk, lifetime_risk};
use epimeasures_core::{ChartFrame, LifeTable, cumulative_risk_series, survival_curve};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, outcome_lines, result_line, split_with_notes};

/// Lifetime risk example: 1% per decade over five decades, 70% survive to face it
const RISK_PER_DECADE: f64 = 0.01;
const DECADES: u32 = 5;
const SURVIVAL_FRACTION: f64 = 0.7;

#[derive(Default)]
pub struct LifeExpectancyScreen;

impl LifeExpectancyScreen {
    pub fn new() -> Self {
        Self
    }

    fn table_lines(le: &LifeExpectancyState) -> Vec<Line<'static>> {
        let header = Line::from(Span::styled(
            format!(
                "  {:<7} {:>9} {:>9} {:>8} {:>12} {:>7}",
                "Age", "Rate/1000", "Entering", "Deaths", "Person-yrs", "e(x)"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        outcome_lines(&le.table, |table: &LifeTable| {
            let mut lines = vec![header];
            lines.extend(table.rows.iter().enumerate().map(|(idx, row)| {
                let selected = idx == le.selected;
                let style = if selected {
                    Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(if selected { "> " } else { "  " }, Style::default().fg(FOCUS_COLOR)),
                    Span::styled(
                        format!(
                            "{:<7} {:>9} {:>9} {:>8} {:>12} {:>7}",
                            row.label,
                            format_fixed(row.death_rate_per_thousand, 1),
                            format_count(row.entering),
                            format_count(row.deaths),
                            format_count(row.person_years),
                            format_fixed(row.remaining_life, 1)
                        ),
                        style,
                    ),
                ])
            }));
            lines.push(Line::from(""));
            lines.push(result_line(
                "Life expectancy at birth",
                format!("{} years", format_fixed(table.life_expectancy_at_birth(), 1)),
                Style::default().fg(SERIES_A_COLOR),
            ));
            lines
        })
    }

    fn lifetime_risk_lines() -> Vec<Line<'static>> {
        let unadjusted = lifetime_risk(RISK_PER_DECADE, DECADES);
        let adjusted = adjusted_lifetime_risk(unadjusted, SURVIVAL_FRACTION);
        vec![
            Line::from(Span::styled("Lifetime risk", header_style())),
            Line::from(Span::styled(
                format!(
                    "  {} per decade × {DECADES} decades = {}",
                    format_percent(RISK_PER_DECADE, 0),
                    format_percent(unadjusted, 1)
                ),
                Style::default().fg(FORMULA_COLOR),
            )),
            result_line(
                &format!("Adjusted for {} survival", format_percent(SURVIVAL_FRACTION, 0)),
                format_percent(adjusted, 1),
                Style::default().fg(SERIES_B_COLOR),
            ),
        ]
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, chart: LifeChart) {
        let title = format!(" {} ([c] switch) ", chart.title());
        match chart {
            LifeChart::Survival => {
                let frame_spec = ChartFrame::survival();
                let curve = survival_curve();
                LineChart::new(&title, frame_spec.x_domain, frame_spec.y_domain)
                    .series(&curve, SERIES_A_COLOR)
                    .x_ticks(&frame_spec.x_domain.ticks(5))
                    .y_format(|v| format!("{:.0}k", v / 1000.0))
                    .render(frame, area);
            }
            LifeChart::CumulativeRisk => {
                let frame_spec = ChartFrame::cumulative_risk();
                let (unadjusted, adjusted) = cumulative_risk_series();
                LineChart::new(&title, frame_spec.x_domain, frame_spec.y_domain)
                    .series(&unadjusted, SERIES_A_COLOR)
                    .series(&adjusted, SERIES_B_COLOR)
                    .x_ticks(&CUMULATIVE_RISK_X_LABELS)
                    .y_format(|v| format!("{v:.0}%"))
                    .render(frame, area);
            }
        }
    }

    fn open_rate_editor(state: &mut AppState) {
        let index = state.life_expectancy_state.selected;
        let Some(group) = state.life_expectancy_state.groups.get(index) else {
            return;
        };
        let prompt = format!("Death rate for ages {} (per 1,000 per year)", group.label);
        let modal = TextInputModal::new(
            "Edit Death Rate",
            &prompt,
            &group.death_rate_per_thousand.to_string(),
            ModalAction::EditField {
                tab: TabId::LifeExpectancy,
                index,
            },
        );
        state.modal = ModalState::TextInput(modal);
    }
}

impl Component for LifeExpectancyScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let total = state.life_expectancy_state.groups.len();
        if handle_list_navigation(
            &key,
            &state.keybindings,
            &mut state.life_expectancy_state.selected,
            total,
        ) {
            return EventResult::Handled;
        }

        let kb = &state.keybindings.widgets;
        if KeybindingsConfig::matches(&key, &kb.increase) {
            state.life_expectancy_state.nudge_rate(true);
        } else if KeybindingsConfig::matches(&key, &kb.decrease) {
            state.life_expectancy_state.nudge_rate(false);
        } else if KeybindingsConfig::matches(&key, &kb.switch_chart) {
            let le = &mut state.life_expectancy_state;
            le.chart = le.chart.next();
        } else if KeybindingsConfig::matches(&key, &kb.reset) {
            state.life_expectancy_state.reset();
        } else if KeybindingsConfig::matches(&key, &kb.edit) {
            Self::open_rate_editor(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let le = &state.life_expectancy_state;
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::LifeExpectancy, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(le.groups.len() as u16 + 5), // Life table
                Constraint::Length(5),                          // Lifetime risk
                Constraint::Min(0),                             // Chart
            ])
            .split(main_area);

        let block = focused_block_with_help(
            " Life table (cohort of 100,000) ",
            true,
            "[+/-] Death rate [e] Edit [r] Reset",
        );
        frame.render_widget(Paragraph::new(Self::table_lines(le)).block(block), chunks[0]);

        let risk = Paragraph::new(Self::lifetime_risk_lines()).block(focused_block(" Example ", false));
        frame.render_widget(risk, chunks[1]);

        self.render_chart(frame, chunks[2], le.chart);
    }
}

impl Screen for LifeExpectancyScreen {
    fn title(&self) -> &str {
        "Life Expectancy"
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
    fn lifetime_risk_example() {
        let lines = LifeExpectancyScreen::lifetime_risk_lines();
        assert_eq!(text(&lines[1]), "  1% per decade × 5 decades = 5.0%");
        assert_eq!(text(&lines[2]), "  Adjusted for 70% survival: 3.5%");
    }

    #[test]
    fn table_ends_with_life_expectancy() {
        let state = AppState::default();
        let lines = LifeExpectancyScreen::table_lines(&state.life_expectancy_state);
        let last = lines.last().map(text).unwrap_or_default();
        assert!(last.starts_with("  Life expectancy at birth: "));
        assert_eq!(lines.len(), state.life_expectancy_state.groups.len() + 3);
    }

    #[test]
    fn keys_switch_chart_and_open_editor() {
        let mut state = AppState::default();
        let mut screen = LifeExpectancyScreen::new();

        screen.handle_key(AppKeyEvent::new(KeyCode::Char('c')), &mut state);
        assert_eq!(state.life_expectancy_state.chart, LifeChart::CumulativeRisk);

        screen.handle_key(AppKeyEvent::new(KeyCode::Down), &mut state);
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('e')), &mut state);
        match &state.modal {
            ModalState::TextInput(modal) => assert_eq!(
                modal.action,
                ModalAction::EditField {
                    tab: TabId::LifeExpectancy,
                    index: 1
                }
            ),
            other => panic!("unexpected modal {other:?}"),
        }
    }
}
