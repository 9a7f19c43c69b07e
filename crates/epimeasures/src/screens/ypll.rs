use crate::components::charts::bar;
use crate::components::field_list::{FieldList, FieldRow};
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation, handle_panel_navigation};
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState, TabId, TextInputModal, YpllPanel, YpllState};
use crate::util::format::{format_count, format_fixed, format_per};
use crate::util::styles::{
    FOCUS_COLOR, FORMULA_COLOR, HELP_COLOR, SERIES_B_COLOR, focused_block, focused_block_with_help,
    header_style,
};
use epimeasures_core::measures::ypll::{
    DEFAULT_BENCHMARK, MAX_AGES, example_grouped_deaths, grouped_ypll, ypll_rate,
};
use epimeasures_core::{ValidationError, YpllResult};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, error_line, open_field_editor, outcome_lines, result_line, split_with_notes};

/// People under the benchmark age in the grouped example
const EXAMPLE_POPULATION: f64 = 50_000.0;

#[derive(Default)]
pub struct YpllScreen;

impl YpllScreen {
    pub fn new() -> Self {
        Self
    }

    fn death_lines(ypll: &YpllState, width: usize, focused: bool) -> Vec<Line<'static>> {
        let benchmark = ypll.benchmark.value().unwrap_or(DEFAULT_BENCHMARK);
        outcome_lines(&ypll.outcome, |result: &YpllResult| {
            if result.per_death.is_empty() {
                return vec![Line::from(Span::styled(
                    "  No deaths entered. Press [a] to add an age.",
                    Style::default().fg(HELP_COLOR),
                ))];
            }
            let mut lines: Vec<Line> = result
                .per_death
                .iter()
                .enumerate()
                .map(|(idx, death)| {
                    let selected = focused && idx == ypll.selected;
                    let label_style = if selected {
                        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(if selected { "> " } else { "  " }, Style::default().fg(FOCUS_COLOR)),
                        Span::styled(format!("Age {:>5}  ", format_fixed(death.age, 0)), label_style),
                        Span::styled(
                            bar(death.ypll / benchmark, width),
                            Style::default().fg(SERIES_B_COLOR),
                        ),
                        Span::raw(format!(" {} years lost", format_fixed(death.ypll, 0))),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(result_line(
                "Total YPLL",
                format!("{} years", format_fixed(result.total, 0)),
                Style::default().fg(SERIES_B_COLOR),
            ));
            lines
        })
    }

    fn grouped_example_lines() -> Vec<Line<'static>> {
        let groups = example_grouped_deaths();
        let mut lines = vec![
            Line::from(Span::styled("Worked example: grouped deaths", header_style())),
            Line::from(Span::styled(
                "  YPLL = Σ deaths × (75 − age-group midpoint)",
                Style::default().fg(FORMULA_COLOR),
            )),
        ];
        lines.extend(groups.iter().map(|g| {
            Line::from(format!(
                "  midpoint {:>2}: {} deaths × {} years",
                format_fixed(g.midpoint, 0),
                format_fixed(g.deaths, 0),
                format_fixed(DEFAULT_BENCHMARK - g.midpoint, 0)
            ))
        }));

        let total: Result<(f64, f64), ValidationError> = grouped_ypll(DEFAULT_BENCHMARK, &groups)
            .and_then(|total| Ok((total, ypll_rate(total, EXAMPLE_POPULATION, 100_000.0)?)));
        match total {
            Ok((total, rate)) => {
                lines.push(result_line("Total", format!("{} years", format_fixed(total, 0)), Style::default()));
                lines.push(result_line(
                    &format!("YPLL rate ({} people under 75)", format_count(EXAMPLE_POPULATION)),
                    format_per(rate, 0, 100_000.0),
                    Style::default(),
                ));
            }
            Err(err) => lines.push(error_line(&err)),
        }
        lines
    }

    fn open_add_age(state: &mut AppState) {
        if state.ypll_state.ages.is_full() {
            state.set_error(ValidationError::TooManyAges { max: MAX_AGES }.to_string());
            return;
        }
        state.modal = ModalState::TextInput(TextInputModal::new(
            "Add Age",
            "Age at death (years)",
            "",
            ModalAction::AddAge,
        ));
    }
}

impl Component for YpllScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if handle_panel_navigation(&key, &state.keybindings, &mut state.ypll_state.focused_panel) {
            return EventResult::Handled;
        }

        if state.ypll_state.focused_panel == YpllPanel::Ages {
            let total = state.ypll_state.ages.len();
            if handle_list_navigation(&key, &state.keybindings, &mut state.ypll_state.selected, total) {
                return EventResult::Handled;
            }
        }

        let kb = &state.keybindings.widgets;
        if KeybindingsConfig::matches(&key, &kb.add) {
            Self::open_add_age(state);
        } else if KeybindingsConfig::matches(&key, &kb.reset) {
            state.ypll_state.reset();
        } else if state.ypll_state.focused_panel == YpllPanel::Ages
            && KeybindingsConfig::matches(&key, &kb.delete)
        {
            state.ypll_state.remove_selected();
        } else if state.ypll_state.focused_panel == YpllPanel::Benchmark
            && KeybindingsConfig::matches(&key, &kb.edit)
        {
            open_field_editor(state, TabId::Ypll, 0);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let ypll = &state.ypll_state;
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::Ypll, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Benchmark
                Constraint::Min(8),    // Deaths
                Constraint::Length(9), // Grouped example
            ])
            .split(main_area);

        FieldList::new(" Benchmark ", vec![FieldRow::from(&ypll.benchmark)])
            .focused(ypll.focused_panel == YpllPanel::Benchmark)
            .help_text("[e] Edit [Tab] Deaths")
            .render(frame, chunks[0], Vec::new());

        let ages_focused = ypll.focused_panel == YpllPanel::Ages;
        let width = (chunks[1].width as usize).saturating_sub(36).max(4);
        let lines = Self::death_lines(ypll, width, ages_focused);
        let visible = chunks[1].height.saturating_sub(2) as usize;
        let offset = calculate_centered_scroll(ypll.selected, lines.len(), visible);
        let title = format!(" Deaths ({}/{MAX_AGES}) ", ypll.ages.len());
        let block = focused_block_with_help(&title, ages_focused, "[a] Add [d] Remove [r] Reset");
        frame.render_widget(
            Paragraph::new(lines).block(block).scroll((offset as u16, 0)),
            chunks[1],
        );

        let example = Paragraph::new(Self::grouped_example_lines())
            .block(focused_block(" Example ", false));
        frame.render_widget(example, chunks[2]);
    }
}

impl Screen for YpllScreen {
    fn title(&self) -> &str {
        "YPLL"
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
    fn grouped_example_totals() {
        let lines = YpllScreen::grouped_example_lines();
        let n = lines.len();
        assert_eq!(text(&lines[n - 2]), "  Total: 880 years");
        assert_eq!(
            text(&lines[n - 1]),
            "  YPLL rate (50,000 people under 75): 1,760 per 100,000"
        );
    }

    #[test]
    fn add_opens_modal_until_full() {
        let mut state = AppState::default();
        let mut screen = YpllScreen::new();
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('a')), &mut state);
        assert!(matches!(
            &state.modal,
            ModalState::TextInput(m) if m.action == ModalAction::AddAge
        ));

        state.modal = ModalState::None;
        while !state.ypll_state.ages.is_full() {
            state.ypll_state.add_age(30.0).unwrap();
        }
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('a')), &mut state);
        assert!(matches!(state.modal, ModalState::None));
        assert_eq!(
            state.error_message.as_deref(),
            Some("Maximum of 10 ages allowed for this demo.")
        );
    }

    #[test]
    fn delete_only_in_ages_panel() {
        let mut state = AppState::default();
        let mut screen = YpllScreen::new();
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('d')), &mut state);
        assert_eq!(state.ypll_state.ages.len(), 3);

        screen.handle_key(AppKeyEvent::new(KeyCode::Tab), &mut state);
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('d')), &mut state);
        assert_eq!(state.ypll_state.ages.len(), 2);
    }
}
