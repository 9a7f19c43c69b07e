use crate::components::charts::bar;
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::notes::render_notes;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState, TabId, TextInputModal};
use crate::util::format::format_fixed;
use crate::util::styles::{
    FOCUS_COLOR, FORMULA_COLOR, HELP_COLOR, NEGATIVE_COLOR, SERIES_A_COLOR, focused_block,
    focused_block_with_help,
};
use epimeasures_core::descriptors::FOLLOW_UP_YEARS;
use epimeasures_core::measures::person_time::MAX_PARTICIPANTS;
use epimeasures_core::{IncidenceDensity, Participant};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, result_line, split_with_notes};

/// Columns taken by everything on a timeline row except the bar
const TIMELINE_CHROME: usize = 26;

#[derive(Default)]
pub struct IncidenceScreen;

impl IncidenceScreen {
    pub fn new() -> Self {
        Self
    }

    fn timeline_line(participant: &Participant, width: usize, selected: bool) -> Line<'static> {
        let fraction = participant.follow_up_years / FOLLOW_UP_YEARS.max;
        let (end, end_style, status) = if participant.had_event {
            ("●", Style::default().fg(NEGATIVE_COLOR), "event")
        } else {
            ("→", Style::default().fg(HELP_COLOR), "censored")
        };
        let label_style = if selected {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, Style::default().fg(FOCUS_COLOR)),
            Span::styled(format!("P{:<3}", participant.id), label_style),
            Span::styled(
                bar(fraction, width).trim_end().to_string(),
                Style::default().fg(SERIES_A_COLOR),
            ),
            Span::styled(end, end_style),
            Span::raw(format!(" {:>4} yrs ", format_fixed(participant.follow_up_years, 1))),
            Span::styled(status, Style::default().fg(HELP_COLOR)),
        ])
    }

    fn render_timelines(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let inc = &state.incidence_state;
        let participants = inc.cohort.participants();
        let visible = area.height.saturating_sub(2) as usize;
        let offset = calculate_centered_scroll(inc.selected, participants.len(), visible);
        let width = (area.width as usize).saturating_sub(TIMELINE_CHROME).max(4);

        let lines: Vec<Line> = if participants.is_empty() {
            vec![Line::from(Span::styled(
                "  No participants. Press [a] to add one.",
                Style::default().fg(HELP_COLOR),
            ))]
        } else {
            participants
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(idx, p)| Self::timeline_line(p, width, idx == inc.selected))
                .collect()
        };

        let title = format!(
            " Follow-up timelines ({}/{MAX_PARTICIPANTS}) ",
            participants.len()
        );
        let block = focused_block_with_help(
            &title,
            true,
            "[a] Add [d] Remove [Space] Event [+/-] Follow-up [e] Type",
        );
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn summary_lines(summary: &IncidenceDensity) -> Vec<Line<'static>> {
        vec![
            result_line(
                "Total person-time",
                format!("{} person-years", format_fixed(summary.total_person_time, 1)),
                Style::default(),
            ),
            result_line("New cases", summary.total_cases.to_string(), Style::default()),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "  ({} cases / {} person-years) × 1,000",
                    summary.total_cases,
                    format_fixed(summary.total_person_time, 1)
                ),
                Style::default().fg(FORMULA_COLOR),
            )),
            result_line(
                "Incidence density",
                format!("{} per 1,000 person-years", format_fixed(summary.density, 1)),
                Style::default().fg(SERIES_A_COLOR),
            ),
        ]
    }

    fn open_follow_up_editor(state: &mut AppState) {
        let inc = &state.incidence_state;
        let Some(participant) = inc.cohort.participants().get(inc.selected) else {
            return;
        };
        let prompt = format!(
            "Follow-up for participant {} ({}-{} years)",
            participant.id, FOLLOW_UP_YEARS.min, FOLLOW_UP_YEARS.max
        );
        let modal = TextInputModal::new(
            "Edit Follow-up",
            &prompt,
            &participant.follow_up_years.to_string(),
            ModalAction::EditFollowUp { id: participant.id },
        );
        state.modal = ModalState::TextInput(modal);
    }
}

impl Component for IncidenceScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let total = state.incidence_state.cohort.len();
        if handle_list_navigation(
            &key,
            &state.keybindings,
            &mut state.incidence_state.selected,
            total,
        ) {
            return EventResult::Handled;
        }

        let kb = &state.keybindings.widgets;
        if KeybindingsConfig::matches(&key, &kb.add) {
            if state.incidence_state.add().is_none() {
                state.set_error(format!("Maximum of {MAX_PARTICIPANTS} participants"));
            }
        } else if KeybindingsConfig::matches(&key, &kb.delete) {
            state.incidence_state.remove_selected();
        } else if KeybindingsConfig::matches(&key, &kb.toggle) {
            state.incidence_state.toggle_selected();
        } else if KeybindingsConfig::matches(&key, &kb.increase) {
            state.incidence_state.nudge_follow_up(true);
        } else if KeybindingsConfig::matches(&key, &kb.decrease) {
            state.incidence_state.nudge_follow_up(false);
        } else if KeybindingsConfig::matches(&key, &kb.edit) {
            Self::open_follow_up_editor(state);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let (notes_area, main_area) = split_with_notes(area);
        render_notes(frame, notes_area, TabId::Incidence, state.active_notes_scroll());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(8)])
            .split(main_area);

        self.render_timelines(frame, chunks[0], state);

        let summary = Paragraph::new(Self::summary_lines(&state.incidence_state.summary))
            .block(focused_block(" Incidence density ", false));
        frame.render_widget(summary, chunks[1]);
    }
}

impl Screen for IncidenceScreen {
    fn title(&self) -> &str {
        "Incidence"
    }
}
