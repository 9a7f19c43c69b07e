use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::content::{REFERENCES, SECTIONS};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block, header_style};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::Screen;

const INTRO: [&str; 4] = [
    "Interactive notes on the basic measures of disease frequency and burden.",
    "Each topic pairs a short explainer with a calculator or chart that updates as you type.",
    "Pick a section and press Enter to jump to its tab, or use the number keys at any time.",
    "Finish with the practice quiz and the glossary of key terms.",
];

#[derive(Default)]
pub struct OverviewScreen;

impl OverviewScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_sections(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let selected = state.overview_state.selected;
        let visible = area.height.saturating_sub(2) as usize;
        let offset = calculate_centered_scroll(selected, SECTIONS.len(), visible);

        let items: Vec<ListItem> = SECTIONS
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, section)| {
                let (marker, style) = if idx == selected {
                    (
                        "> ",
                        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
                    Span::styled(format!("{:>2}. {}", idx + 1, section.title), style),
                    Span::styled(
                        format!("  [{}]", section.tab.hotkey()),
                        Style::default().fg(HELP_COLOR),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(focused_block(" Contents ", true));
        frame.render_widget(list, area);
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Epidemiological Measures", header_style())),
            Line::from(""),
        ];
        lines.extend(INTRO.iter().map(|text| Line::from(*text)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("References", header_style())));
        lines.extend(REFERENCES.iter().map(|r| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(HELP_COLOR)),
                Span::raw(*r),
            ])
        }));

        let paragraph = Paragraph::new(lines)
            .block(focused_block(" About ", false))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let total = state.overview_state.section_count();
        if handle_list_navigation(
            &key,
            &state.keybindings,
            &mut state.overview_state.selected,
            total,
        ) {
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &state.keybindings.navigation.confirm) {
            if let Some(section) = SECTIONS.get(state.overview_state.selected) {
                state.switch_tab(section.tab);
            }
            return EventResult::Handled;
        }

        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        self.render_sections(frame, chunks[0], state);
        self.render_intro(frame, chunks[1]);
    }
}

impl Screen for OverviewScreen {
    fn title(&self) -> &str {
        "Overview"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::TabId;

    #[test]
    fn enter_opens_selected_section() {
        let mut state = AppState::default();
        let mut screen = OverviewScreen::new();

        screen.handle_key(AppKeyEvent::new(KeyCode::Down), &mut state);
        assert_eq!(state.overview_state.selected, 1);

        let result = screen.handle_key(AppKeyEvent::new(KeyCode::Enter), &mut state);
        assert_eq!(result, EventResult::Handled);
        assert_eq!(state.active_tab, SECTIONS[1].tab);
        assert_ne!(state.active_tab, TabId::Overview);
    }
}
