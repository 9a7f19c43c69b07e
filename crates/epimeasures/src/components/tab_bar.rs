use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl Component for TabBar {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if let Some(tab) = key.char().filter(|_| key.no_modifiers()).and_then(TabId::from_hotkey) {
            state.switch_tab(tab);
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &state.keybindings.global.next_tab) {
            state.next_tab();
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &state.keybindings.global.prev_tab) {
            state.prev_tab();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .map(|tab| {
                let content = format!("[{}] {}", tab.hotkey(), tab.name());

                if *tab == state.active_tab {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
