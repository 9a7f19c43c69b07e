use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    /// Per-tab key hints, spelled with the first configured binding of each action.
    fn help_text(state: &AppState) -> String {
        let kb = &state.keybindings;
        let key = KeybindingsConfig::primary;
        let tabs = format!("1-9,0: tabs | {}: quit", key(&kb.global.quit));
        let scroll = format!(
            "{}/{}: scroll notes",
            key(&kb.navigation.scroll_up),
            key(&kb.navigation.scroll_down)
        );

        let specific = match state.active_tab {
            TabId::Overview => format!("j/k: select section | {}: open", key(&kb.navigation.confirm)),
            TabId::RateRisk => format!(
                "{}: panel | j/k: field | {}: edit | {}: unit | {}/{}: risk | {}: reset",
                key(&kb.navigation.next_panel),
                key(&kb.widgets.edit),
                key(&kb.widgets.toggle),
                key(&kb.widgets.increase),
                key(&kb.widgets.decrease),
                key(&kb.widgets.reset)
            ),
            TabId::Incidence => format!(
                "j/k: participant | {}: add | {}: remove | {}: event | {}/{}: follow-up | {}: type",
                key(&kb.widgets.add),
                key(&kb.widgets.delete),
                key(&kb.widgets.toggle),
                key(&kb.widgets.increase),
                key(&kb.widgets.decrease),
                key(&kb.widgets.edit)
            ),
            TabId::Prevalence => format!(
                "{}: slider | {}/{}: adjust",
                key(&kb.navigation.next_panel),
                key(&kb.widgets.increase),
                key(&kb.widgets.decrease)
            ),
            TabId::Mortality | TabId::Fertility => format!(
                "j/k: field | {}: edit | {}: reset",
                key(&kb.widgets.edit),
                key(&kb.widgets.reset)
            ),
            TabId::Ypll => format!(
                "{}: panel | {}: edit | {}: add age | {}: remove | {}: reset",
                key(&kb.navigation.next_panel),
                key(&kb.widgets.edit),
                key(&kb.widgets.add),
                key(&kb.widgets.delete),
                key(&kb.widgets.reset)
            ),
            TabId::LifeExpectancy => format!(
                "j/k: age group | {}/{}: death rate | {}: edit | {}: chart | {}: reset",
                key(&kb.widgets.increase),
                key(&kb.widgets.decrease),
                key(&kb.widgets.edit),
                key(&kb.widgets.switch_chart),
                key(&kb.widgets.reset)
            ),
            TabId::Quiz => format!(
                "j/k: option | {}: answer | {}/{}: question | {}: reset",
                key(&kb.quiz.answer),
                key(&kb.quiz.next_question),
                key(&kb.quiz.prev_question),
                key(&kb.quiz.reset)
            ),
            TabId::Glossary => format!("j/k: term | {}: expand", key(&kb.widgets.toggle)),
        };

        format!("{specific} | {scroll} | {tabs}")
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
