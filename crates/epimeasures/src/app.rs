use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

#[cfg(feature = "native")]
use std::{io, path::PathBuf};

#[cfg(feature = "native")]
use crossterm::event::{self, Event, KeyEventKind};
#[cfg(feature = "native")]
use ratatui::DefaultTerminal;

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{
    Screen, fertility::FertilityScreen, glossary::GlossaryScreen, incidence::IncidenceScreen,
    life_expectancy::LifeExpectancyScreen, mortality::MortalityScreen, overview::OverviewScreen,
    prevalence::PrevalenceScreen, quiz::QuizScreen, rate_risk::RateRiskScreen, ypll::YpllScreen,
};
use crate::state::{AppState, ModalAction, ModalState, TabId};

pub struct App {
    pub(crate) state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    /// One screen per tab, in `TabId::ALL` order
    screens: Vec<Box<dyn Screen>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_keybindings(keybindings: KeybindingsConfig) -> Self {
        Self::with_state(AppState::with_keybindings(keybindings))
    }

    /// Create app reading `keybindings.yaml` from the data directory
    #[cfg(feature = "native")]
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let keybindings = KeybindingsConfig::load_or_default(&data_dir);
        tracing::info!(data_dir = %data_dir.display(), "starting explainer");
        Self::with_keybindings(keybindings)
    }

    fn with_state(state: AppState) -> Self {
        let screens: Vec<Box<dyn Screen>> = TabId::ALL
            .iter()
            .map(|tab| -> Box<dyn Screen> {
                match tab {
                    TabId::Overview => Box::new(OverviewScreen::new()),
                    TabId::RateRisk => Box::new(RateRiskScreen::new()),
                    TabId::Incidence => Box::new(IncidenceScreen::new()),
                    TabId::Prevalence => Box::new(PrevalenceScreen::new()),
                    TabId::Mortality => Box::new(MortalityScreen::new()),
                    TabId::Fertility => Box::new(FertilityScreen::new()),
                    TabId::Ypll => Box::new(YpllScreen::new()),
                    TabId::LifeExpectancy => Box::new(LifeExpectancyScreen::new()),
                    TabId::Quiz => Box::new(QuizScreen::new()),
                    TabId::Glossary => Box::new(GlossaryScreen::new()),
                }
            })
            .collect();

        Self {
            state,
            tab_bar: TabBar,
            status_bar: StatusBar,
            screens,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_exit(&self) -> bool {
        self.state.exit
    }

    /// Forget a quit request. The browser build has nothing to exit to.
    pub fn clear_exit(&mut self) {
        self.state.exit = false;
    }
}

#[cfg(feature = "native")]
impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key(key_event.into())
            }
            _ => {}
        };
        Ok(())
    }
}

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        let index = self.state.active_tab.index();
        if let Some(screen) = self.screens.get_mut(index) {
            screen.render(frame, area, &self.state);
        }
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, &value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        let global = &self.state.keybindings.global;
        let navigation = &self.state.keybindings.navigation;
        if KeybindingsConfig::matches(&key, &global.quit) {
            tracing::debug!("quit requested");
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key, &global.cancel) {
            self.state.clear_error();
            return;
        }
        if KeybindingsConfig::matches(&key, &navigation.scroll_up) {
            self.state.scroll_notes(false);
            return;
        }
        if KeybindingsConfig::matches(&key, &navigation.scroll_down) {
            self.state.scroll_notes(true);
            return;
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key.clone(), &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let index = self.state.active_tab.index();
        let result = match self.screens.get_mut(index) {
            Some(screen) => screen.handle_key(key, &mut self.state),
            None => EventResult::NotHandled,
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: &str) {
        tracing::debug!(?action, value, "modal confirmed");
        let result: ActionResult = actions::handle_modal_result(&mut self.state, action, value);
        actions::apply_action_result(&mut self.state, result);
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> AppKeyEvent {
        AppKeyEvent::new(code)
    }

    fn ctrl(c: char) -> AppKeyEvent {
        let mut event = AppKeyEvent::new(KeyCode::Char(c));
        event.ctrl = true;
        event
    }

    #[test]
    fn screens_follow_tab_order() {
        let app = App::new();
        assert_eq!(app.screens.len(), TabId::ALL.len());
        for (screen, tab) in app.screens.iter().zip(TabId::ALL) {
            assert_eq!(screen.title(), tab.name());
        }
    }

    #[test]
    fn quit_bindings_exit() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_exit());

        let mut app = App::new();
        app.handle_key(ctrl('c'));
        assert!(app.should_exit());

        app.clear_exit();
        assert!(!app.should_exit());
    }

    #[test]
    fn digit_hotkeys_switch_tabs() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.state().active_tab, TabId::Incidence);
        app.handle_key(key(KeyCode::Char(']')));
        assert_eq!(app.state().active_tab, TabId::Prevalence);
    }

    #[test]
    fn esc_clears_status_error() {
        let mut app = App::new();
        app.state.set_error("oops".into());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.state().error_message.is_none());
    }

    #[test]
    fn modal_swallows_keys_until_confirmed() {
        let mut app = App::new();
        app.state.switch_tab(TabId::RateRisk);
        crate::screens::open_field_editor(&mut app.state, TabId::RateRisk, 0);
        assert!(matches!(app.state().modal, ModalState::TextInput(_)));

        // 'q' is typed into the input, not treated as quit
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_exit());

        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.state().modal, ModalState::None));
    }

    #[test]
    fn confirmed_edit_updates_field() {
        let mut app = App::new();
        app.state.switch_tab(TabId::RateRisk);
        crate::screens::open_field_editor(&mut app.state, TabId::RateRisk, 0);
        if let ModalState::TextInput(modal) = &mut app.state.modal {
            modal.value.clear();
            modal.cursor_pos = 0;
        }
        for c in "42".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.state().modal, ModalState::None));
        let field = app
            .state
            .field_mut(TabId::RateRisk, 0)
            .map(|f| f.text.clone());
        assert_eq!(field.as_deref(), Some("42"));
    }

    #[test]
    fn every_tab_renders() {
        let mut app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        for tab in TabId::ALL {
            app.state.switch_tab(tab);
            terminal.draw(|frame| app.draw(frame)).unwrap();
        }
    }
}
