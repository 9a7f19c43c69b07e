use super::fields::NumericField;
use super::modal::ModalState;
use super::screen_state::{
    FertilityState, GlossaryState, IncidenceState, LifeExpectancyState, MortalityState,
    OverviewState, PrevalenceState, QuizState, RateRiskState, YpllState,
};
use super::tabs::TabId;
use crate::data::keybindings_data::KeybindingsConfig;

const NOTES_SCROLL_STEP: u16 = 5;

#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub overview_state: OverviewState,
    pub rate_risk_state: RateRiskState,
    pub incidence_state: IncidenceState,
    pub prevalence_state: PrevalenceState,
    pub mortality_state: MortalityState,
    pub fertility_state: FertilityState,
    pub ypll_state: YpllState,
    pub life_expectancy_state: LifeExpectancyState,
    pub quiz_state: QuizState,
    pub glossary_state: GlossaryState,
    /// Scroll offset of the explainer notes, per tab
    pub notes_scroll: [u16; TabId::ALL.len()],
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub exit: bool,
    pub keybindings: KeybindingsConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_keybindings(KeybindingsConfig::default())
    }
}

impl AppState {
    pub fn with_keybindings(keybindings: KeybindingsConfig) -> Self {
        Self {
            active_tab: TabId::Overview,
            overview_state: OverviewState::default(),
            rate_risk_state: RateRiskState::default(),
            incidence_state: IncidenceState::default(),
            prevalence_state: PrevalenceState::default(),
            mortality_state: MortalityState::default(),
            fertility_state: FertilityState::default(),
            ypll_state: YpllState::default(),
            life_expectancy_state: LifeExpectancyState::default(),
            quiz_state: QuizState::default(),
            glossary_state: GlossaryState::default(),
            notes_scroll: [0; TabId::ALL.len()],
            modal: ModalState::None,
            error_message: None,
            exit: false,
            keybindings,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        if tab != self.active_tab {
            tracing::debug!(from = self.active_tab.name(), to = tab.name(), "switch tab");
        }
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.active_tab.prev());
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn active_notes_scroll(&self) -> u16 {
        self.notes_scroll[self.active_tab.index()]
    }

    /// Scroll the active tab's notes by a few lines. The renderer clamps the
    /// offset to the text height.
    pub fn scroll_notes(&mut self, down: bool) {
        let offset = &mut self.notes_scroll[self.active_tab.index()];
        *offset = if down {
            offset.saturating_add(NOTES_SCROLL_STEP)
        } else {
            offset.saturating_sub(NOTES_SCROLL_STEP)
        };
    }

    /// Editable text field `index` of a calculator tab.
    pub fn field_mut(&mut self, tab: TabId, index: usize) -> Option<&mut NumericField> {
        match tab {
            TabId::RateRisk => self.rate_risk_state.fields.get_mut(index),
            TabId::Mortality => self.mortality_state.fields.get_mut(index),
            TabId::Fertility => self.fertility_state.fields.get_mut(index),
            TabId::Ypll if index == 0 => Some(&mut self.ypll_state.benchmark),
            _ => None,
        }
    }

    /// Refresh the derived output of a calculator tab after an edit.
    pub fn recompute(&mut self, tab: TabId) {
        match tab {
            TabId::RateRisk => self.rate_risk_state.recompute(),
            TabId::Incidence => self.incidence_state.recompute(),
            TabId::Prevalence => self.prevalence_state.recompute(),
            TabId::Mortality => self.mortality_state.recompute(),
            TabId::Fertility => self.fertility_state.recompute(),
            TabId::Ypll => self.ypll_state.recompute(),
            TabId::LifeExpectancy => self.life_expectancy_state.recompute(),
            TabId::Overview | TabId::Quiz | TabId::Glossary => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycling() {
        let mut state = AppState::default();
        state.prev_tab();
        assert_eq!(state.active_tab, TabId::Glossary);
        state.next_tab();
        state.next_tab();
        assert_eq!(state.active_tab, TabId::RateRisk);
    }

    #[test]
    fn field_edit_then_recompute() {
        let mut state = AppState::default();
        let field = state.field_mut(TabId::Fertility, 0).unwrap();
        field.set_text("-5");
        state.recompute(TabId::Fertility);
        assert!(state.fertility_state.outcome.error().is_some());

        assert!(state.field_mut(TabId::Ypll, 1).is_none());
        assert!(state.field_mut(TabId::Quiz, 0).is_none());
    }

    #[test]
    fn notes_scroll_is_per_tab() {
        let mut state = AppState::default();
        state.switch_tab(TabId::Prevalence);
        state.scroll_notes(true);
        state.scroll_notes(true);
        state.scroll_notes(false);
        assert_eq!(state.active_notes_scroll(), NOTES_SCROLL_STEP);

        state.switch_tab(TabId::Ypll);
        assert_eq!(state.active_notes_scroll(), 0);
        state.scroll_notes(false);
        assert_eq!(state.active_notes_scroll(), 0);
    }
}
