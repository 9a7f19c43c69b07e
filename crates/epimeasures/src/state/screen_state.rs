//! Per-screen state structs.
//!
//! Each calculator keeps the raw inputs as typed and a cached derived output.
//! Every mutation goes through a method that finishes with `recompute()`, so
//! the output is never stale.

use epimeasures_core::descriptors::{DURATION_YEARS, FOLLOW_UP_YEARS, INCIDENCE_PER_THOUSAND, RISK_SLIDER};
use epimeasures_core::measures::life_table::{AgeGroupRate, DEFAULT_RADIX, example_age_groups};
use epimeasures_core::measures::mortality::{case_fatality_rate, mortality_rate, survival_from_cfr};
use epimeasures_core::{
    AgeList, BirthRateInput, BirthRates, Cohort, IncidenceDensity, LifeTable, PrevalenceResult,
    RateRiskInput, RateRiskResult, TimeUnit, ValidationError, YpllResult, build_life_table,
    compute_birth_rates, compute_prevalence, compute_rate_risk, compute_ypll, rate_from_risk,
};

use super::fields::{NumericField, Outcome, parse_all};
use super::panels::{LifeChart, PrevalenceSlider, RateRiskPanel, YpllPanel};
use crate::components::collapsible::CollapsibleState;
use crate::content::{GLOSSARY, QUESTIONS, Question, SECTIONS};

// ============================================================================
// Overview
// ============================================================================

#[derive(Debug, Default)]
pub struct OverviewState {
    /// Index into the section list
    pub selected: usize,
}

impl OverviewState {
    pub fn section_count(&self) -> usize {
        SECTIONS.len()
    }
}

// ============================================================================
// Rate & Risk
// ============================================================================

#[derive(Debug)]
pub struct RateRiskState {
    pub fields: [NumericField; 3],
    pub time_unit: TimeUnit,
    /// Calculator row with focus; the last row is the time unit
    pub selected_row: usize,
    pub focused_panel: RateRiskPanel,
    /// Constant risk over one unit of time, driven by the chart slider
    pub risk: f64,
    pub outcome: Outcome<RateRiskResult>,
}

impl RateRiskState {
    pub const EVENTS: usize = 0;
    pub const POPULATION: usize = 1;
    pub const MULTIPLIER: usize = 2;
    pub const TIME_UNIT_ROW: usize = 3;
    pub const ROWS: usize = 4;

    pub fn recompute(&mut self) {
        let counts = match (
            self.fields[Self::EVENTS].value(),
            self.fields[Self::POPULATION].value(),
        ) {
            (Some(events), Some(population)) => Some((events, population)),
            _ => None,
        };
        // An unparsable multiplier falls back to the default inside the engine
        let multiplier = self.fields[Self::MULTIPLIER].value().unwrap_or(f64::NAN);

        self.outcome = counts
            .map(|(events, population)| compute_rate_risk(events, population, multiplier))
            .into();

        if let Some(warning) = self.outcome.ready().and_then(|r| r.warning) {
            tracing::warn!(%warning, "rate/risk input out of range");
        }
        tracing::debug!(outcome = self.outcome.kind(), "recomputed rate and risk");
    }

    pub fn cycle_time_unit(&mut self) {
        self.time_unit = self.time_unit.next();
    }

    /// Instantaneous rate matching the slider risk over one time unit.
    pub fn slider_rate(&self) -> Result<f64, ValidationError> {
        rate_from_risk(self.risk, 1.0)
    }

    pub fn nudge_risk(&mut self, up: bool) {
        self.risk = if up {
            RISK_SLIDER.step_up(self.risk)
        } else {
            RISK_SLIDER.step_down(self.risk)
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for RateRiskState {
    fn default() -> Self {
        let input = RateRiskInput::default();
        let mut state = Self {
            fields: [
                NumericField::new("Number of events", "events", input.events),
                NumericField::new("Population at risk", "people", input.population),
                NumericField::new("Rate multiplier", "per", input.multiplier),
            ],
            time_unit: input.time_unit,
            selected_row: 0,
            focused_panel: RateRiskPanel::Calculator,
            risk: RISK_SLIDER.default,
            outcome: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// Incidence (person-time)
// ============================================================================

#[derive(Debug)]
pub struct IncidenceState {
    pub cohort: Cohort,
    /// Index of the selected participant
    pub selected: usize,
    pub summary: IncidenceDensity,
}

impl IncidenceState {
    pub fn recompute(&mut self) {
        self.summary = self.cohort.summary();
        tracing::debug!(
            person_time = self.summary.total_person_time,
            cases = self.summary.total_cases,
            density = self.summary.density,
            "recomputed incidence density"
        );
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.cohort.participants().get(self.selected).map(|p| p.id)
    }

    /// Add a participant and select it. `None` when the cohort is full.
    pub fn add(&mut self) -> Option<u32> {
        let id = self.cohort.add()?;
        self.selected = self.cohort.len() - 1;
        self.recompute();
        Some(id)
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.cohort.remove(id);
            self.selected = self.selected.min(self.cohort.len().saturating_sub(1));
            self.recompute();
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.cohort.toggle_event(id);
            self.recompute();
        }
    }

    pub fn nudge_follow_up(&mut self, up: bool) {
        let Some(participant) = self.cohort.participants().get(self.selected) else {
            return;
        };
        let (id, current) = (participant.id, participant.follow_up_years);
        let years = if up {
            FOLLOW_UP_YEARS.step_up(current)
        } else {
            FOLLOW_UP_YEARS.step_down(current)
        };
        self.set_follow_up(id, years);
    }

    pub fn set_follow_up(&mut self, id: u32, years: f64) {
        self.cohort.set_follow_up(id, years);
        self.recompute();
    }
}

impl Default for IncidenceState {
    fn default() -> Self {
        let cohort = Cohort::default();
        let summary = cohort.summary();
        Self {
            cohort,
            selected: 0,
            summary,
        }
    }
}

// ============================================================================
// Prevalence
// ============================================================================

#[derive(Debug)]
pub struct PrevalenceState {
    /// Incidence per 1,000 person-years
    pub incidence: f64,
    /// Average duration in years
    pub duration: f64,
    pub focused: PrevalenceSlider,
    pub outcome: Outcome<PrevalenceResult>,
}

impl PrevalenceState {
    pub fn recompute(&mut self) {
        self.outcome = compute_prevalence(self.incidence, self.duration).into();
        tracing::debug!(
            incidence = self.incidence,
            duration = self.duration,
            outcome = self.outcome.kind(),
            "recomputed prevalence"
        );
    }

    /// Move the focused slider one step.
    pub fn nudge(&mut self, up: bool) {
        let (descriptor, value) = match self.focused {
            PrevalenceSlider::Incidence => (&INCIDENCE_PER_THOUSAND, &mut self.incidence),
            PrevalenceSlider::Duration => (&DURATION_YEARS, &mut self.duration),
        };
        *value = if up {
            descriptor.step_up(*value)
        } else {
            descriptor.step_down(*value)
        };
        self.recompute();
    }
}

impl Default for PrevalenceState {
    fn default() -> Self {
        let mut state = Self {
            incidence: INCIDENCE_PER_THOUSAND.default,
            duration: DURATION_YEARS.default,
            focused: PrevalenceSlider::Incidence,
            outcome: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// Mortality
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortalitySummary {
    /// Case fatality as a proportion of cases
    pub cfr: f64,
    /// Proportion of cases who survive
    pub survival: f64,
    /// Cause-specific mortality per 100,000 population
    pub mortality_per_100k: f64,
}

/// Case fatality and cause-specific mortality from one set of counts.
pub fn summarize_mortality(deaths: f64, cases: f64, population: f64) -> Result<MortalitySummary, ValidationError> {
    let cfr = case_fatality_rate(deaths, cases)?;
    let mortality_per_100k = mortality_rate(deaths, population, 100_000.0)?;
    Ok(MortalitySummary {
        cfr,
        survival: survival_from_cfr(cfr),
        mortality_per_100k,
    })
}

#[derive(Debug)]
pub struct MortalityState {
    /// Deaths, cases, population
    pub fields: [NumericField; 3],
    pub selected_row: usize,
    pub outcome: Outcome<MortalitySummary>,
}

impl MortalityState {
    pub fn recompute(&mut self) {
        self.outcome = parse_all(&self.fields)
            .map(|[deaths, cases, population]| summarize_mortality(deaths, cases, population))
            .into();
        tracing::debug!(outcome = self.outcome.kind(), "recomputed mortality");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for MortalityState {
    fn default() -> Self {
        let mut state = Self {
            fields: [
                NumericField::new("Deaths from the disease", "deaths", 10.0),
                NumericField::new("People with the disease", "cases", 200.0),
                NumericField::new("Total population", "people", 1_000_000.0),
            ],
            selected_row: 0,
            outcome: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// Fertility
// ============================================================================

#[derive(Debug)]
pub struct FertilityState {
    /// Births, total population, women aged 15-44
    pub fields: [NumericField; 3],
    pub selected_row: usize,
    pub outcome: Outcome<BirthRates>,
}

impl FertilityState {
    pub fn recompute(&mut self) {
        self.outcome = parse_all(&self.fields)
            .map(|[births, total, women]| compute_birth_rates(births, total, women))
            .into();
        tracing::debug!(outcome = self.outcome.kind(), "recomputed birth rates");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for FertilityState {
    fn default() -> Self {
        let input = BirthRateInput::default();
        let mut state = Self {
            fields: [
                NumericField::new("Live births", "births", input.births),
                NumericField::new("Total mid-year population", "people", input.total_population),
                NumericField::new("Women aged 15-44", "women", input.women_population),
            ],
            selected_row: 0,
            outcome: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// YPLL
// ============================================================================

#[derive(Debug)]
pub struct YpllState {
    pub benchmark: NumericField,
    pub ages: AgeList,
    /// Index into the age list
    pub selected: usize,
    pub focused_panel: YpllPanel,
    pub outcome: Outcome<YpllResult>,
}

impl YpllState {
    pub fn recompute(&mut self) {
        self.outcome = self
            .benchmark
            .value()
            .map(|benchmark| compute_ypll(benchmark, self.ages.ages()))
            .into();
        tracing::debug!(
            ages = self.ages.len(),
            outcome = self.outcome.kind(),
            "recomputed YPLL"
        );
    }

    pub fn add_age(&mut self, age: f64) -> Result<(), ValidationError> {
        self.ages.add(age)?;
        self.recompute();
        Ok(())
    }

    pub fn remove_selected(&mut self) {
        if self.ages.remove(self.selected).is_some() {
            self.selected = self.selected.min(self.ages.len().saturating_sub(1));
            self.recompute();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for YpllState {
    fn default() -> Self {
        let mut state = Self {
            benchmark: NumericField::new(
                "Benchmark age",
                "years",
                epimeasures_core::measures::ypll::DEFAULT_BENCHMARK,
            ),
            ages: AgeList::default(),
            selected: 0,
            focused_panel: YpllPanel::Benchmark,
            outcome: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// Life expectancy
// ============================================================================

#[derive(Debug)]
pub struct LifeExpectancyState {
    pub groups: [AgeGroupRate; 5],
    /// Index of the age group being edited
    pub selected: usize,
    pub chart: LifeChart,
    pub table: Outcome<LifeTable>,
}

impl LifeExpectancyState {
    pub fn recompute(&mut self) {
        self.table = build_life_table(DEFAULT_RADIX, &self.groups).into();
        tracing::debug!(
            life_expectancy = self.table.ready().map(LifeTable::life_expectancy_at_birth),
            "recomputed life table"
        );
    }

    /// Step the selected group's death rate by 1 per 1,000.
    pub fn nudge_rate(&mut self, up: bool) {
        let Some(group) = self.groups.get(self.selected) else {
            return;
        };
        let rate = group.death_rate_per_thousand + if up { 1.0 } else { -1.0 };
        self.set_rate(self.selected, rate.max(0.0));
    }

    pub fn set_rate(&mut self, index: usize, rate: f64) {
        if let Some(group) = self.groups.get_mut(index) {
            group.death_rate_per_thousand = rate;
            self.recompute();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for LifeExpectancyState {
    fn default() -> Self {
        let mut state = Self {
            groups: example_age_groups(),
            selected: 0,
            chart: LifeChart::Survival,
            table: Outcome::Pending,
        };
        state.recompute();
        state
    }
}

// ============================================================================
// Quiz
// ============================================================================

#[derive(Debug)]
pub struct QuizState {
    /// Index of the question on screen
    pub current: usize,
    /// Highlighted option
    pub cursor: usize,
    /// Selected option per question
    pub answers: Vec<Option<usize>>,
}

impl QuizState {
    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.current.min(QUESTIONS.len() - 1)]
    }

    pub fn next(&mut self) {
        self.go_to((self.current + 1) % QUESTIONS.len());
    }

    pub fn prev(&mut self) {
        self.go_to((self.current + QUESTIONS.len() - 1) % QUESTIONS.len());
    }

    fn go_to(&mut self, index: usize) {
        self.current = index;
        self.cursor = self.answers[index].unwrap_or(0);
    }

    pub fn move_cursor(&mut self, down: bool) {
        let count = self.question().options.len();
        self.cursor = if down {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    /// Record the highlighted option as the answer to the current question.
    pub fn answer(&mut self) {
        self.answers[self.current] = Some(self.cursor);
        tracing::debug!(
            question = self.current,
            option = self.cursor,
            correct = self.question().is_correct(self.cursor),
            "quiz answer"
        );
    }

    pub fn selected(&self) -> Option<usize> {
        self.answers[self.current]
    }

    /// The explanation is revealed only after a correct answer.
    pub fn show_explanation(&self) -> bool {
        self.selected()
            .is_some_and(|option| self.question().is_correct(option))
    }

    /// (correct, answered)
    pub fn score(&self) -> (usize, usize) {
        self.answers
            .iter()
            .zip(QUESTIONS.iter())
            .filter_map(|(answer, q)| answer.map(|a| q.is_correct(a)))
            .fold((0, 0), |(correct, answered), ok| {
                (correct + usize::from(ok), answered + 1)
            })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            current: 0,
            cursor: 0,
            answers: vec![None; QUESTIONS.len()],
        }
    }
}

// ============================================================================
// Glossary
// ============================================================================

#[derive(Debug)]
pub struct GlossaryState {
    pub selected: usize,
    /// One entry per glossary term
    pub terms: Vec<CollapsibleState>,
    pub references: CollapsibleState,
    /// Focus is on the references panel rather than the term list
    pub references_focused: bool,
}

impl GlossaryState {
    pub fn toggle_selected(&mut self) {
        if let Some(term) = self.terms.get_mut(self.selected) {
            term.toggle();
        }
    }

    pub fn expand_all(&mut self) {
        self.terms.iter_mut().for_each(CollapsibleState::expand);
    }

    pub fn collapse_all(&mut self) {
        self.terms.iter_mut().for_each(CollapsibleState::collapse);
    }
}

impl Default for GlossaryState {
    fn default() -> Self {
        Self {
            selected: 0,
            terms: vec![CollapsibleState::new(false); GLOSSARY.len()],
            references: CollapsibleState::default(),
            references_focused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epimeasures_core::Warning;
    use epimeasures_core::measures::person_time::MAX_PARTICIPANTS;
    use epimeasures_core::measures::ypll::MAX_AGES;

    #[test]
    fn rate_risk_defaults_are_computed() {
        let state = RateRiskState::default();
        let result = state.outcome.ready().copied().unwrap();
        assert!((result.risk - 0.0001).abs() < 1e-15);
        assert!((result.rate - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rate_risk_blank_field_is_pending_and_bad_multiplier_falls_back() {
        let mut state = RateRiskState::default();
        state.fields[RateRiskState::MULTIPLIER].set_text("abc");
        state.recompute();
        assert_eq!(state.outcome.ready().unwrap().multiplier, 100_000.0);

        state.fields[RateRiskState::EVENTS].set_text("");
        state.recompute();
        assert!(state.outcome.is_pending());
    }

    #[test]
    fn rate_risk_validation_and_warning() {
        let mut state = RateRiskState::default();
        state.fields[RateRiskState::POPULATION].set_text("0");
        state.recompute();
        assert_eq!(state.outcome.error(), Some(&ValidationError::NonPositivePopulation));

        state.fields[RateRiskState::POPULATION].set_text("500000");
        state.fields[RateRiskState::EVENTS].set_text("600000");
        state.recompute();
        assert_eq!(
            state.outcome.ready().unwrap().warning,
            Some(Warning::EventsExceedPopulation)
        );
    }

    #[test]
    fn risk_slider_stays_in_range() {
        let mut state = RateRiskState::default();
        for _ in 0..200 {
            state.nudge_risk(true);
        }
        assert!((state.risk - 0.98).abs() < 1e-9);
        assert!(state.slider_rate().unwrap().is_finite());

        state.reset();
        assert!((state.risk - 0.1).abs() < 1e-9);
    }

    #[test]
    fn incidence_cohort_edits_recompute() {
        let mut state = IncidenceState::default();
        assert_eq!(state.summary.total_person_time, 16.0);
        assert_eq!(state.summary.density, 62.5);

        state.toggle_selected();
        assert_eq!(state.summary.total_cases, 2);

        state.nudge_follow_up(true);
        assert_eq!(state.summary.total_person_time, 16.5);

        state.selected = 2;
        state.remove_selected();
        assert_eq!(state.cohort.len(), 2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn incidence_cohort_is_capped() {
        let mut state = IncidenceState::default();
        while state.add().is_some() {}
        assert_eq!(state.cohort.len(), MAX_PARTICIPANTS);
        assert_eq!(state.selected, MAX_PARTICIPANTS - 1);
    }

    #[test]
    fn prevalence_slider_steps() {
        let mut state = PrevalenceState::default();
        let approx = state.outcome.ready().unwrap().approx;
        assert!((approx - 0.05).abs() < 1e-12);

        state.focused = PrevalenceSlider::Duration;
        state.nudge(false);
        assert_eq!(state.duration, 9.5);
        state.duration = DURATION_YEARS.min;
        state.nudge(false);
        assert_eq!(state.duration, DURATION_YEARS.min);
    }

    #[test]
    fn mortality_summary() {
        let state = MortalityState::default();
        let summary = state.outcome.ready().copied().unwrap();
        assert!((summary.cfr - 0.05).abs() < 1e-12);
        assert!((summary.survival - 0.95).abs() < 1e-12);
        assert!((summary.mortality_per_100k - 1.0).abs() < 1e-9);

        assert_eq!(
            summarize_mortality(5.0, 4.0, 100.0),
            Err(ValidationError::DeathsExceedCases)
        );
    }

    #[test]
    fn fertility_rejects_women_above_total() {
        let mut state = FertilityState::default();
        assert!(state.outcome.ready().is_some());

        state.fields[2].set_text("700000");
        state.recompute();
        assert_eq!(
            state.outcome.error(),
            Some(&ValidationError::SubpopulationExceedsTotal)
        );
    }

    #[test]
    fn ypll_list_edits() {
        let mut state = YpllState::default();
        assert_eq!(state.outcome.ready().unwrap().total, 85.0);

        state.add_age(60.0).unwrap();
        assert_eq!(state.outcome.ready().unwrap().total, 100.0);
        assert_eq!(state.add_age(-1.0), Err(ValidationError::InvalidAge));

        while state.ages.len() < MAX_AGES {
            state.add_age(50.0).unwrap();
        }
        assert_eq!(
            state.add_age(50.0),
            Err(ValidationError::TooManyAges { max: MAX_AGES })
        );

        state.benchmark.set_text("0");
        state.recompute();
        assert_eq!(state.outcome.error(), Some(&ValidationError::NonPositiveBenchmark));
    }

    #[test]
    fn life_table_rate_edits() {
        let mut state = LifeExpectancyState::default();
        let before = state.table.ready().unwrap().life_expectancy_at_birth();

        state.selected = 0;
        for _ in 0..5 {
            state.nudge_rate(true);
        }
        let after = state.table.ready().unwrap().life_expectancy_at_birth();
        assert!(after < before);

        let last = state.groups.len() - 1;
        state.set_rate(last, 0.0);
        assert!(state.table.error().is_some());

        state.reset();
        assert_eq!(state.table.ready().unwrap().life_expectancy_at_birth(), before);
    }

    #[test]
    fn quiz_explanation_only_after_correct_answer() {
        let mut state = QuizState::default();
        let correct = state.question().correct;
        let wrong = (correct + 1) % state.question().options.len();

        state.cursor = wrong;
        state.answer();
        assert!(!state.show_explanation());
        assert_eq!(state.score(), (0, 1));

        state.cursor = correct;
        state.answer();
        assert!(state.show_explanation());
        assert_eq!(state.score(), (1, 1));

        state.next();
        assert_eq!(state.cursor, 0);
        state.prev();
        assert_eq!(state.cursor, correct);

        state.reset();
        assert_eq!(state.score(), (0, 0));
    }

    #[test]
    fn quiz_navigation_wraps() {
        let mut state = QuizState::default();
        state.prev();
        assert_eq!(state.current, QUESTIONS.len() - 1);
        state.next();
        assert_eq!(state.current, 0);
    }
}
