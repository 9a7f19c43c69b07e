//! Explainer sections and their notes.
//!
//! Every section of the explainer belongs to one tab. The Overview tab lists
//! them as a table of contents; each tab renders the notes of its sections
//! next to its interactive widgets.

use crate::state::TabId;

/// One line of explainer text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    Heading(&'static str),
    Text(&'static str),
    Formula(&'static str),
    Bullet(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub tab: TabId,
    pub notes: &'static [Note],
}

use self::Note::{Bullet, Formula, Heading, Text};

pub const SECTIONS: [Section; 15] = [
    Section {
        title: "Count",
        tab: TabId::RateRisk,
        notes: &[
            Heading("Count"),
            Text("The simple number of events or people affected, such as cases or deaths."),
            Bullet("24 influenza cases, 10 deaths, or 50 new TB cases."),
            Text("Counts lack context about population size or time."),
        ],
    },
    Section {
        title: "Rate",
        tab: TabId::RateRisk,
        notes: &[
            Heading("Rate"),
            Text("Events in a defined time divided by the average population at risk, often scaled by a constant k."),
            Formula("Rate = Events / Population × k per unit time"),
            Text("50 new TB cases in a city of 500,000 in 1 year:"),
            Formula("50 / 500,000 × 100,000 = 10 per 100,000 per year"),
        ],
    },
    Section {
        title: "Risk (Cumulative Incidence)",
        tab: TabId::RateRisk,
        notes: &[
            Heading("Risk (Cumulative Incidence)"),
            Text("The proportion of initially unaffected people who experience the event during a period in a fixed cohort."),
            Formula("Risk = New events / Number initially at risk"),
        ],
    },
    Section {
        title: "Interactive Calculator",
        tab: TabId::RateRisk,
        notes: &[],
    },
    Section {
        title: "Relationship Between Rate and Risk",
        tab: TabId::RateRisk,
        notes: &[
            Heading("Relationship Between Rate and Risk"),
            Text("A rate measures how quickly events occur; a risk is the probability an event occurs within a period."),
            Bullet("Rare events: 10 cases in 100,000 over 1 year. Risk 0.01%, rate 10 per 100,000 per year."),
            Bullet("Common events: 30,000 cases in 100,000 over 10 years. Risk 30%, but the at-risk pool shrinks to about 85,000."),
            Formula("Rate = 30,000 / 850,000 person-years × 100,000 ≈ 3,529 (≈ 3.5% per year)"),
            Text("Risk and rate diverge when follow-up is long or events are common: rate measures speed, risk measures probability."),
        ],
    },
    Section {
        title: "Visualizing the Difference",
        tab: TabId::RateRisk,
        notes: &[
            Heading("Visualizing the Difference"),
            Formula("Risk = 1 − e^(−Rate × Time)"),
            Formula("Rate = −ln(1 − Risk) / Time"),
            Text("With Time = 1 the curves overlap for rare events; the rate climbs to infinity as risk approaches 100%."),
        ],
    },
    Section {
        title: "Incidence",
        tab: TabId::Incidence,
        notes: &[
            Heading("Incidence"),
            Text("The occurrence of new cases among those initially free of the outcome during a period."),
            Formula("Cumulative incidence = New cases / Number initially at risk"),
            Bullet("Best for fixed cohorts with minimal loss to follow-up; also called attack rate."),
            Formula("Incidence density = New cases / Total person-time at risk"),
            Bullet("Handles variable observation times and recurrent events."),
            Text("100 people for 1 year and 10 people for 10 years both contribute 100 person-years."),
        ],
    },
    Section {
        title: "Prevalence",
        tab: TabId::Prevalence,
        notes: &[
            Heading("Prevalence"),
            Text("The proportion of existing cases (old + new) in a population at a point or during a period."),
            Formula("Prevalence = Existing cases / Total population"),
            Bullet("Point prevalence: disease at a single point in time."),
            Bullet("Period prevalence: disease during a specified interval."),
            Text("Useful for planning and resource allocation, but not for measuring risk."),
        ],
    },
    Section {
        title: "Relationship: Incidence, Prevalence & Duration",
        tab: TabId::Prevalence,
        notes: &[
            Heading("Incidence, Prevalence & Duration"),
            Formula("P = (I × D) / (1 + I × D)"),
            Text("Incidence is the inflow, recovery or death the outflow, and prevalence the water level."),
            Formula("Rare disease (P < 10%): P ≈ I × D"),
            Text("The approximation holds only when incidence and duration are stable over time."),
        ],
    },
    Section {
        title: "Mortality and Fatality",
        tab: TabId::Mortality,
        notes: &[
            Heading("Mortality"),
            Formula("Mortality rate = Deaths in period / Average population × k"),
            Text("Measures the risk of dying in the entire population."),
            Heading("Case-Fatality Rate (CFR)"),
            Formula("CFR = Deaths among cases / Total cases × 100%"),
            Text("Measures severity among the diagnosed: 10 deaths among 200 cases is a 30-day CFR of 5%."),
            Heading("Complication Rate"),
            Formula("Complication rate = Patients with a complication / Patients exposed"),
            Heading("Proportional Mortality"),
            Formula("Proportional mortality = Deaths from a cause / All deaths in the period"),
            Text("Depends on deaths from other causes too, so it cannot show risk on its own."),
            Heading("Relationships"),
            Formula("Mortality = Incidence × CFR"),
            Formula("Survival rate = 1 − CFR"),
        ],
    },
    Section {
        title: "Birth Rate vs Fertility Rate vs Fetal Death Rate",
        tab: TabId::Fertility,
        notes: &[
            Heading("Crude Birth Rate (CBR)"),
            Formula("CBR = Live births / Midyear population × 1,000"),
            Heading("General Fertility Rate (GFR)"),
            Formula("GFR = Live births / Women aged 15–44 × 1,000"),
            Text("GFR restricts the denominator to women at risk of giving birth."),
            Heading("Age-Specific and Total Fertility Rate"),
            Formula("ASFR = Births to women in group / Women in group × 1,000"),
            Formula("TFR = Σ (ASFR × width) / 1,000"),
            Heading("Fetal, Perinatal, Neonatal and Infant Rates"),
            Formula("Fetal death rate = Fetal deaths / (Fetal deaths + Live births) × 1,000"),
            Formula("Perinatal = (Stillbirths + deaths < 7 days) / (Stillbirths + Live births) × 1,000"),
            Formula("Neonatal = Deaths < 28 days / Live births × 1,000"),
            Formula("Infant = Deaths < 1 year / Live births × 1,000"),
        ],
    },
    Section {
        title: "Years of Potential Life Lost (YPLL)",
        tab: TabId::Ypll,
        notes: &[
            Heading("Years of Potential Life Lost"),
            Text("A measure of premature mortality weighting deaths before a benchmark age (65 or 75)."),
            Formula("YPLL per death = Benchmark age − Age at death (if younger)"),
            Formula("YPLL rate = Total YPLL / Population under benchmark × k"),
            Bullet("Early deaths contribute more than deaths later in life."),
            Bullet("Preventing deaths in early adulthood gives the largest reduction."),
        ],
    },
    Section {
        title: "Life Expectancy & Lifetime Risk",
        tab: TabId::LifeExpectancy,
        notes: &[
            Heading("Life Expectancy at Birth"),
            Text("The average years a newborn would live if current age-specific mortality stayed constant."),
            Text("Derived from a life table following a hypothetical cohort of 100,000 newborns."),
            Heading("Lifetime Risk of Disease"),
            Formula("Lifetime risk = ∫ i(a) × s(a) da"),
            Text("1% per decade from 30 to 80 gives ≈ 5%; if only 70% survive other causes, ≈ 3.5%."),
            Text("Ignoring competing mortality overestimates true lifetime risk."),
        ],
    },
    Section {
        title: "Practice MCQs",
        tab: TabId::Quiz,
        notes: &[],
    },
    Section {
        title: "References",
        tab: TabId::Glossary,
        notes: &[],
    },
];

pub const REFERENCES: [&str; 3] = [
    "Fletcher, R. H., Fletcher, S. W., & Fletcher, G. S. (2014). Clinical Epidemiology: The Essentials (5th ed.). Lippincott Williams & Wilkins.",
    "Elmore, J. G., Wild, D. M. G., Nelson, H. D., & Katz, D. L. (2020). Jekel's Epidemiology, Biostatistics, Preventive Medicine, and Public Health (5th ed.). Elsevier.",
    "American College of Preventive Medicine (ACPM). (2023). Epidemiology Course: Board Review Slides.",
];

/// Sections shown on a tab, in reading order.
pub fn sections_for(tab: TabId) -> impl Iterator<Item = &'static Section> {
    SECTIONS.iter().filter(move |section| section.tab == tab)
}

/// All notes of a tab, concatenated.
pub fn notes_for(tab: TabId) -> Vec<Note> {
    sections_for(tab)
        .flat_map(|section| section.notes.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_points_at_a_content_tab() {
        assert!(SECTIONS.iter().all(|s| s.tab != TabId::Overview));
    }

    #[test]
    fn rate_risk_tab_keeps_section_order() {
        let titles: Vec<_> = sections_for(TabId::RateRisk).map(|s| s.title).collect();
        assert_eq!(titles.first(), Some(&"Count"));
        assert_eq!(titles.last(), Some(&"Visualizing the Difference"));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn notes_for_concatenates_sections() {
        let notes = notes_for(TabId::Prevalence);
        assert!(notes.contains(&Note::Formula("P = (I × D) / (1 + I × D)")));
        assert!(notes_for(TabId::Quiz).is_empty());
    }
}
