#[derive(Debug, Clone, Copy)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
}

pub const GLOSSARY: [GlossaryTerm; 8] = [
    GlossaryTerm {
        term: "Cohort",
        definition: "A group of individuals who share a defining characteristic (e.g., birth year, exposure to a risk factor) and are followed over time to observe outcomes.",
    },
    GlossaryTerm {
        term: "Incidence",
        definition: "The rate of new cases of a disease occurring in a population at risk during a specified time period. It measures the appearance of new events.",
    },
    GlossaryTerm {
        term: "Morbidity",
        definition: "Any departure, subjective or objective, from a state of physiological or psychological well-being. In short, it refers to sickness, illness, or disease.",
    },
    GlossaryTerm {
        term: "Mortality",
        definition: "A measure of the frequency of death in a defined population during a specified interval.",
    },
    GlossaryTerm {
        term: "Person-Time",
        definition: "An estimate of the actual time-at-risk that all participants contributed to a study. It is the sum of the time each individual was observed and at risk of the outcome.",
    },
    GlossaryTerm {
        term: "Prevalence",
        definition: "The proportion of a population found to have a condition at a specific point in time (point prevalence) or during a period of time (period prevalence). It measures existing cases (old + new).",
    },
    GlossaryTerm {
        term: "Rate",
        definition: "A measure of the frequency with which an event occurs in a defined population over a specified period of time. The denominator includes a measure of time.",
    },
    GlossaryTerm {
        term: "Risk (Cumulative Incidence)",
        definition: "The probability that an individual will develop a disease over a specified period, calculated as the number of new cases divided by the number of people at risk at the start of the period.",
    },
];
