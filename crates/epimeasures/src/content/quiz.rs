//! Multiple-choice practice questions.

use crate::state::TabId;

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the right answer
    pub correct: usize,
    pub correct_feedback: &'static str,
    pub incorrect_feedback: &'static str,
    pub explanation: &'static str,
    /// Tab whose section the question belongs to
    pub topic: TabId,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    pub fn feedback(&self, option: usize) -> &'static str {
        if self.is_correct(option) {
            self.correct_feedback
        } else {
            self.incorrect_feedback
        }
    }
}

pub const QUESTIONS: [Question; 15] = [
    Question {
        prompt: "Which statement best distinguishes a rate from a count?",
        options: &[
            "A rate is always larger than a count.",
            "A rate standardizes events to a population (and often time), while a count does not.",
            "A rate ignores population size.",
            "Counts include time; rates never do.",
        ],
        correct: 1,
        correct_feedback: "Correct! Rates standardize events to a population and often time, providing essential context that raw counts lack.",
        incorrect_feedback: "Not quite. Think about what a rate adds to a simple count. It's about context and comparison.",
        explanation: "A count is a simple tally (e.g., 10 cases), which is hard to interpret without context. A rate (e.g., 10 cases per 100,000 people per year) relates that count to the size of the population and the time period, allowing meaningful comparisons across groups or times.",
        topic: TabId::RateRisk,
    },
    Question {
        prompt: "A study tracks a condition that can recur within individuals. Which metric makes full use of the data?",
        options: &[
            "Point prevalence",
            "Period prevalence",
            "Incidence density (per person-time)",
            "Attributable risk",
        ],
        correct: 2,
        correct_feedback: "Correct! Incidence density uses person-time, making it ideal for dynamic populations and tracking recurrent events.",
        incorrect_feedback: "Consider which measure is designed to handle variable follow-up times and multiple events per person.",
        explanation: "Incidence density accounts for person-time and counts recurrent events within individuals, providing the most comprehensive measure when multiple episodes per person are possible.",
        topic: TabId::Incidence,
    },
    Question {
        prompt: "In a stable population with a rare disease, which change will increase prevalence the most?",
        options: &[
            "Longer average duration due to better survival",
            "Shorter duration due to faster recovery",
            "Lower incidence",
            "Smaller population size",
        ],
        correct: 0,
        correct_feedback: "Exactly! In the 'bathtub' model (P ≈ I × D), increasing duration keeps people in the prevalent pool longer, raising the water level.",
        incorrect_feedback: "Remember the formula P ≈ I × D. Which variable change would cause P to increase?",
        explanation: "When incidence is steady, extending the average duration (e.g., improved survival) keeps more cases in the population at any given time, thereby increasing prevalence.",
        topic: TabId::Prevalence,
    },
    Question {
        prompt: "10% of deaths in white children under 10 and 5% of deaths in black children under 10 were due to leukemia. Which statements are true?",
        options: &[
            "The relative risk for leukemia in white vs. black children is 2.0",
            "The attributable risk for leukemia in white vs. black children is 5/100",
            "Neither the attributable risk nor the relative risk can be determined from the data provided",
        ],
        correct: 2,
        correct_feedback: "Correct! The data is proportional mortality, not incidence. We can't determine risk without knowing the size of the at-risk populations.",
        incorrect_feedback: "This is a classic trap! The data shows the proportion of deaths, not the risk of getting the disease in the first place.",
        explanation: "The data provides proportional mortality (the proportion of total deaths due to leukemia), not risk or incidence. Relative or attributable risk needs incidence rates, which require the number of children at risk in each group.",
        topic: TabId::Mortality,
    },
    Question {
        prompt: "Which statement is true?",
        options: &[
            "CFR measures severity among cases, while mortality measures risk of death in the entire population.",
            "CFR and mortality are identical if the population is large.",
            "Mortality ignores time by definition.",
            "CFR requires the total population in the denominator.",
        ],
        correct: 0,
        correct_feedback: "That's right. CFR measures severity in the sick group (cases), while mortality measures death risk in the whole population.",
        incorrect_feedback: "Think about the denominators. CFR uses total cases, while mortality uses total population. They measure different things.",
        explanation: "CFR evaluates severity within the diseased group. Mortality evaluates risk within the entire population. One is about prognosis, the other about population impact.",
        topic: TabId::Mortality,
    },
    Question {
        prompt: "Which measure best adjusts for the population actually at risk of giving birth?",
        options: &[
            "Crude birth rate (CBR)",
            "General fertility rate (GFR)",
            "Crude death rate",
            "Infant mortality rate",
        ],
        correct: 1,
        correct_feedback: "Correct! The General Fertility Rate refines the denominator to women of childbearing age, the population actually at risk.",
        incorrect_feedback: "Think about which rate uses a more specific, relevant denominator for measuring fertility.",
        explanation: "The GFR limits the denominator to women of childbearing age (15–44). CBR includes the entire population (men, children, elderly), which dilutes the measure.",
        topic: TabId::Fertility,
    },
    Question {
        prompt: "Which scenario reduces YPLL the most?",
        options: &[
            "Preventing deaths among young adults",
            "Preventing deaths among those above the benchmark age",
            "Keeping incidence the same but shortening duration",
            "Increasing average age at death from 80 to 82 when benchmark is 75",
        ],
        correct: 0,
        correct_feedback: "Precisely. YPLL weights deaths at younger ages more heavily, so preventing these has the biggest impact on the measure.",
        incorrect_feedback: "Recall that YPLL stands for Years of Potential Life Lost. Which deaths represent the most potential lost?",
        explanation: "YPLL only includes deaths before the benchmark age (e.g., < 75). Preventing early deaths yields the greatest reduction, because each young death contributes many more years lost.",
        topic: TabId::Ypll,
    },
    Question {
        prompt: "Which statement about life expectancy is most accurate?",
        options: &[
            "It predicts the actual lifespan of any individual.",
            "It summarizes current age-specific mortality into an average for a hypothetical cohort.",
            "It equals median age at death.",
            "It ignores mortality at older ages.",
        ],
        correct: 1,
        correct_feedback: "Exactly. Life expectancy is a statistical summary of a population's current mortality rates, not a personal prediction.",
        incorrect_feedback: "Life expectancy is a population-level summary based on current death rates, not an individual's destiny.",
        explanation: "Life expectancy is a summary measure based on age-specific mortality rates applied to a hypothetical population via a life table. It includes mortality at all ages.",
        topic: TabId::LifeExpectancy,
    },
    Question {
        prompt: "Cancer registries report 40 new cases of bladder cancer per 100,000 men per year. Which rate is this?",
        options: &[
            "Point prevalence",
            "Period prevalence",
            "Incidence density",
            "Cumulative incidence",
            "Complication rate",
        ],
        correct: 2,
        correct_feedback: "Correct! Cases per person-time (100,000 men for a year) is the definition of incidence density.",
        incorrect_feedback: "Review the definition. The key here is new cases divided by person-time.",
        explanation: "This is a measure of new cases (incidence) over person-time (100,000 men for a year), which is the definition of incidence density.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "Sixty percent of adults have a serum cholesterol >200 mg/dL. Which rate is this?",
        options: &[
            "Point prevalence",
            "Complication rate",
            "Incidence density",
            "Cumulative incidence",
        ],
        correct: 0,
        correct_feedback: "Correct! This is a snapshot of an existing condition in a population at one time, which is point prevalence.",
        incorrect_feedback: "Think about whether this measures new events over time or existing cases at a single moment.",
        explanation: "This represents the proportion of a population with a condition at a single point in time, which is the definition of point prevalence.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "Which item is not required to judge a prevalence study's soundness?",
        options: &[
            "Following participants long enough for an outcome like anemia to occur",
            "Representative sample of the population",
            "Appropriate population (e.g., all women for cervical infection)",
            "Clear case definition",
            "Defined source population",
        ],
        correct: 0,
        correct_feedback: "That's right. Prevalence studies are cross-sectional and don't require follow-up. Follow-up is for incidence studies.",
        incorrect_feedback: "Prevalence studies measure what exists now. Which option describes something that happens over time?",
        explanation: "Prevalence studies are a snapshot and do not require follow-up time. Following participants over time is characteristic of an incidence or cohort study.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "During an outbreak, 400 people are ill; 16 die. Population = 2,000,000. Which is correct?",
        options: &[
            "CFR = 4%; cause-specific mortality ≈ 0.8 per 100,000.",
            "CFR = 0.8%; mortality = 4 per 100,000.",
            "CFR = 0.4%; mortality = 4 per 100,000.",
            "CFR = 8%; mortality = 0.4 per 100,000.",
        ],
        correct: 0,
        correct_feedback: "Excellent calculation! CFR = 16/400 = 4%. Mortality = (16/2M) × 100k = 0.8.",
        incorrect_feedback: "Check your formulas. CFR = deaths/cases. Mortality = deaths/population.",
        explanation: "CFR = 16 / 400 = 4%. Mortality = (16 / 2,000,000) × 100,000 = 0.8 per 100,000.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "RA incidence ≈ 40/100,000/year and prevalence ≈ 1/100. Estimated average duration?",
        options: &["10 years", "25 years", "33 years", "40 years"],
        correct: 1,
        correct_feedback: "Perfect! Using P ≈ I × D, we get D ≈ P/I = (1/100) / (40/100,000) = 25 years.",
        incorrect_feedback: "Rearrange P ≈ I × D to solve for D. Remember to align the units.",
        explanation: "For rare diseases, P ≈ I × D, so D ≈ P / I = 0.01 / 0.0004 = 25 years.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "A study enrolls eligible patients over several months; earlier enrollees contribute more follow-up. The denominator uses person-time. This measure is:",
        options: &[
            "Cumulative incidence",
            "Incidence density",
            "Complication rate",
            "Period prevalence",
        ],
        correct: 1,
        correct_feedback: "Correct! Using person-time to account for variable follow-up is the key feature of incidence density.",
        incorrect_feedback: "The mention of person-time is the major clue here. Which measure uses that in its denominator?",
        explanation: "The use of person-time in the denominator to account for variable follow-up times is the defining feature of incidence density.",
        topic: TabId::Quiz,
    },
    Question {
        prompt: "Life expectancy at birth increases if:",
        options: &[
            "Age-specific mortality rates decline across multiple age groups.",
            "Median age of the population rises (with no other changes).",
            "There are more older people due to past high fertility.",
            "A single centenarian survives to 110.",
        ],
        correct: 0,
        correct_feedback: "Correct! Life expectancy is a direct reflection of age-specific mortality rates. If they improve, life expectancy increases.",
        incorrect_feedback: "Life expectancy is a summary of death rates across the whole population. What would cause that summary to improve?",
        explanation: "Life expectancy is calculated from current age-specific mortality rates. A broad decline in these rates is what causes it to increase.",
        topic: TabId::Quiz,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_index_is_in_range() {
        for q in &QUESTIONS {
            assert!(q.correct < q.options.len(), "{}", q.prompt);
        }
    }

    #[test]
    fn feedback_follows_selection() {
        let q = &QUESTIONS[0];
        assert_eq!(q.feedback(1), q.correct_feedback);
        assert_eq!(q.feedback(0), q.incorrect_feedback);
    }
}
