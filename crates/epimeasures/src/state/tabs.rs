/// Tab identifiers, one per explainer topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    RateRisk,
    Incidence,
    Prevalence,
    Mortality,
    Fertility,
    Ypll,
    LifeExpectancy,
    Quiz,
    Glossary,
}

impl TabId {
    pub const ALL: [TabId; 10] = [
        TabId::Overview,
        TabId::RateRisk,
        TabId::Incidence,
        TabId::Prevalence,
        TabId::Mortality,
        TabId::Fertility,
        TabId::Ypll,
        TabId::LifeExpectancy,
        TabId::Quiz,
        TabId::Glossary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::RateRisk => "Rate & Risk",
            TabId::Incidence => "Incidence",
            TabId::Prevalence => "Prevalence",
            TabId::Mortality => "Mortality",
            TabId::Fertility => "Fertility",
            TabId::Ypll => "YPLL",
            TabId::LifeExpectancy => "Life Expectancy",
            TabId::Quiz => "Quiz",
            TabId::Glossary => "Glossary",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::RateRisk => 1,
            TabId::Incidence => 2,
            TabId::Prevalence => 3,
            TabId::Mortality => 4,
            TabId::Fertility => 5,
            TabId::Ypll => 6,
            TabId::LifeExpectancy => 7,
            TabId::Quiz => 8,
            TabId::Glossary => 9,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Digit that jumps to this tab: `1`..`9`, then `0` for the tenth.
    pub fn hotkey(&self) -> char {
        match self.index() {
            9 => '0',
            i => char::from(b'1' + i as u8),
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        match c {
            '0' => Some(TabId::Glossary),
            '1'..='9' => Self::from_index(c as usize - '1' as usize),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_index(tab.index()), Some(tab));
            assert_eq!(TabId::from_hotkey(tab.hotkey()), Some(tab));
        }
        assert_eq!(TabId::from_index(10), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(TabId::Glossary.next(), TabId::Overview);
        assert_eq!(TabId::Overview.prev(), TabId::Glossary);
        assert_eq!(TabId::RateRisk.next(), TabId::Incidence);
    }
}
