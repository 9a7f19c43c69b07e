use crate::components::PanelNavigable;

/// Panel focus for the Rate & Risk tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRiskPanel {
    Calculator,
    Chart,
}

impl PanelNavigable for RateRiskPanel {
    fn next(self) -> Self {
        match self {
            Self::Calculator => Self::Chart,
            Self::Chart => Self::Calculator,
        }
    }

    fn prev(self) -> Self {
        self.next()
    }
}

/// Panel focus for the YPLL tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YpllPanel {
    Benchmark,
    Ages,
}

impl PanelNavigable for YpllPanel {
    fn next(self) -> Self {
        match self {
            Self::Benchmark => Self::Ages,
            Self::Ages => Self::Benchmark,
        }
    }

    fn prev(self) -> Self {
        self.next()
    }
}

/// Which slider of the prevalence bathtub has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevalenceSlider {
    Incidence,
    Duration,
}

impl PanelNavigable for PrevalenceSlider {
    fn next(self) -> Self {
        match self {
            Self::Incidence => Self::Duration,
            Self::Duration => Self::Incidence,
        }
    }

    fn prev(self) -> Self {
        self.next()
    }
}

/// Chart shown on the Life Expectancy tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeChart {
    Survival,
    CumulativeRisk,
}

impl LifeChart {
    pub fn title(self) -> &'static str {
        match self {
            Self::Survival => "Survival Curve",
            Self::CumulativeRisk => "Cumulative Risk by Age",
        }
    }
}

impl PanelNavigable for LifeChart {
    fn next(self) -> Self {
        match self {
            Self::Survival => Self::CumulativeRisk,
            Self::CumulativeRisk => Self::Survival,
        }
    }

    fn prev(self) -> Self {
        self.next()
    }
}
