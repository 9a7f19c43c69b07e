//! Years of potential life lost.

use crate::error::{Result, ValidationError, require_non_negative, require_positive};

pub const DEFAULT_BENCHMARK: f64 = 75.0;
pub const DEFAULT_AGES: [f64; 3] = [25.0, 40.0, 80.0];
/// Upper bound on the number of deaths entered in the calculator
pub const MAX_AGES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathYpll {
    pub age: f64,
    pub ypll: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YpllResult {
    pub per_death: Vec<DeathYpll>,
    pub total: f64,
}

fn validate_benchmark(benchmark: f64) -> Result<f64> {
    if benchmark.is_finite() && benchmark > 0.0 {
        Ok(benchmark)
    } else {
        Err(ValidationError::NonPositiveBenchmark)
    }
}

fn validate_age(age: f64) -> Result<f64> {
    if age.is_finite() && age >= 0.0 {
        Ok(age)
    } else {
        Err(ValidationError::InvalidAge)
    }
}

/// Years lost by one death: `max(0, benchmark - age)`.
pub fn years_lost(benchmark: f64, age: f64) -> f64 {
    if age < benchmark { benchmark - age } else { 0.0 }
}

/// Per-death and total YPLL against `benchmark`.
pub fn compute_ypll(benchmark: f64, ages: &[f64]) -> Result<YpllResult> {
    let benchmark = validate_benchmark(benchmark)?;

    let per_death = ages
        .iter()
        .map(|&age| {
            validate_age(age).map(|age| DeathYpll {
                age,
                ypll: years_lost(benchmark, age),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let total = per_death.iter().map(|d| d.ypll).sum();

    Ok(YpllResult { per_death, total })
}

/// Sorted list of ages at death, capped at [`MAX_AGES`].
#[derive(Debug, Clone, PartialEq)]
pub struct AgeList {
    ages: Vec<f64>,
}

impl Default for AgeList {
    fn default() -> Self {
        Self {
            ages: DEFAULT_AGES.to_vec(),
        }
    }
}

impl AgeList {
    pub fn new() -> Self {
        Self { ages: Vec::new() }
    }

    pub fn ages(&self) -> &[f64] {
        &self.ages
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ages.len() >= MAX_AGES
    }

    /// Insert an age, keeping the list sorted ascending.
    pub fn add(&mut self, age: f64) -> Result<()> {
        let age = validate_age(age)?;
        if self.is_full() {
            return Err(ValidationError::TooManyAges { max: MAX_AGES });
        }
        let pos = self.ages.partition_point(|&a| a <= age);
        self.ages.insert(pos, age);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<f64> {
        (index < self.ages.len()).then(|| self.ages.remove(index))
    }
}

// ============================================================================
// Grouped data
// ============================================================================

/// Deaths in an age band, represented by the band's midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeGroupDeaths {
    pub midpoint: f64,
    pub deaths: f64,
}

impl AgeGroupDeaths {
    pub const fn new(midpoint: f64, deaths: f64) -> Self {
        Self { midpoint, deaths }
    }
}

/// YPLL from grouped deaths, each death placed at its group midpoint.
pub fn grouped_ypll(benchmark: f64, groups: &[AgeGroupDeaths]) -> Result<f64> {
    let benchmark = validate_benchmark(benchmark)?;
    groups.iter().try_fold(0.0, |total, group| {
        let midpoint = validate_age(group.midpoint)?;
        let deaths = require_non_negative(group.deaths)?;
        Ok(total + deaths * years_lost(benchmark, midpoint))
    })
}

/// YPLL per `per` people under the benchmark age.
pub fn ypll_rate(total_ypll: f64, population_under_benchmark: f64, per: f64) -> Result<f64> {
    let total_ypll = require_non_negative(total_ypll)?;
    let population = require_positive(population_under_benchmark, "Population under benchmark")?;
    Ok(total_ypll / population * per)
}

/// Worked example: three age bands (0-9, 10-19, 20-29) at benchmark 75.
pub fn example_grouped_deaths() -> [AgeGroupDeaths; 3] {
    [
        AgeGroupDeaths::new(5.0, 2.0),
        AgeGroupDeaths::new(15.0, 9.0),
        AgeGroupDeaths::new(25.0, 4.0),
    ]
}
