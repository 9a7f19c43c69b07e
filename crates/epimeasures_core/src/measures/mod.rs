//! Closed-form epidemiological measures.
//!
//! Every function here is pure: identical inputs always give identical outputs.

pub mod fertility;
pub mod life_table;
pub mod mortality;
pub mod person_time;
pub mod prevalence;
pub mod rate_risk;
pub mod ypll;
