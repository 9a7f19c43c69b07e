//! Person-time and incidence density.

use crate::descriptors::FOLLOW_UP_YEARS;

/// Default scale for incidence density: cases per 1,000 person-years
pub const PER_THOUSAND: f64 = 1000.0;
pub const MAX_PARTICIPANTS: usize = 10;
/// Follow-up given to participants added to the cohort
pub const NEW_PARTICIPANT_FOLLOW_UP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub follow_up_years: f64,
    pub had_event: bool,
}

impl Participant {
    pub const fn new(id: u32, follow_up_years: f64, had_event: bool) -> Self {
        Self {
            id,
            follow_up_years,
            had_event,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidenceDensity {
    pub total_person_time: f64,
    pub total_cases: usize,
    /// Cases per `per` person-years
    pub density: f64,
}

/// Incidence density per 1,000 person-years.
pub fn compute_incidence_density(participants: &[Participant]) -> IncidenceDensity {
    compute_incidence_density_per(participants, PER_THOUSAND)
}

/// Incidence density scaled by `per`. Zero person-time gives a density of 0.
pub fn compute_incidence_density_per(participants: &[Participant], per: f64) -> IncidenceDensity {
    let total_person_time: f64 = participants
        .iter()
        .map(|p| p.follow_up_years.max(0.0))
        .sum();
    let total_cases = participants.iter().filter(|p| p.had_event).count();
    let density = if total_person_time > 0.0 {
        total_cases as f64 / total_person_time * per
    } else {
        0.0
    };

    IncidenceDensity {
        total_person_time,
        total_cases,
        density,
    }
}

/// Editable cohort for the person-time visualizer
#[derive(Debug, Clone, PartialEq)]
pub struct Cohort {
    participants: Vec<Participant>,
    next_id: u32,
}

impl Default for Cohort {
    fn default() -> Self {
        Self {
            participants: vec![
                Participant::new(1, 5.0, false),
                Participant::new(2, 3.0, true),
                Participant::new(3, 8.0, false),
            ],
            next_id: 4,
        }
    }
}

impl Cohort {
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn summary(&self) -> IncidenceDensity {
        compute_incidence_density(&self.participants)
    }

    /// Add a participant with the default follow-up. Returns the new id, or
    /// `None` when the cohort is full.
    pub fn add(&mut self) -> Option<u32> {
        if self.participants.len() >= MAX_PARTICIPANTS {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.participants
            .push(Participant::new(id, NEW_PARTICIPANT_FOLLOW_UP, false));
        Some(id)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != id);
        self.participants.len() != before
    }

    pub fn toggle_event(&mut self, id: u32) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
            p.had_event = !p.had_event;
        }
    }

    /// Set follow-up, snapped to the slider grid.
    pub fn set_follow_up(&mut self, id: u32, years: f64) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
            p.follow_up_years = FOLLOW_UP_YEARS.snap(years);
        }
    }
}
