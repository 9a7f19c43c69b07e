//! Typed descriptions of the numeric inputs each widget exposes.
//!
//! A descriptor enumerates the recognized fields of a slider or number box
//! (label, bounds, step, unit) and knows how to keep a value on its grid.

/// Descriptor for a bounded numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputDescriptor {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
    pub default: f64,
}

impl InputDescriptor {
    pub const fn new(label: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            label,
            min,
            max,
            step,
            unit: "",
            default: min,
        }
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub const fn default_value(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Snap to the nearest step counted from `min`, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        // Rounding to 1e-9 keeps 0.1 + 0.2 style drift out of displayed values
        let snapped = ((self.min + steps * self.step) * 1e9).round() / 1e9;
        self.clamp(snapped)
    }

    pub fn step_up(&self, value: f64) -> f64 {
        self.snap(value + self.step)
    }

    pub fn step_down(&self, value: f64) -> f64 {
        self.snap(value - self.step)
    }

    /// Position of `value` within the range as a 0..=1 fraction (for slider tracks).
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }
}

// ============================================================================
// Widget presets
// ============================================================================

/// Incidence slider of the prevalence ("bathtub") model
pub const INCIDENCE_PER_THOUSAND: InputDescriptor =
    InputDescriptor::new("Incidence (I)", 0.0, 100.0, 0.5)
        .unit("per 1,000 person-years")
        .default_value(5.0);

/// Duration slider of the prevalence model
pub const DURATION_YEARS: InputDescriptor = InputDescriptor::new("Duration (D)", 1.0, 50.0, 0.5)
    .unit("years")
    .default_value(10.0);

/// Follow-up slider per participant in the person-time visualizer
pub const FOLLOW_UP_YEARS: InputDescriptor = InputDescriptor::new("Follow-up", 0.5, 10.0, 0.5)
    .unit("years")
    .default_value(5.0);

/// Risk slider on the rate-vs-risk chart
pub const RISK_SLIDER: InputDescriptor = InputDescriptor::new("Risk", 0.0, 0.98, 0.01)
    .default_value(0.1);
