//! Chart components drawn with terminal characters.

mod bar;
mod line_chart;

pub use bar::{bar, render_level};
pub use line_chart::{LineChart, axis_labels, plot_cells};
