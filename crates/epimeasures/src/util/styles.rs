//! Common styling utilities for TUI components

use epimeasures_core::Agreement;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for formulas
pub const FORMULA_COLOR: Color = Color::LightYellow;

pub const POSITIVE_COLOR: Color = Color::Green;

pub const NEGATIVE_COLOR: Color = Color::Red;

pub const WARNING_COLOR: Color = Color::Yellow;

/// First chart series (risk, survival, unadjusted)
pub const SERIES_A_COLOR: Color = Color::LightBlue;

/// Second chart series (rate, adjusted)
pub const SERIES_B_COLOR: Color = Color::LightRed;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Same as [`focused_block`], with help text on the bottom border while focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green/yellow/red for how well `P ≈ I·D` tracks the exact prevalence.
pub fn agreement_color(agreement: Agreement) -> Color {
    match agreement {
        Agreement::Good => POSITIVE_COLOR,
        Agreement::Fair => WARNING_COLOR,
        Agreement::Poor => NEGATIVE_COLOR,
    }
}

pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_COLOR)
        .add_modifier(Modifier::BOLD)
}
