//! A vertical list of labelled numeric inputs with one focused row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use epimeasures_core::PLACEHOLDER;
use epimeasures_core::descriptors::InputDescriptor;

use crate::state::NumericField;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block_with_help};

/// One row of a field list
pub struct FieldRow<'a> {
    pub label: &'a str,
    pub value: String,
    pub unit: &'a str,
}

impl<'a> From<&'a NumericField> for FieldRow<'a> {
    fn from(field: &'a NumericField) -> Self {
        let value = if field.text.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            field.text.clone()
        };
        Self {
            label: field.label,
            value,
            unit: field.unit,
        }
    }
}

/// Width of the label column, shared by every row so values line up.
fn label_width(rows: &[FieldRow]) -> usize {
    rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0)
}

pub fn field_lines<'a>(rows: &[FieldRow<'a>], selected: Option<usize>) -> Vec<Line<'a>> {
    let width = label_width(rows);
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let is_selected = selected == Some(idx);
            let marker = if is_selected { "> " } else { "  " };
            let value_style = if is_selected {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
                Span::raw(format!("{:<width$}  ", row.label, width = width)),
                Span::styled(format!("[{}]", row.value), value_style),
                Span::styled(format!(" {}", row.unit), Style::default().fg(HELP_COLOR)),
            ])
        })
        .collect()
}

/// Configuration for rendering a field list.
pub struct FieldList<'a> {
    title: &'a str,
    help_text: &'a str,
    rows: Vec<FieldRow<'a>>,
    selected: usize,
    focused: bool,
}

impl<'a> FieldList<'a> {
    pub fn new(title: &'a str, rows: Vec<FieldRow<'a>>) -> Self {
        Self {
            title,
            help_text: "",
            rows,
            selected: 0,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn help_text(mut self, help_text: &'a str) -> Self {
        self.help_text = help_text;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Render the rows in a focus-aware block; `extra` lines follow the fields.
    pub fn render(self, frame: &mut Frame, area: Rect, extra: Vec<Line<'a>>) {
        let mut lines = field_lines(&self.rows, self.focused.then_some(self.selected));
        if !extra.is_empty() {
            lines.push(Line::from(""));
            lines.extend(extra);
        }

        let block = focused_block_with_help(self.title, self.focused, self.help_text);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// A slider drawn as a bar of `width` cells with the value after it.
pub fn slider_line(descriptor: &InputDescriptor, value: f64, width: usize, focused: bool) -> Line<'static> {
    let filled = (descriptor.fraction(value) * width as f64).round() as usize;
    let filled = filled.min(width);
    let color = if focused { FOCUS_COLOR } else { Color::Gray };
    let marker = if focused { "> " } else { "  " };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
        Span::raw(format!("{:<14}", descriptor.label)),
        Span::styled("━".repeat(filled), Style::default().fg(color)),
        Span::styled("●", Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("─".repeat(width - filled), Style::default().fg(HELP_COLOR)),
        Span::raw(format!(" {} {}", value, descriptor.unit)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use epimeasures_core::descriptors::DURATION_YEARS;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let mut field = NumericField::new("Births", "births", 8000.0);
        field.set_text("");
        let row = FieldRow::from(&field);
        assert_eq!(row.value, PLACEHOLDER);
    }

    #[test]
    fn labels_are_aligned() {
        let rows = [
            FieldRow { label: "a", value: "1".into(), unit: "" },
            FieldRow { label: "long", value: "2".into(), unit: "" },
        ];
        let lines = field_lines(&rows, Some(1));
        assert_eq!(text(&lines[0]), "  a     [1] ");
        assert_eq!(text(&lines[1]), "> long  [2] ");
    }

    #[test]
    fn slider_fills_to_value() {
        let line = slider_line(&DURATION_YEARS, DURATION_YEARS.max, 10, false);
        let s = text(&line);
        assert!(s.contains(&"━".repeat(10)));
        assert!(!s.contains('─'));
    }
}
