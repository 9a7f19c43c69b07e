//! Rendering helpers shared by the modals.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

/// A line of text with the cursor drawn as an inverted cell at `cursor_pos`
/// (in characters). At the end of the text the cursor is a blank block.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let before: String = display_value.chars().take(cursor_pos).collect();
    let mut rest = display_value.chars().skip(cursor_pos);
    spans.push(Span::raw(before));
    match rest.next() {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), cursor_style));
            spans.push(Span::raw(rest.collect::<String>()));
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// The visible part of a text input wider than its box.
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`, in characters
    pub cursor_pos: usize,
}

/// Window `value` around the cursor so it fits `max_width` cells
/// (two are reserved for padding).
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let len = value.chars().count();

    if len <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(len);
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: value.chars().skip(start).take(end - start).collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

/// Layout of a rendered modal frame.
pub struct ModalFrame {
    /// The layout chunks for content placement
    pub chunks: Rc<[Rect]>,
}

/// Center, clear and border a modal, then split its inside by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

// ========== Help Text Builder ==========

/// Key hints with colored keys, e.g. `[Enter] Confirm  [Esc] Cancel`.
#[derive(Default)]
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn line(self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }
        Line::from(spans)
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.line())
    }

    pub fn build_centered(self) -> Paragraph<'static> {
        self.build().alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_calculate_scroll_short_text() {
        let result = calculate_scroll("12.5", 3, 20);
        assert_eq!(result.display_value, "12.5");
        assert_eq!(result.cursor_pos, 3);
    }

    #[test]
    fn test_calculate_scroll_long_text() {
        let value = "1234567890123456789012345";
        let result = calculate_scroll(value, 20, 12);
        assert_eq!(result.display_value.chars().count(), 10);
        assert_eq!(result.display_value, "6789012345");
        assert_eq!(result.cursor_pos, 5);
    }

    #[test]
    fn test_calculate_scroll_multibyte() {
        let value = "µµµµµµµµµµµµ";
        let result = calculate_scroll(value, 12, 6);
        assert_eq!(result.display_value, "µµµµ");
        assert_eq!(result.cursor_pos, 4);
    }

    #[test]
    fn test_render_cursor_line() {
        let middle = render_cursor_line("hello", 2, "");
        assert_eq!(middle.spans[1].content, "l");
        assert_eq!(text(&middle), "hello");

        let end = render_cursor_line("hi", 2, " ");
        assert_eq!(text(&end), " hi ");
    }

    #[test]
    fn test_help_text_line() {
        let line = HelpText::new()
            .key("[Enter]", Color::Green, "Confirm")
            .key("[Esc]", Color::Yellow, "Cancel")
            .line();
        assert_eq!(text(&line), "[Enter] Confirm  [Esc] Cancel");
    }
}
