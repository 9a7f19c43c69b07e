//! Explainer text of a tab, shown in a scrollable panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::content::{Note, notes_for};
use crate::state::TabId;
use crate::util::styles::{FORMULA_COLOR, HELP_COLOR, header_style, focused_block};

pub fn note_line(note: &Note) -> Line<'static> {
    match *note {
        Note::Heading(text) => Line::from(Span::styled(text, header_style())),
        Note::Text(text) => Line::from(text),
        Note::Formula(text) => Line::from(vec![
            Span::raw("    "),
            Span::styled(
                text,
                Style::default().fg(FORMULA_COLOR).add_modifier(Modifier::ITALIC),
            ),
        ]),
        Note::Bullet(text) => Line::from(vec![
            Span::styled("  • ", Style::default().fg(HELP_COLOR)),
            Span::raw(text),
        ]),
    }
}

/// Lines for every note of a tab, with a blank line before each heading
/// after the first.
pub fn note_lines(notes: &[Note]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(notes.len() * 2);
    for note in notes {
        if matches!(note, Note::Heading(_)) && !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(note_line(note));
    }
    lines
}

/// Render the notes of `tab`. The scroll offset is clamped so the last
/// line stays reachable but never scrolls out of view.
pub fn render_notes(frame: &mut Frame, area: Rect, tab: TabId, scroll: u16) {
    let lines = note_lines(&notes_for(tab));
    let max_scroll = (lines.len() as u16).saturating_sub(1);

    let paragraph = Paragraph::new(lines)
        .block(focused_block(" Notes ", false))
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_separated() {
        let notes = [
            Note::Heading("Rate"),
            Note::Text("per unit time"),
            Note::Heading("Risk"),
        ];
        let lines = note_lines(&notes);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].width(), 0);
    }

    #[test]
    fn every_content_tab_has_notes() {
        for tab in TabId::ALL {
            if !matches!(tab, TabId::Overview | TabId::Quiz | TabId::Glossary) {
                assert!(!note_lines(&notes_for(tab)).is_empty(), "{:?}", tab);
            }
        }
    }
}
