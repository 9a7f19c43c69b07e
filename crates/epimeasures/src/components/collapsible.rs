//! Collapsible panels and list entries.
//!
//! Used by the glossary, where each term folds down to its title.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};

use crate::util::styles::{FOCUS_COLOR, focused_block};

/// State for a collapsible panel
#[derive(Debug, Clone)]
pub struct CollapsibleState {
    /// Whether the panel is expanded
    pub expanded: bool,
}

impl Default for CollapsibleState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl CollapsibleState {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}

pub struct CollapsiblePanel<'a> {
    title: &'a str,
    expanded: bool,
    focused: bool,
}

impl<'a> CollapsiblePanel<'a> {
    pub fn new(title: &'a str, expanded: bool) -> Self {
        Self {
            title,
            expanded,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn indicator(&self) -> &'static str {
        if self.expanded { "[-]" } else { "[+]" }
    }

    /// Bordered block titled with the fold indicator.
    pub fn block(&self) -> Block<'static> {
        focused_block(&format!(" {} {} ", self.indicator(), self.title), self.focused)
    }

    /// Single-line header for panels rendered inline in a list.
    pub fn header_line(&self) -> Line<'a> {
        let title_style = if self.focused {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let marker = if self.focused { "> " } else { "  " };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
            Span::styled(format!("{} ", self.indicator()), Style::default().fg(Color::DarkGray)),
            Span::styled(self.title, title_style),
        ])
    }

    /// Render only the title bar.
    pub fn render_collapsed(&self, frame: &mut Frame, area: Rect) {
        let title_line = Line::from(vec![
            Span::styled(
                format!("{} ", self.indicator()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" (collapsed)", Style::default().fg(Color::DarkGray)),
        ]);

        let block = focused_block("", self.focused).title(title_line);

        frame.render_widget(block, area);
    }

    /// Apply a fold key (`-` collapse, `+` expand, space toggle).
    /// Returns true if the key was handled.
    pub fn handle_collapse_key(key: char, state: &mut CollapsibleState) -> bool {
        match key {
            '-' | '_' => {
                state.collapse();
                true
            }
            '+' | '=' => {
                state.expand();
                true
            }
            ' ' => {
                state.toggle();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsible_state_toggle() {
        let mut state = CollapsibleState::default();
        assert!(state.expanded);

        state.toggle();
        assert!(!state.expanded);

        state.toggle();
        assert!(state.expanded);
    }

    #[test]
    fn test_collapse_keys() {
        let mut state = CollapsibleState::new(false);
        assert!(CollapsiblePanel::handle_collapse_key('+', &mut state));
        assert!(state.expanded);
        assert!(CollapsiblePanel::handle_collapse_key('-', &mut state));
        assert!(!state.expanded);
        assert!(!CollapsiblePanel::handle_collapse_key('x', &mut state));
    }

    #[test]
    fn test_header_shows_indicator() {
        let line = CollapsiblePanel::new("Cohort", false).header_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  [+] Cohort");
    }
}
