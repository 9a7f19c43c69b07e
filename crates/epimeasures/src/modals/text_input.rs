use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::TextInputModal;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 9;

pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        MODAL_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        modal.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, mf.chunks[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(mf.chunks[2]);

    let scrolled = calculate_scroll(&modal.value, modal.cursor_pos, input_inner.width as usize);
    let input_line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, " ");

    frame.render_widget(input_block, mf.chunks[2]);
    frame.render_widget(Paragraph::new(input_line), input_inner);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Confirm")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[4]);
}

/// Line-editing keys for the text input modal.
pub fn handle_text_input_key(key: &AppKeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        _ => {
            if let Some(c) = key.char() {
                modal.insert_char(c);
            }
            ModalResult::Continue
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::state::ModalAction;

    #[test]
    fn test_typing_and_confirm() {
        let mut modal = TextInputModal::new("Add age", "Age at death", "", ModalAction::AddAge);
        for c in "62".chars() {
            handle_text_input_key(&AppKeyEvent::new(KeyCode::Char(c)), &mut modal);
        }
        handle_text_input_key(&AppKeyEvent::new(KeyCode::Backspace), &mut modal);

        let result = handle_text_input_key(&AppKeyEvent::new(KeyCode::Enter), &mut modal);
        assert_eq!(result, ModalResult::Confirmed(ModalAction::AddAge, "6".into()));
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut modal = TextInputModal::new("Edit", "Value", "1", ModalAction::AddAge);
        let mut key = AppKeyEvent::new(KeyCode::Char('u'));
        key.ctrl = true;
        assert_eq!(handle_text_input_key(&key, &mut modal), ModalResult::Continue);
        assert_eq!(modal.value, "1");

        assert_eq!(
            handle_text_input_key(&AppKeyEvent::new(KeyCode::Esc), &mut modal),
            ModalResult::Cancelled
        );
    }
}
