mod helpers;
mod message;
mod text_input;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState};

pub use message::render_message_modal;
pub use text_input::render_text_input_modal;

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal confirmed with action and the typed value
    Confirmed(ModalAction, String),
    /// Modal was cancelled
    Cancelled,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::TextInput(modal) => render_text_input_modal(frame, modal),
        ModalState::Message(modal) => render_message_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: AppKeyEvent, state: &mut AppState) -> ModalResult {
    match &mut state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::TextInput(modal) => text_input::handle_text_input_key(&key, modal),
        ModalState::Message(_) => message::handle_message_key(&key),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 10, area), Rect::new(20, 15, 60, 10));

        // Larger than the area: clipped
        let small = Rect::new(5, 5, 30, 8);
        assert_eq!(centered_rect(60, 10, small), Rect::new(5, 5, 30, 8));
    }
}
