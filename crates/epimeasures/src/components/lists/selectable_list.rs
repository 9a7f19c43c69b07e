//! Selection and focus movement driven by the navigation bindings.

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;

/// Trait for panel enums that support next/previous focus cycling.
pub trait PanelNavigable: Copy + Eq {
    /// Get the next panel in the cycle.
    fn next(self) -> Self;
    /// Get the previous panel in the cycle.
    fn prev(self) -> Self;
}

/// Scroll offset that keeps the selected row near the middle of the viewport.
pub fn calculate_centered_scroll(selected: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }

    let center = visible / 2;
    if selected <= center {
        0
    } else if selected >= total.saturating_sub(visible.saturating_sub(center)) {
        total.saturating_sub(visible)
    } else {
        selected.saturating_sub(center)
    }
}

/// Move `selected` with the up/down bindings, wrapping at both ends.
///
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(
    key: &AppKeyEvent,
    keybindings: &KeybindingsConfig,
    selected: &mut usize,
    total: usize,
) -> bool {
    if total == 0 {
        return false;
    }

    if KeybindingsConfig::matches(key, &keybindings.navigation.down) {
        *selected = (*selected + 1) % total;
        true
    } else if KeybindingsConfig::matches(key, &keybindings.navigation.up) {
        *selected = if *selected == 0 {
            total - 1
        } else {
            *selected - 1
        };
        true
    } else {
        false
    }
}

/// Cycle panel focus with the next/prev panel bindings.
pub fn handle_panel_navigation<P: PanelNavigable>(
    key: &AppKeyEvent,
    keybindings: &KeybindingsConfig,
    focused: &mut P,
) -> bool {
    if KeybindingsConfig::matches(key, &keybindings.navigation.next_panel) {
        *focused = focused.next();
        true
    } else if KeybindingsConfig::matches(key, &keybindings.navigation.prev_panel) {
        *focused = focused.prev();
        true
    } else {
        false
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Side {
        Left,
        Right,
    }

    impl PanelNavigable for Side {
        fn next(self) -> Self {
            match self {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
            }
        }

        fn prev(self) -> Self {
            self.next()
        }
    }

    #[test]
    fn test_centered_scroll() {
        assert_eq!(calculate_centered_scroll(4, 5, 10), 0);
        assert_eq!(calculate_centered_scroll(3, 20, 10), 0);
        assert_eq!(calculate_centered_scroll(10, 20, 10), 5);
        assert_eq!(calculate_centered_scroll(19, 20, 10), 10);
    }

    #[test]
    fn test_list_navigation_wraps() {
        let bindings = KeybindingsConfig::default();
        let mut selected = 0;

        assert!(handle_list_navigation(
            &AppKeyEvent::new(KeyCode::Up),
            &bindings,
            &mut selected,
            3
        ));
        assert_eq!(selected, 2);
        assert!(handle_list_navigation(
            &AppKeyEvent::new(KeyCode::Char('j')),
            &bindings,
            &mut selected,
            3
        ));
        assert_eq!(selected, 0);
        assert!(!handle_list_navigation(
            &AppKeyEvent::new(KeyCode::Char('j')),
            &bindings,
            &mut selected,
            0
        ));
    }

    #[test]
    fn test_panel_navigation() {
        let bindings = KeybindingsConfig::default();
        let mut focus = Side::Left;
        assert!(handle_panel_navigation(
            &AppKeyEvent::new(KeyCode::Tab),
            &bindings,
            &mut focus
        ));
        assert_eq!(focus, Side::Right);
        assert!(!handle_panel_navigation(
            &AppKeyEvent::new(KeyCode::Enter),
            &bindings,
            &mut focus
        ));
    }
}
