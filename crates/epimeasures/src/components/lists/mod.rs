//! List navigation helpers shared by the screens.

mod selectable_list;

pub use selectable_list::{
    PanelNavigable, calculate_centered_scroll, handle_list_navigation, handle_panel_navigation,
};
