mod app_state;
mod fields;
mod modal;
mod modal_action;
mod panels;
mod screen_state;
mod tabs;

pub use app_state::*;
pub use fields::*;
pub use modal::*;
pub use modal_action::*;
pub use panels::*;
pub use screen_state::*;
pub use tabs::*;
