//! Keybindings configuration data structures.
//!
//! Serialized to/from `~/.epimeasures/keybindings.yaml`. Every section is
//! `#[serde(default)]`, so a file only needs the bindings it overrides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub global: GlobalBindings,
    pub navigation: NavigationBindings,
    /// Keys shared by the calculator widgets
    pub widgets: WidgetBindings,
    pub quiz: QuizBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
            next_tab: vec!["]".into()],
            prev_tab: vec!["[".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub next_panel: Vec<String>,
    pub prev_panel: Vec<String>,
    pub confirm: Vec<String>,
    /// Scroll the explainer notes
    pub scroll_up: Vec<String>,
    pub scroll_down: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            left: vec!["h".into(), "left".into()],
            right: vec!["l".into(), "right".into()],
            next_panel: vec!["tab".into()],
            prev_panel: vec!["shift+tab".into()],
            confirm: vec!["enter".into()],
            scroll_up: vec!["pageup".into(), "ctrl+u".into()],
            scroll_down: vec!["pagedown".into(), "ctrl+d".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetBindings {
    /// Type a new value into the focused field
    pub edit: Vec<String>,
    pub add: Vec<String>,
    pub delete: Vec<String>,
    /// Flip a checkbox or cycle a choice
    pub toggle: Vec<String>,
    /// Nudge a slider or follow-up time by one step
    pub increase: Vec<String>,
    pub decrease: Vec<String>,
    /// Restore the widget's example inputs
    pub reset: Vec<String>,
    /// Switch between the charts of a tab
    pub switch_chart: Vec<String>,
}

impl Default for WidgetBindings {
    fn default() -> Self {
        Self {
            edit: vec!["e".into(), "enter".into()],
            add: vec!["a".into()],
            delete: vec!["d".into(), "delete".into()],
            toggle: vec!["space".into(), "t".into()],
            increase: vec!["+".into(), "=".into()],
            decrease: vec!["-".into()],
            reset: vec!["r".into()],
            switch_chart: vec!["c".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizBindings {
    pub next_question: Vec<String>,
    pub prev_question: Vec<String>,
    pub answer: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for QuizBindings {
    fn default() -> Self {
        Self {
            next_question: vec!["n".into(), "l".into(), "right".into()],
            prev_question: vec!["p".into(), "h".into(), "left".into()],
            answer: vec!["enter".into(), "space".into()],
            reset: vec!["r".into()],
        }
    }
}
