//! Matching key events against configured bindings.
//!
//! Bindings are strings such as `"j"`, `"ctrl+c"`, `"shift+tab"` or `"space"`.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

#[cfg(feature = "native")]
use crate::data::ConfigError;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Render a key event in binding syntax.
    ///
    /// Shift is only spelled out for letters and named keys; symbols such as
    /// `+` or `]` already carry it.
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                if c.is_alphabetic() && (key.shift || c.is_uppercase()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::F(n) => format!("f{}", n),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            code => match Self::named_key(code) {
                Some((name, shiftable)) => {
                    if shiftable && key.shift {
                        parts.push("shift");
                    }
                    name.to_string()
                }
                None => return String::new(),
            },
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Binding name of a non-character key, and whether shift is spelled out.
    fn named_key(code: &KeyCode) -> Option<(&'static str, bool)> {
        let named = match code {
            KeyCode::Enter => ("enter", false),
            KeyCode::Tab => ("tab", true),
            KeyCode::Backspace => ("backspace", false),
            KeyCode::Delete => ("delete", false),
            KeyCode::Esc => ("esc", false),
            KeyCode::Up => ("up", true),
            KeyCode::Down => ("down", true),
            KeyCode::Left => ("left", true),
            KeyCode::Right => ("right", true),
            KeyCode::Home => ("home", false),
            KeyCode::End => ("end", false),
            KeyCode::PageUp => ("pageup", false),
            KeyCode::PageDown => ("pagedown", false),
            _ => return None,
        };
        Some(named)
    }

    /// Check if a key event matches any of the bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// First binding of an action, for help texts.
    pub fn primary(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }

    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings, falling back to defaults when the file is missing or
    /// does not parse.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_saphyr::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read keybindings file");
                Self::default()
            }
        }
    }

    #[cfg(feature = "native")]
    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path(data_dir);
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize keybindings: {}", e)))?;

        std::fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create {}: {}", data_dir.display(), e)))?;
        std::fs::write(path, yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write keybindings: {}", e)))
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, ctrl: bool, shift: bool) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl,
            alt: false,
            shift,
        }
    }

    #[test]
    fn test_key_to_string() {
        let cases = [
            (make_key(KeyCode::Char('a'), false, false), "a"),
            (make_key(KeyCode::Char('c'), true, false), "ctrl+c"),
            (make_key(KeyCode::Char('J'), false, true), "shift+j"),
            (make_key(KeyCode::Char(' '), false, false), "space"),
            (make_key(KeyCode::Char('+'), false, true), "+"),
            (make_key(KeyCode::Enter, false, false), "enter"),
            (make_key(KeyCode::Tab, false, true), "shift+tab"),
            (make_key(KeyCode::BackTab, false, true), "shift+tab"),
        ];
        for (key, expected) in cases {
            assert_eq!(KeybindingsConfig::app_key_to_string(&key), expected);
        }
    }

    #[test]
    fn test_matches_defaults() {
        let config = KeybindingsConfig::default();

        assert!(KeybindingsConfig::matches(
            &make_key(KeyCode::Down, false, false),
            &config.navigation.down
        ));
        assert!(KeybindingsConfig::matches(
            &make_key(KeyCode::Char('+'), false, true),
            &config.widgets.increase
        ));
        assert!(KeybindingsConfig::matches(
            &make_key(KeyCode::Char(' '), false, false),
            &config.widgets.toggle
        ));
        assert!(!KeybindingsConfig::matches(
            &make_key(KeyCode::Char('q'), true, false),
            &config.global.quit
        ));
    }

    #[test]
    fn test_unsupported_key_never_matches() {
        let key = make_key(KeyCode::Null, false, false);
        assert!(!KeybindingsConfig::matches(&key, &[String::new()]));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = KeybindingsConfig::default();
        config.global.quit = vec!["x".into()];

        config.save(dir.path()).unwrap();
        let loaded = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            KeybindingsConfig::path(dir.path()),
            "navigation:\n  down: [\"s\"]\n",
        )
        .unwrap();

        let loaded = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(loaded.navigation.down, vec!["s".to_string()]);
        assert_eq!(loaded.navigation.up, KeybindingsConfig::default().navigation.up);
        assert_eq!(loaded.global, KeybindingsConfig::default().global);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "global: [not, a, map").unwrap();

        assert_eq!(
            KeybindingsConfig::load_or_default(dir.path()),
            KeybindingsConfig::default()
        );
    }
}
