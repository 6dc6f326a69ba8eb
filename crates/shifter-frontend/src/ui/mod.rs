//! Toolbar
//!
//! One toggle button per mode. Buttons only emit [`AppAction::ToggleMode`];
//! the action handler reports the resulting flag back through [`UiToggle`].

use crate::config::UiConfig;
use crate::state::{AppAction, Mode};

/// Receives mode flag changes so the UI can restyle
pub trait UiToggle {
    fn set_active(&mut self, mode: Mode, active: bool);
}

/// A mode toggle button
#[derive(Debug, Clone, PartialEq)]
pub struct ModeButton {
    pub mode: Mode,
    pub label: &'static str,
    pub active: bool,
    /// Current background color
    pub background: String,
}

/// The four mode buttons
#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<ModeButton>,
    active_color: String,
    inactive_color: String,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl Toolbar {
    pub fn new(config: &UiConfig) -> Self {
        let buttons = Mode::ALL
            .into_iter()
            .map(|mode| ModeButton {
                mode,
                label: mode.label(),
                active: false,
                background: config.inactive_color.clone(),
            })
            .collect();

        Self {
            buttons,
            active_color: config.active_color.clone(),
            inactive_color: config.inactive_color.clone(),
        }
    }

    pub fn buttons(&self) -> &[ModeButton] {
        &self.buttons
    }

    pub fn button(&self, mode: Mode) -> Option<&ModeButton> {
        self.buttons.iter().find(|b| b.mode == mode)
    }

    /// Press a button
    pub fn press(&self, mode: Mode) -> AppAction {
        AppAction::ToggleMode(mode)
    }
}

impl UiToggle for Toolbar {
    fn set_active(&mut self, mode: Mode, active: bool) {
        let color = if active {
            &self.active_color
        } else {
            &self.inactive_color
        };
        if let Some(button) = self.buttons.iter_mut().find(|b| b.mode == mode) {
            button.active = active;
            button.background = color.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_start_inactive() {
        let toolbar = Toolbar::default();
        assert_eq!(toolbar.buttons().len(), 4);
        for button in toolbar.buttons() {
            assert!(!button.active);
            assert_eq!(button.background, "#002aff");
        }
        assert_eq!(toolbar.button(Mode::EditVertices).unwrap().label, "Move Vertices");
    }

    #[test]
    fn test_set_active_recolors() {
        let mut toolbar = Toolbar::default();
        toolbar.set_active(Mode::Extrude, true);

        let button = toolbar.button(Mode::Extrude).unwrap();
        assert!(button.active);
        assert_eq!(button.background, "#041b8f");

        toolbar.set_active(Mode::Extrude, false);
        assert_eq!(toolbar.button(Mode::Extrude).unwrap().background, "#002aff");
    }

    #[test]
    fn test_press_emits_toggle() {
        let toolbar = Toolbar::default();
        assert_eq!(toolbar.press(Mode::Move), AppAction::ToggleMode(Mode::Move));
    }
}
