//! Mode flags

use super::Mode;

/// Four independent on/off flags. Any combination is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeState {
    draw: bool,
    extrude: bool,
    moving: bool,
    edit_vertices: bool,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        match mode {
            Mode::Draw => self.draw,
            Mode::Extrude => self.extrude,
            Mode::Move => self.moving,
            Mode::EditVertices => self.edit_vertices,
        }
    }

    pub fn set(&mut self, mode: Mode, active: bool) {
        *self.flag_mut(mode) = active;
    }

    /// Flip a mode and return its new value
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let flag = self.flag_mut(mode);
        *flag = !*flag;
        *flag
    }

    /// Active modes in dispatch order
    pub fn active_modes(&self) -> Vec<Mode> {
        Mode::ALL
            .into_iter()
            .filter(|m| self.is_active(*m))
            .collect()
    }

    fn flag_mut(&mut self, mode: Mode) -> &mut bool {
        match mode {
            Mode::Draw => &mut self.draw,
            Mode::Extrude => &mut self.extrude,
            Mode::Move => &mut self.moving,
            Mode::EditVertices => &mut self.edit_vertices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut modes = ModeState::new();
        assert!(modes.toggle(Mode::Move));
        assert!(modes.is_active(Mode::Move));
        assert!(!modes.toggle(Mode::Move));
        assert!(!modes.is_active(Mode::Move));
    }

    #[test]
    fn test_modes_are_independent() {
        let mut modes = ModeState::new();
        modes.toggle(Mode::EditVertices);
        modes.toggle(Mode::Draw);
        modes.toggle(Mode::Extrude);

        assert_eq!(
            modes.active_modes(),
            vec![Mode::Draw, Mode::Extrude, Mode::EditVertices]
        );
    }
}
