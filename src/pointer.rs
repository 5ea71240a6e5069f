//! Page-scoped pointer position
//!
//! One instance per page, written by pointer-move events and read (never
//! mutated) by the particle field each tick.

use glam::Vec2;

/// Latest known pointer position in viewport pixels.
///
/// `None` until the first move event, so the field applies no repulsion
/// before the pointer has ever entered the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move event.
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Some(Vec2::new(x, y));
    }

    /// Forget the pointer (e.g. it left the page).
    pub fn clear(&mut self) {
        self.pos = None;
    }

    pub fn get(&self) -> Option<Vec2> {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_until_first_move() {
        let mut pointer = PointerState::new();
        assert_eq!(pointer.get(), None);
        pointer.set(120.0, 48.0);
        assert_eq!(pointer.get(), Some(Vec2::new(120.0, 48.0)));
        pointer.clear();
        assert_eq!(pointer.get(), None);
    }
}
