//! Terminal stand-ins for touch gestures.
//!
//! | input                        | gesture                 |
//! |------------------------------|-------------------------|
//! | `+` / `=` / wheel up         | pinch out (grow)        |
//! | `-` / `_` / wheel down       | pinch in (shrink)       |
//! | `↑` / `k`                    | swipe up (happier)      |
//! | `↓` / `j`                    | swipe down (sadder)     |
//! | `e`                          | cycle eyes              |
//! | `b`                          | cycle eyebrows          |
//! | `r`                          | reset                   |
//! | `q` / `Esc` / `Ctrl-C`       | quit                    |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// A user gesture, decoupled from the device that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Multiply the face scale by `factor`.
    Pinch { factor: f64 },
    SwipeUp,
    SwipeDown,
    CycleEyes,
    CycleBrows,
    Reset,
    Quit,
}

/// Maps raw input onto gestures.
#[derive(Debug, Clone, Copy)]
pub struct GestureMap {
    /// Pinch-out multiplier; pinch-in uses `1 / step`.
    pub step: f64,
}

impl Default for GestureMap {
    fn default() -> Self {
        Self { step: 1.1 }
    }
}

impl GestureMap {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    fn pinch_out(&self) -> Gesture {
        Gesture::Pinch { factor: self.step }
    }

    fn pinch_in(&self) -> Gesture {
        Gesture::Pinch {
            factor: 1.0 / self.step,
        }
    }

    pub fn from_key(&self, key: &KeyEvent) -> Option<Gesture> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Gesture::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => Some(self.pinch_out()),
            KeyCode::Char('-') | KeyCode::Char('_') => Some(self.pinch_in()),
            KeyCode::Up | KeyCode::Char('k') => Some(Gesture::SwipeUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Gesture::SwipeDown),
            KeyCode::Char('e') => Some(Gesture::CycleEyes),
            KeyCode::Char('b') => Some(Gesture::CycleBrows),
            KeyCode::Char('r') => Some(Gesture::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Gesture::Quit),
            _ => None,
        }
    }

    pub fn from_mouse(&self, mouse: &MouseEvent) -> Option<Gesture> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(self.pinch_out()),
            MouseEventKind::ScrollDown => Some(self.pinch_in()),
            _ => None,
        }
    }

    /// One-line key legend for the HUD.
    pub fn legend() -> Vec<String> {
        vec![
            "↑/↓: happier / sadder".into(),
            "+/- or wheel: pinch".into(),
            "e: eyes  b: brows".into(),
            "r: reset  q: quit".into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_swipe() {
        let map = GestureMap::default();
        assert_eq!(map.from_key(&key(KeyCode::Up)), Some(Gesture::SwipeUp));
        assert_eq!(map.from_key(&key(KeyCode::Down)), Some(Gesture::SwipeDown));
        assert_eq!(map.from_key(&key(KeyCode::Char('k'))), Some(Gesture::SwipeUp));
        assert_eq!(map.from_key(&key(KeyCode::Char('j'))), Some(Gesture::SwipeDown));
    }

    #[test]
    fn plus_and_minus_pinch_reciprocally() {
        let map = GestureMap::new(1.25);
        assert_eq!(
            map.from_key(&key(KeyCode::Char('+'))),
            Some(Gesture::Pinch { factor: 1.25 })
        );
        assert_eq!(
            map.from_key(&key(KeyCode::Char('-'))),
            Some(Gesture::Pinch { factor: 0.8 })
        );
    }

    #[test]
    fn wheel_pinches() {
        let map = GestureMap::new(2.0);
        assert_eq!(
            map.from_mouse(&mouse(MouseEventKind::ScrollUp)),
            Some(Gesture::Pinch { factor: 2.0 })
        );
        assert_eq!(
            map.from_mouse(&mouse(MouseEventKind::ScrollDown)),
            Some(Gesture::Pinch { factor: 0.5 })
        );
        assert_eq!(map.from_mouse(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn feature_keys() {
        let map = GestureMap::default();
        assert_eq!(map.from_key(&key(KeyCode::Char('e'))), Some(Gesture::CycleEyes));
        assert_eq!(map.from_key(&key(KeyCode::Char('b'))), Some(Gesture::CycleBrows));
        assert_eq!(map.from_key(&key(KeyCode::Char('r'))), Some(Gesture::Reset));
    }

    #[test]
    fn quit_keys() {
        let map = GestureMap::default();
        assert_eq!(map.from_key(&key(KeyCode::Char('q'))), Some(Gesture::Quit));
        assert_eq!(map.from_key(&key(KeyCode::Esc)), Some(Gesture::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map.from_key(&ctrl_c), Some(Gesture::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let map = GestureMap::default();
        let mut ev = key(KeyCode::Up);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map.from_key(&ev), None);
    }

    #[test]
    fn unmapped_key_is_none() {
        let map = GestureMap::default();
        assert_eq!(map.from_key(&key(KeyCode::Char('x'))), None);
        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(map.from_key(&ctrl_e), None);
    }
}
