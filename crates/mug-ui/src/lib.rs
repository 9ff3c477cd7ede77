//! TUI rendering layer for MUG.
//!
//! Owns the [`face::FaceView`] rendering surface, the braille canvas painter
//! that strokes face paths, and the shell chrome around it. All drawing uses
//! [`ratatui`]; the geometry itself lives in [`mug_geometry`].

pub mod face;
pub mod layout;
pub mod painter;
pub mod shell;
