//! Discrete facial expressions and the controller that maps them onto a
//! parameterized face.
//!
//! A [`FacialExpression`] is a trio of enumerated states (eyes, eyebrows,
//! mouth). The [`ExpressionController`] owns one, translates it into
//! continuous parameters through [`ExpressionTables`], and pushes the result
//! onto any [`FaceSurface`].
//!
//! # Quick start
//!
//! ```
//! use mug_expression::{ExpressionController, FaceSurface, FacialExpression, Mouth};
//!
//! #[derive(Default)]
//! struct Sink { curvature: f64, scale: f64 }
//!
//! impl FaceSurface for Sink {
//!     fn set_eyes_open(&mut self, _open: bool) {}
//!     fn set_mouth_curvature(&mut self, c: f64) { self.curvature = c; }
//!     fn set_eye_brow_tilt(&mut self, _tilt: f64) {}
//!     fn set_scale(&mut self, s: f64) { self.scale = s; }
//!     fn scale(&self) -> f64 { self.scale }
//! }
//!
//! let mut ctl = ExpressionController::new(Sink::default(), FacialExpression::default());
//! ctl.set_mouth(Mouth::Frown);
//! ctl.increase_happiness();
//! assert_eq!(ctl.expression().mouth, Mouth::Smirk);
//! assert_eq!(ctl.surface().curvature, -0.5);
//! ```

mod controller;
mod surface;
mod tables;
mod types;

pub use controller::ExpressionController;
pub use surface::FaceSurface;
pub use tables::{ExpressionTables, DEFAULT_VALUE};
pub use types::{EyeBrows, Eyes, FacialExpression, Mouth};
