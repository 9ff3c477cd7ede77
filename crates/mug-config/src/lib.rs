//! Configuration types and loaders for MUG.
//!
//! This crate owns the on-disk configuration schema so the app and its
//! rendering layer share a single source of truth.

pub mod settings;

pub use settings::{FaceSettings, MugConfig, PinchSettings, CONFIG_ENV};
