use std::collections::HashMap;

use crate::types::{EyeBrows, Mouth};

/// Value used when a table has no entry for the requested state.
pub const DEFAULT_VALUE: f64 = 0.0;

/// Lookup tables from discrete expression states to continuous parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTables {
    mouth_curvatures: HashMap<Mouth, f64>,
    eye_brow_tilts: HashMap<EyeBrows, f64>,
}

impl Default for ExpressionTables {
    fn default() -> Self {
        Self::new(
            HashMap::from([
                (Mouth::Frown, -1.0),
                (Mouth::Grin, 0.5),
                (Mouth::Smile, 1.0),
                (Mouth::Smirk, -0.5),
                (Mouth::Neutral, 0.0),
            ]),
            HashMap::from([
                (EyeBrows::Relaxed, 0.5),
                (EyeBrows::Furrowed, -0.5),
                (EyeBrows::Normal, 0.0),
            ]),
        )
    }
}

impl ExpressionTables {
    /// Build tables from explicit maps. Missing entries resolve to [`DEFAULT_VALUE`].
    pub fn new(mouth_curvatures: HashMap<Mouth, f64>, eye_brow_tilts: HashMap<EyeBrows, f64>) -> Self {
        Self {
            mouth_curvatures,
            eye_brow_tilts,
        }
    }

    pub fn curvature_for(&self, mouth: Mouth) -> f64 {
        self.mouth_curvatures
            .get(&mouth)
            .copied()
            .unwrap_or(DEFAULT_VALUE)
    }

    pub fn tilt_for(&self, brows: EyeBrows) -> f64 {
        self.eye_brow_tilts
            .get(&brows)
            .copied()
            .unwrap_or(DEFAULT_VALUE)
    }
}
