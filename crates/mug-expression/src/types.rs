use std::fmt;

use serde::Deserialize;

/// Eye state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eyes {
    Open,
    Closed,
    /// Drawn the same as [`Eyes::Closed`]; the face has no squint shape.
    Squinting,
}

impl Eyes {
    pub const ALL: [Eyes; 3] = [Eyes::Open, Eyes::Closed, Eyes::Squinting];

    /// Next state in declaration order, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }

    /// Whether the face should draw open eyes for this state.
    pub fn is_open(self) -> bool {
        matches!(self, Eyes::Open)
    }
}

/// Eyebrow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeBrows {
    Relaxed,
    Furrowed,
    Normal,
}

impl EyeBrows {
    pub const ALL: [EyeBrows; 3] = [EyeBrows::Relaxed, EyeBrows::Furrowed, EyeBrows::Normal];

    /// Next state in declaration order, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

/// Mouth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mouth {
    Frown,
    Grin,
    Smile,
    Smirk,
    Neutral,
}

impl Mouth {
    /// Happiness axis, saddest first.
    pub const ORDER: [Mouth; 5] = [
        Mouth::Frown,
        Mouth::Smirk,
        Mouth::Neutral,
        Mouth::Grin,
        Mouth::Smile,
    ];

    /// Position on the happiness axis (0 = saddest).
    pub fn rank(self) -> usize {
        Self::ORDER.iter().position(|&m| m == self).unwrap_or(0)
    }

    /// One step happier; [`Mouth::Smile`] stays put.
    pub fn happier(self) -> Self {
        Self::ORDER
            .get(self.rank() + 1)
            .copied()
            .unwrap_or(Mouth::Smile)
    }

    /// One step sadder; [`Mouth::Frown`] stays put.
    pub fn sadder(self) -> Self {
        self.rank()
            .checked_sub(1)
            .map(|i| Self::ORDER[i])
            .unwrap_or(Mouth::Frown)
    }
}

/// A complete discrete expression.
///
/// Deserializes from a table where every field is optional and falls back to
/// the [`Default`] expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacialExpression {
    pub eyes: Eyes,
    pub eye_brows: EyeBrows,
    pub mouth: Mouth,
}

impl FacialExpression {
    pub const fn new(eyes: Eyes, eye_brows: EyeBrows, mouth: Mouth) -> Self {
        Self {
            eyes,
            eye_brows,
            mouth,
        }
    }
}

impl Default for FacialExpression {
    fn default() -> Self {
        Self::new(Eyes::Closed, EyeBrows::Relaxed, Mouth::Smirk)
    }
}

impl fmt::Display for FacialExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eyes={:?} brows={:?} mouth={:?}",
            self.eyes, self.eye_brows, self.mouth
        )
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|&v| v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}
