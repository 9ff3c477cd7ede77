use std::ops::RangeInclusive;

use crate::surface::FaceSurface;
use crate::tables::ExpressionTables;
use crate::types::{EyeBrows, Eyes, FacialExpression, Mouth};

/// Owns a [`FacialExpression`] and keeps a [`FaceSurface`] in sync with it.
///
/// Every mutation goes through [`update_surface`](Self::update_surface),
/// which recomputes the continuous parameters and pushes them onto the
/// surface in one synchronous call.
pub struct ExpressionController<S: FaceSurface> {
    surface: S,
    expression: FacialExpression,
    tables: ExpressionTables,
}

impl<S: FaceSurface> ExpressionController<S> {
    /// Wrap `surface` and immediately sync it to `expression`.
    pub fn new(surface: S, expression: FacialExpression) -> Self {
        Self::with_tables(surface, expression, ExpressionTables::default())
    }

    pub fn with_tables(surface: S, expression: FacialExpression, tables: ExpressionTables) -> Self {
        let mut controller = Self {
            surface,
            expression,
            tables,
        };
        controller.update_surface();
        controller
    }

    pub fn expression(&self) -> FacialExpression {
        self.expression
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn set_expression(&mut self, expression: FacialExpression) {
        self.expression = expression;
        self.update_surface();
    }

    pub fn set_eyes(&mut self, eyes: Eyes) {
        self.expression.eyes = eyes;
        self.update_surface();
    }

    pub fn set_eye_brows(&mut self, eye_brows: EyeBrows) {
        self.expression.eye_brows = eye_brows;
        self.update_surface();
    }

    pub fn set_mouth(&mut self, mouth: Mouth) {
        self.expression.mouth = mouth;
        self.update_surface();
    }

    /// Step the mouth one place happier. Returns `false` at [`Mouth::Smile`].
    pub fn increase_happiness(&mut self) -> bool {
        self.step_mouth(self.expression.mouth.happier())
    }

    /// Step the mouth one place sadder. Returns `false` at [`Mouth::Frown`].
    pub fn decrease_happiness(&mut self) -> bool {
        self.step_mouth(self.expression.mouth.sadder())
    }

    /// Multiply the surface scale by `factor`, clamped to `limits`.
    ///
    /// Non-finite or non-positive factors leave the scale untouched, as do
    /// non-finite limits. Inverted limits are swapped. Returns the resulting
    /// scale.
    pub fn pinch(&mut self, factor: f64, limits: RangeInclusive<f64>) -> f64 {
        let current = self.surface.scale();
        if !factor.is_finite() || factor <= 0.0 {
            tracing::debug!(factor, "ignoring degenerate pinch factor");
            return current;
        }
        let (start, end) = limits.into_inner();
        if !start.is_finite() || !end.is_finite() {
            tracing::debug!(start, end, "ignoring pinch with non-finite limits");
            return current;
        }
        let scale = (current * factor).clamp(start.min(end), start.max(end));
        if scale != current {
            tracing::debug!(from = current, to = scale, "pinch rescaled face");
            self.surface.set_scale(scale);
        }
        scale
    }

    fn step_mouth(&mut self, next: Mouth) -> bool {
        if next == self.expression.mouth {
            return false;
        }
        tracing::debug!(from = ?self.expression.mouth, to = ?next, "mouth stepped");
        self.set_mouth(next);
        true
    }

    fn update_surface(&mut self) {
        let expr = self.expression;
        self.surface.set_eyes_open(expr.eyes.is_open());
        self.surface
            .set_mouth_curvature(self.tables.curvature_for(expr.mouth));
        self.surface
            .set_eye_brow_tilt(self.tables.tilt_for(expr.eye_brows));
        tracing::trace!(%expr, "surface synced");
    }
}
