use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use mug_expression::FaceSurface;
use mug_geometry::{compute_paths, FaceParameters, FacePaths, Rgb};

use crate::painter::{canvas_bounds, paint_paths};

/// The parameter-bearing rendering surface.
///
/// Every setter marks the view as needing display, even when the value is
/// unchanged. The host polls [`take_needs_display`](Self::take_needs_display)
/// and redraws at its own cadence.
#[derive(Debug, Clone)]
pub struct FaceView {
    params: FaceParameters,
    needs_display: bool,
}

impl Default for FaceView {
    fn default() -> Self {
        Self::new(FaceParameters::default())
    }
}

impl FaceView {
    /// A new view starts dirty so the first frame always draws.
    pub fn new(params: FaceParameters) -> Self {
        Self {
            params,
            needs_display: true,
        }
    }

    pub fn params(&self) -> &FaceParameters {
        &self.params
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.params.color = color;
        self.set_needs_display();
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.params.line_width = line_width;
        self.set_needs_display();
    }

    pub fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Return whether a redraw is pending and clear the flag.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    /// Face paths for the given face-space bounds.
    pub fn paths(&self, bounds: mug_geometry::Rect) -> FacePaths {
        compute_paths(&self.params, bounds)
    }
}

impl FaceSurface for FaceView {
    fn set_eyes_open(&mut self, open: bool) {
        self.params.eyes_open = open;
        self.set_needs_display();
    }

    fn set_mouth_curvature(&mut self, curvature: f64) {
        self.params.mouth_curvature = curvature;
        self.set_needs_display();
    }

    fn set_eye_brow_tilt(&mut self, tilt: f64) {
        self.params.eye_brow_tilt = tilt;
        self.set_needs_display();
    }

    fn set_scale(&mut self, scale: f64) {
        self.params.scale = scale;
        self.set_needs_display();
    }

    fn scale(&self) -> f64 {
        self.params.scale
    }
}

/// Draw `view` inside a bordered "FACE" block.
pub fn render_face(buf: &mut Buffer, area: Rect, view: &FaceView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default().borders(Borders::ALL).title("FACE");
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let paths = view.paths(canvas_bounds(inner));
    paint_paths(buf, inner, &paths, view.params());
}
