/// Something that renders a parameterized face.
///
/// Every setter is expected to schedule a redraw on the implementor's side;
/// the controller never draws directly.
pub trait FaceSurface {
    fn set_eyes_open(&mut self, open: bool);
    fn set_mouth_curvature(&mut self, curvature: f64);
    fn set_eye_brow_tilt(&mut self, tilt: f64);
    fn set_scale(&mut self, scale: f64);
    fn scale(&self) -> f64;
}
