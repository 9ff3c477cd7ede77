use crate::path::Path;
use crate::point::{Point, Rect};

/// Skull-radius divisors for every derived feature dimension.
mod ratios {
    pub const SKULL_RADIUS_TO_EYE_OFFSET: f64 = 3.0;
    pub const SKULL_RADIUS_TO_EYE_RADIUS: f64 = 10.0;
    pub const SKULL_RADIUS_TO_MOUTH_WIDTH: f64 = 1.0;
    pub const SKULL_RADIUS_TO_MOUTH_HEIGHT: f64 = 3.0;
    pub const SKULL_RADIUS_TO_MOUTH_OFFSET: f64 = 3.0;
    pub const SKULL_RADIUS_TO_BROW_OFFSET: f64 = 5.0;
}

/// An 8-bit RGB stroke colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

/// Continuous rendering parameters for one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceParameters {
    /// Fraction of half the smaller bounding dimension used as skull radius.
    pub scale: f64,
    /// Mouth bend; clamped to `[-1, 1]` at use. Positive smiles.
    pub mouth_curvature: f64,
    /// Open circles when `true`, closed lines otherwise.
    pub eyes_open: bool,
    /// Eyebrow tilt; clamped to `[-1, 1]` at use, mirrored on the left brow.
    pub eye_brow_tilt: f64,
    pub color: Rgb,
    pub line_width: f64,
}

impl Default for FaceParameters {
    fn default() -> Self {
        Self {
            scale: 0.9,
            mouth_curvature: 1.0,
            eyes_open: false,
            eye_brow_tilt: -0.5,
            color: Rgb::BLUE,
            line_width: 5.0,
        }
    }
}

/// Which side of the face a paired feature sits on, from the viewer's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Eyebrow tilt actually applied to the geometry.
pub fn effective_tilt(tilt: f64) -> f64 {
    tilt.clamp(-1.0, 1.0)
}

/// Mouth curvature actually applied to the geometry.
pub fn effective_curvature(curvature: f64) -> f64 {
    curvature.clamp(-1.0, 1.0)
}

/// Derived dimensions of a face laid out inside some bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub skull_center: Point,
    pub skull_radius: f64,
    pub eye_offset: f64,
    pub eye_radius: f64,
    pub brow_offset: f64,
    pub mouth_rect: Rect,
}

impl FaceMetrics {
    pub fn new(params: &FaceParameters, bounds: Rect) -> Self {
        let skull_radius = bounds.min_dimension() / 2.0 * params.scale;
        let skull_center = bounds.center();

        let mouth_width = skull_radius / ratios::SKULL_RADIUS_TO_MOUTH_WIDTH;
        let mouth_height = skull_radius / ratios::SKULL_RADIUS_TO_MOUTH_HEIGHT;
        let mouth_offset = skull_radius / ratios::SKULL_RADIUS_TO_MOUTH_OFFSET;

        Self {
            skull_center,
            skull_radius,
            eye_offset: skull_radius / ratios::SKULL_RADIUS_TO_EYE_OFFSET,
            eye_radius: skull_radius / ratios::SKULL_RADIUS_TO_EYE_RADIUS,
            brow_offset: skull_radius / ratios::SKULL_RADIUS_TO_BROW_OFFSET,
            mouth_rect: Rect::new(
                skull_center.x - mouth_width / 2.0,
                skull_center.y + mouth_offset,
                mouth_width,
                mouth_height,
            ),
        }
    }

    /// Centre of the eye on `side`: up and out from the skull centre by the eye offset.
    pub fn eye_center(&self, side: Side) -> Point {
        let dx = match side {
            Side::Left => -self.eye_offset,
            Side::Right => self.eye_offset,
        };
        self.skull_center.offset(dx, -self.eye_offset)
    }

    /// Vertical half-drop of the eyebrow on `side` for a stored tilt.
    ///
    /// The brow runs from `y - offset` on its left end to `y + offset` on its
    /// right end. The left brow uses the negated tilt.
    pub fn brow_tilt_offset(&self, side: Side, tilt: f64) -> f64 {
        let tilt = match side {
            Side::Left => -tilt,
            Side::Right => tilt,
        };
        effective_tilt(tilt) * self.eye_radius / 2.0
    }
}

/// The six vector paths that make up a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePaths {
    pub skull: Path,
    pub left_eye: Path,
    pub right_eye: Path,
    pub left_brow: Path,
    pub right_brow: Path,
    pub mouth: Path,
}

impl FacePaths {
    /// All paths in stroke order: skull, eyes, mouth, brows.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [
            &self.skull,
            &self.left_eye,
            &self.right_eye,
            &self.mouth,
            &self.left_brow,
            &self.right_brow,
        ]
        .into_iter()
    }
}

/// Lay out the face for `params` inside `bounds`.
///
/// Never fails. Zero-sized bounds collapse every path onto the centre point.
pub fn compute_paths(params: &FaceParameters, bounds: Rect) -> FacePaths {
    let m = FaceMetrics::new(params, bounds);

    FacePaths {
        skull: Path::Circle {
            center: m.skull_center,
            radius: m.skull_radius,
        },
        left_eye: eye_path(&m, Side::Left, params.eyes_open),
        right_eye: eye_path(&m, Side::Right, params.eyes_open),
        left_brow: brow_path(&m, Side::Left, params.eye_brow_tilt),
        right_brow: brow_path(&m, Side::Right, params.eye_brow_tilt),
        mouth: mouth_path(&m, params.mouth_curvature),
    }
}

fn eye_path(m: &FaceMetrics, side: Side, open: bool) -> Path {
    let center = m.eye_center(side);
    if open {
        Path::Circle {
            center,
            radius: m.eye_radius,
        }
    } else {
        Path::Line {
            from: center.offset(-m.eye_radius, 0.0),
            to: center.offset(m.eye_radius, 0.0),
        }
    }
}

fn brow_path(m: &FaceMetrics, side: Side, tilt: f64) -> Path {
    let center = m.eye_center(side).offset(0.0, -m.brow_offset);
    let tilt_offset = m.brow_tilt_offset(side, tilt);
    Path::Line {
        from: center.offset(-m.eye_radius, -tilt_offset),
        to: center.offset(m.eye_radius, tilt_offset),
    }
}

fn mouth_path(m: &FaceMetrics, curvature: f64) -> Path {
    let rect = m.mouth_rect;
    let smile_offset = effective_curvature(curvature) * rect.height;
    let third = rect.width / 3.0;

    Path::Cubic {
        from: Point::new(rect.min_x(), rect.min_y()),
        ctrl1: Point::new(rect.min_x() + third, rect.min_y() + smile_offset),
        ctrl2: Point::new(rect.max_x() - third, rect.min_y() + smile_offset),
        to: Point::new(rect.max_x(), rect.min_y()),
    }
}
