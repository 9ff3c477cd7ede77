//! Strokes face paths onto a braille [`Canvas`].
//!
//! Face space uses one unit per braille dot, so a terminal cell is 2 units
//! wide and 4 tall and circles stay round. Face space grows downward while
//! the canvas grows upward; [`paint_paths`] flips y.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line},
        Widget,
    },
};

use mug_geometry::{FaceParameters, FacePaths, Path, Point};

const DOTS_PER_CELL_X: f64 = 2.0;
const DOTS_PER_CELL_Y: f64 = 4.0;

/// Stroke width, in face points, covered by one braille dot.
const POINTS_PER_DOT: f64 = 2.5;

/// Upper bound on parallel strokes per path.
const MAX_STROKES: usize = 5;

/// Samples per circle or curve when flattening.
const CURVE_SEGMENTS: usize = 48;

/// Face-space bounds that fill `area` at braille resolution.
pub fn canvas_bounds(area: Rect) -> mug_geometry::Rect {
    mug_geometry::Rect::new(
        0.0,
        0.0,
        f64::from(area.width) * DOTS_PER_CELL_X,
        f64::from(area.height) * DOTS_PER_CELL_Y,
    )
}

/// Perpendicular offsets, in dots, for each parallel stroke of a line.
///
/// Always at least one stroke (at offset 0 for odd counts) and at most
/// [`MAX_STROKES`]. Non-finite widths draw a single hairline.
pub fn stroke_offsets(line_width: f64) -> Vec<f64> {
    let dots = if line_width.is_finite() {
        (line_width / POINTS_PER_DOT).round()
    } else {
        1.0
    };
    let count = (dots.max(1.0) as usize).min(MAX_STROKES);
    let mid = (count as f64 - 1.0) / 2.0;
    (0..count).map(|i| i as f64 - mid).collect()
}

/// Shift every segment of a polyline sideways by `distance`.
///
/// Returns one `(from, to)` pair per input segment. Zero-length segments are
/// returned unshifted.
pub fn offset_segments(points: &[Point], distance: f64) -> Vec<(Point, Point)> {
    points
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let (dx, dy) = (b.x - a.x, b.y - a.y);
            let len = dx.hypot(dy);
            if len == 0.0 || distance == 0.0 {
                return (a, b);
            }
            let (nx, ny) = (-dy / len * distance, dx / len * distance);
            (a.offset(nx, ny), b.offset(nx, ny))
        })
        .collect()
}

/// Paint every path in `paths` into `area` using the stroke attributes in `params`.
pub fn paint_paths(buf: &mut Buffer, area: Rect, paths: &FacePaths, params: &FaceParameters) {
    let bounds = canvas_bounds(area);
    let height = bounds.height;
    let color = Color::Rgb(params.color.0, params.color.1, params.color.2);
    let offsets = stroke_offsets(params.line_width);

    let polylines: Vec<Vec<Point>> = paths.iter().map(flatten).collect();

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, bounds.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for points in &polylines {
                for &d in &offsets {
                    for (a, b) in offset_segments(points, d) {
                        ctx.draw(&Line::new(a.x, height - a.y, b.x, height - b.y, color));
                    }
                }
            }
        })
        .render(area, buf);
}

fn flatten(path: &Path) -> Vec<Point> {
    path.flatten(CURVE_SEGMENTS)
}
