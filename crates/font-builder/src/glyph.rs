//! Outline normalization into font design units.

use kurbo::{Affine, BezPath, CubicBez, PathEl, Point, Shape};

use crate::{IconSource, UNITS_PER_EM, outline::Outline};

/// A normalized glyph: outline in font units (y-up, quadratic curves only)
/// plus horizontal metrics.
pub(crate) struct Glyph {
    pub name: String,
    pub codepoint: u32,
    pub path: BezPath,
    pub advance: u16,
    pub lsb: i16,
    pub x_max: i16,
}

/// Accuracy of the cubic-to-quadratic conversion, in font units.
const CONVERSION_ACCURACY: f64 = 0.5;

/// Scales parsed outlines into the em square and flips them onto the
/// baseline (SVG is y-down, fonts are y-up, descent is zero).
///
/// With `rescale` every icon is scaled to the full em height on its own;
/// without it one shared scale is derived from the tallest icon, so the
/// set keeps its relative sizes.
pub(crate) fn normalize(icons: &[IconSource], outlines: Vec<Outline>, rescale: bool) -> Vec<Glyph> {
    let upm = f64::from(UNITS_PER_EM);
    let tallest = outlines.iter().map(|outline| outline.height).fold(0.0, f64::max);

    icons
        .iter()
        .zip(outlines)
        .map(|(icon, outline)| {
            let scale = if rescale { upm / outline.height } else { upm / tallest };
            let place = Affine::new([scale, 0.0, 0.0, -scale, 0.0, outline.height * scale]);
            let path = to_quadratic(&(place * outline.path), CONVERSION_ACCURACY);

            let (lsb, x_max) = if path.elements().is_empty() {
                (0, 0)
            } else {
                let bounds = path.bounding_box();
                (bounds.x0.round() as i16, bounds.x1.round() as i16)
            };

            Glyph {
                name: icon.name.clone(),
                codepoint: icon.codepoint,
                path,
                // hmtx advances are u16; extreme aspect ratios clamp to the
                // maximum representable width.
                advance: (outline.width * scale).round().min(f64::from(u16::MAX)) as u16,
                lsb,
                x_max,
            }
        })
        .collect()
}

/// Replaces every cubic segment with quadratic approximations; TrueType
/// outlines cannot carry cubics.
fn to_quadratic(path: &BezPath, accuracy: f64) -> BezPath {
    let mut out = BezPath::new();
    let mut start = Point::ZERO;
    let mut current = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                out.move_to(p);
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                out.line_to(p);
                current = p;
            }
            PathEl::QuadTo(p1, p2) => {
                out.quad_to(p1, p2);
                current = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let cubic = CubicBez::new(current, p1, p2, p3);
                for (_, _, quad) in cubic.to_quads(accuracy) {
                    out.quad_to(quad.p1, quad.p2);
                }
                current = p3;
            }
            PathEl::ClosePath => {
                out.close_path();
                current = start;
            }
        }
    }
    out
}
