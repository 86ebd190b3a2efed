//! SVG parsing and outline extraction.
//!
//! Flattens an icon's node tree into one [`BezPath`] in the SVG's own
//! coordinate space (y-down), with node transforms applied and even-odd
//! fills rewound for non-zero rasterization.

use kurbo::{Affine, BezPath, PathEl, Shape};
use usvg::{FillRule, Group, Node, Options, Path, Tree, tiny_skia_path::PathSegment};

/// A parsed icon outline plus the design size it was drawn against.
pub(crate) struct Outline {
    pub path: BezPath,
    pub width: f64,
    pub height: f64,
}

pub(crate) fn parse_outline(svg: &str) -> Result<Outline, usvg::Error> {
    let tree = Tree::from_str(svg, &Options::default())?;
    let size = tree.size();

    let mut path = BezPath::new();
    collect_group(tree.root(), &mut path);

    Ok(Outline { path, width: f64::from(size.width()), height: f64::from(size.height()) })
}

fn collect_group(group: &Group, out: &mut BezPath) {
    for node in group.children() {
        match node {
            Node::Path(path) => append_path(path, out),
            Node::Group(group) => collect_group(group, out),
            _ => {}
        }
    }
}

fn append_path(path: &Path, out: &mut BezPath) {
    let mut bez = BezPath::new();
    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => bez.move_to((f64::from(p.x), f64::from(p.y))),
            PathSegment::LineTo(p) => bez.line_to((f64::from(p.x), f64::from(p.y))),
            PathSegment::QuadTo(p1, p2) => {
                bez.quad_to((f64::from(p1.x), f64::from(p1.y)), (f64::from(p2.x), f64::from(p2.y)));
            }
            PathSegment::CubicTo(p1, p2, p3) => {
                bez.curve_to(
                    (f64::from(p1.x), f64::from(p1.y)),
                    (f64::from(p2.x), f64::from(p2.y)),
                    (f64::from(p3.x), f64::from(p3.y)),
                );
            }
            PathSegment::Close => bez.close_path(),
        }
    }

    let t = path.abs_transform();
    let mut bez = Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ]) * bez;

    // TrueType rasterizers only know non-zero winding, so even-odd holes
    // must be expressed through contour direction instead.
    if path.fill().map(|fill| fill.rule()) == Some(FillRule::EvenOdd) {
        bez = to_nonzero_winding(bez);
    }

    for el in bez.elements() {
        out.push(*el);
    }
}

/// Rewinds contours so non-zero filling reproduces an even-odd fill:
/// contours at even nesting depth get one orientation, odd depth the
/// opposite.
fn to_nonzero_winding(path: BezPath) -> BezPath {
    let mut contours = split_contours(&path);
    if contours.len() <= 1 {
        return path;
    }

    // Largest bounding box first, so nesting depth only needs testing
    // against contours that could possibly enclose this one.
    contours.sort_by(|a, b| {
        bbox_area(b).partial_cmp(&bbox_area(a)).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut out = BezPath::new();
    for (index, contour) in contours.iter().enumerate() {
        let probe = contour.bounding_box().center();
        let depth = contours[..index].iter().filter(|outer| outer.winding(probe) != 0).count();

        let area = contour.area();
        let flip = if depth % 2 == 0 { area < 0.0 } else { area > 0.0 };
        let contour = if flip { contour.reverse_subpaths() } else { contour.clone() };
        for el in contour.elements() {
            out.push(*el);
        }
    }
    out
}

fn split_contours(path: &BezPath) -> Vec<BezPath> {
    let mut contours = Vec::new();
    let mut current = BezPath::new();
    for el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !current.elements().is_empty() {
            contours.push(std::mem::take(&mut current));
        }
        current.push(*el);
    }
    if !current.elements().is_empty() {
        contours.push(current);
    }
    contours
}

fn bbox_area(path: &BezPath) -> f64 {
    let bounds = path.bounding_box();
    bounds.width() * bounds.height()
}
