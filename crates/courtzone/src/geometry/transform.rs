//! Mappings between the six view conventions (`h`, `hl`, `hr`, `v`, `vu`, `vd`).
//!
//! Rotation between families is `(x, y) -> (-y, x)` (h -> v) and its inverse
//! `(x, y) -> (y, -x)` (v -> h). Half views are reached by reflecting, through
//! the court center, only the points that lie strictly on the other half.
//! Points exactly on the center line are never reflected.

use itertools::Itertools;

use crate::{
    error::{Result, check_lengths},
    geometry::{
        spec::center_from_origin,
        types::{League, Orientation, Origin, Point, Side, Units, View},
    },
    params::get_parameters,
};

/// Re-express points given in view `from` in view `to`. Coordinates are in feet.
pub fn transform(
    x: &[f64],
    y: &[f64],
    from: View,
    to: View,
    origin: Origin,
    league: League,
) -> Result<(Vec<f64>, Vec<f64>)> {
    transform_in_units(x, y, from, to, origin, league, Units::Feet)
}

/// `transform` for data in the given units
pub fn transform_in_units(
    x: &[f64],
    y: &[f64],
    from: View,
    to: View,
    origin: Origin,
    league: League,
    units: Units,
) -> Result<(Vec<f64>, Vec<f64>)> {
    check_lengths(x, y)?;

    if from == to {
        return Ok((x.to_vec(), y.to_vec()));
    }

    let [w, h] = get_parameters(league, units).court_dims;
    let center_h = center_from_origin(origin, (w, h));
    log::debug!("transform {} points {from} -> {to} (origin {origin})", x.len());

    Ok(x.iter()
        .zip_eq(y)
        .map(|(&px, &py)| {
            let p = map_point(Point::new(px, py), from, to, center_h);
            (p.x, p.y)
        })
        .unzip())
}

/// String-token form of `transform`; unknown tokens are rejected before any work.
pub fn transform_str(
    x: &[f64],
    y: &[f64],
    from: &str,
    to: &str,
    origin: &str,
    league: &str,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let from = View::parse(from)?;
    let to = View::parse(to)?;
    let origin = Origin::parse(origin)?;
    let league = League::parse(league)?;
    transform(x, y, from, to, origin, league)
}

/// Single-point mapping; `center_h` is the court center in the horizontal frame.
pub fn map_point(p: Point, from: View, to: View, center_h: Point) -> Point {
    if from == to {
        return p;
    }

    let p = match (from.orientation(), to.orientation()) {
        (Orientation::Horizontal, Orientation::Vertical) => p.to_vertical(),
        (Orientation::Vertical, Orientation::Horizontal) => p.to_horizontal(),
        _ => p,
    };

    match to.half() {
        Some(side) => fold_to_half(p, side, to.orientation(), center_h),
        None => p,
    }
}

/// Reflect `p` through the center if it lies strictly on the other half.
///
/// Horizontal halves split on x (left: x <= cx); vertical halves split on y
/// (left/down: y <= cy).
pub fn fold_to_half(p: Point, side: Side, orientation: Orientation, center_h: Point) -> Point {
    let c = match orientation {
        Orientation::Horizontal => center_h,
        Orientation::Vertical => center_h.to_vertical(),
    };
    let (coord, split) = match orientation {
        Orientation::Horizontal => (p.x, c.x),
        Orientation::Vertical => (p.y, c.y),
    };
    let wrong_side = match side {
        Side::Left => coord > split,
        Side::Right => coord < split,
    };
    if wrong_side { p.reflect_about(c) } else { p }
}
