//! Zone membership tests.
//!
//! Points are first brought into the horizontal frame (inverse rotation when the
//! court is vertical); every predicate is then evaluated there. All bounds are
//! inclusive.

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    error::{Result, check_lengths},
    geometry::{
        spec::CourtSpec,
        types::{Point, Polygon, Side, SideSelection},
    },
};

/// Closed axis-aligned box `[x0, x1] x [y0, y1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Rect {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    pub(crate) fn to_polygon(self) -> Polygon {
        Polygon::from_bounds(self.x0, self.x1, self.y0, self.y1)
    }
}

/// Zone bounds of one court, resolved once in the horizontal frame.
///
/// The zone builders emit their rectangles from these same values, so every
/// vertex they produce passes the inclusive tests below.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ZoneBounds {
    center: Point,
    court: Rect,
    hoops: (Point, Point),
    charge_r2: f64,
    arc_r2: f64,
    paint: (Rect, Rect),
    // (top, bottom) per side
    corners: ([Rect; 2], [Rect; 2]),
}

impl ZoneBounds {
    pub(crate) fn new(spec: &CourtSpec) -> Self {
        let h = spec.to_horizontal();
        let p = h.params();
        let (w, court_h) = h.dims();
        let c = h.horizontal_center();
        let court = Rect {
            x0: c.x - w / 2.0,
            x1: c.x + w / 2.0,
            y0: c.y - court_h / 2.0,
            y1: c.y + court_h / 2.0,
        };

        let [paint_w, paint_h] = p.outer_paint_dims;
        let (paint_y0, paint_y1) = (c.y - paint_h / 2.0, c.y + paint_h / 2.0);
        let paint = (
            Rect { x0: court.x0, x1: court.x0 + paint_w, y0: paint_y0, y1: paint_y1 },
            Rect { x0: court.x1 - paint_w, x1: court.x1, y0: paint_y0, y1: paint_y1 },
        );

        let line_len = p.three_point_line_length;
        let side_w = p.three_point_side_width;
        let corner_pair = |x0: f64, x1: f64| {
            [
                Rect { x0, x1, y0: court.y1 - side_w, y1: court.y1 },
                Rect { x0, x1, y0: court.y0, y1: court.y0 + side_w },
            ]
        };
        let corners = (
            corner_pair(court.x0, court.x0 + line_len),
            corner_pair(court.x1 - line_len, court.x1),
        );

        let arc_r = p.three_point_radius();
        Self {
            center: c,
            court,
            hoops: h.horizontal_hoop_centers(),
            charge_r2: p.charge_circle_radius * p.charge_circle_radius,
            arc_r2: arc_r * arc_r,
            paint,
            corners,
        }
    }

    fn hoop(&self, side: Side) -> Point {
        match side {
            Side::Left => self.hoops.0,
            Side::Right => self.hoops.1,
        }
    }

    /// Outer paint rectangle against the end line of `side`
    pub(crate) fn paint(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.paint.0,
            Side::Right => self.paint.1,
        }
    }

    /// (top, bottom) corner-three rectangles of `side`
    pub(crate) fn corners(&self, side: Side) -> [Rect; 2] {
        match side {
            Side::Left => self.corners.0,
            Side::Right => self.corners.1,
        }
    }

    fn on_half(&self, p: Point, side: Side) -> bool {
        match side {
            Side::Left => p.x <= self.center.x,
            Side::Right => p.x >= self.center.x,
        }
    }

    fn in_restricted_area(&self, p: Point, side: Side) -> bool {
        let hoop = self.hoop(side);
        let facing = match side {
            Side::Left => p.x >= hoop.x,
            Side::Right => p.x <= hoop.x,
        };
        facing && p.dist2(hoop) <= self.charge_r2
    }

    fn in_paint(&self, p: Point, side: Side) -> bool {
        self.paint(side).contains(p)
    }

    /// Between the bottom and top corner bands, edges included
    fn in_central_band(&self, p: Point) -> bool {
        let [top, bottom] = self.corners.0;
        p.y >= bottom.y1 && p.y <= top.y0
    }

    fn in_corner_three(&self, p: Point, side: Side) -> bool {
        self.corners(side).iter().any(|r| r.contains(p))
    }

    /// The corner rectangle wins where the arc dips into it at the band edge
    fn in_above_break_three(&self, p: Point, side: Side) -> bool {
        self.in_central_band(p) && p.dist2(self.hoop(side)) >= self.arc_r2 && !self.in_corner_three(p, side)
    }

    fn in_bounds(&self, p: Point) -> bool {
        self.court.contains(p)
    }

    /// `Both` confines each hoop's test to that hoop's half of the court
    fn select(&self, p: Point, sides: SideSelection, test: impl Fn(&Self, Point, Side) -> bool) -> bool {
        let confine = sides == SideSelection::Both;
        Side::iter()
            .filter(|&side| sides.includes(side))
            .any(|side| (!confine || self.on_half(p, side)) && test(self, p, side))
    }
}

/// Validate lengths and copy the points into the horizontal frame
fn horizontal_points(x: &[f64], y: &[f64], spec: &CourtSpec) -> Result<Vec<Point>> {
    check_lengths(x, y)?;
    Ok(x.iter()
        .zip_eq(y)
        .map(|(&px, &py)| spec.to_horizontal_frame(Point::new(px, py)))
        .collect())
}

fn mask_with(
    x: &[f64],
    y: &[f64],
    spec: &CourtSpec,
    sides: SideSelection,
    test: impl Fn(&ZoneBounds, Point, Side) -> bool + Copy,
) -> Result<Vec<bool>> {
    let points = horizontal_points(x, y, spec)?;
    let bounds = ZoneBounds::new(spec);
    Ok(points.into_iter().map(|p| bounds.select(p, sides, test)).collect())
}

/// Within `charge_circle_radius` of a hoop, on the mid-court side of it
pub fn restricted_area_mask(x: &[f64], y: &[f64], spec: &CourtSpec, sides: SideSelection) -> Result<Vec<bool>> {
    mask_with(x, y, spec, sides, ZoneBounds::in_restricted_area)
}

/// Inside the outer paint rectangle
pub fn paint_mask(x: &[f64], y: &[f64], spec: &CourtSpec, sides: SideSelection) -> Result<Vec<bool>> {
    mask_with(x, y, spec, sides, ZoneBounds::in_paint)
}

/// Inside the top or bottom corner-three rectangle
pub fn corner_three_mask(x: &[f64], y: &[f64], spec: &CourtSpec, sides: SideSelection) -> Result<Vec<bool>> {
    mask_with(x, y, spec, sides, ZoneBounds::in_corner_three)
}

/// Central band, on or outside the three-point arc, outside the corner rectangles
pub fn above_break_three_mask(x: &[f64], y: &[f64], spec: &CourtSpec, sides: SideSelection) -> Result<Vec<bool>> {
    mask_with(x, y, spec, sides, ZoneBounds::in_above_break_three)
}

/// Single-label shot zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    RestrictedArea,
    Paint,
    CornerThree,
    AboveBreakThree,
    MidRange,
    OutOfBounds,
}

/// One label per point, judged against the hoop of the point's own half.
///
/// Precedence: out of bounds, restricted area, paint, corner three,
/// above-the-break three, mid-range.
pub fn classify(x: &[f64], y: &[f64], spec: &CourtSpec) -> Result<Vec<Zone>> {
    let points = horizontal_points(x, y, spec)?;
    let bounds = ZoneBounds::new(spec);
    Ok(points
        .into_iter()
        .map(|p| {
            let side = if bounds.on_half(p, Side::Left) { Side::Left } else { Side::Right };
            if !bounds.in_bounds(p) {
                Zone::OutOfBounds
            } else if bounds.in_restricted_area(p, side) {
                Zone::RestrictedArea
            } else if bounds.in_paint(p, side) {
                Zone::Paint
            } else if bounds.in_corner_three(p, side) {
                Zone::CornerThree
            } else if bounds.in_above_break_three(p, side) {
                Zone::AboveBreakThree
            } else {
                Zone::MidRange
            }
        })
        .collect())
}

/// Count per zone, every zone listed (zero counts included)
pub fn zone_counts(zones: &[Zone]) -> Vec<(Zone, usize)> {
    let counts = zones.iter().copied().counts();
    Zone::iter()
        .map(|zone| (zone, counts.get(&zone).copied().unwrap_or(0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::{League, Orientation, Origin, Units};
    use crate::geometry::zones::{corner_three_rects, paint_polygon};
    use itertools::iproduct;

    fn spec_h() -> CourtSpec {
        CourtSpec::new(League::Nba, Units::Feet, Origin::TopLeft, Orientation::Horizontal)
    }

    fn spec_v() -> CourtSpec {
        spec_h().with_orientation(Orientation::Vertical)
    }

    type MaskFn = fn(&[f64], &[f64], &CourtSpec, SideSelection) -> Result<Vec<bool>>;

    fn h2v(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
        x.iter().zip(y).map(|(&a, &b)| (-b, a)).unzip()
    }

    #[test]
    fn test_restricted_area_front_and_behind() {
        let s = spec_h();
        let (l, _) = s.hoop_centers();
        let r = s.params().charge_circle_radius;
        let x = [l.x + 0.5 * r, l.x - 0.5 * r];
        let y = [l.y, l.y];
        assert_eq!(restricted_area_mask(&x, &y, &s, SideSelection::Left).unwrap(), vec![true, false]);
        assert_eq!(restricted_area_mask(&x, &y, &s, SideSelection::Right).unwrap(), vec![false, false]);
    }

    #[test]
    fn test_rotation_consistency() {
        let h = spec_h();
        let v = spec_v();
        let (l, r) = h.hoop_centers();
        let x = [l.x + 2.0, l.x - 2.0, r.x - 3.0, 47.0, 3.0, 47.0 + 30.0];
        let y = [l.y + 1.0, l.y, r.y, -25.0, -1.0, -25.0];
        let (xv, yv) = h2v(&x, &y);

        for sides in SideSelection::iter() {
            assert_eq!(
                restricted_area_mask(&x, &y, &h, sides).unwrap(),
                restricted_area_mask(&xv, &yv, &v, sides).unwrap()
            );
            assert_eq!(paint_mask(&x, &y, &h, sides).unwrap(), paint_mask(&xv, &yv, &v, sides).unwrap());
            assert_eq!(
                corner_three_mask(&x, &y, &h, sides).unwrap(),
                corner_three_mask(&xv, &yv, &v, sides).unwrap()
            );
            assert_eq!(
                above_break_three_mask(&x, &y, &h, sides).unwrap(),
                above_break_three_mask(&xv, &yv, &v, sides).unwrap()
            );
        }
        assert!(restricted_area_mask(&xv, &yv, &v, SideSelection::Left).unwrap()[0]);
        assert!(!restricted_area_mask(&xv, &yv, &v, SideSelection::Left).unwrap()[1]);
        assert_eq!(classify(&x, &y, &h).unwrap(), classify(&xv, &yv, &v).unwrap());
    }

    #[test]
    fn test_unit_conversion_invariance() {
        let ft = spec_h();
        let m = CourtSpec::new(League::Nba, Units::Meters, Origin::TopLeft, Orientation::Horizontal);
        let (lf, _) = ft.hoop_centers();
        let (lm, _) = m.hoop_centers();

        assert!(restricted_area_mask(&[lf.x + 3.0], &[lf.y], &ft, SideSelection::Left).unwrap()[0]);
        assert!(restricted_area_mask(&[lm.x + 3.0 * 0.3048], &[lm.y], &m, SideSelection::Left).unwrap()[0]);

        // the same physical samples, in both unit systems
        let xs_ft = [2.0, 10.0, 20.0, 30.0, 45.0, 85.0];
        let ys_ft = [-1.0, -25.0, -10.0, -48.0, -30.0, -2.0];
        let xs_m = xs_ft.map(|v| v * 0.3048);
        let ys_m = ys_ft.map(|v| v * 0.3048);
        assert_eq!(classify(&xs_ft, &ys_ft, &ft).unwrap(), classify(&xs_m, &ys_m, &m).unwrap());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let s = CourtSpec::new(League::Nba, Units::Feet, Origin::Center, Orientation::Horizontal);
        let (l, _) = s.hoop_centers();
        // exactly on the charge circle
        assert!(restricted_area_mask(&[l.x + 4.0], &[l.y], &s, SideSelection::Both).unwrap()[0]);

        // exactly on the three-point arc
        let arc_r = s.params().three_point_radius();
        assert!(above_break_three_mask(&[l.x + arc_r], &[l.y], &s, SideSelection::Left).unwrap()[0]);
    }

    fn all_vertices_inside(poly: &Polygon, spec: &CourtSpec, side: Side, mask: MaskFn) -> bool {
        let xs = poly.vertices.iter().map(|p| p.x).collect_vec();
        let ys = poly.vertices.iter().map(|p| p.y).collect_vec();
        mask(&xs, &ys, spec, SideSelection::from(side)).unwrap().into_iter().all(|m| m)
    }

    #[test]
    fn test_rectangle_vertices_pass_their_masks_on_every_court() {
        for (league, units, origin, orientation, side) in
            iproduct!(League::iter(), Units::iter(), Origin::iter(), Orientation::iter(), Side::iter())
        {
            let s = CourtSpec::new(league, units, origin, orientation);
            let label = format!("{league} {units} {origin} {orientation} {side:?}");

            let paint = paint_polygon(&s, side);
            assert!(all_vertices_inside(&paint, &s, side, paint_mask), "paint: {label}");

            for rect in corner_three_rects(&s, side) {
                assert!(all_vertices_inside(&rect, &s, side, corner_three_mask), "corner: {label}");
            }
        }
    }

    #[test]
    fn test_paint_and_corner_samples() {
        let s = spec_h();
        let p = s.params();
        let (w, h) = s.dims();
        let c = s.center();
        let [pw, _] = p.outer_paint_dims;
        let xl0 = c.x - w / 2.0;

        let x_paint = xl0 + pw / 2.0;
        assert!(paint_mask(&[x_paint], &[c.y], &s, SideSelection::Left).unwrap()[0]);
        assert!(!paint_mask(&[x_paint], &[c.y], &s, SideSelection::Right).unwrap()[0]);

        let x_corner = xl0 + p.three_point_line_length / 2.0;
        let half_band = p.three_point_side_width / 2.0;
        let top = c.y + h / 2.0 - half_band;
        let bottom = c.y - h / 2.0 + half_band;
        assert!(corner_three_mask(&[x_corner], &[top], &s, SideSelection::Left).unwrap()[0]);
        assert!(corner_three_mask(&[x_corner], &[bottom], &s, SideSelection::Left).unwrap()[0]);
    }

    #[test]
    fn test_above_break_excludes_corners_and_inside_arc() {
        let s = spec_h();
        let p = s.params();
        let (_, h) = s.dims();
        let c = s.center();
        let (l, _) = s.hoop_centers();
        let arc_r = p.three_point_radius();
        let side_w = p.three_point_side_width;

        let m = |x: f64, y: f64| above_break_three_mask(&[x], &[y], &s, SideSelection::Left).unwrap()[0];
        assert!(m(l.x + arc_r + 1.0, c.y));
        assert!(!m(c.x, c.y + h / 2.0 - side_w / 2.0));
        assert!(!m(l.x + arc_r - 1.0, c.y));
    }

    #[test]
    fn test_both_keeps_far_hoop_off_the_near_half() {
        let s = spec_h();
        let (l, _) = s.hoop_centers();
        // left paint: far from the right hoop, but on the left half
        let x = [l.x + 5.0];
        let y = [l.y];
        assert!(above_break_three_mask(&x, &y, &s, SideSelection::Right).unwrap()[0]);
        assert!(!above_break_three_mask(&x, &y, &s, SideSelection::Both).unwrap()[0]);

        // plain OR for the zones that sit inside their own half
        let x = [l.x + 1.0, 93.0, 2.0, 47.0];
        let y = [l.y, -25.0, -49.0, -25.0];
        let tests: [MaskFn; 3] = [restricted_area_mask, paint_mask, corner_three_mask];
        for test in tests {
            let left = test(&x, &y, &s, SideSelection::Left).unwrap();
            let right = test(&x, &y, &s, SideSelection::Right).unwrap();
            let both = test(&x, &y, &s, SideSelection::Both).unwrap();
            for i in 0..x.len() {
                assert_eq!(both[i], left[i] || right[i]);
            }
        }
    }

    #[test]
    fn test_corner_and_above_break_are_disjoint() {
        for league in League::iter() {
            for units in Units::iter() {
                let s = CourtSpec::new(league, units, Origin::Center, Orientation::Horizontal);
                let p = s.params();
                let (w, h) = s.dims();
                let band = h / 2.0 - p.three_point_side_width;
                let mut xs = Vec::new();
                let mut ys = Vec::new();
                for i in 0..=94 {
                    let x = -w / 2.0 + w * i as f64 / 94.0;
                    for y in [band, -band, h / 2.0, -h / 2.0, 0.0, band - 0.01, band + 0.01] {
                        xs.push(x);
                        ys.push(y);
                    }
                    // end of the corner line, on the band edge
                    xs.push(-w / 2.0 + p.three_point_line_length);
                    ys.push(band);
                }
                for sides in SideSelection::iter() {
                    let corner = corner_three_mask(&xs, &ys, &s, sides).unwrap();
                    let above = above_break_three_mask(&xs, &ys, &s, sides).unwrap();
                    assert!(
                        corner.iter().zip(&above).all(|(&c, &a)| !(c && a)),
                        "{league} {units} {sides}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_band_edge_on_the_baseline_is_corner_only() {
        // NCAA: the arc passes inside the corner rectangle near the baseline
        let s = CourtSpec::new(League::Ncaa, Units::Feet, Origin::Center, Orientation::Horizontal);
        let p = s.params();
        let (w, h) = s.dims();
        let x = [-w / 2.0];
        let y = [h / 2.0 - p.three_point_side_width];
        let (l, _) = s.hoop_centers();
        assert!(Point::new(x[0], y[0]).dist2(l) >= p.three_point_radius().powi(2));

        assert!(corner_three_mask(&x, &y, &s, SideSelection::Left).unwrap()[0]);
        assert!(!above_break_three_mask(&x, &y, &s, SideSelection::Left).unwrap()[0]);
        assert_eq!(classify(&x, &y, &s).unwrap(), vec![Zone::CornerThree]);

        // past the corner line the band edge belongs to the above-the-break zone
        let x = [0.0];
        assert!(above_break_three_mask(&x, &y, &s, SideSelection::Both).unwrap()[0]);
    }

    #[test]
    fn test_inputs_untouched_and_length_checked() {
        let s = spec_v();
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![4.0, 5.0, 6.0];
        let before = (x.clone(), y.clone());
        let _ = restricted_area_mask(&x, &y, &s, SideSelection::Both).unwrap();
        let _ = classify(&x, &y, &s).unwrap();
        assert_eq!((x, y), before);

        let err = paint_mask(&[1.0, 2.0], &[1.0], &s, SideSelection::Both).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(classify(&[1.0], &[], &s).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_classify_precedence_and_counts() {
        let s = spec_h();
        let (l, r) = s.hoop_centers();
        let x = [l.x + 1.0, l.x + 10.0, 3.0, l.x + 25.0, l.x + 15.0, -5.0, r.x - 1.0];
        let y = [l.y, l.y, -1.0, l.y, l.y, l.y, r.y];
        let zones = classify(&x, &y, &s).unwrap();
        assert_eq!(
            zones,
            vec![
                Zone::RestrictedArea,
                Zone::Paint,
                Zone::CornerThree,
                Zone::AboveBreakThree,
                Zone::MidRange,
                Zone::OutOfBounds,
                Zone::RestrictedArea,
            ]
        );

        let counts = zone_counts(&zones);
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0], (Zone::RestrictedArea, 2));
        assert_eq!(counts[4], (Zone::MidRange, 1));
        assert_eq!(Zone::AboveBreakThree.to_string(), "above-break-three");
    }
}
