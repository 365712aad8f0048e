//! Zone outlines. Every builder works in the horizontal frame and rotates the
//! finished shape when `spec` is vertical.

use serde::Serialize;

use crate::{
    constants::{DEFAULT_ARC_SAMPLES, DEFAULT_THREE_POINT_SAMPLES, MIN_SAMPLES},
    error::{CourtError, Result},
    geometry::{
        masks::ZoneBounds,
        spec::CourtSpec,
        types::{Orientation, Point, Polygon, Polyline, Side},
    },
};

/// Evenly spaced angles (degrees) from `start` to `end`, both included
fn sample_arc(center: Point, radius: f64, start: f64, end: f64, n: usize) -> Vec<Point> {
    let step = (end - start) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let theta = (start + step * i as f64).to_radians();
            Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect()
}

fn check_samples(field: &'static str, n: usize) -> Result<()> {
    if n < MIN_SAMPLES {
        return Err(CourtError::InvalidSampleCount {
            field,
            min: MIN_SAMPLES,
            got: n,
        });
    }
    Ok(())
}

fn oriented_polygon(spec: &CourtSpec, poly: Polygon) -> Polygon {
    match spec.orientation {
        Orientation::Horizontal => poly,
        Orientation::Vertical => poly.to_vertical(),
    }
}

/// Restricted-area semicircle, closed by the chord between the arc ends
pub fn restricted_area_polygon(spec: &CourtSpec, side: Side) -> Polygon {
    build_restricted_area(spec, side, DEFAULT_ARC_SAMPLES)
}

pub fn restricted_area_polygon_with(spec: &CourtSpec, side: Side, samples: usize) -> Result<Polygon> {
    check_samples("arc samples", samples)?;
    Ok(build_restricted_area(spec, side, samples))
}

fn build_restricted_area(spec: &CourtSpec, side: Side, samples: usize) -> Polygon {
    let h = spec.to_horizontal();
    let radius = h.params().charge_circle_radius;
    let (left, right) = h.horizontal_hoop_centers();
    // opens towards mid-court
    let (hoop, start, end) = match side {
        Side::Left => (left, -90.0, 90.0),
        Side::Right => (right, 90.0, 270.0),
    };
    let arc = sample_arc(hoop, radius, start, end, samples);
    oriented_polygon(spec, Polygon::closed(arc))
}

/// Outer paint rectangle against the end line of `side`
pub fn paint_polygon(spec: &CourtSpec, side: Side) -> Polygon {
    let rect = ZoneBounds::new(spec).paint(side);
    oriented_polygon(spec, rect.to_polygon())
}

/// (top, bottom) corner-three rectangles of `side`, flush with the sidelines
pub fn corner_three_rects(spec: &CourtSpec, side: Side) -> [Polygon; 2] {
    ZoneBounds::new(spec)
        .corners(side)
        .map(|rect| oriented_polygon(spec, rect.to_polygon()))
}

/// Open polyline along the three-point arc of `side`
pub fn three_point_arc_points(spec: &CourtSpec, side: Side) -> Polyline {
    build_three_point_arc(spec, side, DEFAULT_THREE_POINT_SAMPLES)
}

pub fn three_point_arc_points_with(spec: &CourtSpec, side: Side, samples: usize) -> Result<Polyline> {
    check_samples("three-point samples", samples)?;
    Ok(build_three_point_arc(spec, side, samples))
}

fn build_three_point_arc(spec: &CourtSpec, side: Side, samples: usize) -> Polyline {
    let h = spec.to_horizontal();
    let p = h.params();
    let (left, right) = h.horizontal_hoop_centers();
    let (hoop, base) = match side {
        Side::Left => (left, 0.0),
        Side::Right => (right, 180.0),
    };
    let angle = p.three_point_arc_angle;
    let line = Polyline {
        points: sample_arc(hoop, p.three_point_radius(), base - angle, base + angle, samples),
    };
    match spec.orientation {
        Orientation::Horizontal => line,
        Orientation::Vertical => line.to_vertical(),
    }
}

/// All zone outlines of one side, ready to hand to a renderer
#[derive(Debug, Clone, Serialize)]
pub struct ZoneGeometry {
    pub side: String,
    pub restricted_area: Polygon,
    pub paint: Polygon,
    pub corner_threes: [Polygon; 2],
    pub three_point_arc: Polyline,
}

impl ZoneGeometry {
    pub fn build(spec: &CourtSpec, side: Side) -> Self {
        Self {
            side: side.to_string(),
            restricted_area: restricted_area_polygon(spec, side),
            paint: paint_polygon(spec, side),
            corner_threes: corner_three_rects(spec, side),
            three_point_arc: three_point_arc_points(spec, side),
        }
    }

    pub fn build_with(spec: &CourtSpec, side: Side, arc_samples: usize, three_point_samples: usize) -> Result<Self> {
        Ok(Self {
            side: side.to_string(),
            restricted_area: restricted_area_polygon_with(spec, side, arc_samples)?,
            paint: paint_polygon(spec, side),
            corner_threes: corner_three_rects(spec, side),
            three_point_arc: three_point_arc_points_with(spec, side, three_point_samples)?,
        })
    }
}
