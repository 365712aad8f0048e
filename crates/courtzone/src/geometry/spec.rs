use crate::{
    error::Result,
    geometry::types::{League, Orientation, Origin, Point, Side, Units},
    params::{CourtParameters, get_parameters},
};

/// Immutable description of a court view: league, units, origin and orientation.
///
/// Every derived quantity is recomputed on demand from the parameter table, so
/// two specs that differ only in orientation are related by the fixed rotation
/// `(x, y) -> (-y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourtSpec {
    pub league: League,
    pub units: Units,
    pub origin: Origin,
    pub orientation: Orientation,
}

impl Default for CourtSpec {
    fn default() -> Self {
        Self {
            league: League::Nba,
            units: Units::Feet,
            origin: Origin::TopLeft,
            orientation: Orientation::Horizontal,
        }
    }
}

impl CourtSpec {
    pub fn new(league: League, units: Units, origin: Origin, orientation: Orientation) -> Self {
        Self {
            league,
            units,
            origin,
            orientation,
        }
    }

    /// Build from string tokens, validating each field
    pub fn parse(league: &str, units: &str, origin: &str, orientation: &str) -> Result<Self> {
        Ok(Self::new(
            League::parse(league)?,
            Units::parse(units)?,
            Origin::parse(origin)?,
            Orientation::parse(orientation)?,
        ))
    }

    pub fn params(&self) -> CourtParameters {
        get_parameters(self.league, self.units)
    }

    /// (length, width) of the court, independent of origin and orientation
    pub fn dims(&self) -> (f64, f64) {
        let [w, h] = self.params().court_dims;
        (w, h)
    }

    /// Same court, horizontal orientation
    pub fn to_horizontal(&self) -> Self {
        self.with_orientation(Orientation::Horizontal)
    }

    pub fn with_orientation(&self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..*self
        }
    }

    /// Court center in the horizontal frame
    pub fn horizontal_center(&self) -> Point {
        center_from_origin(self.origin, self.dims())
    }

    /// Court center in the working frame
    pub fn center(&self) -> Point {
        self.to_working(self.horizontal_center())
    }

    /// Hoop centers in the horizontal frame
    pub fn horizontal_hoop_centers(&self) -> (Point, Point) {
        let (w, _) = self.dims();
        let offset = self.params().hoop_distance_from_edge;
        let c = self.horizontal_center();
        (
            Point::new(c.x - w / 2.0 + offset, c.y),
            Point::new(c.x + w / 2.0 - offset, c.y),
        )
    }

    /// (left, right) hoop centers in the working frame
    pub fn hoop_centers(&self) -> (Point, Point) {
        let (left, right) = self.horizontal_hoop_centers();
        (self.to_working(left), self.to_working(right))
    }

    pub fn hoop_center(&self, side: Side) -> Point {
        let (left, right) = self.hoop_centers();
        match side {
            Side::Left => left,
            Side::Right => right,
        }
    }

    /// Horizontal-frame point expressed in this spec's frame
    #[inline]
    pub fn to_working(&self, p: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => p,
            Orientation::Vertical => p.to_vertical(),
        }
    }

    /// Working-frame point expressed in the horizontal frame
    #[inline]
    pub fn to_horizontal_frame(&self, p: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => p,
            Orientation::Vertical => p.to_horizontal(),
        }
    }
}

/// Position of the court center relative to the origin convention (horizontal frame)
pub fn center_from_origin(origin: Origin, (w, h): (f64, f64)) -> Point {
    match origin {
        Origin::Center => Point::new(0.0, 0.0),
        Origin::TopLeft => Point::new(w / 2.0, -h / 2.0),
        Origin::BottomLeft => Point::new(w / 2.0, h / 2.0),
        Origin::TopRight => Point::new(-w / 2.0, -h / 2.0),
        Origin::BottomRight => Point::new(-w / 2.0, h / 2.0),
    }
}
