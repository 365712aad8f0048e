use crate::error::{CourtError, Result};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Every legal token of an enumerated domain, for error messages
fn legal_tokens<E: IntoEnumIterator + std::fmt::Display>() -> Vec<String> {
    E::iter().map(|e| e.to_string()).collect()
}

/// Basketball league (selects the parameter table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum League {
    Nba,
    Wnba,
    Ncaa,
    Fiba,
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Units {
    #[strum(to_string = "ft", serialize = "feet")]
    Feet,
    #[strum(to_string = "m", serialize = "meters")]
    Meters,
}

/// Which court point the data's (0, 0) sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Origin {
    Center,
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

/// Long axis along x (horizontal) or y (vertical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    #[strum(to_string = "h", serialize = "horizontal")]
    Horizontal,
    #[strum(to_string = "v", serialize = "vertical")]
    Vertical,
}

/// View convention of point data: full court or one half, in either orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum View {
    H,
    Hl,
    Hr,
    V,
    Vu,
    Vd,
}

/// One hoop. In the vertical view left is down and right is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    #[strum(to_string = "l", serialize = "left", serialize = "d", serialize = "down")]
    Left,
    #[strum(to_string = "r", serialize = "right", serialize = "u", serialize = "up")]
    Right,
}

/// Hoop selection for membership queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SideSelection {
    #[strum(to_string = "l", serialize = "left", serialize = "d", serialize = "down")]
    Left,
    #[strum(to_string = "r", serialize = "right", serialize = "u", serialize = "up")]
    Right,
    #[strum(to_string = "both")]
    Both,
}

macro_rules! impl_parse {
    ($($ty:ty => $field:literal),* $(,)?) => {
        $(
            impl $ty {
                /// Parse a token, failing with `InvalidArgument` that lists the legal tokens.
                pub fn parse(token: &str) -> Result<Self> {
                    token
                        .trim()
                        .parse::<Self>()
                        .map_err(|_| CourtError::invalid($field, token, &legal_tokens::<Self>()))
                }
            }
        )*
    };
}

impl_parse! {
    League => "league",
    Units => "units",
    Origin => "origin",
    Orientation => "orientation",
    View => "orientation token",
    Side => "side",
    SideSelection => "side",
}

impl View {
    pub fn orientation(self) -> Orientation {
        match self {
            View::H | View::Hl | View::Hr => Orientation::Horizontal,
            View::V | View::Vu | View::Vd => Orientation::Vertical,
        }
    }

    /// The half this view keeps, if any (`vd` pairs with left, `vu` with right)
    pub fn half(self) -> Option<Side> {
        match self {
            View::H | View::V => None,
            View::Hl | View::Vd => Some(Side::Left),
            View::Hr | View::Vu => Some(Side::Right),
        }
    }
}

impl SideSelection {
    pub fn includes(self, side: Side) -> bool {
        match self {
            SideSelection::Both => true,
            SideSelection::Left => side == Side::Left,
            SideSelection::Right => side == Side::Right,
        }
    }
}

impl From<Side> for SideSelection {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => SideSelection::Left,
            Side::Right => SideSelection::Right,
        }
    }
}

/// 2-D point in court units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal -> vertical frame: (x, y) -> (-y, x)
    #[inline]
    pub fn to_vertical(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Vertical -> horizontal frame: (x, y) -> (y, -x)
    #[inline]
    pub fn to_horizontal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Point reflection through `c`
    #[inline]
    pub fn reflect_about(self, c: Point) -> Self {
        Self::new(2.0 * c.x - self.x, 2.0 * c.y - self.y)
    }

    #[inline]
    pub fn dist2(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Closed polygon: first vertex repeated as last
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Closes the ring if the caller did not
    pub fn closed(mut vertices: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last())
            && first != last
        {
            vertices.push(first);
        }
        Self { vertices }
    }

    /// Axis-aligned rectangle `[x0, x1] x [y0, y1]`, counterclockwise from `(x0, y0)`
    pub fn from_bounds(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self::closed(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.vertices.first() == self.vertices.last()
    }

    pub fn to_vertical(&self) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p.to_vertical()).collect(),
        }
    }
}

/// Open polyline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn to_vertical(&self) -> Self {
        Self {
            points: self.points.iter().map(|p| p.to_vertical()).collect(),
        }
    }
}
