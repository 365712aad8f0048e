pub mod config;
pub mod constants;
pub mod csv_io;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;

pub use config::Config;
pub use constants::{DEFAULT_ARC_SAMPLES, DEFAULT_THREE_POINT_SAMPLES, FEET_TO_METERS};
pub use csv_io::{PointSet, read_points_csv, read_points_from_reader, write_classified_csv};
pub use error::{CourtError, Result};
pub use geometry::{
    CourtSpec, Extent, League, Orientation, Origin, Point, Polygon, Polyline, Side, SideSelection, Units, View,
    Zone, ZoneGeometry, above_break_three_mask, classify, corner_three_mask, corner_three_rects, court_edges,
    extent, in_bounds_mask, paint_mask, paint_polygon, restricted_area_mask, restricted_area_polygon,
    three_point_arc_points, transform, transform_str, zone_counts,
};
pub use input::InputConvention;
pub use params::{CourtParameters, ParamValue, get_parameters, get_parameters_str};
