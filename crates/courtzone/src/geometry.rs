pub mod grid;
pub mod masks;
pub mod spec;
pub mod transform;
pub mod types;
pub mod zones;

pub use grid::{Extent, court_edges, extent, in_bounds_mask};
pub use masks::{
    Zone, above_break_three_mask, classify, corner_three_mask, paint_mask, restricted_area_mask, zone_counts,
};
pub use spec::{CourtSpec, center_from_origin};
pub use transform::{transform, transform_in_units, transform_str};
pub use types::{League, Orientation, Origin, Point, Polygon, Polyline, Side, SideSelection, Units, View};
pub use zones::{
    ZoneGeometry, corner_three_rects, paint_polygon, restricted_area_polygon, restricted_area_polygon_with,
    three_point_arc_points, three_point_arc_points_with,
};
