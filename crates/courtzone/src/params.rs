use crate::{
    constants::FEET_TO_METERS,
    error::Result,
    geometry::types::{League, Units},
};

/// Court measurements for one league, in one unit system.
///
/// Lengths are in feet or meters; `three_point_arc_angle` is in degrees and
/// is never touched by unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtParameters {
    /// (length, width)
    pub court_dims: [f64; 2],
    // hoop area
    pub hoop_distance_from_edge: f64,
    pub hoop_radius: f64,
    // backboard
    pub backboard_distance_from_edge: f64,
    pub backboard_width: f64,
    pub backboard_height: f64,
    pub backboard_inner_rect_width: f64,
    pub backboard_inner_rect_height: f64,
    pub backboard_inner_rect_from_bottom: f64,
    // restricted area
    pub charge_circle_radius: f64,
    pub charge_circle_side_length: f64,
    // inbound lines
    pub inbound_line_distance_from_edge: f64,
    pub inbound_line_length: f64,
    pub outbound_line_distance_from_center: f64,
    pub outbound_line_length: f64,
    /// (depth from end line, width)
    pub outer_paint_dims: [f64; 2],
    pub inner_paint_dims: [f64; 2],
    // center circle
    pub outer_circle_radius: f64,
    pub inner_circle_radius: f64,
    // three point area
    pub three_point_arc_angle: f64,
    pub three_point_arc_diameter: f64,
    pub three_point_line_length: f64,
    pub three_point_side_width: f64,
    pub hoop_height: f64,
}

/// A single named measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Length(f64),
    Pair([f64; 2]),
    /// degrees
    Angle(f64),
}

const NBA: CourtParameters = CourtParameters {
    court_dims: [94.0, 50.0],
    hoop_distance_from_edge: 5.25,
    hoop_radius: 0.75,
    backboard_distance_from_edge: 4.0,
    backboard_width: 6.0,
    backboard_height: 3.5,
    backboard_inner_rect_width: 2.0,
    backboard_inner_rect_height: 1.5,
    backboard_inner_rect_from_bottom: 1.0,
    charge_circle_radius: 4.0,
    charge_circle_side_length: 3.0,
    inbound_line_distance_from_edge: 28.0,
    inbound_line_length: 3.0,
    outbound_line_distance_from_center: 4.0 + 1.0 / 12.0,
    outbound_line_length: 4.0,
    outer_paint_dims: [18.0 + 5.0 / 6.0, 16.0 - 1.0 / 3.0],
    inner_paint_dims: [18.0 + 5.0 / 6.0, 12.0 - 1.0 / 3.0],
    outer_circle_radius: 6.0,
    inner_circle_radius: 2.0,
    three_point_arc_angle: 68.13,
    three_point_arc_diameter: 47.5,
    three_point_line_length: 14.0,
    three_point_side_width: 3.0,
    hoop_height: 10.0,
};

const WNBA: CourtParameters = CourtParameters {
    three_point_arc_angle: 83.51692630710276,
    three_point_arc_diameter: 44.365,
    three_point_line_length: 7.75,
    ..NBA
};

const NCAA: CourtParameters = CourtParameters {
    outer_paint_dims: [18.0 + 5.0 / 6.0, 12.0 - 1.0 / 3.0],
    inner_circle_radius: 6.0,
    three_point_arc_angle: 78.95,
    three_point_arc_diameter: 44.218,
    three_point_line_length: 9.4,
    three_point_side_width: 3.34375,
    ..NBA
};

const FIBA: CourtParameters = CourtParameters {
    court_dims: [91.8635, 49.2126],
    hoop_distance_from_edge: 5.167,
    backboard_distance_from_edge: 3.937,
    charge_circle_radius: 3.94,
    inbound_line_distance_from_edge: 27.32,
    outbound_line_distance_from_center: 3.9685 + 1.0 / 12.0,
    outer_paint_dims: [18.0289 + 5.0 / 6.0, 16.08 - 1.0 / 3.0],
    inner_paint_dims: [18.0289 + 5.0 / 6.0, 12.0 - 1.0 / 3.0],
    outer_circle_radius: 5.90551,
    inner_circle_radius: 5.90551,
    three_point_arc_angle: 78.9,
    three_point_arc_diameter: 44.218,
    three_point_line_length: 9.4,
    three_point_side_width: 2.953,
    ..NBA
};

impl League {
    /// Base table in feet
    pub fn base_parameters(self) -> &'static CourtParameters {
        match self {
            League::Nba => &NBA,
            League::Wnba => &WNBA,
            League::Ncaa => &NCAA,
            League::Fiba => &FIBA,
        }
    }
}

impl Units {
    /// Multiplier from the feet tables
    pub fn factor(self) -> f64 {
        match self {
            Units::Feet => 1.0,
            Units::Meters => FEET_TO_METERS,
        }
    }
}

/// Parameter table for `league` in `units`
pub fn get_parameters(league: League, units: Units) -> CourtParameters {
    log::debug!("loading {league} court parameters in {units}");
    league.base_parameters().scaled(units.factor())
}

/// `get_parameters` from string tokens ("nba", "ft", ...)
pub fn get_parameters_str(league: &str, units: &str) -> Result<CourtParameters> {
    Ok(get_parameters(League::parse(league)?, Units::parse(units)?))
}

impl CourtParameters {
    /// Every length and pair field multiplied by `factor`; angles pass through.
    pub fn scaled(&self, factor: f64) -> Self {
        let pair = |p: [f64; 2]| [p[0] * factor, p[1] * factor];
        Self {
            court_dims: pair(self.court_dims),
            hoop_distance_from_edge: self.hoop_distance_from_edge * factor,
            hoop_radius: self.hoop_radius * factor,
            backboard_distance_from_edge: self.backboard_distance_from_edge * factor,
            backboard_width: self.backboard_width * factor,
            backboard_height: self.backboard_height * factor,
            backboard_inner_rect_width: self.backboard_inner_rect_width * factor,
            backboard_inner_rect_height: self.backboard_inner_rect_height * factor,
            backboard_inner_rect_from_bottom: self.backboard_inner_rect_from_bottom * factor,
            charge_circle_radius: self.charge_circle_radius * factor,
            charge_circle_side_length: self.charge_circle_side_length * factor,
            inbound_line_distance_from_edge: self.inbound_line_distance_from_edge * factor,
            inbound_line_length: self.inbound_line_length * factor,
            outbound_line_distance_from_center: self.outbound_line_distance_from_center * factor,
            outbound_line_length: self.outbound_line_length * factor,
            outer_paint_dims: pair(self.outer_paint_dims),
            inner_paint_dims: pair(self.inner_paint_dims),
            outer_circle_radius: self.outer_circle_radius * factor,
            inner_circle_radius: self.inner_circle_radius * factor,
            three_point_arc_angle: self.three_point_arc_angle,
            three_point_arc_diameter: self.three_point_arc_diameter * factor,
            three_point_line_length: self.three_point_line_length * factor,
            three_point_side_width: self.three_point_side_width * factor,
            hoop_height: self.hoop_height * factor,
        }
    }

    /// Named view of the table, in declaration order
    pub fn entries(&self) -> Vec<(&'static str, ParamValue)> {
        use ParamValue::*;
        vec![
            ("court_dims", Pair(self.court_dims)),
            ("hoop_distance_from_edge", Length(self.hoop_distance_from_edge)),
            ("hoop_radius", Length(self.hoop_radius)),
            ("backboard_distance_from_edge", Length(self.backboard_distance_from_edge)),
            ("backboard_width", Length(self.backboard_width)),
            ("backboard_height", Length(self.backboard_height)),
            ("backboard_inner_rect_width", Length(self.backboard_inner_rect_width)),
            ("backboard_inner_rect_height", Length(self.backboard_inner_rect_height)),
            ("backboard_inner_rect_from_bottom", Length(self.backboard_inner_rect_from_bottom)),
            ("charge_circle_radius", Length(self.charge_circle_radius)),
            ("charge_circle_side_length", Length(self.charge_circle_side_length)),
            ("inbound_line_distance_from_edge", Length(self.inbound_line_distance_from_edge)),
            ("inbound_line_length", Length(self.inbound_line_length)),
            ("outbound_line_distance_from_center", Length(self.outbound_line_distance_from_center)),
            ("outbound_line_length", Length(self.outbound_line_length)),
            ("outer_paint_dims", Pair(self.outer_paint_dims)),
            ("inner_paint_dims", Pair(self.inner_paint_dims)),
            ("outer_circle_radius", Length(self.outer_circle_radius)),
            ("inner_circle_radius", Length(self.inner_circle_radius)),
            ("three_point_arc_angle", Angle(self.three_point_arc_angle)),
            ("three_point_arc_diameter", Length(self.three_point_arc_diameter)),
            ("three_point_line_length", Length(self.three_point_line_length)),
            ("three_point_side_width", Length(self.three_point_side_width)),
            ("hoop_height", Length(self.hoop_height)),
        ]
    }

    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.entries()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    pub fn three_point_radius(&self) -> f64 {
        self.three_point_arc_diameter / 2.0
    }
}
