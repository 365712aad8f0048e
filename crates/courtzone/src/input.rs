//! Provider coordinate conventions.
//!
//! Every convention is first brought to center-origin horizontal coordinates
//! with y pointing up, then placed into the target spec's frame.

use std::fmt;

use itertools::Itertools;

use crate::{
    error::{CourtError, Result, check_lengths},
    geometry::{spec::CourtSpec, types::Point},
};

/// How raw tracking coordinates are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputConvention {
    /// Center origin, court units; optionally with y pointing down
    Standard { left_handed: bool },
    /// Hawk-Eye: y points down, center or top-left origin
    Hawkeye { top_left_origin: bool },
    /// NBA stats feeds: percent of court length and width
    NbaPercent { left_handed: bool },
}

impl Default for InputConvention {
    fn default() -> Self {
        InputConvention::Standard { left_handed: true }
    }
}

const TOKENS: [&str; 6] = [
    "standard",
    "standard-rhcs",
    "hawkeye",
    "hawkeye-top-left",
    "nba",
    "nba-rhcs",
];

impl InputConvention {
    pub fn parse(token: &str) -> Result<Self> {
        let convention = match token.trim().to_ascii_lowercase().as_str() {
            "standard" => InputConvention::Standard { left_handed: true },
            "standard-rhcs" => InputConvention::Standard { left_handed: false },
            "hawkeye" => InputConvention::Hawkeye { top_left_origin: false },
            "hawkeye-top-left" => InputConvention::Hawkeye { top_left_origin: true },
            "nba" => InputConvention::NbaPercent { left_handed: true },
            "nba-rhcs" => InputConvention::NbaPercent { left_handed: false },
            _ => {
                let expected = TOKENS.iter().map(|t| t.to_string()).collect_vec();
                return Err(CourtError::invalid("input convention", token, &expected));
            }
        };
        Ok(convention)
    }

    /// Center-origin, horizontal, right-handed position of one raw sample
    fn standardize(self, x: f64, y: f64, (w, h): (f64, f64)) -> Point {
        match self {
            InputConvention::Standard { left_handed } => Point::new(x, if left_handed { -y } else { y }),
            InputConvention::Hawkeye { top_left_origin } => {
                let p = Point::new(x, -y);
                if top_left_origin {
                    Point::new(p.x - w / 2.0, p.y + h / 2.0)
                } else {
                    p
                }
            }
            InputConvention::NbaPercent { left_handed } => {
                let y = if left_handed { -y } else { y };
                Point::new(x / 100.0 * w - w / 2.0, y / 100.0 * h + h / 2.0)
            }
        }
    }

    /// Raw samples expressed in `spec`'s origin and orientation
    pub fn normalize(&self, x: &[f64], y: &[f64], spec: &CourtSpec) -> Result<(Vec<f64>, Vec<f64>)> {
        check_lengths(x, y)?;
        let dims = spec.dims();
        let c = spec.horizontal_center();
        log::debug!("normalizing {} points from {self} into {:?}", x.len(), spec);

        Ok(x.iter()
            .zip_eq(y)
            .map(|(&px, &py)| {
                let p = self.standardize(px, py, dims);
                let p = spec.to_working(Point::new(p.x + c.x, p.y + c.y));
                (p.x, p.y)
            })
            .unzip())
    }
}

impl fmt::Display for InputConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            InputConvention::Standard { left_handed: true } => TOKENS[0],
            InputConvention::Standard { left_handed: false } => TOKENS[1],
            InputConvention::Hawkeye { top_left_origin: false } => TOKENS[2],
            InputConvention::Hawkeye { top_left_origin: true } => TOKENS[3],
            InputConvention::NbaPercent { left_handed: true } => TOKENS[4],
            InputConvention::NbaPercent { left_handed: false } => TOKENS[5],
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::{League, Orientation, Origin, Units};

    fn center_h() -> CourtSpec {
        CourtSpec::new(League::Nba, Units::Feet, Origin::Center, Orientation::Horizontal)
    }

    #[test]
    fn test_parse_tokens() {
        for token in TOKENS {
            let convention = InputConvention::parse(token).unwrap();
            assert_eq!(convention.to_string(), token);
        }
        assert_eq!(
            InputConvention::parse(" Hawkeye-Top-Left ").unwrap(),
            InputConvention::Hawkeye { top_left_origin: true }
        );
        let err = InputConvention::parse("sportvu").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("nba-rhcs"));
    }

    #[test]
    fn test_standard_flips_left_handed_y() {
        let s = center_h();
        let (x, y) = InputConvention::Standard { left_handed: true }
            .normalize(&[10.0], &[5.0], &s)
            .unwrap();
        assert_eq!((x[0], y[0]), (10.0, -5.0));

        let (_, y) = InputConvention::Standard { left_handed: false }
            .normalize(&[10.0], &[5.0], &s)
            .unwrap();
        assert_eq!(y[0], 5.0);
    }

    #[test]
    fn test_hawkeye_top_left_origin() {
        let s = center_h();
        // top-left corner of the court maps to (-47, 25)
        let (x, y) = InputConvention::Hawkeye { top_left_origin: true }
            .normalize(&[0.0, 47.0], &[0.0, 25.0], &s)
            .unwrap();
        assert_eq!(x, vec![-47.0, 0.0]);
        assert_eq!(y, vec![25.0, 0.0]);
    }

    #[test]
    fn test_nba_percent() {
        let s = center_h();
        let (x, y) = InputConvention::NbaPercent { left_handed: true }
            .normalize(&[50.0, 0.0, 100.0], &[50.0, 0.0, 100.0], &s)
            .unwrap();
        assert_eq!(x, vec![0.0, -47.0, 47.0]);
        assert_eq!(y, vec![0.0, 25.0, -25.0]);
    }

    #[test]
    fn test_placed_into_spec_frame() {
        let tl = CourtSpec::new(League::Nba, Units::Feet, Origin::TopLeft, Orientation::Horizontal);
        let (x, y) = InputConvention::Standard { left_handed: false }
            .normalize(&[0.0], &[0.0], &tl)
            .unwrap();
        assert_eq!((x[0], y[0]), (47.0, -25.0));

        let v = tl.with_orientation(Orientation::Vertical);
        let (x, y) = InputConvention::Standard { left_handed: false }
            .normalize(&[-41.75], &[0.0], &v)
            .unwrap();
        // left hoop of a vertical court
        let (hoop, _) = v.hoop_centers();
        assert_eq!((x[0], y[0]), (hoop.x, hoop.y));
    }

    #[test]
    fn test_meters_use_meter_dims() {
        let s = CourtSpec::new(League::Fiba, Units::Meters, Origin::Center, Orientation::Horizontal);
        let (w, _) = s.dims();
        let (x, _) = InputConvention::NbaPercent { left_handed: false }
            .normalize(&[100.0], &[50.0], &s)
            .unwrap();
        assert!((x[0] - w / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_mismatch() {
        let err = InputConvention::default().normalize(&[1.0], &[], &center_h()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
