use crate::{
    constants::{DEFAULT_ARC_SAMPLES, DEFAULT_THREE_POINT_SAMPLES, MIN_SAMPLES},
    error::{CourtError, Result},
    geometry::{
        spec::CourtSpec,
        types::{League, Orientation, Origin, Units},
    },
    input::InputConvention,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level settings shared by the binaries
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub court: CourtConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub zones: ZonesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CourtConfig {
    pub league: String,      // "nba" | "wnba" | "ncaa" | "fiba"
    pub units: String,       // "ft" | "m"
    pub origin: String,      // "center" | "top-left" | ...
    pub orientation: String, // "h" | "v"
}

impl Default for CourtConfig {
    fn default() -> Self {
        let spec = CourtSpec::default();
        Self {
            league: spec.league.to_string(),
            units: spec.units.to_string(),
            origin: spec.origin.to_string(),
            orientation: spec.orientation.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub convention: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            convention: InputConvention::default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZonesConfig {
    pub arc_samples: usize,
    pub three_point_samples: usize,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            arc_samples: DEFAULT_ARC_SAMPLES,
            three_point_samples: DEFAULT_THREE_POINT_SAMPLES,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CourtError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CourtError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.court_spec()?;
        self.input_convention()?;

        for (name, value) in [
            ("arc_samples", self.zones.arc_samples),
            ("three_point_samples", self.zones.three_point_samples),
        ] {
            if value < MIN_SAMPLES {
                return Err(CourtError::InvalidSampleCount {
                    field: name,
                    min: MIN_SAMPLES,
                    got: value,
                });
            }
        }
        Ok(())
    }

    pub fn court_spec(&self) -> Result<CourtSpec> {
        Ok(CourtSpec::new(
            League::parse(&self.court.league)?,
            Units::parse(&self.court.units)?,
            Origin::parse(&self.court.origin)?,
            Orientation::parse(&self.court.orientation)?,
        ))
    }

    pub fn input_convention(&self) -> Result<InputConvention> {
        InputConvention::parse(&self.input.convention)
    }
}
