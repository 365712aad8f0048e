/// unit conversion ft -> m
pub const FEET_TO_METERS: f64 = 0.3048;

/// Zone sampling
pub const DEFAULT_ARC_SAMPLES: usize = 128; // restricted-area semicircle
pub const DEFAULT_THREE_POINT_SAMPLES: usize = 256; // three-point arc
pub const MIN_SAMPLES: usize = 2;

/// Expected headers in point CSV files
pub const EXPECTED_X_HEADER: &str = "x";
pub const EXPECTED_Y_HEADER: &str = "y";
pub const ZONE_HEADER: &str = "zone";

/// Default config location for the binaries
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
