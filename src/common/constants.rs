//! Application-wide constants and configuration defaults.

// # Application

pub const APP_DIR_NAME: &str = "suntable";
pub const CONFIG_FILE_NAME: &str = "suntable.toml";

pub const EXIT_FAILURE: i32 = 1;

// # Calendar range

/// Days shown before the center date (about six months)
pub const DEFAULT_DAYS_BEFORE: u32 = 182;
/// Days shown after the center date (about six months)
pub const DEFAULT_DAYS_AFTER: u32 = 183;
/// Upper bound for either side of the range
pub const MAXIMUM_DAYS_RANGE: u32 = 366;

/// Local hour used to seed each day's search
pub const CLOCK_NOON_HOUR: u32 = 12;

// # Coordinates

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

/// Placeholder written into a freshly generated config
pub const DEFAULT_LATITUDE: f64 = 0.0;
pub const DEFAULT_LONGITUDE: f64 = 0.0;

#[cfg(test)]
pub mod test_constants {
    pub const TEST_GREENWICH_LATITUDE: f64 = 51.4769;
    pub const TEST_GREENWICH_LONGITUDE: f64 = 0.0;
    pub const TEST_NYC_LATITUDE: f64 = 40.7128;
    pub const TEST_NYC_LONGITUDE: f64 = -74.006;
}
