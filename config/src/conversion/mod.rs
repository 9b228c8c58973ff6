//! Per-run conversion settings shared between the raster pipeline and the
//! command line.
//!
//! Values are plain arrays so that downstream crates pick their own vector
//! types. Every constructor validates its input; a `ConversionConfig` that
//! exists is always usable.

use std::fmt;

use crate::constants::{DEFAULT_ORIGIN, DEFAULT_X_UNIT, DEFAULT_Y_UNIT, DEFAULT_Z_UNIT};

/// Affine transform parameters and execution options for one conversion run.
///
/// # Examples
/// ```
/// use config::conversion::ConversionConfig;
/// let config = ConversionConfig::default();
/// assert_eq!(config.origin, [0.0, 0.0, 0.0]);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConfig {
    /// Grid position of the mesh origin.
    pub origin: [f64; 3],
    /// Grid-space image of the mesh X axis.
    pub x_unit: [f64; 3],
    /// Grid-space image of the mesh Y axis.
    pub y_unit: [f64; 3],
    /// Grid-space image of the mesh Z axis.
    pub z_unit: [f64; 3],
    /// Voxelize triangles on the rayon thread pool.
    pub parallel: bool,
}

impl ConversionConfig {
    /// Builds a configuration, rejecting NaN or infinite components.
    ///
    /// # Examples
    /// ```
    /// use config::conversion::ConversionConfig;
    /// let cfg = ConversionConfig::new(
    ///     [10.0, 64.0, 10.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    ///     [0.0, 1.0, 0.0],
    /// )
    /// .expect("valid config");
    /// assert_eq!(cfg.origin[1], 64.0);
    /// ```
    pub fn new(
        origin: [f64; 3],
        x_unit: [f64; 3],
        y_unit: [f64; 3],
        z_unit: [f64; 3],
    ) -> Result<Self, ConfigError> {
        check_finite("origin", origin)?;
        check_finite("x_unit", x_unit)?;
        check_finite("y_unit", y_unit)?;
        check_finite("z_unit", z_unit)?;
        Ok(Self {
            origin,
            x_unit,
            y_unit,
            z_unit,
            parallel: false,
        })
    }

    /// Returns a copy with parallel voxelization switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
            x_unit: DEFAULT_X_UNIT,
            y_unit: DEFAULT_Y_UNIT,
            z_unit: DEFAULT_Z_UNIT,
            parallel: false,
        }
    }
}

/// Parses a comma separated `x,y,z` triple as accepted on the command line.
///
/// Whitespace around each component is ignored.
///
/// # Examples
/// ```
/// use config::conversion::parse_vector3;
/// assert_eq!(parse_vector3("1, 0,-2.5").unwrap(), [1.0, 0.0, -2.5]);
/// assert!(parse_vector3("1,0").is_err());
/// ```
pub fn parse_vector3(text: &str) -> Result<[f64; 3], ConfigError> {
    let invalid = || ConfigError::InvalidVector(text.to_string());

    let mut components = [0.0; 3];
    let mut parts = text.split(',');
    for slot in &mut components {
        let part = parts.next().ok_or_else(invalid)?;
        *slot = part.trim().parse::<f64>().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(components)
}

fn check_finite(name: &'static str, vector: [f64; 3]) -> Result<(), ConfigError> {
    match vector.iter().find(|component| !component.is_finite()) {
        Some(&value) => Err(ConfigError::NonFinite { name, value }),
        None => Ok(()),
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a vector component is NaN or infinite.
    NonFinite {
        /// Which vector held the bad component.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Raised when a textual vector is not exactly three numbers.
    InvalidVector(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { name, value } => {
                write!(f, "{name} must have finite components: {value}")
            }
            ConfigError::InvalidVector(text) => {
                write!(f, "expected three comma separated numbers (x,y,z): {text:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
