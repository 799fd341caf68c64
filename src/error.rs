//! Error types
//!
//! Game outcomes (falling off a bridge) are not errors. These cover the two
//! places something can actually go wrong: bad tuning at startup and a
//! failing persistent store.

/// Rejected game configuration. Raised once at session construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field is NaN or infinite
    NonFinite(&'static str, f32),
    /// Stick growth rate must be > 0
    NonPositiveGrowthRate(f32),
    /// Maximum stick length must be > 0
    NonPositiveMaxStick(f32),
    /// A platform width bound (or the default width) is <= 0
    NonPositiveWidth(&'static str, f32),
    /// `min_width` exceeds `max_width`
    WidthRangeInverted { min: f32, max: f32 },
    /// `gap_min` exceeds `gap_max`, or `gap_min` is negative
    GapRangeInverted { min: f32, max: f32 },
    /// A duration, margin or magnitude is negative
    Negative(&'static str, f32),
    /// The tightest possible gap cannot hold a `min_width` platform
    UnreachableGap { available: f32, min_width: f32 },
    /// Config JSON failed to parse
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(name, v) => write!(f, "{} must be finite, got {}", name, v),
            Self::NonPositiveGrowthRate(v) => write!(f, "stick growth rate must be positive, got {}", v),
            Self::NonPositiveMaxStick(v) => write!(f, "max stick length must be positive, got {}", v),
            Self::NonPositiveWidth(name, v) => write!(f, "{} must be positive, got {}", name, v),
            Self::WidthRangeInverted { min, max } => {
                write!(f, "min platform width {} exceeds max width {}", min, max)
            }
            Self::GapRangeInverted { min, max } => write!(f, "invalid gap range [{}, {}]", min, max),
            Self::Negative(name, v) => write!(f, "{} must not be negative, got {}", name, v),
            Self::UnreachableGap { available, min_width } => write!(
                f,
                "smallest available gap {} cannot fit a platform of width {}",
                available, min_width
            ),
            Self::Parse(e) => write!(f, "config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Persistent store failures
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    Io(std::io::Error),
    /// Stored data was not valid JSON
    Corrupt(serde_json::Error),
    /// Backing storage is not reachable (e.g. LocalStorage disabled)
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store I/O error: {}", e),
            Self::Corrupt(e) => write!(f, "store data corrupt: {}", e),
            Self::Unavailable(e) => write!(f, "store unavailable: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(e) => Some(e),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Corrupt(e)
    }
}
