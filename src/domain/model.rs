use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the four measured quantities of a package.
///
/// The declaration order is the order in which validation inspects fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensions in centimeters and mass in kilograms.
///
/// Only [`PackageMeasurement::new`] and [`PackageMeasurement::parse`] build
/// one, so every field is strictly positive.
///
/// ```compile_fail
/// use package_sorter::PackageMeasurement;
///
/// let unchecked = PackageMeasurement { width: -200, height: -200, length: -200, mass: 5 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageMeasurement {
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) length: i64,
    pub(crate) mass: i64,
}

impl PackageMeasurement {
    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn mass(&self) -> i64 {
        self.mass
    }

    /// Product of the three dimensions, `None` when it does not fit in `u128`.
    pub fn volume(&self) -> Option<u128> {
        (self.width as u128)
            .checked_mul(self.height as u128)?
            .checked_mul(self.length as u128)
    }

    pub fn largest_dimension(&self) -> i64 {
        self.width.max(self.height).max(self.length)
    }
}

/// Handling category, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Standard,
    Special,
    Rejected,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Standard => "STANDARD",
            Classification::Special => "SPECIAL",
            Classification::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Classification::Standard),
            "SPECIAL" => Ok(Classification::Special),
            "REJECTED" => Ok(Classification::Rejected),
            other => Err(format!("unknown classification: {}", other)),
        }
    }
}

/// Everything the sorter derived for one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub measurement: PackageMeasurement,
    /// `null` in JSON when the product overflows.
    pub volume: Option<u128>,
    pub bulky: bool,
    pub heavy: bool,
    pub classification: Classification,
}
