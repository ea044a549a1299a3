use crate::core::validation::ValidationError;
use crate::domain::model::{Assessment, Classification, PackageMeasurement};
use crate::domain::ports::Classify;
use crate::utils::error::Result;
use crate::utils::validation::{validate_minimum, Validate};

pub const BULKY_VOLUME_CM3: u64 = 1_000_000;
pub const BULKY_DIMENSION_CM: i64 = 150;
pub const HEAVY_MASS_KG: i64 = 20;

/// Inclusive limits: reaching a limit exactly counts as exceeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub bulky_volume: u64,
    pub bulky_dimension: i64,
    pub heavy_mass: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bulky_volume: BULKY_VOLUME_CM3,
            bulky_dimension: BULKY_DIMENSION_CM,
            heavy_mass: HEAVY_MASS_KG,
        }
    }
}

impl Validate for Thresholds {
    fn validate(&self) -> Result<()> {
        validate_minimum("thresholds.bulky_volume", self.bulky_volume, 1)?;
        validate_minimum("thresholds.bulky_dimension", self.bulky_dimension, 1)?;
        validate_minimum("thresholds.heavy_mass", self.heavy_mass, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageSorter {
    thresholds: Thresholds,
}

impl PackageSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any threshold below 1.
    pub fn with_thresholds(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn is_bulky(&self, measurement: &PackageMeasurement) -> bool {
        let bulky_by_volume = measurement
            .volume()
            .map_or(true, |volume| volume >= u128::from(self.thresholds.bulky_volume));
        bulky_by_volume || measurement.largest_dimension() >= self.thresholds.bulky_dimension
    }

    pub fn is_heavy(&self, measurement: &PackageMeasurement) -> bool {
        measurement.mass() >= self.thresholds.heavy_mass
    }

    pub fn assess(&self, measurement: &PackageMeasurement) -> Assessment {
        let bulky = self.is_bulky(measurement);
        let heavy = self.is_heavy(measurement);
        let classification = match (bulky, heavy) {
            (true, true) => Classification::Rejected,
            (true, false) | (false, true) => Classification::Special,
            (false, false) => Classification::Standard,
        };

        let assessment = Assessment {
            measurement: *measurement,
            volume: measurement.volume(),
            bulky,
            heavy,
            classification,
        };
        tracing::debug!(?assessment, "package assessed");
        assessment
    }

    /// Validates raw values and classifies them in one step.
    pub fn sort(
        &self,
        width: i64,
        height: i64,
        length: i64,
        mass: i64,
    ) -> std::result::Result<Classification, ValidationError> {
        let measurement = PackageMeasurement::new(width, height, length, mass)?;
        Ok(self.classify(&measurement))
    }
}

impl Classify for PackageSorter {
    fn classify(&self, measurement: &PackageMeasurement) -> Classification {
        self.assess(measurement).classification
    }
}

/// Classifies a package against the standard thresholds.
///
/// ```
/// use package_sorter::{sort, Classification};
///
/// assert_eq!(sort(10, 10, 10, 5), Ok(Classification::Standard));
/// assert_eq!(sort(150, 10, 10, 20), Ok(Classification::Rejected));
/// assert!(sort(0, 10, 10, 5).is_err());
/// ```
pub fn sort(
    width: i64,
    height: i64,
    length: i64,
    mass: i64,
) -> std::result::Result<Classification, ValidationError> {
    PackageSorter::new().sort(width, height, length, mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        // bulky by dimension, bulky by volume, heavy, both, neither
        assert_eq!(sort(150, 10, 10, 5), Ok(Classification::Special));
        assert_eq!(sort(100, 100, 100, 10), Ok(Classification::Special));
        assert_eq!(sort(10, 10, 10, 20), Ok(Classification::Special));
        assert_eq!(sort(150, 10, 10, 20), Ok(Classification::Rejected));
        assert_eq!(sort(100, 100, 100, 20), Ok(Classification::Rejected));
        assert_eq!(sort(10, 10, 10, 5), Ok(Classification::Standard));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let sorter = PackageSorter::new();
        let at_volume = PackageMeasurement::new(100, 100, 100, 1).unwrap();
        let under_volume = PackageMeasurement::new(100, 100, 99, 1).unwrap();
        assert!(sorter.is_bulky(&at_volume));
        assert!(!sorter.is_bulky(&under_volume));

        for dims in [(150, 1, 1), (1, 150, 1), (1, 1, 150)] {
            let m = PackageMeasurement::new(dims.0, dims.1, dims.2, 1).unwrap();
            assert!(sorter.is_bulky(&m), "{:?} should be bulky", dims);
        }
        let m = PackageMeasurement::new(149, 1, 1, 1).unwrap();
        assert!(!sorter.is_bulky(&m));

        assert!(sorter.is_heavy(&PackageMeasurement::new(1, 1, 1, 20).unwrap()));
        assert!(!sorter.is_heavy(&PackageMeasurement::new(1, 1, 1, 19).unwrap()));
    }

    #[test]
    fn test_assess_reports_predicates() {
        let m = PackageMeasurement::new(200, 200, 200, 10).unwrap();
        let assessment = PackageSorter::new().assess(&m);
        assert_eq!(assessment.volume, Some(8_000_000));
        assert!(assessment.bulky);
        assert!(!assessment.heavy);
        assert_eq!(assessment.classification, Classification::Special);
    }

    #[test]
    fn test_custom_thresholds() {
        let sorter = PackageSorter::with_thresholds(Thresholds {
            bulky_volume: 500,
            bulky_dimension: 50,
            heavy_mass: 5,
        })
        .unwrap();
        assert_eq!(sorter.sort(10, 10, 5, 4), Ok(Classification::Special));
        assert_eq!(sorter.sort(10, 10, 4, 4), Ok(Classification::Standard));
        assert_eq!(sorter.sort(50, 1, 1, 5), Ok(Classification::Rejected));
    }

    #[test]
    fn test_non_positive_thresholds_are_refused() {
        let result = PackageSorter::with_thresholds(Thresholds {
            bulky_volume: 0,
            bulky_dimension: -1,
            heavy_mass: 0,
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("thresholds.bulky_volume"));

        let result = PackageSorter::with_thresholds(Thresholds {
            heavy_mass: 0,
            ..Thresholds::default()
        });
        assert!(result.is_err());

        assert!(PackageSorter::with_thresholds(Thresholds::default()).is_ok());
    }

    #[test]
    fn test_overflowing_volume_is_bulky_and_serializes_as_null() {
        let m = PackageMeasurement::new(i64::MAX, i64::MAX, i64::MAX, 1).unwrap();
        let assessment = PackageSorter::new().assess(&m);
        assert_eq!(assessment.volume, None);
        assert!(assessment.bulky);
        assert_eq!(assessment.classification, Classification::Special);

        let json = serde_json::to_value(assessment).unwrap();
        assert!(json["volume"].is_null());
        assert_eq!(json["width"], i64::MAX);
        assert_eq!(json["classification"], "SPECIAL");
    }

    #[test]
    fn test_invalid_input_never_classifies() {
        assert!(sort(0, 10, 10, 5).is_err());
        assert!(sort(10, -5, 10, 5).is_err());
        assert!(sort(10, 10, 0, 5).is_err());
        assert!(sort(10, 10, 10, -1).is_err());
    }

    #[test]
    fn test_extreme_dimensions_are_rejected_not_overflowed() {
        assert_eq!(
            sort(i64::MAX, i64::MAX, i64::MAX, i64::MAX),
            Ok(Classification::Rejected)
        );
        assert_eq!(
            sort(1_000_000, 1_000_000, 1_000_000, 1),
            Ok(Classification::Special)
        );
    }
}
