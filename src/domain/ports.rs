use crate::domain::model::{Classification, PackageMeasurement};

/// Anything that can place a validated package into a handling category.
pub trait Classify: Send + Sync {
    fn classify(&self, measurement: &PackageMeasurement) -> Classification;
}
