pub mod sorter;
pub mod validation;

pub use crate::domain::model::{Assessment, Classification, Field, PackageMeasurement};
pub use crate::domain::ports::Classify;
pub use sorter::{sort, PackageSorter, Thresholds};
pub use validation::ValidationError;
