pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{OutputFormat, SorterConfig};
pub use crate::core::{
    sort, Assessment, Classification, Classify, Field, PackageMeasurement, PackageSorter,
    Thresholds, ValidationError,
};
pub use utils::error::{Result, SorterError};

#[cfg(feature = "cli")]
pub use config::CliConfig;
