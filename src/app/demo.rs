use crate::app::format_volume;
use crate::core::sorter::PackageSorter;
use crate::domain::model::PackageMeasurement;
use std::io::Write;

pub const SAMPLE_PACKAGES: [(i64, i64, i64, i64, &str); 5] = [
    (10, 10, 10, 5, "Small standard package"),
    (100, 100, 100, 10, "Bulky package (1M cm³)"),
    (10, 10, 10, 25, "Heavy package (25 kg)"),
    (150, 10, 10, 20, "Rejected package (bulky + heavy)"),
    (149, 149, 149, 19, "Edge case package"),
];

/// Sorts every sample package and writes one block per package. A sample that
/// fails validation is reported in place and the demo carries on.
pub fn run_demo<W: Write>(sorter: &PackageSorter, out: &mut W) -> std::io::Result<()> {
    for (number, (width, height, length, mass, description)) in SAMPLE_PACKAGES.iter().enumerate() {
        let number = number + 1;
        match PackageMeasurement::new(*width, *height, *length, *mass) {
            Ok(measurement) => {
                let assessment = sorter.assess(&measurement);
                writeln!(out, "Package {}: {}", number, description)?;
                writeln!(
                    out,
                    "  Dimensions: {}×{}×{} cm (Volume: {} cm³)",
                    width,
                    height,
                    length,
                    format_volume(assessment.volume)
                )?;
                writeln!(out, "  Mass: {} kg", mass)?;
                writeln!(out, "  Result: {}", assessment.classification)?;
            }
            Err(e) => {
                tracing::warn!("Sample package {} failed validation: {}", number, e);
                writeln!(out, "Package {}: ERROR - {}", number, e)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
