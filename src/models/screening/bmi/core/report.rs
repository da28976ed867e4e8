use std::fmt;

use jiff::civil::Date;
use uom::si::areal_mass_density::kilogram_per_square_meter;

use super::Assessment;

/// A shareable plain-text rendering of an assessment.
///
/// The date is supplied by the caller; this crate never reads the clock.
/// Persisting the text anywhere is likewise the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    assessment: Assessment,
    date: Date,
}

impl Report {
    /// Creates a report for an assessment made on the given date.
    #[must_use]
    pub fn new(assessment: Assessment, date: Date) -> Self {
        Self { assessment, date }
    }

    /// Suggested file name for a saved report, e.g.
    /// `bmi_result_2026-08-06.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("bmi_result_{}.txt", self.date)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bmi = self.assessment.bmi().get::<kilogram_per_square_meter>();
        writeln!(f, "BMI Result:")?;
        writeln!(f, "------------------")?;
        writeln!(f, "BMI: {bmi}")?;
        writeln!(f, "Category: {}", self.assessment.category())?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "------------------")?;
        writeln!(f, "Calculated using bodymetrics")
    }
}
