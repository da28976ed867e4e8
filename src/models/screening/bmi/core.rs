//! BMI screening computation and domain logic.
//!
//! The engine is a pure function of its inputs: raw [`Readings`] validate
//! into typed [`Measurements`], which compute into an [`Assessment`] (a
//! rounded BMI value and its [`Category`]) or into nothing at all.
//! [`Session`] and [`Report`] are the two caller-side collaborators:
//! form state and export serialization.

mod assessment;
mod category;
mod input;
mod report;
mod session;

pub use assessment::Assessment;
pub use category::Category;
pub use input::{Measurements, Reading, Readings};
pub use report::Report;
pub use session::{Session, SessionState};

/// Computes a BMI assessment from raw form readings.
///
/// Returns `None` when a required reading is missing or unparseable, when
/// a parsed value violates the measurement bounds, or when the computed
/// value is not finite. Callers that need the specific rejection reason
/// validate through [`Readings::validate`] instead.
#[must_use]
pub fn assess(readings: &Readings) -> Option<Assessment> {
    let measurements = readings.validate().ok()?;
    Assessment::of(&measurements)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::areal_mass_density::kilogram_per_square_meter;

    use super::*;

    #[test]
    fn metric_readings_assess() {
        let assessment = assess(&Readings::metric("175", "70")).unwrap();

        assert_relative_eq!(assessment.bmi().get::<kilogram_per_square_meter>(), 22.9);
        assert_eq!(assessment.category(), Category::NormalWeight);
    }

    #[test]
    fn imperial_readings_assess() {
        let assessment = assess(&Readings::imperial("5", "10", "150")).unwrap();

        assert_relative_eq!(assessment.bmi().get::<kilogram_per_square_meter>(), 21.5);
        assert_eq!(assessment.category(), Category::NormalWeight);
    }

    #[test]
    fn invalid_readings_yield_nothing() {
        assert!(assess(&Readings::metric("0", "70")).is_none());
        assert!(assess(&Readings::metric("175", "abc")).is_none());
        assert!(assess(&Readings::imperial("0", "5", "150")).is_none());
        assert!(assess(&Readings::imperial("", "10", "150")).is_none());
    }

    #[test]
    fn blank_inches_default_to_zero() {
        let assessment = assess(&Readings::imperial("6", "", "180")).unwrap();

        assert_relative_eq!(assessment.bmi().get::<kilogram_per_square_meter>(), 24.4);
    }
}
