use crate::support::{
    anthro::{BodyHeight, BodyWeight, ImperialHeight, UnitSystem},
    constraint::ConstraintResult,
};
use uom::si::{length::centimeter, mass::{kilogram, pound}};

/// Validated measurements for one assessment.
///
/// Construction enforces the screening input contract: heights and
/// weights are strictly positive, and imperial inches are non-negative.
/// A `Measurements` value therefore always supports a computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurements {
    /// Height in centimeters, weight in kilograms.
    Metric {
        height: BodyHeight,
        weight: BodyWeight,
    },
    /// Height in feet and inches, weight in pounds.
    Imperial {
        height: ImperialHeight,
        weight: BodyWeight,
    },
}

impl Measurements {
    /// Creates metric measurements from centimeters and kilograms.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either value is not strictly positive.
    pub fn metric(height_cm: f64, weight_kg: f64) -> ConstraintResult<Self> {
        Ok(Self::Metric {
            height: BodyHeight::new::<centimeter>(height_cm)?,
            weight: BodyWeight::new::<kilogram>(weight_kg)?,
        })
    }

    /// Creates imperial measurements from feet, inches, and pounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if feet or weight is not strictly positive, or if
    /// inches is negative.
    pub fn imperial(feet: f64, inches: f64, weight_lbs: f64) -> ConstraintResult<Self> {
        Ok(Self::Imperial {
            height: ImperialHeight::new(feet, inches)?,
            weight: BodyWeight::new::<pound>(weight_lbs)?,
        })
    }

    /// The unit system these measurements were entered in.
    #[must_use]
    pub fn system(&self) -> UnitSystem {
        match self {
            Self::Metric { .. } => UnitSystem::Metric,
            Self::Imperial { .. } => UnitSystem::Imperial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_construction() -> ConstraintResult<()> {
        let measurements = Measurements::metric(175.0, 70.0)?;
        assert_eq!(measurements.system(), UnitSystem::Metric);
        Ok(())
    }

    #[test]
    fn imperial_construction() -> ConstraintResult<()> {
        let measurements = Measurements::imperial(5.0, 10.0, 150.0)?;
        assert_eq!(measurements.system(), UnitSystem::Imperial);
        Ok(())
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Measurements::metric(0.0, 70.0).is_err());
        assert!(Measurements::metric(175.0, -70.0).is_err());
        assert!(Measurements::imperial(0.0, 5.0, 150.0).is_err());
        assert!(Measurements::imperial(5.0, -1.0, 150.0).is_err());
        assert!(Measurements::imperial(5.0, 10.0, 0.0).is_err());
    }
}
