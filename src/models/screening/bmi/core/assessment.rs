use crate::support::units::BodyMassIndex;
use uom::si::{
    areal_mass_density::kilogram_per_square_meter,
    f64::{Length, Mass},
    mass::pound,
};

use super::{Category, Measurements};

/// Conversion factor for BMI computed from pounds and inches.
///
/// The screening convention rounds the exact unit conversion to 703.
const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// A computed BMI result: the value, rounded to one decimal place, and
/// its [`Category`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    bmi: BodyMassIndex,
    category: Category,
}

impl Assessment {
    /// Computes an assessment from validated measurements.
    ///
    /// Returns `None` if the computed value is not finite; there is no
    /// partial or sentinel result.
    #[must_use]
    pub fn of(measurements: &Measurements) -> Option<Self> {
        let raw = body_mass_index(measurements).get::<kilogram_per_square_meter>();
        if !raw.is_finite() {
            return None;
        }

        let bmi = BodyMassIndex::new::<kilogram_per_square_meter>(round_to_tenth(raw));
        Some(Self {
            bmi,
            category: Category::of(bmi),
        })
    }

    /// The BMI value, rounded to one decimal place.
    #[must_use]
    pub fn bmi(&self) -> BodyMassIndex {
        self.bmi
    }

    /// The weight category of the rounded value.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

fn body_mass_index(measurements: &Measurements) -> BodyMassIndex {
    match measurements {
        Measurements::Metric { height, weight } => {
            let height: Length = **height;
            let weight: Mass = **weight;
            weight / (height * height)
        }
        Measurements::Imperial { height, weight } => {
            let total_inches = height.total_inches();
            let pounds = weight.get::<pound>();
            BodyMassIndex::new::<kilogram_per_square_meter>(
                pounds / (total_inches * total_inches) * IMPERIAL_BMI_FACTOR,
            )
        }
    }
}

/// Rounds to one decimal place, halves away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{length::meter, mass::kilogram};

    use crate::support::{
        anthro::{BodyHeight, BodyWeight},
        constraint::ConstraintResult,
    };

    use super::*;

    fn bmi_of(assessment: &Assessment) -> f64 {
        assessment.bmi().get::<kilogram_per_square_meter>()
    }

    #[test]
    fn metric_normal_weight() -> ConstraintResult<()> {
        let measurements = Measurements::metric(175.0, 70.0)?;

        let assessment = Assessment::of(&measurements).unwrap();

        assert_relative_eq!(bmi_of(&assessment), 22.9);
        assert_eq!(assessment.category(), Category::NormalWeight);
        Ok(())
    }

    #[test]
    fn metric_obese() -> ConstraintResult<()> {
        let measurements = Measurements::metric(160.0, 90.0)?;

        let assessment = Assessment::of(&measurements).unwrap();

        assert_relative_eq!(bmi_of(&assessment), 35.2);
        assert_eq!(assessment.category(), Category::Obese);
        Ok(())
    }

    #[test]
    fn imperial_normal_weight() -> ConstraintResult<()> {
        let measurements = Measurements::imperial(5.0, 10.0, 150.0)?;

        let assessment = Assessment::of(&measurements).unwrap();

        assert_relative_eq!(bmi_of(&assessment), 21.5);
        assert_eq!(assessment.category(), Category::NormalWeight);
        Ok(())
    }

    #[test]
    fn imperial_zero_inches() -> ConstraintResult<()> {
        let measurements = Measurements::imperial(6.0, 0.0, 180.0)?;

        let assessment = Assessment::of(&measurements).unwrap();

        // 180 / 72^2 * 703
        assert_relative_eq!(bmi_of(&assessment), 24.4);
        assert_eq!(assessment.category(), Category::NormalWeight);
        Ok(())
    }

    #[test]
    fn rounds_halves_away_from_zero() -> ConstraintResult<()> {
        // 81 / 2^2 = 20.25 exactly.
        let measurements = Measurements::Metric {
            height: BodyHeight::new::<meter>(2.0)?,
            weight: BodyWeight::new::<kilogram>(81.0)?,
        };

        let assessment = Assessment::of(&measurements).unwrap();

        assert_relative_eq!(bmi_of(&assessment), 20.3);
        Ok(())
    }

    #[test]
    fn categorizes_the_rounded_value() -> ConstraintResult<()> {
        // 99.84 / 2^2 = 24.96, which rounds up across the overweight floor.
        let measurements = Measurements::Metric {
            height: BodyHeight::new::<meter>(2.0)?,
            weight: BodyWeight::new::<kilogram>(99.84)?,
        };

        let assessment = Assessment::of(&measurements).unwrap();

        assert_relative_eq!(bmi_of(&assessment), 25.0);
        assert_eq!(assessment.category(), Category::Overweight);
        Ok(())
    }

    #[test]
    fn non_finite_results_are_absent() -> ConstraintResult<()> {
        // Valid but absurd inputs that overflow the division.
        let measurements = Measurements::Metric {
            height: BodyHeight::new::<meter>(1e-154)?,
            weight: BodyWeight::new::<kilogram>(1e308)?,
        };

        assert!(Assessment::of(&measurements).is_none());
        Ok(())
    }
}
