use std::fmt;

use crate::support::units::BodyMassIndex;
use uom::si::areal_mass_density::kilogram_per_square_meter;

/// Lower bound of the normal-weight band, kg/m².
const NORMAL_FLOOR: f64 = 18.5;

/// Lower bound of the overweight band, kg/m².
const OVERWEIGHT_FLOOR: f64 = 25.0;

/// Lower bound of the obese band, kg/m².
const OBESE_FLOOR: f64 = 30.0;

/// A weight-status label on the standard adult screening ladder.
///
/// The four bands are ordered, half-open, and exhaustive: 18.5 reads as
/// normal weight, 25 as overweight, and 30 as obese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl Category {
    /// Classifies a BMI value.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the value is not finite. The engine only
    /// categorizes finite, rounded results.
    #[must_use]
    pub fn of(bmi: BodyMassIndex) -> Self {
        let bmi = bmi.get::<kilogram_per_square_meter>();
        debug_assert!(bmi.is_finite(), "BMI values must be finite to categorize");
        if bmi < NORMAL_FLOOR {
            Self::Underweight
        } else if bmi < OVERWEIGHT_FLOOR {
            Self::NormalWeight
        } else if bmi < OBESE_FLOOR {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// The user-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(value: f64) -> Category {
        Category::of(BodyMassIndex::new::<kilogram_per_square_meter>(value))
    }

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(category_of(18.4), Category::Underweight);
        assert_eq!(category_of(18.5), Category::NormalWeight);
        assert_eq!(category_of(24.9), Category::NormalWeight);
        assert_eq!(category_of(25.0), Category::Overweight);
        assert_eq!(category_of(29.9), Category::Overweight);
        assert_eq!(category_of(30.0), Category::Obese);
    }

    #[test]
    fn extremes() {
        assert_eq!(category_of(10.0), Category::Underweight);
        assert_eq!(category_of(55.0), Category::Obese);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::NormalWeight.to_string(), "Normal weight");
        assert_eq!(Category::Underweight.label(), "Underweight");
        assert_eq!(Category::Overweight.label(), "Overweight");
        assert_eq!(Category::Obese.label(), "Obese");
    }
}
