use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

/// Inches per foot conversion factor.
const INCHES_PER_FOOT: f64 = 12.0;

/// A standing height entered as feet plus inches.
///
/// Feet must be strictly positive and inches non-negative, so a height
/// expressed in inches alone is not representable. Blank-inches handling
/// (treating a missing inches entry as zero) belongs to the form layer;
/// by the time a value reaches this type it is a number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ImperialHeight {
    feet: Constrained<f64, StrictlyPositive>,
    inches: Constrained<f64, NonNegative>,
}

impl ImperialHeight {
    /// Create an [`ImperialHeight`] from feet and inches.
    ///
    /// # Errors
    ///
    /// Returns `Err` if feet is not strictly positive or inches is
    /// negative or not a number (`NaN`).
    pub fn new(feet: f64, inches: f64) -> ConstraintResult<Self> {
        Ok(Self {
            feet: StrictlyPositive::new(feet)?,
            inches: NonNegative::new(inches)?,
        })
    }

    /// The feet component.
    #[must_use]
    pub fn feet(&self) -> f64 {
        self.feet.into_inner()
    }

    /// The inches component.
    #[must_use]
    pub fn inches(&self) -> f64 {
        self.inches.into_inner()
    }

    /// The full height expressed in inches.
    #[must_use]
    pub fn total_inches(&self) -> f64 {
        self.feet.into_inner() * INCHES_PER_FOOT + self.inches.into_inner()
    }
}
