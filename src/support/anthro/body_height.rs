use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::Length;

/// A person's standing height.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BodyHeight(Constrained<Length, StrictlyPositive>);

impl BodyHeight {
    /// Create a [`BodyHeight`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::length::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = Length::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`BodyHeight`] from a quantity with length units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Length) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for BodyHeight {
    type Target = Length;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::length::{centimeter, meter};

    use super::*;

    #[test]
    fn from_centimeters() -> ConstraintResult<()> {
        let height = BodyHeight::new::<centimeter>(175.0)?;

        assert_relative_eq!(height.get::<meter>(), 1.75);
        Ok(())
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        assert!(BodyHeight::new::<centimeter>(0.0).is_err());
        assert!(BodyHeight::new::<centimeter>(-160.0).is_err());
        assert!(BodyHeight::new::<centimeter>(f64::NAN).is_err());
    }
}
