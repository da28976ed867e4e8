use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::Mass;

/// A person's body weight.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BodyWeight(Constrained<Mass, StrictlyPositive>);

impl BodyWeight {
    /// Create a [`BodyWeight`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::mass::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = Mass::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`BodyWeight`] from a quantity with mass units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Mass) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for BodyWeight {
    type Target = Mass;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
