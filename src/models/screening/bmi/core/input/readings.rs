use crate::support::{
    anthro::UnitSystem,
    constraint::{ConstraintError, ConstraintResult},
};

use super::{Measurements, Reading};

/// The raw form fields for one assessment, grouped by unit system.
///
/// Readings are unvalidated text; [`validate`](Readings::validate) turns
/// them into typed [`Measurements`] or reports why it can't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readings {
    /// Height in centimeters, weight in kilograms.
    Metric { height: Reading, weight: Reading },
    /// Height in feet and inches, weight in pounds.
    Imperial {
        feet: Reading,
        inches: Reading,
        weight: Reading,
    },
}

impl Readings {
    /// Creates an all-blank set of readings for the given system.
    #[must_use]
    pub fn empty(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self::Metric {
                height: Reading::default(),
                weight: Reading::default(),
            },
            UnitSystem::Imperial => Self::Imperial {
                feet: Reading::default(),
                inches: Reading::default(),
                weight: Reading::default(),
            },
        }
    }

    /// Creates metric readings from entered text.
    pub fn metric(height: impl Into<Reading>, weight: impl Into<Reading>) -> Self {
        Self::Metric {
            height: height.into(),
            weight: weight.into(),
        }
    }

    /// Creates imperial readings from entered text.
    pub fn imperial(
        feet: impl Into<Reading>,
        inches: impl Into<Reading>,
        weight: impl Into<Reading>,
    ) -> Self {
        Self::Imperial {
            feet: feet.into(),
            inches: inches.into(),
            weight: weight.into(),
        }
    }

    /// The unit system these readings belong to.
    #[must_use]
    pub fn system(&self) -> UnitSystem {
        match self {
            Self::Metric { .. } => UnitSystem::Metric,
            Self::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    /// True when every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Metric { height, weight } => height.is_blank() && weight.is_blank(),
            Self::Imperial {
                feet,
                inches,
                weight,
            } => feet.is_blank() && inches.is_blank() && weight.is_blank(),
        }
    }

    /// Validates the raw readings into typed [`Measurements`].
    ///
    /// A blank imperial inches field counts as zero; every other field is
    /// required and must parse as a finite number.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a required field is missing or unparseable
    /// ([`ConstraintError::NotANumber`]) or if a parsed value violates the
    /// measurement bounds.
    pub fn validate(&self) -> ConstraintResult<Measurements> {
        match self {
            Self::Metric { height, weight } => {
                Measurements::metric(required(height)?, required(weight)?)
            }
            Self::Imperial {
                feet,
                inches,
                weight,
            } => {
                let inches = if inches.is_blank() {
                    0.0
                } else {
                    required(inches)?
                };
                Measurements::imperial(required(feet)?, inches, required(weight)?)
            }
        }
    }
}

fn required(reading: &Reading) -> ConstraintResult<f64> {
    reading.value().ok_or(ConstraintError::NotANumber)
}
