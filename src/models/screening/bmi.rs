//! Body mass index screening.
//!
//! BMI is a weight-to-height ratio used as a coarse health screening
//! metric. This model validates a person's height and weight, entered in
//! either [unit system](crate::support::anthro::UnitSystem), computes the
//! BMI value, and classifies it on the standard four-band ladder.
//!
//! The computational core is in the internal `core` module; this module
//! is the thin public adapter over it.
//!
//! # Example
//!
//! ```
//! use bodymetrics::models::screening::bmi::{self, Category, Readings};
//!
//! // Raw form text, straight from the user.
//! let readings = Readings::metric("175", "70");
//! let assessment = bmi::assess(&readings).expect("readings are valid");
//!
//! assert_eq!(assessment.category(), Category::NormalWeight);
//!
//! // Invalid input yields no result rather than an error.
//! assert!(bmi::assess(&Readings::metric("0", "70")).is_none());
//! ```

mod core;

pub use self::core::{
    Assessment, Category, Measurements, Reading, Readings, Report, Session, SessionState, assess,
};
